//! Tripboard App
//!
//! Composes the board with its collaborator boundaries: the map/places
//! widget mounts into the map pane and publishes resolved places into
//! `place_selection`; the identity collaborator supplies the owner email
//! (here read from the URL query so the board stays auth-agnostic).

use leptos::prelude::*;
use leptos::task::spawn_local;

use itinerary_core::Partition;

use crate::api;
use crate::components::{AddPlacePanel, BoardSurface};
use crate::context::{BoardContext, TripIdentity};

fn identity_from_url() -> TripIdentity {
    let query = web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    let params = web_sys::UrlSearchParams::new_with_str(&query).ok();
    let get = |key: &str| params.as_ref().and_then(|p| p.get(key));
    TripIdentity {
        email: get("email").unwrap_or_else(|| "guest".to_string()),
        trip_id: get("tripID"),
    }
}

#[component]
pub fn App() -> impl IntoView {
    let board = BoardContext::new(identity_from_url());

    // Pull the saved partition before the board becomes interactive. A trip
    // with no saved data gets the seeded default column; a failed load
    // leaves an empty board that is still usable locally.
    Effect::new(move |_| {
        let identity = board.trip.get_value();
        spawn_local(async move {
            match api::fetch_itinerary(&identity.email, identity.trip_id.as_deref()).await {
                Ok(Some(partition)) => board.partition.set(partition),
                Ok(None) => board.partition.set(Partition::seeded()),
                Err(e) => {
                    web_sys::console::error_1(&format!("[SYNC] Load failed: {e}").into());
                }
            }
        });
    });

    view! {
        <div class="app-layout">
            <div class=move || {
                if board.expanded.get() { "board-pane expanded" } else { "board-pane" }
            }>
                <BoardSurface board=board />
            </div>

            <div class=move || {
                if board.expanded.get() { "map-pane collapsed" } else { "map-pane" }
            }>
                // The map / place-search collaborator renders into this slot
                // and feeds `board.place_selection`.
                <div id="map-slot"></div>
                <AddPlacePanel board=board />
            </div>
        </div>
    }
}
