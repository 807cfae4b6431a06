//! Itinerary Column Component
//!
//! One day of the trip: an editable header and the ordered card list.
//! The column body is a drop target so cards can join it even when it is
//! empty.

use leptos::prelude::*;

use itinerary_core::Card;
use leptos_dragdrop::*;

use crate::components::{EditableColumnName, PlaceCard};
use crate::context::BoardContext;

#[component]
pub fn ItineraryColumn(board: BoardContext, dnd: DndSignals, name: String) -> impl IntoView {
    let column_name = StoredValue::new(name.clone());

    let on_mouseenter = make_on_column_mouseenter(dnd, name.clone());

    let cards = move || {
        board.partition.with(|p| {
            p.cards(&column_name.get_value())
                .map(<[Card]>::to_vec)
                .unwrap_or_default()
        })
    };

    let on_delete = move |_| {
        let target = column_name.get_value();
        board.partition.update(|p| {
            if p.delete_column(&target).is_err() {
                web_sys::console::warn_1(&format!("[BOARD] Column `{target}` already gone").into());
            }
        });
    };

    let is_drop_target = move || {
        matches!(
            dnd.drop_target_read.get(),
            Some(DropTarget::Column(n)) if n == column_name.get_value()
        )
    };

    let column_class = move || {
        let mut c = String::from("itinerary-column");
        if is_drop_target() {
            c.push_str(" drop-target");
        }
        c
    };

    view! {
        <div class=column_class on:mouseenter=on_mouseenter>
            <div class="column-header">
                <EditableColumnName board=board name=name.clone() />
                <button class="column-delete-btn" title="Delete column" on:click=on_delete>
                    {"\u{2715}"}
                </button>
            </div>

            <div class="column-cards">
                <For
                    each=cards
                    key=|card| card.id
                    children=move |card| {
                        view! { <PlaceCard board=board dnd=dnd card=card /> }
                    }
                />

                {move || if cards().is_empty() {
                    view! { <p class="column-empty">"Add or drag a site here"</p> }.into_any()
                } else {
                    view! { <div></div> }.into_any()
                }}
            </div>
        </div>
    }
}
