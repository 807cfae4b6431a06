//! Board State Handle
//!
//! All board state lives in signals owned by the `App` component and is
//! passed down to every component as an explicit `BoardContext` handle, so
//! two boards mounted side by side can never share state by accident.

use leptos::prelude::*;

use itinerary_core::{Partition, PlaceSelection};

/// Owner and trip identity for the sync layer. Supplied by the caller
/// (auth/session collaborator); the board never validates it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TripIdentity {
    pub email: String,
    /// Absent in single-trip mode.
    pub trip_id: Option<String>,
}

/// Copyable handle to the board's state signals
#[derive(Clone, Copy)]
pub struct BoardContext {
    /// The itinerary partition - the single source of truth for the board
    pub partition: RwSignal<Partition>,
    /// Place resolved by the map/places collaborator, if any
    pub place_selection: RwSignal<Option<PlaceSelection>>,
    /// Expand/collapse display mode for the board pane
    pub expanded: RwSignal<bool>,
    /// Owner + trip identity for load/save
    pub trip: StoredValue<TripIdentity>,
}

impl BoardContext {
    pub fn new(identity: TripIdentity) -> Self {
        Self {
            partition: RwSignal::new(Partition::new()),
            place_selection: RwSignal::new(None),
            expanded: RwSignal::new(false),
            trip: StoredValue::new(identity),
        }
    }

    pub fn toggle_expanded(&self) {
        self.expanded.update(|v| *v = !*v);
    }

    /// Hand a card's place back to the map collaborator (pin on map).
    pub fn pin_place(&self, place: PlaceSelection) {
        self.place_selection.set(Some(place));
    }
}

/// Blocking notice for validation errors (duplicate column names and the
/// unrenamed placeholder column).
pub fn alert(message: &str) {
    if let Some(win) = web_sys::window() {
        let _ = win.alert_with_message(message);
    }
}
