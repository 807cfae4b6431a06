//! Board Surface Component
//!
//! Renders one column per partition entry in display order, wires the
//! pointer layer into the drag state machine, and carries the side function
//! bar (expand/collapse, add column, save) plus the floating drag preview.

use leptos::prelude::*;
use leptos::task::spawn_local;

use itinerary_core::drag::{DragController, DragEvent, DragTarget};
use itinerary_core::wire::SaveRequest;
use itinerary_core::PENDING_COLUMN_NAME;
use leptos_dragdrop::*;

use crate::api;
use crate::components::ItineraryColumn;
use crate::context::{alert, BoardContext};

/// Map a pointer-layer target onto the partition's vocabulary. Columns are
/// carried by name, so a target recorded mid-gesture never shifts onto a
/// neighbor; the state machine drops names that no longer resolve.
fn resolve_target(target: DropTarget) -> DragTarget {
    match target {
        DropTarget::Card(id) => DragTarget::Card(id),
        DropTarget::Column(name) => DragTarget::Column(name),
    }
}

#[component]
pub fn BoardSurface(board: BoardContext) -> impl IntoView {
    let dnd = create_dnd_signals();
    let controller = StoredValue::new(DragController::new());

    // All gesture events funnel through here, strictly in delivery order.
    let dispatch = move |event: DragEvent| {
        board.partition.update(|partition| {
            controller.update_value(|c| c.handle(partition, event));
        });
    };

    // Pointer layer -> state machine: drag start
    Effect::new(move |_| {
        if let Some(card_id) = dnd.dragging_id_read.get() {
            if controller.with_value(|c| !c.is_dragging()) {
                dispatch(DragEvent::Start { card_id });
            }
        }
    });

    // Pointer layer -> state machine: hover (eager cross-column phase)
    Effect::new(move |_| {
        let target = dnd.drop_target_read.get();
        if dnd.dragging_id_read.get_untracked().is_some() {
            dispatch(DragEvent::Over { target: target.map(resolve_target) });
        }
    });

    // Pointer layer -> state machine: drop (settling phase)
    bind_global_mouseup(dnd, move |_card_id, target| {
        dispatch(DragEvent::End { target: target.map(resolve_target) });
    });

    let columns = move || {
        board.partition.with(|p| {
            p.column_names().map(str::to_string).collect::<Vec<_>>()
        })
    };

    let on_expand = move |_| board.toggle_expanded();

    let on_add_column = move |_| {
        let mut add_err = None;
        board.partition.update(|p| {
            if let Err(e) = p.add_column(PENDING_COLUMN_NAME) {
                add_err = Some(e);
            }
        });
        if let Some(e) = add_err {
            alert(&e.to_string());
        }
    };

    let on_save = move |_| {
        // Snapshot at invocation; edits made while the request is in
        // flight are not re-captured.
        let data = board.partition.get_untracked();
        let identity = board.trip.get_value();
        spawn_local(async move {
            let request = SaveRequest {
                email: identity.email,
                trip_id: identity.trip_id,
                trip_name: None,
                description: None,
                data,
            };
            match api::save_itinerary(&request).await {
                Ok(()) => web_sys::console::log_1(&"[SYNC] Itinerary saved".into()),
                Err(e) => {
                    web_sys::console::error_1(&format!("[SYNC] Save failed: {e}").into());
                }
            }
        });
    };

    // Floating preview of the dragged card, following the pointer.
    let overlay_card = move || {
        dnd.dragging_id_read
            .get()
            .and_then(|id| board.partition.with(|p| p.card(id).cloned()))
    };

    view! {
        <div class="board-wrapper">
            <div class="board-columns">
                <For
                    each=columns
                    key=|name| name.clone()
                    children=move |name| {
                        view! { <ItineraryColumn board=board dnd=dnd name=name /> }
                    }
                />
            </div>

            {move || overlay_card().map(|card| {
                let style = move || {
                    format!(
                        "left: {}px; top: {}px;",
                        dnd.pointer_x_read.get() + 8,
                        dnd.pointer_y_read.get() + 8
                    )
                };
                view! {
                    <div class="drag-overlay" style=style>
                        <div class="drag-overlay-card">{card.name.clone()}</div>
                    </div>
                }
            })}

            // Side function bar: full screen, add column, save
            <div class="board-function-bar">
                <button class="board-fn-btn" title="Toggle full screen" on:click=on_expand>
                    {move || if board.expanded.get() { "\u{2924}" } else { "\u{2922}" }}
                </button>
                <button class="board-fn-btn" title="Add a column" on:click=on_add_column>"+"</button>
                <button class="board-fn-btn" title="Save itinerary" on:click=on_save>{"\u{2913}"}</button>
            </div>
        </div>
    }
}
