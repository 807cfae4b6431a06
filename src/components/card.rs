//! Place Card Component
//!
//! A single place in the itinerary: thumbnail, name, pin-on-map and delete
//! actions, a drag handle, and arrow-key reordering for keyboard users.

use leptos::prelude::*;

use itinerary_core::Card;
use leptos_dragdrop::*;

use crate::context::BoardContext;

#[component]
pub fn PlaceCard(board: BoardContext, dnd: DndSignals, card: Card) -> impl IntoView {
    let id = card.id;

    let on_mousedown = make_on_mousedown(dnd, id);
    let on_mouseenter = make_on_card_mouseenter(dnd, id);
    let on_mouseleave = make_on_mouseleave(dnd);

    let is_dragging = move || dnd.dragging_id_read.get() == Some(id);
    let is_drop_target = move || {
        matches!(dnd.drop_target_read.get(), Some(DropTarget::Card(cid)) if cid == id)
    };

    let card_class = move || {
        let mut c = String::from("place-card");
        if is_dragging() {
            c.push_str(" dragging");
        }
        if is_drop_target() {
            c.push_str(" drop-target");
        }
        c
    };

    // Republish the card's place to the map collaborator.
    let pin = StoredValue::new(card.to_selection());
    let on_pin = move |_| board.pin_place(pin.get_value());

    let on_delete = move |_| {
        board.partition.update(|p| {
            p.delete_card(id);
        });
    };

    // Basic keyboard operability: up/down reorder within the column,
    // left/right move to the neighbor column.
    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        let key = ev.key();
        let vertical = match key.as_str() {
            "ArrowUp" => Some(-1i32),
            "ArrowDown" => Some(1i32),
            _ => None,
        };
        let horizontal = match key.as_str() {
            "ArrowLeft" => Some(-1i32),
            "ArrowRight" => Some(1i32),
            _ => None,
        };
        if vertical.is_none() && horizontal.is_none() {
            return;
        }
        ev.prevent_default();

        board.partition.update(|p| {
            let Some(column) = p.column_of(id).map(str::to_string) else {
                return;
            };
            if let Some(step) = vertical {
                let Some(from) = p.index_of_card(&column, id) else {
                    return;
                };
                let len = p.cards(&column).map_or(0, <[Card]>::len) as i32;
                let to = from as i32 + step;
                if (0..len).contains(&to) {
                    let _ = p.move_card_within_column(&column, from, to as usize);
                }
            } else if let Some(step) = horizontal {
                let names: Vec<String> = p.column_names().map(str::to_string).collect();
                let Some(position) = names.iter().position(|n| *n == column) else {
                    return;
                };
                let neighbor = position as i32 + step;
                if (0..names.len() as i32).contains(&neighbor) {
                    let _ =
                        p.move_card_across_columns(id, &column, &names[neighbor as usize], None);
                }
            }
        });
    };

    view! {
        <div
            class=card_class
            tabindex="0"
            on:mouseenter=on_mouseenter
            on:mouseleave=on_mouseleave
            on:keydown=on_keydown
        >
            {card.thumbnail.clone().map(|url| view! {
                <img class="place-card-thumb" src=url />
            })}

            <span class="place-card-name" title=card.name.clone()>{card.name.clone()}</span>

            <div class="place-card-actions">
                <button class="place-card-btn" title="Pin on map" on:click=on_pin>
                    {"\u{25CE}"}
                </button>
                <button class="place-card-btn" title="Delete" on:click=on_delete>
                    {"\u{2715}"}
                </button>
                <span class="place-card-handle" on:mousedown=on_mousedown>{"\u{2847}"}</span>
            </div>
        </div>
    }
}
