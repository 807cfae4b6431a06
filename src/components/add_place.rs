//! Add Place Panel
//!
//! Consumes the place resolved by the map/places collaborator and turns it
//! into a new card in a column of the user's choosing. The card id is the
//! lowest free id on the board.

use leptos::prelude::*;

use itinerary_core::Card;

use crate::context::BoardContext;

#[component]
pub fn AddPlacePanel(board: BoardContext) -> impl IntoView {
    let (list_open, set_list_open) = signal(false);

    let on_toggle_list = move |_| set_list_open.update(|v| *v = !*v);

    let on_dismiss = move |_| {
        board.place_selection.set(None);
        set_list_open.set(false);
    };

    let add_to_column = move |column: String| {
        let Some(place) = board.place_selection.get_untracked() else {
            return;
        };
        let mut insert_err = None;
        board.partition.update(|p| {
            let card = Card::from_selection(p.next_card_id(), place);
            if let Err(e) = p.insert_card(&column, card) {
                insert_err = Some(e);
            }
        });
        if let Some(e) = insert_err {
            web_sys::console::warn_1(&format!("[BOARD] Add card failed: {e}").into());
        }
        set_list_open.set(false);
    };

    let column_names = move || {
        board
            .partition
            .with(|p| p.column_names().map(str::to_string).collect::<Vec<_>>())
    };

    view! {
        {move || board.place_selection.get().map(|place| {
            view! {
                <div class="add-place-panel">
                    <div class="add-place-header">
                        <button class="add-place-btn" title="Add to itinerary" on:click=on_toggle_list>
                            {"\u{2295}"}
                        </button>
                        <button class="add-place-btn" title="Close" on:click=on_dismiss>
                            {"\u{2715}"}
                        </button>
                    </div>

                    <div class="add-place-body">
                        <p class="add-place-name">{place.name.clone()}</p>
                        <p class="add-place-address">{place.address.clone()}</p>
                    </div>

                    {move || if list_open.get() {
                        view! {
                            <div class="add-place-column-list">
                                <p class="add-place-prompt">"Add to one of the columns"</p>
                                <For
                                    each=column_names
                                    key=|name| name.clone()
                                    children=move |name| {
                                        let target = name.clone();
                                        view! {
                                            <div
                                                class="add-place-column-item"
                                                on:click=move |_| add_to_column(target.clone())
                                            >
                                                {name.clone()}
                                            </div>
                                        }
                                    }
                                />
                            </div>
                        }.into_any()
                    } else {
                        view! { <div></div> }.into_any()
                    }}
                </div>
            }
        })}
    }
}
