//! Editable Column Name Component
//!
//! Two-state view/edit toggle. The pending name lives in its own signal and
//! only reaches the partition on confirm, so a half-typed name never
//! corrupts the committed state. A rejected rename keeps edit mode open.

use leptos::prelude::*;

use itinerary_core::BoardError;

use crate::context::{alert, BoardContext};

#[component]
pub fn EditableColumnName(board: BoardContext, name: String) -> impl IntoView {
    let committed = StoredValue::new(name.clone());

    let (editing, set_editing) = signal(false);
    let (temp_name, set_temp_name) = signal(name);

    let on_edit = move |_| {
        set_temp_name.set(committed.get_value());
        set_editing.set(true);
    };

    let on_save = move |_| {
        let current = committed.get_value();
        let pending = temp_name.get();

        // Validate before leaving edit mode so a rejected rename stays open.
        let taken = board
            .partition
            .with_untracked(|p| pending != current && p.has_column(&pending));
        if taken {
            alert(&BoardError::NameTaken(pending).to_string());
            return;
        }

        set_editing.set(false);
        if pending != current {
            board.partition.update(|p| {
                if let Err(e) = p.rename_column(&current, &pending) {
                    web_sys::console::warn_1(&format!("[BOARD] Rename failed: {e}").into());
                }
            });
        }
    };

    view! {
        <div class="column-name">
            {move || if editing.get() {
                view! {
                    <span class="column-name-edit">
                        <input
                            type="text"
                            class="column-name-input"
                            prop:value=move || temp_name.get()
                            on:input=move |ev| set_temp_name.set(event_target_value(&ev))
                        />
                        <button class="column-name-btn" title="Save name" on:click=on_save>
                            {"\u{2713}"}
                        </button>
                    </span>
                }.into_any()
            } else {
                view! {
                    <span class="column-name-view">
                        <span class="column-name-label">{committed.get_value()}</span>
                        <button class="column-name-btn" title="Rename" on:click=on_edit>
                            {"\u{270E}"}
                        </button>
                    </span>
                }.into_any()
            }}
        </div>
    }
}
