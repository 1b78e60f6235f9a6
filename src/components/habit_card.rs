//! Habit Card Component
//!
//! One habit in the grid: name, description, streak badge, and the four
//! user commands (upload, edit, delete, delete today's upload). All commands
//! go through the store; the card never talks to the network itself.

use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::components::DeleteConfirmButton;
use crate::models::Habit;
use crate::store::HabitStore;

#[component]
pub fn HabitCard(habit: Habit, on_edit: Callback<Habit>) -> impl IntoView {
    let store = expect_context::<HabitStore>();
    let file_input: NodeRef<html::Input> = NodeRef::new();

    let id = habit.id.clone();
    let pending = {
        let id = id.clone();
        Signal::derive(move || store.is_pending(&id))
    };

    // Gate first; the picker only opens when no upload exists for today.
    let on_upload_click = {
        let id = id.clone();
        move |_| {
            if store.upload_gate_passes(&id) {
                if let Some(input) = file_input.get_untracked() {
                    input.click();
                }
            }
        }
    };

    let on_file_change = {
        let id = id.clone();
        move |ev: web_sys::Event| {
            let target = ev.target().unwrap();
            let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
            if let Some(file) = input.files().and_then(|files| files.get(0)) {
                store.upload_today(id.clone(), file);
            }
            // Clear so picking the same file later still fires a change event.
            input.set_value("");
        }
    };

    let edit_habit = habit.clone();
    let on_edit_click = move |_| on_edit.run(edit_habit.clone());

    let delete_id = id.clone();
    let on_delete = Callback::new(move |_: ()| store.delete(delete_id.clone()));
    let delete_upload_id = id.clone();
    let on_delete_upload =
        Callback::new(move |_: ()| store.delete_today_upload(delete_upload_id.clone()));

    view! {
        <div class="habit-card">
            <div class="habit-card-head">
                <h3 class="habit-name">{habit.name.clone()}</h3>
                <p class="habit-description">{habit.description.clone()}</p>
            </div>

            <div class="habit-streak">
                <span class="streak-badge">"Streak: " {habit.streak} "🔥"</span>
            </div>

            <div class="habit-actions">
                <input
                    type="file"
                    accept="image/*"
                    class="hidden-file-input"
                    node_ref=file_input
                    on:change=on_file_change
                />
                <button
                    class="btn upload-btn"
                    disabled=move || pending.get()
                    on:click=on_upload_click
                >
                    "Upload"
                </button>
                <button
                    class="btn edit-btn"
                    disabled=move || pending.get()
                    on:click=on_edit_click
                >
                    "Edit"
                </button>
                <DeleteConfirmButton
                    button_class="btn delete-btn"
                    label="Delete"
                    disabled=pending
                    on_confirm=on_delete
                />
            </div>

            <div class="habit-upload-row">
                <DeleteConfirmButton
                    button_class="btn delete-upload-btn"
                    label="Delete Today's Upload"
                    disabled=pending
                    on_confirm=on_delete_upload
                />
            </div>
        </div>
    }
}
