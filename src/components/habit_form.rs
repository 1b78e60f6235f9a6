//! Habit Form Component
//!
//! Modal form for creating or editing a habit. The draft lives here and is
//! handed to the store wholesale on submit; on failure the modal stays open
//! with the draft intact so the user can retry.

use leptos::prelude::*;
use uuid::Uuid;
use wasm_bindgen::JsCast;

use crate::error::Error;
use crate::models::{Habit, HabitDraft};
use crate::store::HabitStore;

#[component]
pub fn HabitForm(
    /// Whether the modal is shown
    modal_open: RwSignal<bool>,
    /// The habit being edited, None when creating
    editing: RwSignal<Option<Habit>>,
) -> impl IntoView {
    let store = expect_context::<HabitStore>();

    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let saving = RwSignal::new(false);
    let form_error = RwSignal::new(None::<String>);
    let idempotency_key = RwSignal::new(String::new());

    // Re-seed the draft each time the modal opens. A fresh idempotency key is
    // minted per submission attempt sequence, so a double-clicked Save cannot
    // create two habits.
    Effect::new(move |_| {
        if modal_open.get() {
            match editing.get() {
                Some(habit) => {
                    name.set(habit.name);
                    description.set(habit.description);
                }
                None => {
                    name.set(String::new());
                    description.set(String::new());
                }
            }
            form_error.set(None);
            saving.set(false);
            idempotency_key.set(Uuid::new_v4().to_string());
        }
    });

    let close = move || {
        modal_open.set(false);
        editing.set(None);
    };

    view! {
        <Show when=move || modal_open.get()>
            <div class="modal-overlay" on:click=move |_| close()>
                <div class="modal" on:click=|ev| ev.stop_propagation()>
                    <h2 class="modal-title">
                        {move || if editing.get().is_some() { "Edit Habit" } else { "Add Habit" }}
                    </h2>

                    <form on:submit=move |ev: web_sys::SubmitEvent| {
                        ev.prevent_default();
                        if saving.get_untracked() {
                            return;
                        }
                        let name_value = name.get_untracked();
                        let description_value = description.get_untracked();
                        if name_value.trim().is_empty() || description_value.trim().is_empty() {
                            let e = Error::Validation(
                                "name and description are required".to_string(),
                            );
                            form_error.set(Some(e.to_string()));
                            return;
                        }

                        saving.set(true);
                        form_error.set(None);
                        let draft = HabitDraft {
                            name: name_value,
                            description: description_value,
                        };
                        let editing_id = editing.get_untracked().map(|h| h.id);
                        let key = idempotency_key.get_untracked();
                        store.save(draft, editing_id, key, move |ok| {
                            saving.set(false);
                            if ok {
                                modal_open.set(false);
                                editing.set(None);
                            }
                        });
                    }>
                        <div class="form-field">
                            <label for="habit-name">"Habit Name"</label>
                            <input
                                type="text"
                                id="habit-name"
                                prop:value=move || name.get()
                                on:input=move |ev| {
                                    let target = ev.target().unwrap();
                                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                    name.set(input.value());
                                }
                            />
                        </div>

                        <div class="form-field">
                            <label for="habit-description">"Description"</label>
                            <textarea
                                id="habit-description"
                                prop:value=move || description.get()
                                on:input=move |ev| {
                                    let target = ev.target().unwrap();
                                    let area = target.dyn_ref::<web_sys::HtmlTextAreaElement>().unwrap();
                                    description.set(area.value());
                                }
                            ></textarea>
                        </div>

                        <Show when=move || form_error.get().is_some()>
                            <p class="form-error">{move || form_error.get().unwrap_or_default()}</p>
                        </Show>

                        <div class="modal-actions">
                            <button type="button" class="btn cancel-btn" on:click=move |_| close()>
                                "Cancel"
                            </button>
                            <button
                                type="submit"
                                class="btn save-btn"
                                disabled=move || {
                                    saving.get()
                                        || name.get().trim().is_empty()
                                        || description.get().trim().is_empty()
                                }
                            >
                                {move || if saving.get() { "Saving..." } else { "Save" }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}
