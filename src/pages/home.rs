//! Home Page
//!
//! Lightweight landing view: read-only habit grid with search plus the Add
//! Habit modal. Runs on its own store instance; the full command set lives
//! on the Habits page.

use leptos::prelude::*;
use leptos_meta::Title;
use wasm_bindgen::JsCast;

use crate::components::HabitForm;
use crate::models::Habit;
use crate::store::HabitStore;

#[component]
pub fn HomePage() -> impl IntoView {
    let store = HabitStore::new();
    provide_context(store);
    on_cleanup(move || store.detach());

    // Load habits on mount
    Effect::new(move |_| store.load());

    let modal_open = RwSignal::new(false);
    let editing = RwSignal::new(None::<Habit>);
    let visible = Memo::new(move |_| store.visible());

    view! {
        <Title text="Home | Habit Tracker"/>
        <section class="home-page">
            <div class="page-head">
                <h1>"Habit Tracker"</h1>
                <button
                    class="btn add-btn"
                    on:click=move |_| {
                        editing.set(None);
                        modal_open.set(true);
                    }
                >
                    "Add Habit"
                </button>
            </div>

            <div class="toolbar">
                <input
                    class="search-input"
                    type="text"
                    placeholder="Search habits..."
                    prop:value=move || store.search()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        store.set_search(input.value());
                    }
                />
            </div>

            <div class="habit-grid">
                <For
                    each=move || visible.get()
                    key=|habit| habit.id.clone()
                    children=move |habit| view! {
                        <div class="habit-card simple">
                            <h3 class="habit-name">{habit.name}</h3>
                            <p class="habit-description">{habit.description}</p>
                            <div class="habit-streak">
                                <span class="streak-badge">"Streak: " {habit.streak}</span>
                            </div>
                        </div>
                    }
                />
            </div>

            <HabitForm modal_open editing/>
        </section>
    }
}
