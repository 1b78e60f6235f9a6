//! Habits Page
//!
//! The collection's owner: loads it on mount, renders the presented view
//! (search-filtered, streak-sorted), and hosts the create/edit modal. A
//! loading spinner shows only for the initial bulk fetch.

use leptos::prelude::*;
use leptos_meta::Title;
use wasm_bindgen::JsCast;

use crate::components::{HabitCard, HabitForm};
use crate::models::{Habit, SortOrder};
use crate::store::HabitStore;

#[component]
pub fn HabitsPage() -> impl IntoView {
    let store = HabitStore::new();
    provide_context(store);
    on_cleanup(move || store.detach());

    // Load habits on mount
    Effect::new(move |_| store.load());

    let modal_open = RwSignal::new(false);
    let editing = RwSignal::new(None::<Habit>);
    let visible = Memo::new(move |_| store.visible());

    let on_edit = Callback::new(move |habit: Habit| {
        editing.set(Some(habit));
        modal_open.set(true);
    });

    view! {
        <Title text="Habits | Habit Tracker"/>
        <section class="habits-page">
            <h2 class="page-title">"🏆 Habits 🏆"</h2>

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

                <select
                    class="sort-select"
                    prop:value=move || match store.sort() {
                        SortOrder::Unsorted => "",
                        SortOrder::Ascending => "asc",
                        SortOrder::Descending => "desc",
                    }
                    on:change=move |ev| {
                        let target = ev.target().unwrap();
                        let select = target.dyn_ref::<web_sys::HtmlSelectElement>().unwrap();
                        let order = match select.value().as_str() {
                            "asc" => SortOrder::Ascending,
                            "desc" => SortOrder::Descending,
                            _ => SortOrder::Unsorted,
                        };
                        store.set_sort(order);
                    }
                >
                    <option value="">"Sort by Streak"</option>
                    <option value="asc">"Low to High"</option>
                    <option value="desc">"High to Low"</option>
                </select>

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

            <Show
                when=move || !store.loading()
                fallback=|| view! {
                    <div class="spinner-wrap"><div class="spinner"></div></div>
                }
            >
                <div class="habit-grid">
                    <For
                        each=move || visible.get()
                        key=|habit| habit.id.clone()
                        children=move |habit| view! { <HabitCard habit on_edit/> }
                    />
                </div>
            </Show>

            <HabitForm modal_open editing/>
        </section>
    }
}
