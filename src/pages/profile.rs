//! Profile Page
//!
//! Profile header plus the analytics cards derived from the collection.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::HabitAnalytics;
use crate::store::HabitStore;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let store = HabitStore::new();
    on_cleanup(move || store.detach());

    // Load habits on mount
    Effect::new(move |_| store.load());

    let habits = Signal::derive(move || store.habits());

    view! {
        <Title text="Profile | Habit Tracker"/>
        <section class="profile-page">
            <div class="profile-head">
                <div class="avatar">"HT"</div>
                <div>
                    <h2>"Your Profile"</h2>
                    <p class="profile-sub">"No account needed; habits live on the tracker service."</p>
                </div>
            </div>

            <Show
                when=move || !store.loading()
                fallback=|| view! {
                    <div class="spinner-wrap"><div class="spinner"></div></div>
                }
            >
                <HabitAnalytics habits/>
            </Show>
        </section>
    }
}
