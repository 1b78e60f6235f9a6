//! Footer Component

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <p>"Habit Tracker · small steps, long streaks"</p>
        </footer>
    }
}
