//! Habit Analytics Component
//!
//! Pure aggregation over the current collection; no network access.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::models::Habit;
use crate::store::compute_analytics;

#[component]
pub fn HabitAnalytics(#[prop(into)] habits: Signal<Vec<Habit>>) -> impl IntoView {
    let analytics = Memo::new(move |_| compute_analytics(&habits.get()));
    let navigate = use_navigate();

    view! {
        <div class="analytics">
            <h2 class="analytics-title">"Habit Analytics"</h2>
            <div class="analytics-grid">
                <div class="analytics-card">
                    <h3>"Highest Streak"</h3>
                    <p class="analytics-value">{move || analytics.get().highest_streak}</p>
                </div>
                <div class="analytics-card">
                    <h3>"Total Completed Habits"</h3>
                    <p class="analytics-value">{move || analytics.get().total_completed}</p>
                </div>
                <div class="analytics-card">
                    <h3>"Total Habits"</h3>
                    <p class="analytics-value">{move || analytics.get().total_habits}</p>
                </div>
            </div>
            <div class="analytics-footer">
                <button
                    class="btn view-habits-btn"
                    on:click=move |_| navigate("/habits", Default::default())
                >
                    "View All Habits"
                </button>
            </div>
        </div>
    }
}
