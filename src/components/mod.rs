//! UI Components
//!
//! Reusable Leptos components.

mod delete_confirm_button;
mod footer;
mod habit_analytics;
mod habit_card;
mod habit_form;
mod navbar;

pub use delete_confirm_button::DeleteConfirmButton;
pub use footer::Footer;
pub use habit_analytics::HabitAnalytics;
pub use habit_card::HabitCard;
pub use habit_form::HabitForm;
pub use navbar::Navbar;
