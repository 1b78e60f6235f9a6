//! Delete Confirm Button Component
//!
//! Reusable inline delete confirmation with confirm/cancel actions.

use leptos::prelude::*;

/// Inline delete confirmation button
///
/// Shows a labeled button initially. When clicked, shows "Delete?" with
/// confirm/cancel buttons so destructive actions always take two clicks.
#[component]
pub fn DeleteConfirmButton(
    /// CSS class for the initial button (e.g., "btn delete-btn")
    #[prop(into)] button_class: String,
    /// Label of the initial button
    #[prop(into)] label: String,
    /// Disables the initial button while a request is in flight
    #[prop(into)] disabled: Signal<bool>,
    /// Callback to execute when the user confirms
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (confirm_delete, set_confirm_delete) = signal(false);

    view! {
        <Show when=move || !confirm_delete.get()>
            <button
                class=button_class.clone()
                disabled=move || disabled.get()
                on:click=move |ev| {
                    ev.stop_propagation();
                    set_confirm_delete.set(true);
                }
            >
                {label.clone()}
            </button>
        </Show>
        <Show when=move || confirm_delete.get()>
            <span class="delete-confirm">
                <span class="delete-confirm-text">"Delete?"</span>
                <button
                    class="confirm-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_confirm_delete.set(false);
                        on_confirm.run(());
                    }
                >
                    "✓"
                </button>
                <button
                    class="cancel-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_confirm_delete.set(false);
                    }
                >
                    "✗"
                </button>
            </span>
        </Show>
    }
}
