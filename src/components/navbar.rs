//! Navbar Component
//!
//! Top navigation shell: brand, page links with active styling, theme
//! toggle, and a mobile menu dismissed via its backdrop.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::context::use_theme;

#[component]
pub fn Navbar() -> impl IntoView {
    let theme = use_theme();
    let pathname = use_location().pathname;
    let menu_open = RwSignal::new(false);

    let link_class = move |path: &str| {
        if pathname.get() == path {
            "nav-link active"
        } else {
            "nav-link"
        }
    };

    view! {
        <nav class="navbar">
            <a href="/" class="brand">"Habit Tracker"</a>

            <div class="nav-links">
                <a href="/" class=move || link_class("/")>"Home"</a>
                <a href="/habits" class=move || link_class("/habits")>"Habits"</a>
                <a href="/profile" class=move || link_class("/profile")>"Profile"</a>
                <button class="theme-toggle" on:click=move |_| theme.toggle()>
                    {move || if theme.is_dark() { "☀️ Light" } else { "🌙 Dark" }}
                </button>
            </div>

            <button
                class="menu-toggle"
                on:click=move |_| menu_open.update(|open| *open = !*open)
            >
                {move || if menu_open.get() { "✕" } else { "☰" }}
            </button>
        </nav>

        <Show when=move || menu_open.get()>
            <div class="menu-backdrop" on:click=move |_| menu_open.set(false)></div>
            <div class="mobile-menu">
                <a
                    href="/"
                    class=move || link_class("/")
                    on:click=move |_| menu_open.set(false)
                >
                    "Home"
                </a>
                <a
                    href="/habits"
                    class=move || link_class("/habits")
                    on:click=move |_| menu_open.set(false)
                >
                    "Habits"
                </a>
                <a
                    href="/profile"
                    class=move || link_class("/profile")
                    on:click=move |_| menu_open.set(false)
                >
                    "Profile"
                </a>
                <button
                    class="theme-toggle"
                    on:click=move |_| theme.toggle()
                >
                    {move || if theme.is_dark() { "☀️ Light" } else { "🌙 Dark" }}
                </button>
            </div>
        </Show>
    }
}
