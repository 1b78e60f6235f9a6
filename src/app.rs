//! Application Shell
//!
//! Root component: theme provider, router, navigation chrome.

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::{Footer, Navbar};
use crate::context::{provide_theme, use_theme};
use crate::pages::{HabitsPage, HomePage, ProfilePage};

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_theme();
    let theme = use_theme();

    view! {
        <Router>
            <Title text="Habit Tracker"/>
            <div class=move || format!("app {}", theme.theme().name())>
                <Navbar/>
                <main class="content">
                    <Routes fallback=|| view! { <NotFound/> }>
                        <Route path=path!("/") view=HomePage/>
                        <Route path=path!("/habits") view=HabitsPage/>
                        <Route path=path!("/profile") view=ProfilePage/>
                    </Routes>
                </main>
                <Footer/>
            </div>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"404"</h1>
            <p>"Page not found"</p>
            <a href="/">"Go home"</a>
        </div>
    }
}
