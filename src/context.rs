//! Theme Context
//!
//! Process-wide light/dark preference provided via the Leptos Context API.
//! Constructed once at the App root by [`provide_theme`]; [`ThemeContext::toggle`]
//! is the single mutator.

use leptos::prelude::*;

const THEME_STORAGE_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn name(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    fn from_name(name: &str) -> Option<Theme> {
        match name {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    fn flipped(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Theme signal pair provided via context; the write half stays private so
/// the only way to change the theme is [`ThemeContext::toggle`].
#[derive(Clone, Copy)]
pub struct ThemeContext {
    theme: ReadSignal<Theme>,
    set_theme: WriteSignal<Theme>,
}

impl ThemeContext {
    pub fn theme(&self) -> Theme {
        self.theme.get()
    }

    pub fn is_dark(&self) -> bool {
        self.theme.get() == Theme::Dark
    }

    /// Flip the theme and persist the choice.
    pub fn toggle(&self) {
        let next = self.theme.get_untracked().flipped();
        self.set_theme.set(next);
        persist_theme(next);
    }
}

/// Initialization point: read the stored preference and provide the context
/// to the whole view tree.
pub fn provide_theme() {
    let initial = load_stored_theme().unwrap_or_default();
    let (theme, set_theme) = signal(initial);
    provide_context(ThemeContext { theme, set_theme });
}

pub fn use_theme() -> ThemeContext {
    expect_context::<ThemeContext>()
}

fn storage() -> Option<web_sys::Storage> {
    window().local_storage().ok().flatten()
}

fn load_stored_theme() -> Option<Theme> {
    let value = storage()?.get_item(THEME_STORAGE_KEY).ok().flatten()?;
    Theme::from_name(&value)
}

fn persist_theme(theme: Theme) {
    if let Some(storage) = storage() {
        let _ = storage.set_item(THEME_STORAGE_KEY, theme.name());
    }
}
