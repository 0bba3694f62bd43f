//! Theme management.
//!
//! Light/dark theme with the preference persisted in localStorage and applied
//! as a `data-theme` attribute on the document root.

use leptos::prelude::*;
use web_sys::window;

const THEME_STORAGE_KEY: &str = "app_theme";

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Theme name as stored in localStorage and used as the root attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

fn saved_theme() -> Theme {
    let stored = window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item(THEME_STORAGE_KEY).ok().flatten());
    stored.map(|s| Theme::from_str(&s)).unwrap_or_default()
}

fn apply_theme(theme: Theme) {
    if let Some(window) = window() {
        if let Some(document) = window.document() {
            if let Some(root) = document.document_element() {
                let _ = root.set_attribute("data-theme", theme.as_str());
            }
        }
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(THEME_STORAGE_KEY, theme.as_str());
        }
    }
}

#[derive(Clone, Copy)]
pub struct ThemeService {
    pub theme: RwSignal<Theme>,
}

impl ThemeService {
    /// Create the service, apply the persisted theme and provide the service
    /// through context. Call once at app startup.
    pub fn provide() {
        let service = Self {
            theme: RwSignal::new(saved_theme()),
        };

        let theme = service.theme;
        Effect::new(move |_| apply_theme(theme.get()));

        provide_context(service);
    }

    pub fn is_dark(&self) -> bool {
        self.theme.get() == Theme::Dark
    }

    pub fn toggle(&self) {
        self.theme.update(|t| *t = t.toggled());
    }
}

pub fn use_theme() -> ThemeService {
    use_context::<ThemeService>().expect("ThemeService not provided in context")
}
