use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

/// Top-level pages of the application. Everything except these lives inside
/// dialogs, so one active-page signal is the whole navigation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    Sell,
    MyListings,
    Messages,
    Profile,
}

impl Page {
    /// Key used in the `?page=` query string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Sell => "sell",
            Page::MyListings => "my-listings",
            Page::Messages => "messages",
            Page::Profile => "profile",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "sell" => Page::Sell,
            "my-listings" => Page::MyListings,
            "messages" => Page::Messages,
            "profile" => Page::Profile,
            _ => Page::Home,
        }
    }

    /// Label shown in the navbar.
    pub fn title(&self) -> &'static str {
        match self {
            Page::Home => "Browse",
            Page::Sell => "Sell",
            Page::MyListings => "My Listings",
            Page::Messages => "Messages",
            Page::Profile => "Profile",
        }
    }

    /// Pages linked from the navbar, in display order.
    pub fn nav_order() -> [Page; 4] {
        [Page::Home, Page::Sell, Page::MyListings, Page::Messages]
    }
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<Page>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(Page::default()),
        }
    }

    pub fn navigate(&self, page: Page) {
        self.active.set(page);
    }

    /// Restore the active page from `?page=...` and keep the URL in sync via
    /// `history.replaceState` so a refresh lands on the same page.
    pub fn init_url_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        if let Some(key) = params.get("page") {
            self.active.set(Page::from_str(key));
        }

        let this = *self;
        Effect::new(move |_| {
            let active = this.active.get();
            let query_string = serde_qs::to_string(&HashMap::from([(
                "page".to_string(),
                active.as_str().to_string(),
            )]))
            .unwrap_or_default();
            let new_url = format!("?{}", query_string);

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            // Only touch history when the URL actually changed.
            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}
