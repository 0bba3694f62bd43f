use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct ProductListState {
    // filters
    pub q: String,
    pub selected_category: Option<i64>,

    // load flag
    pub is_loaded: bool,
}

impl Default for ProductListState {
    fn default() -> Self {
        Self {
            q: String::new(),
            selected_category: None,
            is_loaded: false,
        }
    }
}

pub fn create_state() -> RwSignal<ProductListState> {
    RwSignal::new(ProductListState::default())
}
