use contracts::domain::a001_category::Category;
use contracts::domain::a002_product::Product;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::state::create_state;
use crate::domain::a001_category::model as category_model;
use crate::domain::a002_product::model;
use crate::domain::a002_product::ui::card::ProductCard;
use crate::domain::a002_product::ui::details::ProductDetails;
use crate::shared::icons::icon;

/// Home page: hero, category chips, search box and the product grid.
///
/// Products and categories are independent, so both are fetched concurrently
/// at page load. Filtering happens client-side; the category filter compares
/// the numeric category id only.
#[component]
pub fn ProductListPage() -> impl IntoView {
    let products = RwSignal::new(Vec::<Product>::new());
    let categories = RwSignal::new(Vec::<Category>::new());
    let loading = RwSignal::new(true);
    let selected_product = RwSignal::new(Option::<Product>::None);
    let state = create_state();

    let load_products = move || {
        spawn_local(async move {
            match model::fetch_products().await {
                Ok(items) => {
                    products.set(items);
                    state.update(|s| s.is_loaded = true);
                }
                Err(e) => log::warn!("failed to fetch products: {}", e),
            }
            loading.set(false);
        });
    };

    // Fire both loads back to back; neither depends on the other.
    load_products();
    spawn_local(async move {
        match category_model::fetch_categories().await {
            Ok(items) => categories.set(items),
            Err(e) => log::warn!("failed to fetch categories: {}", e),
        }
    });

    let filtered = move || {
        let s = state.get();
        products
            .get()
            .into_iter()
            .filter(|p| p.matches(&s.q, s.selected_category))
            .collect::<Vec<_>>()
    };

    let heading = move || {
        let s = state.get();
        match s.selected_category {
            None => "Fresh Recommendations".to_string(),
            Some(id) => categories
                .get()
                .iter()
                .find(|c| c.category_id == id)
                .map(|c| format!("{} Results", c.name))
                .unwrap_or_else(|| "Results".to_string()),
        }
    };

    view! {
        <div class="page home-page">
            {move || {
                selected_product
                    .get()
                    .map(|product| {
                        view! {
                            <ProductDetails
                                product=product
                                on_close=Callback::new(move |_| selected_product.set(None))
                                on_changed=Callback::new(move |_| load_products())
                            />
                        }
                    })
            }}

            <section class="hero">
                <h1>"Your Campus Marketplace"</h1>
                <p>
                    "Buy and sell books, electronics, and gear safely within your university community."
                </p>
            </section>

            <section class="filters">
                <h2>"Start Exploring"</h2>

                <div class="category-chips">
                    <button
                        type="button"
                        class=move || {
                            if state.get().selected_category.is_none() {
                                "chip chip--active"
                            } else {
                                "chip"
                            }
                        }
                        on:click=move |_| state.update(|s| s.selected_category = None)
                    >
                        "All Items"
                    </button>
                    <For
                        each=move || categories.get()
                        key=|cat| cat.category_id
                        let:cat
                    >
                        {
                            let id = cat.category_id;
                            view! {
                                <button
                                    type="button"
                                    class=move || {
                                        if state.get().selected_category == Some(id) {
                                            "chip chip--active"
                                        } else {
                                            "chip"
                                        }
                                    }
                                    on:click=move |_| {
                                        state.update(|s| s.selected_category = Some(id))
                                    }
                                >
                                    {cat.name.clone()}
                                </button>
                            }
                        }
                    </For>
                </div>

                <div class="search-bar">
                    {icon("search")}
                    <input
                        type="text"
                        placeholder="Search for backpacks, electronics..."
                        prop:value=move || state.get().q
                        on:input=move |ev| {
                            let q = event_target_value(&ev);
                            state.update(|s| s.q = q);
                        }
                    />
                </div>
            </section>

            <section class="product-grid-section">
                <h2>
                    {heading}
                    <Show when=move || !state.get().q.is_empty()>
                        <span class="product-grid-section__query">
                            {move || format!(" - searching \"{}\"", state.get().q)}
                        </span>
                    </Show>
                </h2>

                <Show
                    when=move || !loading.get()
                    fallback=|| {
                        view! {
                            <div class="page-loading">"Loading specific deals for you..."</div>
                        }
                    }
                >
                    <Show
                        when=move || !filtered().is_empty()
                        fallback=move || {
                            view! {
                                <div class="empty-state">
                                    <p>"No products found for your search."</p>
                                    <button
                                        type="button"
                                        class="link-button"
                                        on:click=move |_| {
                                            state.update(|s| {
                                                s.q.clear();
                                                s.selected_category = None;
                                            })
                                        }
                                    >
                                        "Clear Search"
                                    </button>
                                </div>
                            }
                        }
                    >
                        <div class="product-grid">
                            <For
                                each=filtered
                                key=|product| product.product_id
                                let:product
                            >
                                <ProductCard
                                    product=product
                                    on_select=Callback::new(move |p| selected_product.set(Some(p)))
                                />
                            </For>
                        </div>
                    </Show>
                </Show>
            </section>
        </div>
    }
}
