use contracts::domain::a002_product::Product;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a002_product::model;
use crate::domain::a002_product::ui::card::ProductCard;
use crate::domain::a002_product::ui::details::ProductDetails;
use crate::layout::global_context::{AppGlobalContext, Page};
use crate::shared::icons::icon;
use crate::shared::notify::{use_confirm, use_notify, ConfirmRequest};

/// The signed-in seller's own listings, with edit (through the details
/// dialog) and delete.
#[component]
pub fn MyProductsPage() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let notify = use_notify();
    let confirm = use_confirm();
    let (auth_state, _) = crate::system::auth::context::use_auth();

    let user_id = auth_state.get_untracked().user_id().unwrap_or_default();

    let products = RwSignal::new(Vec::<Product>::new());
    let selected_product = RwSignal::new(Option::<Product>::None);

    // The listing endpoint has no per-seller filter; take everything and keep
    // ours.
    let load_products = move || {
        spawn_local(async move {
            match model::fetch_products().await {
                Ok(items) => {
                    products.set(
                        items
                            .into_iter()
                            .filter(|p| p.is_owned_by(user_id))
                            .collect(),
                    );
                }
                Err(e) => log::warn!("failed to fetch listings: {}", e),
            }
        });
    };

    load_products();

    let handle_delete = move |product_id: i64| {
        confirm.ask(ConfirmRequest {
            title: "Delete Product?".to_string(),
            message: "Are you sure you want to remove this listing? This action cannot be undone."
                .to_string(),
            confirm_text: "Delete".to_string(),
            cancel_text: "Cancel".to_string(),
            danger: true,
            on_confirm: Callback::new(move |_| {
                spawn_local(async move {
                    match model::delete_product(product_id).await {
                        Ok(_) => {
                            products.update(|list| list.retain(|p| p.product_id != product_id));
                            notify.success("Listing deleted successfully");
                        }
                        Err(e) => {
                            log::warn!("delete failed for listing {}: {}", product_id, e);
                            notify.error("Failed to delete");
                        }
                    }
                });
            }),
        });
    };

    view! {
        <div class="page my-products-page">
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

            <div class="my-products-page__header">
                <h1>"My Listings"</h1>
                <button
                    type="button"
                    class="button button--primary"
                    on:click=move |_| ctx.navigate(Page::Sell)
                >
                    {icon("plus")}
                    " Add New"
                </button>
            </div>

            <Show
                when=move || !products.get().is_empty()
                fallback=|| {
                    view! {
                        <div class="empty-state">"You haven't listed any items yet."</div>
                    }
                }
            >
                <div class="product-grid">
                    <For
                        each=move || products.get()
                        key=|product| product.product_id
                        let:product
                    >
                        {
                            let product_id = product.product_id;
                            view! {
                                <div class="my-product">
                                    <ProductCard
                                        product=product
                                        on_select=Callback::new(move |p| {
                                            selected_product.set(Some(p))
                                        })
                                    />
                                    <div class="my-product__actions">
                                        <button
                                            type="button"
                                            class="button button--danger-ghost"
                                            on:click=move |_| handle_delete(product_id)
                                        >
                                            {icon("trash")}
                                            " Delete"
                                        </button>
                                    </div>
                                </div>
                            }
                        }
                    </For>
                </div>
            </Show>
        </div>
    }
}
