use contracts::domain::a002_product::Product;
use gloo_timers::callback::Interval;
use leptos::prelude::*;

use crate::shared::date_utils::posted_label;
use crate::shared::icons::icon;

const PLACEHOLDER_IMAGE: &str =
    "https://images.unsplash.com/photo-1555041469-a586c61ea9bc?auto=format&fit=crop&q=80&w=600";

const IMAGE_ROTATION_MS: u32 = 3_000;

/// Product card for the browse grid. Cards with several photos rotate through
/// them on a timer; the signed-in seller's own cards carry a "Yours" badge.
#[component]
pub fn ProductCard(
    product: Product,
    #[prop(into)] on_select: Callback<Product>,
) -> impl IntoView {
    let (auth_state, _) = crate::system::auth::context::use_auth();
    let user_id = auth_state.get_untracked().user_id().unwrap_or_default();
    let is_owner = product.is_owned_by(user_id);

    let image_count = product.image_urls.len();
    let current_image = RwSignal::new(0usize);

    if image_count > 1 {
        let handle = Interval::new(IMAGE_ROTATION_MS, move || {
            current_image.update(|i| *i = (*i + 1) % image_count);
        });
        on_cleanup(move || drop(handle));
    }

    let product = RwSignal::new(product);

    view! {
        <div
            class="product-card"
            on:click=move |_| on_select.run(product.get_untracked())
        >
            <div class="product-card__media">
                <img
                    src=move || {
                        product.with(|p| {
                            p.image_urls
                                .get(current_image.get())
                                .cloned()
                                .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string())
                        })
                    }
                    alt=move || product.with(|p| p.title.clone())
                />

                <Show when=move || is_owner>
                    <span class="product-card__owner-badge">"Yours"</span>
                </Show>

                <span class="product-card__location">
                    {icon("map-pin")}
                    {move || {
                        product.with(|p| {
                            p.location
                                .clone()
                                .filter(|l| !l.is_empty())
                                .unwrap_or_else(|| "Campus".to_string())
                        })
                    }}
                </span>

                <Show when=move || (image_count > 1)>
                    <div class="product-card__dots">
                        {(0..image_count)
                            .map(|i| {
                                view! {
                                    <span class=move || {
                                        if current_image.get() == i {
                                            "product-card__dot product-card__dot--active"
                                        } else {
                                            "product-card__dot"
                                        }
                                    }></span>
                                }
                            })
                            .collect_view()}
                    </div>
                </Show>
            </div>

            <div class="product-card__body">
                <div class="product-card__header">
                    <h3>{move || product.with(|p| p.title.clone())}</h3>
                    <span class="badge badge--condition">
                        {move || product.with(|p| p.condition.as_str())}
                    </span>
                </div>
                <p class="product-card__description">
                    {move || product.with(|p| p.description.clone())}
                </p>
                <div class="product-card__footer">
                    <div>
                        <span class="product-card__price">
                            {move || product.with(|p| format!("Rs. {}", p.price))}
                        </span>
                        <span class="product-card__posted">
                            {move || product.with(|p| posted_label(p.created_at.as_ref()))}
                        </span>
                    </div>
                    <span class="product-card__cta">"View details"</span>
                </div>
            </div>
        </div>
    }
}
