use contracts::domain::a002_product::{Product, ProductCondition};
use contracts::domain::a003_chat::SendMessageRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::view_model::ProductDraftVm;
use crate::domain::a003_chat::model as chat_model;
use crate::shared::date_utils::posted_label;
use crate::shared::icons::icon;
use crate::shared::notify::{use_confirm, use_notify, ConfirmRequest};
use crate::shared::upload;

const PLACEHOLDER_IMAGE: &str =
    "https://images.unsplash.com/photo-1555041469-a586c61ea9bc?auto=format&fit=crop&q=80&w=600";

/// Listing details dialog.
///
/// Non-owners see the listing with the seller's contact details and a message
/// box; the owner gets an edit mode (draft + photo management + guarded save)
/// and delete. `on_changed` tells the owning list to refresh after a mutation.
#[component]
pub fn ProductDetails(
    product: Product,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] on_changed: Callback<()>,
) -> impl IntoView {
    let notify = use_notify();
    let confirm = use_confirm();
    let (auth_state, _) = crate::system::auth::context::use_auth();

    let user_id = auth_state.get_untracked().user_id().unwrap_or_default();
    let product_id = product.product_id;
    let seller_id = product.seller_id;
    let category_id = product.category_id.unwrap_or_default();
    let is_owner = product.is_owned_by(user_id);

    let vm = ProductDraftVm::seeded(&product);
    let update_disabled = vm.is_update_disabled();
    let update_pending = vm.is_pending();
    let is_editing = RwSignal::new(false);
    let message = RwSignal::new(format!("Hi, I'm interested in your {}!", product.title));
    let sending = RwSignal::new(false);

    let product = RwSignal::new(product);

    let handle_saved = Callback::new(move |_| {
        is_editing.set(false);
        on_changed.run(());
        on_close.run(());
    });

    let handle_save = move |_| {
        vm.submit_update(product_id, seller_id, category_id, notify, handle_saved);
    };

    let handle_cancel_edit = move |_| {
        product.with_untracked(|p| vm.reset(Some(p)));
        is_editing.set(false);
    };

    let handle_delete = move |_| {
        confirm.ask(ConfirmRequest {
            title: "Delete Product?".to_string(),
            message: "Are you sure you want to delete this product listing? This cannot be undone."
                .to_string(),
            confirm_text: "Delete".to_string(),
            cancel_text: "Keep Listing".to_string(),
            danger: true,
            on_confirm: Callback::new(move |_| {
                vm.delete(
                    product_id,
                    notify,
                    Callback::new(move |_| {
                        on_changed.run(());
                        on_close.run(());
                    }),
                );
            }),
        });
    };

    let handle_file_change = move |ev: web_sys::Event| {
        use wasm_bindgen::JsCast;
        let input: web_sys::HtmlInputElement = match ev.target().and_then(|t| t.dyn_into().ok()) {
            Some(input) => input,
            None => return,
        };
        let files = upload::files_from_input(&input);
        input.set_value("");
        vm.upload(files, notify);
    };

    let handle_send = move |_| {
        let content = message.get();
        if content.trim().is_empty() || sending.get() {
            return;
        }

        sending.set(true);
        let request = SendMessageRequest {
            sender_id: user_id,
            receiver_id: seller_id,
            product_id,
            content,
        };
        spawn_local(async move {
            match chat_model::send_message(&request).await {
                Ok(_) => {
                    notify.success("Message Sent!");
                    message.set(String::new());
                    sending.set(false);
                    on_close.run(());
                }
                Err(e) => {
                    log::warn!("message send failed: {}", e);
                    notify.error("Failed to send message");
                    sending.set(false);
                }
            }
        });
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal product-details" on:click=|ev| ev.stop_propagation()>
                <button
                    type="button"
                    class="modal__close"
                    on:click=move |_| on_close.run(())
                >
                    {icon("x")}
                </button>

                // Image pane: gallery in view mode, photo management in edit mode.
                <div class="product-details__media">
                    <Show
                        when=move || is_owner && is_editing.get()
                        fallback=move || {
                            view! {
                                <img
                                    class="product-details__photo"
                                    src=move || {
                                        product.with(|p| {
                                            p.image_urls
                                                .first()
                                                .cloned()
                                                .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string())
                                        })
                                    }
                                    alt=move || product.with(|p| p.title.clone())
                                />
                            }
                        }
                    >
                        <div class="photo-manager">
                            <h4>"Manage Photos"</h4>
                            <div class="photo-manager__grid">
                                <For
                                    each=move || {
                                        vm.draft
                                            .with(|d| d.image_urls.clone())
                                            .into_iter()
                                            .enumerate()
                                            .collect::<Vec<_>>()
                                    }
                                    key=|(index, url)| format!("{}-{}", index, url)
                                    let:entry
                                >
                                    <div class="photo-manager__item">
                                        <img src=entry.1.clone() alt="preview" />
                                        <button
                                            type="button"
                                            class="photo-manager__remove"
                                            on:click=move |_| vm.remove_image(entry.0)
                                        >
                                            {icon("x")}
                                        </button>
                                    </div>
                                </For>

                                <button
                                    type="button"
                                    class="photo-manager__add"
                                    disabled=move || vm.uploading.get()
                                    on:click=move |_| {
                                        if let Some(document) =
                                            web_sys::window().and_then(|w| w.document())
                                        {
                                            if let Some(input) =
                                                document.get_element_by_id("product-photo-input")
                                            {
                                                use wasm_bindgen::JsCast;
                                                if let Ok(input) =
                                                    input.dyn_into::<web_sys::HtmlElement>()
                                                {
                                                    input.click();
                                                }
                                            }
                                        }
                                    }
                                >
                                    {move || {
                                        if vm.uploading.get() {
                                            view! { <thaw::Spinner /> }.into_any()
                                        } else {
                                            icon("plus")
                                        }
                                    }}
                                    <span>"Add Photo"</span>
                                </button>
                            </div>
                            <input
                                type="file"
                                id="product-photo-input"
                                multiple
                                accept="image/*"
                                style="display: none;"
                                on:change=handle_file_change
                            />
                            <p class="photo-manager__hint">
                                "Add up to 4 clear photos of your item."
                            </p>
                        </div>
                    </Show>
                </div>

                // Details pane.
                <div class="product-details__body">
                    <Show
                        when=move || is_owner && is_editing.get()
                        fallback=move || {
                            view! {
                                <div class="product-details__view">
                                    <div class="product-details__badges">
                                        <Show when=move || is_owner>
                                            <span class="badge badge--owner">"Yours"</span>
                                        </Show>
                                        <span class="badge badge--condition">
                                            {move || product.with(|p| p.condition.as_str())}
                                        </span>
                                        <span class="badge badge--muted">
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
                                        <span class="badge badge--muted">
                                            {move || product.with(|p| posted_label(p.created_at.as_ref()))}
                                        </span>
                                    </div>

                                    <h2>{move || product.with(|p| p.title.clone())}</h2>
                                    <p class="product-details__price">
                                        {move || product.with(|p| format!("Rs. {}", p.price))}
                                    </p>
                                    <p class="product-details__description">
                                        {move || product.with(|p| p.description.clone())}
                                    </p>

                                    <div class="seller-card">
                                        <div class="seller-card__identity">
                                            <span class="seller-card__avatar">{icon("user")}</span>
                                            <div>
                                                <p class="seller-card__label">"Verified Seller"</p>
                                                <p class="seller-card__name">
                                                    {move || {
                                                        if is_owner {
                                                            "You (Owner)".to_string()
                                                        } else {
                                                            product.with(|p| {
                                                                p.seller_name.clone().unwrap_or_else(|| {
                                                                    format!("Student #{}", p.seller_id)
                                                                })
                                                            })
                                                        }
                                                    }}
                                                </p>
                                            </div>
                                        </div>
                                        <div class="seller-card__contact">
                                            {icon("phone")}
                                            <span>
                                                {move || {
                                                    product.with(|p| {
                                                        p.contact_phone
                                                            .clone()
                                                            .filter(|c| !c.is_empty())
                                                            .unwrap_or_else(|| "No phone provided".to_string())
                                                    })
                                                }}
                                            </span>
                                        </div>
                                        <Show when=move || {
                                            !is_owner
                                                && product.with(|p| {
                                                    p.contact_phone
                                                        .as_ref()
                                                        .map(|c| !c.is_empty())
                                                        .unwrap_or(false)
                                                })
                                        }>
                                            <a
                                                class="button button--call"
                                                href=move || {
                                                    product.with(|p| {
                                                        format!(
                                                            "tel:{}",
                                                            p.contact_phone.clone().unwrap_or_default()
                                                        )
                                                    })
                                                }
                                            >
                                                {icon("phone")}
                                                " Call Seller Now"
                                            </a>
                                        </Show>
                                    </div>
                                </div>
                            }
                        }
                    >
                        // Owner edit form: every input merges one field into the
                        // draft, which marks it dirty.
                        <div class="product-details__edit">
                            <div class="form__group">
                                <label class="form__label">"Title"</label>
                                <input
                                    type="text"
                                    prop:value=move || vm.draft.with(|d| d.title.clone())
                                    on:input=move |ev| {
                                        let v = event_target_value(&ev);
                                        vm.edit(|d| d.set_title(v));
                                    }
                                />
                            </div>
                            <div class="form__group">
                                <label class="form__label">"Price (Rs.)"</label>
                                <input
                                    type="number"
                                    prop:value=move || vm.draft.with(|d| d.price.clone())
                                    on:input=move |ev| {
                                        let v = event_target_value(&ev);
                                        vm.edit(|d| d.set_price(v));
                                    }
                                />
                            </div>
                            <div class="form__group">
                                <label class="form__label">"Condition"</label>
                                <select
                                    prop:value=move || {
                                        vm.draft.with(|d| d.condition.as_str().to_string())
                                    }
                                    on:change=move |ev| {
                                        let v = event_target_value(&ev);
                                        vm.edit(|d| d.set_condition(ProductCondition::from_str(&v)));
                                    }
                                >
                                    <option value="NEW">"Brand New"</option>
                                    <option value="USED">"Used"</option>
                                </select>
                            </div>
                            <div class="form__group">
                                <label class="form__label">"Location"</label>
                                <input
                                    type="text"
                                    prop:value=move || vm.draft.with(|d| d.location.clone())
                                    on:input=move |ev| {
                                        let v = event_target_value(&ev);
                                        vm.edit(|d| d.set_location(v));
                                    }
                                />
                            </div>
                            <div class="form__group">
                                <label class="form__label">"Contact Phone"</label>
                                <input
                                    type="tel"
                                    placeholder="071 XXX XXXX"
                                    prop:value=move || vm.draft.with(|d| d.contact_phone.clone())
                                    on:input=move |ev| {
                                        let v = event_target_value(&ev);
                                        vm.edit(|d| d.set_contact_phone(v));
                                    }
                                />
                            </div>
                            <div class="form__group">
                                <label class="form__label">"Description"</label>
                                <textarea
                                    rows=4
                                    prop:value=move || vm.draft.with(|d| d.description.clone())
                                    on:input=move |ev| {
                                        let v = event_target_value(&ev);
                                        vm.edit(|d| d.set_description(v));
                                    }
                                ></textarea>
                            </div>

                            {move || {
                                vm.error.get().map(|e| {
                                    view! { <div class="error-message">{e}</div> }
                                })
                            }}
                        </div>
                    </Show>

                    // Action row.
                    <Show
                        when=move || is_owner
                        fallback=move || {
                            view! {
                                <div class="message-box">
                                    <textarea
                                        rows=3
                                        placeholder=move || {
                                            product.with(|p| {
                                                format!("Message the seller about {}...", p.title)
                                            })
                                        }
                                        prop:value=move || message.get()
                                        on:input=move |ev| message.set(event_target_value(&ev))
                                    ></textarea>
                                    <button
                                        type="button"
                                        class="button button--primary"
                                        disabled=move || {
                                            sending.get() || message.get().trim().is_empty()
                                        }
                                        on:click=handle_send
                                    >
                                        {icon("message")}
                                        {move || {
                                            if sending.get() { " Sending..." } else { " Send Message Now" }
                                        }}
                                    </button>
                                </div>
                            }
                        }
                    >
                        <div class="product-details__owner-actions">
                            <Show
                                when=move || is_editing.get()
                                fallback=move || {
                                    view! {
                                        <p class="product-details__owner-note">
                                            "This is your product listing"
                                        </p>
                                        <div class="product-details__buttons">
                                            <button
                                                type="button"
                                                class="button button--primary"
                                                on:click=move |_| is_editing.set(true)
                                            >
                                                {icon("edit")}
                                                " Edit Product"
                                            </button>
                                            <button
                                                type="button"
                                                class="button button--danger"
                                                on:click=handle_delete
                                            >
                                                {icon("trash")}
                                                " Delete Product"
                                            </button>
                                        </div>
                                    }
                                }
                            >
                                <div class="product-details__buttons">
                                    <button
                                        type="button"
                                        class="button button--secondary"
                                        on:click=handle_cancel_edit
                                    >
                                        "Cancel"
                                    </button>
                                    <button
                                        type="button"
                                        class="button button--primary"
                                        disabled=move || update_disabled.get()
                                        on:click=handle_save
                                    >
                                        {icon("save")}
                                        {move || {
                                            if update_pending.get() {
                                                " Updating..."
                                            } else {
                                                " Update Product"
                                            }
                                        }}
                                    </button>
                                </div>
                            </Show>
                        </div>
                    </Show>
                </div>
            </div>
        </div>
    }
}
