use contracts::domain::a001_category::Category;
use contracts::domain::a002_product::ProductCondition;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a001_category::model as category_model;
use crate::domain::a002_product::ui::details::ProductDraftVm;
use crate::layout::global_context::{AppGlobalContext, Page};
use crate::shared::icons::icon;
use crate::shared::notify::use_notify;
use crate::shared::upload;

/// Sell flow: pick a category first, then fill in the listing details. The
/// whole form runs on the same draft ViewModel as the edit dialog.
#[component]
pub fn SellPage() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let notify = use_notify();
    let (auth_state, _) = crate::system::auth::context::use_auth();

    let user_id = auth_state.get_untracked().user_id().unwrap_or_default();
    let greeting_name = auth_state
        .get_untracked()
        .user
        .map(|u| u.display_name().to_string())
        .unwrap_or_else(|| "Student".to_string());

    let vm = ProductDraftVm::new();
    let create_disabled = vm.is_create_disabled();
    let create_pending = vm.is_pending();
    let categories = RwSignal::new(Vec::<Category>::new());

    spawn_local(async move {
        match category_model::fetch_categories().await {
            Ok(items) => categories.set(items),
            Err(e) => log::warn!("failed to fetch categories: {}", e),
        }
    });

    let category_chosen = move || vm.draft.with(|d| d.category_id.is_some());

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

    let handle_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        vm.submit_create(
            user_id,
            notify,
            Callback::new(move |_| ctx.navigate(Page::Home)),
        );
    };

    view! {
        <div class="page sell-page">
            <div class="sell-page__intro">
                <h1>{format!("Hello, {}!", greeting_name)}</h1>
                <p>"Ready to turn your unused items into extra cash?"</p>
            </div>

            <Show
                when=category_chosen
                fallback=move || {
                    view! {
                        // STEP 1: category selection
                        <div class="sell-page__categories">
                            <h2>"First, what are you selling?"</h2>
                            <div class="category-grid">
                                <For
                                    each=move || categories.get()
                                    key=|cat| cat.category_id
                                    let:cat
                                >
                                    {
                                        let id = cat.category_id;
                                        let icon_char = category_model::category_icon(&cat.name);
                                        view! {
                                            <button
                                                type="button"
                                                class="category-tile"
                                                on:click=move |_| vm.edit(|d| d.set_category(id))
                                            >
                                                <span class="category-tile__icon">{icon_char}</span>
                                                <span class="category-tile__name">{cat.name.clone()}</span>
                                            </button>
                                        }
                                    }
                                </For>
                            </div>
                        </div>
                    }
                }
            >
                // STEP 2: details form
                <div class="sell-page__form card">
                    <div class="sell-page__form-header">
                        <h3>"Item Details"</h3>
                        <button
                            type="button"
                            class="link-button"
                            on:click=move |_| vm.edit(|d| d.clear_category())
                        >
                            "Change Category"
                        </button>
                    </div>

                    <form on:submit=handle_submit>
                        <div class="form__grid">
                            <div class="form__group">
                                <label class="form__label">"Title"</label>
                                <input
                                    type="text"
                                    placeholder="e.g. Calculus Textbook"
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
                                    placeholder="0.00"
                                    prop:value=move || vm.draft.with(|d| d.price.clone())
                                    on:input=move |ev| {
                                        let v = event_target_value(&ev);
                                        vm.edit(|d| d.set_price(v));
                                    }
                                />
                            </div>
                        </div>

                        <div class="form__group">
                            <label class="form__label">"Photos"</label>
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

                                // The add-photo tile is disabled for the whole
                                // duration of a running batch.
                                <button
                                    type="button"
                                    class="photo-manager__add"
                                    disabled=move || vm.uploading.get()
                                    on:click=move |_| {
                                        if let Some(document) =
                                            web_sys::window().and_then(|w| w.document())
                                        {
                                            if let Some(input) =
                                                document.get_element_by_id("sell-photo-input")
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
                                            icon("upload")
                                        }
                                    }}
                                    <span>"Add Photo"</span>
                                </button>
                            </div>
                            <input
                                type="file"
                                id="sell-photo-input"
                                multiple
                                accept="image/*"
                                style="display: none;"
                                on:change=handle_file_change
                            />
                        </div>

                        <div class="form__grid">
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
                                    <option value="USED">"Used"</option>
                                    <option value="NEW">"Brand New"</option>
                                </select>
                            </div>
                            <div class="form__group">
                                <label class="form__label">"Location"</label>
                                <input
                                    type="text"
                                    placeholder="e.g. Library"
                                    prop:value=move || vm.draft.with(|d| d.location.clone())
                                    on:input=move |ev| {
                                        let v = event_target_value(&ev);
                                        vm.edit(|d| d.set_location(v));
                                    }
                                />
                            </div>
                            <div class="form__group">
                                <label class="form__label">"Contact Phone (Mobile No)"</label>
                                <input
                                    type="tel"
                                    placeholder="e.g. 071 234 5678"
                                    prop:value=move || vm.draft.with(|d| d.contact_phone.clone())
                                    on:input=move |ev| {
                                        let v = event_target_value(&ev);
                                        vm.edit(|d| d.set_contact_phone(v));
                                    }
                                />
                            </div>
                        </div>

                        <div class="form__group">
                            <label class="form__label">"Description"</label>
                            <textarea
                                rows=4
                                placeholder="Tell buyers about your item..."
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

                        <button
                            type="submit"
                            class="button button--primary button--block"
                            disabled=move || create_disabled.get()
                        >
                            {move || {
                                if create_pending.get() {
                                    "Posting..."
                                } else {
                                    "Post Listing Now"
                                }
                            }}
                        </button>
                    </form>
                </div>
            </Show>
        </div>
    }
}
