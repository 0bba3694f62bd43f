use contracts::system::users::UserProfile;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::model;
use crate::shared::icons::icon;
use crate::shared::notify::{use_confirm, use_notify, ConfirmRequest};
use crate::shared::upload;
use crate::system::auth::context::{sign_out, use_auth};

/// Profile page: view mode with the stored details, edit mode with change
/// tracking and avatar upload. Saving sends the full profile payload and
/// refetches on success.
#[component]
pub fn ProfilePage() -> impl IntoView {
    let (auth_state, set_auth_state) = use_auth();
    let notify = use_notify();
    let confirm = use_confirm();

    let user_id = auth_state.get_untracked().user_id().unwrap_or_default();
    let email = auth_state
        .get_untracked()
        .user
        .map(|u| u.email)
        .unwrap_or_default();

    let profile = RwSignal::new(Option::<UserProfile>::None);
    let loading = RwSignal::new(true);
    let saving = RwSignal::new(false);
    let uploading = RwSignal::new(false);
    let is_editing = RwSignal::new(false);
    let has_changes = RwSignal::new(false);

    let load_profile = move || {
        spawn_local(async move {
            match model::fetch_profile(user_id).await {
                Ok(data) => profile.set(Some(data)),
                Err(e) => log::warn!("failed to fetch profile: {}", e),
            }
            loading.set(false);
        });
    };

    // Initial load.
    load_profile();

    // Merge one field into the profile draft and mark it changed.
    let edit_field = move |apply: &dyn Fn(&mut UserProfile)| {
        profile.update(|p| {
            if let Some(p) = p.as_mut() {
                apply(p);
            }
        });
        has_changes.set(true);
    };

    let handle_avatar_upload = move |ev: web_sys::Event| {
        use wasm_bindgen::JsCast;
        let input: web_sys::HtmlInputElement = match ev.target().and_then(|t| t.dyn_into().ok()) {
            Some(input) => input,
            None => return,
        };
        let files = upload::files_from_input(&input);
        input.set_value("");
        let Some(file) = files.into_iter().next() else {
            return;
        };

        uploading.set(true);
        spawn_local(async move {
            match upload::upload_image(file).await {
                Ok(url) => {
                    profile.update(|p| {
                        if let Some(p) = p.as_mut() {
                            p.avatar_url = Some(url);
                        }
                    });
                    has_changes.set(true);
                    notify.success("New photo uploaded!");
                }
                Err(e) => {
                    log::warn!("avatar upload failed: {}", e);
                    notify.error("Failed to upload image");
                }
            }
            uploading.set(false);
        });
    };

    let remove_avatar = move |_| {
        profile.update(|p| {
            if let Some(p) = p.as_mut() {
                p.avatar_url = None;
            }
        });
        has_changes.set(true);
        notify.info("Photo removed. Apply to save.");
    };

    let handle_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        // Same guard shape as the listing edit flow: only changed drafts are
        // saved, never while a save is in flight.
        if !has_changes.get() || saving.get() {
            return;
        }
        let Some(payload) = profile.get_untracked() else {
            return;
        };

        saving.set(true);
        spawn_local(async move {
            match model::update_profile(&payload).await {
                Ok(_) => {
                    notify.success("Profile saved successfully!");
                    has_changes.set(false);
                    is_editing.set(false);
                    load_profile();
                }
                Err(e) => {
                    log::warn!("profile save failed: {}", e);
                    notify.error("Failed to save profile");
                }
            }
            saving.set(false);
        });
    };

    let handle_logout = move |_| {
        confirm.ask(ConfirmRequest {
            title: "Sign Out?".to_string(),
            message: "Are you sure you want to log out of your account?".to_string(),
            confirm_text: "Log Out".to_string(),
            cancel_text: "Stay Logged In".to_string(),
            danger: true,
            on_confirm: Callback::new(move |_| {
                sign_out(set_auth_state);
                notify.info("Logged out successfully");
            }),
        });
    };

    let email_for_view = email.clone();

    view! {
        <div class="page profile-page">
            <Show
                when=move || !loading.get()
                fallback=|| {
                    view! {
                        <div class="page-loading">
                            <thaw::Spinner />
                            <p>"Loading your profile..."</p>
                        </div>
                    }
                }
            >
                <div class="profile-header card">
                    <div class="profile-header__avatar-wrap">
                        <div
                            class=move || {
                                if is_editing.get() {
                                    "profile-avatar profile-avatar--editable"
                                } else {
                                    "profile-avatar"
                                }
                            }
                            on:click=move |_| {
                                if !is_editing.get() {
                                    return;
                                }
                                if let Some(document) =
                                    web_sys::window().and_then(|w| w.document())
                                {
                                    if let Some(input) = document.get_element_by_id("avatar-input")
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
                                let current = profile.get();
                                match current.as_ref().and_then(|p| p.avatar_url.clone()) {
                                    Some(url) => view! {
                                        <img src=url alt="Avatar" class="profile-avatar__image" />
                                    }
                                        .into_any(),
                                    None => view! {
                                        <span class="profile-avatar__initial">
                                            {current.map(|p| p.initial()).unwrap_or_default()}
                                        </span>
                                    }
                                        .into_any(),
                                }
                            }}
                            <Show when=move || is_editing.get()>
                                <span class="profile-avatar__overlay">
                                    {move || {
                                        if uploading.get() {
                                            view! { <thaw::Spinner /> }.into_any()
                                        } else {
                                            icon("camera")
                                        }
                                    }}
                                </span>
                            </Show>
                        </div>
                        <Show when=move || {
                            is_editing.get()
                                && profile.get().map(|p| p.avatar_url.is_some()).unwrap_or(false)
                        }>
                            <button
                                type="button"
                                class="profile-avatar__remove"
                                title="Remove photo"
                                on:click=remove_avatar
                            >
                                {icon("trash")}
                            </button>
                        </Show>
                        <input
                            type="file"
                            id="avatar-input"
                            accept="image/*"
                            style="display: none;"
                            on:change=handle_avatar_upload
                        />
                    </div>

                    <div class="profile-header__identity">
                        <h1>{move || profile.get().map(|p| p.full_name).unwrap_or_default()}</h1>
                        <span class="profile-header__email">
                            {icon("mail")}
                            {email_for_view.clone()}
                        </span>
                    </div>

                    <button
                        type="button"
                        class=move || {
                            if is_editing.get() {
                                "button button--secondary"
                            } else {
                                "button button--primary"
                            }
                        }
                        on:click=move |_| is_editing.update(|e| *e = !*e)
                    >
                        {move || if is_editing.get() { icon("x") } else { icon("edit") }}
                        {move || if is_editing.get() { " Exit Editor" } else { " Edit Profile" }}
                    </button>
                </div>

                <div class="profile-body">
                    <div class="card profile-summary">
                        <h3>"Profile Summary"</h3>
                        <div class="profile-summary__item">
                            <span class="profile-summary__label">"Status"</span>
                            <span class="profile-summary__value">"Verified Student"</span>
                        </div>
                        <div class="profile-summary__item">
                            <span class="profile-summary__label">"Department"</span>
                            <span class="profile-summary__value">
                                {move || {
                                    profile
                                        .get()
                                        .map(|p| p.department)
                                        .filter(|d| !d.is_empty())
                                        .unwrap_or_else(|| "University Campus".to_string())
                                }}
                            </span>
                        </div>
                        <button
                            type="button"
                            class="button button--danger-ghost button--block"
                            on:click=handle_logout
                        >
                            {icon("log-out")}
                            " Sign Out Now"
                        </button>
                    </div>

                    <div class="card profile-details">
                        <Show
                            when=move || is_editing.get()
                            fallback=move || {
                                view! {
                                    <div class="profile-info">
                                        <h3>"Information"</h3>
                                        {move || {
                                            let p = profile.get().unwrap_or_default();
                                            let rows = [
                                                ("user", "Full Name", p.full_name.clone()),
                                                ("phone", "Contact Number", p.phone.clone()),
                                                ("user", "Student ID", p.university_id.clone()),
                                                ("map-pin", "Department", p.department.clone()),
                                                ("user", "Batch / Intake", p.batch.clone()),
                                            ];
                                            rows.into_iter()
                                                .map(|(icon_name, label, value)| {
                                                    let value = if value.is_empty() {
                                                        "Not provided".to_string()
                                                    } else {
                                                        value
                                                    };
                                                    view! {
                                                        <div class="info-item">
                                                            <span class="info-item__icon">{icon(icon_name)}</span>
                                                            <div>
                                                                <p class="info-item__label">{label}</p>
                                                                <p class="info-item__value">{value}</p>
                                                            </div>
                                                        </div>
                                                    }
                                                })
                                                .collect_view()
                                        }}
                                    </div>
                                }
                            }
                        >
                            <form class="profile-form" on:submit=handle_submit>
                                <h3>"Update Information"</h3>
                                <div class="form__grid">
                                    <div class="form__group">
                                        <label class="form__label">"Full Name"</label>
                                        <input
                                            type="text"
                                            prop:value=move || {
                                                profile.get().map(|p| p.full_name).unwrap_or_default()
                                            }
                                            on:input=move |ev| {
                                                let v = event_target_value(&ev);
                                                edit_field(&|p| p.full_name = v.clone());
                                            }
                                            required
                                        />
                                    </div>
                                    <div class="form__group">
                                        <label class="form__label">"Phone Number"</label>
                                        <input
                                            type="tel"
                                            prop:value=move || {
                                                profile.get().map(|p| p.phone).unwrap_or_default()
                                            }
                                            on:input=move |ev| {
                                                let v = event_target_value(&ev);
                                                edit_field(&|p| p.phone = v.clone());
                                            }
                                            required
                                        />
                                    </div>
                                    <div class="form__group">
                                        <label class="form__label">"Student ID"</label>
                                        <input
                                            type="text"
                                            prop:value=move || {
                                                profile.get().map(|p| p.university_id).unwrap_or_default()
                                            }
                                            on:input=move |ev| {
                                                let v = event_target_value(&ev);
                                                edit_field(&|p| p.university_id = v.clone());
                                            }
                                            required
                                        />
                                    </div>
                                    <div class="form__group">
                                        <label class="form__label">"Department"</label>
                                        <input
                                            type="text"
                                            prop:value=move || {
                                                profile.get().map(|p| p.department).unwrap_or_default()
                                            }
                                            on:input=move |ev| {
                                                let v = event_target_value(&ev);
                                                edit_field(&|p| p.department = v.clone());
                                            }
                                            required
                                        />
                                    </div>
                                    <div class="form__group">
                                        <label class="form__label">"Batch"</label>
                                        <input
                                            type="text"
                                            prop:value=move || {
                                                profile.get().map(|p| p.batch).unwrap_or_default()
                                            }
                                            on:input=move |ev| {
                                                let v = event_target_value(&ev);
                                                edit_field(&|p| p.batch = v.clone());
                                            }
                                            required
                                        />
                                    </div>
                                </div>

                                <div class="form__actions">
                                    <button
                                        type="submit"
                                        class="button button--primary"
                                        disabled=move || {
                                            !has_changes.get() || saving.get() || uploading.get()
                                        }
                                    >
                                        {icon("save")}
                                        {move || if saving.get() { " Saving..." } else { " Apply Updates" }}
                                    </button>
                                </div>
                            </form>
                        </Show>
                    </div>
                </div>
            </Show>
        </div>
    }
}
