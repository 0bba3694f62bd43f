use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::icons::icon;
use crate::shared::notify::use_notify;
use crate::system::auth::{api, context};

#[component]
pub fn LoginPage(#[prop(into)] on_register: Callback<()>) -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error_message = RwSignal::new(Option::<String>::None);
    let is_loading = RwSignal::new(false);

    let notify = use_notify();
    let (_, set_auth_state) = context::use_auth();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let email_val = email.get();
        let password_val = password.get();

        is_loading.set(true);
        error_message.set(None);

        spawn_local(async move {
            match api::login(email_val, password_val).await {
                Ok(user) => {
                    // Switches the shell to MainLayout automatically.
                    context::sign_in(set_auth_state, user);
                    notify.success("Login Successful!");
                    is_loading.set(false);
                }
                Err(e) => {
                    error_message.set(Some(e));
                    is_loading.set(false);
                }
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <div class="auth-card__header">
                    <h2>"Welcome Back"</h2>
                    <p>"Login to manage your listings"</p>
                </div>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form__group form__group--icon">
                        {icon("mail")}
                        <input
                            type="email"
                            placeholder="Email Address"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="form__group form__group--icon">
                        {icon("lock")}
                        <input
                            type="password"
                            placeholder="Password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <button
                        type="submit"
                        class="button button--primary button--block"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "Signing In..." } else { "Sign In" }}
                    </button>
                </form>

                <p class="auth-card__footer">
                    "New here? "
                    <button
                        type="button"
                        class="link-button"
                        on:click=move |_| on_register.run(())
                    >
                        "Create Account"
                    </button>
                </p>
            </div>
        </div>
    }
}
