use contracts::system::auth::{RegisterRequest, Role};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::icons::icon;
use crate::shared::notify::use_notify;
use crate::system::auth::api;

/// Two-step registration: account credentials first, academic details second.
#[component]
pub fn RegisterPage(#[prop(into)] on_login: Callback<()>) -> impl IntoView {
    let step = RwSignal::new(1u8);

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let full_name = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let university_id = RwSignal::new(String::new());
    let department = RwSignal::new(String::new());
    let batch = RwSignal::new(String::new());

    let error_message = RwSignal::new(Option::<String>::None);
    let is_loading = RwSignal::new(false);

    let notify = use_notify();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if step.get() != 2 {
            return;
        }

        let request = RegisterRequest {
            email: email.get(),
            password: password.get(),
            role: Role::Student,
            full_name: full_name.get(),
            phone: phone.get(),
            university_id: university_id.get(),
            department: department.get(),
            batch: batch.get(),
        };

        is_loading.set(true);
        error_message.set(None);

        spawn_local(async move {
            match api::register(request).await {
                Ok(_) => {
                    notify.success("Registration Successful! Please login.");
                    is_loading.set(false);
                    on_login.run(());
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
            <div class="auth-card auth-card--wide">
                <div class="auth-card__side">
                    <h2>"Join the Community"</h2>
                    <p>
                        "Connect with thousands of students. Buy, sell, and trade within a trusted campus network."
                    </p>
                    <span class="auth-card__note">"Verified university emails only"</span>
                </div>

                <div class="auth-card__form">
                    <h3>"Create Account"</h3>
                    <p class="auth-card__hint">"It takes less than a minute."</p>

                    <Show when=move || error_message.get().is_some()>
                        <div class="error-message">
                            {move || error_message.get().unwrap_or_default()}
                        </div>
                    </Show>

                    <form on:submit=on_submit>
                        <Show when=move || step.get() == 1>
                            <div class="form__step">
                                <div class="form__group form__group--icon">
                                    {icon("mail")}
                                    <input
                                        type="email"
                                        placeholder="University Email"
                                        prop:value=move || email.get()
                                        on:input=move |ev| email.set(event_target_value(&ev))
                                        required
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
                                    />
                                </div>
                                <div class="form__group form__group--icon">
                                    {icon("user")}
                                    <input
                                        type="text"
                                        placeholder="Full Name"
                                        prop:value=move || full_name.get()
                                        on:input=move |ev| full_name.set(event_target_value(&ev))
                                        required
                                    />
                                </div>
                                <div class="form__group form__group--icon">
                                    {icon("phone")}
                                    <input
                                        type="tel"
                                        placeholder="Phone Number"
                                        prop:value=move || phone.get()
                                        on:input=move |ev| phone.set(event_target_value(&ev))
                                        required
                                    />
                                </div>
                                <button
                                    type="button"
                                    class="button button--primary button--block"
                                    on:click=move |_| step.set(2)
                                >
                                    "Next Step"
                                </button>
                            </div>
                        </Show>

                        <Show when=move || step.get() == 2>
                            <div class="form__step">
                                <div class="form__group">
                                    <input
                                        type="text"
                                        placeholder="Student ID (e.g. 2021ICT050)"
                                        prop:value=move || university_id.get()
                                        on:input=move |ev| university_id.set(event_target_value(&ev))
                                        required
                                    />
                                </div>
                                <div class="form__group">
                                    <input
                                        type="text"
                                        placeholder="Department"
                                        prop:value=move || department.get()
                                        on:input=move |ev| department.set(event_target_value(&ev))
                                        required
                                    />
                                </div>
                                <div class="form__group">
                                    <input
                                        type="text"
                                        placeholder="Batch (e.g. 2021/2022)"
                                        prop:value=move || batch.get()
                                        on:input=move |ev| batch.set(event_target_value(&ev))
                                        required
                                    />
                                </div>
                                <div class="form__actions">
                                    <button
                                        type="button"
                                        class="button button--secondary"
                                        on:click=move |_| step.set(1)
                                    >
                                        "Back"
                                    </button>
                                    <button
                                        type="submit"
                                        class="button button--primary"
                                        disabled=move || is_loading.get()
                                    >
                                        {move || {
                                            if is_loading.get() {
                                                "Registering..."
                                            } else {
                                                "Complete Registration"
                                            }
                                        }}
                                    </button>
                                </div>
                            </div>
                        </Show>
                    </form>

                    <p class="auth-card__footer">
                        "Already member? "
                        <button
                            type="button"
                            class="link-button"
                            on:click=move |_| on_login.run(())
                        >
                            "Login"
                        </button>
                    </p>
                </div>
            </div>
        </div>
    }
}
