//! Application shell - root components.
//!
//! Contains:
//! - `AppShell` - auth gate (shows the login/register pages or `MainLayout`)
//! - `MainLayout` - navbar plus the active page

use crate::domain::a002_product::ui::list::widget::ProductListPage;
use crate::domain::a002_product::ui::my_products::MyProductsPage;
use crate::domain::a002_product::ui::sell::SellPage;
use crate::domain::a003_chat::ui::page::MessagesPage;
use crate::layout::global_context::{AppGlobalContext, Page};
use crate::layout::navbar::Navbar;
use crate::shared::notify::{ConfirmHost, ToastHost};
use crate::system::auth::context::use_auth;
use crate::system::pages::login::LoginPage;
use crate::system::pages::register::RegisterPage;
use crate::system::users::page::ProfilePage;
use leptos::prelude::*;

/// Main application layout: navbar on top, the active page below.
///
/// Initializes URL integration so the active page survives a refresh
/// (`?page=...`).
#[component]
fn MainLayout() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    // Runs once when the component is created.
    ctx.init_url_integration();

    view! {
        <div class="app-root">
            <Navbar />
            <main class="app-main">
                {move || match ctx.active.get() {
                    Page::Home => view! { <ProductListPage /> }.into_any(),
                    Page::Sell => view! { <SellPage /> }.into_any(),
                    Page::MyListings => view! { <MyProductsPage /> }.into_any(),
                    Page::Messages => view! { <MessagesPage /> }.into_any(),
                    Page::Profile => view! { <ProfilePage /> }.into_any(),
                }}
            </main>
        </div>
    }
}

/// Login/register switch shown to signed-out visitors.
#[component]
fn AuthPages() -> impl IntoView {
    let show_register = RwSignal::new(false);

    view! {
        <Show
            when=move || show_register.get()
            fallback=move || {
                view! { <LoginPage on_register=Callback::new(move |_| show_register.set(true)) /> }
            }
        >
            <RegisterPage on_login=Callback::new(move |_| show_register.set(false)) />
        </Show>
    }
}

/// Application shell - auth gate component.
///
/// Shows:
/// - the login/register pages when nobody is signed in
/// - `MainLayout` for a signed-in user
#[component]
pub fn AppShell() -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.get().user.is_some()
            fallback=|| view! { <AuthPages /> }
        >
            <MainLayout />
        </Show>
        <ToastHost />
        <ConfirmHost />
    }
}
