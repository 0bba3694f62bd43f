use crate::app_shell::AppShell;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::notify::{ConfirmService, NotifyService};
use crate::shared::theme::ThemeService;
use crate::system::auth::context::AuthProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the AppGlobalContext store to the whole app via context.
    provide_context(AppGlobalContext::new());

    // Toasts and confirmation dialogs are centralized services.
    provide_context(NotifyService::new());
    provide_context(ConfirmService::new());

    // Theme is restored from localStorage and applied to the document root.
    ThemeService::provide();

    view! {
        <AuthProvider>
            <AppShell />
        </AuthProvider>
    }
}
