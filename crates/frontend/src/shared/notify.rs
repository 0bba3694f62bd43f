//! Centralized toast and confirmation services.
//!
//! Both are small context-provided stores of signals; the matching host
//! components (`ToastHost`, `ConfirmHost`) are mounted once in the app shell.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

const TOAST_DISMISS_MS: u32 = 4_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
    Info,
    Warning,
}

impl ToastLevel {
    fn class(&self) -> &'static str {
        match self {
            ToastLevel::Success => "toast toast--success",
            ToastLevel::Error => "toast toast--error",
            ToastLevel::Info => "toast toast--info",
            ToastLevel::Warning => "toast toast--warning",
        }
    }

    fn symbol(&self) -> &'static str {
        match self {
            ToastLevel::Success => "✓",
            ToastLevel::Error => "✕",
            ToastLevel::Info => "ℹ",
            ToastLevel::Warning => "!",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub text: String,
}

/// Toast store; every shown toast auto-dismisses after a few seconds.
#[derive(Clone, Copy)]
pub struct NotifyService {
    toasts: RwSignal<Vec<Toast>>,
    next_id: RwSignal<u64>,
}

impl NotifyService {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(0),
        }
    }

    pub fn show(&self, level: ToastLevel, text: impl Into<String>) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);

        self.toasts.update(|toasts| {
            toasts.push(Toast {
                id,
                level,
                text: text.into(),
            })
        });

        let toasts = self.toasts;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_DISMISS_MS).await;
            toasts.update(|list| list.retain(|t| t.id != id));
        });
    }

    pub fn success(&self, text: impl Into<String>) {
        self.show(ToastLevel::Success, text);
    }

    pub fn error(&self, text: impl Into<String>) {
        self.show(ToastLevel::Error, text);
    }

    pub fn info(&self, text: impl Into<String>) {
        self.show(ToastLevel::Info, text);
    }

    pub fn warning(&self, text: impl Into<String>) {
        self.show(ToastLevel::Warning, text);
    }
}

impl Default for NotifyService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_notify() -> NotifyService {
    use_context::<NotifyService>().expect("NotifyService not provided in context")
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let notify = use_notify();
    let toasts = notify.toasts;

    view! {
        <div class="toast-host">
            <For each=move || toasts.get() key=|toast| toast.id let:toast>
                <div class=toast.level.class()>
                    <span class="toast__symbol">{toast.level.symbol()}</span>
                    <span class="toast__text">{toast.text.clone()}</span>
                </div>
            </For>
        </div>
    }
}

/// One pending confirmation dialog.
#[derive(Clone)]
pub struct ConfirmRequest {
    pub title: String,
    pub message: String,
    pub confirm_text: String,
    pub cancel_text: String,
    pub danger: bool,
    pub on_confirm: Callback<()>,
}

/// Confirmation dialog store; only one dialog can be open at a time.
#[derive(Clone, Copy)]
pub struct ConfirmService {
    current: RwSignal<Option<ConfirmRequest>>,
}

impl ConfirmService {
    pub fn new() -> Self {
        Self {
            current: RwSignal::new(None),
        }
    }

    pub fn ask(&self, request: ConfirmRequest) {
        self.current.set(Some(request));
    }

    pub fn dismiss(&self) {
        self.current.set(None);
    }
}

impl Default for ConfirmService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_confirm() -> ConfirmService {
    use_context::<ConfirmService>().expect("ConfirmService not provided in context")
}

#[component]
pub fn ConfirmHost() -> impl IntoView {
    use thaw::{Button, ButtonAppearance};

    let confirm = use_confirm();
    let current = confirm.current;

    view! {
        {move || {
            current
                .get()
                .map(|request| {
                    let on_confirm = request.on_confirm;
                    view! {
                        <div class="modal-overlay" on:click=move |_| confirm.dismiss()>
                            <div class="confirm-dialog" on:click=|ev| ev.stop_propagation()>
                                <h3 class="confirm-dialog__title">{request.title.clone()}</h3>
                                <p class="confirm-dialog__message">{request.message.clone()}</p>
                                <div class=if request.danger {
                                    "confirm-dialog__actions confirm-dialog__actions--danger"
                                } else {
                                    "confirm-dialog__actions"
                                }>
                                    <Button
                                        appearance=ButtonAppearance::Secondary
                                        on_click=move |_| confirm.dismiss()
                                    >
                                        {request.cancel_text.clone()}
                                    </Button>
                                    <Button
                                        appearance=ButtonAppearance::Primary
                                        on_click=move |_| {
                                            confirm.dismiss();
                                            on_confirm.run(());
                                        }
                                    >
                                        {request.confirm_text.clone()}
                                    </Button>
                                </div>
                            </div>
                        </div>
                    }
                })
        }}
    }
}
