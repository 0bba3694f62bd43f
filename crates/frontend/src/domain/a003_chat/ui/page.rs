use leptos::prelude::*;

use super::view_model::MessagesVm;
use crate::shared::date_utils::format_time;
use crate::shared::icons::icon;
use crate::shared::notify::use_notify;

/// Two-pane messages view: conversation list on the left, the selected
/// thread on the right. Threads are polled on demand - opening a
/// conversation or sending a message refetches; there is no live channel.
#[component]
pub fn MessagesPage() -> impl IntoView {
    let notify = use_notify();
    let (auth_state, _) = crate::system::auth::context::use_auth();
    let user_id = auth_state.get_untracked().user_id().unwrap_or_default();

    let vm = MessagesVm::new();
    vm.load_conversations(user_id, notify);

    let messages_container_ref = NodeRef::<leptos::html::Div>::new();

    let scroll_to_bottom = move || {
        if let Some(container) = messages_container_ref.get() {
            request_animation_frame(move || {
                container.set_scroll_top(container.scroll_height());
            });
        }
    };

    let handle_send = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        vm.send(user_id, notify, Callback::new(move |_| scroll_to_bottom()));
    };

    view! {
        <div class="page messages-page">
            <h1>"Messages"</h1>

            <div class="messages-panel card">
                // Conversations list
                <div class="messages-panel__list">
                    <Show
                        when=move || !vm.loading.get()
                        fallback=|| view! { <div class="messages-panel__empty">"Loading..."</div> }
                    >
                        <Show
                            when=move || !vm.conversations.get().is_empty()
                            fallback=|| {
                                view! {
                                    <div class="messages-panel__empty">
                                        {icon("message")}
                                        <p>"No conversations yet"</p>
                                    </div>
                                }
                            }
                        >
                            <For
                                each=move || vm.conversations.get()
                                key=|conv| conv.conversation_id
                                let:conv
                            >
                                {
                                    let conversation_id = conv.conversation_id;
                                    let letter = conv.avatar_letter();
                                    let name = conv.other_user_name.clone();
                                    let product = conv.product_title.clone();
                                    let last = conv.last_message.clone();
                                    view! {
                                        <div
                                            class=move || {
                                                let selected = vm
                                                    .selected
                                                    .get()
                                                    .map(|c| c.conversation_id == conversation_id)
                                                    .unwrap_or(false);
                                                if selected {
                                                    "conversation conversation--selected"
                                                } else {
                                                    "conversation"
                                                }
                                            }
                                            on:click={
                                                let conv = conv.clone();
                                                move |_| vm.select(conv.clone(), notify)
                                            }
                                        >
                                            <span class="conversation__avatar">{letter}</span>
                                            <div class="conversation__summary">
                                                <h3>{name}</h3>
                                                <p class="conversation__product">{product}</p>
                                                {last.map(|m| {
                                                    view! { <p class="conversation__last">{m}</p> }
                                                })}
                                            </div>
                                        </div>
                                    }
                                }
                            </For>
                        </Show>
                    </Show>
                </div>

                // Thread
                <div class="messages-panel__thread">
                    <Show
                        when=move || vm.selected.get().is_some()
                        fallback=|| {
                            view! {
                                <div class="messages-panel__placeholder">
                                    {icon("message")}
                                    <p>"Select a conversation to start messaging"</p>
                                </div>
                            }
                        }
                    >
                        <div class="thread__header">
                            <button
                                type="button"
                                class="thread__back"
                                on:click=move |_| vm.selected.set(None)
                            >
                                {icon("arrow-left")}
                            </button>
                            <div>
                                <h2>
                                    {move || {
                                        vm.selected
                                            .get()
                                            .map(|c| c.other_user_name)
                                            .unwrap_or_default()
                                    }}
                                </h2>
                                <p>
                                    {move || {
                                        vm.selected
                                            .get()
                                            .map(|c| c.product_title)
                                            .unwrap_or_default()
                                    }}
                                </p>
                            </div>
                        </div>

                        <div class="thread__messages" node_ref=messages_container_ref>
                            <For
                                each=move || vm.messages.get()
                                key=|msg| msg.message_id.unwrap_or(-1)
                                let:msg
                            >
                                {
                                    let mine = msg.is_mine(user_id);
                                    let local = msg.is_local();
                                    let time = msg.sent_at.as_ref().map(format_time);
                                    view! {
                                        <div class=if mine {
                                            "bubble-row bubble-row--mine"
                                        } else {
                                            "bubble-row"
                                        }>
                                            <div class=move || {
                                                match (mine, local) {
                                                    (true, true) => "bubble bubble--mine bubble--pending",
                                                    (true, false) => "bubble bubble--mine",
                                                    _ => "bubble",
                                                }
                                            }>
                                                <p>{msg.content.clone()}</p>
                                                <span class="bubble__time">
                                                    {time.unwrap_or_else(|| "…".to_string())}
                                                </span>
                                            </div>
                                        </div>
                                    }
                                }
                            </For>
                        </div>

                        <form class="thread__composer" on:submit=handle_send>
                            <input
                                type="text"
                                placeholder="Type a message..."
                                prop:value=move || vm.new_message.get()
                                on:input=move |ev| vm.new_message.set(event_target_value(&ev))
                            />
                            <button
                                type="submit"
                                class="button button--primary button--round"
                                disabled=move || {
                                    vm.is_sending.get() || vm.new_message.get().trim().is_empty()
                                }
                            >
                                {icon("send")}
                            </button>
                        </form>
                    </Show>
                </div>
            </div>
        </div>
    }
}
