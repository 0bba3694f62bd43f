//! Messages - View Model

use contracts::domain::a003_chat::{ChatMessage, Conversation, SendMessageRequest};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::super::model;
use crate::shared::notify::NotifyService;

#[derive(Clone, Copy)]
pub struct MessagesVm {
    pub conversations: RwSignal<Vec<Conversation>>,
    pub selected: RwSignal<Option<Conversation>>,
    pub messages: RwSignal<Vec<ChatMessage>>,
    pub new_message: RwSignal<String>,
    pub loading: RwSignal<bool>,
    pub is_sending: RwSignal<bool>,
}

impl MessagesVm {
    pub fn new() -> Self {
        Self {
            conversations: RwSignal::new(Vec::new()),
            selected: RwSignal::new(None),
            messages: RwSignal::new(Vec::new()),
            new_message: RwSignal::new(String::new()),
            loading: RwSignal::new(true),
            is_sending: RwSignal::new(false),
        }
    }

    pub fn load_conversations(&self, user_id: i64, notify: NotifyService) {
        let this = *self;
        spawn_local(async move {
            match model::fetch_conversations(user_id).await {
                Ok(items) => this.conversations.set(items),
                Err(e) => {
                    log::warn!("failed to fetch conversations: {}", e);
                    notify.error("Failed to fetch conversations");
                }
            }
            this.loading.set(false);
        });
    }

    /// Open a conversation and pull its thread.
    pub fn select(&self, conversation: Conversation, notify: NotifyService) {
        let conversation_id = conversation.conversation_id;
        self.selected.set(Some(conversation));
        self.load_messages(conversation_id, notify);
    }

    pub fn load_messages(&self, conversation_id: i64, notify: NotifyService) {
        let this = *self;
        spawn_local(async move {
            match model::fetch_messages(conversation_id).await {
                Ok(items) => this.messages.set(items),
                Err(e) => {
                    log::warn!("failed to fetch messages: {}", e);
                    notify.error("Failed to load messages");
                }
            }
        });
    }

    /// Send the composed message: append it optimistically, POST, then
    /// refetch the thread. Single-flight - a send in progress swallows
    /// further attempts.
    pub fn send(&self, user_id: i64, notify: NotifyService, on_sent: Callback<()>) {
        let content = self.new_message.get_untracked();
        if content.trim().is_empty() || self.is_sending.get_untracked() {
            return;
        }
        let Some(conversation) = self.selected.get_untracked() else {
            return;
        };

        self.is_sending.set(true);
        self.new_message.set(String::new());

        let optimistic = ChatMessage::outgoing(
            user_id,
            conversation.other_user_id,
            conversation.product_id,
            content.clone(),
        );
        self.messages.update(|list| list.push(optimistic));
        on_sent.run(());

        let request = SendMessageRequest {
            sender_id: user_id,
            receiver_id: conversation.other_user_id,
            product_id: conversation.product_id,
            content,
        };

        let this = *self;
        spawn_local(async move {
            match model::send_message(&request).await {
                Ok(_) => {
                    match model::fetch_messages(conversation.conversation_id).await {
                        Ok(items) => {
                            this.messages.set(items);
                            on_sent.run(());
                        }
                        Err(e) => log::warn!("failed to refresh messages: {}", e),
                    }
                    this.is_sending.set(false);
                }
                Err(e) => {
                    // Drop the optimistic entry; the thread shows only
                    // settled messages again.
                    this.messages.update(|list| list.retain(|m| !m.is_local()));
                    log::warn!("message send failed: {}", e);
                    notify.error("Failed to send message");
                    this.is_sending.set(false);
                }
            }
        });
    }
}

impl Default for MessagesVm {
    fn default() -> Self {
        Self::new()
    }
}
