use serde::{Deserialize, Serialize};

/// Conversation summary from `GET /chat/conversations/{userId}`: one row per
/// (other user, product) pair, with the latest message for the list pane.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    pub conversation_id: i64,
    pub other_user_id: i64,
    #[serde(default)]
    pub other_user_name: String,
    pub product_id: i64,
    #[serde(default)]
    pub product_title: String,
    #[serde(default)]
    pub product_image: Option<String>,
    #[serde(default)]
    pub last_message: Option<String>,
    #[serde(default)]
    pub last_message_time: Option<chrono::NaiveDateTime>,
}

impl Conversation {
    /// Single letter shown in the avatar circle.
    pub fn avatar_letter(&self) -> String {
        self.other_user_name
            .chars()
            .next()
            .map(|c| c.to_uppercase().to_string())
            .unwrap_or_else(|| "?".to_string())
    }
}

/// One message of a conversation thread.
///
/// `message_id` is `None` only for the locally appended optimistic entry that
/// exists while `POST /chat/send` is in flight; persisted messages always
/// carry a server id.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    #[serde(default)]
    pub message_id: Option<i64>,
    pub sender_id: i64,
    #[serde(default)]
    pub receiver_id: i64,
    #[serde(default)]
    pub product_id: i64,
    pub content: String,
    #[serde(default)]
    pub sent_at: Option<chrono::NaiveDateTime>,
    #[serde(default, rename = "read", alias = "isRead")]
    pub is_read: bool,
}

impl ChatMessage {
    /// Optimistic local entry for a message that has not settled yet.
    pub fn outgoing(sender_id: i64, receiver_id: i64, product_id: i64, content: String) -> Self {
        Self {
            message_id: None,
            sender_id,
            receiver_id,
            product_id,
            content,
            sent_at: None,
            is_read: false,
        }
    }

    pub fn is_local(&self) -> bool {
        self.message_id.is_none()
    }

    pub fn is_mine(&self, user_id: i64) -> bool {
        self.sender_id == user_id
    }
}

/// Body of `POST /chat/send`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageRequest {
    pub sender_id: i64,
    pub receiver_id: i64,
    pub product_id: i64,
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_message() {
        let msg: ChatMessage = serde_json::from_str(
            r#"{"messageId":11,"senderId":1,"receiverId":2,"productId":3,
                "content":"Still available?","sentAt":"2026-02-01T09:30:00","read":false}"#,
        )
        .unwrap();
        assert_eq!(msg.message_id, Some(11));
        assert!(!msg.is_local());
        assert!(msg.is_mine(1));
        assert!(!msg.is_mine(2));
    }

    #[test]
    fn test_optimistic_entry_is_local() {
        let msg = ChatMessage::outgoing(1, 2, 3, "Hi".into());
        assert!(msg.is_local());
        assert!(msg.sent_at.is_none());
    }

    #[test]
    fn test_avatar_letter() {
        let conv: Conversation = serde_json::from_str(
            r#"{"conversationId":1,"otherUserId":2,"otherUserName":"sara",
                "productId":3,"productTitle":"Bike"}"#,
        )
        .unwrap();
        assert_eq!(conv.avatar_letter(), "S");
    }
}
