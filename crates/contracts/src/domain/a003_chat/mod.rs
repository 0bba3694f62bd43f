pub mod aggregate;

pub use aggregate::{ChatMessage, Conversation, SendMessageRequest};
