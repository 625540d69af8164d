// src/state/chat_state.rs
use chrono::{DateTime, Utc};
use uuid::Uuid;

pub const SIMULATED_REPLY: &str = "This is a simulated response from your uploaded model. \
In a real implementation, this would process your input through the uploaded model and dataset.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Assistant,
}

#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub id: Uuid,
    pub role: ChatRole,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    fn new(role: ChatRole, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role,
            text: text.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Append-only log for the "Test Your Model" panel plus the unsent draft.
#[derive(Debug, Clone, Default)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
    pub draft: String,
}

impl ChatState {
    /// Sends the draft. Blank drafts are ignored and left in place.
    pub fn send(&mut self) -> bool {
        if self.draft.trim().is_empty() {
            return false;
        }
        let text = std::mem::take(&mut self.draft);
        self.messages.push(ChatMessage::new(ChatRole::User, text));
        self.messages.push(ChatMessage::new(ChatRole::Assistant, SIMULATED_REPLY));
        true
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn send_appends_user_then_reply() {
        let mut chat = ChatState::default();
        chat.draft = "age=39, sex=Female".to_string();
        assert!(chat.send());

        assert_eq!(chat.messages.len(), 2);
        assert_eq!(chat.messages[0].role, ChatRole::User);
        assert_eq!(chat.messages[0].text, "age=39, sex=Female");
        assert_eq!(chat.messages[1].role, ChatRole::Assistant);
        assert_eq!(chat.messages[1].text, SIMULATED_REPLY);
        assert!(chat.draft.is_empty());
    }

    #[test]
    fn blank_draft_appends_nothing() {
        let mut chat = ChatState::default();
        for draft in ["", "   ", "\t\n"] {
            chat.draft = draft.to_string();
            assert!(!chat.send());
        }
        assert!(chat.is_empty());
    }

    #[test]
    fn log_keeps_order_across_sends() {
        let mut chat = ChatState::default();
        chat.draft = "first".into();
        chat.send();
        chat.draft = "second".into();
        chat.send();

        let roles: Vec<_> = chat.messages.iter().map(|m| m.role).collect();
        assert_eq!(roles, [ChatRole::User, ChatRole::Assistant, ChatRole::User, ChatRole::Assistant]);
        assert_eq!(chat.messages[2].text, "second");
    }

    #[test]
    fn every_message_gets_its_own_id() {
        let mut chat = ChatState::default();
        for text in ["one", "two"] {
            chat.draft = text.into();
            chat.send();
        }

        let ids: std::collections::HashSet<_> = chat.messages.iter().map(|m| m.id).collect();
        assert_eq!(ids.len(), chat.messages.len());
    }
}
