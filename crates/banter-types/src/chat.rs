//! Conversation types: inbound events, turns, replies, and log records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::account::AccountId;
use crate::persona::{ArchetypeId, SenderKind};

/// A message delivered by the chat transport to one account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InboundMessage {
    /// Transport-assigned message id, unique within a channel.
    pub message_id: i64,
    /// Transport-level id of the author.
    pub sender_id: i64,
    /// Author account, when the author is one of our own accounts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender_account: Option<AccountId>,
    pub text: String,
}

/// One entry of the global rolling conversation context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub speaker: String,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl ConversationTurn {
    pub fn new(speaker: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            speaker: speaker.into(),
            text: text.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Where a reply came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReplySource {
    /// Accepted generator output on the given 1-based attempt.
    Generated { attempt: u32 },
    /// Canned persona reply after all attempts failed.
    Fallback,
}

/// The engine's answer to one inbound message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    pub account: AccountId,
    pub text: String,
    /// Acting archetype; `None` when the account had no assignment.
    pub archetype: Option<ArchetypeId>,
    pub sender: SenderKind,
    pub source: ReplySource,
}

impl Reply {
    pub fn is_fallback(&self) -> bool {
        self.source == ReplySource::Fallback
    }
}

/// A conversation opener sent by the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarterMessage {
    pub account: AccountId,
    pub archetype: ArchetypeId,
    pub text: String,
}

/// One line of the append-only chat log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatLogEntry {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub account: String,
    pub message: String,
    pub persona: String,
}

impl ChatLogEntry {
    pub fn new(account: &str, message: &str, persona: &str) -> Self {
        Self {
            id: Uuid::now_v7(),
            timestamp: Utc::now(),
            account: account.to_string(),
            message: message.to_string(),
            persona: persona.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reply_source_serde_tagged() {
        let json = serde_json::to_string(&ReplySource::Generated { attempt: 2 }).unwrap();
        assert_eq!(json, r#"{"kind":"generated","attempt":2}"#);
        let json = serde_json::to_string(&ReplySource::Fallback).unwrap();
        assert_eq!(json, r#"{"kind":"fallback"}"#);
    }

    #[test]
    fn test_inbound_message_sender_account_optional() {
        let msg: InboundMessage =
            serde_json::from_str(r#"{"message_id":7,"sender_id":42,"text":"hey"}"#).unwrap();
        assert_eq!(msg.message_id, 7);
        assert!(msg.sender_account.is_none());
    }

    #[test]
    fn test_chat_log_entry_new() {
        let entry = ChatLogEntry::new("alpha", "hey guys", "Girl");
        assert_eq!(entry.account, "alpha");
        assert_eq!(entry.persona, "Girl");
    }
}
