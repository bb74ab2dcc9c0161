//! In-process group channel for local simulation.
//!
//! Built on `tokio::sync::broadcast`: every message sent by a member is
//! delivered to every subscriber, including the author's own task, which
//! is how the session's own-message filter gets exercised. Sending with no
//! subscribers drops the message.

use std::future::Future;
use std::sync::atomic::{AtomicI64, Ordering};

use dashmap::DashMap;
use tokio::sync::broadcast;

use banter_types::account::AccountId;
use banter_types::chat::InboundMessage;
use banter_types::error::TransportError;

use crate::session::ports::ChatTransport;

/// Sender ids handed out to joined accounts start here; lower ids are free
/// for external (human) participants.
const FIRST_MEMBER_ID: i64 = 1_000;

pub struct LoopbackChannel {
    channel_id: String,
    sender: broadcast::Sender<InboundMessage>,
    members: DashMap<AccountId, i64>,
    next_member_id: AtomicI64,
    next_message_id: AtomicI64,
}

impl LoopbackChannel {
    pub fn new(channel_id: impl Into<String>, capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self {
            channel_id: channel_id.into(),
            sender,
            members: DashMap::new(),
            next_member_id: AtomicI64::new(FIRST_MEMBER_ID),
            next_message_id: AtomicI64::new(1),
        }
    }

    pub fn channel_id(&self) -> &str {
        &self.channel_id
    }

    /// Add `account` to the channel and return its sender id. Joining twice
    /// returns the same id.
    pub fn join(&self, account: &AccountId) -> i64 {
        *self
            .members
            .entry(account.clone())
            .or_insert_with(|| self.next_member_id.fetch_add(1, Ordering::SeqCst))
    }

    pub fn is_member(&self, account: &AccountId) -> bool {
        self.members.contains_key(account)
    }

    /// Receive every message posted after this call.
    pub fn subscribe(&self) -> broadcast::Receiver<InboundMessage> {
        self.sender.subscribe()
    }

    /// Post a message from a participant outside the managed accounts.
    pub fn post_external(&self, sender_id: i64, text: &str) -> InboundMessage {
        let message = InboundMessage {
            message_id: self.next_message_id.fetch_add(1, Ordering::SeqCst),
            sender_id,
            sender_account: None,
            text: text.to_string(),
        };
        let _ = self.sender.send(message.clone());
        message
    }

    fn post_member(
        &self,
        channel: &str,
        account: &AccountId,
        text: &str,
    ) -> Result<i64, TransportError> {
        if channel != self.channel_id {
            return Err(TransportError::SendFailed(format!(
                "unknown channel '{channel}'"
            )));
        }
        let sender_id = self
            .members
            .get(account)
            .map(|id| *id)
            .ok_or_else(|| TransportError::NotConnected(account.to_string()))?;

        let message_id = self.next_message_id.fetch_add(1, Ordering::SeqCst);
        let _ = self.sender.send(InboundMessage {
            message_id,
            sender_id,
            sender_account: Some(account.clone()),
            text: text.to_string(),
        });
        Ok(message_id)
    }
}

impl ChatTransport for LoopbackChannel {
    fn send_message(
        &self,
        channel: &str,
        account: &AccountId,
        text: &str,
    ) -> impl Future<Output = Result<i64, TransportError>> + Send {
        let result = self.post_member(channel, account, text);
        async move { result }
    }
}

impl std::fmt::Debug for LoopbackChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoopbackChannel")
            .field("channel_id", &self.channel_id)
            .field("members", &self.members.len())
            .field("receiver_count", &self.sender.receiver_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn member_messages_reach_all_subscribers() {
        let channel = LoopbackChannel::new("group", 16);
        let alpha = AccountId::new("alpha");
        let alpha_id = channel.join(&alpha);
        let mut rx1 = channel.subscribe();
        let mut rx2 = channel.subscribe();

        let id = channel
            .send_message("group", &alpha, "hey guys")
            .await
            .unwrap();

        let m1 = rx1.recv().await.unwrap();
        let m2 = rx2.recv().await.unwrap();
        assert_eq!(m1, m2);
        assert_eq!(m1.message_id, id);
        assert_eq!(m1.sender_id, alpha_id);
        assert_eq!(m1.sender_account, Some(alpha));
        assert_eq!(m1.text, "hey guys");
    }

    #[tokio::test]
    async fn message_ids_increase() {
        let channel = LoopbackChannel::new("group", 16);
        let alpha = AccountId::new("alpha");
        channel.join(&alpha);
        let first = channel.send_message("group", &alpha, "one").await.unwrap();
        let external = channel.post_external(7, "two");
        let third = channel.send_message("group", &alpha, "three").await.unwrap();
        assert!(first < external.message_id);
        assert!(external.message_id < third);
    }

    #[test]
    fn join_is_idempotent() {
        let channel = LoopbackChannel::new("group", 16);
        let alpha = AccountId::new("alpha");
        let beta = AccountId::new("beta");
        let a = channel.join(&alpha);
        assert_eq!(channel.join(&alpha), a);
        assert_ne!(channel.join(&beta), a);
        assert!(channel.is_member(&beta));
    }

    #[tokio::test]
    async fn non_member_and_wrong_channel_fail() {
        let channel = LoopbackChannel::new("group", 16);
        let ghost = AccountId::new("ghost");
        let err = channel.send_message("group", &ghost, "hi").await.unwrap_err();
        assert!(matches!(err, TransportError::NotConnected(_)));

        channel.join(&ghost);
        let err = channel.send_message("other", &ghost, "hi").await.unwrap_err();
        assert!(matches!(err, TransportError::SendFailed(_)));
    }
}
