//! Collaborator ports for a group session.
//!
//! The session never talks to a chat network or the filesystem directly;
//! banter-infra and the loopback channel implement these traits.

use std::future::Future;

use banter_types::account::AccountId;
use banter_types::error::{LogError, TransportError};

/// Outbound side of a group chat.
pub trait ChatTransport: Send + Sync {
    /// Post `text` to `channel` as `account`. Returns the id the transport
    /// assigned to the new message.
    fn send_message(
        &self,
        channel: &str,
        account: &AccountId,
        text: &str,
    ) -> impl Future<Output = Result<i64, TransportError>> + Send;
}

/// Sink for outbound messages.
pub trait ChatLog: Send + Sync {
    /// Record that `account`, playing `persona`, sent `text`.
    fn log_message(
        &self,
        account: &AccountId,
        text: &str,
        persona: &str,
    ) -> impl Future<Output = Result<(), LogError>> + Send;
}

impl<T: ChatTransport> ChatTransport for std::sync::Arc<T> {
    fn send_message(
        &self,
        channel: &str,
        account: &AccountId,
        text: &str,
    ) -> impl Future<Output = Result<i64, TransportError>> + Send {
        (**self).send_message(channel, account, text)
    }
}

impl<L: ChatLog> ChatLog for std::sync::Arc<L> {
    fn log_message(
        &self,
        account: &AccountId,
        text: &str,
        persona: &str,
    ) -> impl Future<Output = Result<(), LogError>> + Send {
        (**self).log_message(account, text, persona)
    }
}
