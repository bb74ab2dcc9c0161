use thiserror::Error;

/// Errors from the chat transport collaborator.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("account '{0}' is not connected to the channel")]
    NotConnected(String),

    #[error("channel '{0}' is closed")]
    ChannelClosed(String),

    #[error("send failed: {0}")]
    SendFailed(String),
}

/// Errors from the chat log sink.
#[derive(Debug, Error)]
pub enum LogError {
    #[error("log io error: {0}")]
    Io(String),

    #[error("log serialization error: {0}")]
    Serialization(String),
}

/// Operational errors surfaced by a group session.
///
/// Generation failures never show up here: the response engine always
/// produces a reply.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("a session needs at least 2 accounts, got {0}")]
    NotEnoughAccounts(usize),

    #[error("session is not running")]
    NotRunning,

    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("chat log error: {0}")]
    Log(#[from] LogError),
}
