//! Rolling conversation context and per-account reply history.

use std::sync::Mutex;

use dashmap::DashMap;

use banter_types::account::AccountId;
use banter_types::chat::ConversationTurn;

use super::window::RollingWindow;

/// Turns kept in the global context.
pub const TURN_CAPACITY: usize = 5;

/// Replies kept per account.
pub const RESPONSE_CAPACITY: usize = 5;

/// Bounded in-memory history shared by every account in a session.
///
/// Global turns sit behind one lock; per-account reply windows live in a
/// `DashMap` so appends for different accounts do not contend. Nothing is
/// ever deleted except by window eviction.
#[derive(Debug)]
pub struct HistoryTracker {
    turns: Mutex<RollingWindow<ConversationTurn>>,
    responses: DashMap<AccountId, RollingWindow<String>>,
    response_capacity: usize,
}

impl HistoryTracker {
    pub fn new() -> Self {
        Self::with_capacity(TURN_CAPACITY, RESPONSE_CAPACITY)
    }

    pub fn with_capacity(turns: usize, responses: usize) -> Self {
        Self {
            turns: Mutex::new(RollingWindow::new(turns)),
            responses: DashMap::new(),
            response_capacity: responses,
        }
    }

    /// Append a turn to the global context.
    pub fn record_turn(&self, speaker: impl Into<String>, text: impl Into<String>) {
        let turn = ConversationTurn::new(speaker, text);
        self.turns
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(turn);
    }

    /// Append `text`, lower-cased, to `account`'s reply history.
    pub fn record_response(&self, account: &AccountId, text: &str) {
        self.responses
            .entry(account.clone())
            .or_insert_with(|| RollingWindow::new(self.response_capacity))
            .push(text.to_lowercase());
    }

    /// Global turns, oldest first.
    pub fn turns(&self) -> Vec<ConversationTurn> {
        self.turns
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .to_vec()
    }

    /// `account`'s recorded replies, oldest first.
    pub fn responses(&self, account: &AccountId) -> Vec<String> {
        self.responses
            .get(account)
            .map(|w| w.to_vec())
            .unwrap_or_default()
    }

    /// The newest `n` replies of `account`, oldest first.
    pub fn recent_responses(&self, account: &AccountId, n: usize) -> Vec<String> {
        self.responses
            .get(account)
            .map(|w| w.last(n))
            .unwrap_or_default()
    }

    /// Accounts with at least one recorded reply.
    pub fn accounts(&self) -> Vec<AccountId> {
        let mut accounts: Vec<AccountId> = self.responses.iter().map(|e| e.key().clone()).collect();
        accounts.sort();
        accounts
    }

    /// The last `limit` turns rendered as `speaker: text` lines.
    pub fn context_lines(&self, limit: usize) -> String {
        let turns = self.turns.lock().unwrap_or_else(|e| e.into_inner());
        let skip = turns.len().saturating_sub(limit);
        turns
            .iter()
            .skip(skip)
            .map(|t| format!("{}: {}", t.speaker, t.text))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for HistoryTracker {
    fn default() -> Self {
        Self::new()
    }
}
