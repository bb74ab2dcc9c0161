//! Conversation history endpoints.
//!
//! GET /api/v1/history - Rolling global turn window.
//! GET /api/v1/history/{account} - Recent replies of one account.
//! GET /api/v1/log - Tail of the persisted chat log.

use std::time::Instant;

use axum::Json;
use axum::extract::{Path, Query, State};
use serde::{Deserialize, Serialize};

use banter_types::account::AccountId;
use banter_types::chat::{ChatLogEntry, ConversationTurn};

use crate::http::error::AppError;
use crate::http::response::{ApiResponse, ApiResult};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct AccountHistory {
    pub account: AccountId,
    /// Lower-cased recent replies, oldest first.
    pub responses: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct LogQuery {
    /// Maximum entries to return (default 50).
    #[serde(default = "default_log_limit")]
    pub limit: usize,
}

fn default_log_limit() -> usize {
    50
}

pub async fn get_history(State(state): State<AppState>) -> ApiResult<Vec<ConversationTurn>> {
    let start = Instant::now();
    Ok(Json(ApiResponse::success(state.session.history().turns(), start)))
}

pub async fn get_account_history(
    State(state): State<AppState>,
    Path(account): Path<String>,
) -> ApiResult<AccountHistory> {
    let start = Instant::now();
    let account = AccountId::from(account);

    let history = state.session.history();
    let known = history.accounts().contains(&account)
        || state.session.assignment().archetype_for(&account).is_some();
    if !known {
        return Err(AppError::NotFound(format!("no history for account '{account}'")));
    }

    let responses = history.responses(&account);
    Ok(Json(ApiResponse::success(
        AccountHistory { account, responses },
        start,
    )))
}

pub async fn get_chat_log(
    State(state): State<AppState>,
    Query(query): Query<LogQuery>,
) -> ApiResult<Vec<ChatLogEntry>> {
    let start = Instant::now();
    let entries = state.chat_log.read_recent(query.limit).await?;
    Ok(Json(ApiResponse::success(entries, start)))
}
