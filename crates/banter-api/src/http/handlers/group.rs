//! Persona assignment and reply generation endpoints.

use std::time::Instant;

use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};

use banter_core::persona::starter::GroupDynamic;
use banter_types::account::{AccountId, PersonaSlot};
use banter_types::chat::Reply;

use crate::http::error::AppError;
use crate::http::response::{ApiResponse, ApiResult};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AssignRequest {
    pub accounts: Vec<AccountId>,
}

#[derive(Debug, Serialize)]
pub struct AssignmentResponse {
    pub assignment: Vec<PersonaSlot>,
    pub dynamics: Vec<GroupDynamic>,
}

#[derive(Debug, Deserialize)]
pub struct ReplyRequest {
    pub account: AccountId,
    pub message: String,
}

fn assignment_response(state: &AppState) -> AssignmentResponse {
    AssignmentResponse {
        assignment: state.session.assignment().slots().to_vec(),
        dynamics: state.session.dynamics(),
    }
}

/// POST /api/v1/assign - Rebuild the persona assignment.
pub async fn assign(
    State(state): State<AppState>,
    Json(body): Json<AssignRequest>,
) -> ApiResult<AssignmentResponse> {
    let start = Instant::now();
    state.session.assign_personas(&body.accounts)?;
    Ok(Json(ApiResponse::success(assignment_response(&state), start)))
}

/// GET /api/v1/assignment - Current assignment and active dynamics.
pub async fn get_assignment(State(state): State<AppState>) -> ApiResult<AssignmentResponse> {
    let start = Instant::now();
    Ok(Json(ApiResponse::success(assignment_response(&state), start)))
}

/// POST /api/v1/reply - Generate one reply for an assigned account.
///
/// The reply is recorded in the account's history but not sent.
pub async fn reply(
    State(state): State<AppState>,
    Json(body): Json<ReplyRequest>,
) -> ApiResult<Reply> {
    let start = Instant::now();

    if body.message.trim().is_empty() {
        return Err(AppError::Validation("message must not be empty".to_string()));
    }
    let assignment = state.session.assignment();
    if assignment.archetype_for(&body.account).is_none() {
        return Err(AppError::NotFound(format!(
            "account '{}' has no persona assigned",
            body.account
        )));
    }

    let reply = state
        .session
        .engine()
        .respond(&body.account, &assignment, &body.message)
        .await;
    Ok(Json(ApiResponse::success(reply, start)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::testing::offline_state;

    fn accounts(ids: &[&str]) -> Vec<AccountId> {
        ids.iter().map(|id| AccountId::from(*id)).collect()
    }

    #[tokio::test]
    async fn assign_then_read_back() {
        let dir = tempfile::tempdir().unwrap();
        let state = offline_state(dir.path());

        let Json(resp) = assign(
            State(state.clone()),
            Json(AssignRequest {
                accounts: accounts(&["alpha", "beta", "gamma"]),
            }),
        )
        .await
        .unwrap();
        assert_eq!(resp.data.unwrap().assignment.len(), 3);

        let Json(resp) = get_assignment(State(state)).await.unwrap();
        let data = resp.data.unwrap();
        assert_eq!(data.assignment.len(), 3);
        assert_eq!(data.assignment[0].account, AccountId::from("alpha"));
    }

    #[tokio::test]
    async fn assign_rejects_single_account() {
        let dir = tempfile::tempdir().unwrap();
        let state = offline_state(dir.path());

        let err = assign(
            State(state),
            Json(AssignRequest {
                accounts: accounts(&["solo"]),
            }),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::Session(_)));
    }

    #[tokio::test]
    async fn reply_uses_fallback_when_offline() {
        let dir = tempfile::tempdir().unwrap();
        let state = offline_state(dir.path());
        state
            .session
            .assign_personas(&accounts(&["alpha", "beta"]))
            .unwrap();

        let Json(resp) = reply(
            State(state.clone()),
            Json(ReplyRequest {
                account: AccountId::from("beta"),
                message: "hey whats up".to_string(),
            }),
        )
        .await
        .unwrap();
        let reply = resp.data.unwrap();
        assert!(reply.is_fallback());
        assert!(reply.archetype.is_some());
    }

    #[tokio::test]
    async fn reply_for_unassigned_account_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let state = offline_state(dir.path());

        let err = reply(
            State(state),
            Json(ReplyRequest {
                account: AccountId::from("ghost"),
                message: "hey".to_string(),
            }),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
