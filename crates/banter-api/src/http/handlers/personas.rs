//! Persona catalog and classifier endpoints.

use std::time::Instant;

use axum::Json;
use serde::{Deserialize, Serialize};

use banter_core::classify::classify;
use banter_core::persona::catalog;
use banter_types::persona::{Archetype, SenderKind};

use crate::http::response::{ApiResponse, ApiResult};

#[derive(Debug, Deserialize)]
pub struct ClassifyRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct ClassifyResponse {
    pub sender: SenderKind,
}

/// GET /api/v1/personas - The six archetype profiles.
pub async fn list_personas() -> ApiResult<&'static [Archetype]> {
    let start = Instant::now();
    Ok(Json(ApiResponse::success(catalog::all(), start)))
}

/// POST /api/v1/classify - Guess the sender kind of a message.
pub async fn classify_message(Json(body): Json<ClassifyRequest>) -> ApiResult<ClassifyResponse> {
    let start = Instant::now();
    let sender = classify(&body.text);
    Ok(Json(ApiResponse::success(ClassifyResponse { sender }, start)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn personas_lists_six_profiles() {
        let Json(resp) = list_personas().await.unwrap();
        assert_eq!(resp.data.unwrap().len(), 6);
    }

    #[tokio::test]
    async fn classify_detects_hustler_talk() {
        let Json(resp) = classify_message(Json(ClassifyRequest {
            text: "got a business idea to make money".to_string(),
        }))
        .await
        .unwrap();
        assert_eq!(resp.data.unwrap().sender, SenderKind::Hustler);
    }
}
