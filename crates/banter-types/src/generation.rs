//! Text-generation request/response types.
//!
//! The request serializes directly into the JSON body expected by the
//! generation endpoint; the response models its `{ "response": ... }` reply.

use serde::{Deserialize, Serialize};

/// A single generation request for one reply candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub prompt: String,
    pub max_tokens: u32,
    pub temperature: f64,
    pub top_p: f64,
    pub frequency_penalty: f64,
    pub presence_penalty: f64,
}

/// Successful generation output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationResponse {
    #[serde(default)]
    pub response: String,
}

/// Errors from a generation attempt.
///
/// Every variant is treated the same by the response engine: the attempt
/// failed, move on to the next attempt or to the fallback table.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("generation timed out after {0}ms")]
    Timeout(u64),

    #[error("generation endpoint returned HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("transport error: {0}")]
    Transport(String),

    #[error("deserialization error: {0}")]
    Deserialization(String),

    #[error("generator unavailable: {0}")]
    Unavailable(String),

    #[error("invalid request: {0}")]
    InvalidRequest(String),
}
