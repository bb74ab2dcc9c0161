//! HTTP/REST API layer for Banter.
//!
//! Axum-based REST API at `/api/v1/` with envelope responses and CORS
//! support.

pub mod error;
pub mod handlers;
pub mod response;
pub mod router;
