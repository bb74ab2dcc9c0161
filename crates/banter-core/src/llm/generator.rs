//! TextGenerator trait definition.
//!
//! The one external collaborator the response engine talks to: something
//! that turns a prompt plus sampling parameters into raw text.

use banter_types::generation::{GenerationError, GenerationRequest, GenerationResponse};

/// Backend that produces raw reply text for a prompt.
///
/// Uses native async fn in traits (RPITIT, Rust 2024 edition). Wrap an
/// implementation in [`BoxTextGenerator`](super::box_generator::BoxTextGenerator)
/// for dynamic dispatch.
///
/// Implementations live in banter-infra (e.g., `HttpTextGenerator`).
pub trait TextGenerator: Send + Sync {
    /// Human-readable backend name (e.g., "http", "offline").
    fn name(&self) -> &str;

    /// Send one generation request. A single call is one attempt; retry
    /// and timeout policy belong to the caller.
    fn generate(
        &self,
        request: &GenerationRequest,
    ) -> impl std::future::Future<Output = Result<GenerationResponse, GenerationError>> + Send;
}

impl<T: TextGenerator> TextGenerator for std::sync::Arc<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn generate(
        &self,
        request: &GenerationRequest,
    ) -> impl std::future::Future<Output = Result<GenerationResponse, GenerationError>> + Send {
        (**self).generate(request)
    }
}
