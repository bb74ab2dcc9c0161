use std::future::Future;

use banter_types::generation::{GenerationError, GenerationRequest, GenerationResponse};

use super::generator::TextGenerator;

/// Generator that always fails, so every reply comes from the fallback
/// table. Used for `--offline` runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineGenerator;

impl TextGenerator for OfflineGenerator {
    fn name(&self) -> &str {
        "offline"
    }

    fn generate(
        &self,
        _request: &GenerationRequest,
    ) -> impl Future<Output = Result<GenerationResponse, GenerationError>> + Send {
        async {
            Err(GenerationError::Unavailable(
                "offline mode: no generation backend".to_string(),
            ))
        }
    }
}
