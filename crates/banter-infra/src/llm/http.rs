//! HttpTextGenerator -- concrete [`TextGenerator`] for a plain JSON
//! generation endpoint.
//!
//! POSTs the [`GenerationRequest`] as the JSON body and reads
//! `{ "response": "..." }` back. The credential is sent verbatim in the
//! `Authorization` header.
//!
//! The API key is wrapped in [`secrecy::SecretString`] and is never logged
//! or included in `Debug` output.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use tracing::Instrument;

use banter_observe::genai_attrs;

use banter_core::llm::TextGenerator;
use banter_types::config::GenerationConfig;
use banter_types::generation::{GenerationError, GenerationRequest, GenerationResponse};

/// Generation client for an HTTP endpoint.
pub struct HttpTextGenerator {
    client: reqwest::Client,
    endpoint: String,
    api_key: Option<SecretString>,
    timeout: Duration,
}

impl HttpTextGenerator {
    pub fn new(
        endpoint: impl Into<String>,
        api_key: Option<SecretString>,
        timeout: Duration,
    ) -> Result<Self, GenerationError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GenerationError::Transport(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            api_key,
            timeout,
        })
    }

    /// Build from the `[generation]` config section. `api_key` is the
    /// already-resolved credential (env var or config file).
    pub fn from_config(
        config: &GenerationConfig,
        api_key: Option<SecretString>,
    ) -> Result<Self, GenerationError> {
        Self::new(
            config.endpoint.clone(),
            api_key,
            Duration::from_secs(config.timeout_secs),
        )
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

impl TextGenerator for HttpTextGenerator {
    fn name(&self) -> &str {
        "http"
    }

    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResponse, GenerationError> {
        let span = tracing::info_span!(
            "gen_ai.http",
            gen_ai.operation.name = genai_attrs::OP_GENERATE,
            gen_ai.response.chars = tracing::field::Empty,
        );

        let parsed = self.post(request).instrument(span.clone()).await?;
        span.record(
            genai_attrs::GEN_AI_RESPONSE_CHARS,
            parsed.response.chars().count(),
        );
        Ok(parsed)
    }
}

impl HttpTextGenerator {
    async fn post(&self, request: &GenerationRequest) -> Result<GenerationResponse, GenerationError> {
        let mut builder = self.client.post(&self.endpoint).json(request);
        if let Some(key) = &self.api_key {
            builder = builder.header("Authorization", key.expose_secret());
        }

        let response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                GenerationError::Timeout(self.timeout.as_millis() as u64)
            } else {
                GenerationError::Transport(format!("HTTP request failed: {e}"))
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(match status.as_u16() {
                400 | 422 => GenerationError::InvalidRequest(body),
                503 => GenerationError::Unavailable(body),
                code => GenerationError::Http { status: code, body },
            });
        }

        let parsed: GenerationResponse = response.json().await.map_err(|e| {
            GenerationError::Deserialization(format!("failed to parse response: {e}"))
        })?;

        tracing::debug!(
            endpoint = %self.endpoint,
            chars = parsed.response.len(),
            "Generation response received"
        );
        Ok(parsed)
    }
}
