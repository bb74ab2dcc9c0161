//! Global configuration types for Banter.
//!
//! `BanterConfig` represents the top-level `config.toml` that controls the
//! generation endpoint, sampling parameters, and session pacing.

use serde::{Deserialize, Serialize};

/// Top-level configuration.
///
/// Loaded from `~/.banter/config.toml`. All fields have sensible defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BanterConfig {
    #[serde(default)]
    pub generation: GenerationConfig,

    #[serde(default)]
    pub session: SessionConfig,
}

/// Generation endpoint and sampling parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// URL of the generation endpoint (POST, JSON body).
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Credential sent verbatim in the `Authorization` header.
    /// `BANTER_LLM_API_KEY` takes precedence when set.
    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,

    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    #[serde(default = "default_temperature")]
    pub temperature: f64,

    #[serde(default = "default_top_p")]
    pub top_p: f64,

    #[serde(default = "default_frequency_penalty")]
    pub frequency_penalty: f64,

    #[serde(default = "default_presence_penalty")]
    pub presence_penalty: f64,

    /// Per-attempt timeout.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Generation attempts per inbound message before falling back.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
}

fn default_endpoint() -> String {
    "http://127.0.0.1:5000/v1/chat".to_string()
}

fn default_max_tokens() -> u32 {
    12
}

fn default_temperature() -> f64 {
    0.9
}

fn default_top_p() -> f64 {
    0.85
}

fn default_frequency_penalty() -> f64 {
    2.0
}

fn default_presence_penalty() -> f64 {
    1.5
}

fn default_timeout_secs() -> u64 {
    8
}

fn default_max_attempts() -> u32 {
    2
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            api_key: None,
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
            top_p: default_top_p(),
            frequency_penalty: default_frequency_penalty(),
            presence_penalty: default_presence_penalty(),
            timeout_secs: default_timeout_secs(),
            max_attempts: default_max_attempts(),
        }
    }
}

/// Pacing and filtering for a group session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Conversation channel the accounts talk in.
    #[serde(default = "default_channel_id")]
    pub channel_id: String,

    /// Lower bound of the simulated typing delay.
    #[serde(default = "default_typing_delay_min_ms")]
    pub typing_delay_min_ms: u64,

    /// Upper bound of the simulated typing delay.
    #[serde(default = "default_typing_delay_max_ms")]
    pub typing_delay_max_ms: u64,

    /// Inbound messages shorter than this (after trimming) are ignored.
    #[serde(default = "default_min_inbound_chars")]
    pub min_inbound_chars: usize,
}

fn default_channel_id() -> String {
    "group".to_string()
}

fn default_typing_delay_min_ms() -> u64 {
    2_000
}

fn default_typing_delay_max_ms() -> u64 {
    4_000
}

fn default_min_inbound_chars() -> usize {
    2
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            channel_id: default_channel_id(),
            typing_delay_min_ms: default_typing_delay_min_ms(),
            typing_delay_max_ms: default_typing_delay_max_ms(),
            min_inbound_chars: default_min_inbound_chars(),
        }
    }
}
