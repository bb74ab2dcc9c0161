//! Application state wiring the group session together.
//!
//! AppState holds the concrete instances used by both CLI and REST API.
//! The session is generic over its transport and log ports; AppState pins
//! them to the in-process loopback channel and the JSON-lines chat log.

use std::path::PathBuf;
use std::sync::Arc;

use banter_core::channel::LoopbackChannel;
use banter_core::engine::ResponseEngine;
use banter_core::history::HistoryTracker;
use banter_core::llm::{BoxTextGenerator, OfflineGenerator};
use banter_core::random::{self, RngSource};
use banter_core::session::GroupSession;
use banter_infra::chat_log::JsonlChatLog;
use banter_infra::config::{load_config, resolve_api_key};
use banter_infra::filesystem::{ensure_data_dir, resolve_data_dir};
use banter_infra::llm::HttpTextGenerator;
use banter_types::config::BanterConfig;

/// Buffered events per subscriber on the loopback channel.
const CHANNEL_CAPACITY: usize = 256;

/// Concrete session type pinned to infra implementations.
pub type ConcreteSession = GroupSession<Arc<LoopbackChannel>, Arc<JsonlChatLog>>;

/// Shared application state.
///
/// Used by both CLI commands and REST API handlers.
#[derive(Clone)]
pub struct AppState {
    pub session: Arc<ConcreteSession>,
    pub channel: Arc<LoopbackChannel>,
    pub chat_log: Arc<JsonlChatLog>,
    pub config: Arc<BanterConfig>,
    pub data_dir: PathBuf,
}

impl AppState {
    /// Resolve the data dir, load config, and wire the session.
    ///
    /// `offline` swaps the HTTP generator for one that always fails, so
    /// every reply comes from the fallback phrases.
    pub async fn init(offline: bool) -> anyhow::Result<Self> {
        let data_dir = resolve_data_dir();
        ensure_data_dir(&data_dir).await?;

        let config = load_config(&data_dir).await;
        let generator = if offline {
            BoxTextGenerator::new(OfflineGenerator)
        } else {
            let api_key = resolve_api_key(&config);
            BoxTextGenerator::new(HttpTextGenerator::from_config(&config.generation, api_key)?)
        };

        Ok(Self::from_parts(data_dir, config, generator))
    }

    /// Wire the session from already-resolved parts.
    pub fn from_parts(data_dir: PathBuf, config: BanterConfig, generator: BoxTextGenerator) -> Self {
        let rng = random::shared(RngSource::from_os());
        let history = Arc::new(HistoryTracker::new());
        let engine = ResponseEngine::new(generator, config.generation.clone(), history, rng.clone());

        let channel = Arc::new(LoopbackChannel::new(
            config.session.channel_id.clone(),
            CHANNEL_CAPACITY,
        ));
        let chat_log = Arc::new(JsonlChatLog::in_data_dir(&data_dir));

        let session = GroupSession::new(
            engine,
            channel.clone(),
            chat_log.clone(),
            config.session.clone(),
            rng,
        );

        Self {
            session: Arc::new(session),
            channel,
            chat_log,
            config: Arc::new(config),
            data_dir,
        }
    }
}
