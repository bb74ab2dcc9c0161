//! Configuration loader for Banter.
//!
//! Reads `config.toml` from the data directory (`~/.banter/` in production)
//! and deserializes it into [`BanterConfig`]. Falls back to defaults when
//! the file is missing or malformed.

use std::path::{Path, PathBuf};

use secrecy::SecretString;
use thiserror::Error;

use banter_types::config::BanterConfig;

/// File name of the config inside the data directory.
pub const CONFIG_FILE: &str = "config.toml";

/// Environment variable that overrides `generation.api_key`.
pub const API_KEY_ENV: &str = "BANTER_LLM_API_KEY";

/// Errors from reading or parsing `config.toml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Path of the config file for `data_dir`.
pub fn config_path(data_dir: &Path) -> PathBuf {
    data_dir.join(CONFIG_FILE)
}

/// Read and parse `{data_dir}/config.toml`, surfacing every failure.
///
/// A missing file is `Ok(None)`.
pub async fn read_config(data_dir: &Path) -> Result<Option<BanterConfig>, ConfigError> {
    let path = config_path(data_dir);

    let content = match tokio::fs::read_to_string(&path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(source) => return Err(ConfigError::Read { path, source }),
    };

    toml::from_str::<BanterConfig>(&content)
        .map(Some)
        .map_err(|source| ConfigError::Parse { path, source })
}

/// Load configuration from `{data_dir}/config.toml`.
///
/// - If the file does not exist, returns [`BanterConfig::default()`].
/// - If the file exists but fails to read or parse, logs a warning and
///   returns the default.
pub async fn load_config(data_dir: &Path) -> BanterConfig {
    match read_config(data_dir).await {
        Ok(Some(config)) => config,
        Ok(None) => {
            tracing::debug!(
                "No {CONFIG_FILE} found in {}, using defaults",
                data_dir.display()
            );
            BanterConfig::default()
        }
        Err(err) => {
            tracing::warn!("{err}, using defaults");
            BanterConfig::default()
        }
    }
}

/// Resolve the generation API key.
///
/// Priority:
/// 1. `BANTER_LLM_API_KEY` environment variable (non-empty)
/// 2. `generation.api_key` from `config.toml`
pub fn resolve_api_key(config: &BanterConfig) -> Option<SecretString> {
    pick_api_key(std::env::var(API_KEY_ENV).ok(), config)
}

fn pick_api_key(env_value: Option<String>, config: &BanterConfig) -> Option<SecretString> {
    env_value
        .filter(|v| !v.trim().is_empty())
        .or_else(|| config.generation.api_key.clone())
        .map(SecretString::from)
}

#[cfg(test)]
mod tests {
    use secrecy::ExposeSecret;
    use tempfile::TempDir;

    use super::*;

    #[tokio::test]
    async fn missing_file_returns_default() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(tmp.path()).await;
        assert_eq!(config.generation.max_tokens, 12);
        assert_eq!(config.session.typing_delay_min_ms, 2_000);
        assert!(read_config(tmp.path()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn valid_toml_returns_parsed() {
        let tmp = TempDir::new().unwrap();
        tokio::fs::write(
            config_path(tmp.path()),
            r#"
[generation]
endpoint = "http://llm.local/generate"
api_key = "from-file"
max_attempts = 3

[session]
typing_delay_min_ms = 0
typing_delay_max_ms = 10
"#,
        )
        .await
        .unwrap();

        let config = load_config(tmp.path()).await;
        assert_eq!(config.generation.endpoint, "http://llm.local/generate");
        assert_eq!(config.generation.max_attempts, 3);
        assert_eq!(config.generation.temperature, 0.9);
        assert_eq!(config.session.typing_delay_max_ms, 10);
        assert_eq!(config.session.channel_id, "group");
    }

    #[tokio::test]
    async fn invalid_toml_returns_default() {
        let tmp = TempDir::new().unwrap();
        tokio::fs::write(config_path(tmp.path()), "this is not { valid toml !!!")
            .await
            .unwrap();

        let err = read_config(tmp.path()).await.unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));

        let config = load_config(tmp.path()).await;
        assert_eq!(config.generation.max_attempts, 2);
    }

    #[test]
    fn env_key_wins_over_config_key() {
        let mut config = BanterConfig::default();
        config.generation.api_key = Some("from-file".to_string());

        let key = pick_api_key(Some("from-env".to_string()), &config).unwrap();
        assert_eq!(key.expose_secret(), "from-env");

        let key = pick_api_key(Some("  ".to_string()), &config).unwrap();
        assert_eq!(key.expose_secret(), "from-file");

        let key = pick_api_key(None, &config).unwrap();
        assert_eq!(key.expose_secret(), "from-file");

        assert!(pick_api_key(None, &BanterConfig::default()).is_none());
    }
}
