//! Data directory layout for Banter.

use std::path::{Path, PathBuf};

/// Environment variable that overrides the data directory.
pub const DATA_DIR_ENV: &str = "BANTER_DATA_DIR";

/// Resolve the Banter data directory.
///
/// Uses `BANTER_DATA_DIR` if set, otherwise `~/.banter`.
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
        return PathBuf::from(dir);
    }

    // Use home directory fallback: ~/.banter
    if let Some(home) = dirs::home_dir() {
        return home.join(".banter");
    }

    // Last resort: current directory
    PathBuf::from(".banter")
}

/// Create the data directory if it does not exist yet.
pub async fn ensure_data_dir(data_dir: &Path) -> Result<(), std::io::Error> {
    tokio::fs::create_dir_all(data_dir).await
}
