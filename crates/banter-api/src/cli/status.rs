//! System status dashboard command.

use std::collections::BTreeMap;

use anyhow::Result;
use console::style;
use serde::Serialize;

use banter_infra::config::{config_path, resolve_api_key};

use crate::state::AppState;

/// Snapshot shown by `banter status`.
#[derive(Debug, Serialize)]
pub struct StatusReport {
    pub version: &'static str,
    pub data_dir: String,
    pub config_file: Option<String>,
    pub endpoint: String,
    pub api_key_configured: bool,
    pub channel_id: String,
    pub typing_delay_ms: (u64, u64),
    pub chat_log: String,
    pub messages_logged: usize,
    /// Logged message count per persona display name.
    pub messages_by_persona: BTreeMap<String, usize>,
    pub last_message_at: Option<String>,
}

/// Collect the status snapshot. A missing chat log counts as empty.
pub async fn gather(state: &AppState) -> Result<StatusReport> {
    let path = config_path(&state.data_dir);
    let config_file = tokio::fs::try_exists(&path)
        .await
        .unwrap_or(false)
        .then(|| path.display().to_string());

    let entries = state.chat_log.read_all().await?;
    let mut messages_by_persona = BTreeMap::new();
    for entry in &entries {
        *messages_by_persona.entry(entry.persona.clone()).or_insert(0) += 1;
    }

    Ok(StatusReport {
        version: env!("CARGO_PKG_VERSION"),
        data_dir: state.data_dir.display().to_string(),
        config_file,
        endpoint: state.config.generation.endpoint.clone(),
        api_key_configured: resolve_api_key(&state.config).is_some(),
        channel_id: state.config.session.channel_id.clone(),
        typing_delay_ms: (
            state.config.session.typing_delay_min_ms,
            state.config.session.typing_delay_max_ms,
        ),
        chat_log: state.chat_log.path().display().to_string(),
        messages_logged: entries.len(),
        messages_by_persona,
        last_message_at: entries.last().map(|e| e.timestamp.to_rfc3339()),
    })
}

/// Display the status dashboard.
pub async fn status(state: &AppState, json: bool) -> Result<()> {
    let report = gather(state).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!();
    println!("  {} Banter v{}", style("💬").bold(), report.version);
    println!();

    println!("  {}", style("── Generation ──").dim());
    println!("  Endpoint: {}", style(&report.endpoint).cyan());
    let key = if report.api_key_configured {
        style("configured").green()
    } else {
        style("not set").yellow()
    };
    println!("  API key:  {key}");
    println!();

    println!("  {}", style("── Session ──").dim());
    println!("  Channel:      {}", report.channel_id);
    println!(
        "  Typing delay: {}-{} ms",
        report.typing_delay_ms.0, report.typing_delay_ms.1
    );
    println!();

    println!("  {}", style("── Chat log ──").dim());
    println!("  Messages: {}", style(report.messages_logged).bold());
    for (persona, count) in &report.messages_by_persona {
        println!("    {persona}: {count}");
    }
    if let Some(last) = &report.last_message_at {
        println!("  Last:     {}", style(last).dim());
    }
    println!();

    println!("  {}", style("── System ──").dim());
    println!("  Data dir: {}", style(&report.data_dir).dim());
    match &report.config_file {
        Some(path) => println!("  Config:   {}", style(path).dim()),
        None => println!("  Config:   {}", style("defaults").dim()),
    }
    println!("  Log file: {}", style(&report.chat_log).dim());
    println!();

    Ok(())
}

#[cfg(test)]
mod tests {
    use banter_core::session::ChatLog;
    use banter_types::account::AccountId;

    use super::*;
    use crate::state::testing::offline_state;

    #[tokio::test]
    async fn empty_data_dir_reports_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let state = offline_state(dir.path());

        let report = gather(&state).await.unwrap();
        assert!(report.config_file.is_none());
        assert_eq!(report.messages_logged, 0);
        assert!(report.last_message_at.is_none());
        assert_eq!(report.channel_id, "group");
    }

    #[tokio::test]
    async fn counts_logged_messages_per_persona() {
        let dir = tempfile::tempdir().unwrap();
        let state = offline_state(dir.path());
        let account = AccountId::from("alpha");
        state.chat_log.log_message(&account, "hey guys", "Girl").await.unwrap();
        state.chat_log.log_message(&account, "so bored rn", "Girl").await.unwrap();
        state.chat_log.log_message(&account, "lets go", "Hustler 1").await.unwrap();

        let report = gather(&state).await.unwrap();
        assert_eq!(report.messages_logged, 3);
        assert_eq!(report.messages_by_persona["Girl"], 2);
        assert_eq!(report.messages_by_persona["Hustler 1"], 1);
        assert!(report.last_message_at.is_some());
    }
}
