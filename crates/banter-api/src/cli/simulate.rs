//! Group conversation simulation over the in-process loopback channel.
//!
//! Every account joins the channel and gets its own listener task that
//! feeds each broadcast message to the session. One account opens with a
//! starter line and the group keeps talking until the reply budget is
//! spent or Ctrl+C is pressed.

use anyhow::Result;
use console::style;
use tokio::sync::broadcast::error::RecvError;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use banter_core::persona::catalog;
use banter_types::account::AccountId;
use banter_types::chat::Reply;

use crate::state::AppState;

/// Run a simulated group chat and print each message as it is sent.
pub async fn simulate(
    state: &AppState,
    accounts: Vec<String>,
    turns: usize,
    json: bool,
) -> Result<()> {
    let accounts: Vec<AccountId> = accounts.into_iter().map(AccountId::from).collect();
    let assignment = state.session.assign_personas(&accounts)?;

    if !json {
        println!();
        println!(
            "  {} Simulating {} accounts in '{}' ({} replies max)",
            style("💬").bold(),
            style(assignment.len()).bold(),
            style(state.channel.channel_id()).cyan(),
            turns
        );
        println!("  {}", style("Press Ctrl+C to stop").dim());
        println!();
    }

    let cancel = CancellationToken::new();
    let (listeners, mut replies) = spawn_listeners(state, &accounts, cancel.clone());

    let starter = state.session.start_conversation().await?;
    if json {
        println!("{}", serde_json::to_string(&starter)?);
    } else {
        print_line(
            starter.account.as_str(),
            catalog::profile(starter.archetype).name,
            &starter.text,
        );
    }

    let mut sent = 0;
    while sent < turns {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            reply = replies.recv() => {
                let Some(reply) = reply else { break };
                sent += 1;
                if json {
                    println!("{}", serde_json::to_string(&reply)?);
                } else {
                    let persona = reply
                        .archetype
                        .map(|id| catalog::profile(id).name)
                        .unwrap_or("unassigned");
                    print_line(reply.account.as_str(), persona, &reply.text);
                }
            }
        }
    }

    cancel.cancel();
    state.session.stop();
    for listener in listeners {
        let _ = listener.await;
    }

    if !json {
        println!();
        println!(
            "  {} {} repl{} sent",
            style("✓").green(),
            style(sent).bold(),
            if sent == 1 { "y" } else { "ies" }
        );
        println!();
    }

    Ok(())
}

/// Join every account to the channel and start one listener per account.
///
/// Sent replies are forwarded on the returned receiver. The receiver
/// closes once every listener has exited.
pub fn spawn_listeners(
    state: &AppState,
    accounts: &[AccountId],
    cancel: CancellationToken,
) -> (Vec<JoinHandle<()>>, mpsc::UnboundedReceiver<Reply>) {
    let (tx, rx) = mpsc::unbounded_channel();

    let listeners = accounts
        .iter()
        .map(|account| {
            state.channel.join(account);
            let mut inbox = state.channel.subscribe();
            let session = state.session.clone();
            let cancel = cancel.clone();
            let tx = tx.clone();
            let account = account.clone();

            tokio::spawn(async move {
                loop {
                    let event = tokio::select! {
                        _ = cancel.cancelled() => break,
                        event = inbox.recv() => event,
                    };
                    let event = match event {
                        Ok(event) => event,
                        Err(RecvError::Lagged(skipped)) => {
                            tracing::warn!(account = %account, skipped, "Listener lagged behind");
                            continue;
                        }
                        Err(RecvError::Closed) => break,
                    };

                    let handled = tokio::select! {
                        _ = cancel.cancelled() => break,
                        handled = session.handle_inbound(&account, &event) => handled,
                    };
                    match handled {
                        Ok(Some(reply)) => {
                            if tx.send(reply).is_err() {
                                break;
                            }
                        }
                        Ok(None) => {}
                        Err(e) => {
                            tracing::warn!(account = %account, error = %e, "Inbound handling failed");
                        }
                    }
                }
                tracing::debug!(account = %account, "Listener stopped");
            })
        })
        .collect();

    (listeners, rx)
}

fn print_line(account: &str, persona: &str, text: &str) {
    println!(
        "  {} {} {}",
        style(format!("{account}:")).cyan().bold(),
        text,
        style(format!("({persona})")).dim()
    );
}
