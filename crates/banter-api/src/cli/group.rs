//! Persona assignment and single-reply commands.

use anyhow::Result;
use comfy_table::{Cell, Color, ContentArrangement, Table, presets};
use console::style;

use banter_core::persona::catalog;
use banter_types::account::{AccountId, PersonaAssignment};
use banter_types::chat::{Reply, ReplySource};

use crate::state::AppState;

/// Assign personas to `accounts` and print the mapping.
pub fn assign(state: &AppState, accounts: Vec<String>, json: bool) -> Result<()> {
    let accounts: Vec<AccountId> = accounts.into_iter().map(AccountId::from).collect();
    let assignment = state.session.assign_personas(&accounts)?;
    let dynamics = state.session.dynamics();

    if json {
        let out = serde_json::json!({
            "assignment": assignment.slots(),
            "dynamics": dynamics,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    print_assignment(&assignment);

    if !dynamics.is_empty() {
        println!("  {}", style("── Dynamics ──").dim());
        for dynamic in &dynamics {
            println!("  {}", dynamic.describe());
        }
        println!();
    }

    Ok(())
}

/// Generate `account`'s reply to `message` within the group `accounts`.
///
/// Nothing is sent; the reply is only printed.
pub async fn reply(
    state: &AppState,
    accounts: Vec<String>,
    account: String,
    message: &str,
    json: bool,
) -> Result<()> {
    let accounts: Vec<AccountId> = accounts.into_iter().map(AccountId::from).collect();
    let account = AccountId::from(account);
    if !accounts.contains(&account) {
        anyhow::bail!("account '{account}' is not in --accounts");
    }

    let assignment = state.session.assign_personas(&accounts)?;
    let reply = state
        .session
        .engine()
        .respond(&account, &assignment, message)
        .await;

    if json {
        println!("{}", serde_json::to_string_pretty(&reply)?);
        return Ok(());
    }

    print_reply(&reply);
    Ok(())
}

fn print_assignment(assignment: &PersonaAssignment) {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Account").fg(Color::White),
        Cell::new("Persona").fg(Color::White),
        Cell::new("Archetype").fg(Color::White),
    ]);

    for slot in assignment.slots() {
        table.add_row(vec![
            Cell::new(slot.account.as_str()).fg(Color::White),
            Cell::new(catalog::profile(slot.archetype).name).fg(Color::Cyan),
            Cell::new(slot.archetype.as_str()).fg(Color::DarkGrey),
        ]);
    }

    println!();
    println!("{table}");
    println!();
}

fn print_reply(reply: &Reply) {
    let persona = reply
        .archetype
        .map(|id| catalog::profile(id).name)
        .unwrap_or("unassigned");
    let source = match reply.source {
        ReplySource::Generated { attempt } => {
            style(format!("generated (attempt {attempt})")).green()
        }
        ReplySource::Fallback => style("fallback".to_string()).yellow(),
    };

    println!();
    println!(
        "  {} {}",
        style(format!("{}:", reply.account)).cyan().bold(),
        reply.text
    );
    println!();
    println!("  {} {}", style("Persona:").dim(), persona);
    println!("  {} {}", style("Sender: ").dim(), reply.sender);
    println!("  {} {}", style("Source: ").dim(), source);
    println!();
}
