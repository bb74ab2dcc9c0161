//! Persona catalog and sender classification commands.

use anyhow::Result;
use comfy_table::{Cell, Color, ContentArrangement, Table, presets};
use console::style;

use banter_core::classify::classify;
use banter_core::persona::catalog;
use banter_types::persona::SenderKind;

/// List the six archetypes with their profile fields.
pub fn list_personas(json: bool) -> Result<()> {
    let profiles = catalog::all();

    if json {
        println!("{}", serde_json::to_string_pretty(profiles)?);
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Id").fg(Color::White),
        Cell::new("Name").fg(Color::White),
        Cell::new("Age").fg(Color::White),
        Cell::new("Role").fg(Color::White),
        Cell::new("Style").fg(Color::White),
    ]);

    for profile in profiles {
        table.add_row(vec![
            Cell::new(profile.id.as_str()).fg(Color::DarkGrey),
            Cell::new(profile.name).fg(Color::Cyan),
            Cell::new(profile.age),
            Cell::new(profile.role),
            Cell::new(profile.style),
        ]);
    }

    println!();
    println!("{table}");
    println!();

    Ok(())
}

/// Print the sender kind inferred for `text`.
pub fn classify_text(text: &str, json: bool) -> Result<()> {
    let kind = classify(text);

    if json {
        let out = serde_json::json!({
            "text": text,
            "sender": kind,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    let label = match kind {
        SenderKind::Unknown => style(kind.as_str()).dim(),
        _ => style(kind.as_str()).cyan().bold(),
    };
    println!();
    println!("  {} {}", style("Sender:").dim(), label);
    println!();

    Ok(())
}
