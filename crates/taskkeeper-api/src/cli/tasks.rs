//! Operator command for inspecting a user's persisted task list.

use comfy_table::{presets, Cell, Color, ContentArrangement, Table};
use console::style;
use taskkeeper_core::storage::AttributesStore;

use crate::state::AppState;

/// Print the persisted task list for a user.
pub async fn show_tasks(state: &AppState, user_id: &str, json: bool) -> anyhow::Result<()> {
    let attributes = state
        .skill
        .store()
        .load(user_id)
        .await?
        .unwrap_or_default();

    if json {
        let result = serde_json::json!({
            "user_id": user_id,
            "tasks": attributes.tasks,
            "count": attributes.tasks.len(),
        });
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    if attributes.tasks.is_empty() {
        println!();
        println!(
            "  {} No outstanding tasks for '{}'.",
            style("i").blue().bold(),
            style(user_id).cyan(),
        );
        println!();
        return Ok(());
    }

    println!();
    println!(
        "  Outstanding tasks for '{}' ({} total)",
        style(user_id).cyan(),
        attributes.tasks.len(),
    );
    println!();

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("#").fg(Color::White),
        Cell::new("Task").fg(Color::White),
    ]);

    for (index, task) in attributes.tasks.iter().enumerate() {
        table.add_row(vec![
            Cell::new(index + 1).fg(Color::DarkGrey),
            Cell::new(task).fg(Color::Cyan),
        ]);
    }

    println!("{table}");
    println!();

    Ok(())
}
