//! Logs command - show recent activity events

use anyhow::Result;

use super::get_logger;
use crate::output;

pub fn run(tail: usize, json: bool) -> Result<()> {
    let logger = match get_logger() {
        Some(logger) => logger,
        None => anyhow::bail!("Could not open the event log"),
    };
    let entries = logger.recent(tail)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    if entries.is_empty() {
        println!("No events logged yet.");
        return Ok(());
    }

    let mut table = output::create_table();
    table.set_header(vec!["At", "Event", "Kind", "Details"]);
    for entry in &entries {
        let details = if let Some(error) = &entry.event.error_message {
            error.clone()
        } else if let (Some(inserted), Some(updated)) = (entry.event.inserted, entry.event.updated)
        {
            format!("+{} added, {} overwritten", inserted, updated)
        } else {
            String::new()
        };

        table.add_row(vec![
            entry.at.format("%Y-%m-%d %H:%M:%S").to_string(),
            entry.event.event.clone(),
            entry
                .event
                .kind
                .map(|k| k.to_string())
                .unwrap_or_default(),
            details,
        ]);
    }
    println!("{}", table);

    Ok(())
}
