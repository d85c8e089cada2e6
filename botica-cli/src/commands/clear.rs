//! Clear command - delete all stored data

use anyhow::Result;
use dialoguer::Confirm;

use botica_core::services::LogEvent;

use super::{get_context, get_logger, log_event};
use crate::output;

pub fn run(force: bool) -> Result<()> {
    let ctx = get_context()?;

    if !force {
        output::warning("This will delete all ingested transactions and categories.");
        let confirmed = Confirm::new()
            .with_prompt("Are you sure?")
            .default(false)
            .interact()?;
        if !confirmed {
            println!("Cancelled");
            return Ok(());
        }
    }

    ctx.store_service.clear()?;
    log_event(
        &get_logger(),
        LogEvent::new("dataset_cleared").with_command("clear"),
    );

    output::success("Dataset cleared");
    Ok(())
}
