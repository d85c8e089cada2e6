//! Status command - show dataset status and summary

use anyhow::Result;
use colored::Colorize;

use super::get_context;
use crate::output;

pub fn run(json: bool) -> Result<()> {
    let ctx = get_context()?;
    let status = ctx.status_service.summary()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&status)?);
        return Ok(());
    }

    println!("{}", "Dataset Status".bold());
    if ctx.config.demo_mode {
        output::warning("Demo mode is ON - showing sample data");
    }
    println!();

    let mut table = output::create_table();
    table.add_row(vec!["Transactions", &status.transactions.to_string()]);
    table.add_row(vec!["Categories", &status.categories.to_string()]);
    table.add_row(vec!["Families", &status.families.to_string()]);
    println!("{}", table);
    println!();

    if let (Some(earliest), Some(latest)) = (status.earliest_date, status.latest_date) {
        println!(
            "Date range: {} to {}",
            earliest.format("%d/%m/%Y"),
            latest.format("%d/%m/%Y")
        );
        println!();
    }

    if let Some(at) = status.last_updated.transactions {
        println!("Transactions updated: {}", at.format("%Y-%m-%d %H:%M UTC"));
    }
    if let Some(at) = status.last_updated.categories {
        println!("Categories updated:   {}", at.format("%Y-%m-%d %H:%M UTC"));
    }
    if status.transactions == 0 && status.categories == 0 {
        println!("No data yet. Run 'botica ingest <file>' to load an export.");
    }

    Ok(())
}
