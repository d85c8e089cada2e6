//! Dates command - list the calendar dates that have data

use anyhow::Result;

use super::get_context;

pub fn run(json: bool) -> Result<()> {
    let ctx = get_context()?;
    let store = ctx.store_service.load()?;

    if json {
        let dates: Vec<String> = store
            .available_dates
            .iter()
            .map(|d| d.format("%d/%m/%Y").to_string())
            .collect();
        println!("{}", serde_json::to_string_pretty(&dates)?);
        return Ok(());
    }

    if store.available_dates.is_empty() {
        println!("No dated transactions yet.");
        return Ok(());
    }

    for date in &store.available_dates {
        println!("{}", date.format("%d/%m/%Y"));
    }
    println!();
    println!("{} days with data", store.available_dates.len());

    Ok(())
}
