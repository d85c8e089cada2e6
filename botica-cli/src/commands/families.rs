//! Families command - list the catalog families

use anyhow::Result;

use super::get_context;

pub fn run(json: bool) -> Result<()> {
    let ctx = get_context()?;
    let store = ctx.store_service.load()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&store.unique_families)?);
        return Ok(());
    }

    if store.unique_families.is_empty() {
        println!("No catalog ingested yet.");
        return Ok(());
    }

    for family in &store.unique_families {
        println!("{}", family);
    }
    println!();
    println!("{} families", store.unique_families.len());

    Ok(())
}
