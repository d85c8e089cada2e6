//! Ingest command - load a point-of-sale export into the dataset

use std::path::PathBuf;

use anyhow::Result;
use colored::Colorize;
use dialoguer::Confirm;

use botica_core::adapters::csv_file;
use botica_core::services::{build, LogEvent};
use botica_core::{Error, RawRow, RecordKind};

use super::{get_context, get_logger, log_event};
use crate::output;

pub fn run(
    file: Option<PathBuf>,
    kind: Option<String>,
    delimiter: Option<char>,
    preview: bool,
    yes: bool,
    json: bool,
) -> Result<()> {
    let ctx = get_context()?;
    let logger = get_logger();

    let declared = match kind.as_deref() {
        Some("transactions") => Some(RecordKind::Transactions),
        Some("categories") => Some(RecordKind::Categories),
        Some(other) => anyhow::bail!(
            "Unknown kind '{}': expected 'transactions' or 'categories'",
            other
        ),
        None => None,
    };

    let delimiter = match delimiter {
        Some(c) if c.is_ascii() => c as u8,
        Some(c) => anyhow::bail!("Delimiter must be a single ASCII character, got '{}'", c),
        None => ctx.config.delimiter_byte(),
    };

    let rows = read_input(file, delimiter)?;
    if rows.is_empty() {
        anyhow::bail!("The file contains no data rows");
    }

    // Dry run first: classification check plus the collision count the
    // confirmation prompt needs
    let dry = match ctx.ingest_service.ingest(&rows, declared, true) {
        Ok(outcome) => outcome,
        Err(err) => return reject(&logger, err),
    };

    if !json {
        output::info(&format!(
            "Detected a {} export ({} rows)",
            dry.kind, dry.rows_read
        ));
        println!();
    }

    if preview {
        if json {
            println!("{}", serde_json::to_string_pretty(&dry)?);
            return Ok(());
        }
        println!("{}", "PREVIEW MODE - No changes applied".yellow());
        println!();
        print_preview(&ctx, &rows, dry.kind);
        println!();
        println!("  Would add: {}", dry.inserted);
        println!("  Would overwrite: {}", dry.updated);
        println!("  Collection size after: {}", dry.total);
        return Ok(());
    }

    // Prompt only in an interactive session; --yes and --json skip it
    let interactive = atty::is(atty::Stream::Stdin) && !yes && !json;
    if dry.updated > 0 && interactive {
        output::warning(&format!(
            "{} existing records match this file and will be overwritten.",
            dry.updated
        ));
        let confirmed = Confirm::new()
            .with_prompt("Continue with the merge?")
            .default(true)
            .interact()?;
        if !confirmed {
            println!("Cancelled");
            return Ok(());
        }
    }

    let outcome = ctx.ingest_service.ingest(&rows, declared, false)?;
    log_event(
        &logger,
        LogEvent::new("ingest_completed")
            .with_command("ingest")
            .with_kind(outcome.kind)
            .with_counts(outcome.inserted, outcome.updated),
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    output::success("Ingest complete");
    println!();
    println!("  Added: {}", outcome.inserted);
    println!("  Overwritten: {}", outcome.updated);
    println!("  Collection size: {}", outcome.total);

    Ok(())
}

/// Read rows from the file argument, or stdin when piped or given "-"
fn read_input(file: Option<PathBuf>, delimiter: u8) -> Result<Vec<RawRow>> {
    match file {
        Some(path) if path.as_os_str() != "-" => Ok(csv_file::read_rows(&path, delimiter)?),
        _ => {
            if atty::is(atty::Stream::Stdin) {
                anyhow::bail!("File path required (or pipe CSV data on stdin)");
            }
            Ok(csv_file::read_rows_from_reader(
                std::io::stdin().lock(),
                delimiter,
            )?)
        }
    }
}

/// Rejections exit non-zero with a readable reason and leave a log trail
fn reject(logger: &Option<botica_core::services::LoggingService>, err: Error) -> Result<()> {
    match err {
        Error::UnrecognizedFormat | Error::TypeMismatch { .. } => {
            log_event(
                logger,
                LogEvent::new("ingest_rejected")
                    .with_command("ingest")
                    .with_error(err.to_string()),
            );
            Err(err.into())
        }
        other => Err(other.into()),
    }
}

/// First rows of the batch, through the real builders
fn print_preview(ctx: &botica_core::BoticaContext, rows: &[RawRow], kind: RecordKind) {
    let mut table = output::create_table();

    match kind {
        RecordKind::Transactions => {
            table.set_header(vec!["Date", "Time", "Seller", "Product", "Net", "Document"]);
            let records = build::build_transactions(rows, &ctx.schema);
            for tx in records.iter().take(10) {
                table.add_row(vec![
                    tx.date.clone(),
                    tx.time.clone(),
                    tx.seller.clone(),
                    tx.product_code.clone(),
                    output::format_eur(tx.net_amount),
                    tx.document_number.clone(),
                ]);
            }
            println!("{}", table);
            if records.len() > 10 {
                println!("... and {} more", records.len() - 10);
            }
        }
        RecordKind::Categories => {
            table.set_header(vec!["Code", "Description", "Family", "Price", "Stock"]);
            let records = build::build_categories(rows, &ctx.schema);
            for cat in records.iter().take(10) {
                table.add_row(vec![
                    cat.code.clone(),
                    cat.description.clone(),
                    cat.family.clone(),
                    output::format_eur(cat.list_price),
                    cat.stock_current.to_string(),
                ]);
            }
            println!("{}", table);
            if records.len() > 10 {
                println!("... and {} more", records.len() - 10);
            }
        }
    }
}
