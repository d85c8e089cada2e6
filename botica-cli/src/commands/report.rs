//! Report command - aggregate sales over a date window

use anyhow::{Context, Result};
use chrono::NaiveDate;
use colored::Colorize;

use botica_core::services::{report, view};
use botica_core::Transaction;

use super::get_context;
use crate::output;

pub fn run(
    from: Option<String>,
    to: Option<String>,
    by: &str,
    payment: Option<String>,
    json: bool,
) -> Result<()> {
    let ctx = get_context()?;
    let store = ctx.store_service.load()?;

    if store.transactions.is_empty() {
        if json {
            println!("{}", serde_json::json!({ "transactions": 0 }));
        } else {
            println!("No transactions ingested yet.");
        }
        return Ok(());
    }

    // Window defaults to the full coverage of the dataset
    let (earliest, latest) = match (store.available_dates.first(), store.available_dates.last()) {
        (Some(first), Some(last)) => (*first, *last),
        _ => anyhow::bail!("No dated transactions to report on"),
    };
    let start = match from {
        Some(s) => parse_cli_date(&s)?,
        None => earliest,
    };
    let end = match to {
        Some(s) => parse_cli_date(&s)?,
        None => latest,
    };
    if start > end {
        anyhow::bail!(
            "Window start {} is after its end {}",
            start.format("%d/%m/%Y"),
            end.format("%d/%m/%Y")
        );
    }

    let mut transactions = view::filter_by_date_range(&store.transactions, start, end);
    if let Some(payment_type) = &payment {
        transactions = report::filter_by_payment_type(&transactions, payment_type);
    }

    if !json {
        let mut header = format!(
            "Sales {} to {}",
            start.format("%d/%m/%Y"),
            end.format("%d/%m/%Y")
        );
        if let Some(payment_type) = &payment {
            header.push_str(&format!(" ({} only)", payment_type));
        }
        println!("{}", header.bold());
        println!();
    }

    match by {
        "totals" => print_totals(&transactions, json),
        "day" => print_by_day(&transactions, json),
        "prefix" => print_by_prefix(&transactions, json),
        "seller" => print_by_seller(&transactions, json),
        other => anyhow::bail!(
            "Unknown breakdown '{}': expected totals, day, prefix, or seller",
            other
        ),
    }
}

fn parse_cli_date(text: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(text, "%d/%m/%Y")
        .with_context(|| format!("Invalid date '{}': expected DD/MM/YYYY", text))
}

fn print_totals(transactions: &[Transaction], json: bool) -> Result<()> {
    let totals = report::sales_totals(transactions);

    if json {
        println!("{}", serde_json::to_string_pretty(&totals)?);
        return Ok(());
    }

    let mut table = output::create_table();
    table.add_row(vec![
        "Gross sales".to_string(),
        output::format_eur(totals.gross_sales),
    ]);
    table.add_row(vec![
        "Returns".to_string(),
        output::format_eur(totals.returns_total),
    ]);
    table.add_row(vec![
        "Net sales".to_string(),
        output::format_eur(totals.net_sales),
    ]);
    table.add_row(vec!["Units sold".to_string(), totals.units_sold.to_string()]);
    table.add_row(vec!["Sale lines".to_string(), totals.sale_count.to_string()]);
    table.add_row(vec![
        "Return lines".to_string(),
        totals.return_count.to_string(),
    ]);
    println!("{}", table);

    Ok(())
}

fn print_by_day(transactions: &[Transaction], json: bool) -> Result<()> {
    let days = report::sales_by_day(transactions);

    if json {
        println!("{}", serde_json::to_string_pretty(&days)?);
        return Ok(());
    }

    let mut table = output::create_table();
    table.set_header(vec!["Date", "Net sales"]);
    for day in &days {
        table.add_row(vec![day.date.clone(), output::format_eur(day.net_sales)]);
    }
    println!("{}", table);

    Ok(())
}

fn print_by_prefix(transactions: &[Transaction], json: bool) -> Result<()> {
    let rows = report::sales_by_code_prefix(transactions);

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    let mut table = output::create_table();
    table.set_header(vec!["Code prefix", "Net sales"]);
    for row in &rows {
        table.add_row(vec![row.prefix.clone(), output::format_eur(row.net_sales)]);
    }
    println!("{}", table);

    Ok(())
}

fn print_by_seller(transactions: &[Transaction], json: bool) -> Result<()> {
    let rows = report::seller_summary(transactions);

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    let mut table = output::create_table();
    table.set_header(vec!["Seller", "Net sales", "Lines", "Average"]);
    let mut total = rust_decimal::Decimal::ZERO;
    let mut lines = 0;
    for row in &rows {
        total += row.net_sales;
        lines += row.line_count;
        table.add_row(vec![
            row.seller.clone(),
            output::format_eur(row.net_sales),
            row.line_count.to_string(),
            output::format_eur(row.average_sale),
        ]);
    }
    table.add_row(vec![
        "TOTAL".to_string(),
        output::format_eur(total),
        lines.to_string(),
        String::new(),
    ]);
    println!("{}", table);

    Ok(())
}
