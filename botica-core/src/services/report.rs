//! Dashboard aggregations
//!
//! Every function takes an already windowed slice (see
//! [`super::view::filter_by_date_range`]) and reduces it to the figures the
//! dashboard shows. Nothing here touches storage.

use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::Transaction;

/// Headline totals for a window
#[derive(Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesTotals {
    /// Sum of positive gross amounts
    pub gross_sales: Decimal,
    /// Sum of return amounts, as a positive figure
    pub returns_total: Decimal,
    /// Sum of net amounts across all lines, returns included
    pub net_sales: Decimal,
    pub units_sold: i64,
    pub sale_count: usize,
    pub return_count: usize,
}

pub fn sales_totals(transactions: &[Transaction]) -> SalesTotals {
    let mut totals = SalesTotals::default();
    for t in transactions {
        if t.is_return() {
            totals.returns_total += t.gross_amount.abs();
            totals.return_count += 1;
        } else {
            totals.gross_sales += t.gross_amount;
            totals.sale_count += 1;
        }
        totals.net_sales += t.net_amount;
        totals.units_sold += t.units;
    }
    totals
}

/// Net sales of one calendar day
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailySales {
    /// Canonical `DD/MM/YYYY` form, as stored on the records
    pub date: String,
    pub net_sales: Decimal,
}

/// Net sales per day, chronologically ascending. Undated lines are skipped.
pub fn sales_by_day(transactions: &[Transaction]) -> Vec<DailySales> {
    let mut by_day: HashMap<String, (NaiveDate, Decimal)> = HashMap::new();
    for t in transactions {
        let parsed = match t.calendar_date() {
            Some(date) => date,
            None => continue,
        };
        let entry = by_day.entry(t.date.clone()).or_insert((parsed, Decimal::ZERO));
        entry.1 += t.net_amount;
    }

    let mut days: Vec<(NaiveDate, String, Decimal)> = by_day
        .into_iter()
        .map(|(date, (parsed, net))| (parsed, date, net))
        .collect();
    days.sort_unstable_by_key(|(parsed, _, _)| *parsed);
    days.into_iter()
        .map(|(_, date, net_sales)| DailySales { date, net_sales })
        .collect()
}

/// Net sales of one product code prefix
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrefixSales {
    /// First two characters of the product code
    pub prefix: String,
    pub net_sales: Decimal,
}

/// Net sales grouped by the two-character product code prefix, biggest
/// first. The prefix is the coarse family grouping the codes encode; lines
/// without a product code are skipped.
pub fn sales_by_code_prefix(transactions: &[Transaction]) -> Vec<PrefixSales> {
    let mut by_prefix: HashMap<String, Decimal> = HashMap::new();
    for t in transactions {
        if t.product_code.is_empty() {
            continue;
        }
        let prefix: String = t.product_code.chars().take(2).collect();
        *by_prefix.entry(prefix).or_default() += t.net_amount;
    }

    let mut rows: Vec<PrefixSales> = by_prefix
        .into_iter()
        .map(|(prefix, net_sales)| PrefixSales { prefix, net_sales })
        .collect();
    rows.sort_by(|a, b| {
        b.net_sales
            .cmp(&a.net_sales)
            .then_with(|| a.prefix.cmp(&b.prefix))
    });
    rows
}

/// Per-seller figures for a window
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SellerSummary {
    pub seller: String,
    pub net_sales: Decimal,
    pub line_count: usize,
    /// Net sales divided by line count
    pub average_sale: Decimal,
}

/// Net sales per seller, biggest first. The empty seller bucket collects
/// lines whose export had no seller column.
pub fn seller_summary(transactions: &[Transaction]) -> Vec<SellerSummary> {
    let mut by_seller: HashMap<String, (Decimal, usize)> = HashMap::new();
    for t in transactions {
        let entry = by_seller.entry(t.seller.clone()).or_default();
        entry.0 += t.net_amount;
        entry.1 += 1;
    }

    let mut rows: Vec<SellerSummary> = by_seller
        .into_iter()
        .map(|(seller, (net_sales, line_count))| SellerSummary {
            seller,
            net_sales,
            line_count,
            average_sale: net_sales / Decimal::from(line_count as u64),
        })
        .collect();
    rows.sort_by(|a, b| {
        b.net_sales
            .cmp(&a.net_sales)
            .then_with(|| a.seller.cmp(&b.seller))
    });
    rows
}

/// Only the lines paid with the given payment type, exact match
pub fn filter_by_payment_type(transactions: &[Transaction], payment_type: &str) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|t| t.payment_type == payment_type)
        .cloned()
        .collect()
}
