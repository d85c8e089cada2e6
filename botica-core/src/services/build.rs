//! Record builders: map raw rows to canonical records
//!
//! Builders are schema-driven; they look up cells through the field maps
//! and never read source headers directly.

use crate::domain::{Category, Transaction};
use crate::schema::{RawRow, Schema};

use super::normalize::{clean_decimal, clean_integer, parse_local_date};

/// Build transaction records from a raw batch, in row order.
///
/// Exports write the date only on the first line of each day block; the last
/// seen date carries forward across the following rows. A non-empty date
/// that fails to normalize resets the carry, so rows after a mangled date
/// stay undated instead of inheriting a stale day.
pub fn build_transactions(rows: &[RawRow], schema: &Schema) -> Vec<Transaction> {
    let map = &schema.transactions;
    let mut last_known_date = String::new();

    rows.iter()
        .map(|row| {
            let raw_date = map.text(row, "date");
            if !raw_date.is_empty() {
                last_known_date = parse_local_date(&raw_date);
            }

            Transaction {
                date: last_known_date.clone(),
                time: map.text(row, "time"),
                seller: map.text(row, "seller"),
                product_code: map.text(row, "productCode"),
                client_or_description: map.text(row, "clientOrDescription"),
                kind: map.text(row, "type"),
                ta_flag: map.text(row, "taFlag"),
                units: clean_integer(&map.text(row, "units")),
                previous_price: clean_decimal(&map.text(row, "previousPrice")),
                list_price: clean_decimal(&map.text(row, "listPrice")),
                gross_amount: clean_decimal(&map.text(row, "grossAmount")),
                discount: clean_decimal(&map.text(row, "discount")),
                net_amount: clean_decimal(&map.text(row, "netAmount")),
                document_number: map.text(row, "documentNumber"),
                return_flag: map.text(row, "returnFlag"),
                invoice_flag: map.text(row, "invoiceFlag"),
                on_account: clean_decimal(&map.text(row, "onAccount")),
                delivery: clean_decimal(&map.text(row, "delivery")),
                return_amount: clean_decimal(&map.text(row, "returnAmount")),
                payment_type: map.text(row, "paymentType"),
            }
        })
        .collect()
}

/// Build catalog records from a raw batch, in row order
pub fn build_categories(rows: &[RawRow], schema: &Schema) -> Vec<Category> {
    let map = &schema.categories;

    rows.iter()
        .map(|row| Category {
            code: map.text(row, "code"),
            description: map.text(row, "description"),
            family: map.text(row, "family"),
            presentation: map.text(row, "presentation"),
            status: map.text(row, "status"),
            stock_current: clean_integer(&map.text(row, "stockCurrent")),
            stock_min: clean_integer(&map.text(row, "stockMin")),
            stock_max: clean_integer(&map.text(row, "stockMax")),
            list_price: clean_decimal(&map.text(row, "listPrice")),
            cost_price_a: clean_decimal(&map.text(row, "costPriceA")),
            cost_price_b: clean_decimal(&map.text(row, "costPriceB")),
            value_list_price: clean_decimal(&map.text(row, "valueListPrice")),
            value_cost_a: clean_decimal(&map.text(row, "valueCostA")),
            value_cost_b: clean_decimal(&map.text(row, "valueCostB")),
            margin_cost_a: clean_decimal(&map.text(row, "marginCostA")),
            margin_cost_b: clean_decimal(&map.text(row, "marginCostB")),
            rotation: clean_decimal(&map.text(row, "rotation")),
            coverage_days: clean_integer(&map.text(row, "coverageDays")),
            units_sold: clean_integer(&map.text(row, "unitsSold")),
            total_sales: clean_decimal(&map.text(row, "totalSales")),
            expiry: map.text(row, "expiry"),
            last_in: map.text(row, "lastIn"),
            last_out: map.text(row, "lastOut"),
            therapeutic_group_code: map.text(row, "therapeuticGroupCode"),
            therapeutic_group_description: map.text(row, "therapeuticGroupDescription"),
            lab_code: map.text(row, "labCode"),
            lab_name: map.text(row, "labName"),
        })
        .collect()
}
