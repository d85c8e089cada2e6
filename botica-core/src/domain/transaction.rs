//! Transaction domain model

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Keyed;

/// One sale line from a point-of-sale export
///
/// Dates stay in their canonical `DD/MM/YYYY` string form so that records
/// whose source date never parsed (empty string) survive a round trip
/// unchanged. Views parse on demand via [`Transaction::calendar_date`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Transaction {
    /// Canonical date (`DD/MM/YYYY`) or empty when the source had none
    pub date: String,
    pub time: String,
    pub seller: String,
    /// Product code, kept verbatim (codes like "700698.5" are not numbers)
    pub product_code: String,
    pub client_or_description: String,
    /// Sale type column from the export (Contado, Credito, ...)
    #[serde(rename = "type")]
    pub kind: String,
    pub ta_flag: String,
    pub units: i64,
    pub previous_price: Decimal,
    pub list_price: Decimal,
    pub gross_amount: Decimal,
    pub discount: Decimal,
    pub net_amount: Decimal,
    pub document_number: String,
    pub return_flag: String,
    pub invoice_flag: String,
    pub on_account: Decimal,
    pub delivery: Decimal,
    pub return_amount: Decimal,
    pub payment_type: String,
}

impl Transaction {
    /// Canonical date format for transaction date strings
    pub const DATE_FORMAT: &'static str = "%d/%m/%Y";

    /// Parsed calendar date, `None` when the record has no usable date
    pub fn calendar_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, Self::DATE_FORMAT).ok()
    }

    /// A return line carries a negative gross amount. The sale type column is
    /// not consulted; it is inconsistent across export variants.
    pub fn is_return(&self) -> bool {
        self.gross_amount < Decimal::ZERO
    }
}

impl Keyed for Transaction {
    /// Natural key: same date + document + product means the same sale line,
    /// however many times the export gets re-uploaded
    fn natural_key(&self) -> String {
        format!("{}_{}_{}", self.date, self.document_number, self.product_code)
    }
}
