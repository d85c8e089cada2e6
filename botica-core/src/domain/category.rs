//! Catalog category domain model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Keyed;

/// One product entry from a catalog/stock export
///
/// "Category" follows the naming of the source system; each record is a
/// product with its family, stock levels, and margin figures.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Category {
    /// Product code, the natural key of the catalog
    pub code: String,
    pub description: String,
    /// Family grouping (ANALGESICOS, DERMOFARMACIA, ...)
    pub family: String,
    pub presentation: String,
    pub status: String,
    pub stock_current: i64,
    pub stock_min: i64,
    pub stock_max: i64,
    pub list_price: Decimal,
    pub cost_price_a: Decimal,
    pub cost_price_b: Decimal,
    pub value_list_price: Decimal,
    pub value_cost_a: Decimal,
    pub value_cost_b: Decimal,
    pub margin_cost_a: Decimal,
    pub margin_cost_b: Decimal,
    pub rotation: Decimal,
    pub coverage_days: i64,
    pub units_sold: i64,
    pub total_sales: Decimal,
    pub expiry: String,
    pub last_in: String,
    pub last_out: String,
    pub therapeutic_group_code: String,
    pub therapeutic_group_description: String,
    pub lab_code: String,
    pub lab_name: String,
}

impl Keyed for Category {
    fn natural_key(&self) -> String {
        self.code.clone()
    }
}
