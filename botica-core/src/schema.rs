//! Source spreadsheet schema
//!
//! Column detection and row mapping are table-driven: each canonical field
//! names the exact source headers that may carry it, in priority order.
//! Supporting a renamed export column means adding an alias here (or in
//! `settings.json`), not touching the builders.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// One raw spreadsheet row: header text mapped to cell text
pub type RawRow = HashMap<String, String>;

/// The two record collections the pipeline knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Transactions,
    Categories,
}

impl RecordKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::Transactions => "transactions",
            RecordKind::Categories => "categories",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Header tables
// =============================================================================

/// Transaction export columns, Spanish point-of-sale header names
const TRANSACTION_FIELDS: &[(&str, &[&str])] = &[
    ("date", &["Fecha"]),
    ("time", &["Hora"]),
    ("seller", &["Vendedor"]),
    ("productCode", &["Código"]),
    ("clientOrDescription", &["Cliente / Descripción"]),
    ("type", &["Tipo"]),
    ("taFlag", &["TA"]),
    ("units", &["Uni."]),
    ("previousPrice", &["P.Ant."]),
    ("listPrice", &["P.V.P."]),
    ("grossAmount", &["Imp. Bruto"]),
    ("discount", &["Dto."]),
    ("netAmount", &["Imp. Neto"]),
    ("documentNumber", &["Número Doc."]),
    ("returnFlag", &["R.P."]),
    ("invoiceFlag", &["Fact."]),
    ("onAccount", &["A Cuenta"]),
    ("delivery", &["Entrega"]),
    ("returnAmount", &["Devoluc."]),
    ("paymentType", &["Tipo de Pago"]),
];

/// Catalog export columns. "Grupo Terapeútico" keeps the source system's
/// misplaced accent; that is the header the files actually carry.
const CATEGORY_FIELDS: &[(&str, &[&str])] = &[
    ("code", &["Código"]),
    ("description", &["Descripción"]),
    ("family", &["Familia"]),
    ("presentation", &["Pres."]),
    ("status", &["Situación"]),
    ("stockCurrent", &["S.Actual"]),
    ("stockMin", &["S.Minimo"]),
    ("stockMax", &["S.Maximo"]),
    ("listPrice", &["P.v.p."]),
    ("costPriceA", &["P.m.c."]),
    ("costPriceB", &["P.u.c."]),
    ("valueListPrice", &["Valor a Pvp"]),
    ("valueCostA", &["Valor a Pmc"]),
    ("valueCostB", &["Valor a Puc"]),
    ("marginCostA", &["%Margen a Pmc"]),
    ("marginCostB", &["%Margen a Puc"]),
    ("rotation", &["Rotación"]),
    ("coverageDays", &["Dias de Cobertura"]),
    ("unitsSold", &["Uds.Vendidas"]),
    ("totalSales", &["Tot.Venta"]),
    ("expiry", &["Caducidad"]),
    ("lastIn", &["U.Entrada"]),
    ("lastOut", &["U.Salida"]),
    ("therapeuticGroupCode", &["G.Terap."]),
    ("therapeuticGroupDescription", &["Grupo Terapeútico"]),
    ("labCode", &["C.Labor."]),
    ("labName", &["Laboratorio"]),
];

/// Canonical fields whose headers identify a transactions export
const TRANSACTION_SIGNALS: &[&str] = &["date", "seller", "paymentType"];

/// Canonical fields whose headers identify a catalog export
const CATEGORY_SIGNALS: &[&str] = &["code", "family", "description"];

// =============================================================================
// Field map
// =============================================================================

/// Maps canonical field names to the source headers that may carry them
#[derive(Debug, Clone)]
pub struct FieldMap {
    aliases: HashMap<String, Vec<String>>,
}

impl FieldMap {
    fn from_table(table: &[(&str, &[&str])]) -> Self {
        let aliases = table
            .iter()
            .map(|(canonical, headers)| {
                let headers = headers.iter().map(|h| h.to_string()).collect();
                (canonical.to_string(), headers)
            })
            .collect();
        Self { aliases }
    }

    /// Cell text for a canonical field.
    ///
    /// The first alias present as a header wins even when its cell is empty;
    /// later aliases are only consulted when the header itself is absent.
    pub fn get<'r>(&self, row: &'r RawRow, canonical: &str) -> Option<&'r str> {
        self.aliases
            .get(canonical)?
            .iter()
            .find_map(|header| row.get(header).map(String::as_str))
    }

    /// Cell text for a canonical field, empty string when absent
    pub fn text(&self, row: &RawRow, canonical: &str) -> String {
        self.get(row, canonical).unwrap_or_default().to_string()
    }

    /// True when any alias of the canonical field appears as a header
    pub fn has_header(&self, row: &RawRow, canonical: &str) -> bool {
        self.aliases
            .get(canonical)
            .map(|headers| headers.iter().any(|h| row.contains_key(h)))
            .unwrap_or(false)
    }

    /// Register an extra source header for a canonical field
    pub fn add_alias(&mut self, canonical: &str, header: &str) {
        self.aliases
            .entry(canonical.to_string())
            .or_default()
            .push(header.to_string());
    }
}

// =============================================================================
// Schema
// =============================================================================

/// Extra header aliases loaded from settings, keyed by canonical field name
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderAliases {
    pub transactions: HashMap<String, Vec<String>>,
    pub categories: HashMap<String, Vec<String>>,
}

/// The full source schema: one field map per record kind
#[derive(Debug, Clone)]
pub struct Schema {
    pub transactions: FieldMap,
    pub categories: FieldMap,
}

impl Schema {
    /// The built-in header tables
    pub fn standard() -> Self {
        Self {
            transactions: FieldMap::from_table(TRANSACTION_FIELDS),
            categories: FieldMap::from_table(CATEGORY_FIELDS),
        }
    }

    /// Extend the standard tables with user-configured aliases
    pub fn with_aliases(mut self, extra: &HeaderAliases) -> Self {
        for (canonical, headers) in &extra.transactions {
            for header in headers {
                self.transactions.add_alias(canonical, header);
            }
        }
        for (canonical, headers) in &extra.categories {
            for header in headers {
                self.categories.add_alias(canonical, header);
            }
        }
        self
    }

    /// True when the row's headers carry any transaction signal column
    pub fn is_transactions(&self, row: &RawRow) -> bool {
        TRANSACTION_SIGNALS
            .iter()
            .any(|field| self.transactions.has_header(row, field))
    }

    /// True when the row's headers carry any catalog signal column
    pub fn is_categories(&self, row: &RawRow) -> bool {
        CATEGORY_SIGNALS
            .iter()
            .any(|field| self.categories.has_header(row, field))
    }
}

impl Default for Schema {
    fn default() -> Self {
        Self::standard()
    }
}
