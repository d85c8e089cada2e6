//! CSV row source
//!
//! Reads an exported sheet into raw header-to-cell rows, the input shape of
//! the pipeline. Point-of-sale exports are semicolon separated by default;
//! the delimiter is configurable for files that left the office as plain
//! comma CSV.

use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;

use crate::domain::result::Result;
use crate::schema::RawRow;

/// Default column separator of the point-of-sale exports
pub const DEFAULT_DELIMITER: u8 = b';';

/// Read all rows of a CSV file
pub fn read_rows(path: &Path, delimiter: u8) -> Result<Vec<RawRow>> {
    let reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .from_path(path)?;
    collect_rows(reader)
}

/// Read all rows from an open reader (stdin, test fixtures)
pub fn read_rows_from_reader<R: Read>(input: R, delimiter: u8) -> Result<Vec<RawRow>> {
    let reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .from_reader(input);
    collect_rows(reader)
}

fn collect_rows<R: Read>(mut reader: csv::Reader<R>) -> Result<Vec<RawRow>> {
    let headers = reader.headers()?.clone();
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let mut row = RawRow::with_capacity(headers.len());
        for (i, header) in headers.iter().enumerate() {
            // Short records pad with empty cells (flexible mode)
            row.insert(header.to_string(), record.get(i).unwrap_or("").to_string());
        }
        rows.push(row);
    }
    Ok(rows)
}
