//! Reads bank exports from disk into a [`TransactionTable`].

pub mod errors;

use std::fs;
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use serde_json::{Map, Value};
use tracing::{error, info, warn};

use crate::models::{Column, Transaction, TransactionTable};

pub use errors::LoadError;

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Loads transactions from a `.csv` export or a JSON array of records.
///
/// CSV cells that are empty are treated as absent values. CSV rows that cannot
/// be read are logged and skipped.
///
/// # Errors
/// Returns `LoadError` if the file does not exist, is not UTF-8, cannot be read
/// or is not a list of records.
pub fn load_transactions(path: impl AsRef<Path>) -> Result<TransactionTable, LoadError> {
    let path = path.as_ref();
    let source_name = path.display().to_string();

    info!("Loading transactions from {source_name}");

    let bytes = fs::read(path).map_err(|source| {
        let error = LoadError::read(&source_name, source);
        error!("{error}");
        error
    })?;

    let text = String::from_utf8(bytes).map_err(|source| {
        let error = LoadError::encoding(&source_name, source);
        error!("{error}");
        error
    })?;

    let text = text.trim_start_matches(BYTE_ORDER_MARK);

    let is_csv = path.extension()
        .and_then(|extension| extension.to_str())
        .is_some_and(|extension| extension.eq_ignore_ascii_case("csv"));

    let table = if is_csv {
        parse_csv(&source_name, text)?
    } else {
        parse_json(&source_name, text)?
    };

    info!("Loaded {} transactions from {source_name}", table.len());
    Ok(table)
}

/// Parses a JSON array of records. Columns are the union of all record keys.
///
/// Array elements that are not objects are logged and skipped.
pub fn parse_json(path: &str, text: &str) -> Result<TransactionTable, LoadError> {
    let elements: Vec<Value> = serde_json::from_str(text).map_err(|source| {
        let error = LoadError::malformed(path, source);
        error!("{error}");
        error
    })?;

    let mut columns: Vec<String> = Vec::new();
    let mut rows = Vec::with_capacity(elements.len());

    for (index, element) in elements.into_iter().enumerate() {
        let record = match element {
            Value::Object(record) => record,
            other => {
                error!("Skipped element {index} in {path}: expected a record, found {other}");
                continue;
            }
        };

        for key in record.keys() {
            if !columns.contains(key) {
                columns.push(key.clone());
            }
        }

        rows.push(into_transaction(path, record)?);
    }

    Ok(TransactionTable::new(columns, rows))
}

/// Parses a CSV export with a header row.
pub fn parse_csv(path: &str, text: &str) -> Result<TransactionTable, LoadError> {
    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = reader.headers()
        .map_err(|source| LoadError::malformed(path, source))?
        .clone();

    let columns: Vec<String> = headers.iter().map(str::to_string).collect();
    let mut rows = Vec::new();

    for result in reader.records() {
        let record = match result {
            Ok(record) => record,
            Err(error) => {
                error!("CSV record error in {path}: {error}");
                continue;
            }
        };

        let values: Map<String, Value> = columns.iter()
            .zip(record.iter())
            .filter(|(_, cell)| !cell.is_empty())
            .map(|(column, cell)| (column.clone(), Value::String(cell.to_string())))
            .collect();

        rows.push(into_transaction(path, values)?);
    }

    Ok(TransactionTable::new(columns, rows))
}

fn into_transaction(path: &str, mut record: Map<String, Value>) -> Result<Transaction, LoadError> {
    resolve_aliases(path, &mut record);

    serde_json::from_value(Value::Object(record)).map_err(|source| {
        let error = LoadError::malformed(path, source);
        error!("{error}");
        error
    })
}

/// Drops alias keys shadowed by the export header of the same column, so a
/// record carrying both still deserializes. The header value wins.
fn resolve_aliases(path: &str, record: &mut Map<String, Value>) {
    for column in Column::ALL {
        if record.contains_key(column.header()) && record.remove(column.alias()).is_some() {
            warn!("Ignored [{}] in {path}: [{}] is already present", column.alias(), column.header());
        }
    }
}
