//! Renders analysis results as JSON documents.
//!
//! Documents are indented with four spaces and keep non-ASCII text as is.
//! Failures are rendered as `{"error": "..."}` payloads instead of being
//! propagated to the caller.

#[cfg(test)]
mod tests;

use std::fmt::Display;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{json, Serializer, Value};
use tracing::{error, info};

use crate::models::{Transaction, TransactionTable};

const INDENT: &[u8] = b"    ";

/// Every loaded transaction with its count.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverviewReport {
    pub total_transactions: usize,
    pub transactions: Vec<Transaction>
}

impl OverviewReport {
    pub fn from_table(table: TransactionTable) -> Self {
        let transactions = table.into_rows();

        info!("Overview of {} transactions", transactions.len());

        Self {
            total_transactions: transactions.len(),
            transactions
        }
    }
}

/// Serializes `value` as an indented JSON document.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<String> {
    let mut buffer = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(INDENT));

    value.serialize(&mut serializer)?;

    //NOTE: serde_json only ever writes valid UTF-8
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// The `{"error": message}` payload reported in place of a result.
pub fn error_payload(message: impl Display) -> Value {
    json!({ "error": message.to_string() })
}

/// Renders an error as a JSON error document.
pub fn render_error(message: impl Display) -> String {
    let payload = error_payload(message);
    to_json(&payload).unwrap_or_else(|_| payload.to_string())
}

/// Renders the successful value or the error payload of `result`.
pub fn render<T: Serialize, E: Display>(result: Result<T, E>) -> String {
    match result {
        Ok(value) => to_json(&value).unwrap_or_else(|serialize_error| {
            error!("Failed to serialize report: {serialize_error}");
            render_error(serialize_error)
        }),
        Err(report_error) => render_error(report_error)
    }
}

/// Renders a list of records, falling back to an empty list when the records
/// cannot be serialized.
pub fn render_list<T: Serialize>(items: &[T]) -> String {
    to_json(items).unwrap_or_else(|serialize_error| {
        error!("Failed to serialize {} records: {serialize_error}", items.len());
        "[]".to_string()
    })
}
