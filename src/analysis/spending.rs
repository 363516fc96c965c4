use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::Serialize;
use tracing::{debug, error, info, warn};

use crate::analysis::ISO_DATE_FORMAT;
use crate::models::{Column, ReportError, Transaction, TransactionTable};
use crate::types::FieldValue;

/// Length of the spending window in days.
pub const WINDOW_DAYS: u64 = 90;

const REQUIRED_COLUMNS: [Column; 3] = [Column::OperationDate, Column::Category, Column::Amount];

/// Spending in one category over `[start_date, end_date)`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpendingReport {
    pub category: String,
    /// Sum of the matching amounts, truncated toward zero.
    pub total_spent: i64,
    pub start_date: NaiveDate,
    /// Exclusive end of the window.
    pub end_date: NaiveDate,
    /// Matching rows with their dates rendered as `YYYY-MM-DD`.
    pub transactions: Vec<Transaction>
}

/// Totals spending in `category` over the 90 days starting at `start_date`.
///
/// # Errors
/// Returns `ReportError` without inspecting any amount if:
/// - The table lacks the operation date, category or amount column.
/// - `start_date` or any non-empty operation date is not `YYYY-MM-DD`.
pub fn spending_by_category(table: &TransactionTable, category: &str, start_date: &str) -> Result<SpendingReport, ReportError> {
    info!("Analyzing spending in category [{category}] from {start_date}");

    let missing = table.missing_columns(&REQUIRED_COLUMNS);

    if !missing.is_empty() {
        let error = ReportError::missing_columns(missing);
        error!("{error}");
        return Err(error);
    }

    let start = parse_iso_date(start_date)?;
    let end = start.checked_add_days(Days::new(WINDOW_DAYS))
        .ok_or_else(|| ReportError::date_parse(start_date, "YYYY-MM-DD"))?;

    //NOTE: Every date is parsed before filtering so a single bad row fails the report as a whole
    let mut dated = Vec::with_capacity(table.len());

    for row in table.rows() {
        let date = match row.operation_date().filter(|value| !value.is_empty()) {
            Some(value) => Some(parse_iso_date(value)?),
            None => None
        };

        dated.push((row, date));
    }

    let mut total = Decimal::ZERO;
    let mut transactions = Vec::new();

    for (row, date) in dated {
        let Some(date) = date else {
            continue;
        };

        if row.category() != Some(category) || date < start || date >= end {
            continue;
        }

        match row.amount.as_ref().and_then(FieldValue::to_decimal) {
            Some(amount) => {
                total = total.checked_add(amount).unwrap_or_else(move || {
                    error!("Spending total overflowed while adding {amount}");
                    total
                });
            }
            None => debug!("Amount of transaction dated {date} is not numeric, counted as zero")
        }

        let mut transaction = row.clone();
        transaction.operation_date = Some(date.format(ISO_DATE_FORMAT).to_string());
        transactions.push(transaction);
    }

    if transactions.is_empty() {
        warn!("No transactions in category [{category}] between {start} and {end}");
    }

    let total_spent = total.trunc().to_i64().unwrap_or(if total.is_sign_negative() { i64::MIN } else { i64::MAX });

    info!("Spending in category [{category}]: {total_spent} between {start} and {end}");

    Ok(SpendingReport {
        category: category.to_string(),
        total_spent,
        start_date: start,
        end_date: end,
        transactions
    })
}

fn parse_iso_date(value: &str) -> Result<NaiveDate, ReportError> {
    NaiveDate::parse_from_str(value, ISO_DATE_FORMAT).map_err(|parse_error| {
        let error = ReportError::date_parse(value, "YYYY-MM-DD");
        error!("{error} ({parse_error})");
        error
    })
}
