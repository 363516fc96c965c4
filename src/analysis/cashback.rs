use chrono::{Datelike, NaiveDate};
use tracing::{debug, info};

use crate::analysis::DOTTED_DATE_FORMAT;
use crate::models::{CategoryTotals, Transaction, UNKNOWN_CATEGORY};
use crate::types::FieldValue;

/// Sums cashback per category for operations dated in `year`-`month`.
///
/// Operation dates are read as `DD.MM.YYYY`; rows without a parseable date are
/// skipped. Categories whose cashback coerces to zero are still listed.
pub fn cashback_by_category(transactions: &[Transaction], year: i32, month: u32) -> CategoryTotals<f64> {
    info!("Analyzing cashback for {year}-{month:02}");

    let in_month: Vec<&Transaction> = transactions.iter()
        .filter(|transaction| {
            let Some(value) = transaction.operation_date() else {
                return false;
            };

            match NaiveDate::parse_from_str(value, DOTTED_DATE_FORMAT) {
                Ok(date) => date.year() == year && date.month() == month,
                Err(error) => {
                    debug!("Skipped transaction with operation date [{value}]: {error}");
                    false
                }
            }
        })
        .collect();

    debug!("Found {} transactions for cashback analysis", in_month.len());

    let mut totals = CategoryTotals::new();

    for transaction in in_month {
        let category = transaction.category().unwrap_or(UNKNOWN_CATEGORY);
        let cashback = transaction.cashback.as_ref().map_or(0.0, FieldValue::to_cashback);

        *totals.entry(category) += cashback;
    }

    info!("Cashback analysis finished with {} categories", totals.len());
    totals
}
