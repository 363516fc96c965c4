use serde::Serialize;
use tracing::{error, info, warn};

use crate::models::{CategoryTotals, Column, ReportError, TransactionTable};
use crate::types::FieldValue;

const REQUIRED_COLUMNS: [Column; 2] = [Column::Category, Column::Amount];

/// Number of valid events overall and per category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventsReport {
    pub total_events: usize,
    /// Event count per category, most frequent first.
    pub categories: CategoryTotals<usize>
}

/// Counts events per category, ignoring rows whose amount is not numeric.
///
/// # Errors
/// Returns `ReportError::MissingColumns` if the table lacks the category or
/// amount column.
pub fn category_events(table: &TransactionTable) -> Result<EventsReport, ReportError> {
    info!("Counting events per category");

    let missing = table.missing_columns(&REQUIRED_COLUMNS);

    if !missing.is_empty() {
        let error = ReportError::missing_columns(missing);
        error!("{error}");
        return Err(error);
    }

    let mut total_events = 0;
    let mut categories = CategoryTotals::new();

    for row in table.rows() {
        let valid = row.amount.as_ref()
            .and_then(FieldValue::to_f64)
            .is_some_and(|amount| !amount.is_nan());

        if !valid {
            continue;
        }

        total_events += 1;

        if let Some(category) = row.category() {
            *categories.entry(category) += 1;
        }
    }

    if total_events == 0 {
        warn!("No events with a valid amount");
    }

    categories.sort_by(|left: &usize, right: &usize| right.cmp(left));

    info!("Counted {total_events} events");

    Ok(EventsReport { total_events, categories })
}
