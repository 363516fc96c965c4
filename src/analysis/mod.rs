//! Read-only analyses over an in-memory transaction set.
//!
//! Every function borrows its input and returns a freshly built result. Table
//! reports return [`ReportError`](crate::models::ReportError) for structural
//! problems; row-level problems are logged and skipped.

mod cashback;
mod events;
mod savings;
mod search;
mod spending;
mod transfers;

pub use cashback::cashback_by_category;
pub use events::{category_events, EventsReport};
pub use savings::{round_to_cents, round_up, round_up_savings};
pub use search::search_transactions;
pub use spending::{spending_by_category, SpendingReport, WINDOW_DAYS};
pub use transfers::personal_transfers;

/// Date format of tabular exports.
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";
/// Date format of card statements.
pub const DOTTED_DATE_FORMAT: &str = "%d.%m.%Y";
