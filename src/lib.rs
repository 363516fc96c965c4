//! Analytics over personal bank transactions: category spending, cashback,
//! round-up savings, search and transfer filtering, rendered as JSON reports.

pub mod analysis;
pub mod cli;
pub mod loader;
pub mod models;
pub mod report;
pub mod types;
