use std::convert::Infallible;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing::level_filters::LevelFilter;

use crate::analysis::{
    cashback_by_category, category_events, personal_transfers, round_up_savings,
    search_transactions, spending_by_category
};
use crate::loader::load_transactions;
use crate::report::{render, render_error, render_list, OverviewReport};

/// Analyzes an export of bank transactions and prints a JSON report.
#[derive(Debug, Parser)]
#[command(name = "transaction-insights", version)]
pub struct Cli {
    /// Transactions file: a JSON array of records or a CSV export with headers.
    pub file: PathBuf,
    /// Log level written to stderr: error, warn, info, debug or trace.
    #[arg(long, global = true, default_value = "error", value_parser = log_level)]
    pub log_level: LevelFilter,
    #[command(subcommand)]
    pub command: Command
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Lists every transaction with the total count.
    Overview,
    /// Counts transactions with a valid amount per category.
    Events,
    /// Totals spending in a category over 90 days from a start date.
    Spending {
        #[arg(long)]
        category: String,
        /// First day of the window, YYYY-MM-DD.
        #[arg(long)]
        start_date: String
    },
    /// Sums cashback per category for a calendar month.
    Cashback {
        #[arg(long)]
        year: i32,
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
        month: u32
    },
    /// Computes round-up savings for a month.
    Savings {
        /// Month as YYYY-MM.
        #[arg(long)]
        month: String,
        /// Rounding step, e.g. 10, 50 or 100.
        #[arg(long, default_value_t = 50, value_parser = clap::value_parser!(u32).range(1..))]
        limit: u32
    },
    /// Finds transactions mentioning a query in their text fields.
    Search {
        #[arg(long, default_value = "")]
        query: String
    },
    /// Lists debit transfers to private persons.
    Transfers
}

/// Maps a log level name to a filter, falling back to `error`.
pub fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'error'", level);
            LevelFilter::ERROR
        }
    }
}

fn log_level(level: &str) -> Result<LevelFilter, Infallible> {
    Ok(parse_log_level(level))
}

/// Loads the input file, runs the requested analysis and renders its report.
///
/// Load failures and structural report errors are rendered as error payloads.
pub fn execute(cli: &Cli) -> String {
    let table = match load_transactions(&cli.file) {
        Ok(table) => table,
        Err(error) => return render_error(error)
    };

    info!("Running {:?} over {} transactions", cli.command, table.len());

    match &cli.command {
        Command::Overview => render(Ok::<_, Infallible>(OverviewReport::from_table(table))),
        Command::Events => render(category_events(&table)),
        Command::Spending { category, start_date } => render(spending_by_category(&table, category, start_date)),
        Command::Cashback { year, month } => render(Ok::<_, Infallible>(cashback_by_category(table.rows(), *year, *month))),
        Command::Savings { month, limit } => render(Ok::<_, Infallible>(round_up_savings(month, table.rows(), *limit))),
        Command::Search { query } => render_list(&search_transactions(table.rows(), query)),
        Command::Transfers => render_list(&personal_transfers(table.rows()))
    }
}
