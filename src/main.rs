use std::io::{stderr, stdout, BufWriter, Write};

use anyhow::Result;
use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use transaction_insights::cli::{execute, Cli};

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.log_level);

    let report = execute(&cli);

    write_report_to_stdout(&report)?;

    Ok(())
}

fn setup_logging(level: LevelFilter) {
    //NOTE: Reports go to stdout, so logging has to use stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}

fn write_report_to_stdout(report: &str) -> Result<()> {
    let mut output = BufWriter::new(stdout().lock());

    writeln!(output, "{report}")?;
    output.flush()?;

    Ok(())
}
