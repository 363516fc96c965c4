use std::path::Path;
use std::process::Command;

use anyhow::Result;
use serde_json::{json, Value};

fn run_cli(file: &str, arguments: &[&str]) -> Result<String> {
    let binary_path = env!("CARGO_BIN_EXE_transaction-insights");
    let input_path = Path::new("samples").join(file);

    let output = Command::new(binary_path)
        .arg(input_path)
        .args(arguments)
        .output()?;

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    Ok(String::from_utf8(output.stdout)?)
}

fn run_cli_json(file: &str, arguments: &[&str]) -> Result<Value> {
    Ok(serde_json::from_str(&run_cli(file, arguments)?)?)
}

#[test]
fn test_cli_reports_cashback_per_category() -> Result<()> {
    let stdout = run_cli("statement.json", &["cashback", "--year", "2024", "--month", "12"])?;

    assert!(stdout.starts_with("{\n    \""));
    assert!(stdout.contains("Техника"));

    let report: Value = serde_json::from_str(&stdout)?;

    assert_eq!(report, json!({
        "Техника": 74.5,
        "Фастфуд": 425.0,
        "Финансовые операции": 0.0,
        "Пополнения": 0.0
    }));

    Ok(())
}

#[test]
fn test_cli_filters_personal_transfers_and_searches() -> Result<()> {
    let transfers = run_cli_json("statement.json", &["transfers"])?;
    let found = run_cli_json("statement.json", &["search", "--query", "ОБЕД"])?;
    let everything = run_cli_json("statement.json", &["search"])?;

    assert_eq!(transfers.as_array().map(Vec::len), Some(1));
    assert_eq!(transfers[0]["Описание операции"], json!("Иван М."));
    assert_eq!(found.as_array().map(Vec::len), Some(1));
    assert_eq!(found[0]["Описание операции"], json!("Бургер Кинг"));
    assert_eq!(everything.as_array().map(Vec::len), Some(7));

    Ok(())
}

#[test]
fn test_cli_overview_counts_transactions() -> Result<()> {
    let report = run_cli_json("statement.json", &["overview"])?;

    assert_eq!(report["total_transactions"], json!(7));
    assert_eq!(report["transactions"][0]["Кэшбек"], json!("+74.5"));

    Ok(())
}

#[test]
fn test_cli_reports_spending_from_csv() -> Result<()> {
    let report = run_cli_json("operations.csv", &["spending", "--category", "Еда", "--start-date", "2024-12-01"])?;

    assert_eq!(report["category"], json!("Еда"));
    assert_eq!(report["total_spent"], json!(224));
    assert_eq!(report["start_date"], json!("2024-12-01"));
    assert_eq!(report["end_date"], json!("2025-03-01"));
    assert_eq!(report["transactions"].as_array().map(Vec::len), Some(3));

    Ok(())
}

#[test]
fn test_cli_reports_savings_and_events_from_csv() -> Result<()> {
    let saved: f64 = run_cli("operations.csv", &["savings", "--month", "2024-12", "--limit", "100"])?.trim().parse()?;
    let events = run_cli_json("operations.csv", &["events"])?;

    assert!((saved - 142.18).abs() < 0.01, "saved {saved}");
    assert_eq!(events, json!({"total_events": 4, "categories": {"Еда": 3, "Транспорт": 1}}));

    Ok(())
}

#[test]
fn test_cli_renders_errors_as_payloads() -> Result<()> {
    let missing_file = run_cli_json("missing.json", &["overview"])?;
    let bad_start_date = run_cli_json("operations.csv", &["spending", "--category", "Еда", "--start-date", "01.12.2024"])?;
    let bad_row_dates = run_cli_json("statement.json", &["spending", "--category", "Техника", "--start-date", "2024-12-01"])?;

    assert!(missing_file["error"].as_str().is_some_and(|message| message.contains("not found")));
    assert!(bad_start_date["error"].as_str().is_some_and(|message| message.contains("Failed to parse dates")));
    assert!(bad_row_dates["error"].as_str().is_some_and(|message| message.contains("15.12.2024")));

    Ok(())
}
