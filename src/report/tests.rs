use super::{error_payload, render, render_error, render_list, to_json, OverviewReport};

use std::collections::BTreeMap;

use anyhow::Result;
use serde::ser::Error as _;
use serde::{Serialize, Serializer};
use serde_json::{json, Value};

use crate::models::{ReportError, Transaction, TransactionTable};

struct Unserializable;

impl Serialize for Unserializable {
    fn serialize<S: Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
        Err(S::Error::custom("not serializable"))
    }
}

#[test]
fn test_json_uses_four_space_indent_and_keeps_cyrillic() -> Result<()> {
    let mut value = BTreeMap::new();
    value.insert("category", "Еда");

    assert_eq!(to_json(&value)?, "{\n    \"category\": \"Еда\"\n}");

    Ok(())
}

#[test]
fn test_render_turns_errors_into_payloads() -> Result<()> {
    let result: Result<Value, ReportError> = Err(ReportError::missing_columns(["Категория"]));

    let rendered: Value = serde_json::from_str(&render(result))?;

    assert_eq!(rendered, error_payload("Missing required columns: Категория"));

    Ok(())
}

#[test]
fn test_render_reports_serialization_failures() -> Result<()> {
    let result: Result<Unserializable, ReportError> = Ok(Unserializable);

    let rendered: Value = serde_json::from_str(&render(result))?;

    assert!(rendered["error"].as_str().is_some_and(|message| message.contains("not serializable")));

    Ok(())
}

#[test]
fn test_render_list_degrades_to_empty_list() {
    assert_eq!(render_list(&[Unserializable]), "[]");
    assert_eq!(render_list::<Transaction>(&[]), "[]");
}

#[test]
fn test_render_error_is_indented_json() {
    assert_eq!(render_error("File x.json not found."), "{\n    \"error\": \"File x.json not found.\"\n}");
}

#[test]
fn test_overview_counts_transactions() -> Result<()> {
    let rows: Vec<Transaction> = serde_json::from_value(json!([
        {"Сумма": "1500", "Тип": "Списание"},
        {"Сумма": "2000", "Тип": "Пополнение"}
    ]))?;

    let report = OverviewReport::from_table(TransactionTable::from_rows(rows));
    let rendered: Value = serde_json::from_str(&to_json(&report)?)?;

    assert_eq!(rendered["total_transactions"], json!(2));
    assert_eq!(rendered["transactions"][1]["Тип"], json!("Пополнение"));

    Ok(())
}
