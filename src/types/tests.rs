use super::FieldValue;

use std::str::FromStr;

use anyhow::Result;
use rust_decimal::Decimal;
use serde_json::json;

#[test]
fn test_cashback_accepts_whole_signed_decimals() {
    let test_cases = vec![
        ("+74.5", 74.5),
        ("+30", 30.0),
        ("-12", -12.0),
        (".5", 0.5),
        ("0", 0.0),
    ];

    for (input_string, expected_output) in test_cases {
        assert_eq!(FieldValue::from(input_string).to_cashback(), expected_output);
    }
}

#[test]
fn test_cashback_rejects_partial_and_garbage_strings() {
    for input_string in ["None", "", "15.5$", "150 рублей", "1.2.3", " 5", "+"] {
        assert_eq!(FieldValue::from(input_string).to_cashback(), 0.0, "input: {input_string:?}");
    }

    assert_eq!(FieldValue::Other(json!([1, 2])).to_cashback(), 0.0);
}

#[test]
fn test_cashback_uses_numbers_directly() {
    assert_eq!(FieldValue::from(12.25).to_cashback(), 12.25);
    assert_eq!(FieldValue::from(7_i64).to_cashback(), 7.0);
}

#[test]
fn test_numeric_coercion_parses_loose_text() {
    assert_eq!(FieldValue::from("  174.5 ").to_f64(), Some(174.5));
    assert_eq!(FieldValue::from("-49.99").to_f64(), Some(-49.99));
    assert_eq!(FieldValue::from("1e3").to_f64(), Some(1000.0));
    assert_eq!(FieldValue::Bool(true).to_f64(), Some(1.0));
    assert_eq!(FieldValue::from("").to_f64(), None);
    assert_eq!(FieldValue::from("abc").to_f64(), None);
    assert_eq!(FieldValue::Other(json!({"a": 1})).to_f64(), None);
}

#[test]
fn test_decimal_coercion_is_exact() -> Result<()> {
    assert_eq!(FieldValue::from("100.10").to_decimal(), Some(Decimal::from_str("100.10")?));
    assert_eq!(FieldValue::from(300_i64).to_decimal(), Some(Decimal::from(300)));
    assert_eq!(FieldValue::from("2.5e2").to_decimal(), Some(Decimal::from(250)));
    assert_eq!(FieldValue::from("n/a").to_decimal(), None);

    Ok(())
}

#[test]
fn test_field_value_deserializes_each_shape() -> Result<()> {
    let values: Vec<FieldValue> = serde_json::from_value(json!([true, 15, "+15", [1]]))?;

    assert_eq!(values[0], FieldValue::Bool(true));
    assert_eq!(values[1], FieldValue::from(15_i64));
    assert_eq!(values[2], FieldValue::from("+15"));
    assert!(matches!(values[3], FieldValue::Other(_)));

    Ok(())
}
