use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::Column;
use crate::types::{lenient_text, FieldValue};

/// A single row of a bank export.
///
/// Every field is optional because real exports leave cells blank or drop
/// columns entirely. Text fields read as empty strings when absent; numeric
/// fields stay as loosely typed [`FieldValue`]s until an analysis coerces them.
/// Columns this crate does not interpret are kept in `extra` so that reports
/// echo the complete record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(rename = "Дата операции", alias = "operation_date", default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub operation_date: Option<String>,
    #[serde(rename = "Категория", alias = "category", default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(rename = "Сумма", alias = "amount", default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<FieldValue>,
    #[serde(rename = "Сумма операции", alias = "operation_amount", default, skip_serializing_if = "Option::is_none")]
    pub operation_amount: Option<FieldValue>,
    #[serde(rename = "Кэшбек", alias = "cashback", default, skip_serializing_if = "Option::is_none")]
    pub cashback: Option<FieldValue>,
    #[serde(rename = "Описание операции", alias = "description", default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "Комментарий", alias = "comment", default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(rename = "Тип", alias = "type", default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub transaction_type: Option<String>,
    /// Columns without a dedicated field.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>
}

impl Transaction {
    pub fn operation_date(&self) -> Option<&str> {
        self.operation_date.as_deref()
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }

    pub fn comment(&self) -> &str {
        self.comment.as_deref().unwrap_or("")
    }

    pub fn transaction_type(&self) -> &str {
        self.transaction_type.as_deref().unwrap_or("")
    }

    /// The charged amount of the operation, falling back to the plain amount
    /// column for exports that only carry one.
    pub fn operation_amount(&self) -> Option<&FieldValue> {
        self.operation_amount.as_ref().or(self.amount.as_ref())
    }

    /// Names of the columns this record carries a value for.
    pub fn present_columns(&self) -> Vec<String> {
        let mut columns: Vec<String> = Column::ALL.iter()
            .filter(|column| self.has(**column))
            .map(|column| column.header().to_string())
            .collect();

        columns.extend(self.extra.keys().cloned());
        columns
    }

    fn has(&self, column: Column) -> bool {
        match column {
            Column::OperationDate => self.operation_date.is_some(),
            Column::Category => self.category.is_some(),
            Column::Amount => self.amount.is_some(),
            Column::OperationAmount => self.operation_amount.is_some(),
            Column::Cashback => self.cashback.is_some(),
            Column::Description => self.description.is_some(),
            Column::Comment => self.comment.is_some(),
            Column::Type => self.transaction_type.is_some()
        }
    }
}
