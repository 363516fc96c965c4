use crate::models::{Column, Transaction};

/// Transactions together with the columns their source declared.
///
/// Table-level reports validate the column set before looking at any row, so
/// the columns are tracked separately from the values the rows happen to hold.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionTable {
    columns: Vec<String>,
    rows: Vec<Transaction>
}

impl TransactionTable {
    pub fn new(columns: Vec<String>, rows: Vec<Transaction>) -> Self {
        Self { columns, rows }
    }

    /// Builds a table whose columns are inferred from the populated fields,
    /// in first-seen order.
    pub fn from_rows(rows: Vec<Transaction>) -> Self {
        let mut columns: Vec<String> = Vec::new();

        for row in &rows {
            for column in row.present_columns() {
                if !columns.contains(&column) {
                    columns.push(column);
                }
            }
        }

        Self { columns, rows }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Transaction] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn has_column(&self, column: Column) -> bool {
        self.columns.iter().any(|name| column.matches(name))
    }

    /// Headers of the `required` columns this table lacks, in the order given.
    pub fn missing_columns(&self, required: &[Column]) -> Vec<&'static str> {
        required.iter()
            .filter(|column| !self.has_column(**column))
            .map(|column| column.header())
            .collect()
    }

    pub fn into_rows(self) -> Vec<Transaction> {
        self.rows
    }
}
