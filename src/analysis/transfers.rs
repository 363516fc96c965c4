use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, info};

use crate::models::{Transaction, DEBIT, FINANCIAL_OPERATIONS};

/// A first name followed by an initial, e.g. "Иван М.".
static PERSON_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[А-ЯЁ][а-яё]+\s[А-ЯЁ]\.$").expect("person pattern is valid")
});

/// Selects debits to private persons: financial operations whose description
/// is a name with an initial and which carry no comment.
pub fn personal_transfers(transactions: &[Transaction]) -> Vec<Transaction> {
    info!("Filtering transfers to private persons");

    let transfers: Vec<Transaction> = transactions.iter()
        .filter(|transaction| is_personal_transfer(transaction))
        .inspect(|transaction| debug!("Transfer selected: {}", transaction.description()))
        .cloned()
        .collect();

    info!("Found {} transfers to private persons", transfers.len());
    transfers
}

fn is_personal_transfer(transaction: &Transaction) -> bool {
    transaction.category() == Some(FINANCIAL_OPERATIONS)
        && transaction.transaction_type() == DEBIT
        && PERSON_PATTERN.is_match(transaction.description())
        && transaction.comment().is_empty()
}
