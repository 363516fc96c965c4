use tracing::info;

use crate::models::Transaction;

/// Returns the transactions whose description, comment, category or type
/// contains `query`, ignoring case. An empty query matches everything.
pub fn search_transactions(transactions: &[Transaction], query: &str) -> Vec<Transaction> {
    info!("Searching transactions for [{query}]");

    let query = query.to_lowercase();

    let matched: Vec<Transaction> = transactions.iter()
        .filter(|transaction| {
            [
                transaction.description(),
                transaction.comment(),
                transaction.category().unwrap_or(""),
                transaction.transaction_type()
            ]
            .iter()
            .any(|field| field.to_lowercase().contains(&query))
        })
        .cloned()
        .collect();

    info!("Search finished with {} matching transactions", matched.len());
    matched
}
