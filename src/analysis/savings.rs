use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::{debug, info, warn};

use crate::models::Transaction;

/// Rounds `amount` up to the next multiple of `limit`.
///
/// The result is always strictly greater than `amount`: an amount that already
/// sits on a multiple moves to the following one (100 with limit 100 gives 200).
pub fn round_up(amount: f64, limit: f64) -> f64 {
    ((amount / limit).floor() + 1.0) * limit
}

/// Computes how much rounding every operation of `month` up to `limit` would
/// have put aside.
///
/// `month` is a `YYYY-MM` prefix of the operation date. Operations without a
/// usable amount are skipped. The total is rounded to two decimal places.
pub fn round_up_savings(month: &str, transactions: &[Transaction], limit: u32) -> f64 {
    if limit == 0 {
        warn!("Round-up limit must be positive, nothing saved");
        return 0.0;
    }

    let limit = f64::from(limit);
    let mut total_saved = 0.0;

    for transaction in transactions {
        let operation_date = transaction.operation_date().unwrap_or("");

        if !operation_date.starts_with(month) {
            debug!("Skipped transaction dated [{operation_date}]: not in {month}");
            continue;
        }

        let Some(raw_amount) = transaction.operation_amount().filter(|value| !value.is_blank()) else {
            debug!("Skipped transaction dated [{operation_date}]: no operation amount");
            continue;
        };

        let Some(amount) = raw_amount.to_f64().filter(|value| value.is_finite()) else {
            debug!("Skipped transaction dated [{operation_date}]: invalid amount [{raw_amount}]");
            continue;
        };

        let rounded = round_up(amount, limit);
        let saved = rounded - amount;

        debug!("Transaction dated [{operation_date}]: amount {amount}, rounded to {rounded}, saved {saved}");
        total_saved += saved;
    }

    info!("Total saved for {month}: {total_saved}");
    round_to_cents(total_saved)
}

/// Rounds to two decimal places, ties to even on the exact binary value
/// (0.125 becomes 0.12).
pub fn round_to_cents(value: f64) -> f64 {
    Decimal::from_f64_retain(value)
        .map(|exact| exact.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven))
        .and_then(|rounded| rounded.to_f64())
        .unwrap_or_else(|| (value * 100.0).round() / 100.0)
}
