//! Campaign totals derived from the donation ledger.
//!
//! A campaign's `current_amount` must equal the sum of its completed
//! donations. The database applies [`aggregate_delta`] inside the same
//! transaction as each donation insert; reconciliation recomputes the sum
//! in SQL.

use crate::status::DonationStatus;

/// How much an entry changes its campaign's running total when inserted.
pub fn aggregate_delta(status: DonationStatus, amount: f64) -> f64 {
    if status == DonationStatus::Completed {
        amount
    } else {
        0.0
    }
}

/// Funding progress as a percentage in `0.0..=100.0`.
///
/// A non-positive target yields 0.
pub fn progress_percent(current: f64, target: f64) -> f64 {
    if target <= 0.0 || !target.is_finite() || !current.is_finite() {
        return 0.0;
    }
    (current / target * 100.0).clamp(0.0, 100.0)
}
