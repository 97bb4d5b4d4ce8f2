//! Reporting-currency amount normalization.
//!
//! All aggregation runs on `rust_decimal::Decimal`; sums are normalized to
//! the reporting currency precision before they flow into the report tree,
//! so totals computed from thousands of rows line up with independently
//! summed ledger totals.

use rust_decimal::Decimal;
use rust_decimal::prelude::*;

/// Decimal places of the reporting currency.
pub const REPORTING_DP: u32 = 2;

/// Rounds an aggregated amount to reporting precision.
///
/// Uses `RoundingStrategy::MidpointNearestEven` (Banker's Rounding) which:
/// - Rounds 2.5 → 2 (to nearest even)
/// - Rounds 3.5 → 4 (to nearest even)
#[must_use]
pub fn normalize(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(REPORTING_DP, RoundingStrategy::MidpointNearestEven)
}

/// Rounds to a custom number of decimal places using Banker's Rounding.
#[must_use]
pub fn normalize_with_precision(value: Decimal, decimal_places: u32) -> Decimal {
    value.round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointNearestEven)
}
