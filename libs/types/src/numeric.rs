//! Fixed-point money helpers
//!
//! Uses rust_decimal for deterministic arithmetic (no floating-point errors).
//! Every charged component is rounded to the currency minor unit with
//! HALF_UP before it is summed, so totals never drift from their parts.

use rust_decimal::prelude::*;
use rust_decimal::Decimal;

/// Currency minor-unit precision (pesewas).
pub const MONEY_DP: u32 = 2;

/// Round an amount to the minor unit, HALF_UP.
///
/// The result always carries exactly `MONEY_DP` decimal places, so amounts
/// render uniformly (`250.00`, not `250`).
pub fn round_money(v: Decimal) -> Decimal {
    let mut rounded = v.round_dp_with_strategy(MONEY_DP, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(MONEY_DP);
    rounded
}

/// Express a fractional rate (0.005) as a percentage (0.5).
pub fn rate_to_percent(rate: Decimal) -> Decimal {
    (rate * Decimal::ONE_HUNDRED).normalize()
}

/// Clamp to zero from below.
pub fn floor_zero(v: Decimal) -> Decimal {
    v.max(Decimal::ZERO)
}
