//! Stamp duty rate resolution
//!
//! Resolves the rate for a transaction from the schedule. Fallbacks are
//! explicit match arms rather than map lookups with a default.

use lands_types::fee::StampDutyRates;
use lands_types::transaction::{PropertyType, TransactionType};
use rust_decimal::Decimal;

// ── Lease duration ──────────────────────────────────────────────────────

/// Lease term actually charged on.
///
/// A missing or non-positive duration is treated as a one-year lease.
pub fn effective_lease_duration(duration_years: Option<i64>) -> i64 {
    match duration_years {
        Some(years) if years > 0 => years,
        _ => 1,
    }
}

/// Number of years the per-year lease rate is multiplied by.
///
/// `min(effective_duration, cap)` for leases, 1 for everything else.
pub fn lease_multiplier(
    rates: &StampDutyRates,
    transaction_type: TransactionType,
    duration_years: Option<i64>,
) -> i64 {
    match transaction_type {
        TransactionType::Lease => {
            effective_lease_duration(duration_years).min(rates.lease_multiplier_cap_years)
        }
        TransactionType::Transfer | TransactionType::Mortgage => 1,
    }
}

// ── Rate table ──────────────────────────────────────────────────────────

/// Transfer rate for a land use classification.
///
/// Unrecognized classifications pay the residential rate.
pub fn transfer_rate(rates: &StampDutyRates, property_type: PropertyType) -> Decimal {
    match property_type {
        PropertyType::Residential => rates.transfer_residential,
        PropertyType::Commercial => rates.transfer_commercial,
        PropertyType::Agricultural => rates.transfer_agricultural,
        PropertyType::Industrial => rates.transfer_industrial,
        PropertyType::Unrecognized => rates.transfer_residential,
    }
}

/// Per-year lease rate; long-term leases pay the higher rate.
pub fn lease_rate(rates: &StampDutyRates, duration_years: Option<i64>) -> Decimal {
    if effective_lease_duration(duration_years) < rates.lease_long_term_years {
        rates.lease_short_term_per_year
    } else {
        rates.lease_long_term_per_year
    }
}

/// Resolve the stamp duty rate (a fraction, not a percentage).
///
/// | Transaction | Property Type        | Rate          |
/// |-------------|----------------------|---------------|
/// | Transfer    | by property type     | see table     |
/// | Mortgage    | any                  | 0.25%         |
/// | Lease       | duration < 5 years   | 0.5% per year |
/// | Lease       | duration >= 5 years  | 1.0% per year |
pub fn resolve_stamp_duty_rate(
    rates: &StampDutyRates,
    transaction_type: TransactionType,
    property_type: PropertyType,
    lease_duration_years: Option<i64>,
) -> Decimal {
    match transaction_type {
        TransactionType::Transfer => transfer_rate(rates, property_type),
        TransactionType::Mortgage => rates.mortgage,
        TransactionType::Lease => lease_rate(rates, lease_duration_years),
    }
}
