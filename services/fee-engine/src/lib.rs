//! Fee Engine Service
//!
//! Prices land registration transactions:
//! - Stamp duty on transfers, mortgages and leases
//! - Exemption discounts on stamp duty
//! - Registration, survey, search, processing and expedited charges
//!
//! Every calculation is a pure function of the request and the active
//! `FeeSchedule`. Result history is owned by callers through
//! `CalculationHistory`; the calculator never keeps state.

pub mod validator;
pub mod rates;
pub mod charges;
pub mod calculator;
pub mod history;
pub mod engine;

pub use calculator::{calculate, calculate_with_schedule, compute_breakdown};
pub use engine::{FeeEngine, FeeEngineConfig};
pub use history::CalculationHistory;

// Service version
pub const SERVICE_VERSION: &str = "0.1.0";
