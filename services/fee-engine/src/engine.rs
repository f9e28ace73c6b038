//! Fee Engine — orchestrator
//!
//! Ties together validation, rate resolution, charges and result
//! construction, and logs each calculation. The engine is immutable after
//! construction and can be shared across threads behind an `Arc`.

use lands_types::errors::FeeError;
use lands_types::exemption::{find_exemption, standard_exemptions, ExemptionRule};
use lands_types::fee::{FeeCalculationRequest, FeeCalculationResult, FeeSchedule};
use lands_types::transaction::{PropertyType, TransactionType};
use tracing::{debug, info, warn};

use crate::calculator;
use crate::history::{CalculationHistory, DEFAULT_HISTORY_CAPACITY};

/// Fee engine configuration
#[derive(Debug, Clone)]
pub struct FeeEngineConfig {
    /// Rates and charges applied to every calculation
    pub schedule: FeeSchedule,
    /// Exemptions callers may select by id
    pub exemptions: Vec<ExemptionRule>,
    /// Capacity of histories handed out by `new_history`
    pub history_capacity: usize,
}

impl Default for FeeEngineConfig {
    fn default() -> Self {
        Self {
            schedule: FeeSchedule::standard(),
            exemptions: standard_exemptions(),
            history_capacity: DEFAULT_HISTORY_CAPACITY,
        }
    }
}

/// Fee engine service
#[derive(Debug, Clone)]
pub struct FeeEngine {
    config: FeeEngineConfig,
}

impl FeeEngine {
    /// Create a new fee engine with default configuration
    pub fn new() -> Self {
        Self {
            config: FeeEngineConfig::default(),
        }
    }

    /// Create a new fee engine with custom configuration.
    ///
    /// Fails if any catalogue exemption has a fraction outside [0, 1].
    pub fn with_config(config: FeeEngineConfig) -> Result<Self, FeeError> {
        for rule in &config.exemptions {
            rule.validate()?;
        }
        Ok(Self { config })
    }

    pub fn schedule(&self) -> &FeeSchedule {
        &self.config.schedule
    }

    pub fn exemptions(&self) -> &[ExemptionRule] {
        &self.config.exemptions
    }

    /// Empty history sized per configuration, owned by the caller
    pub fn new_history(&self) -> CalculationHistory {
        CalculationHistory::new(self.config.history_capacity)
    }

    /// Price a transaction.
    pub fn calculate(
        &self,
        request: &FeeCalculationRequest,
    ) -> Result<FeeCalculationResult, FeeError> {
        debug!(
            transaction_type = %request.transaction_type,
            property_type = %request.property_type,
            property_value = ?request.property_value,
            lease_duration_years = ?request.lease_duration_years,
            exemption = ?request.exemption.as_ref().map(|e| e.id.as_str()),
            "Calculating stamp duty"
        );
        log_fallbacks(request);

        let result = calculator::calculate_with_schedule(&self.config.schedule, request)
            .inspect_err(|e| warn!(error = %e, "Fee calculation rejected"))?;

        info!(
            reference = %result.reference_number(),
            transaction_type = %result.transaction_type(),
            gross_stamp_duty = %result.gross_stamp_duty(),
            net_stamp_duty = %result.net_stamp_duty(),
            grand_total = %result.grand_total(),
            schedule_version = result.schedule_version(),
            "Fee calculation complete"
        );
        Ok(result)
    }

    /// Price a transaction, applying a catalogue exemption by id.
    ///
    /// Any exemption already on the request is replaced.
    pub fn calculate_with_exemption_id(
        &self,
        request: &FeeCalculationRequest,
        exemption_id: Option<&str>,
    ) -> Result<FeeCalculationResult, FeeError> {
        let exemption = exemption_id
            .map(|id| find_exemption(&self.config.exemptions, id).cloned())
            .transpose()?;
        let request = FeeCalculationRequest {
            exemption,
            ..request.clone()
        };
        self.calculate(&request)
    }
}

impl Default for FeeEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn log_fallbacks(request: &FeeCalculationRequest) {
    match request.transaction_type {
        TransactionType::Transfer if request.property_type == PropertyType::Unrecognized => {
            warn!("Unrecognized property type, applying residential transfer rate");
        }
        TransactionType::Lease if !matches!(request.lease_duration_years, Some(y) if y > 0) => {
            warn!(
                lease_duration_years = ?request.lease_duration_years,
                "Missing or non-positive lease duration, charging as one year"
            );
        }
        _ => {}
    }
}
