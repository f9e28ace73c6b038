//! Stamp duty exemption rules

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::FeeError;

/// A discount on gross stamp duty granted to qualifying transactions
///
/// Invariant: 0 <= discount_fraction <= 1
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExemptionRule {
    pub id: String,
    pub label: String,
    pub discount_fraction: Decimal,
}

impl ExemptionRule {
    /// Create a rule, rejecting fractions outside [0, 1]
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        discount_fraction: Decimal,
    ) -> Result<Self, FeeError> {
        let rule = Self {
            id: id.into(),
            label: label.into(),
            discount_fraction,
        };
        rule.validate()?;
        Ok(rule)
    }

    /// Check the fraction invariant (rules may arrive via deserialization)
    pub fn validate(&self) -> Result<(), FeeError> {
        if self.discount_fraction < Decimal::ZERO || self.discount_fraction > Decimal::ONE {
            return Err(FeeError::InvalidExemption {
                id: self.id.clone(),
                fraction: self.discount_fraction.to_string(),
            });
        }
        Ok(())
    }

    /// Discount applied to a gross duty amount
    pub fn discount_on(&self, gross: Decimal) -> Decimal {
        gross * self.discount_fraction
    }
}

/// Exemptions recognised by the Lands Commission
pub fn standard_exemptions() -> Vec<ExemptionRule> {
    vec![
        ExemptionRule {
            id: "first_time_buyer".to_string(),
            label: "First-Time Homebuyer".to_string(),
            discount_fraction: Decimal::new(25, 2),
        },
        ExemptionRule {
            id: "inheritance".to_string(),
            label: "Inheritance / Succession".to_string(),
            discount_fraction: Decimal::new(50, 2),
        },
        ExemptionRule {
            id: "government".to_string(),
            label: "Government Transaction".to_string(),
            discount_fraction: Decimal::ONE,
        },
        ExemptionRule {
            id: "charitable".to_string(),
            label: "Charitable Organization".to_string(),
            discount_fraction: Decimal::new(75, 2),
        },
        ExemptionRule {
            id: "customary_family".to_string(),
            label: "Customary Family Transfer".to_string(),
            discount_fraction: Decimal::new(50, 2),
        },
    ]
}

/// Look up a rule by id in a catalogue
pub fn find_exemption<'a>(
    catalogue: &'a [ExemptionRule],
    id: &str,
) -> Result<&'a ExemptionRule, FeeError> {
    catalogue
        .iter()
        .find(|rule| rule.id == id)
        .ok_or_else(|| FeeError::UnknownExemption(id.to_string()))
}
