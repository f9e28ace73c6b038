//! Fee calculation types
//!
//! The fee schedule is a single versioned table of rates and charges, so a
//! change in Lands Commission rates is a data edit rather than a logic
//! change. Requests describe a transaction; results are immutable
//! itemized breakdowns.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::FeeError;
use crate::exemption::ExemptionRule;
use crate::ids::ReferenceNumber;
use crate::transaction::{PropertyType, TransactionType};

/// Stamp duty rates, as fractions of the property value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StampDutyRates {
    pub transfer_residential: Decimal,
    pub transfer_commercial: Decimal,
    pub transfer_agricultural: Decimal,
    pub transfer_industrial: Decimal,
    pub mortgage: Decimal,
    /// Per-year rate for leases shorter than `lease_long_term_years`
    pub lease_short_term_per_year: Decimal,
    /// Per-year rate for leases of `lease_long_term_years` or more
    pub lease_long_term_per_year: Decimal,
    pub lease_long_term_years: i64,
    /// Ceiling on the number of lease years charged
    pub lease_multiplier_cap_years: i64,
}

/// A fee made of a fixed base plus a per-hectare component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreaScaledFee {
    pub base: Decimal,
    pub per_hectare: Decimal,
}

impl AreaScaledFee {
    /// `base + hectares * per_hectare`, or `None` on overflow
    pub fn amount_for(&self, hectares: Decimal) -> Option<Decimal> {
        hectares.checked_mul(self.per_hectare)?.checked_add(self.base)
    }
}

/// Additional (non-duty) charges
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdditionalFees {
    pub registration: AreaScaledFee,
    pub survey: AreaScaledFee,
    pub search: Decimal,
    pub processing: Decimal,
    pub expedited: Decimal,
}

/// Versioned table of every rate and charge used by the calculator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeSchedule {
    pub version: String,
    pub rates: StampDutyRates,
    pub fees: AdditionalFees,
}

impl FeeSchedule {
    /// Current Lands Commission schedule
    ///
    /// | Transaction | Property Type        | Rate          |
    /// |-------------|----------------------|---------------|
    /// | Transfer    | Residential          | 0.5%          |
    /// | Transfer    | Commercial           | 1.0%          |
    /// | Transfer    | Agricultural         | 0.25%         |
    /// | Transfer    | Industrial           | 1.0%          |
    /// | Mortgage    | any                  | 0.25%         |
    /// | Lease       | duration < 5 years   | 0.5% per year |
    /// | Lease       | duration >= 5 years  | 1.0% per year |
    pub fn standard() -> Self {
        Self {
            version: "2024.1".to_string(),
            rates: StampDutyRates {
                transfer_residential: Decimal::new(5, 3),   // 0.5%
                transfer_commercial: Decimal::new(1, 2),    // 1.0%
                transfer_agricultural: Decimal::new(25, 4), // 0.25%
                transfer_industrial: Decimal::new(1, 2),    // 1.0%
                mortgage: Decimal::new(25, 4),              // 0.25%
                lease_short_term_per_year: Decimal::new(5, 3),
                lease_long_term_per_year: Decimal::new(1, 2),
                lease_long_term_years: 5,
                lease_multiplier_cap_years: 10,
            },
            fees: AdditionalFees {
                registration: AreaScaledFee {
                    base: Decimal::from(500),
                    per_hectare: Decimal::from(50),
                },
                survey: AreaScaledFee {
                    base: Decimal::from(1500),
                    per_hectare: Decimal::from(200),
                },
                search: Decimal::from(150),
                processing: Decimal::from(250),
                expedited: Decimal::from(1000),
            },
        }
    }
}

impl Default for FeeSchedule {
    fn default() -> Self {
        Self::standard()
    }
}

/// Description of a transaction to price
///
/// `property_value` is optional so that a missing value can be rejected
/// explicitly rather than defaulting to zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeeCalculationRequest {
    pub transaction_type: TransactionType,
    #[serde(default)]
    pub property_type: PropertyType,
    #[serde(default)]
    pub property_value: Option<Decimal>,
    /// Parcel area in hectares
    #[serde(default)]
    pub property_area: Decimal,
    #[serde(default)]
    pub lease_duration_years: Option<i64>,
    #[serde(default)]
    pub exemption: Option<ExemptionRule>,
    #[serde(default)]
    pub include_registration_fee: bool,
    #[serde(default)]
    pub include_survey_fee: bool,
    #[serde(default)]
    pub include_search_fee: bool,
    #[serde(default)]
    pub expedited: bool,
}

impl FeeCalculationRequest {
    /// Request with no area, exemption or optional add-ons
    pub fn new(transaction_type: TransactionType, property_value: Decimal) -> Self {
        Self {
            transaction_type,
            property_type: PropertyType::default(),
            property_value: Some(property_value),
            property_area: Decimal::ZERO,
            lease_duration_years: None,
            exemption: None,
            include_registration_fee: false,
            include_survey_fee: false,
            include_search_fee: false,
            expedited: false,
        }
    }

    pub fn transfer(property_type: PropertyType, property_value: Decimal) -> Self {
        Self {
            property_type,
            ..Self::new(TransactionType::Transfer, property_value)
        }
    }

    pub fn mortgage(property_value: Decimal) -> Self {
        Self::new(TransactionType::Mortgage, property_value)
    }

    pub fn lease(property_value: Decimal, duration_years: i64) -> Self {
        Self {
            lease_duration_years: Some(duration_years),
            ..Self::new(TransactionType::Lease, property_value)
        }
    }

    pub fn with_area(mut self, hectares: Decimal) -> Self {
        self.property_area = hectares;
        self
    }

    pub fn with_exemption(mut self, exemption: ExemptionRule) -> Self {
        self.exemption = Some(exemption);
        self
    }

    pub fn with_registration_fee(mut self) -> Self {
        self.include_registration_fee = true;
        self
    }

    pub fn with_survey_fee(mut self) -> Self {
        self.include_survey_fee = true;
        self
    }

    pub fn with_search_fee(mut self) -> Self {
        self.include_search_fee = true;
        self
    }

    pub fn expedited(mut self) -> Self {
        self.expedited = true;
        self
    }
}

/// Rounded components of a calculation, before totals are derived
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeeBreakdown {
    pub transaction_type: TransactionType,
    pub property_type: PropertyType,
    pub stamp_duty_rate: Decimal,
    pub lease_multiplier: i64,
    pub gross_stamp_duty: Decimal,
    pub exemption_id: Option<String>,
    pub exemption_discount_amount: Decimal,
    pub net_stamp_duty: Decimal,
    pub registration_fee: Decimal,
    pub survey_fee: Decimal,
    pub search_fee: Decimal,
    pub processing_fee: Decimal,
    pub expedited_fee: Decimal,
    pub schedule_version: String,
}

/// Immutable itemized fee breakdown
///
/// Totals are derived once, at construction, from the rounded components,
/// so `grand_total == net_stamp_duty + total_additional_fees` always holds.
/// Serialize-only: the only way in is [`FeeCalculationResult::from_breakdown`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeeCalculationResult {
    reference_number: ReferenceNumber,
    calculated_at: DateTime<Utc>,
    transaction_type: TransactionType,
    property_type: PropertyType,
    stamp_duty_rate_percent: Decimal,
    lease_multiplier: i64,
    gross_stamp_duty: Decimal,
    exemption_id: Option<String>,
    exemption_discount_amount: Decimal,
    net_stamp_duty: Decimal,
    registration_fee: Decimal,
    survey_fee: Decimal,
    search_fee: Decimal,
    processing_fee: Decimal,
    expedited_fee: Decimal,
    total_additional_fees: Decimal,
    grand_total: Decimal,
    schedule_version: String,
}

impl FeeCalculationResult {
    /// Seal a breakdown into a result with a fresh reference number
    ///
    /// Fails with `ArithmeticOverflow` if either total exceeds `Decimal`
    /// range.
    pub fn from_breakdown(
        breakdown: FeeBreakdown,
        calculated_at: DateTime<Utc>,
    ) -> Result<Self, FeeError> {
        let total_additional_fees = [
            breakdown.registration_fee,
            breakdown.survey_fee,
            breakdown.search_fee,
            breakdown.processing_fee,
            breakdown.expedited_fee,
        ]
        .into_iter()
        .try_fold(Decimal::ZERO, |acc, fee| acc.checked_add(fee))
        .ok_or_else(|| FeeError::ArithmeticOverflow("additional fees".to_string()))?;
        let grand_total = breakdown
            .net_stamp_duty
            .checked_add(total_additional_fees)
            .ok_or_else(|| FeeError::ArithmeticOverflow("grand total".to_string()))?;

        Ok(Self {
            reference_number: ReferenceNumber::new(),
            calculated_at,
            transaction_type: breakdown.transaction_type,
            property_type: breakdown.property_type,
            stamp_duty_rate_percent: crate::numeric::rate_to_percent(breakdown.stamp_duty_rate),
            lease_multiplier: breakdown.lease_multiplier,
            gross_stamp_duty: breakdown.gross_stamp_duty,
            exemption_id: breakdown.exemption_id,
            exemption_discount_amount: breakdown.exemption_discount_amount,
            net_stamp_duty: breakdown.net_stamp_duty,
            registration_fee: breakdown.registration_fee,
            survey_fee: breakdown.survey_fee,
            search_fee: breakdown.search_fee,
            processing_fee: breakdown.processing_fee,
            expedited_fee: breakdown.expedited_fee,
            total_additional_fees,
            grand_total,
            schedule_version: breakdown.schedule_version,
        })
    }

    pub fn reference_number(&self) -> ReferenceNumber {
        self.reference_number
    }

    pub fn calculated_at(&self) -> DateTime<Utc> {
        self.calculated_at
    }

    pub fn transaction_type(&self) -> TransactionType {
        self.transaction_type
    }

    pub fn property_type(&self) -> PropertyType {
        self.property_type
    }

    pub fn stamp_duty_rate_percent(&self) -> Decimal {
        self.stamp_duty_rate_percent
    }

    pub fn lease_multiplier(&self) -> i64 {
        self.lease_multiplier
    }

    pub fn gross_stamp_duty(&self) -> Decimal {
        self.gross_stamp_duty
    }

    pub fn exemption_id(&self) -> Option<&str> {
        self.exemption_id.as_deref()
    }

    pub fn exemption_discount_amount(&self) -> Decimal {
        self.exemption_discount_amount
    }

    pub fn net_stamp_duty(&self) -> Decimal {
        self.net_stamp_duty
    }

    pub fn registration_fee(&self) -> Decimal {
        self.registration_fee
    }

    pub fn survey_fee(&self) -> Decimal {
        self.survey_fee
    }

    pub fn search_fee(&self) -> Decimal {
        self.search_fee
    }

    pub fn processing_fee(&self) -> Decimal {
        self.processing_fee
    }

    pub fn expedited_fee(&self) -> Decimal {
        self.expedited_fee
    }

    pub fn total_additional_fees(&self) -> Decimal {
        self.total_additional_fees
    }

    pub fn grand_total(&self) -> Decimal {
        self.grand_total
    }

    pub fn schedule_version(&self) -> &str {
        &self.schedule_version
    }

    /// Ordered breakdown for receipts and tables; zero charges are omitted
    pub fn line_items(&self) -> Vec<LineItem> {
        let mut items = vec![LineItem::new("Gross stamp duty", self.gross_stamp_duty)];
        if !self.exemption_discount_amount.is_zero() {
            items.push(LineItem::new(
                "Exemption discount",
                -self.exemption_discount_amount,
            ));
        }
        items.push(LineItem::new("Net stamp duty", self.net_stamp_duty));

        let fees = [
            ("Registration fee", self.registration_fee),
            ("Survey fee", self.survey_fee),
            ("Search fee", self.search_fee),
            ("Processing fee", self.processing_fee),
            ("Expedited processing", self.expedited_fee),
        ];
        items.extend(
            fees.into_iter()
                .filter(|(_, amount)| !amount.is_zero())
                .map(|(label, amount)| LineItem::new(label, amount)),
        );
        items.push(LineItem::new("Grand total", self.grand_total));
        items
    }
}

/// One row of a rendered breakdown
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub label: String,
    pub amount: Decimal,
}

impl LineItem {
    fn new(label: &str, amount: Decimal) -> Self {
        Self {
            label: label.to_string(),
            amount,
        }
    }
}
