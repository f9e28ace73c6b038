//! Stamp duty calculator
//!
//! Deterministic fee computation. All arithmetic is fixed-point `Decimal`
//! and each charged component is rounded HALF_UP to the minor unit before
//! totals are taken.
//!
//! ```text
//! gross    = value × rate × lease_multiplier
//! discount = gross × exemption.discount_fraction
//! net      = max(gross − discount, 0)
//! total    = net + registration + survey + search + processing + expedited
//! ```

use chrono::{DateTime, Utc};
use lands_types::errors::FeeError;
use lands_types::fee::{FeeBreakdown, FeeCalculationRequest, FeeCalculationResult, FeeSchedule};
use lands_types::numeric::{floor_zero, round_money};
use rust_decimal::Decimal;

use crate::charges;
use crate::rates;
use crate::validator;

/// Compute the rounded components for a request.
///
/// Pure: identical requests always produce identical breakdowns.
pub fn compute_breakdown(
    schedule: &FeeSchedule,
    request: &FeeCalculationRequest,
) -> Result<FeeBreakdown, FeeError> {
    let value = validator::validate_request(request)?;

    let rate = rates::resolve_stamp_duty_rate(
        &schedule.rates,
        request.transaction_type,
        request.property_type,
        request.lease_duration_years,
    );
    let multiplier = rates::lease_multiplier(
        &schedule.rates,
        request.transaction_type,
        request.lease_duration_years,
    );

    let gross = value
        .checked_mul(rate)
        .and_then(|v| v.checked_mul(Decimal::from(multiplier)))
        .map(round_money)
        .ok_or_else(|| FeeError::ArithmeticOverflow("gross stamp duty".to_string()))?;

    let discount = match &request.exemption {
        Some(exemption) => round_money(exemption.discount_on(gross)),
        None => round_money(Decimal::ZERO),
    };
    let net = round_money(floor_zero(gross - discount));

    let extra = charges::additional_charges(&schedule.fees, request)?;

    Ok(FeeBreakdown {
        transaction_type: request.transaction_type,
        property_type: request.property_type,
        stamp_duty_rate: rate,
        lease_multiplier: multiplier,
        gross_stamp_duty: gross,
        exemption_id: request.exemption.as_ref().map(|e| e.id.clone()),
        exemption_discount_amount: discount,
        net_stamp_duty: net,
        registration_fee: extra.registration,
        survey_fee: extra.survey,
        search_fee: extra.search,
        processing_fee: extra.processing,
        expedited_fee: extra.expedited,
        schedule_version: schedule.version.clone(),
    })
}

/// Calculate against an explicit schedule, stamping the given time.
pub fn calculate_at(
    schedule: &FeeSchedule,
    request: &FeeCalculationRequest,
    calculated_at: DateTime<Utc>,
) -> Result<FeeCalculationResult, FeeError> {
    let breakdown = compute_breakdown(schedule, request)?;
    FeeCalculationResult::from_breakdown(breakdown, calculated_at)
}

/// Calculate against an explicit schedule.
pub fn calculate_with_schedule(
    schedule: &FeeSchedule,
    request: &FeeCalculationRequest,
) -> Result<FeeCalculationResult, FeeError> {
    calculate_at(schedule, request, Utc::now())
}

/// Calculate against the standard schedule.
pub fn calculate(request: &FeeCalculationRequest) -> Result<FeeCalculationResult, FeeError> {
    calculate_with_schedule(&FeeSchedule::standard(), request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lands_types::exemption::{find_exemption, standard_exemptions, ExemptionRule};
    use lands_types::transaction::PropertyType;

    fn d(s: &str) -> Decimal {
        Decimal::from_str_exact(s).unwrap()
    }

    // ── Worked scenarios ──

    #[test]
    fn test_residential_transfer_processing_only() {
        let req = FeeCalculationRequest::transfer(PropertyType::Residential, Decimal::from(100_000));
        let result = calculate(&req).unwrap();

        assert_eq!(result.gross_stamp_duty(), Decimal::from(500));
        assert_eq!(result.net_stamp_duty(), Decimal::from(500));
        assert_eq!(result.registration_fee(), Decimal::ZERO);
        assert_eq!(result.processing_fee(), Decimal::from(250));
        assert_eq!(result.grand_total(), Decimal::from(750));
        assert_eq!(result.stamp_duty_rate_percent(), d("0.5"));
    }

    #[test]
    fn test_commercial_transfer_with_registration() {
        let req = FeeCalculationRequest::transfer(PropertyType::Commercial, Decimal::from(1_000_000))
            .with_area(Decimal::from(2))
            .with_registration_fee();
        let result = calculate(&req).unwrap();

        assert_eq!(result.gross_stamp_duty(), Decimal::from(10_000));
        assert_eq!(result.registration_fee(), Decimal::from(600));
        assert_eq!(result.processing_fee(), Decimal::from(250));
        assert_eq!(result.total_additional_fees(), Decimal::from(850));
        assert_eq!(result.grand_total(), Decimal::from(10_850));
    }

    #[test]
    fn test_mortgage() {
        let result = calculate(&FeeCalculationRequest::mortgage(Decimal::from(2_500_000))).unwrap();
        assert_eq!(result.gross_stamp_duty(), Decimal::from(6_250));
        assert_eq!(result.grand_total(), Decimal::from(6_500));
        assert_eq!(result.stamp_duty_rate_percent(), d("0.25"));
    }

    #[test]
    fn test_short_lease() {
        let result = calculate(&FeeCalculationRequest::lease(Decimal::from(500_000), 3)).unwrap();
        assert_eq!(result.lease_multiplier(), 3);
        assert_eq!(result.gross_stamp_duty(), Decimal::from(7_500));
        assert_eq!(result.stamp_duty_rate_percent(), d("0.5"));
    }

    #[test]
    fn test_long_lease_capped_at_ten_years() {
        let result = calculate(&FeeCalculationRequest::lease(Decimal::from(500_000), 20)).unwrap();
        assert_eq!(result.lease_multiplier(), 10);
        assert_eq!(result.gross_stamp_duty(), Decimal::from(50_000));
        assert_eq!(result.stamp_duty_rate_percent(), Decimal::ONE);
    }

    #[test]
    fn test_first_time_buyer_exemption() {
        let rules = standard_exemptions();
        let rule = find_exemption(&rules, "first_time_buyer").unwrap().clone();
        let req = FeeCalculationRequest::transfer(PropertyType::Residential, Decimal::from(300_000))
            .with_exemption(rule);
        let result = calculate(&req).unwrap();

        assert_eq!(result.gross_stamp_duty(), Decimal::from(1_500));
        assert_eq!(result.exemption_discount_amount(), Decimal::from(375));
        assert_eq!(result.net_stamp_duty(), Decimal::from(1_125));
        assert_eq!(result.exemption_id(), Some("first_time_buyer"));
    }

    // ── Boundaries and fallbacks ──

    #[test]
    fn test_non_positive_value_rejected() {
        let mut req = FeeCalculationRequest::mortgage(Decimal::ZERO);
        assert!(matches!(calculate(&req), Err(FeeError::InvalidInput { .. })));

        req.property_value = Some(Decimal::from(-10));
        assert!(matches!(calculate(&req), Err(FeeError::InvalidInput { .. })));

        req.property_value = None;
        assert!(matches!(calculate(&req), Err(FeeError::InvalidInput { .. })));
    }

    #[test]
    fn test_lease_without_duration_charged_as_one_year() {
        let mut req = FeeCalculationRequest::lease(Decimal::from(500_000), 0);
        let zero = calculate(&req).unwrap();
        req.lease_duration_years = None;
        let missing = calculate(&req).unwrap();
        req.lease_duration_years = Some(-4);
        let negative = calculate(&req).unwrap();

        for result in [zero, missing, negative] {
            assert_eq!(result.lease_multiplier(), 1);
            assert_eq!(result.gross_stamp_duty(), Decimal::from(2_500));
        }
    }

    #[test]
    fn test_lease_of_fifteen_years_uses_cap() {
        let result = calculate(&FeeCalculationRequest::lease(Decimal::from(100_000), 15)).unwrap();
        assert_eq!(result.lease_multiplier(), 10);
        assert_eq!(result.gross_stamp_duty(), Decimal::from(10_000));
    }

    #[test]
    fn test_unrecognized_property_pays_residential() {
        let req = FeeCalculationRequest::transfer(PropertyType::Unrecognized, Decimal::from(100_000));
        let result = calculate(&req).unwrap();
        assert_eq!(result.gross_stamp_duty(), Decimal::from(500));
        assert_eq!(result.property_type(), PropertyType::Unrecognized);
    }

    #[test]
    fn test_full_exemption_zeroes_duty() {
        let rule = ExemptionRule::new("government", "Government", Decimal::ONE).unwrap();
        let req = FeeCalculationRequest::transfer(PropertyType::Commercial, Decimal::from(750_000))
            .with_exemption(rule)
            .with_search_fee();
        let result = calculate(&req).unwrap();
        assert_eq!(result.net_stamp_duty(), Decimal::ZERO);
        assert_eq!(result.grand_total(), Decimal::from(400));
    }

    #[test]
    fn test_all_add_ons() {
        let req = FeeCalculationRequest::transfer(PropertyType::Agricultural, Decimal::from(200_000))
            .with_area(d("1.5"))
            .with_registration_fee()
            .with_survey_fee()
            .with_search_fee()
            .expedited();
        let result = calculate(&req).unwrap();

        assert_eq!(result.gross_stamp_duty(), Decimal::from(500));
        assert_eq!(result.registration_fee(), Decimal::from(575));
        assert_eq!(result.survey_fee(), Decimal::from(1_800));
        assert_eq!(result.search_fee(), Decimal::from(150));
        assert_eq!(result.expedited_fee(), Decimal::from(1_000));
        assert_eq!(result.grand_total(), Decimal::from(4_275));
    }

    #[test]
    fn test_fractional_value_rounds_duty_half_up() {
        // 1234.57 * 0.005 = 6.17285
        let req = FeeCalculationRequest::transfer(PropertyType::Residential, d("1234.57"));
        let result = calculate(&req).unwrap();
        assert_eq!(result.gross_stamp_duty(), d("6.17"));
        assert_eq!(result.grand_total(), d("256.17"));
    }

    #[test]
    fn test_overflow_is_not_invalid_input() {
        let mut schedule = FeeSchedule::standard();
        schedule.rates.mortgage = Decimal::from(2);
        let req = FeeCalculationRequest::mortgage(Decimal::MAX);
        assert_eq!(
            calculate_with_schedule(&schedule, &req).unwrap_err(),
            FeeError::ArithmeticOverflow("gross stamp duty".to_string())
        );
    }

    #[test]
    fn test_grand_total_overflow_reported() {
        let mut schedule = FeeSchedule::standard();
        schedule.fees.processing = Decimal::MAX;
        let req = FeeCalculationRequest::mortgage(Decimal::from(100_000));
        assert_eq!(
            calculate_with_schedule(&schedule, &req).unwrap_err(),
            FeeError::ArithmeticOverflow("grand total".to_string())
        );
    }

    #[test]
    fn test_breakdown_is_deterministic() {
        let schedule = FeeSchedule::standard();
        let req = FeeCalculationRequest::lease(Decimal::from(820_000), 7).with_search_fee();
        assert_eq!(
            compute_breakdown(&schedule, &req).unwrap(),
            compute_breakdown(&schedule, &req).unwrap()
        );
    }

    #[test]
    fn test_custom_schedule_version_recorded() {
        let mut schedule = FeeSchedule::standard();
        schedule.version = "2025.2".to_string();
        schedule.fees.processing = Decimal::from(300);

        let req = FeeCalculationRequest::mortgage(Decimal::from(100_000));
        let result = calculate_with_schedule(&schedule, &req).unwrap();
        assert_eq!(result.schedule_version(), "2025.2");
        assert_eq!(result.processing_fee(), Decimal::from(300));
    }

    #[test]
    fn test_calculate_at_stamps_time() {
        let at = DateTime::parse_from_rfc3339("2024-03-01T09:30:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let req = FeeCalculationRequest::mortgage(Decimal::from(100_000));
        let result = calculate_at(&FeeSchedule::standard(), &req, at).unwrap();
        assert_eq!(result.calculated_at(), at);
    }
}
