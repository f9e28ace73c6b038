//! Additional (non-duty) charges

use lands_types::errors::FeeError;
use lands_types::fee::{AdditionalFees, AreaScaledFee, FeeCalculationRequest};
use lands_types::numeric::round_money;
use rust_decimal::Decimal;

/// Charges selected by a request, each rounded to the minor unit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Charges {
    pub registration: Decimal,
    pub survey: Decimal,
    pub search: Decimal,
    pub processing: Decimal,
    pub expedited: Decimal,
}

fn gated(include: bool, amount: Decimal) -> Decimal {
    round_money(if include { amount } else { Decimal::ZERO })
}

fn area_scaled(
    include: bool,
    fee: &AreaScaledFee,
    hectares: Decimal,
    name: &str,
) -> Result<Decimal, FeeError> {
    if !include {
        return Ok(round_money(Decimal::ZERO));
    }
    fee.amount_for(hectares)
        .map(round_money)
        .ok_or_else(|| FeeError::ArithmeticOverflow(name.to_string()))
}

/// Compute additional charges. Processing is always charged.
pub fn additional_charges(
    fees: &AdditionalFees,
    request: &FeeCalculationRequest,
) -> Result<Charges, FeeError> {
    let area = request.property_area;
    Ok(Charges {
        registration: area_scaled(
            request.include_registration_fee,
            &fees.registration,
            area,
            "registration fee",
        )?,
        survey: area_scaled(request.include_survey_fee, &fees.survey, area, "survey fee")?,
        search: gated(request.include_search_fee, fees.search),
        processing: round_money(fees.processing),
        expedited: gated(request.expedited, fees.expedited),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use lands_types::fee::FeeSchedule;
    use lands_types::transaction::PropertyType;

    fn base_request() -> FeeCalculationRequest {
        FeeCalculationRequest::transfer(PropertyType::Residential, Decimal::from(100_000))
    }

    #[test]
    fn test_only_processing_by_default() {
        let fees = FeeSchedule::standard().fees;
        let charges =
            additional_charges(&fees, &base_request().with_area(Decimal::from(3))).unwrap();
        assert_eq!(charges.registration, Decimal::ZERO);
        assert_eq!(charges.survey, Decimal::ZERO);
        assert_eq!(charges.search, Decimal::ZERO);
        assert_eq!(charges.processing, Decimal::from(250));
        assert_eq!(charges.expedited, Decimal::ZERO);
    }

    #[test]
    fn test_all_charges_area_scaled() {
        let fees = FeeSchedule::standard().fees;
        let req = base_request()
            .with_area(Decimal::from(2))
            .with_registration_fee()
            .with_survey_fee()
            .with_search_fee()
            .expedited();
        let charges = additional_charges(&fees, &req).unwrap();
        assert_eq!(charges.registration, Decimal::from(600));
        assert_eq!(charges.survey, Decimal::from(1900));
        assert_eq!(charges.search, Decimal::from(150));
        assert_eq!(charges.expedited, Decimal::from(1000));
    }

    #[test]
    fn test_unselected_fee_ignores_huge_area() {
        let fees = FeeSchedule::standard().fees;
        let req = base_request().with_area(Decimal::MAX);
        assert!(additional_charges(&fees, &req).is_ok());

        let err = additional_charges(&fees, &req.with_survey_fee()).unwrap_err();
        assert_eq!(err, FeeError::ArithmeticOverflow("survey fee".to_string()));
    }

    #[test]
    fn test_fractional_area_rounds_to_minor_unit() {
        let fees = FeeSchedule::standard().fees;
        let req = base_request()
            .with_area(Decimal::from_str_exact("0.12345").unwrap())
            .with_registration_fee();
        let charges = additional_charges(&fees, &req).unwrap();
        // 500 + 0.12345 * 50 = 506.1725
        assert_eq!(charges.registration, Decimal::from_str_exact("506.17").unwrap());
    }
}
