//! Request validation
//!
//! Runs before any monetary arithmetic. A request that fails here never
//! produces a result.

use lands_types::errors::FeeError;
use lands_types::fee::FeeCalculationRequest;
use rust_decimal::Decimal;

/// Validate a request, returning the property value on success.
///
/// Checks performed (in order):
/// 1. Property value present and strictly positive
/// 2. Property area non-negative
/// 3. Supplied exemption has a fraction within [0, 1]
pub fn validate_request(request: &FeeCalculationRequest) -> Result<Decimal, FeeError> {
    let value = match request.property_value {
        None => {
            return Err(FeeError::invalid_input("property_value", "is required"));
        }
        Some(v) if v <= Decimal::ZERO => {
            return Err(FeeError::invalid_input(
                "property_value",
                format!("must be greater than zero, got {}", v),
            ));
        }
        Some(v) => v,
    };

    if request.property_area < Decimal::ZERO {
        return Err(FeeError::invalid_input(
            "property_area",
            format!("must not be negative, got {}", request.property_area),
        ));
    }

    if let Some(exemption) = &request.exemption {
        exemption.validate()?;
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lands_types::exemption::ExemptionRule;
    use lands_types::transaction::PropertyType;

    fn request(value: i64) -> FeeCalculationRequest {
        FeeCalculationRequest::transfer(PropertyType::Residential, Decimal::from(value))
    }

    #[test]
    fn test_valid_request() {
        assert_eq!(validate_request(&request(100_000)).unwrap(), Decimal::from(100_000));
    }

    #[test]
    fn test_missing_value_rejected() {
        let mut req = request(1);
        req.property_value = None;
        let err = validate_request(&req).unwrap_err();
        assert!(matches!(err, FeeError::InvalidInput { ref field, .. } if field == "property_value"));
    }

    #[test]
    fn test_zero_and_negative_value_rejected() {
        assert!(matches!(
            validate_request(&request(0)),
            Err(FeeError::InvalidInput { .. })
        ));
        assert!(matches!(
            validate_request(&request(-5)),
            Err(FeeError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_negative_area_rejected() {
        let req = request(100_000).with_area(Decimal::from(-1));
        let err = validate_request(&req).unwrap_err();
        assert!(matches!(err, FeeError::InvalidInput { ref field, .. } if field == "property_area"));
    }

    #[test]
    fn test_out_of_range_exemption_rejected() {
        let rule = ExemptionRule {
            id: "overdrawn".to_string(),
            label: "Overdrawn".to_string(),
            discount_fraction: Decimal::from(2),
        };
        let req = request(100_000).with_exemption(rule);
        assert!(matches!(
            validate_request(&req),
            Err(FeeError::InvalidExemption { .. })
        ));
    }
}
