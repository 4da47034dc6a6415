//! Shipping cost calculation
//!
//! Pricing model of the demo calculator: tiered base cost by weight,
//! service-tier multiplier, flat cross-route surcharge, optional flat
//! insurance. All amounts are whole currency units, not cents.

use correo_types::{ServiceTier, ShippingForm, ShippingQuote, ShippingRequest, ValidationError};

/// Flat insurance add-on, applied after all multipliers
pub const INSURANCE_COST: f64 = 500.0;

/// Multiplier applied when origin and destination differ
pub const CROSS_ROUTE_MULTIPLIER: f64 = 1.3;

/// Weight tiers as (inclusive upper bound in kg, base cost), ascending.
/// Weights above the last bound cost [`BASE_COST_OVER_10KG`].
const WEIGHT_TIERS: [(f64, f64); 4] = [(1.0, 800.0), (3.0, 1200.0), (5.0, 1800.0), (10.0, 2500.0)];

const BASE_COST_OVER_10KG: f64 = 3500.0;

/// Base cost for a weight; the first matching tier wins
pub fn base_cost_for_weight(weight_kg: f64) -> f64 {
    for (limit, cost) in WEIGHT_TIERS {
        if weight_kg <= limit {
            return cost;
        }
    }
    BASE_COST_OVER_10KG
}

/// Validate raw form fields into a [`ShippingRequest`].
///
/// Collects one error per offending field instead of failing fast, so
/// the form can mark every field at once.
pub fn validate_form(form: &ShippingForm) -> Result<ShippingRequest, Vec<ValidationError>> {
    let mut errors = Vec::new();

    let origin = form.origin.trim();
    if origin.is_empty() {
        errors.push(ValidationError::MissingRequiredField { field: "origen" });
    }

    let destination = form.destination.trim();
    if destination.is_empty() {
        errors.push(ValidationError::MissingRequiredField { field: "destino" });
    }

    let weight_kg = match parse_weight(&form.weight) {
        Ok(value) => Some(value),
        Err(e) => {
            errors.push(e);
            None
        }
    };

    let tier_value = form.service_tier.trim();
    if tier_value.is_empty() {
        errors.push(ValidationError::MissingRequiredField {
            field: "tipo-envio",
        });
    }

    match weight_kg {
        Some(weight_kg) if errors.is_empty() => Ok(ShippingRequest {
            origin: origin.to_string(),
            destination: destination.to_string(),
            weight_kg,
            tier: ServiceTier::from_form_value(tier_value),
            insured: form.insured,
        }),
        _ => Err(errors),
    }
}

/// The weight must be a positive finite number. Number inputs post an
/// empty string for non-numeric text, so an unparseable value counts as
/// a missing field.
fn parse_weight(raw: &str) -> Result<f64, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingRequiredField { field: "peso" });
    }

    let value: f64 = trimmed
        .parse()
        .map_err(|_| ValidationError::MissingRequiredField { field: "peso" })?;

    // "inf" and "NaN" parse as f64 but never come out of a number input
    if !value.is_finite() {
        return Err(ValidationError::MissingRequiredField { field: "peso" });
    }

    if value <= 0.0 {
        return Err(ValidationError::InvalidWeight);
    }

    Ok(value)
}

/// Compute the quote for a validated request.
///
/// Order matters: weight-tier base, then the tier multiplier, then the
/// cross-route multiplier; insurance is added last and never multiplied.
pub fn calculate(request: &ShippingRequest) -> ShippingQuote {
    let mut base_cost = base_cost_for_weight(request.weight_kg);

    base_cost *= request.tier.multiplier();

    if request.is_cross_route() {
        base_cost *= CROSS_ROUTE_MULTIPLIER;
    }

    let insurance_cost = if request.insured { INSURANCE_COST } else { 0.0 };

    ShippingQuote {
        base_cost,
        insurance_cost,
        total_cost: base_cost + insurance_cost,
        request: request.clone(),
    }
}

/// Format an amount with es-AR grouping: thousands separated by ".",
/// decimals (when present) after ",", at most two digits.
pub fn format_currency(amount: f64) -> String {
    let cents = (amount * 100.0).round() as i64;
    let int_part = cents / 100;
    let frac = (cents % 100).abs();

    let digits = int_part.abs().to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    if int_part < 0 {
        grouped.insert(0, '-');
    }

    if frac == 0 {
        grouped
    } else if frac % 10 == 0 {
        format!("{},{}", grouped, frac / 10)
    } else {
        format!("{},{:02}", grouped, frac)
    }
}

/// Screen-reader announcement emitted once a quote is computed
pub fn quote_announcement(quote: &ShippingQuote) -> String {
    format!(
        "Cálculo completado. Costo total: ${}",
        format_currency(quote.total_cost)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(
        weight_kg: f64,
        tier: ServiceTier,
        origin: &str,
        destination: &str,
        insured: bool,
    ) -> ShippingRequest {
        ShippingRequest {
            origin: origin.to_string(),
            destination: destination.to_string(),
            weight_kg,
            tier,
            insured,
        }
    }

    fn full_form() -> ShippingForm {
        ShippingForm {
            origin: "Buenos Aires".to_string(),
            destination: "Córdoba".to_string(),
            weight: "4".to_string(),
            service_tier: "express".to_string(),
            insured: true,
        }
    }

    // ==========================================
    // Base cost tiers
    // ==========================================

    #[test]
    fn test_base_cost_tier_bounds_are_inclusive() {
        assert_eq!(base_cost_for_weight(0.5), 800.0);
        assert_eq!(base_cost_for_weight(1.0), 800.0);
        assert_eq!(base_cost_for_weight(1.1), 1200.0);
        assert_eq!(base_cost_for_weight(3.0), 1200.0);
        assert_eq!(base_cost_for_weight(5.0), 1800.0);
        assert_eq!(base_cost_for_weight(10.0), 2500.0);
        assert_eq!(base_cost_for_weight(10.1), 3500.0);
        assert_eq!(base_cost_for_weight(25.0), 3500.0);
    }

    // ==========================================
    // Quote calculation
    // ==========================================

    #[test]
    fn test_minimal_quote() {
        // 1kg standard within the same city, no insurance
        let quote = calculate(&request(1.0, ServiceTier::Standard, "A", "A", false));
        assert!((quote.base_cost - 800.0).abs() < 0.01);
        assert!((quote.insurance_cost - 0.0).abs() < 0.01);
        assert!((quote.total_cost - 800.0).abs() < 0.01);
    }

    #[test]
    fn test_express_cross_route_with_insurance() {
        // 4kg express A->B insured: 1800 x 1.5 x 1.3 = 3510, +500
        let quote = calculate(&request(4.0, ServiceTier::Express, "A", "B", true));
        assert!((quote.base_cost - 3510.0).abs() < 0.01);
        assert!((quote.insurance_cost - 500.0).abs() < 0.01);
        assert!((quote.total_cost - 4010.0).abs() < 0.01);
    }

    #[test]
    fn test_priority_same_city() {
        // 11kg priority X->X: 3500 x 2.0 = 7000, no route surcharge
        let quote = calculate(&request(11.0, ServiceTier::Priority, "X", "X", false));
        assert!((quote.base_cost - 7000.0).abs() < 0.01);
        assert!((quote.total_cost - 7000.0).abs() < 0.01);
    }

    #[test]
    fn test_insurance_is_never_multiplied() {
        // 1kg express A->B: base 800 x 1.5 x 1.3 = 1560; insurance stays 500
        let quote = calculate(&request(1.0, ServiceTier::Express, "A", "B", true));
        assert!((quote.base_cost - 1560.0).abs() < 0.01);
        assert!((quote.insurance_cost - 500.0).abs() < 0.01);
        assert!((quote.total_cost - 2060.0).abs() < 0.01);
    }

    #[test]
    fn test_route_comparison_is_case_sensitive() {
        let quote = calculate(&request(1.0, ServiceTier::Standard, "CABA", "caba", false));
        assert!((quote.base_cost - 1040.0).abs() < 0.01);
    }

    #[test]
    fn test_calculate_is_idempotent() {
        let req = request(4.0, ServiceTier::Express, "A", "B", true);
        assert_eq!(calculate(&req), calculate(&req));
    }

    #[test]
    fn test_quote_echoes_request() {
        let req = request(2.0, ServiceTier::Priority, "Rosario", "Salta", true);
        let quote = calculate(&req);
        assert_eq!(quote.request, req);
    }

    // ==========================================
    // Form validation
    // ==========================================

    #[test]
    fn test_validate_full_form() {
        let request = validate_form(&full_form()).unwrap();
        assert_eq!(request.origin, "Buenos Aires");
        assert_eq!(request.destination, "Córdoba");
        assert!((request.weight_kg - 4.0).abs() < f64::EPSILON);
        assert_eq!(request.tier, ServiceTier::Express);
        assert!(request.insured);
    }

    #[test]
    fn test_validate_trims_fields() {
        let mut form = full_form();
        form.origin = "  Buenos Aires  ".to_string();
        form.weight = " 4 ".to_string();
        let request = validate_form(&form).unwrap();
        assert_eq!(request.origin, "Buenos Aires");
        assert!((request.weight_kg - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_validate_collects_all_missing_fields() {
        let form = ShippingForm::default();
        let errors = validate_form(&form).unwrap_err();

        assert_eq!(errors.len(), 4);
        let fields: Vec<_> = errors.iter().filter_map(|e| e.field()).collect();
        assert_eq!(fields, vec!["origen", "destino", "peso", "tipo-envio"]);
        assert!(errors
            .iter()
            .all(|e| e.to_string() == "Este campo es obligatorio"));
    }

    #[test]
    fn test_validate_blank_is_missing() {
        let mut form = full_form();
        form.destination = "   ".to_string();
        let errors = validate_form(&form).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::MissingRequiredField { field: "destino" }]
        );
    }

    #[test]
    fn test_validate_non_numeric_weight_counts_as_missing() {
        let mut form = full_form();
        form.weight = "abc".to_string();
        let errors = validate_form(&form).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::MissingRequiredField { field: "peso" }]
        );
    }

    #[test]
    fn test_validate_rejects_non_positive_weight() {
        let mut form = full_form();
        form.weight = "0".to_string();
        assert_eq!(
            validate_form(&form).unwrap_err(),
            vec![ValidationError::InvalidWeight]
        );

        form.weight = "-2.5".to_string();
        assert_eq!(
            validate_form(&form).unwrap_err(),
            vec![ValidationError::InvalidWeight]
        );
    }

    #[test]
    fn test_validate_non_finite_weight_counts_as_missing() {
        // f64 parsing accepts these spellings; a number input posts ""
        let mut form = full_form();
        form.weight = "NaN".to_string();
        assert_eq!(
            validate_form(&form).unwrap_err(),
            vec![ValidationError::MissingRequiredField { field: "peso" }]
        );

        form.weight = "inf".to_string();
        assert_eq!(
            validate_form(&form).unwrap_err(),
            vec![ValidationError::MissingRequiredField { field: "peso" }]
        );

        form.weight = "-inf".to_string();
        assert_eq!(
            validate_form(&form).unwrap_err(),
            vec![ValidationError::MissingRequiredField { field: "peso" }]
        );
    }

    #[test]
    fn test_route_whitespace_is_not_a_different_route() {
        // Fields are trimmed before the route comparison, so padding
        // alone does not trigger the cross-route surcharge
        let mut form = full_form();
        form.origin = "Buenos Aires".to_string();
        form.destination = "  Buenos Aires ".to_string();
        let request = validate_form(&form).unwrap();
        assert!(!request.is_cross_route());

        // 4kg express same city: 1800 x 1.5, no route factor
        let quote = calculate(&request);
        assert!((quote.base_cost - 2700.0).abs() < 0.01);
    }

    #[test]
    fn test_validate_unknown_tier_is_accepted_as_standard() {
        let mut form = full_form();
        form.service_tier = "premium".to_string();
        let request = validate_form(&form).unwrap();
        assert_eq!(request.tier, ServiceTier::Standard);
    }

    #[test]
    fn test_validated_quote_end_to_end() {
        // The worked example of the calculator: 4kg express cross route
        // insured is 1800 x 1.5 x 1.3 + 500 = 4010
        let request = validate_form(&full_form()).unwrap();
        let quote = calculate(&request);
        assert!((quote.total_cost - 4010.0).abs() < 0.01);
    }

    // ==========================================
    // Currency formatting
    // ==========================================

    #[test]
    fn test_format_currency_grouping() {
        assert_eq!(format_currency(800.0), "800");
        assert_eq!(format_currency(4010.0), "4.010");
        assert_eq!(format_currency(7000.0), "7.000");
        assert_eq!(format_currency(1234567.0), "1.234.567");
    }

    #[test]
    fn test_format_currency_decimals() {
        assert_eq!(format_currency(1234567.5), "1.234.567,5");
        assert_eq!(format_currency(0.25), "0,25");
        assert_eq!(format_currency(1500.75), "1.500,75");
    }

    #[test]
    fn test_announcement_text() {
        let quote = calculate(&request(4.0, ServiceTier::Express, "A", "B", true));
        assert_eq!(
            quote_announcement(&quote),
            "Cálculo completado. Costo total: $4.010"
        );
    }

    #[test]
    fn test_quote_json_shape() {
        let quote = calculate(&request(1.0, ServiceTier::Standard, "A", "A", false));
        let value = serde_json::to_value(&quote).unwrap();
        assert_eq!(value["base_cost"], 800.0);
        assert_eq!(value["total_cost"], 800.0);
        assert_eq!(value["request"]["tier"], "estandar");
    }
}
