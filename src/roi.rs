//! Rental-yield calculator.

/// Inputs of the ROI widget. Both fields default to zero and are replaced
/// wholesale on every edit.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CalculatorState {
    /// Purchase price in AED.
    pub price: f64,
    /// Monthly rent in AED.
    pub rent: f64,
}

impl CalculatorState {
    pub fn set_price(&self, price: f64) -> Self {
        Self { price, ..*self }
    }

    pub fn set_rent(&self, rent: f64) -> Self {
        Self { rent, ..*self }
    }
}

/// Annualized rental yield as a percentage.
///
/// A price of zero yields a defined 0 rather than dividing by zero.
/// Negative inputs pass through unclamped and produce a negative
/// percentage; the widget applies no validation.
pub fn compute_roi(state: &CalculatorState) -> f64 {
    if state.price > 0.0 {
        (state.rent * 12.0 / state.price) * 100.0
    } else {
        0.0
    }
}

/// Map raw text input to a numeric amount.
///
/// Empty or unparsable text maps to zero before it reaches the formula.
pub fn parse_amount(raw: &str) -> f64 {
    raw.trim().parse().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roi(price: f64, rent: f64) -> f64 {
        compute_roi(&CalculatorState { price, rent })
    }

    #[test]
    fn test_zero_price_yields_zero() {
        assert_eq!(roi(0.0, 10_000.0), 0.0);
        assert_eq!(roi(0.0, 0.0), 0.0);
    }

    #[test]
    fn test_known_yields() {
        assert!((roi(1_000_000.0, 10_000.0) - 12.0).abs() < 1e-9);
        assert!((roi(2_000_000.0, 15_000.0) - 9.0).abs() < 1e-9);
    }

    #[test]
    fn test_display_rounding_to_two_decimals() {
        assert_eq!(format!("{:.2}", roi(1_000_000.0, 10_000.0)), "12.00");
        assert_eq!(format!("{:.2}", roi(2_000_000.0, 15_000.0)), "9.00");
    }

    #[test]
    fn test_computation_is_idempotent() {
        let state = CalculatorState::default()
            .set_price(1_500_000.0)
            .set_rent(9_500.0);
        assert_eq!(compute_roi(&state), compute_roi(&state));
    }

    #[test]
    fn test_transitions_replace_only_their_field() {
        let state = CalculatorState::default();
        assert_eq!(state.price, 0.0);
        assert_eq!(state.rent, 0.0);

        let priced = state.set_price(2_000_000.0);
        assert_eq!(priced.price, 2_000_000.0);
        assert_eq!(priced.rent, 0.0);

        let both = priced.set_rent(15_000.0);
        assert_eq!(both.price, 2_000_000.0);
        assert_eq!(both.rent, 15_000.0);
    }

    #[test]
    fn test_negative_inputs_pass_through() {
        assert!(roi(1_000_000.0, -5_000.0) < 0.0);
        // Negative price hits the zero guard, not the formula.
        assert_eq!(roi(-1_000_000.0, 5_000.0), 0.0);
    }

    #[test]
    fn test_parse_amount_defaults_invalid_text_to_zero() {
        assert_eq!(parse_amount(""), 0.0);
        assert_eq!(parse_amount("   "), 0.0);
        assert_eq!(parse_amount("villa"), 0.0);
        assert_eq!(parse_amount("2500"), 2500.0);
        assert_eq!(parse_amount(" 1200.5 "), 1200.5);
        assert_eq!(parse_amount("-300"), -300.0);
    }
}
