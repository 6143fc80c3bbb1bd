/// Display formatting for optional measurements
///
/// Zero and absent are both "unknown" and render as the placeholder
/// dash. A genuinely zero-height tree is therefore indistinguishable
/// from one with no recorded height; that conflation is intentional.

/// Placeholder shown for any unknown value
pub const PLACEHOLDER: &str = "—";

/// Format a height in centimeters (e.g., "40 cm")
pub fn cm(value: Option<f64>) -> String {
    match known(value) {
        Some(v) => format!("{} cm", v),
        None => PLACEHOLDER.to_string(),
    }
}

/// Format an age in years, singular exactly at one (e.g., "1 year", "5 years")
pub fn years(value: Option<f64>) -> String {
    match known(value) {
        Some(v) if v == 1.0 => "1 year".to_string(),
        Some(v) => format!("{} years", v),
        None => PLACEHOLDER.to_string(),
    }
}

fn known(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0 && !v.is_nan())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cm_zero_and_absent_are_both_unknown() {
        assert_eq!(cm(None), "—");
        assert_eq!(cm(Some(0.0)), "—");
    }

    #[test]
    fn test_cm_appends_unit() {
        assert_eq!(cm(Some(40.0)), "40 cm");
        assert_eq!(cm(Some(12.5)), "12.5 cm");
    }

    #[test]
    fn test_years_pluralization() {
        assert_eq!(years(Some(1.0)), "1 year");
        assert_eq!(years(Some(2.0)), "2 years");
        assert_eq!(years(Some(35.0)), "35 years");
    }

    #[test]
    fn test_years_zero_and_absent_are_both_unknown() {
        assert_eq!(years(None), "—");
        assert_eq!(years(Some(0.0)), "—");
    }
}
