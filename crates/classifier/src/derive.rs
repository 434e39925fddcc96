//! Derived attributes computed from raw feature values.

/// Share of a sub-area within a total area.
///
/// Returns `Some(numerator / denominator)` only when both inputs are
/// present, finite, and non-zero and the quotient is finite; every other
/// case is `None`, which downstream classification renders as no-data.
///
/// Zero is deliberately folded into the missing case: a zero harvested area
/// and an absent one style identically, so the distinction never reaches the
/// renderer.
pub fn area_share(numerator: Option<f64>, denominator: Option<f64>) -> Option<f64> {
    let n = numerator.filter(|v| v.is_finite() && *v != 0.0)?;
    let d = denominator.filter(|v| v.is_finite() && *v != 0.0)?;

    let ratio = n / d;
    if ratio.is_finite() {
        Some(ratio)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_ratio() {
        assert_eq!(area_share(Some(50.0), Some(100.0)), Some(0.5));
    }

    #[test]
    fn test_zero_numerator_is_missing() {
        assert_eq!(area_share(Some(0.0), Some(100.0)), None);
    }

    #[test]
    fn test_zero_denominator_is_missing() {
        assert_eq!(area_share(Some(50.0), Some(0.0)), None);
    }

    #[test]
    fn test_missing_inputs() {
        assert_eq!(area_share(None, Some(100.0)), None);
        assert_eq!(area_share(Some(50.0), None), None);
        assert_eq!(area_share(None, None), None);
    }

    #[test]
    fn test_non_finite_inputs() {
        assert_eq!(area_share(Some(f64::NAN), Some(100.0)), None);
        assert_eq!(area_share(Some(50.0), Some(f64::INFINITY)), None);
    }

    #[test]
    fn test_never_returns_non_finite() {
        // Extreme magnitudes that would overflow to infinity.
        assert_eq!(area_share(Some(f64::MAX), Some(f64::MIN_POSITIVE)), None);
    }
}
