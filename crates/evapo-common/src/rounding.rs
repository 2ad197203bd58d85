//! Decimal rounding for values that leave the models.
//!
//! Rounding goes through correctly-rounded fixed-precision formatting, so the result
//! is the nearest `f64` to the decimal a human would read off the exact binary value
//! (ties to even). Models compute in full precision and round only at the boundary.

/// Rounds `value` to `places` decimal digits.
pub fn round_to(value: f64, places: usize) -> f64 {
    format!("{:.*}", places, value).parse().unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to_three_places() {
        assert_eq!(round_to(3.16762, 3), 3.168);
        assert_eq!(round_to(8.163265306122449, 3), 8.163);
        assert_eq!(round_to(-0.12345, 3), -0.123);
    }

    #[test]
    fn test_round_to_two_places() {
        assert_eq!(round_to(123.456, 2), 123.46);
        assert_eq!(round_to(0.0, 2), 0.0);
        assert_eq!(round_to(1000.0, 2), 1000.0);
    }

    #[test]
    fn test_round_uses_exact_binary_value() {
        // 2.675 is stored as 2.67499999999999982236431605997495353221893310546875
        assert_eq!(round_to(2.675, 2), 2.67);
    }

    #[test]
    fn test_round_passes_through_non_finite() {
        assert!(round_to(f64::NAN, 3).is_nan());
        assert_eq!(round_to(f64::INFINITY, 3), f64::INFINITY);
    }
}
