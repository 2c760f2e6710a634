/// Rounds the exact binary value to `decimals` places.
///
/// Going through the decimal formatter avoids the error a scaled
/// `round()` picks up, so `4.5 + 0.05` (stored just below 4.55) stays 4.5.
pub fn round_to(value: f64, decimals: usize) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    format!("{:.*}", decimals, value)
        .parse::<f64>()
        .unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(4.6789, 1), 4.7);
        assert_eq!(round_to(4.6789, 2), 4.68);
        assert_eq!(round_to(3.0, 2), 3.0);
        assert_eq!(round_to(f64::NAN, 2), 0.0);
    }

    #[test]
    fn test_round_to_uses_stored_binary_value() {
        // Both are stored slightly below the printed tie.
        assert_eq!(round_to(4.5 + 0.05, 1), 4.5);
        assert_eq!(round_to(2.675, 2), 2.67);
        assert_eq!(round_to(-4.55, 1), -4.5);
    }
}
