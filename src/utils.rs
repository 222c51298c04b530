/// Rounds to two decimals, half away from zero.
///
/// Non-finite input comes back unchanged.
pub fn round2(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let scaled = (value * 100.0).round() / 100.0;
    // Scaling very large values can overflow to infinity
    if scaled.is_finite() {
        scaled
    } else {
        value
    }
}

pub(crate) fn sum(values: impl IntoIterator<Item = f64>) -> f64 {
    values.into_iter().sum()
}

/// Arithmetic mean, `None` for an empty input.
pub(crate) fn mean(values: impl IntoIterator<Item = f64>) -> Option<f64> {
    let (total, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(total, count), v| (total + v, count + 1));
    (count > 0).then(|| total / count as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2_half_away_from_zero() {
        assert_eq!(round2(25.0), 25.0);
        assert_eq!(round2(1.005 + 1e-9), 1.01);
        assert_eq!(round2(0.125), 0.13);
        assert_eq!(round2(-0.125), -0.13);
        assert_eq!(round2(3.14159), 3.14);
        assert_eq!(round2(-7.456), -7.46);
    }

    #[test]
    fn test_round2_non_finite_passthrough() {
        assert!(round2(f64::NAN).is_nan());
        assert_eq!(round2(f64::INFINITY), f64::INFINITY);
        assert_eq!(round2(f64::NEG_INFINITY), f64::NEG_INFINITY);
        assert_eq!(round2(f64::MAX), f64::MAX);
    }

    #[test]
    fn test_mean() {
        assert_eq!(mean([20.0, 30.0]), Some(25.0));
        assert_eq!(mean(Vec::<f64>::new()), None);
        assert!(mean([1.0, f64::NAN]).unwrap().is_nan());
        assert_eq!(sum([0.5, 0.25, 0.25]), 1.0);
    }
}
