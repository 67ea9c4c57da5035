/// Computes the arithmetic mean of a slice of values. Returns 0.0 for empty input.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Computes the median of a slice of values. Returns 0.0 for empty input.
///
/// For an even count the two middle values are averaged.
pub fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        sorted[mid]
    } else {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[]), 0.0);
        assert_eq!(mean(&[10.0]), 10.0);
        assert_eq!(mean(&[60.0, 70.0, 80.0, 90.0]), 75.0);
    }

    #[test]
    fn test_median_odd_and_even() {
        assert_eq!(median(&[80.0, 60.0, 70.0]), 70.0);
        assert_eq!(median(&[90.0, 60.0, 80.0, 70.0]), 75.0);
    }

    #[test]
    fn test_median_empty() {
        assert_eq!(median(&[]), 0.0);
    }

    #[test]
    fn test_median_does_not_reorder_input() {
        let values = [3.0, 1.0, 2.0];
        assert_eq!(median(&values), 2.0);
        assert_eq!(values, [3.0, 1.0, 2.0]);
    }
}
