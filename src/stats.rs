//! Sample statistics over per-trial threshold estimates.

/// z-score of the two-sided 95% confidence level.
pub const CONFIDENCE_95: f64 = 1.96;

/// Sample mean. `NaN` for an empty slice.
pub fn mean(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return f64::NAN;
    }
    samples.iter().sum::<f64>() / samples.len() as f64
}

/// Sample standard deviation (n - 1 denominator).
///
/// `NaN` for fewer than two samples, where the estimator is undefined.
pub fn stddev(samples: &[f64]) -> f64 {
    if samples.len() < 2 {
        return f64::NAN;
    }
    let m = mean(samples);
    let ss: f64 = samples.iter().map(|x| (x - m) * (x - m)).sum();
    (ss / (samples.len() - 1) as f64).sqrt()
}

/// `mean ± 1.96·stddev/√T` for the given samples.
pub fn confidence_interval(samples: &[f64]) -> (f64, f64) {
    let m = mean(samples);
    let half = CONFIDENCE_95 * stddev(samples) / (samples.len() as f64).sqrt();
    (m - half, m + half)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean() {
        assert!((mean(&[0.5, 0.6, 0.7]) - 0.6).abs() < 1e-12);
        assert!(mean(&[]).is_nan());
    }

    #[test]
    fn test_stddev_sample_estimator() {
        // Values 2,4,4,4,5,5,7,9: sum of squares about mean 5 is 32.
        let xs = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let expected = (32.0f64 / 7.0).sqrt();
        assert!((stddev(&xs) - expected).abs() < 1e-12);
        assert!(stddev(&[0.5]).is_nan());
    }

    #[test]
    fn test_confidence_interval_brackets_mean() {
        let xs = [0.55, 0.60, 0.58, 0.62, 0.59];
        let (lo, hi) = confidence_interval(&xs);
        let m = mean(&xs);
        assert!(lo <= m && m <= hi);
        let half = 1.96 * stddev(&xs) / 5f64.sqrt();
        assert!((hi - lo - 2.0 * half).abs() < 1e-12);
    }

    #[test]
    fn test_constant_samples_zero_width() {
        let xs = [0.5; 8];
        let (lo, hi) = confidence_interval(&xs);
        assert_eq!(stddev(&xs), 0.0);
        assert_eq!((lo, hi), (0.5, 0.5));

        // 0.6 is inexact in binary, so the spread is only near zero.
        let ys = [0.6; 10];
        assert!(stddev(&ys) < 1e-12);
    }
}
