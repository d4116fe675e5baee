//! Correlation statistics
//!
//! Spearman rank correlation with a two-sided p-value from the
//! t-distribution approximation, and Pearson correlation for the matrix
//! heatmaps. Both filter non-finite values pairwise before computing, which
//! is the only data cleaning the tool performs.

use statrs::distribution::{ContinuousCDF, StudentsT};

use crate::models::report::CorrelationMatrix;

/// Result of a Spearman rank correlation
#[derive(Debug, Clone, Copy)]
pub struct SpearmanResult {
    /// Spearman's rho, NaN when undefined
    pub rho: f64,
    /// Two-sided p-value, NaN when rho is undefined
    pub p_value: f64,
    /// Number of finite pairs the coefficient was computed from
    pub samples: usize,
}

/// Drop every position where either value is non-finite
pub fn filter_finite_pairs(x: &[f64], y: &[f64]) -> (Vec<f64>, Vec<f64>) {
    x.iter()
        .zip(y.iter())
        .filter(|(a, b)| a.is_finite() && b.is_finite())
        .map(|(a, b)| (*a, *b))
        .unzip()
}

/// Spearman rank correlation between two equal-length vectors
///
/// Non-finite values are filtered pairwise first. Ties receive average
/// ranks. The p-value uses the t-distribution approximation
/// `t = rho * sqrt((n - 2) / (1 - rho^2))` with `n - 2` degrees of freedom,
/// matching the reference statistics routine. Fewer than three finite pairs
/// or a constant input produce NaN for both rho and p.
pub fn spearman(x: &[f64], y: &[f64]) -> SpearmanResult {
    let (xf, yf) = filter_finite_pairs(x, y);
    let n = xf.len();

    if n < 3 {
        return SpearmanResult {
            rho: f64::NAN,
            p_value: f64::NAN,
            samples: n,
        };
    }

    let rx = average_ranks(&xf);
    let ry = average_ranks(&yf);
    let rho = pearson_filtered(&rx, &ry);

    SpearmanResult {
        rho,
        p_value: two_sided_p_value(rho, n),
        samples: n,
    }
}

/// Pearson correlation between two equal-length vectors
///
/// Non-finite values are filtered pairwise first. Returns NaN for fewer
/// than two finite pairs or a constant input.
pub fn pearson(x: &[f64], y: &[f64]) -> f64 {
    let (xf, yf) = filter_finite_pairs(x, y);
    if xf.len() < 2 {
        return f64::NAN;
    }
    pearson_filtered(&xf, &yf)
}

/// Pearson correlation matrix over a set of labelled columns
///
/// Each cell pair is filtered pairwise, so a NaN in one column only
/// excludes rows from the cells that column participates in.
pub fn correlation_matrix(columns: &[(String, &[f64])]) -> CorrelationMatrix {
    let labels: Vec<String> = columns.iter().map(|(label, _)| label.clone()).collect();
    let values = columns
        .iter()
        .map(|(_, x)| {
            columns
                .iter()
                .map(|(_, y)| pearson(x, y))
                .collect::<Vec<f64>>()
        })
        .collect();

    CorrelationMatrix { labels, values }
}

/// Pearson correlation of two vectors already known to be finite
fn pearson_filtered(x: &[f64], y: &[f64]) -> f64 {
    let n = x.len() as f64;
    let mean_x = x.iter().sum::<f64>() / n;
    let mean_y = y.iter().sum::<f64>() / n;

    let mut covariance = 0.0;
    let mut variance_x = 0.0;
    let mut variance_y = 0.0;
    for (a, b) in x.iter().zip(y.iter()) {
        let dx = a - mean_x;
        let dy = b - mean_y;
        covariance += dx * dy;
        variance_x += dx * dx;
        variance_y += dy * dy;
    }

    let denominator = (variance_x * variance_y).sqrt();
    if denominator == 0.0 {
        // A constant vector has no defined correlation
        f64::NAN
    } else {
        covariance / denominator
    }
}

/// Assign 1-based ranks, averaging over ties
fn average_ranks(values: &[f64]) -> Vec<f64> {
    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_by(|&a, &b| values[a].total_cmp(&values[b]));

    let mut ranks = vec![0.0; values.len()];
    let mut i = 0;
    while i < order.len() {
        // Find the run of tied values starting at i
        let mut j = i + 1;
        while j < order.len() && values[order[j]] == values[order[i]] {
            j += 1;
        }
        // Average of 1-based positions i+1 ..= j
        let rank = (i + 1 + j) as f64 / 2.0;
        for &index in &order[i..j] {
            ranks[index] = rank;
        }
        i = j;
    }

    ranks
}

/// Two-sided p-value for a correlation coefficient over n samples
fn two_sided_p_value(rho: f64, n: usize) -> f64 {
    if !rho.is_finite() {
        return f64::NAN;
    }
    if rho.abs() >= 1.0 {
        return 0.0;
    }

    let df = (n - 2) as f64;
    let t = rho * (df / (1.0 - rho * rho)).sqrt();
    match StudentsT::new(0.0, 1.0, df) {
        Ok(dist) => (2.0 * (1.0 - dist.cdf(t.abs()))).clamp(0.0, 1.0),
        Err(_) => f64::NAN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() < tolerance,
            "expected {} within {} of {}",
            actual,
            tolerance,
            expected
        );
    }

    #[test]
    fn test_average_ranks_with_ties() {
        assert_eq!(average_ranks(&[10.0, 20.0, 20.0, 30.0]), vec![1.0, 2.5, 2.5, 4.0]);
        assert_eq!(average_ranks(&[3.0, 1.0, 2.0]), vec![3.0, 1.0, 2.0]);
        assert_eq!(average_ranks(&[5.0, 5.0, 5.0]), vec![2.0, 2.0, 2.0]);
    }

    #[test]
    fn test_filter_finite_pairs() {
        let x = [1.0, f64::NAN, 3.0, 4.0, f64::INFINITY];
        let y = [10.0, 20.0, f64::NAN, 40.0, 50.0];
        let (xf, yf) = filter_finite_pairs(&x, &y);
        assert_eq!(xf, vec![1.0, 4.0]);
        assert_eq!(yf, vec![10.0, 40.0]);
    }

    #[test]
    fn test_spearman_perfect_monotonic() {
        // A non-linear but monotonic relation still ranks perfectly
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        let y = [1.0, 4.0, 9.0, 16.0, 25.0];
        let result = spearman(&x, &y);
        assert_close(result.rho, 1.0, 1e-12);
        assert_eq!(result.p_value, 0.0);
        assert_eq!(result.samples, 5);

        let reversed: Vec<f64> = y.iter().map(|v| -v).collect();
        let result = spearman(&x, &reversed);
        assert_close(result.rho, -1.0, 1e-12);
        assert_eq!(result.p_value, 0.0);
    }

    #[test]
    fn test_spearman_matches_reference_values() {
        // scipy.stats.spearmanr([1,2,3,4,5], [5,6,7,8,7])
        //   -> (0.8207826816681233, 0.08858700531354381)
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        let y = [5.0, 6.0, 7.0, 8.0, 7.0];
        let result = spearman(&x, &y);
        assert_close(result.rho, 8.0 / 95.0_f64.sqrt(), 1e-12);
        assert_close(result.p_value, 0.0886, 2e-3);
    }

    #[test]
    fn test_spearman_sign_symmetry() {
        let x = [3.0, 1.0, 4.0, 1.5, 5.0, 9.0, 2.0];
        let y = [2.0, 7.0, 1.0, 8.0, 2.5, 0.5, 6.0];
        let negated: Vec<f64> = y.iter().map(|v| -v).collect();

        let direct = spearman(&x, &y);
        let flipped = spearman(&x, &negated);
        assert_close(direct.rho, -flipped.rho, 1e-12);
        assert_close(direct.p_value, flipped.p_value, 1e-12);
    }

    #[test]
    fn test_spearman_monotone_transform_invariance() {
        let x = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let y = [2.0, 1.0, 4.0, 3.0, 6.0, 5.0];
        let squared: Vec<f64> = x.iter().map(|v| v * v).collect();

        let original = spearman(&x, &y);
        let transformed = spearman(&squared, &y);
        assert_close(original.rho, transformed.rho, 1e-12);
    }

    #[test]
    fn test_spearman_filters_non_finite_pairwise() {
        let x = [1.0, 2.0, f64::NAN, 3.0, 4.0, 5.0];
        let y = [5.0, 6.0, 100.0, 7.0, 8.0, 7.0];
        let clean_x = [1.0, 2.0, 3.0, 4.0, 5.0];
        let clean_y = [5.0, 6.0, 7.0, 8.0, 7.0];

        let with_nan = spearman(&x, &y);
        let clean = spearman(&clean_x, &clean_y);
        assert_close(with_nan.rho, clean.rho, 1e-12);
        assert_close(with_nan.p_value, clean.p_value, 1e-12);
        assert_eq!(with_nan.samples, 5);
    }

    #[test]
    fn test_spearman_in_range() {
        let x = [0.3, 1.7, 2.2, 9.1, 4.4, 6.0, 5.5, 8.8];
        let y = [12.0, 3.0, 45.0, 2.0, 7.7, 19.0, 1.0, 30.0];
        let result = spearman(&x, &y);
        assert!(result.rho >= -1.0 && result.rho <= 1.0);
        assert!(result.p_value >= 0.0 && result.p_value <= 1.0);
    }

    #[test]
    fn test_spearman_undefined_cases() {
        // Fewer than three finite pairs
        let result = spearman(&[1.0, 2.0], &[3.0, 4.0]);
        assert!(result.rho.is_nan());
        assert!(result.p_value.is_nan());
        assert_eq!(result.samples, 2);

        // Constant input has no defined rank correlation
        let result = spearman(&[5.0, 5.0, 5.0, 5.0], &[1.0, 2.0, 3.0, 4.0]);
        assert!(result.rho.is_nan());
        assert!(result.p_value.is_nan());

        // NaN-heavy columns collapse below the minimum
        let result = spearman(&[1.0, f64::NAN, f64::NAN], &[2.0, 3.0, 4.0]);
        assert!(result.rho.is_nan());
        assert_eq!(result.samples, 1);
    }

    #[test]
    fn test_pearson_reference_values() {
        assert_close(pearson(&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0]), 1.0, 1e-12);
        assert_close(pearson(&[1.0, 2.0, 3.0], &[6.0, 4.0, 2.0]), -1.0, 1e-12);
        // numpy.corrcoef([1,2,3,4,5], [2,1,4,3,7])[0][1] -> 0.8241634...
        assert_close(
            pearson(&[1.0, 2.0, 3.0, 4.0, 5.0], &[2.0, 1.0, 4.0, 3.0, 7.0]),
            0.8241634,
            1e-6,
        );
    }

    #[test]
    fn test_correlation_matrix() {
        let a = [1.0, 2.0, 3.0, 4.0];
        let b = [2.0, 4.0, 6.0, 8.0];
        let c = [4.0, 3.0, 2.0, 1.0];
        let matrix = correlation_matrix(&[
            ("a".to_string(), &a[..]),
            ("b".to_string(), &b[..]),
            ("c".to_string(), &c[..]),
        ]);

        assert_eq!(matrix.labels, vec!["a", "b", "c"]);
        assert_eq!(matrix.len(), 3);
        for i in 0..3 {
            assert_close(matrix.values[i][i], 1.0, 1e-12);
            for j in 0..3 {
                assert_close(matrix.values[i][j], matrix.values[j][i], 1e-12);
            }
        }
        assert_close(matrix.values[0][1], 1.0, 1e-12);
        assert_close(matrix.values[0][2], -1.0, 1e-12);
    }
}
