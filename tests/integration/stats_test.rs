//! Reference-value tests for the correlation routines, exercised through the
//! public API.

use metriscope::core::{correlation_matrix, pearson, spearman};

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
fn test_spearman_against_scipy_reference() {
    // scipy.stats.spearmanr([1,2,3,4,5], [5,6,7,8,7])
    //   -> (0.8207826816681233, 0.08858700531354381)
    let result = spearman(&[1.0, 2.0, 3.0, 4.0, 5.0], &[5.0, 6.0, 7.0, 8.0, 7.0]);
    assert_close(result.rho, 0.8207826816681233, 1e-12);
    assert_close(result.p_value, 0.0886, 2e-3);

    // scipy.stats.spearmanr([10,20,30,40,50,60], [6,5,4,3,2,1]) -> (-1.0, 0.0)
    let result = spearman(
        &[10.0, 20.0, 30.0, 40.0, 50.0, 60.0],
        &[6.0, 5.0, 4.0, 3.0, 2.0, 1.0],
    );
    assert_close(result.rho, -1.0, 1e-12);
    assert_eq!(result.p_value, 0.0);
}

#[test]
fn test_spearman_rounding_matches_report_precision() {
    // The analyst-facing coefficient is rounded to two decimals
    let result = spearman(&[1.0, 2.0, 3.0, 4.0, 5.0], &[5.0, 6.0, 7.0, 8.0, 7.0]);
    let rounded = (result.rho * 100.0).round() / 100.0;
    assert_close(rounded, 0.82, 1e-12);
}

#[test]
fn test_spearman_coefficient_is_bounded() {
    let xs = [
        vec![1.0, 5.0, 3.0, 9.0, 7.0],
        vec![0.1, 0.2, 0.4, 0.8, 1.6],
        vec![100.0, 50.0, 25.0, 12.5, 6.25],
    ];
    let ys = [
        vec![2.0, 4.0, 8.0, 16.0, 32.0],
        vec![9.0, 1.0, 8.0, 2.0, 7.0],
        vec![3.0, 3.5, 2.0, 5.0, 4.0],
    ];

    for x in &xs {
        for y in &ys {
            let result = spearman(x, y);
            assert!(result.rho >= -1.0 && result.rho <= 1.0);
            assert!(result.p_value >= 0.0 && result.p_value <= 1.0);
        }
    }
}

#[test]
fn test_pearson_against_numpy_reference() {
    // numpy.corrcoef([1,2,3,4,5], [2,1,4,3,7])[0][1] -> 0.82416338...
    assert_close(
        pearson(&[1.0, 2.0, 3.0, 4.0, 5.0], &[2.0, 1.0, 4.0, 3.0, 7.0]),
        0.8241634,
        1e-6,
    );
}

#[test]
fn test_matrix_is_symmetric_with_unit_diagonal() {
    let a = [1.0, 2.0, 3.0, 4.0, 5.0];
    let b = [3.0, 1.0, 4.0, 1.0, 5.0];
    let c = [9.0, 2.0, 6.0, 5.0, 3.0];
    let matrix = correlation_matrix(&[
        ("a".to_string(), &a[..]),
        ("b".to_string(), &b[..]),
        ("c".to_string(), &c[..]),
    ]);

    for i in 0..3 {
        assert_close(matrix.values[i][i], 1.0, 1e-12);
        for j in 0..3 {
            assert_close(matrix.values[i][j], matrix.values[j][i], 1e-12);
        }
    }
}
