#![cfg(feature = "dev")]

use approx::assert_relative_eq;
use gp_rs::internals::math::linalg::FloatLinalg;

// ============================================================================
// SPD Solve Tests
// ============================================================================

#[test]
fn test_solve_spd_2x2() {
    // A = [[4, 2], [2, 3]], b = [1, 2]
    // A⁻¹ = 1/8 · [[3, -2], [-2, 4]], so x = [-1/8, 6/8]
    let a = [4.0, 2.0, 2.0, 3.0];
    let b = [1.0, 2.0];

    let x = f64::solve_spd(&a, &b, 2, 1).unwrap();
    assert_eq!(x.len(), 2);
    assert_relative_eq!(x[0], -0.125, epsilon = 1e-12);
    assert_relative_eq!(x[1], 0.75, epsilon = 1e-12);
}

#[test]
fn test_solve_spd_multiple_rhs() {
    // Same matrix, two right-hand-side columns [1, 2] and [1, 0],
    // stored and returned column-major.
    let a = [4.0, 2.0, 2.0, 3.0];
    let b = [1.0, 2.0, 1.0, 0.0];

    let x = f64::solve_spd(&a, &b, 2, 2).unwrap();
    assert_eq!(x.len(), 4);
    assert_relative_eq!(x[0], -0.125, epsilon = 1e-12);
    assert_relative_eq!(x[1], 0.75, epsilon = 1e-12);
    assert_relative_eq!(x[2], 0.375, epsilon = 1e-12);
    assert_relative_eq!(x[3], -0.25, epsilon = 1e-12);
}

#[test]
fn test_solve_spd_identity() {
    let a = [1.0, 0.0, 0.0, 1.0];
    let b = [3.5, -2.0];

    let x = f64::solve_spd(&a, &b, 2, 1).unwrap();
    assert_relative_eq!(x[0], 3.5);
    assert_relative_eq!(x[1], -2.0);
}

#[test]
fn test_solve_spd_singular_returns_none() {
    // Rank-1 matrix: Cholesky must fail rather than panic.
    let a = [1.0, 1.0, 1.0, 1.0];
    let b = [1.0, 1.0];

    assert!(f64::solve_spd(&a, &b, 2, 1).is_none());
}

#[test]
fn test_solve_spd_indefinite_returns_none() {
    // Symmetric but indefinite: second pivot is 1 - 4 < 0.
    let a = [1.0, 2.0, 2.0, 1.0];
    let b = [1.0, 1.0];

    assert!(f64::solve_spd(&a, &b, 2, 1).is_none());
}

// ============================================================================
// Cholesky Factor Tests
// ============================================================================

#[test]
fn test_cholesky_factor_diagonal() {
    // A = diag(4, 9) factors to L = diag(2, 3), returned column-major.
    let a = [4.0, 0.0, 0.0, 9.0];

    let l = f64::cholesky_factor(&a, 2).unwrap();
    assert_eq!(l.len(), 4);
    assert_relative_eq!(l[0], 2.0);
    assert_relative_eq!(l[1], 0.0);
    assert_relative_eq!(l[2], 0.0);
    assert_relative_eq!(l[3], 3.0);
}

#[test]
fn test_cholesky_factor_2x2() {
    // A = [[4, 2], [2, 3]]: l11 = 2, l21 = 1, l22 = sqrt(2).
    let a = [4.0, 2.0, 2.0, 3.0];

    let l = f64::cholesky_factor(&a, 2).unwrap();
    assert_relative_eq!(l[0], 2.0, epsilon = 1e-12);
    assert_relative_eq!(l[1], 1.0, epsilon = 1e-12);
    assert_relative_eq!(l[2], 0.0);
    assert_relative_eq!(l[3], 2.0f64.sqrt(), epsilon = 1e-12);
}

#[test]
fn test_cholesky_factor_reconstructs() {
    // L·Lᵗ must reproduce A within round-off.
    let a = [2.0, 0.6, 0.3, 0.6, 1.5, 0.2, 0.3, 0.2, 1.0];
    let n = 3;

    let l = f64::cholesky_factor(&a, n).unwrap();
    for i in 0..n {
        for j in 0..n {
            // Column-major factor: L[i][j] lives at j*n + i.
            let mut sum = 0.0;
            for k in 0..n {
                sum += l[k * n + i] * l[k * n + j];
            }
            assert_relative_eq!(sum, a[i * n + j], epsilon = 1e-12);
        }
    }
}

#[test]
fn test_cholesky_factor_indefinite_returns_none() {
    let a = [1.0, 2.0, 2.0, 1.0];
    assert!(f64::cholesky_factor(&a, 2).is_none());
}

// ============================================================================
// Precision Tests
// ============================================================================

#[test]
fn test_solve_spd_f32() {
    let a = [4.0f32, 2.0, 2.0, 3.0];
    let b = [1.0f32, 2.0];

    let x = f32::solve_spd(&a, &b, 2, 1).unwrap();
    assert_relative_eq!(x[0], -0.125, epsilon = 1e-5);
    assert_relative_eq!(x[1], 0.75, epsilon = 1e-5);
}
