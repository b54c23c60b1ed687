#![cfg(feature = "dev")]

use approx::assert_relative_eq;
use gp_rs::internals::algorithms::posterior::Posterior;
use gp_rs::internals::math::grid::evaluation_grid;
use gp_rs::internals::math::kernel::RbfKernel;
use gp_rs::internals::primitives::observation::Observation;

// ============================================================================
// Prior Tests
// ============================================================================

#[test]
fn test_prior_mean_is_zero() {
    let kernel = RbfKernel::new(1.0, 1.0);
    let grid = evaluation_grid::<f64>();

    let prior = Posterior::prior(&kernel, &grid);
    assert_eq!(prior.mean.len(), 100);
    assert!(prior.mean.iter().all(|&m| m == 0.0));
}

#[test]
fn test_prior_deviation_is_sqrt_variance() {
    let kernel = RbfKernel::new(1.0, 2.0);
    let grid = evaluation_grid::<f64>();

    let prior = Posterior::prior(&kernel, &grid);
    for &s in &prior.std_dev {
        assert_relative_eq!(s, 2.0f64.sqrt(), epsilon = 1e-12);
    }
}

#[test]
fn test_prior_covariance_shape() {
    let kernel = RbfKernel::new(1.0, 1.0);
    let grid = evaluation_grid::<f64>();

    let prior = Posterior::prior(&kernel, &grid);
    assert_eq!(prior.cov.len(), 100 * 100);

    // Diagonal carries the marginal variance; distant points decorrelate.
    assert_relative_eq!(prior.cov[0], 1.0);
    assert!(prior.cov[99].abs() < 1e-12); // k(-5.0, 4.9)
}

// ============================================================================
// Conditioning Tests
// ============================================================================

#[test]
fn test_single_observation_at_grid_point() {
    // One observation at x = 0 (grid index 50), y = 2, noise = 1, l = v = 1:
    // K = [2], alpha = 1, so mean(0) = k(0,0)·1 = 1 and
    // cov(0,0) = 1 - 1·(1/2)·1 = 1/2.
    let kernel = RbfKernel::new(1.0, 1.0);
    let grid = evaluation_grid::<f64>();
    let observations = [Observation::new(0.0, 2.0, 1.0)];

    let posterior = Posterior::condition(&kernel, &grid, &observations).unwrap();
    assert_relative_eq!(posterior.mean[50], 1.0, epsilon = 1e-10);
    assert_relative_eq!(posterior.std_dev[50], 0.5f64.sqrt(), epsilon = 1e-10);
}

#[test]
fn test_noise_free_observation_interpolates() {
    // Zero noise at a grid point pins the mean to the observed value and
    // collapses the variance there.
    let kernel = RbfKernel::new(1.0, 1.0);
    let grid = evaluation_grid::<f64>();
    let observations = [Observation::exact(0.0, 1.5)];

    let posterior = Posterior::condition(&kernel, &grid, &observations).unwrap();
    assert_relative_eq!(posterior.mean[50], 1.5, epsilon = 1e-10);
    assert!(posterior.std_dev[50] < 1e-6);
}

#[test]
fn test_far_observation_leaves_prior() {
    // An observation far off the grid has negligible influence: the
    // posterior reverts to the prior everywhere on the grid.
    let kernel = RbfKernel::new(1.0, 1.0);
    let grid = evaluation_grid::<f64>();
    let observations = [Observation::new(50.0, 3.0, 0.1)];

    let posterior = Posterior::condition(&kernel, &grid, &observations).unwrap();
    assert!(posterior.mean[50].abs() < 1e-10);
    assert_relative_eq!(posterior.std_dev[50], 1.0, epsilon = 1e-8);
}

#[test]
fn test_mean_decays_away_from_observation() {
    let kernel = RbfKernel::new(1.0, 1.0);
    let grid = evaluation_grid::<f64>();
    let observations = [Observation::new(0.0, 2.0, 0.5)];

    let posterior = Posterior::condition(&kernel, &grid, &observations).unwrap();

    // Peak at the observation, shrinking toward zero at the edges.
    assert!(posterior.mean[50] > posterior.mean[70]);
    assert!(posterior.mean[70] > posterior.mean[95]);
    assert!(posterior.mean[95] > 0.0);
    assert!(posterior.mean[0].abs() < 1e-4);
}

#[test]
fn test_uncertainty_shrinks_near_observations() {
    let kernel = RbfKernel::new(1.0, 1.0);
    let grid = evaluation_grid::<f64>();
    let observations = [Observation::new(0.0, 1.0, 0.1)];

    let posterior = Posterior::condition(&kernel, &grid, &observations).unwrap();

    // Tight near the data, prior-level far away.
    assert!(posterior.std_dev[50] < 0.2);
    assert!(posterior.std_dev[0] > 0.99);
}

#[test]
fn test_covariance_is_symmetric() {
    let kernel = RbfKernel::new(1.2, 0.8);
    let grid = evaluation_grid::<f64>();
    let observations = [
        Observation::new(-1.0, 1.0, 0.2),
        Observation::new(1.0, -1.0, 0.3),
    ];

    let posterior = Posterior::condition(&kernel, &grid, &observations).unwrap();
    let m = 100;
    for &(i, j) in &[(0, 99), (10, 60), (45, 55), (3, 4)] {
        assert_relative_eq!(
            posterior.cov[i * m + j],
            posterior.cov[j * m + i],
            epsilon = 1e-10
        );
    }
}

#[test]
fn test_deviations_clamped_non_negative() {
    let kernel = RbfKernel::new(1.0, 1.0);
    let grid = evaluation_grid::<f64>();
    let observations = [
        Observation::exact(-0.5, 1.0),
        Observation::exact(0.0, 0.5),
        Observation::exact(0.5, -0.2),
    ];

    // Cancellation drives the variance to zero at pinned points; the clamp
    // must keep every deviation finite and non-negative.
    let posterior = Posterior::condition(&kernel, &grid, &observations).unwrap();
    assert!(posterior.std_dev.iter().all(|s| s.is_finite() && *s >= 0.0));
}

// ============================================================================
// Degenerate Input Tests
// ============================================================================

#[test]
fn test_duplicate_exact_observations_regularized() {
    // Two zero-noise observations at the same x make K singular; the solve
    // must fall back to the jittered system instead of erroring.
    let kernel = RbfKernel::new(1.0, 1.0);
    let grid = evaluation_grid::<f64>();
    let observations = [Observation::exact(0.0, 1.0), Observation::exact(0.0, 1.0)];

    let posterior = Posterior::condition(&kernel, &grid, &observations).unwrap();
    assert_relative_eq!(posterior.mean[50], 1.0, epsilon = 1e-4);
    assert!(posterior.std_dev.iter().all(|s| s.is_finite()));
}

#[test]
fn test_conflicting_duplicates_average_out() {
    // Same x, opposite y: the jittered solve balances the pair, so the
    // mean stays bounded even though individual weights are huge.
    let kernel = RbfKernel::new(1.0, 1.0);
    let grid = evaluation_grid::<f64>();
    let observations = [Observation::exact(1.0, 1.0), Observation::exact(1.0, -1.0)];

    let result = Posterior::condition(&kernel, &grid, &observations);
    let posterior = result.unwrap();
    assert!(posterior.mean[60].abs() < 1.0);
    assert!(posterior.mean.iter().all(|m| m.is_finite()));
}

#[test]
fn test_antisymmetric_observations_give_antisymmetric_mean() {
    // y(-1) = 1, y(1) = -1 with equal noise: mean is odd about x = 0.
    // With K = [[1.01, e⁻²], [e⁻², 1.01]] the weights are ±a with
    // a = 1/(1.01 - e⁻²), so mean(±1) = ±a·(1 - e⁻²) ≈ ±0.9886.
    let kernel = RbfKernel::new(1.0, 1.0);
    let grid = evaluation_grid::<f64>();
    let observations = [
        Observation::new(-1.0, 1.0, 0.1),
        Observation::new(1.0, -1.0, 0.1),
    ];

    let posterior = Posterior::condition(&kernel, &grid, &observations).unwrap();
    assert_relative_eq!(posterior.mean[40], 0.9886, epsilon = 1e-3);
    assert_relative_eq!(posterior.mean[40], -posterior.mean[60], epsilon = 1e-10);
    assert!(posterior.mean[50].abs() < 1e-10);
}
