#![cfg(feature = "dev")]

use approx::assert_relative_eq;
use gp_rs::internals::engine::executor::{GpConfig, GpExecutor};
use gp_rs::internals::primitives::observation::Observation;

// ============================================================================
// Configuration Tests
// ============================================================================

#[test]
fn test_default_config() {
    let config = GpConfig::<f64>::default();
    assert_relative_eq!(config.length_scale, 1.0);
    assert_relative_eq!(config.variance_scale, 1.0);
    assert_eq!(config.num_samples, 0);
    assert_relative_eq!(config.default_noise_std, 0.1);
    assert_relative_eq!(config.credible_level, 0.95);
    assert_eq!(config.seed, None);
}

#[test]
fn test_executor_from_config() {
    let config = GpConfig {
        length_scale: 2.0,
        variance_scale: 0.5,
        num_samples: 7,
        default_noise_std: 0.2,
        credible_level: 0.9,
        seed: Some(99),
    };

    let executor = GpExecutor::from_config(&config);
    assert_relative_eq!(executor.length_scale, 2.0);
    assert_relative_eq!(executor.variance_scale, 0.5);
    assert_eq!(executor.num_samples, 7);
    assert_relative_eq!(executor.default_noise_std, 0.2);
    assert_relative_eq!(executor.credible_level, 0.9);
    assert_eq!(executor.seed, Some(99));
}

#[test]
fn test_builder_methods() {
    let executor = GpExecutor::<f64>::new()
        .length_scale(1.5)
        .variance_scale(2.0)
        .num_samples(3)
        .default_noise_std(0.05)
        .credible_level(0.99)
        .seed(Some(1));

    assert_relative_eq!(executor.length_scale, 1.5);
    assert_relative_eq!(executor.variance_scale, 2.0);
    assert_eq!(executor.num_samples, 3);
    assert_relative_eq!(executor.default_noise_std, 0.05);
    assert_relative_eq!(executor.credible_level, 0.99);
    assert_eq!(executor.seed, Some(1));
}

// ============================================================================
// Prior Run Tests
// ============================================================================

#[test]
fn test_run_empty_observations_yields_prior() {
    let executor = GpExecutor::<f64>::new();
    let output = executor.run(&[]).unwrap();

    assert_eq!(output.x.len(), 100);
    assert_eq!(output.mean.len(), 100);
    assert_eq!(output.std_dev.len(), 100);
    assert_eq!(output.lower.len(), 100);
    assert_eq!(output.upper.len(), 100);

    assert!(output.mean.iter().all(|&m| m == 0.0));
    for &s in &output.std_dev {
        assert_relative_eq!(s, 1.0, epsilon = 1e-12);
    }

    // 95% band around a zero mean with unit deviation.
    assert_relative_eq!(output.lower[0], -1.96, epsilon = 1e-12);
    assert_relative_eq!(output.upper[0], 1.96, epsilon = 1e-12);

    assert!(output.samples.is_empty());
    assert_eq!(output.sampling_error, None);
    assert_relative_eq!(output.level_used, 0.95);
}

#[test]
fn test_run_prior_with_samples_uses_noise_floor() {
    let executor = GpExecutor::<f64>::new().num_samples(5);
    let output = executor.run(&[]).unwrap();

    assert_eq!(output.samples.len(), 5);
    assert!(output.samples.iter().all(|s| s.len() == 100));
    assert_eq!(output.sampling_error, None);
}

// ============================================================================
// Posterior Run Tests
// ============================================================================

#[test]
fn test_run_with_observations() {
    let executor = GpExecutor::<f64>::new();
    let observations = [
        Observation::new(-1.0, 1.0, 0.1),
        Observation::new(1.0, -1.0, 0.1),
    ];

    let output = executor.run(&observations).unwrap();
    assert_eq!(output.mean.len(), 100);

    // Pulled toward the data near the observations.
    assert!(output.mean[40] > 0.5);
    assert!(output.mean[60] < -0.5);

    // Bounds bracket the mean everywhere.
    for i in 0..100 {
        assert!(output.lower[i] <= output.mean[i]);
        assert!(output.mean[i] <= output.upper[i]);
    }
}

#[test]
fn test_run_samples_with_observations() {
    let executor = GpExecutor::<f64>::new().num_samples(3);
    let observations = [Observation::new(0.0, 1.0, 0.2)];

    let output = executor.run(&observations).unwrap();
    assert_eq!(output.samples.len(), 3);
    assert!(output.samples.iter().all(|s| s.len() == 100));
    assert_eq!(output.sampling_error, None);
    assert!(output
        .samples
        .iter()
        .flat_map(|s| s.iter())
        .all(|v| v.is_finite()));
}

#[test]
fn test_run_is_deterministic() {
    let executor = GpExecutor::<f64>::new().num_samples(4);
    let observations = [Observation::new(0.5, 1.0, 0.3)];

    let first = executor.run(&observations).unwrap();
    let second = executor.run(&observations).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_run_seed_changes_draws() {
    let observations = [Observation::new(0.0, 1.0, 0.2)];

    let a = GpExecutor::<f64>::new()
        .num_samples(2)
        .seed(Some(7))
        .run(&observations)
        .unwrap();
    let b = GpExecutor::<f64>::new()
        .num_samples(2)
        .seed(Some(8))
        .run(&observations)
        .unwrap();

    // Summary curves agree; the draws differ.
    assert_eq!(a.mean, b.mean);
    assert_ne!(a.samples, b.samples);
}

#[test]
fn test_run_credible_level_respected() {
    // Prior with unit deviation: the band half-width equals the z-score,
    // here Phi⁻¹(0.75) for a 50% band.
    let executor = GpExecutor::<f64>::new().credible_level(0.5);
    let output = executor.run(&[]).unwrap();

    assert_relative_eq!(output.upper[0], 0.674_489_750_196_08, epsilon = 1e-4);
    assert_relative_eq!(output.level_used, 0.5);
}

#[test]
fn test_run_with_config_matches_builder_path() {
    let config = GpConfig {
        length_scale: 1.2,
        variance_scale: 0.8,
        num_samples: 2,
        default_noise_std: 0.1,
        credible_level: 0.95,
        seed: Some(3),
    };
    let observations = [Observation::new(0.0, 1.0, 0.1)];

    let via_static = GpExecutor::run_with_config(&observations, &config).unwrap();
    let via_builder = GpExecutor::from_config(&config).run(&observations).unwrap();
    assert_eq!(via_static, via_builder);
}
