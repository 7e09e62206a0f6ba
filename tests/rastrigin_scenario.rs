use pso_engine::benchmarks::rastrigin;
use pso_engine::{CoefficientSampling, PsoConfig};
use pso_rastrigin::{run, Report};

#[test]
fn test_default_scenario_reports_non_negative_best() {
    for seed in 0..5 {
        let config = PsoConfig {
            seed: Some(seed),
            ..PsoConfig::default()
        };
        let report = run(&config).expect("default config is valid");

        assert_eq!(report.iterations, 100);
        assert_eq!(report.best_position.len(), 2);
        assert!(report.best_value >= 0.0, "Rastrigin is non-negative, got {}", report.best_value);
        assert_eq!(rastrigin(&report.best_position), report.best_value);
    }
}

#[test]
fn test_seeded_runs_report_identically() {
    let config = PsoConfig {
        seed: Some(2718),
        ..PsoConfig::default()
    };
    let a = run(&config).unwrap();
    let b = run(&config).unwrap();

    assert_eq!(a.best_position, b.best_position);
    assert_eq!(a.best_value.to_bits(), b.best_value.to_bits());
}

#[test]
fn test_reference_sampling_scenario() {
    // One r1/r2 pair per particle, shared across both axes
    let config = PsoConfig {
        sampling: CoefficientSampling::PerParticle,
        seed: Some(31),
        ..PsoConfig::default()
    };
    let report = run(&config).unwrap();
    assert!(report.best_value >= 0.0);
}

#[test]
fn test_zero_iteration_run() {
    let config = PsoConfig {
        n_iterations: 0,
        seed: Some(4),
        ..PsoConfig::default()
    };
    let report = run(&config).unwrap();

    assert_eq!(report.iterations, 0);
    assert!(report.best_position.iter().all(|&x| config.bounds.contains(x)));
}

#[test]
fn test_report_serializes_to_json() {
    let config = PsoConfig {
        n_iterations: 10,
        seed: Some(6),
        ..PsoConfig::default()
    };
    let report = run(&config).unwrap();

    let json = serde_json::to_string(&report).unwrap();
    let back: Report = serde_json::from_str(&json).unwrap();
    assert_eq!(back.best_position.len(), report.best_position.len());
    assert!((back.best_value - report.best_value).abs() <= 1e-12 * report.best_value.abs().max(1.0));
    assert_eq!(back.iterations, 10);
}
