//! Standard benchmark objectives.

use ndarray::Array1;
use std::f64::consts::PI;

/// Rastrigin: `10 d + Σ (xi² - 10 cos(2π xi))`.
///
/// Highly multimodal, non-negative everywhere, global minimum 0 at the origin.
pub fn rastrigin(x: &Array1<f64>) -> f64 {
    10.0 * x.len() as f64
        + x.iter()
            .map(|&xi| xi * xi - 10.0 * (2.0 * PI * xi).cos())
            .sum::<f64>()
}

/// Sphere: `Σ xi²`, unimodal with minimum 0 at the origin.
pub fn sphere(x: &Array1<f64>) -> f64 {
    x.iter().map(|&xi| xi * xi).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_rastrigin_minimum_at_origin() {
        assert_eq!(rastrigin(&array![0.0, 0.0]), 0.0);
        assert_eq!(rastrigin(&array![0.0, 0.0, 0.0, 0.0]), 0.0);
    }

    #[test]
    fn test_rastrigin_local_minimum() {
        // Nearest local minima sit at integer coordinates
        let value = rastrigin(&array![1.0, 0.0]);
        assert!((value - 1.0).abs() < 1e-9, "got {}", value);
    }

    #[test]
    fn test_sphere() {
        assert_eq!(sphere(&array![3.0, -4.0]), 25.0);
    }
}
