use ndarray::Array1;
use pso_engine::OptimizationResult;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Final outcome of a run, ready for console output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub best_position: Array1<f64>,
    pub best_value: f64,
    pub iterations: usize,
}

impl From<OptimizationResult> for Report {
    fn from(result: OptimizationResult) -> Self {
        Self {
            iterations: result.history.len(),
            best_position: result.best_position,
            best_value: result.best_value,
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let coords: Vec<String> = self.best_position.iter().map(|x| format!("{:.6}", x)).collect();
        writeln!(f, "Best position found: [{}]", coords.join(", "))?;
        write!(f, "Best value found: {:.6e}", self.best_value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_report_display() {
        let report = Report {
            best_position: array![0.5, -0.25],
            best_value: 0.125,
            iterations: 100,
        };
        assert_eq!(
            report.to_string(),
            "Best position found: [0.500000, -0.250000]\nBest value found: 1.250000e-1"
        );
    }

    #[test]
    fn test_report_from_result() {
        let result = OptimizationResult {
            best_position: array![1.0, 2.0],
            best_value: 5.0,
            history: vec![9.0, 7.0, 5.0],
        };
        let report = Report::from(result);
        assert_eq!(report.iterations, 3);
        assert_eq!(report.best_value, 5.0);
    }
}
