//! Configuration types for the affinity graph.

use serde::{Deserialize, Serialize};

/// Maximum allowed difference between `w(i, j)` and `w(j, i)`.
pub const SYMMETRY_TOLERANCE: f32 = 1e-6;

/// Dense affinity matrix as supplied by the caller.
///
/// Row `i`, column `j` holds the affinity between individual `i + 1` and
/// individual `j + 1`. The matrix must be square, symmetric and non-negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Row-major weights, one row per individual.
    pub weights: Vec<Vec<f32>>,
}

impl Default for GraphConfig {
    /// Default eight-person network.
    ///
    /// Individuals 7 and 8 were first tabulated as 2.0 one way and 1.0 the
    /// other. Fitness adds both directions, so the pair is stored as 1.5 each
    /// way, which leaves every etotal unchanged.
    fn default() -> Self {
        Self {
            weights: vec![
                vec![0.0, 2.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
                vec![2.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0],
                vec![0.0, 1.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.5],
                vec![0.0, 0.0, 1.0, 0.0, 0.5, 2.0, 0.0, 0.0],
                vec![0.0, 0.0, 0.0, 0.5, 0.0, 1.0, 0.0, 0.0],
                vec![0.0, 0.0, 0.0, 2.0, 1.0, 0.0, 0.5, 0.0],
                vec![0.0, 0.0, 0.0, 0.0, 0.0, 0.5, 0.0, 1.5],
                vec![0.0, 1.0, 0.5, 0.0, 0.0, 0.0, 1.5, 0.0],
            ],
        }
    }
}

impl GraphConfig {
    /// Number of individuals (rows) in the matrix.
    #[inline]
    pub fn size(&self) -> usize {
        self.weights.len()
    }

    /// Validate matrix shape and weights.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let n = self.size();
        if n == 0 {
            return Err(ConfigError::EmptyGraph);
        }

        for (i, row) in self.weights.iter().enumerate() {
            if row.len() != n {
                return Err(ConfigError::NotSquare {
                    row: i,
                    len: row.len(),
                    expected: n,
                });
            }
            for (j, &w) in row.iter().enumerate() {
                if !w.is_finite() || w < 0.0 {
                    return Err(ConfigError::InvalidWeight { i, j, weight: w });
                }
            }
        }

        // Rows are known square here, so indexing the transpose is safe.
        for i in 0..n {
            for j in (i + 1)..n {
                let (a, b) = (self.weights[i][j], self.weights[j][i]);
                if (a - b).abs() > SYMMETRY_TOLERANCE {
                    return Err(ConfigError::Asymmetric { i, j, a, b });
                }
            }
        }

        Ok(())
    }
}

/// Affinity graph validation errors.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("Affinity graph must contain at least one individual")]
    EmptyGraph,
    #[error("Row {row} has {len} columns, expected {expected}")]
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },
    #[error("Weight ({i}, {j}) = {weight} must be finite and non-negative")]
    InvalidWeight { i: usize, j: usize, weight: f32 },
    #[error("Weights ({i}, {j}) = {a} and ({j}, {i}) = {b} are not symmetric")]
    Asymmetric { i: usize, j: usize, a: f32, b: f32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_graph_valid() {
        let config = GraphConfig::default();
        assert_eq!(config.size(), 8);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_graph_rejected() {
        let config = GraphConfig { weights: vec![] };
        assert_eq!(config.validate(), Err(ConfigError::EmptyGraph));
    }

    #[test]
    fn test_non_square_rejected() {
        let config = GraphConfig {
            weights: vec![vec![0.0, 1.0], vec![1.0]],
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotSquare { row: 1, len: 1, expected: 2 })
        ));
    }

    #[test]
    fn test_asymmetric_rejected() {
        let config = GraphConfig {
            weights: vec![vec![0.0, 1.0], vec![2.0, 0.0]],
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Asymmetric { i: 0, j: 1, .. })
        ));
    }

    #[test]
    fn test_negative_and_nan_weights_rejected() {
        let negative = GraphConfig {
            weights: vec![vec![0.0, -1.0], vec![-1.0, 0.0]],
        };
        assert!(matches!(
            negative.validate(),
            Err(ConfigError::InvalidWeight { i: 0, j: 1, .. })
        ));

        let nan = GraphConfig {
            weights: vec![vec![f32::NAN]],
        };
        assert!(matches!(
            nan.validate(),
            Err(ConfigError::InvalidWeight { i: 0, j: 0, .. })
        ));
    }

    #[test]
    fn test_serialization() {
        let config = GraphConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: GraphConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
