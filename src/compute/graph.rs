//! Immutable affinity graph used by the fitness evaluator.

use crate::schema::{ConfigError, GraphConfig};

/// Validated symmetric weight matrix over `size` individuals.
#[derive(Debug, Clone, PartialEq)]
pub struct AffinityGraph {
    size: usize,
    /// Row-major `size * size` weights.
    weights: Vec<f32>,
}

impl AffinityGraph {
    /// Build from a dense matrix, rejecting empty, non-square, negative or
    /// asymmetric input.
    pub fn new(weights: Vec<Vec<f32>>) -> Result<Self, ConfigError> {
        Self::from_config(&GraphConfig { weights })
    }

    /// Build from a graph configuration.
    pub fn from_config(config: &GraphConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            size: config.size(),
            weights: config.weights.iter().flatten().copied().collect(),
        })
    }

    /// Number of individuals.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Weight between zero-based indices `i` and `j`.
    #[inline]
    pub fn weight(&self, i: usize, j: usize) -> f32 {
        self.weights[i * self.size + j]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graph_from_matrix() {
        let graph =
            AffinityGraph::new(vec![vec![0.0, 2.0, 0.0], vec![2.0, 0.0, 1.0], vec![0.0, 1.0, 0.0]])
                .unwrap();
        assert_eq!(graph.size(), 3);
        assert_eq!(graph.weight(0, 1), 2.0);
        assert_eq!(graph.weight(2, 1), 1.0);
        assert_eq!(graph.weight(0, 2), 0.0);
    }

    #[test]
    fn test_graph_rejects_invalid() {
        assert_eq!(AffinityGraph::new(vec![]), Err(ConfigError::EmptyGraph));
        assert!(AffinityGraph::new(vec![vec![0.0, 1.0], vec![0.0, 0.0]]).is_err());
    }

    #[test]
    fn test_default_network() {
        let graph = AffinityGraph::from_config(&GraphConfig::default()).unwrap();
        assert_eq!(graph.size(), 8);
        assert_eq!(graph.weight(3, 5), 2.0);
        assert_eq!(graph.weight(5, 3), 2.0);
    }
}
