//! Core data types returned by noise injection.

use ndarray::Array1;
use serde::{Deserialize, Serialize};

/// Noisy labels together with the fraction of labels that actually changed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoisyLabels {
    /// Observed (possibly corrupted) labels, same length as the input.
    pub labels: Array1<usize>,
    /// Empirical flip rate. `None` when no noise was applied.
    pub actual_noise_rate: Option<f64>,
}

impl NoisyLabels {
    /// Number of labels.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether the label vector is empty.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
