//! Noise configuration.
//!
//! A [`NoiseConfig`] fully determines the transition matrix and the sampling
//! stream of one noise-injection call. It can be built in code or loaded from
//! JSON.

use crate::error::{LabelNoiseError, Result};
use crate::transition::build_transition_matrix;
use crate::types::NoisyLabels;
use ndarray::ArrayView1;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Which classes a true label can be confused with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoiseTopology {
    /// Each class can only be mistaken for its cyclic successor.
    Pairflip,
    /// Each class is mistaken uniformly for any other class.
    Symmetric,
}

impl NoiseTopology {
    /// Get the string tag of the topology.
    pub fn name(&self) -> &'static str {
        match self {
            NoiseTopology::Pairflip => "pairflip",
            NoiseTopology::Symmetric => "symmetric",
        }
    }
}

impl fmt::Display for NoiseTopology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NoiseTopology {
    type Err = LabelNoiseError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "pairflip" => Ok(NoiseTopology::Pairflip),
            "symmetric" => Ok(NoiseTopology::Symmetric),
            other => Err(LabelNoiseError::UnsupportedTopology(other.to_string())),
        }
    }
}

fn default_require_flips() -> bool {
    true
}

/// Configuration for a single noise-injection call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoiseConfig {
    /// Noise topology.
    pub topology: NoiseTopology,
    /// Number of classes; labels must lie in `[0, nb_classes)`.
    pub nb_classes: usize,
    /// Target probability that a label is flipped, in `[0, 1]`.
    pub noise_rate: f64,
    /// Seed for the call-local generator. A fresh seed is drawn when absent.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Fail when a positive noise rate flips no label at all. When false the
    /// condition is only logged.
    #[serde(default = "default_require_flips")]
    pub require_flips: bool,
}

impl NoiseConfig {
    /// Create a configuration with no fixed seed and the flip invariant enforced.
    pub fn new(topology: NoiseTopology, nb_classes: usize, noise_rate: f64) -> Self {
        Self {
            topology,
            nb_classes,
            noise_rate,
            seed: None,
            require_flips: true,
        }
    }

    /// Fix the generator seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enforce or relax the positive-flip invariant.
    pub fn with_require_flips(mut self, require_flips: bool) -> Self {
        self.require_flips = require_flips;
        self
    }

    /// Parse a configuration from a JSON string.
    ///
    /// ```
    /// use labelnoise::config::{NoiseConfig, NoiseTopology};
    ///
    /// let config = NoiseConfig::from_json_str(
    ///     r#"{"topology": "symmetric", "nb_classes": 10, "noise_rate": 0.2, "seed": 1}"#,
    /// )
    /// .unwrap();
    /// assert_eq!(config.topology, NoiseTopology::Symmetric);
    /// assert!(config.require_flips);
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        // Report unknown tags the same way string dispatch does.
        if let Some(tag) = value.get("topology").and_then(serde_json::Value::as_str) {
            tag.parse::<NoiseTopology>()?;
        }
        let config: NoiseConfig = serde_json::from_value(value)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Check the class count and noise rate.
    ///
    /// # Errors
    ///
    /// Returns [`LabelNoiseError::InvalidConfiguration`] if `nb_classes < 2` or
    /// `noise_rate` is not a finite value in `[0, 1]`.
    pub fn validate(&self) -> Result<()> {
        check_noise_params(self.nb_classes, self.noise_rate)
    }

    /// Apply this configuration to a label vector.
    ///
    /// The input is never modified; the returned [`NoisyLabels`] owns a new
    /// vector.
    pub fn apply(&self, labels: &ArrayView1<usize>) -> Result<NoisyLabels> {
        let matrix = build_transition_matrix(self.topology, self.nb_classes, self.noise_rate)?;
        crate::noisify::corrupt_with_matrix(labels, &matrix.view(), self)
    }
}

/// Shared precondition check for every matrix builder.
pub(crate) fn check_noise_params(nb_classes: usize, noise_rate: f64) -> Result<()> {
    if nb_classes < 2 {
        return Err(LabelNoiseError::InvalidConfiguration(format!(
            "nb_classes must be at least 2, got {nb_classes}"
        )));
    }
    if !noise_rate.is_finite() || !(0.0..=1.0).contains(&noise_rate) {
        return Err(LabelNoiseError::InvalidConfiguration(format!(
            "noise_rate must lie in [0, 1], got {noise_rate}"
        )));
    }
    Ok(())
}
