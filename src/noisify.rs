//! Noise injection entry points.
//!
//! These functions build the transition matrix for a topology, sample noisy
//! labels from it and report the realized noise rate. They are stateless: each
//! call owns its own generator and its own matrix.

use crate::config::{NoiseConfig, NoiseTopology};
use crate::error::{LabelNoiseError, Result};
use crate::sampler::multiclass_noisify;
use crate::types::NoisyLabels;
use ndarray::{ArrayView1, ArrayView2};
use rand::Rng;
use tracing::{info, warn};

/// Corrupt `labels` with the given topology.
///
/// With `noise_rate == 0` the labels are returned unchanged and
/// `actual_noise_rate` is `None`. Otherwise each label is resampled from its
/// row of the transition matrix and the fraction of changed labels is reported.
///
/// # Errors
///
/// - [`LabelNoiseError::InvalidConfiguration`] if `nb_classes < 2` or
///   `noise_rate` is outside `[0, 1]`.
/// - [`LabelNoiseError::ValidationError`] if a label is `>= nb_classes` or the
///   label vector is empty.
/// - [`LabelNoiseError::InvariantViolation`] if a positive noise rate flipped
///   no label at all.
///
/// # Example
///
/// ```
/// use labelnoise::prelude::*;
/// use ndarray::array;
///
/// let labels = array![0, 0, 0, 0, 0];
/// let noisy = inject_noise(&labels.view(), NoiseTopology::Symmetric, 1.0, 2, Some(0)).unwrap();
/// assert_eq!(noisy.labels, array![1_usize, 1, 1, 1, 1]);
/// assert_eq!(noisy.actual_noise_rate, Some(1.0));
/// ```
pub fn inject_noise(
    labels: &ArrayView1<usize>,
    topology: NoiseTopology,
    noise_rate: f64,
    nb_classes: usize,
    seed: Option<u64>,
) -> Result<NoisyLabels> {
    let mut config = NoiseConfig::new(topology, nb_classes, noise_rate);
    config.seed = seed;
    config.apply(labels)
}

/// Dispatch on a topology tag (`"pairflip"` or `"symmetric"`).
///
/// # Errors
///
/// Returns [`LabelNoiseError::UnsupportedTopology`] for any other tag, before
/// the labels are inspected. See [`inject_noise`] for the remaining errors.
pub fn noisify(
    nb_classes: usize,
    labels: &ArrayView1<usize>,
    noise_type: &str,
    noise_rate: f64,
    seed: Option<u64>,
) -> Result<NoisyLabels> {
    let topology: NoiseTopology = noise_type.parse()?;
    inject_noise(labels, topology, noise_rate, nb_classes, seed)
}

/// Flip each class to its cyclic successor with probability `noise_rate`.
pub fn noisify_pairflip(
    labels: &ArrayView1<usize>,
    noise_rate: f64,
    seed: Option<u64>,
    nb_classes: usize,
) -> Result<NoisyLabels> {
    inject_noise(labels, NoiseTopology::Pairflip, noise_rate, nb_classes, seed)
}

/// Flip each class uniformly to any other class with total probability
/// `noise_rate`.
pub fn noisify_multiclass_symmetric(
    labels: &ArrayView1<usize>,
    noise_rate: f64,
    seed: Option<u64>,
    nb_classes: usize,
) -> Result<NoisyLabels> {
    inject_noise(labels, NoiseTopology::Symmetric, noise_rate, nb_classes, seed)
}

/// Fraction of positions where `noisy` differs from `clean`.
///
/// Returns `0.0` for empty vectors.
///
/// # Errors
///
/// Returns [`LabelNoiseError::ValidationError`] if the lengths differ.
pub fn realized_noise_rate(noisy: &ArrayView1<usize>, clean: &ArrayView1<usize>) -> Result<f64> {
    if noisy.len() != clean.len() {
        return Err(LabelNoiseError::ValidationError(format!(
            "cannot compare {} noisy labels against {} clean labels",
            noisy.len(),
            clean.len()
        )));
    }
    if clean.is_empty() {
        return Ok(0.0);
    }
    let flipped = noisy
        .iter()
        .zip(clean.iter())
        .filter(|(a, b)| a != b)
        .count();
    Ok(flipped as f64 / clean.len() as f64)
}

/// Apply an already built transition matrix under `config`.
pub(crate) fn corrupt_with_matrix(
    labels: &ArrayView1<usize>,
    matrix: &ArrayView2<f64>,
    config: &NoiseConfig,
) -> Result<NoisyLabels> {
    if config.noise_rate <= 0.0 {
        return Ok(NoisyLabels {
            labels: labels.to_owned(),
            actual_noise_rate: None,
        });
    }

    let seed = resolve_seed(config.seed);
    let noisy = multiclass_noisify(labels, matrix, seed)?;
    let actual_noise_rate = realized_noise_rate(&noisy.view(), labels)?;

    if actual_noise_rate <= 0.0 {
        if config.require_flips {
            return Err(LabelNoiseError::InvariantViolation(format!(
                "noise rate {} flipped none of {} labels (topology {}, seed {seed})",
                config.noise_rate,
                labels.len(),
                config.topology
            )));
        }
        warn!(
            topology = %config.topology,
            noise_rate = config.noise_rate,
            n_labels = labels.len(),
            seed,
            "positive noise rate flipped no labels"
        );
    }

    info!(
        topology = %config.topology,
        noise_rate = config.noise_rate,
        actual_noise_rate,
        seed,
        "Actual noise {:.2}",
        actual_noise_rate
    );

    Ok(NoisyLabels {
        labels: noisy,
        actual_noise_rate: Some(actual_noise_rate),
    })
}

fn resolve_seed(seed: Option<u64>) -> u64 {
    seed.unwrap_or_else(|| {
        let drawn: u64 = rand::rng().random();
        info!(seed = drawn, "no seed given, drew a fresh one");
        drawn
    })
}
