//! Sampling of noisy labels from a transition matrix.

use crate::error::{LabelNoiseError, Result};
use crate::transition::validate_transition_matrix;
use ndarray::{Array1, ArrayView1, ArrayView2};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Flip labels according to the transition matrix `matrix`.
///
/// Every label `y` is replaced by one draw from the categorical distribution
/// `matrix[y, :]`. Draws are independent across positions and come from a
/// generator seeded with `seed` that lives only for this call, so identical
/// inputs always give identical outputs.
///
/// # Errors
///
/// Returns [`LabelNoiseError::ValidationError`] if the matrix is not square,
/// non-negative and row-stochastic, if the label vector is empty, or if a
/// label has no matching row.
///
/// # Example
///
/// ```
/// use labelnoise::sampler::multiclass_noisify;
/// use ndarray::array;
///
/// let labels = array![0, 0, 0];
/// let always_flip = array![[0.0, 1.0], [1.0, 0.0]];
/// let noisy = multiclass_noisify(&labels.view(), &always_flip.view(), 0).unwrap();
/// assert_eq!(noisy, array![1_usize, 1, 1]);
/// ```
pub fn multiclass_noisify(
    labels: &ArrayView1<usize>,
    matrix: &ArrayView2<f64>,
    seed: u64,
) -> Result<Array1<usize>> {
    validate_transition_matrix(matrix)?;

    let max_label = labels
        .iter()
        .copied()
        .max()
        .ok_or_else(|| LabelNoiseError::ValidationError("label vector is empty".to_string()))?;
    if max_label >= matrix.nrows() {
        return Err(LabelNoiseError::ValidationError(format!(
            "label {max_label} has no row in a {n}x{n} transition matrix",
            n = matrix.nrows()
        )));
    }

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let noisy: Array1<usize> = labels
        .iter()
        .map(|&label| draw_class(&matrix.row(label), &mut rng))
        .collect();
    Ok(noisy)
}

/// Draw one class index from the categorical distribution `probs`.
///
/// Returns the first index whose cumulative probability exceeds a uniform
/// draw in `[0, 1)`. Zero-probability classes are never returned.
fn draw_class<R: Rng>(probs: &ArrayView1<f64>, rng: &mut R) -> usize {
    let u: f64 = rng.random_range(0.0..1.0);
    let mut cumulative = 0.0;
    let mut last_supported = 0;
    for (class, &p) in probs.iter().enumerate() {
        if p > 0.0 {
            last_supported = class;
        }
        cumulative += p;
        if cumulative > u {
            return class;
        }
    }
    // Row sums within tolerance of 1 can leave u above the final cumulative value.
    last_supported
}
