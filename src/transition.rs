//! Transition matrix construction and validation.
//!
//! A transition matrix `T` is a `C x C` row-stochastic matrix where
//! `T[i, j] = P(observed class j | true class i)`.

use crate::config::{NoiseTopology, check_noise_params};
use crate::error::{LabelNoiseError, Result};
use ndarray::{Array2, ArrayView2, Axis};

/// Maximum deviation of a row sum from 1.0 accepted by
/// [`validate_transition_matrix`].
pub const ROW_SUM_TOLERANCE: f64 = 1e-6;

/// Build the transition matrix for the given topology.
pub fn build_transition_matrix(
    topology: NoiseTopology,
    nb_classes: usize,
    noise_rate: f64,
) -> Result<Array2<f64>> {
    let matrix = match topology {
        NoiseTopology::Pairflip => pairflip_matrix(nb_classes, noise_rate)?,
        NoiseTopology::Symmetric => symmetric_matrix(nb_classes, noise_rate)?,
    };
    tracing::debug!(%topology, nb_classes, noise_rate, ?matrix, "built transition matrix");
    Ok(matrix)
}

/// Pair-flip transition matrix.
///
/// Class `i` keeps its label with probability `1 - noise_rate` and is flipped to
/// `(i + 1) mod nb_classes` with probability `noise_rate`. A zero noise rate
/// yields the identity.
///
/// # Errors
///
/// Returns [`LabelNoiseError::InvalidConfiguration`] if `nb_classes < 2` or
/// `noise_rate` is outside `[0, 1]`.
pub fn pairflip_matrix(nb_classes: usize, noise_rate: f64) -> Result<Array2<f64>> {
    check_noise_params(nb_classes, noise_rate)?;
    let mut matrix = Array2::eye(nb_classes);
    if noise_rate > 0.0 {
        for i in 0..nb_classes {
            matrix[[i, i]] = 1.0 - noise_rate;
            matrix[[i, (i + 1) % nb_classes]] = noise_rate;
        }
    }
    Ok(matrix)
}

/// Symmetric transition matrix.
///
/// Class `i` keeps its label with probability `1 - noise_rate` and moves to each
/// of the other `nb_classes - 1` classes with probability
/// `noise_rate / (nb_classes - 1)`.
///
/// # Errors
///
/// Returns [`LabelNoiseError::InvalidConfiguration`] if `nb_classes < 2` or
/// `noise_rate` is outside `[0, 1]`.
pub fn symmetric_matrix(nb_classes: usize, noise_rate: f64) -> Result<Array2<f64>> {
    check_noise_params(nb_classes, noise_rate)?;
    let off_diagonal = noise_rate / (nb_classes - 1) as f64;
    let mut matrix = Array2::from_elem((nb_classes, nb_classes), off_diagonal);
    matrix.diag_mut().fill(1.0 - noise_rate);
    Ok(matrix)
}

/// Check that `matrix` is square, non-negative and row-stochastic.
///
/// # Errors
///
/// Returns [`LabelNoiseError::ValidationError`] describing the first violated
/// condition.
pub fn validate_transition_matrix(matrix: &ArrayView2<f64>) -> Result<()> {
    let (rows, cols) = matrix.dim();
    if rows != cols {
        return Err(LabelNoiseError::ValidationError(format!(
            "transition matrix must be square, got {rows}x{cols}"
        )));
    }
    if rows == 0 {
        return Err(LabelNoiseError::ValidationError(
            "transition matrix is empty".to_string(),
        ));
    }
    if let Some(((i, j), &value)) = matrix
        .indexed_iter()
        .find(|(_, v)| !v.is_finite() || **v < 0.0)
    {
        return Err(LabelNoiseError::ValidationError(format!(
            "transition matrix entry [{i}, {j}] = {value} is not a probability"
        )));
    }
    for (i, row_sum) in matrix.sum_axis(Axis(1)).iter().enumerate() {
        if (row_sum - 1.0).abs() > ROW_SUM_TOLERANCE {
            return Err(LabelNoiseError::ValidationError(format!(
                "row {i} of the transition matrix sums to {row_sum}, expected 1"
            )));
        }
    }
    Ok(())
}
