//! # labelnoise
//!
//! Label-noise injection for classification datasets.
//!
//! Given a vector of ground-truth class labels, this crate builds a
//! row-stochastic class-transition matrix for a noise topology and resamples
//! every label from its row, returning the noisy labels together with the
//! realized noise rate. Sampling is seeded and call-local, so the same labels,
//! configuration and seed always give the same output.
//!
//! ## Topologies
//!
//! - `pairflip` - class `i` is mistaken only for class `(i + 1) mod C`.
//! - `symmetric` - class `i` is mistaken uniformly for every other class.
//!
//! ## Features
//!
//! - `download` - Enable [`datasets::fetch`] (blocking HTTP download)
//! - `cli` - Build the `labelnoise` command-line binary (default)
//! - `full` - Enable everything
//!
//! ## Example
//!
//! ```
//! use labelnoise::prelude::*;
//! use ndarray::Array1;
//!
//! let labels: Array1<usize> = (0..100).map(|i| i % 3).collect();
//! let noisy = noisify(3, &labels.view(), "pairflip", 0.5, Some(42)).unwrap();
//!
//! assert_eq!(noisy.labels.len(), labels.len());
//! assert!(noisy.actual_noise_rate.unwrap() > 0.0);
//! ```

pub mod config;
pub mod datasets;
pub mod error;
pub mod noisify;
pub mod sampler;
pub mod transition;
pub mod types;
pub mod utils;

pub mod prelude {
    //! Convenient re-exports of commonly used types.
    pub use crate::config::{NoiseConfig, NoiseTopology};
    pub use crate::error::{LabelNoiseError, Result};
    pub use crate::noisify::{
        inject_noise, noisify, noisify_multiclass_symmetric, noisify_pairflip,
        realized_noise_rate,
    };
    pub use crate::sampler::multiclass_noisify;
    pub use crate::transition::{build_transition_matrix, pairflip_matrix, symmetric_matrix};
    pub use crate::types::NoisyLabels;
}
