//! Numerical kernels: normal transforms, seedable RNG streams, sample stats.

pub mod fast_norm;
pub mod fast_rng;
mod stats;

pub use fast_norm::{normal_inv_cdf, normal_pdf};
pub use fast_rng::{FastRng, FastRngKind, sample_standard_normal, stream_seed, uniform_open01};
pub use stats::{empirical_percentile, mean, sample_std};
