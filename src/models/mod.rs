//! Stochastic process models.

mod gbm;

pub use gbm::{Gbm, NumericDegeneracy};
