//! Model calibration from historical market data.

mod gbm;

pub use gbm::{estimate_gbm, estimate_gbm_with};
