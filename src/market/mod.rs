//! Market-data input types consumed by calibration.

mod series;

pub use series::{PricePoint, PriceSeries};
