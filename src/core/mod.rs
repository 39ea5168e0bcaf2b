//! Shared domain types and library-wide error structures.

mod error;
mod types;

pub use error::SimulationError;
pub use types::{TRADING_DAYS_PER_YEAR, TimeHorizonSpec};
