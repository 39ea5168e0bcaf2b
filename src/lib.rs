//! Montecast calibrates a Geometric Brownian Motion model from a historical
//! price series and projects a distribution of future price paths by Monte
//! Carlo, plus the terminal risk summary (best/worst/average case,
//! Value-at-Risk) derived from those paths.
//!
//! The crate is a library-style computation with no I/O: market-data
//! retrieval, charting, and CLI concerns live in the surrounding
//! application. Data flows in one direction:
//!
//! `PriceSeries` → [`calibration::estimate_gbm`] → [`models::Gbm`] →
//! [`mc::simulate`] → [`mc::SimulationGrid`] → [`risk::summarize_terminal`].
//!
//! References:
//! - Hull, *Options, Futures, and Other Derivatives* (11th ed.), Ch. 14 and 21.
//! - Glasserman, *Monte Carlo Methods in Financial Engineering* (2004), §3.2.
//!
//! Numerical considerations:
//! - Paths use the exact log-space GBM step, so every simulated price is
//!   strictly positive at any step size; the Ito correction term keeps the
//!   discrete mean consistent with the continuous growth rate.
//! - Drift/volatility estimation keeps the coarse daily-sample-moment
//!   annualization (linear for drift, sqrt-time for volatility) on purpose:
//!   output stays comparable with the common pandas workflow.
//! - Randomness is an explicit per-run [`mc::RandomSource`]; equal seeds
//!   give bit-identical grids, and nothing in the crate touches a global
//!   generator.
//!
//! # Feature Flags
//! - `parallel`: Rayon-parallel path generation (identical output, columns
//!   are independent).
//! - `serde`: serde derives on the public value types.
//!
//! # Quick Start
//! ```rust
//! use montecast::prelude::*;
//!
//! let series = PriceSeries::from_closes(&[100.0, 102.0, 101.0, 105.0, 103.0])?;
//! let model = estimate_gbm(&series)?;
//! assert_eq!(model.s0, 103.0);
//!
//! let horizon = TimeHorizonSpec::years(1.0);
//! let grid = simulate(&model, &horizon, 500, &RandomSource::seeded(42))?;
//! assert_eq!(grid.time_steps(), 252);
//!
//! let summary = summarize_terminal(&grid.terminal_prices(), model.s0, 0.95);
//! assert!(summary.min <= summary.mean && summary.mean <= summary.max);
//! # Ok::<(), montecast::core::SimulationError>(())
//! ```

pub mod calibration;
pub mod core;
pub mod market;
pub mod math;
pub mod mc;
pub mod models;
pub mod risk;

/// Common imports for ergonomic usage.
pub mod prelude {
    pub use crate::calibration::{estimate_gbm, estimate_gbm_with};
    pub use crate::core::{SimulationError, TRADING_DAYS_PER_YEAR, TimeHorizonSpec};
    pub use crate::market::{PricePoint, PriceSeries};
    pub use crate::math::FastRngKind;
    pub use crate::mc::{RandomSource, SimulationGrid, simulate, simulate_cancellable};
    pub use crate::models::{Gbm, NumericDegeneracy};
    pub use crate::risk::{TerminalSummary, summarize_terminal, value_at_risk};
}
