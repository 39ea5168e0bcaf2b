//! Terminal-price summary statistics over a simulated grid's last row.
//!
//! VaR here is the anchor-relative loss at the lower tail of the terminal
//! distribution: `VaR(c) = s0 - percentile(terminal, 1 - c)`. It can be
//! negative when even the `(1 - c)` percentile sits above the anchor, i.e.
//! the tail still gains. The percentile uses linear interpolation between
//! closest ranks (see [`empirical_percentile`]), which materially affects
//! the figure for small path counts and is therefore pinned down rather
//! than left to the implementation.

use crate::math::{empirical_percentile, mean};

/// Derived scalars over the terminal prices of one simulation run.
///
/// Formatting, currency symbols, and presentation belong to the caller.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TerminalSummary {
    /// Worst terminal outcome.
    pub min: f64,
    /// Best terminal outcome.
    pub max: f64,
    /// Average terminal outcome.
    pub mean: f64,
    /// Value-at-Risk at the requested confidence level.
    pub value_at_risk: f64,
}

/// Value-at-Risk of the terminal distribution relative to the anchor price.
///
/// # Examples
/// ```rust
/// use montecast::risk::value_at_risk;
///
/// let terminal = [90.0, 95.0, 100.0, 104.0, 110.0, 121.0];
/// let var_95 = value_at_risk(&terminal, 100.0, 0.95);
/// assert!(var_95 > 0.0);
/// ```
///
/// # Panics
/// Panics when `terminal_prices` is empty or `confidence` is outside `(0, 1)`.
pub fn value_at_risk(terminal_prices: &[f64], s0: f64, confidence: f64) -> f64 {
    validate_inputs(terminal_prices, confidence);
    let mut sample = terminal_prices.to_vec();
    s0 - empirical_percentile(&mut sample, 1.0 - confidence)
}

/// Min/max/mean/VaR over the terminal prices.
///
/// # Panics
/// Panics when `terminal_prices` is empty or `confidence` is outside `(0, 1)`.
pub fn summarize_terminal(terminal_prices: &[f64], s0: f64, confidence: f64) -> TerminalSummary {
    validate_inputs(terminal_prices, confidence);
    TerminalSummary {
        min: terminal_prices.iter().copied().fold(f64::INFINITY, f64::min),
        max: terminal_prices
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max),
        mean: mean(terminal_prices),
        value_at_risk: value_at_risk(terminal_prices, s0, confidence),
    }
}

fn validate_inputs(terminal_prices: &[f64], confidence: f64) {
    assert!(!terminal_prices.is_empty(), "terminal prices must not be empty");
    assert!(
        confidence > 0.0 && confidence < 1.0,
        "confidence must be in (0,1)"
    );
}
