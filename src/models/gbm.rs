//! Geometric Brownian Motion parameter set.
//!
//! Under GBM the log price follows a normal random walk with constant drift
//! and volatility; the exact per-step update in log space keeps every
//! simulated price strictly positive regardless of step size, unlike an
//! additive Euler step. See Hull (11th ed.) Ch. 14 and Glasserman (2004)
//! §3.2 for the discretization.

use crate::core::SimulationError;

/// Calibrated GBM parameters for one asset.
///
/// Immutable by convention once estimated: the simulator reads it and never
/// writes back.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Gbm {
    /// Anchor price (last observed close). Strictly positive.
    pub s0: f64,
    /// Annualized drift of log returns. Sign-unrestricted.
    pub mu: f64,
    /// Annualized volatility. Non-negative; zero degenerates to
    /// deterministic compounding, which is valid.
    pub sigma: f64,
}

/// Advisory flag for parameter sets callers often do not expect.
///
/// Neither case is an error: a zero-volatility or zero-drift market is a
/// valid degenerate input, this probe just makes it observable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericDegeneracy {
    /// `sigma == 0`: every path collapses to `s0 * exp(mu * t)`.
    ZeroVolatility,
    /// `mu == 0`: paths wander with no expected growth.
    ZeroDrift,
}

impl Gbm {
    /// Validated constructor; same invariants as [`Gbm::validate`].
    pub fn new(s0: f64, mu: f64, sigma: f64) -> Result<Self, SimulationError> {
        let model = Self { s0, mu, sigma };
        model.validate()?;
        Ok(model)
    }

    /// Checks the parameter invariants: `s0 > 0` and finite, `mu` finite,
    /// `sigma >= 0` and finite.
    pub fn validate(&self) -> Result<(), SimulationError> {
        if !self.s0.is_finite() || self.s0 <= 0.0 {
            return Err(SimulationError::InvalidInput(format!(
                "anchor price must be finite and > 0, got {}",
                self.s0
            )));
        }
        if !self.mu.is_finite() {
            return Err(SimulationError::InvalidInput(format!(
                "drift must be finite, got {}",
                self.mu
            )));
        }
        if !self.sigma.is_finite() || self.sigma < 0.0 {
            return Err(SimulationError::InvalidInput(format!(
                "volatility must be finite and >= 0, got {}",
                self.sigma
            )));
        }
        Ok(())
    }

    /// Exact log-space step over `dt` years with standard-normal draw `z`:
    /// `s * exp((mu - sigma^2 / 2) * dt + sigma * sqrt(dt) * z)`.
    ///
    /// The `-sigma^2/2` term is the Ito correction aligning the discrete
    /// arithmetic mean with the continuous growth rate implied by `mu`;
    /// dropping it biases every path upward.
    #[inline]
    pub fn step_exact(&self, s: f64, dt: f64, z: f64) -> f64 {
        s * ((self.mu - 0.5 * self.sigma * self.sigma) * dt + self.sigma * dt.sqrt() * z).exp()
    }

    /// Reports a degenerate parameter set, if any. Zero volatility wins when
    /// both drift and volatility are zero.
    pub fn degeneracy(&self) -> Option<NumericDegeneracy> {
        if self.sigma == 0.0 {
            Some(NumericDegeneracy::ZeroVolatility)
        } else if self.mu == 0.0 {
            Some(NumericDegeneracy::ZeroDrift)
        } else {
            None
        }
    }
}
