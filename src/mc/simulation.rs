//! Monte Carlo path simulation for a calibrated GBM model.
//!
//! Each path is driven by its own deterministic RNG stream derived from the
//! base seed, so the grid is bit-for-bit reproducible for a given
//! [`RandomSource`] regardless of path evaluation order. That is also what
//! lets the `parallel` feature split paths across Rayon workers without
//! changing the output: columns are independent, only consecutive time
//! steps within a column depend on each other.
//!
//! References: Glasserman (2004) §3.2 for the exact GBM discretization,
//! Hull (11th ed.) Ch. 21 on Monte Carlo valuation.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::core::{SimulationError, TimeHorizonSpec};
use crate::math::fast_rng::{FastRng, FastRngKind, sample_standard_normal, stream_seed};
use crate::models::Gbm;

/// Deterministic entropy descriptor for one simulation run.
///
/// Path `i` draws from `FastRng::from_seed(kind, stream_seed(seed, i))`.
/// Two runs with equal sources, model, and shapes produce identical grids;
/// there is no process-global RNG state anywhere in the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RandomSource {
    /// Generator family used for every path stream.
    pub kind: FastRngKind,
    /// Base seed the per-path stream seeds are derived from.
    pub seed: u64,
}

impl RandomSource {
    /// Source with the default generator kind.
    pub fn seeded(seed: u64) -> Self {
        Self {
            kind: FastRngKind::default(),
            seed,
        }
    }

    /// Overrides the generator kind.
    pub fn with_kind(mut self, kind: FastRngKind) -> Self {
        self.kind = kind;
        self
    }

    fn path_stream(&self, path: usize) -> FastRng {
        FastRng::from_seed(self.kind, stream_seed(self.seed, path))
    }
}

/// Rectangular grid of simulated prices, `time_steps` rows by `num_paths`
/// columns.
///
/// Row 0 equals the model anchor `s0` in every column; every cell is
/// strictly positive by construction (each step multiplies by an
/// exponential). Storage is column-major: one contiguous slice per path.
/// Fully owned by the caller after [`simulate`] returns; the engine keeps
/// no state between runs.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationGrid {
    data: Vec<f64>,
    time_steps: usize,
    num_paths: usize,
}

impl SimulationGrid {
    fn zeroed(time_steps: usize, num_paths: usize) -> Self {
        Self {
            data: vec![0.0; time_steps * num_paths],
            time_steps,
            num_paths,
        }
    }

    /// Number of rows (discrete time steps, including the anchor row).
    pub fn time_steps(&self) -> usize {
        self.time_steps
    }

    /// Number of columns (independent paths).
    pub fn num_paths(&self) -> usize {
        self.num_paths
    }

    /// Price at time step `t` on path `path`.
    ///
    /// # Panics
    /// Panics when either index is out of bounds.
    #[inline]
    pub fn at(&self, t: usize, path: usize) -> f64 {
        assert!(t < self.time_steps && path < self.num_paths);
        self.data[path * self.time_steps + t]
    }

    /// One full path as a contiguous slice of length `time_steps`.
    pub fn path(&self, path: usize) -> &[f64] {
        let start = path * self.time_steps;
        &self.data[start..start + self.time_steps]
    }

    /// All paths' prices at time step `t` (gathered; storage is per-path).
    pub fn row(&self, t: usize) -> Vec<f64> {
        assert!(t < self.time_steps);
        (0..self.num_paths).map(|i| self.at(t, i)).collect()
    }

    /// Terminal prices, the last row across all paths.
    pub fn terminal_prices(&self) -> Vec<f64> {
        self.row(self.time_steps - 1)
    }
}

/// Simulates `num_paths` independent GBM price paths over `horizon`.
///
/// Row 0 of every column is exactly `model.s0` (the initial condition, not
/// a draw). Each subsequent row applies the exact log-space update with a
/// fresh standard-normal draw per `(step, path)` cell.
///
/// Fails with [`SimulationError::InvalidInput`] for `num_paths == 0`, a
/// non-positive or non-finite horizon, fewer than two derived time steps,
/// or invalid model parameters. `sigma == 0` and `mu == 0` are valid
/// degenerate markets, not errors.
///
/// # Examples
/// ```rust
/// use montecast::core::TimeHorizonSpec;
/// use montecast::mc::{RandomSource, simulate};
/// use montecast::models::Gbm;
///
/// let model = Gbm { s0: 100.0, mu: 0.05, sigma: 0.2 };
/// let grid = simulate(&model, &TimeHorizonSpec::years(1.0), 64, &RandomSource::seeded(42)).unwrap();
/// assert_eq!(grid.time_steps(), 252);
/// assert_eq!(grid.num_paths(), 64);
/// assert_eq!(grid.at(0, 17), 100.0);
/// ```
pub fn simulate(
    model: &Gbm,
    horizon: &TimeHorizonSpec,
    num_paths: usize,
    source: &RandomSource,
) -> Result<SimulationGrid, SimulationError> {
    run(model, horizon, num_paths, source, None)
}

/// [`simulate`] with cooperative cancellation.
///
/// The flag is checked once per time step on every path; when set, the run
/// aborts with [`SimulationError::Cancelled`] and no partial grid is
/// returned. Rows already computed are simply dropped — they are never
/// revised in place, so there is nothing to corrupt.
pub fn simulate_cancellable(
    model: &Gbm,
    horizon: &TimeHorizonSpec,
    num_paths: usize,
    source: &RandomSource,
    cancel: &AtomicBool,
) -> Result<SimulationGrid, SimulationError> {
    run(model, horizon, num_paths, source, Some(cancel))
}

fn run(
    model: &Gbm,
    horizon: &TimeHorizonSpec,
    num_paths: usize,
    source: &RandomSource,
    cancel: Option<&AtomicBool>,
) -> Result<SimulationGrid, SimulationError> {
    model.validate()?;
    if num_paths == 0 {
        return Err(SimulationError::InvalidInput(
            "num_paths must be >= 1".to_string(),
        ));
    }
    if !horizon.horizon_years.is_finite() || horizon.horizon_years <= 0.0 {
        return Err(SimulationError::InvalidInput(format!(
            "horizon must be finite and > 0 years, got {}",
            horizon.horizon_years
        )));
    }
    let time_steps = horizon.time_steps();
    if time_steps < 2 {
        return Err(SimulationError::InvalidInput(format!(
            "horizon of {} years at {} trading days/year yields {} time steps, need >= 2",
            horizon.horizon_years, horizon.trading_days_per_year, time_steps
        )));
    }

    let dt = horizon.horizon_years / time_steps as f64;
    let drift = (model.mu - 0.5 * model.sigma * model.sigma) * dt;
    let diffusion = model.sigma * dt.sqrt();
    let s0 = model.s0;

    let fill_path = |path_index: usize, column: &mut [f64]| -> Result<(), SimulationError> {
        let mut rng = source.path_stream(path_index);
        let mut s = s0;
        column[0] = s;
        for cell in column.iter_mut().skip(1) {
            if let Some(flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    return Err(SimulationError::Cancelled);
                }
            }
            let z = sample_standard_normal(&mut rng);
            s *= diffusion.mul_add(z, drift).exp();
            *cell = s;
        }
        Ok(())
    };

    let mut grid = SimulationGrid::zeroed(time_steps, num_paths);

    #[cfg(feature = "parallel")]
    grid.data
        .par_chunks_mut(time_steps)
        .enumerate()
        .try_for_each(|(i, column)| fill_path(i, column))?;

    #[cfg(not(feature = "parallel"))]
    for (i, column) in grid.data.chunks_mut(time_steps).enumerate() {
        fill_path(i, column)?;
    }

    Ok(grid)
}
