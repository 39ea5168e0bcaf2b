//! Monte Carlo simulation engine.

mod simulation;

pub use simulation::{RandomSource, SimulationGrid, simulate, simulate_cancellable};
