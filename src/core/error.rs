/// Errors surfaced by the calibration and simulation entry points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimulationError {
    /// Input validation error: short price series, non-positive price,
    /// zero paths, degenerate horizon.
    InvalidInput(String),
    /// Numerical issue (non-finite intermediate, invalid state).
    NumericalError(String),
    /// Cooperative cancellation observed between time steps.
    Cancelled,
}

impl std::fmt::Display for SimulationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            Self::NumericalError(msg) => write!(f, "numerical error: {msg}"),
            Self::Cancelled => write!(f, "simulation cancelled"),
        }
    }
}

impl std::error::Error for SimulationError {}
