/// Trading days per calendar year, the standard equity annualization constant.
pub const TRADING_DAYS_PER_YEAR: u32 = 252;

/// Discretization of a projection horizon into daily simulation steps.
///
/// `time_steps` and `dt` are derived, not stored: the step count is the
/// horizon expressed in trading days (rounded), and `dt` is the year
/// fraction of one step.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeHorizonSpec {
    /// Projection horizon in calendar years. Must be positive and finite.
    pub horizon_years: f64,
    /// Annualization constant used to discretize the horizon.
    pub trading_days_per_year: u32,
}

impl TimeHorizonSpec {
    /// Horizon of `horizon_years` at the conventional 252 trading days.
    pub fn years(horizon_years: f64) -> Self {
        Self {
            horizon_years,
            trading_days_per_year: TRADING_DAYS_PER_YEAR,
        }
    }

    /// Overrides the annualization constant.
    pub fn with_trading_days(mut self, trading_days_per_year: u32) -> Self {
        self.trading_days_per_year = trading_days_per_year;
        self
    }

    /// Number of discrete time steps: `round(trading_days_per_year * horizon_years)`.
    pub fn time_steps(&self) -> usize {
        (f64::from(self.trading_days_per_year) * self.horizon_years).round() as usize
    }

    /// Step size in years: `horizon_years / time_steps`.
    pub fn dt(&self) -> f64 {
        self.horizon_years / self.time_steps() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_year_at_252_days_gives_252_steps() {
        let horizon = TimeHorizonSpec::years(1.0);
        assert_eq!(horizon.time_steps(), 252);
        assert!((horizon.dt() - 1.0 / 252.0).abs() < 1e-15);
    }

    #[test]
    fn half_year_rounds_to_126_steps() {
        let horizon = TimeHorizonSpec::years(0.5);
        assert_eq!(horizon.time_steps(), 126);
    }

    #[test]
    fn trading_day_override_is_respected() {
        let horizon = TimeHorizonSpec::years(1.0).with_trading_days(365);
        assert_eq!(horizon.time_steps(), 365);
    }
}
