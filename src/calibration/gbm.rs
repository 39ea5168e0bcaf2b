//! GBM parameter estimation from a historical close series.
//!
//! Drift and volatility come from the sample moments of daily log returns,
//! annualized by linear scaling for the drift and the square-root-of-time
//! rule for the volatility (valid under GBM's independent-increments
//! assumption). This is deliberately the coarse textbook estimator, with no
//! small-sample bias correction or stationarity adjustment, so that output
//! is comparable with the common spreadsheet/pandas workflow.

use crate::core::{SimulationError, TRADING_DAYS_PER_YEAR};
use crate::market::PriceSeries;
use crate::math::{mean, sample_std};
use crate::models::Gbm;

/// Estimates GBM parameters at the conventional 252 trading days per year.
///
/// Stateless and deterministic: the same series always yields the same
/// parameters, and the series is only read.
///
/// # Examples
/// ```rust
/// use montecast::calibration::estimate_gbm;
/// use montecast::market::PriceSeries;
///
/// let series = PriceSeries::from_closes(&[100.0, 102.0, 101.0, 105.0, 103.0]).unwrap();
/// let model = estimate_gbm(&series).unwrap();
/// assert_eq!(model.s0, 103.0);
/// assert!(model.mu.is_finite());
/// assert!(model.sigma >= 0.0);
/// ```
pub fn estimate_gbm(series: &PriceSeries) -> Result<Gbm, SimulationError> {
    estimate_gbm_with(series, TRADING_DAYS_PER_YEAR)
}

/// Estimates GBM parameters under an explicit annualization constant.
///
/// Fails with [`SimulationError::InvalidInput`] when the series has fewer
/// than two observations (one return needs two prices) or contains a
/// non-positive price. Positivity is re-checked here even though
/// [`PriceSeries`] construction already enforces it.
///
/// Volatility uses the sample (N-1) standard deviation; a two-observation
/// series therefore estimates `sigma = 0`.
pub fn estimate_gbm_with(
    series: &PriceSeries,
    trading_days_per_year: u32,
) -> Result<Gbm, SimulationError> {
    if series.len() < 2 {
        return Err(SimulationError::InvalidInput(format!(
            "price series needs at least 2 observations, got {}",
            series.len()
        )));
    }
    if let Some(bad) = series
        .points()
        .iter()
        .find(|p| !p.price.is_finite() || p.price <= 0.0)
    {
        return Err(SimulationError::InvalidInput(format!(
            "price must be finite and > 0 for log returns, got {} on {}",
            bad.price, bad.date
        )));
    }

    let returns = series.log_returns();
    let days = f64::from(trading_days_per_year);
    let mu = mean(&returns) * days;
    let sigma = sample_std(&returns) * days.sqrt();
    let s0 = series
        .last_price()
        .ok_or_else(|| SimulationError::InvalidInput("price series is empty".to_string()))?;

    Ok(Gbm { s0, mu, sigma })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_series() -> PriceSeries {
        PriceSeries::from_closes(&[100.0, 102.0, 101.0, 105.0, 103.0]).unwrap()
    }

    #[test]
    fn anchor_is_last_observed_price() {
        let model = estimate_gbm(&reference_series()).unwrap();
        assert_eq!(model.s0, 103.0);
    }

    #[test]
    fn moments_match_annualized_log_return_sample() {
        let series = reference_series();
        let model = estimate_gbm(&series).unwrap();

        let returns: Vec<f64> = [102.0 / 100.0, 101.0 / 102.0, 105.0 / 101.0, 103.0 / 105.0]
            .iter()
            .map(|r: &f64| r.ln())
            .collect();
        let daily_mean = returns.iter().sum::<f64>() / 4.0;
        let daily_var = returns.iter().map(|r| (r - daily_mean).powi(2)).sum::<f64>() / 3.0;

        assert!((model.mu - daily_mean * 252.0).abs() < 1e-12);
        assert!((model.sigma - daily_var.sqrt() * 252.0_f64.sqrt()).abs() < 1e-12);
        assert!(model.sigma >= 0.0);
    }

    #[test]
    fn single_observation_is_rejected() {
        let series = PriceSeries::from_closes(&[100.0]).unwrap();
        let err = estimate_gbm(&series).unwrap_err();
        assert!(matches!(err, SimulationError::InvalidInput(_)));
    }

    #[test]
    fn empty_series_is_rejected() {
        let series = PriceSeries::from_closes(&[]).unwrap();
        assert!(estimate_gbm(&series).is_err());
    }

    #[test]
    fn two_point_series_has_zero_volatility() {
        let series = PriceSeries::from_closes(&[100.0, 110.0]).unwrap();
        let model = estimate_gbm(&series).unwrap();
        assert_eq!(model.sigma, 0.0);
        assert!((model.mu - (110.0_f64 / 100.0).ln() * 252.0).abs() < 1e-12);
    }

    #[test]
    fn constant_series_has_zero_drift_and_vol() {
        let series = PriceSeries::from_closes(&[50.0, 50.0, 50.0, 50.0]).unwrap();
        let model = estimate_gbm(&series).unwrap();
        assert_eq!(model.mu, 0.0);
        assert_eq!(model.sigma, 0.0);
    }

    #[test]
    fn annualization_constant_scales_moments() {
        let series = reference_series();
        let daily = estimate_gbm_with(&series, 1).unwrap();
        let annual = estimate_gbm_with(&series, 252).unwrap();
        assert!((annual.mu - daily.mu * 252.0).abs() < 1e-12);
        assert!((annual.sigma - daily.sigma * 252.0_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn estimation_is_idempotent() {
        let series = reference_series();
        let a = estimate_gbm(&series).unwrap();
        let b = estimate_gbm(&series).unwrap();
        assert_eq!(a, b);
    }
}
