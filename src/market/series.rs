//! Historical close-price series, the calibration input.
//!
//! The series is validated once at construction (chronological dates,
//! strictly positive prices) and is read-only afterwards; calibration
//! re-checks the invariants defensively but never mutates it.

use chrono::{Days, NaiveDate};

use crate::core::SimulationError;

/// A single dated close observation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PricePoint {
    /// Observation date.
    pub date: NaiveDate,
    /// Close price. Strictly positive.
    pub price: f64,
}

/// Chronologically increasing sequence of strictly positive closes.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PriceSeries {
    points: Vec<PricePoint>,
}

impl PriceSeries {
    /// Builds a series from dated observations.
    ///
    /// Fails with [`SimulationError::InvalidInput`] when any price is
    /// non-positive or non-finite, or when dates are not strictly increasing.
    pub fn new(points: Vec<PricePoint>) -> Result<Self, SimulationError> {
        for point in &points {
            if !point.price.is_finite() || point.price <= 0.0 {
                return Err(SimulationError::InvalidInput(format!(
                    "price must be finite and > 0, got {} on {}",
                    point.price, point.date
                )));
            }
        }
        for pair in points.windows(2) {
            if pair[1].date <= pair[0].date {
                return Err(SimulationError::InvalidInput(format!(
                    "dates must be strictly increasing, got {} after {}",
                    pair[1].date, pair[0].date
                )));
            }
        }
        Ok(Self { points })
    }

    /// Builds a series from bare closes on synthetic consecutive dates.
    ///
    /// Convenience for callers that only track a close vector; the estimator
    /// never reads the dates.
    pub fn from_closes(closes: &[f64]) -> Result<Self, SimulationError> {
        let start = NaiveDate::default();
        let points = closes
            .iter()
            .enumerate()
            .map(|(i, &price)| PricePoint {
                date: start + Days::new(i as u64),
                price,
            })
            .collect();
        Self::new(points)
    }

    /// Number of observations.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Observations in chronological order.
    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    /// Close prices in chronological order.
    pub fn closes(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.price).collect()
    }

    /// Last (most recent) close, the simulation anchor.
    pub fn last_price(&self) -> Option<f64> {
        self.points.last().map(|p| p.price)
    }

    /// Log returns `ln(p[t] / p[t-1])` over adjacent observations.
    ///
    /// Length is `len() - 1`. Well-defined for any constructed series since
    /// construction enforces positive prices.
    pub fn log_returns(&self) -> Vec<f64> {
        self.points
            .windows(2)
            .map(|pair| (pair[1].price / pair[0].price).ln())
            .collect()
    }
}
