//! Simple Exponential Smoothing (SES) forecasting model.
//!
//! SES is suitable for forecasting data with no clear trend or seasonality.

use crate::core::{Forecast, Series};
use crate::error::{ForecastError, Result};
use crate::models::traits::{flat_forecasts, validate_confidence, validate_horizon};
use crate::models::Forecaster;
use crate::utils::{calculate_metrics, AccuracyMetrics};

/// Simple Exponential Smoothing forecaster.
///
/// The model equation is:
/// `level_t = α × y_t + (1-α) × level_{t-1}`, with `level_0 = y_0`.
///
/// The final level is the forecast for every period of the horizon; there is
/// no trend extrapolation.
///
/// # Example
/// ```
/// use sales_forecast::core::Series;
/// use sales_forecast::models::exponential::ExponentialSmoothing;
/// use sales_forecast::models::Forecaster;
///
/// let series = Series::from_values(vec![100.0, 200.0]).unwrap();
/// let forecast = ExponentialSmoothing::default().predict(&series, 1).unwrap();
/// assert!((forecast[0].value - 130.0).abs() < 1e-9);
/// assert_eq!(forecast[0].confidence, 0.75);
/// ```
#[derive(Debug, Clone)]
pub struct ExponentialSmoothing {
    /// Smoothing parameter (0 < alpha <= 1).
    alpha: f64,
    confidence: f64,
}

impl ExponentialSmoothing {
    pub const DEFAULT_ALPHA: f64 = 0.3;
    pub const DEFAULT_CONFIDENCE: f64 = 0.75;

    /// Create a new SES model with a fixed smoothing parameter.
    ///
    /// # Arguments
    /// * `alpha` - Smoothing parameter, must be finite and in `(0, 1]`
    pub fn new(alpha: f64) -> Result<Self> {
        if !(alpha > 0.0 && alpha <= 1.0) {
            return Err(ForecastError::InvalidInput(format!(
                "alpha must lie in (0, 1], got {}",
                alpha
            )));
        }
        Ok(Self {
            alpha,
            confidence: Self::DEFAULT_CONFIDENCE,
        })
    }

    /// Override the confidence label.
    ///
    /// Fails with [`ForecastError::InvalidInput`] unless `confidence` is a
    /// finite value in `[0, 1]`.
    pub fn with_confidence(mut self, confidence: f64) -> Result<Self> {
        self.confidence = validate_confidence(confidence)?;
        Ok(self)
    }

    /// Get the smoothing parameter.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    /// Final smoothed level of `values`, `NaN` for an empty slice.
    pub fn final_level(&self, values: &[f64]) -> f64 {
        let Some((&first, rest)) = values.split_first() else {
            return f64::NAN;
        };
        let mut level = first;
        for &y in rest {
            level = self.alpha * y + (1.0 - self.alpha) * level;
        }
        level
    }
}

impl Default for ExponentialSmoothing {
    fn default() -> Self {
        Self {
            alpha: Self::DEFAULT_ALPHA,
            confidence: Self::DEFAULT_CONFIDENCE,
        }
    }
}

impl Forecaster for ExponentialSmoothing {
    fn predict(&self, series: &Series, horizon: usize) -> Result<Vec<Forecast>> {
        validate_horizon(horizon)?;
        let level = self.final_level(series.values());
        Ok(flat_forecasts(series.len(), level, self.confidence, horizon))
    }

    fn evaluate(&self, actual: &[f64], predicted: &[f64]) -> Result<AccuracyMetrics> {
        calculate_metrics(actual, predicted)
    }

    fn name(&self) -> &str {
        "Exponential Smoothing"
    }

    fn description(&self) -> &str {
        "Weighted average with exponential decay"
    }
}
