//! Simple moving average forecasting model.

use crate::core::{Forecast, Series};
use crate::error::Result;
use crate::models::traits::{flat_forecasts, validate_confidence, validate_horizon};
use crate::models::Forecaster;
use crate::utils::stats::mean;
use crate::utils::{calculate_metrics, AccuracyMetrics};

/// Moving average forecaster.
///
/// Predicts every future period as the mean of the last `window`
/// observations (or of the whole series when it is shorter). The window is
/// not rolled forward across the horizon.
///
/// # Example
/// ```
/// use sales_forecast::core::Series;
/// use sales_forecast::models::baseline::MovingAverage;
/// use sales_forecast::models::Forecaster;
///
/// let series = Series::from_values(vec![10.0, 20.0, 30.0]).unwrap();
/// let forecast = MovingAverage::default().predict(&series, 2).unwrap();
/// assert_eq!(forecast[0].value, 20.0);
/// assert_eq!(forecast[1].value, 20.0);
/// ```
#[derive(Debug, Clone)]
pub struct MovingAverage {
    window: usize,
    confidence: f64,
}

impl MovingAverage {
    pub const DEFAULT_WINDOW: usize = 3;
    pub const DEFAULT_CONFIDENCE: f64 = 0.70;

    /// Create a moving average over the last `window` observations.
    /// A zero window is treated as 1.
    pub fn new(window: usize) -> Self {
        Self {
            window: window.max(1),
            confidence: Self::DEFAULT_CONFIDENCE,
        }
    }

    /// Override the confidence label.
    ///
    /// Fails with [`ForecastError::InvalidInput`](crate::ForecastError::InvalidInput) unless `confidence` is a
    /// finite value in `[0, 1]`.
    pub fn with_confidence(mut self, confidence: f64) -> Result<Self> {
        self.confidence = validate_confidence(confidence)?;
        Ok(self)
    }

    /// Get the window size.
    pub fn window(&self) -> usize {
        self.window
    }

    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    /// Mean of the trailing window.
    pub fn trailing_mean(&self, values: &[f64]) -> f64 {
        let actual_window = self.window.min(values.len());
        mean(&values[values.len() - actual_window..])
    }
}

impl Default for MovingAverage {
    fn default() -> Self {
        Self::new(Self::DEFAULT_WINDOW)
    }
}

impl Forecaster for MovingAverage {
    fn predict(&self, series: &Series, horizon: usize) -> Result<Vec<Forecast>> {
        validate_horizon(horizon)?;
        let average = self.trailing_mean(series.values());
        Ok(flat_forecasts(
            series.len(),
            average,
            self.confidence,
            horizon,
        ))
    }

    fn evaluate(&self, actual: &[f64], predicted: &[f64]) -> Result<AccuracyMetrics> {
        calculate_metrics(actual, predicted)
    }

    fn name(&self) -> &str {
        "Moving Average"
    }

    fn description(&self) -> &str {
        "Average of recent periods"
    }
}
