//! Forecaster trait defining the common interface for all models.

use crate::core::{period_label, Forecast, Series};
use crate::error::{ForecastError, Result};
use crate::utils::AccuracyMetrics;

/// Common interface for all forecasting models.
///
/// Implementations are stateless: `predict` reads the series it is handed and
/// keeps nothing between calls, so one instance can serve concurrent callers.
/// This trait is object-safe and can be used with `Box<dyn Forecaster>`.
pub trait Forecaster: Send + Sync {
    /// Forecast `horizon` periods past the end of `series`.
    fn predict(&self, series: &Series, horizon: usize) -> Result<Vec<Forecast>>;

    /// Score predictions against actual values.
    fn evaluate(&self, actual: &[f64], predicted: &[f64]) -> Result<AccuracyMetrics>;

    /// Get the model name. Unique within a registry.
    fn name(&self) -> &str;

    /// Short human-readable description.
    fn description(&self) -> &str;
}

/// Type alias for boxed forecaster trait objects.
///
/// # Example
///
/// ```
/// use sales_forecast::models::{BoxedForecaster, Forecaster};
/// use sales_forecast::models::baseline::MovingAverage;
///
/// let model: BoxedForecaster = Box::new(MovingAverage::default());
/// assert_eq!(model.name(), "Moving Average");
/// ```
pub type BoxedForecaster = Box<dyn Forecaster>;

pub(crate) fn validate_horizon(horizon: usize) -> Result<()> {
    if horizon == 0 {
        return Err(ForecastError::InvalidInput(
            "horizon must be at least 1".to_string(),
        ));
    }
    Ok(())
}

/// Accept only finite confidence labels within `[0, 1]`.
pub(crate) fn validate_confidence(confidence: f64) -> Result<f64> {
    if !(0.0..=1.0).contains(&confidence) {
        return Err(ForecastError::InvalidInput(format!(
            "confidence must lie in [0, 1], got {}",
            confidence
        )));
    }
    Ok(confidence)
}

/// Same value for every period of the horizon.
pub(crate) fn flat_forecasts(
    series_len: usize,
    value: f64,
    confidence: f64,
    horizon: usize,
) -> Vec<Forecast> {
    (1..=horizon)
        .map(|i| Forecast::new(period_label(series_len + i), value, confidence))
        .collect()
}
