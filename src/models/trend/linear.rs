//! Linear trend forecasting model.

use crate::core::{period_label, Forecast, Series};
use crate::error::Result;
use crate::models::traits::{validate_confidence, validate_horizon};
use crate::models::Forecaster;
use crate::utils::{calculate_metrics, fit_line, AccuracyMetrics, LineFit};

/// Linear trend forecaster.
///
/// Fits `value = a + b * index` by ordinary least squares, treating the
/// 0-based position as the independent variable, and extrapolates the line.
/// Forecasts are floored at zero since sales cannot be negative.
///
/// # Example
/// ```
/// use sales_forecast::core::Series;
/// use sales_forecast::models::trend::LinearTrend;
/// use sales_forecast::models::Forecaster;
///
/// let series = Series::from_values(vec![10.0, 20.0, 30.0, 40.0]).unwrap();
/// let forecast = LinearTrend::default().predict(&series, 1).unwrap();
/// assert_eq!(forecast[0].value, 50.0);
/// assert_eq!(forecast[0].confidence, 0.8);
/// ```
#[derive(Debug, Clone)]
pub struct LinearTrend {
    confidence: f64,
}

impl LinearTrend {
    /// Confidence attached to every forecast.
    pub const DEFAULT_CONFIDENCE: f64 = 0.80;

    pub fn new() -> Self {
        Self {
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

    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    /// Fit the trend line without forecasting.
    pub fn fit(&self, series: &Series) -> Result<LineFit> {
        fit_line(series.values())
    }
}

impl Default for LinearTrend {
    fn default() -> Self {
        Self::new()
    }
}

impl Forecaster for LinearTrend {
    fn predict(&self, series: &Series, horizon: usize) -> Result<Vec<Forecast>> {
        validate_horizon(horizon)?;
        let line = self.fit(series)?;
        let n = series.len();

        Ok((1..=horizon)
            .map(|i| {
                let value = line.value_at((n + i - 1) as f64).max(0.0);
                Forecast::new(period_label(n + i), value, self.confidence)
            })
            .collect())
    }

    fn evaluate(&self, actual: &[f64], predicted: &[f64]) -> Result<AccuracyMetrics> {
        calculate_metrics(actual, predicted)
    }

    fn name(&self) -> &str {
        "Linear Regression"
    }

    fn description(&self) -> &str {
        "Simple linear trend analysis"
    }
}
