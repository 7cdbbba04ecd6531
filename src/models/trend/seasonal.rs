//! Seasonal trend forecasting model.

use crate::core::{Forecast, Series};
use crate::error::{ForecastError, Result};
use crate::models::traits::{validate_confidence, validate_horizon};
use crate::models::trend::LinearTrend;
use crate::models::Forecaster;
use crate::seasonality::SeasonalIndices;
use crate::utils::{calculate_metrics, AccuracyMetrics};

/// Linear trend scaled by ratio-to-mean seasonal indices.
///
/// With at least `period` observations, each trend forecast is multiplied by
/// the seasonal index of its phase. Shorter series fall back to the plain
/// linear trend. Every forecast carries this model's confidence, including
/// those produced by the fallback.
///
/// # Example
/// ```
/// use sales_forecast::core::Series;
/// use sales_forecast::models::trend::SeasonalTrend;
/// use sales_forecast::models::Forecaster;
///
/// let values: Vec<f64> = (0..24).map(|i| 100.0 + (i % 12) as f64).collect();
/// let series = Series::from_values(values).unwrap();
/// let forecast = SeasonalTrend::default().predict(&series, 12).unwrap();
/// assert_eq!(forecast.len(), 12);
/// assert!(forecast.iter().all(|f| f.confidence == 0.85));
/// ```
#[derive(Debug, Clone)]
pub struct SeasonalTrend {
    period: usize,
    confidence: f64,
    trend: LinearTrend,
}

impl SeasonalTrend {
    /// Monthly cycle.
    pub const DEFAULT_PERIOD: usize = 12;
    pub const DEFAULT_CONFIDENCE: f64 = 0.85;

    /// Create a model with the given seasonal period.
    pub fn new(period: usize) -> Result<Self> {
        if period == 0 {
            return Err(ForecastError::InvalidInput(
                "seasonal period must be positive".to_string(),
            ));
        }
        Ok(Self {
            period,
            confidence: Self::DEFAULT_CONFIDENCE,
            trend: LinearTrend::new(),
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

    pub fn period(&self) -> usize {
        self.period
    }

    pub fn confidence(&self) -> f64 {
        self.confidence
    }
}

impl Default for SeasonalTrend {
    fn default() -> Self {
        Self {
            period: Self::DEFAULT_PERIOD,
            confidence: Self::DEFAULT_CONFIDENCE,
            trend: LinearTrend::new(),
        }
    }
}

impl Forecaster for SeasonalTrend {
    fn predict(&self, series: &Series, horizon: usize) -> Result<Vec<Forecast>> {
        validate_horizon(horizon)?;
        let n = series.len();

        if n < self.period {
            let base = self.trend.predict(series, horizon)?;
            return Ok(base
                .into_iter()
                .map(|f| Forecast {
                    confidence: self.confidence,
                    ..f
                })
                .collect());
        }

        let indices = SeasonalIndices::ratio_to_mean(series.values(), self.period)?;
        let base = self.trend.predict(series, horizon)?;

        Ok(base
            .into_iter()
            .enumerate()
            .map(|(i, f)| Forecast {
                value: f.value * indices.at(n + i),
                confidence: self.confidence,
                ..f
            })
            .collect())
    }

    fn evaluate(&self, actual: &[f64], predicted: &[f64]) -> Result<AccuracyMetrics> {
        calculate_metrics(actual, predicted)
    }

    fn name(&self) -> &str {
        "Seasonal Trend"
    }

    fn description(&self) -> &str {
        "Accounts for seasonal patterns"
    }
}
