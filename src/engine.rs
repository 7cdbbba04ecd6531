//! Entry points for callers that work with model names.
//!
//! Both functions run against [`default_registry`], which holds the four
//! built-in models. Build a [`ModelRegistry`](crate::models::ModelRegistry)
//! directly to use a different model set.

use crate::core::{Forecast, Series};
use crate::error::Result;
use crate::models::default_registry;
use crate::utils::AccuracyMetrics;

/// Forecast `horizon` periods with the model registered as `model_name`.
///
/// # Errors
/// * [`ForecastError::UnknownModel`](crate::ForecastError::UnknownModel) if no
///   model has that name.
/// * [`ForecastError::InsufficientData`](crate::ForecastError::InsufficientData)
///   per the model's own data requirements.
/// * [`ForecastError::InvalidInput`](crate::ForecastError::InvalidInput) for a
///   zero horizon.
///
/// # Example
/// ```
/// use sales_forecast::core::Series;
///
/// let series = Series::from_values(vec![10.0, 20.0, 30.0, 40.0]).unwrap();
/// let forecast = sales_forecast::predict("Linear Regression", &series, 1).unwrap();
/// assert_eq!(forecast[0].value, 50.0);
/// assert_eq!(forecast[0].period, "Month 5");
/// ```
pub fn predict(model_name: &str, series: &Series, horizon: usize) -> Result<Vec<Forecast>> {
    default_registry().predict(model_name, series, horizon)
}

/// One-step holdout accuracy of the model registered as `model_name`.
///
/// Returns `Ok(None)` for series of three or fewer observations.
///
/// # Errors
/// * [`ForecastError::UnknownModel`](crate::ForecastError::UnknownModel) if no
///   model is registered under `model_name`.
/// * [`ForecastError::DegenerateMetrics`](crate::ForecastError::DegenerateMetrics) whenever the holdout runs: it holds
///   out a single value, which has zero variance, so every built-in model
///   fails this way for series of four or more observations.
/// * Any error the model's own `predict` returns on the training prefix.
///
/// # Example
/// ```
/// use sales_forecast::core::Series;
/// use sales_forecast::ForecastError;
///
/// let series = Series::from_values(vec![10.0, 20.0, 30.0]).unwrap();
/// assert_eq!(sales_forecast::evaluate_model("Moving Average", &series), Ok(None));
///
/// let longer = Series::from_values(vec![10.0, 20.0, 30.0, 40.0]).unwrap();
/// assert!(matches!(
///     sales_forecast::evaluate_model("Moving Average", &longer),
///     Err(ForecastError::DegenerateMetrics(_))
/// ));
/// assert!(matches!(
///     sales_forecast::evaluate_model("Nope", &longer),
///     Err(ForecastError::UnknownModel(_))
/// ));
/// ```
pub fn evaluate_model(model_name: &str, series: &Series) -> Result<Option<AccuracyMetrics>> {
    default_registry().evaluate_model(model_name, series)
}
