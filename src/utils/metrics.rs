//! Accuracy metrics for forecast evaluation.
//!
//! One shared routine serves every model's `evaluate`.

use crate::error::{ForecastError, Result};
use crate::utils::stats::{sum_squared_deviations, sum_squared_errors};
use serde::{Deserialize, Serialize};

/// Accuracy metrics for evaluating forecast performance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccuracyMetrics {
    /// Mean Squared Error
    pub mse: f64,
    /// Root Mean Squared Error
    pub rmse: f64,
    /// Mean Absolute Error
    pub mae: f64,
    /// R-squared (coefficient of determination)
    pub r2: f64,
}

/// Calculate accuracy metrics between actual and predicted values.
///
/// # Errors
/// * [`ForecastError::InvalidInput`] if the slices are empty, differ in
///   length, or contain non-finite values.
/// * [`ForecastError::DegenerateMetrics`] if every actual value is identical,
///   leaving R² undefined.
///
/// # Example
/// ```
/// use sales_forecast::utils::calculate_metrics;
///
/// let m = calculate_metrics(&[10.0, 20.0], &[10.0, 20.0]).unwrap();
/// assert_eq!(m.mse, 0.0);
/// assert_eq!(m.r2, 1.0);
/// ```
pub fn calculate_metrics(actual: &[f64], predicted: &[f64]) -> Result<AccuracyMetrics> {
    if actual.is_empty() || predicted.is_empty() {
        return Err(ForecastError::InvalidInput(
            "metrics need at least one value".to_string(),
        ));
    }

    if actual.len() != predicted.len() {
        return Err(ForecastError::InvalidInput(format!(
            "length mismatch: {} actual vs {} predicted values",
            actual.len(),
            predicted.len()
        )));
    }

    if actual.iter().chain(predicted.iter()).any(|v| !v.is_finite()) {
        return Err(ForecastError::InvalidInput(
            "metrics inputs must be finite".to_string(),
        ));
    }

    let n = actual.len() as f64;

    let ss_res = sum_squared_errors(actual, predicted);
    let ss_tot = sum_squared_deviations(actual);
    // Identical values can still leave a tiny ss_tot through mean rounding.
    if actual.iter().all(|&a| a == actual[0]) || ss_tot == 0.0 {
        return Err(ForecastError::DegenerateMetrics(
            "actual values have zero variance, r2 is undefined".to_string(),
        ));
    }

    let mse = ss_res / n;
    let mae = actual
        .iter()
        .zip(predicted.iter())
        .map(|(a, p)| (a - p).abs())
        .sum::<f64>()
        / n;

    Ok(AccuracyMetrics {
        mse,
        rmse: mse.sqrt(),
        mae,
        r2: 1.0 - ss_res / ss_tot,
    })
}
