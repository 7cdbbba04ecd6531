//! One-step holdout evaluation.
//!
//! The last observation is held out, the model forecasts one period from the
//! remaining prefix, and the single prediction is scored with the model's own
//! `evaluate`. This is a single split, not k-fold or rolling-origin
//! cross-validation.

use crate::core::Series;
use crate::error::{ForecastError, Result};
use crate::models::Forecaster;
use crate::utils::metrics::AccuracyMetrics;

/// Policy for when holdout evaluation runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HoldoutConfig {
    /// Smallest series length that is evaluated. Shorter series are skipped.
    pub min_observations: usize,
}

impl Default for HoldoutConfig {
    fn default() -> Self {
        Self {
            min_observations: 4,
        }
    }
}

impl HoldoutConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum series length. Values below 2 are raised to 2 so the
    /// training prefix is never empty.
    pub fn with_min_observations(mut self, min_observations: usize) -> Self {
        self.min_observations = min_observations.max(2);
        self
    }
}

/// Outcome of a single holdout split.
#[derive(Debug, Clone, PartialEq)]
pub struct HoldoutResult {
    /// Metrics from the model's `evaluate`.
    pub metrics: AccuracyMetrics,
    /// Held-out actual value.
    pub actual: f64,
    /// One-step-ahead prediction for the held-out period.
    pub predicted: f64,
    /// Length of the training prefix.
    pub train_len: usize,
}

/// Score `model` on the final observation of `series`.
///
/// Returns `Ok(None)` when the series is shorter than
/// `config.min_observations`. Any failure from the model's `predict` or
/// `evaluate` is returned unchanged.
///
/// # Example
/// ```
/// use sales_forecast::core::Series;
/// use sales_forecast::models::baseline::MovingAverage;
/// use sales_forecast::utils::evaluation::{evaluate_holdout, HoldoutConfig};
///
/// let short = Series::from_values(vec![1.0, 2.0, 3.0]).unwrap();
/// let result = evaluate_holdout(&MovingAverage::default(), &short, &HoldoutConfig::default());
/// assert_eq!(result, Ok(None));
/// ```
pub fn evaluate_holdout<F>(
    model: &F,
    series: &Series,
    config: &HoldoutConfig,
) -> Result<Option<HoldoutResult>>
where
    F: Forecaster + ?Sized,
{
    let n = series.len();
    if n < config.min_observations.max(2) {
        tracing::debug!(
            model = model.name(),
            observations = n,
            min = config.min_observations,
            "series too short, skipping holdout evaluation"
        );
        return Ok(None);
    }

    let train = series.slice(0, n - 1)?;
    let actual = series.last().value();

    let forecasts = model.predict(&train, 1)?;
    let predicted = match forecasts.as_slice() {
        [single] => single.value,
        other => {
            return Err(ForecastError::InvalidInput(format!(
                "model {} returned {} forecasts for a one-period horizon",
                model.name(),
                other.len()
            )))
        }
    };

    tracing::debug!(
        model = model.name(),
        train_len = n - 1,
        actual,
        predicted,
        "holdout split evaluated"
    );

    let metrics = model.evaluate(&[actual], &[predicted])?;
    Ok(Some(HoldoutResult {
        metrics,
        actual,
        predicted,
        train_len: n - 1,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Forecast;
    use crate::models::baseline::MovingAverage;
    use crate::models::trend::LinearTrend;
    use std::sync::Mutex;

    /// Records what it is asked and returns fixed answers.
    struct Recorder {
        predict_calls: Mutex<Vec<(Vec<f64>, usize)>>,
        evaluate_calls: Mutex<Vec<(Vec<f64>, Vec<f64>)>>,
        forecasts: usize,
    }

    impl Recorder {
        fn new(forecasts: usize) -> Self {
            Self {
                predict_calls: Mutex::new(Vec::new()),
                evaluate_calls: Mutex::new(Vec::new()),
                forecasts,
            }
        }
    }

    impl Forecaster for Recorder {
        fn predict(&self, series: &Series, horizon: usize) -> Result<Vec<Forecast>> {
            self.predict_calls
                .lock()
                .unwrap()
                .push((series.values().to_vec(), horizon));
            Ok((0..self.forecasts)
                .map(|_| Forecast::new("next", 7.0, 0.5))
                .collect())
        }

        fn evaluate(&self, actual: &[f64], predicted: &[f64]) -> Result<AccuracyMetrics> {
            self.evaluate_calls
                .lock()
                .unwrap()
                .push((actual.to_vec(), predicted.to_vec()));
            Ok(AccuracyMetrics {
                mse: 1.0,
                rmse: 1.0,
                mae: 1.0,
                r2: 0.0,
            })
        }

        fn name(&self) -> &str {
            "Recorder"
        }

        fn description(&self) -> &str {
            "test double"
        }
    }

    #[test]
    fn three_observations_are_skipped() {
        let model = Recorder::new(1);
        let series = Series::from_values(vec![1.0, 2.0, 3.0]).unwrap();
        let result = evaluate_holdout(&model, &series, &HoldoutConfig::default()).unwrap();

        assert!(result.is_none());
        assert!(model.predict_calls.lock().unwrap().is_empty());
        assert!(model.evaluate_calls.lock().unwrap().is_empty());
    }

    #[test]
    fn four_observations_make_exactly_one_split() {
        let model = Recorder::new(1);
        let series = Series::from_values(vec![1.0, 2.0, 3.0, 9.0]).unwrap();
        let result = evaluate_holdout(&model, &series, &HoldoutConfig::default())
            .unwrap()
            .unwrap();

        let predicts = model.predict_calls.lock().unwrap();
        assert_eq!(predicts.len(), 1);
        assert_eq!(predicts[0], (vec![1.0, 2.0, 3.0], 1));

        let evaluates = model.evaluate_calls.lock().unwrap();
        assert_eq!(evaluates.len(), 1);
        assert_eq!(evaluates[0], (vec![9.0], vec![7.0]));

        assert_eq!(result.actual, 9.0);
        assert_eq!(result.predicted, 7.0);
        assert_eq!(result.train_len, 3);
    }

    #[test]
    fn wrong_forecast_count_is_invalid() {
        let model = Recorder::new(2);
        let series = Series::from_values(vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        assert!(matches!(
            evaluate_holdout(&model, &series, &HoldoutConfig::default()),
            Err(ForecastError::InvalidInput(_))
        ));
    }

    #[test]
    fn single_holdout_is_degenerate_for_shared_metrics() {
        // One actual value has zero variance, so r2 is undefined.
        let series = Series::from_values(vec![10.0, 20.0, 30.0, 45.0]).unwrap();
        let result = evaluate_holdout(&LinearTrend::new(), &series, &HoldoutConfig::default());
        assert!(matches!(result, Err(ForecastError::DegenerateMetrics(_))));
    }

    #[test]
    fn min_observations_is_configurable() {
        let config = HoldoutConfig::new().with_min_observations(2);
        let model = Recorder::new(1);
        let series = Series::from_values(vec![1.0, 2.0]).unwrap();
        assert!(evaluate_holdout(&model, &series, &config).unwrap().is_some());

        assert_eq!(HoldoutConfig::new().with_min_observations(0).min_observations, 2);
    }

    #[test]
    fn works_through_trait_objects() {
        let model: Box<dyn Forecaster> = Box::new(MovingAverage::default());
        let series = Series::from_values(vec![1.0, 2.0]).unwrap();
        let result = evaluate_holdout(model.as_ref(), &series, &HoldoutConfig::default());
        assert_eq!(result, Ok(None));
    }
}
