//! Ordered, immutable collection of forecasting models looked up by name.

use crate::core::{Forecast, Series};
use crate::error::{ForecastError, Result};
use crate::models::baseline::MovingAverage;
use crate::models::exponential::ExponentialSmoothing;
use crate::models::trend::{LinearTrend, SeasonalTrend};
use crate::models::{BoxedForecaster, Forecaster};
use crate::utils::evaluation::{evaluate_holdout, HoldoutConfig};
use crate::utils::AccuracyMetrics;
use std::sync::OnceLock;

/// Immutable set of models, in registration order.
///
/// Built once through [`ModelRegistryBuilder`]; there is no way to add or
/// remove models afterwards, so a shared registry needs no locking.
///
/// # Example
///
/// ```
/// use sales_forecast::core::Series;
/// use sales_forecast::models::ModelRegistry;
///
/// let registry = ModelRegistry::standard();
/// let series = Series::from_values(vec![10.0, 20.0, 30.0]).unwrap();
///
/// let forecast = registry.predict("Moving Average", &series, 2).unwrap();
/// assert_eq!(forecast[0].value, 20.0);
/// assert!(registry.predict("ARIMA", &series, 2).is_err());
/// ```
pub struct ModelRegistry {
    models: Vec<BoxedForecaster>,
    holdout: HoldoutConfig,
}

impl ModelRegistry {
    /// Start building a registry.
    pub fn builder() -> ModelRegistryBuilder {
        ModelRegistryBuilder::default()
    }

    /// The four built-in models: Linear Regression, Moving Average,
    /// Exponential Smoothing, Seasonal Trend.
    pub fn standard() -> Self {
        Self {
            models: vec![
                Box::new(LinearTrend::default()),
                Box::new(MovingAverage::default()),
                Box::new(ExponentialSmoothing::default()),
                Box::new(SeasonalTrend::default()),
            ],
            holdout: HoldoutConfig::default(),
        }
    }

    /// Get the number of registered models.
    pub fn len(&self) -> usize {
        self.models.len()
    }

    /// Check if registry is empty.
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// Iterate over models in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &BoxedForecaster> {
        self.models.iter()
    }

    /// Model names in registration order.
    pub fn names(&self) -> Vec<&str> {
        self.iter().map(|m| m.name()).collect()
    }

    /// Look up a model by exact name.
    pub fn get(&self, name: &str) -> Result<&dyn Forecaster> {
        match self.models.iter().find(|m| m.name() == name) {
            Some(model) => Ok(&**model),
            None => Err(ForecastError::UnknownModel(name.to_string())),
        }
    }

    /// Forecast `horizon` periods with the named model.
    pub fn predict(&self, name: &str, series: &Series, horizon: usize) -> Result<Vec<Forecast>> {
        let model = self.get(name)?;
        tracing::debug!(
            model = name,
            observations = series.len(),
            horizon,
            "running forecast"
        );
        model.predict(series, horizon)
    }

    /// One-step holdout accuracy of the named model.
    ///
    /// Returns `Ok(None)` when the series is too short to evaluate.
    ///
    /// # Errors
    /// `UnknownModel` for an unregistered name, otherwise whatever the holdout
    /// returns; a single held-out value always yields `DegenerateMetrics`.
    pub fn evaluate_model(&self, name: &str, series: &Series) -> Result<Option<AccuracyMetrics>> {
        let model = self.get(name)?;
        Ok(evaluate_holdout(model, series, &self.holdout)?.map(|r| r.metrics))
    }
}

impl Default for ModelRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

impl std::fmt::Debug for ModelRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelRegistry")
            .field("models", &self.names())
            .field("holdout", &self.holdout)
            .finish()
    }
}

/// Collects models before freezing them into a [`ModelRegistry`].
#[derive(Default)]
pub struct ModelRegistryBuilder {
    models: Vec<BoxedForecaster>,
    holdout: HoldoutConfig,
}

impl ModelRegistryBuilder {
    /// Register a model. Order of registration is preserved.
    pub fn register(mut self, model: BoxedForecaster) -> Self {
        self.models.push(model);
        self
    }

    /// Use a non-default holdout policy for `evaluate_model`.
    pub fn holdout(mut self, config: HoldoutConfig) -> Self {
        self.holdout = config;
        self
    }

    /// Freeze the registry, rejecting duplicate names.
    pub fn build(self) -> Result<ModelRegistry> {
        for (i, model) in self.models.iter().enumerate() {
            if self.models[..i].iter().any(|m| m.name() == model.name()) {
                return Err(ForecastError::InvalidInput(format!(
                    "duplicate model name: {}",
                    model.name()
                )));
            }
        }
        Ok(ModelRegistry {
            models: self.models,
            holdout: self.holdout,
        })
    }
}

static DEFAULT_REGISTRY: OnceLock<ModelRegistry> = OnceLock::new();

/// Process-wide standard registry, initialised on first use.
pub fn default_registry() -> &'static ModelRegistry {
    DEFAULT_REGISTRY.get_or_init(ModelRegistry::standard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_registry_order() {
        let registry = ModelRegistry::standard();
        assert_eq!(registry.len(), 4);
        assert_eq!(
            registry.names(),
            vec![
                "Linear Regression",
                "Moving Average",
                "Exponential Smoothing",
                "Seasonal Trend"
            ]
        );
    }

    #[test]
    fn descriptions_are_exposed() {
        let registry = ModelRegistry::standard();
        let descriptions: Vec<_> = registry.iter().map(|m| m.description()).collect();
        assert_eq!(descriptions[1], "Average of recent periods");
        assert_eq!(descriptions[3], "Accounts for seasonal patterns");
    }

    #[test]
    fn unknown_name_is_reported() {
        let registry = ModelRegistry::standard();
        let series = Series::from_values(vec![1.0, 2.0, 3.0]).unwrap();
        assert_eq!(
            registry.predict("Prophet", &series, 1),
            Err(ForecastError::UnknownModel("Prophet".to_string()))
        );
        assert!(matches!(
            registry.evaluate_model("Prophet", &series),
            Err(ForecastError::UnknownModel(_))
        ));
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let registry = ModelRegistry::standard();
        assert!(registry.get("Moving Average").is_ok());
        assert!(registry.get("moving average").is_err());
    }

    #[test]
    fn builder_rejects_duplicates() {
        let result = ModelRegistry::builder()
            .register(Box::new(MovingAverage::default()))
            .register(Box::new(MovingAverage::new(5)))
            .build();
        assert!(matches!(result, Err(ForecastError::InvalidInput(_))));
    }

    #[test]
    fn builder_preserves_order() {
        let registry = ModelRegistry::builder()
            .register(Box::new(ExponentialSmoothing::default()))
            .register(Box::new(LinearTrend::default()))
            .build()
            .unwrap();
        assert_eq!(
            registry.names(),
            vec!["Exponential Smoothing", "Linear Regression"]
        );
        assert!(ModelRegistry::builder().build().unwrap().is_empty());
    }

    #[test]
    fn default_registry_is_shared() {
        let a = default_registry();
        let b = default_registry();
        assert!(std::ptr::eq(a, b));
        assert_eq!(a.len(), 4);
    }

    #[test]
    fn registry_is_usable_across_threads() {
        let series = Series::from_values(vec![10.0, 20.0, 30.0, 40.0]).unwrap();
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let series = series.clone();
                std::thread::spawn(move || {
                    default_registry()
                        .predict("Linear Regression", &series, 1)
                        .unwrap()
                })
            })
            .collect();
        for handle in handles {
            let forecasts = handle.join().unwrap();
            assert_eq!(forecasts[0].value, 50.0);
        }
    }
}
