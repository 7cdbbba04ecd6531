//! # sales-forecast
//!
//! Forecasting engine for monthly sales figures.
//!
//! Provides four interchangeable models (linear trend, moving average,
//! exponential smoothing, seasonal trend) behind a common [`Forecaster`]
//! trait, a name-keyed model registry, a shared accuracy-metrics routine, and
//! a one-step holdout evaluation harness.
//!
//! [`Forecaster`]: models::Forecaster

pub mod core;
pub mod engine;
pub mod error;
pub mod models;
pub mod seasonality;
pub mod utils;

pub use engine::{evaluate_model, predict};
pub use error::{ForecastError, Result};

pub mod prelude {
    pub use crate::core::{ConfidenceTier, Forecast, ForecastSummary, Observation, Series};
    pub use crate::engine::{evaluate_model, predict};
    pub use crate::error::{ForecastError, Result};
    pub use crate::models::{default_registry, Forecaster, ModelRegistry};
    pub use crate::utils::{calculate_metrics, AccuracyMetrics};
}
