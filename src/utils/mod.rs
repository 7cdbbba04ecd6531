//! Utility functions shared by the forecasting models.

pub mod evaluation;
pub mod metrics;
pub mod ols;
pub mod sample;
pub mod stats;

pub use evaluation::{evaluate_holdout, HoldoutConfig, HoldoutResult};
pub use metrics::{calculate_metrics, AccuracyMetrics};
pub use ols::{fit_line, LineFit};
pub use sample::{generate_sample_series, SampleConfig};
