//! Core data structures for sales forecasting.

mod forecast;
mod series;

pub use forecast::{ConfidenceTier, Forecast, ForecastSummary};
pub use series::{period_label, Observation, Series};
