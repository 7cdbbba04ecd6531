//! Forecasting models.

mod registry;
mod traits;

pub mod baseline;
pub mod exponential;
pub mod trend;

pub use registry::{default_registry, ModelRegistry, ModelRegistryBuilder};
pub use traits::{BoxedForecaster, Forecaster};
