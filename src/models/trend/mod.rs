//! Trend-following models.
//!
//! - `LinearTrend`: least-squares line over the observation index
//! - `SeasonalTrend`: linear trend scaled by monthly seasonal indices

mod linear;
mod seasonal;

pub use linear::LinearTrend;
pub use seasonal::SeasonalTrend;
