//! Seasonal pattern estimation.
//!
//! - `SeasonalIndices`: ratio-to-mean index per phase of a fixed period

mod indices;

pub use indices::SeasonalIndices;
