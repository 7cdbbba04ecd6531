//! Exponential smoothing models.

mod ses;

pub use ses::ExponentialSmoothing;
