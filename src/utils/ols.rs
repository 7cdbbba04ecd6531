//! Ordinary least squares fit of a straight line over the observation index.
//!
//! The independent variable is the 0-based position in the series, not
//! elapsed calendar time.

use crate::error::{ForecastError, Result};

/// Fitted line `value = intercept + slope * index`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineFit {
    /// Intercept term.
    pub intercept: f64,
    /// Change in value per index step.
    pub slope: f64,
    /// Number of observations used in the fit.
    pub n: usize,
}

impl LineFit {
    /// Evaluate the line at `index`.
    pub fn value_at(&self, index: f64) -> f64 {
        self.intercept + self.slope * index
    }
}

/// Fit `y = a + b·x` with `x = 0..n` using the closed-form normal equations.
///
/// `b = (nΣxy − ΣxΣy) / (nΣx² − (Σx)²)`, `a = (Σy − bΣx) / n`.
///
/// Fails with [`ForecastError::InsufficientData`] when fewer than two distinct
/// x-values exist, since the denominator is then zero.
///
/// # Example
/// ```
/// use sales_forecast::utils::fit_line;
///
/// let fit = fit_line(&[10.0, 20.0, 30.0, 40.0]).unwrap();
/// assert_eq!(fit.slope, 10.0);
/// assert_eq!(fit.intercept, 10.0);
/// ```
pub fn fit_line(y: &[f64]) -> Result<LineFit> {
    let n = y.len();
    if n < 2 {
        return Err(ForecastError::InsufficientData { needed: 2, got: n });
    }

    let (mut sum_x, mut sum_y, mut sum_xy, mut sum_x2) = (0.0, 0.0, 0.0, 0.0);
    for (i, &value) in y.iter().enumerate() {
        let x = i as f64;
        sum_x += x;
        sum_y += value;
        sum_xy += x * value;
        sum_x2 += x * x;
    }

    let nf = n as f64;
    let denominator = nf * sum_x2 - sum_x * sum_x;
    if denominator == 0.0 {
        return Err(ForecastError::InsufficientData { needed: 2, got: n });
    }

    let slope = (nf * sum_xy - sum_x * sum_y) / denominator;
    let intercept = (sum_y - slope * sum_x) / nf;

    Ok(LineFit {
        intercept,
        slope,
        n,
    })
}
