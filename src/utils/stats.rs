//! Statistical utility functions.

/// Calculate the mean of a slice.
///
/// Returns `NaN` for an empty slice; callers validate length first.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sum of squared deviations from the mean (total sum of squares).
pub fn sum_squared_deviations(values: &[f64]) -> f64 {
    let m = mean(values);
    values.iter().map(|x| (x - m).powi(2)).sum()
}

/// Sum of squared element-wise differences.
pub fn sum_squared_errors(actual: &[f64], predicted: &[f64]) -> f64 {
    actual
        .iter()
        .zip(predicted.iter())
        .map(|(a, p)| (a - p).powi(2))
        .sum()
}
