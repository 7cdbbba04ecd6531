//! Ratio-to-mean seasonal indices.

use crate::error::{ForecastError, Result};
use crate::utils::stats::mean;

/// Multiplicative seasonal index per phase slot.
///
/// Slot `k` holds the mean of all observations whose index satisfies
/// `index mod period == k`, divided by the overall mean. An index of `1.0`
/// means the phase is on average equal to the series mean.
#[derive(Debug, Clone, PartialEq)]
pub struct SeasonalIndices {
    indices: Vec<f64>,
}

impl SeasonalIndices {
    /// Compute indices for every phase of `period`.
    ///
    /// # Errors
    /// * [`ForecastError::InvalidInput`] for a zero period or a series whose
    ///   overall mean is zero.
    /// * [`ForecastError::InsufficientData`] if any phase slot has no samples,
    ///   which happens whenever `values.len() < period`.
    pub fn ratio_to_mean(values: &[f64], period: usize) -> Result<Self> {
        if period == 0 {
            return Err(ForecastError::InvalidInput(
                "seasonal period must be positive".to_string(),
            ));
        }

        let overall = mean(values);
        if values.is_empty() || overall == 0.0 {
            return Err(ForecastError::InvalidInput(
                "seasonal indices need a non-zero series mean".to_string(),
            ));
        }

        let mut indices = Vec::with_capacity(period);
        for slot in 0..period {
            let samples: Vec<f64> = values.iter().skip(slot).step_by(period).copied().collect();
            if samples.is_empty() {
                return Err(ForecastError::InsufficientData {
                    needed: period,
                    got: values.len(),
                });
            }
            indices.push(mean(&samples) / overall);
        }

        Ok(Self { indices })
    }

    /// Seasonal period.
    pub fn period(&self) -> usize {
        self.indices.len()
    }

    /// Index for the phase of absolute position `position`.
    pub fn at(&self, position: usize) -> f64 {
        self.indices[position % self.indices.len()]
    }

    /// All indices, slot 0 first.
    pub fn as_slice(&self) -> &[f64] {
        &self.indices
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn indices_average_to_one_for_full_cycles() {
        let values = vec![2.0, 4.0, 6.0, 4.0, 6.0, 8.0];
        let idx = SeasonalIndices::ratio_to_mean(&values, 3).unwrap();

        // Slot means 3, 5, 7 over overall mean 5
        assert_relative_eq!(idx.as_slice()[0], 0.6, epsilon = 1e-12);
        assert_relative_eq!(idx.as_slice()[1], 1.0, epsilon = 1e-12);
        assert_relative_eq!(idx.as_slice()[2], 1.4, epsilon = 1e-12);
        let avg = idx.as_slice().iter().sum::<f64>() / 3.0;
        assert_relative_eq!(avg, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn partial_cycle_uses_available_samples() {
        // Slot 0 sees 1 and 5, slot 1 sees only 3
        let idx = SeasonalIndices::ratio_to_mean(&[1.0, 3.0, 5.0], 2).unwrap();
        assert_relative_eq!(idx.at(0), 1.0, epsilon = 1e-12);
        assert_relative_eq!(idx.at(1), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn at_wraps_positions() {
        let idx = SeasonalIndices::ratio_to_mean(&[1.0, 3.0], 2).unwrap();
        assert_eq!(idx.at(2), idx.at(0));
        assert_eq!(idx.at(5), idx.at(1));
        assert_eq!(idx.period(), 2);
    }

    #[test]
    fn empty_slot_is_insufficient_data() {
        assert_eq!(
            SeasonalIndices::ratio_to_mean(&[1.0, 2.0, 3.0], 12),
            Err(ForecastError::InsufficientData { needed: 12, got: 3 })
        );
    }

    #[test]
    fn zero_mean_and_zero_period_are_invalid() {
        assert!(matches!(
            SeasonalIndices::ratio_to_mean(&[1.0, -1.0], 2),
            Err(ForecastError::InvalidInput(_))
        ));
        assert!(matches!(
            SeasonalIndices::ratio_to_mean(&[1.0, 2.0], 0),
            Err(ForecastError::InvalidInput(_))
        ));
    }
}
