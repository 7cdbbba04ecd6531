//! Forecast records produced by models, plus display-oriented summaries.

use crate::error::{ForecastError, Result};
use serde::{Deserialize, Serialize};

/// A single future-period prediction.
///
/// `confidence` is a fixed, model-intrinsic trust label in `[0, 1]`, not a
/// calibrated probability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    /// Display label of the forecast period.
    pub period: String,
    /// Point prediction.
    pub value: f64,
    /// Model-specific confidence constant.
    pub confidence: f64,
}

impl Forecast {
    pub fn new(period: impl Into<String>, value: f64, confidence: f64) -> Self {
        Self {
            period: period.into(),
            value,
            confidence,
        }
    }

    /// Coarse trust bucket for this forecast.
    pub fn tier(&self) -> ConfidenceTier {
        ConfidenceTier::from_confidence(self.confidence)
    }
}

/// Coarse bucket used to colour-code forecasts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfidenceTier {
    /// Confidence strictly above 0.8.
    High,
    /// Confidence strictly above 0.6.
    Medium,
    Low,
}

impl ConfidenceTier {
    pub fn from_confidence(confidence: f64) -> Self {
        if confidence > 0.8 {
            Self::High
        } else if confidence > 0.6 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

/// Aggregate figures over a forecast horizon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastSummary {
    /// Sum of all predicted values.
    pub total: f64,
    /// Mean predicted value per period.
    pub average: f64,
    /// Mean confidence across periods.
    pub average_confidence: f64,
    /// Number of forecast periods.
    pub periods: usize,
}

impl ForecastSummary {
    /// Summarize a non-empty forecast sequence.
    pub fn from_forecasts(forecasts: &[Forecast]) -> Result<Self> {
        if forecasts.is_empty() {
            return Err(ForecastError::InvalidInput(
                "cannot summarize an empty forecast".to_string(),
            ));
        }
        let n = forecasts.len() as f64;
        let total: f64 = forecasts.iter().map(|f| f.value).sum();
        let confidence: f64 = forecasts.iter().map(|f| f.confidence).sum();
        Ok(Self {
            total,
            average: total / n,
            average_confidence: confidence / n,
            periods: forecasts.len(),
        })
    }
}
