//! Series data structure: an ordered run of labelled observations.

use crate::error::{ForecastError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single observed value with its display label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    period: String,
    value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    date: Option<NaiveDate>,
}

impl Observation {
    /// Create an observation, rejecting empty labels and non-finite values.
    pub fn new(period: impl Into<String>, value: f64) -> Result<Self> {
        let obs = Self {
            period: period.into(),
            value,
            date: None,
        };
        obs.validate(0)?;
        Ok(obs)
    }

    /// Attach a calendar date (used only for display by callers).
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn period(&self) -> &str {
        &self.period
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    fn validate(&self, index: usize) -> Result<()> {
        if self.period.trim().is_empty() {
            return Err(ForecastError::InvalidInput(format!(
                "empty period label at index {}",
                index
            )));
        }
        if !self.value.is_finite() {
            return Err(ForecastError::InvalidInput(format!(
                "non-finite value {} at index {}",
                self.value, index
            )));
        }
        Ok(())
    }
}

/// Chronologically ordered, non-empty sequence of observations.
///
/// Index 0 is the earliest observation. Values are guaranteed finite, so
/// models can work on [`Series::values`] directly.
///
/// # Example
/// ```
/// use sales_forecast::core::Series;
///
/// let series = Series::from_values(vec![10.0, 20.0, 30.0]).unwrap();
/// assert_eq!(series.len(), 3);
/// assert_eq!(series.observations()[2].period(), "Month 3");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Observation>", into = "Vec<Observation>")]
pub struct Series {
    observations: Vec<Observation>,
    values: Vec<f64>,
}

impl Series {
    /// Build a series from observations, validating every element.
    pub fn new(observations: Vec<Observation>) -> Result<Self> {
        if observations.is_empty() {
            return Err(ForecastError::InvalidInput(
                "series must contain at least one observation".to_string(),
            ));
        }
        for (i, obs) in observations.iter().enumerate() {
            obs.validate(i)?;
        }
        let values = observations.iter().map(|o| o.value).collect();
        Ok(Self {
            observations,
            values,
        })
    }

    /// Build a series from raw values, labelled `Month 1`, `Month 2`, ...
    pub fn from_values(values: Vec<f64>) -> Result<Self> {
        let observations = values
            .into_iter()
            .enumerate()
            .map(|(i, value)| Observation {
                period: period_label(i + 1),
                value,
                date: None,
            })
            .collect();
        Self::new(observations)
    }

    /// Get the number of observations.
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    /// Always false for a constructed series; provided for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    /// Observed values in chronological order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Most recent observation.
    pub fn last(&self) -> &Observation {
        // Non-empty by construction.
        &self.observations[self.observations.len() - 1]
    }

    /// Copy of observations `start..end`.
    pub fn slice(&self, start: usize, end: usize) -> Result<Series> {
        if start >= end {
            return Err(ForecastError::InvalidInput(format!(
                "slice {}..{} would be empty",
                start, end
            )));
        }
        if end > self.len() {
            return Err(ForecastError::InsufficientData {
                needed: end,
                got: self.len(),
            });
        }
        Ok(Series {
            observations: self.observations[start..end].to_vec(),
            values: self.values[start..end].to_vec(),
        })
    }
}

impl TryFrom<Vec<Observation>> for Series {
    type Error = ForecastError;

    fn try_from(observations: Vec<Observation>) -> Result<Self> {
        Series::new(observations)
    }
}

impl From<Series> for Vec<Observation> {
    fn from(series: Series) -> Self {
        series.observations
    }
}

/// Display label for the 1-based period number `number`.
pub fn period_label(number: usize) -> String {
    format!("Month {}", number)
}
