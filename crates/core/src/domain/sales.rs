use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::time::calendar;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation {
    pub timestamp: NaiveDateTime,
    pub amount: f64,
}

impl Observation {
    pub fn try_new(timestamp: NaiveDateTime, amount: f64) -> Result<Self, ValidationError> {
        if !amount.is_finite() {
            return Err(ValidationError::new("amount", format!("must be finite (got {amount})")));
        }
        if amount < 0.0 {
            return Err(ValidationError::new(
                "amount",
                format!("must be non-negative (got {amount})"),
            ));
        }
        Ok(Self { timestamp, amount })
    }

    /// Observation recorded at midnight of `date`.
    pub fn on(date: NaiveDate, amount: f64) -> Result<Self, ValidationError> {
        Self::try_new(date.and_time(NaiveTime::MIN), amount)
    }
}

/// Sales history sorted ascending by timestamp. Equal timestamps keep their input order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistoricalSeries {
    observations: Vec<Observation>,
}

impl HistoricalSeries {
    pub fn new(mut observations: Vec<Observation>) -> Self {
        // Stable, so duplicate dates stay in input-relative order.
        observations.sort_by_key(|o| o.timestamp);
        Self { observations }
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    /// Earliest timestamp; day offsets are measured from here.
    pub fn origin(&self) -> Option<NaiveDateTime> {
        self.observations.first().map(|o| o.timestamp)
    }

    /// `(day_offset, amount)` per observation, in series order.
    pub fn day_offsets(&self) -> Vec<(i64, f64)> {
        let Some(origin) = self.origin() else {
            return Vec::new();
        };
        self.observations
            .iter()
            .map(|o| (calendar::day_offset(origin, o.timestamp), o.amount))
            .collect()
    }
}

impl FromIterator<Observation> for HistoricalSeries {
    fn from_iter<I: IntoIterator<Item = Observation>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// One extrapolated day. `date` serializes as `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub date: NaiveDate,
    pub predicted_amount: f64,
}
