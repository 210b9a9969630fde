use crate::domain::recommendation::{ProductId, RecommendationList};
use crate::domain::sales::{ForecastPoint, HistoricalSeries, Observation};
use crate::error::ValidationError;
use crate::time::calendar;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const DEFAULT_DAYS_TO_PREDICT: i64 = 7;

fn default_days_to_predict() -> i64 {
    DEFAULT_DAYS_TO_PREDICT
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictSalesRequest {
    pub historical_data: Vec<SalesRecord>,
    #[serde(default = "default_days_to_predict")]
    pub days_to_predict: i64,
}

/// A sales row as exported by the shop. `amount` stays a raw JSON value so that a
/// non-numeric amount is reported as a validation error naming the record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesRecord {
    pub date: String,
    pub amount: Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictSalesResponse {
    pub forecast: Vec<ForecastPoint>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendProductsRequest {
    pub cart_product_ids: Vec<ProductId>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendProductsResponse {
    pub recommendations: RecommendationList,
}

impl PredictSalesRequest {
    /// Validates every record; the first bad one fails the whole request.
    pub fn validate_and_into_series(&self) -> Result<HistoricalSeries, ValidationError> {
        let mut observations = Vec::with_capacity(self.historical_data.len());
        for (index, record) in self.historical_data.iter().enumerate() {
            observations.push(record.validate_and_into_observation(index)?);
        }
        Ok(HistoricalSeries::new(observations))
    }
}

impl SalesRecord {
    fn validate_and_into_observation(&self, index: usize) -> Result<Observation, ValidationError> {
        let timestamp = calendar::parse_timestamp(&self.date).ok_or_else(|| {
            ValidationError::at(
                index,
                "date",
                format!("expected a YYYY-MM-DD date (got {:?})", self.date),
            )
        })?;

        let amount = parse_amount(&self.amount).ok_or_else(|| {
            ValidationError::at(
                index,
                "amount",
                format!("expected a number (got {})", self.amount),
            )
        })?;

        Observation::try_new(timestamp, amount).map_err(|e| ValidationError {
            index: Some(index),
            ..e
        })
    }
}

// Numeric strings are accepted the way the shop's exporters have always sent them.
fn parse_amount(v: &Value) -> Option<f64> {
    match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}
