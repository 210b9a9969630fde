//! Short-horizon sales forecasting: fit one linear trend over day offsets and extrapolate it.

pub mod ols;

use crate::domain::contract::{PredictSalesRequest, PredictSalesResponse};
use crate::domain::sales::{ForecastPoint, HistoricalSeries};
use crate::error::{AnalyticsError, ComputationError, ValidationError};
use crate::time::calendar;
use ols::TrendLine;

/// Forecasts `horizon` days past the last observed day offset.
///
/// An empty series or a non-positive horizon yields an empty forecast. The fit is recomputed
/// from scratch on every call.
pub fn forecast(
    series: &HistoricalSeries,
    horizon: i64,
) -> Result<Vec<ForecastPoint>, ComputationError> {
    let Some(origin) = series.origin() else {
        return Ok(Vec::new());
    };
    if horizon <= 0 {
        return Ok(Vec::new());
    }

    let points = series.day_offsets();
    let (Some(line), Some(&(last_offset, _))) = (TrendLine::fit(&points), points.last()) else {
        return Ok(Vec::new());
    };

    tracing::debug!(
        observations = line.n_observations,
        slope = line.slope,
        intercept = line.intercept,
        r_squared = line.r_squared,
        last_offset,
        horizon,
        "fitted sales trend"
    );

    let mut out = Vec::new();
    for step in 1..=horizon {
        let offset = last_offset
            .checked_add(step)
            .ok_or_else(|| ComputationError::new("day offset overflow"))?;
        let date = calendar::offset_to_date(origin, offset).ok_or_else(|| {
            ComputationError::new(format!(
                "forecast date for day offset {offset} is outside the supported calendar range"
            ))
        })?;
        let predicted_amount = shape_amount(line.predict_at(offset)).ok_or_else(|| {
            ComputationError::new(format!(
                "fitted trend is not finite at day offset {offset}"
            ))
        })?;
        out.push(ForecastPoint {
            date,
            predicted_amount,
        });
    }

    Ok(out)
}

/// Rounds to cents and clamps at zero. `None` for a non-finite prediction.
///
/// Rounding goes through the exact decimal expansion, so a value sitting exactly on a half
/// cent rounds to the even cent (10.125 -> 10.12).
pub fn shape_amount(predicted: f64) -> Option<f64> {
    if !predicted.is_finite() {
        return None;
    }
    let rounded: f64 = format!("{predicted:.2}").parse().ok()?;
    Some(if rounded > 0.0 { rounded } else { 0.0 })
}

/// Forecaster with the serving policy applied on top of [`forecast`].
#[derive(Debug, Clone, Default)]
pub struct Forecaster {
    max_horizon: Option<u32>,
}

impl Forecaster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rejects horizons above `max_horizon` instead of extrapolating arbitrarily far.
    pub fn with_max_horizon(mut self, max_horizon: u32) -> Self {
        self.max_horizon = Some(max_horizon);
        self
    }

    pub fn forecast(
        &self,
        series: &HistoricalSeries,
        horizon: i64,
    ) -> Result<Vec<ForecastPoint>, AnalyticsError> {
        if let Some(max) = self.max_horizon {
            if horizon > i64::from(max) {
                return Err(ValidationError::new(
                    "days_to_predict",
                    format!("must be at most {max} (got {horizon})"),
                )
                .into());
            }
        }
        Ok(forecast(series, horizon)?)
    }

    pub fn predict_sales(
        &self,
        request: &PredictSalesRequest,
    ) -> Result<PredictSalesResponse, AnalyticsError> {
        let series = request.validate_and_into_series()?;
        let forecast = self.forecast(&series, request.days_to_predict)?;
        Ok(PredictSalesResponse { forecast })
    }
}
