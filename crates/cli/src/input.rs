use anyhow::Context;
use serde::Deserialize;
use std::path::Path;
use sweetshop_core::domain::contract::{PredictSalesRequest, SalesRecord, DEFAULT_DAYS_TO_PREDICT};

/// Either a full `/predict-sales` body or just the exported list of sales rows.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ForecastInput {
    Request(PredictSalesRequest),
    Records(Vec<SalesRecord>),
}

pub fn read_forecast_request(path: &Path, days: Option<i64>) -> anyhow::Result<PredictSalesRequest> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    parse_forecast_request(&text, days)
        .with_context(|| format!("{} is not a sales history document", path.display()))
}

pub fn parse_forecast_request(text: &str, days: Option<i64>) -> anyhow::Result<PredictSalesRequest> {
    let mut request = match serde_json::from_str::<ForecastInput>(text)? {
        ForecastInput::Request(r) => r,
        ForecastInput::Records(historical_data) => PredictSalesRequest {
            historical_data,
            days_to_predict: DEFAULT_DAYS_TO_PREDICT,
        },
    };
    if let Some(days) = days {
        request.days_to_predict = days;
    }
    Ok(request)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_full_request_body() {
        let req = parse_forecast_request(
            r#"{"historical_data": [{"date": "2023-01-01", "amount": 100}], "days_to_predict": 3}"#,
            None,
        )
        .unwrap();
        assert_eq!(req.historical_data.len(), 1);
        assert_eq!(req.days_to_predict, 3);
    }

    #[test]
    fn accepts_bare_records_with_default_horizon() {
        let req = parse_forecast_request(
            r#"[{"date": "2023-01-01", "amount": 100}, {"date": "2023-01-02", "amount": 90}]"#,
            None,
        )
        .unwrap();
        assert_eq!(req.historical_data.len(), 2);
        assert_eq!(req.days_to_predict, 7);
    }

    #[test]
    fn days_flag_overrides_document() {
        let req = parse_forecast_request(
            r#"{"historical_data": [], "days_to_predict": 3}"#,
            Some(14),
        )
        .unwrap();
        assert_eq!(req.days_to_predict, 14);
    }

    #[test]
    fn rejects_unrelated_json() {
        assert!(parse_forecast_request(r#"{"orders": []}"#, None).is_err());
        assert!(parse_forecast_request("not json", None).is_err());
    }
}
