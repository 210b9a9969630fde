use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use sweetshop_core::error::AnalyticsError;

#[derive(Debug, Serialize)]
struct ErrorBody {
    detail: String,
}

/// Every failure surfaces as a 500 whose `detail` carries the message, as the shop frontend
/// expects.
#[derive(Debug)]
pub enum ApiError {
    Analytics(AnalyticsError),
    Unexpected(anyhow::Error),
}

impl From<AnalyticsError> for ApiError {
    fn from(e: AnalyticsError) -> Self {
        Self::Analytics(e)
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(e: anyhow::Error) -> Self {
        Self::Unexpected(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let detail = match self {
            Self::Analytics(e) if e.is_validation() => {
                tracing::warn!(error = %e, "rejected invalid request");
                e.to_string()
            }
            Self::Analytics(e) => {
                let detail = e.to_string();
                let err = anyhow::Error::new(e);
                sentry_anyhow::capture_anyhow(&err);
                tracing::error!(error = %err, "analytics computation failed");
                detail
            }
            Self::Unexpected(err) => {
                sentry_anyhow::capture_anyhow(&err);
                tracing::error!(error = %err, "request failed unexpectedly");
                format!("{err:#}")
            }
        };

        (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorBody { detail })).into_response()
    }
}
