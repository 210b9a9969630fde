use anyhow::Context;
use axum::{extract::State, Json};
use std::sync::Arc;
use sweetshop_core::config::Settings;
use sweetshop_core::domain::contract::{
    PredictSalesRequest, PredictSalesResponse, RecommendProductsRequest,
    RecommendProductsResponse,
};
use sweetshop_core::forecast::Forecaster;
use sweetshop_core::recommend::pool::StaticCandidatePool;
use sweetshop_core::recommend::Recommender;

use crate::error::ApiError;

#[derive(Debug, Clone)]
pub struct AppState {
    pub forecaster: Arc<Forecaster>,
    pub recommender: Arc<Recommender>,
}

impl AppState {
    pub fn from_settings(settings: &Settings) -> Self {
        let pool = StaticCandidatePool::new(settings.candidate_pool.iter().copied());
        Self {
            forecaster: Arc::new(Forecaster::new().with_max_horizon(settings.forecast_max_days)),
            recommender: Arc::new(Recommender::new(Arc::new(pool))),
        }
    }
}

pub async fn healthz() -> &'static str {
    "ok"
}

pub async fn predict_sales(
    State(state): State<AppState>,
    Json(request): Json<PredictSalesRequest>,
) -> Result<Json<PredictSalesResponse>, ApiError> {
    let observations = request.historical_data.len();
    let horizon = request.days_to_predict;

    // Fitting is linear in the history length; keep it off the async workers.
    let forecaster = Arc::clone(&state.forecaster);
    let response = tokio::task::spawn_blocking(move || forecaster.predict_sales(&request))
        .await
        .context("forecast task did not complete")??;

    tracing::info!(
        observations,
        horizon,
        points = response.forecast.len(),
        "served sales forecast"
    );
    Ok(Json(response))
}

pub async fn recommend_products(
    State(state): State<AppState>,
    Json(request): Json<RecommendProductsRequest>,
) -> Result<Json<RecommendProductsResponse>, ApiError> {
    let response = state.recommender.recommend_products(&request);
    tracing::info!(
        cart_len = request.cart_product_ids.len(),
        recommendations = ?response.recommendations.as_slice(),
        "served product recommendations"
    );
    Ok(Json(response))
}
