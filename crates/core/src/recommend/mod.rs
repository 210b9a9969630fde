//! Cart-based product recommendations drawn from a candidate pool.

pub mod pool;

use crate::domain::contract::{RecommendProductsRequest, RecommendProductsResponse};
use crate::domain::recommendation::{CartIdentifierSet, ProductId, RecommendationList};
use pool::CandidatePoolProvider;
use std::sync::Arc;

pub const MAX_RECOMMENDATIONS: usize = 3;

/// First [`MAX_RECOMMENDATIONS`] pool ids not already in `cart`, in pool order.
pub fn recommend(cart: &CartIdentifierSet, pool: &dyn CandidatePoolProvider) -> RecommendationList {
    select(cart, pool.candidates(), MAX_RECOMMENDATIONS)
}

fn select(cart: &CartIdentifierSet, candidates: &[ProductId], limit: usize) -> RecommendationList {
    candidates
        .iter()
        .copied()
        .filter(|id| !cart.contains(*id))
        .take(limit)
        .collect()
}

#[derive(Debug, Clone)]
pub struct Recommender {
    pool: Arc<dyn CandidatePoolProvider>,
    limit: usize,
}

impl Recommender {
    pub fn new(pool: Arc<dyn CandidatePoolProvider>) -> Self {
        Self {
            pool,
            limit: MAX_RECOMMENDATIONS,
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn pool_name(&self) -> &'static str {
        self.pool.name()
    }

    pub fn recommend(&self, cart: &CartIdentifierSet) -> RecommendationList {
        select(cart, self.pool.candidates(), self.limit)
    }

    pub fn recommend_products(&self, request: &RecommendProductsRequest) -> RecommendProductsResponse {
        let cart: CartIdentifierSet = request.cart_product_ids.iter().collect();
        let recommendations = self.recommend(&cart);
        tracing::debug!(
            pool = self.pool_name(),
            cart_len = cart.len(),
            recommended = recommendations.len(),
            "recommended products"
        );
        RecommendProductsResponse { recommendations }
    }
}
