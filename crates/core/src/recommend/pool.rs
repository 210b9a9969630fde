use crate::domain::recommendation::ProductId;
use std::collections::HashSet;
use std::fmt;

/// Ids used until a trained recommender supplies real candidates.
pub const DEFAULT_CANDIDATE_POOL: [ProductId; 10] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10];

/// Supplies the ordered universe of recommendable products.
///
/// Implementations are read-only once built and shared across concurrent requests.
pub trait CandidatePoolProvider: fmt::Debug + Send + Sync {
    fn name(&self) -> &'static str;

    fn candidates(&self) -> &[ProductId];
}

/// Fixed pool loaded from process configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticCandidatePool {
    ids: Vec<ProductId>,
}

impl StaticCandidatePool {
    /// Keeps the given order; repeated ids keep their first position.
    pub fn new(ids: impl IntoIterator<Item = ProductId>) -> Self {
        let mut seen = HashSet::new();
        let ids = ids.into_iter().filter(|id| seen.insert(*id)).collect();
        Self { ids }
    }
}

impl Default for StaticCandidatePool {
    fn default() -> Self {
        Self::new(DEFAULT_CANDIDATE_POOL)
    }
}

impl CandidatePoolProvider for StaticCandidatePool {
    fn name(&self) -> &'static str {
        "static"
    }

    fn candidates(&self) -> &[ProductId] {
        &self.ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_pool_is_one_through_ten() {
        let pool = StaticCandidatePool::default();
        assert_eq!(pool.candidates(), &(1..=10).collect::<Vec<_>>()[..]);
        assert_eq!(pool.name(), "static");
    }

    #[test]
    fn dedupes_keeping_first_position() {
        let pool = StaticCandidatePool::new([5, 1, 5, 2, 1]);
        assert_eq!(pool.candidates(), &[5, 1, 2]);
    }
}
