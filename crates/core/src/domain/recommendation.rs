use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

pub type ProductId = i64;

/// Products already in the shopper's cart. Only membership matters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CartIdentifierSet {
    ids: BTreeSet<ProductId>,
}

impl CartIdentifierSet {
    pub fn contains(&self, id: ProductId) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl FromIterator<ProductId> for CartIdentifierSet {
    fn from_iter<I: IntoIterator<Item = ProductId>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}

impl<'a> FromIterator<&'a ProductId> for CartIdentifierSet {
    fn from_iter<I: IntoIterator<Item = &'a ProductId>>(iter: I) -> Self {
        iter.into_iter().copied().collect()
    }
}

/// Recommended ids in candidate-pool order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecommendationList(Vec<ProductId>);

impl RecommendationList {
    pub fn as_slice(&self) -> &[ProductId] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<ProductId> for RecommendationList {
    fn from_iter<I: IntoIterator<Item = ProductId>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
