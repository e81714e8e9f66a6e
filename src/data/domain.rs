use super::dataset::{feature_domain, DiscreteValue};
use std::collections::BTreeMap;

/// Remaining candidate features, each with its domain of values.
///
/// Iteration is in ascending feature index. Every recursive call of the
/// builder owns its own copy, so removing a feature on one path never
/// affects a sibling path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeatureDomains<T: DiscreteValue> {
    domains: BTreeMap<usize, Vec<T>>,
}

impl<T: DiscreteValue> FeatureDomains<T> {
    /// Domains of the first `n_features` features as observed in `examples`.
    pub fn from_examples(examples: &[&[T]], n_features: usize) -> Self {
        let domains = (0..n_features)
            .map(|feature_index| (feature_index, feature_domain(examples, feature_index)))
            .collect();
        Self { domains }
    }

    /// Same candidate features, with domains recomputed from `examples`.
    pub fn observed_in(&self, examples: &[&[T]]) -> Self {
        let domains = self
            .domains
            .keys()
            .map(|&feature_index| (feature_index, feature_domain(examples, feature_index)))
            .collect();
        Self { domains }
    }

    /// Copy of the domains with one feature removed.
    pub fn without(&self, feature_index: usize) -> Self {
        let mut domains = self.domains.clone();
        domains.remove(&feature_index);
        Self { domains }
    }

    pub fn domain(&self, feature_index: usize) -> Option<&[T]> {
        self.domains.get(&feature_index).map(Vec::as_slice)
    }

    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.domains.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.domains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }
}
