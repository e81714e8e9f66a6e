//! Recursive tree induction.
use super::criterion::best_feature;
use super::node::{Branch, TreeNode};
use super::params::{Criterion, DomainScope, TreeParams};
use crate::data::dataset::{filter_examples, is_pure, majority_class, Dataset, DiscreteValue};
use crate::data::domain::FeatureDomains;
use log::debug;

/// Builds an entropy-driven tree with the default parameters.
///
/// Returns `None` when `dataset` has no examples.
pub fn build_tree<T: DiscreteValue>(dataset: &Dataset<T>) -> Option<TreeNode<T>> {
    build_tree_with(dataset, &TreeParams::default())
}

pub fn build_tree_with<T: DiscreteValue>(
    dataset: &Dataset<T>,
    params: &TreeParams,
) -> Option<TreeNode<T>> {
    let examples = dataset.examples();
    if examples.is_empty() {
        return None;
    }
    let domains = FeatureDomains::from_examples(&examples, dataset.n_features());
    let builder = TreeBuilder {
        criterion: params.criterion(),
        domain_scope: params.domain_scope(),
    };
    builder.build_node(&examples, domains)
}

struct TreeBuilder {
    criterion: Criterion,
    domain_scope: DomainScope,
}

impl TreeBuilder {
    /// `examples` is never empty: callers only recurse into non-empty partitions.
    fn build_node<T: DiscreteValue>(
        &self,
        examples: &[&[T]],
        domains: FeatureDomains<T>,
    ) -> Option<TreeNode<T>> {
        let majority = majority_class(examples)?;

        if is_pure(examples) {
            debug!("Pure subset of {} examples, leaf {}", examples.len(), majority);
            return Some(TreeNode::leaf(majority));
        }
        if domains.is_empty() {
            debug!(
                "No features left for {} examples, leaf {}",
                examples.len(),
                majority
            );
            return Some(TreeNode::leaf(majority));
        }

        let domains = match self.domain_scope {
            DomainScope::Observed => domains.observed_in(examples),
            DomainScope::Global => domains,
        };
        let feature_index = best_feature(self.criterion, &domains, examples)?;
        debug!(
            "Splitting {} examples on feature {} ({} candidates)",
            examples.len(),
            feature_index,
            domains.len()
        );

        let remaining = domains.without(feature_index);
        let branches = domains
            .domain(feature_index)
            .unwrap_or_default()
            .iter()
            .map(|value| {
                let subset = filter_examples(examples, feature_index, value);
                let child = if subset.is_empty() {
                    None
                } else {
                    self.build_node(&subset, remaining.clone()).map(Box::new)
                };
                Branch {
                    value: value.clone(),
                    child,
                }
            })
            .collect();

        Some(TreeNode::Internal {
            feature_index,
            majority_class: majority,
            branches,
        })
    }
}
