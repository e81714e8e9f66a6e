//! Split scoring and feature selection.
use super::params::Criterion;
use crate::data::dataset::{class_counts, filter_examples, DiscreteValue};
use crate::data::domain::FeatureDomains;

/// Sums `terms` in ascending order.
///
/// Floating-point addition is not associative. Sorting first makes the result
/// depend only on the multiset of terms, so two splits with the same group
/// sizes score exactly equal whatever order their groups were found in.
fn ordered_sum(mut terms: Vec<f64>) -> f64 {
    terms.sort_by(f64::total_cmp);
    terms.into_iter().sum()
}

/// Shannon entropy (base 2) of the class distribution of `examples`.
///
/// Lies in `[0, log2(k)]` for `k` distinct classes and is `0.0` for a pure
/// subset. An empty subset also yields `0.0`.
pub fn entropy<T: DiscreteValue>(examples: &[&[T]]) -> f64 {
    let total = examples.len() as f64;
    let terms = class_counts(examples)
        .values()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p_class = count as f64 / total;
            -p_class * p_class.log2()
        })
        .collect();
    ordered_sum(terms)
}

/// Gini impurity of the class distribution of `examples`.
pub fn gini_index<T: DiscreteValue>(examples: &[&[T]]) -> f64 {
    if examples.is_empty() {
        return 0.0;
    }
    let total = examples.len() as f64;
    let squares = class_counts(examples)
        .values()
        .map(|&count| {
            let p_class = count as f64 / total;
            p_class * p_class
        })
        .collect();
    1.0 - ordered_sum(squares)
}

impl Criterion {
    pub fn impurity<T: DiscreteValue>(&self, examples: &[&[T]]) -> f64 {
        match self {
            Criterion::Entropy => entropy(examples),
            Criterion::Gini => gini_index(examples),
        }
    }
}

/// Expected impurity after splitting `examples` on `feature_index`.
///
/// Each value of the feature's domain contributes the impurity of its subset
/// weighted by the subset's share of `examples`. Values with no examples
/// contribute nothing.
pub fn split_impurity<T: DiscreteValue>(
    criterion: Criterion,
    feature_index: usize,
    domains: &FeatureDomains<T>,
    examples: &[&[T]],
) -> f64 {
    if examples.is_empty() {
        return 0.0;
    }
    let total = examples.len() as f64;
    let weighted = domains
        .domain(feature_index)
        .unwrap_or_default()
        .iter()
        .map(|value| filter_examples(examples, feature_index, value))
        .filter(|subset| !subset.is_empty())
        .map(|subset| subset.len() as f64 / total * criterion.impurity(&subset))
        .collect();
    ordered_sum(weighted)
}

/// [`split_impurity`] under the entropy criterion.
pub fn split_entropy<T: DiscreteValue>(
    feature_index: usize,
    domains: &FeatureDomains<T>,
    examples: &[&[T]],
) -> f64 {
    split_impurity(Criterion::Entropy, feature_index, domains, examples)
}

/// Candidate feature with the lowest split impurity.
///
/// Candidates are scanned in ascending index order and only a strictly lower
/// score replaces the current best, so ties go to the lowest index.
/// Returns `None` when no candidate is left.
pub fn best_feature<T: DiscreteValue>(
    criterion: Criterion,
    domains: &FeatureDomains<T>,
    examples: &[&[T]],
) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for feature_index in domains.indices() {
        let score = split_impurity(criterion, feature_index, domains, examples);
        if best.map_or(true, |(_, best_score)| score < best_score) {
            best = Some((feature_index, score));
        }
    }
    best.map(|(feature_index, _)| feature_index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn as_examples(rows: &[Vec<u8>]) -> Vec<&[u8]> {
        rows.iter().map(Vec::as_slice).collect()
    }

    fn random_rows(rng: &mut StdRng, n_rows: usize, n_features: usize) -> Vec<Vec<u8>> {
        (0..n_rows)
            .map(|_| {
                let mut row: Vec<u8> = (0..n_features).map(|_| rng.gen_range(0..3)).collect();
                row.push(rng.gen_range(0..4));
                row
            })
            .collect()
    }

    #[test]
    fn test_entropy_pure_subset() {
        let rows = vec![vec![0, 1], vec![1, 1], vec![2, 1]];
        assert_eq!(entropy(&as_examples(&rows)), 0.0);
        assert_eq!(gini_index(&as_examples(&rows)), 0.0);
    }

    #[test]
    fn test_entropy_even_split() {
        let rows = vec![vec![0, 0], vec![1, 1], vec![2, 2], vec![3, 3]];
        assert_relative_eq!(entropy(&as_examples(&rows)), 2.0, epsilon = 1e-12);
        assert_relative_eq!(gini_index(&as_examples(&rows)), 0.75, epsilon = 1e-12);
    }

    #[test]
    fn test_entropy_skewed() {
        let rows = vec![vec![0, 0], vec![0, 0], vec![0, 0], vec![0, 1]];
        let expected = -(0.75f64 * 0.75f64.log2() + 0.25 * 0.25f64.log2());
        assert_relative_eq!(entropy(&as_examples(&rows)), expected, epsilon = 1e-12);
    }

    #[test]
    fn test_entropy_empty() {
        assert_eq!(entropy::<u8>(&[]), 0.0);
        assert_eq!(gini_index::<u8>(&[]), 0.0);
    }

    #[test]
    fn test_split_entropy_perfect_feature() {
        // feature 0 determines the label, feature 1 is noise
        let rows = vec![vec![0, 0, 0], vec![0, 1, 0], vec![1, 0, 1], vec![1, 1, 1]];
        let examples = as_examples(&rows);
        let domains = FeatureDomains::from_examples(&examples, 2);

        assert_eq!(split_entropy(0, &domains, &examples), 0.0);
        assert_relative_eq!(split_entropy(1, &domains, &examples), 1.0, epsilon = 1e-12);
        assert_eq!(best_feature(Criterion::Entropy, &domains, &examples), Some(0));
        assert_eq!(best_feature(Criterion::Gini, &domains, &examples), Some(0));
    }

    #[test]
    fn test_split_impurity_skips_values_without_examples() {
        let rows = vec![vec![0, 0], vec![0, 1], vec![1, 1], vec![2, 0]];
        let examples = as_examples(&rows);
        let domains = FeatureDomains::from_examples(&examples, 1);

        // value 2 has no examples among the first three rows
        let score = split_entropy(0, &domains, &examples[..3]);
        assert_relative_eq!(score, 2.0 / 3.0, epsilon = 1e-12);
        assert!(score.is_finite());
    }

    #[test]
    fn test_best_feature_tie_goes_to_lowest_index() {
        let rows = vec![vec![0, 0, 0], vec![1, 1, 1]];
        let examples = as_examples(&rows);
        let domains = FeatureDomains::from_examples(&examples, 2);

        assert_eq!(best_feature(Criterion::Entropy, &domains, &examples), Some(0));
        assert_eq!(
            best_feature(Criterion::Entropy, &domains.without(0), &examples),
            Some(1)
        );
    }

    #[test]
    fn test_best_feature_tie_with_groups_in_different_order() {
        // both features split the labels into groups of (No, Yes) counts
        // (2, 1), (1, 2), (3, 4) and (3, 4), met in a different row order
        let rows = vec![
            vec![3, 1, 1],
            vec![0, 3, 1],
            vec![1, 2, 1],
            vec![3, 3, 1],
            vec![3, 0, 1],
            vec![2, 2, 0],
            vec![3, 2, 1],
            vec![0, 2, 0],
            vec![3, 1, 0],
            vec![1, 0, 0],
            vec![2, 0, 0],
            vec![2, 2, 1],
            vec![3, 3, 0],
            vec![0, 2, 0],
            vec![1, 3, 1],
            vec![2, 3, 0],
            vec![3, 3, 0],
            vec![2, 1, 1],
            vec![2, 3, 1],
            vec![2, 2, 1],
        ];
        let examples = as_examples(&rows);
        let domains = FeatureDomains::from_examples(&examples, 2);

        for criterion in [Criterion::Entropy, Criterion::Gini] {
            assert_eq!(
                split_impurity(criterion, 0, &domains, &examples),
                split_impurity(criterion, 1, &domains, &examples)
            );
            assert_eq!(best_feature(criterion, &domains, &examples), Some(0));
        }
    }

    #[test]
    fn test_best_feature_no_candidates() {
        let rows = vec![vec![0, 0], vec![1, 1]];
        let examples = as_examples(&rows);
        let domains = FeatureDomains::from_examples(&examples, 1).without(0);
        assert_eq!(best_feature(Criterion::Entropy, &domains, &examples), None);
    }

    #[test]
    fn test_entropy_bounds_on_random_subsets() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let n_rows = rng.gen_range(1..30);
            let rows = random_rows(&mut rng, n_rows, 3);
            let examples = as_examples(&rows);

            let n_classes = class_counts(&examples).len();
            let value = entropy(&examples);
            assert!(value >= 0.0);
            assert!(value <= (n_classes as f64).log2() + 1e-12);
            assert_eq!(value == 0.0, n_classes == 1);
        }
    }

    #[test]
    fn test_information_gain_is_never_negative() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let n_rows = rng.gen_range(1..40);
            let rows = random_rows(&mut rng, n_rows, 4);
            let examples = as_examples(&rows);
            let domains = FeatureDomains::from_examples(&examples, 4);

            for criterion in [Criterion::Entropy, Criterion::Gini] {
                let before = criterion.impurity(&examples);
                for feature_index in 0..4 {
                    let after = split_impurity(criterion, feature_index, &domains, &examples);
                    assert!(after <= before + 1e-12);
                }
            }
        }
    }
}
