use crate::error::TreeError;
use std::collections::BTreeMap;
use std::fmt::{self, Debug, Display, Formatter};

/// Discrete attribute or class value.
///
/// Values are compared by equality when partitioning; the total order is only
/// used to break ties deterministically.
pub trait DiscreteValue: Debug + Display + Clone + Ord + 'static {}
impl<T> DiscreteValue for T where T: Debug + Display + Clone + Ord + 'static {}

/// Table of labeled examples.
///
/// Every row holds the feature values followed by the class label, and all
/// rows share the same arity.
#[derive(Clone, PartialEq, Eq)]
pub struct Dataset<T: DiscreteValue> {
    rows: Vec<Vec<T>>,
    n_features: usize,
}

impl<T: DiscreteValue> Debug for Dataset<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Dataset {{\n    rows: [\n")?;

        for row in &self.rows {
            write!(f, "        [")?;
            for value in row {
                write!(f, "{:?}, ", value)?;
            }
            writeln!(f, "],")?;
        }

        write!(f, "    ],\n    n_features: {}\n}}", self.n_features)
    }
}

impl<T: DiscreteValue> Dataset<T> {
    /// Creates a dataset, checking that every row has the arity of the first one.
    ///
    /// An empty table is valid and has zero features.
    pub fn new(rows: Vec<Vec<T>>) -> Result<Self, TreeError> {
        let arity = match rows.first() {
            Some(first) => first.len(),
            None => {
                return Ok(Self {
                    rows,
                    n_features: 0,
                })
            }
        };

        for (index, row) in rows.iter().enumerate() {
            if row.is_empty() {
                return Err(TreeError::EmptyRow(index));
            }
            if row.len() != arity {
                return Err(TreeError::RaggedRow {
                    row: index,
                    expected: arity,
                    found: row.len(),
                });
            }
        }

        Ok(Self {
            rows,
            n_features: arity - 1,
        })
    }

    pub fn rows(&self) -> &[Vec<T>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of feature columns, the label excluded.
    pub fn n_features(&self) -> usize {
        self.n_features
    }

    /// Borrowed view of every row, the form the tree builder works on.
    pub fn examples(&self) -> Vec<&[T]> {
        self.rows.iter().map(Vec::as_slice).collect()
    }

    pub fn labels(&self) -> Vec<T> {
        self.rows.iter().filter_map(|row| row.last().cloned()).collect()
    }

    /// Feature values of a row, the label stripped.
    pub fn features(&self, row: usize) -> Option<&[T]> {
        self.rows.get(row).map(|values| &values[..self.n_features])
    }

    /// Rows whose value for `feature_index` equals `value`.
    pub fn filter(&self, feature_index: usize, value: &T) -> Self {
        let rows = self
            .rows
            .iter()
            .filter(|row| row.get(feature_index) == Some(value))
            .cloned()
            .collect();

        Self {
            rows,
            n_features: self.n_features,
        }
    }
}

/// Class label of an example (its last value).
pub fn label<T>(example: &[T]) -> Option<&T> {
    example.last()
}

/// Number of occurrences of each class label, keyed in label order.
pub fn class_counts<'a, T: DiscreteValue>(examples: &[&'a [T]]) -> BTreeMap<&'a T, usize> {
    examples
        .iter()
        .filter_map(|example| label(example))
        .fold(BTreeMap::new(), |mut acc, class| {
            *acc.entry(class).or_insert(0) += 1;
            acc
        })
}

/// Most frequent class label; ties go to the smallest label.
///
/// Returns `None` for an empty subset.
pub fn majority_class<T: DiscreteValue>(examples: &[&[T]]) -> Option<T> {
    let mut best: Option<(&T, usize)> = None;
    for (class, count) in class_counts(examples) {
        if best.map_or(true, |(_, best_count)| count > best_count) {
            best = Some((class, count));
        }
    }
    best.map(|(class, _)| class.clone())
}

/// Whether every example carries the same class label.
pub fn is_pure<T: DiscreteValue>(examples: &[&[T]]) -> bool {
    let mut labels = examples.iter().filter_map(|example| label(example));
    match labels.next() {
        Some(first) => labels.all(|class| class == first),
        None => true,
    }
}

/// Subset of examples with the given value for the given feature.
pub fn filter_examples<'a, T: DiscreteValue>(
    examples: &[&'a [T]],
    feature_index: usize,
    value: &T,
) -> Vec<&'a [T]> {
    examples
        .iter()
        .filter(|example| example.get(feature_index) == Some(value))
        .copied()
        .collect()
}

/// Distinct values of a feature in order of first appearance.
pub fn feature_domain<T: DiscreteValue>(examples: &[&[T]], feature_index: usize) -> Vec<T> {
    let mut domain: Vec<T> = Vec::new();
    for value in examples.iter().filter_map(|example| example.get(feature_index)) {
        if !domain.contains(value) {
            domain.push(value.clone());
        }
    }
    domain
}
