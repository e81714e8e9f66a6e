//! Errors
//!
//! Custom error types used throughout the `rusty-id3` crate.
use thiserror::Error;

/// Errors that can occur while building, querying or evaluating a tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    /// A row has a different number of values than the first row.
    #[error("Row {row} has {found} values, expected {expected}.")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A row without any value, not even a label.
    #[error("Row {0} is empty, every example needs at least a class label.")]
    EmptyRow(usize),
    /// The value of the instance at a split was never seen at that node during training.
    #[error("Value {value} of feature {feature_index} was not observed during training.")]
    UnseenFeatureValue { feature_index: usize, value: String },
    /// The instance does not reach the feature index a node splits on.
    #[error("Instance has {found} values but the tree splits on feature {feature_index}.")]
    InstanceTooShort { feature_index: usize, found: usize },
    /// No name was given for a feature the tree splits on.
    #[error("No feature name provided for index {0}.")]
    MissingFeatureName(usize),
    /// The name list is empty, so prediction lines have no label name.
    #[error("No name provided for the class label.")]
    MissingLabelName,
    /// Writing the rendered tree failed.
    #[error("Failed to format the tree: {0}")]
    Format(#[from] std::fmt::Error),
    /// Feature names must cover every feature plus the label.
    #[error("Expected {expected} feature names (features plus label), got {found}.")]
    FeatureNameCount { expected: usize, found: usize },
    /// The classifier was used before a tree was built.
    #[error("Tree wasn't built yet.")]
    NotFitted,
    /// Unknown splitting criterion.
    #[error("The criterion must be either 'entropy' or 'gini', got '{0}'.")]
    InvalidCriterion(String),
    /// Unknown domain scope.
    #[error("The domain scope must be either 'observed' or 'global', got '{0}'.")]
    InvalidDomainScope(String),
    /// Unknown policy for unseen feature values.
    #[error("The unseen value policy must be either 'error' or 'majority', got '{0}'.")]
    InvalidUnseenValuePolicy(String),
    /// Predictions and labels differ in length.
    #[error("Predictions and labels are of different sizes ({0} and {1}).")]
    LengthMismatch(usize, usize),
    /// A score that cannot be computed for the given labels.
    #[error("{0}")]
    UndefinedScore(String),
}
