//! Decision Tree Classifier
use super::builder::build_tree_with;
use super::node::TreeNode;
use super::params::{Criterion, DomainScope, TreeParams, UnseenValuePolicy};
use super::printer::render_tree;
use crate::data::dataset::{Dataset, DiscreteValue};
use crate::error::TreeError;
use crate::metrics::confusion::ClassificationMetrics;
use log::{info, warn};

/// ID3 decision tree classifier over discrete features.
#[derive(Clone, Debug)]
pub struct DecisionTreeClassifier<T: DiscreteValue> {
    root: Option<TreeNode<T>>,
    n_features: usize,
    tree_params: TreeParams,
}

impl<T: DiscreteValue> Default for DecisionTreeClassifier<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: DiscreteValue> ClassificationMetrics<T> for DecisionTreeClassifier<T> {}

impl<T: DiscreteValue> DecisionTreeClassifier<T> {
    /// Creates a classifier using entropy, observed domains and strict lookups.
    pub fn new() -> Self {
        Self {
            root: None,
            n_features: 0,
            tree_params: TreeParams::new(),
        }
    }

    /// Creates a classifier with custom parameters; `None` keeps the default.
    pub fn with_params(
        criterion: Option<Criterion>,
        domain_scope: Option<DomainScope>,
        unseen_value_policy: Option<UnseenValuePolicy>,
    ) -> Self {
        let mut tree = Self::new();
        tree.tree_params = TreeParams {
            criterion: criterion.unwrap_or_default(),
            domain_scope: domain_scope.unwrap_or_default(),
            unseen_value_policy: unseen_value_policy.unwrap_or_default(),
        };
        tree
    }

    /// Sets the splitting criterion from its name (`"entropy"` or `"gini"`).
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::InvalidCriterion`] for any other name.
    pub fn set_criterion(&mut self, criterion: &str) -> Result<(), TreeError> {
        self.tree_params.set_criterion(criterion)
    }

    /// Sets where branch values come from (`"observed"` or `"global"`).
    pub fn set_domain_scope(&mut self, domain_scope: &str) -> Result<(), TreeError> {
        self.tree_params.set_domain_scope(domain_scope)
    }

    /// Sets how unseen values are handled (`"error"` or `"majority"`).
    pub fn set_unseen_value_policy(&mut self, policy: &str) -> Result<(), TreeError> {
        self.tree_params.set_unseen_value_policy(policy)
    }

    pub fn criterion(&self) -> Criterion {
        self.tree_params.criterion()
    }

    pub fn domain_scope(&self) -> DomainScope {
        self.tree_params.domain_scope()
    }

    pub fn unseen_value_policy(&self) -> UnseenValuePolicy {
        self.tree_params.unseen_value_policy()
    }

    /// The fitted tree, if any.
    pub fn root(&self) -> Option<&TreeNode<T>> {
        self.root.as_ref()
    }

    /// Number of features seen by the last fit.
    pub fn n_features(&self) -> usize {
        self.n_features
    }

    /// Builds the tree from `dataset`, replacing any previous one.
    ///
    /// An empty dataset leaves the classifier without a tree and returns `None`.
    pub fn fit(&mut self, dataset: &Dataset<T>) -> Option<&TreeNode<T>> {
        self.n_features = dataset.n_features();
        self.root = build_tree_with(dataset, &self.tree_params);

        match &self.root {
            Some(root) => info!(
                "Finished building the tree: {} nodes, {} leaves, depth {}.",
                root.n_nodes(),
                root.n_leaves(),
                root.depth()
            ),
            None => warn!("No examples to learn from, the tree was not built."),
        }
        self.root.as_ref()
    }

    /// Predicts the class of a single instance.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::NotFitted`] before a successful fit, and
    /// [`TreeError::UnseenFeatureValue`] when the instance takes a value the
    /// tree never saw at a node and the policy is [`UnseenValuePolicy::Error`].
    pub fn predict_single(&self, instance: &[T]) -> Result<T, TreeError> {
        let root = self.root.as_ref().ok_or(TreeError::NotFitted)?;
        root.classify(instance, self.unseen_value_policy())
    }

    /// Predicts the class of every instance, stopping at the first failure.
    pub fn predict(&self, instances: &[Vec<T>]) -> Result<Vec<T>, TreeError> {
        instances
            .iter()
            .map(|instance| self.predict_single(instance))
            .collect()
    }

    /// Renders the tree; `feature_names` needs one name per feature plus the label name.
    pub fn render<S: AsRef<str>>(&self, feature_names: &[S]) -> Result<String, TreeError> {
        let root = self.root.as_ref().ok_or(TreeError::NotFitted)?;
        if feature_names.len() != self.n_features + 1 {
            return Err(TreeError::FeatureNameCount {
                expected: self.n_features + 1,
                found: feature_names.len(),
            });
        }
        render_tree(root, feature_names)
    }

    /// Prints the tree to standard output.
    pub fn print<S: AsRef<str>>(&self, feature_names: &[S]) -> Result<(), TreeError> {
        print!("{}", self.render(feature_names)?);
        Ok(())
    }
}
