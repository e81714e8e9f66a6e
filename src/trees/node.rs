use super::params::UnseenValuePolicy;
use crate::data::dataset::DiscreteValue;
use crate::error::TreeError;

/// Edge of an internal node: a feature value and the subtree it leads to.
///
/// `child` is `None` when no training example reached this value; the
/// parent's majority class answers for it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Branch<T: DiscreteValue> {
    pub value: T,
    pub child: Option<Box<TreeNode<T>>>,
}

impl<T: DiscreteValue> Branch<T> {
    pub fn child(&self) -> Option<&TreeNode<T>> {
        self.child.as_deref()
    }
}

/// Decision tree node
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TreeNode<T: DiscreteValue> {
    Leaf {
        majority_class: T,
    },
    Internal {
        feature_index: usize,
        majority_class: T,
        /// One branch per value of the split feature, in training order.
        branches: Vec<Branch<T>>,
    },
}

impl<T: DiscreteValue> TreeNode<T> {
    pub fn leaf(majority_class: T) -> Self {
        Self::Leaf { majority_class }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf { .. })
    }

    /// Feature the node splits on, `None` for a leaf.
    pub fn split_feature(&self) -> Option<usize> {
        match self {
            Self::Leaf { .. } => None,
            Self::Internal { feature_index, .. } => Some(*feature_index),
        }
    }

    pub fn majority_class(&self) -> &T {
        match self {
            Self::Leaf { majority_class } | Self::Internal { majority_class, .. } => majority_class,
        }
    }

    /// Branches of an internal node; empty for a leaf.
    pub fn branches(&self) -> &[Branch<T>] {
        match self {
            Self::Leaf { .. } => &[],
            Self::Internal { branches, .. } => branches,
        }
    }

    /// Branch for `value`, `None` if the value was not seen at this node.
    pub fn branch(&self, value: &T) -> Option<&Branch<T>> {
        self.branches().iter().find(|branch| &branch.value == value)
    }

    /// Number of split levels below this node.
    pub fn depth(&self) -> usize {
        self.branches()
            .iter()
            .filter_map(Branch::child)
            .map(|child| child.depth() + 1)
            .max()
            .unwrap_or(0)
    }

    pub fn n_nodes(&self) -> usize {
        1 + self
            .branches()
            .iter()
            .filter_map(Branch::child)
            .map(TreeNode::n_nodes)
            .sum::<usize>()
    }

    pub fn n_leaves(&self) -> usize {
        match self {
            Self::Leaf { .. } => 1,
            Self::Internal { branches, .. } => branches
                .iter()
                .filter_map(Branch::child)
                .map(TreeNode::n_leaves)
                .sum(),
        }
    }

    /// Walks the tree for `instance` and returns the predicted class.
    ///
    /// `instance` holds feature values in training column order; a trailing
    /// label is ignored.
    pub fn classify(&self, instance: &[T], policy: UnseenValuePolicy) -> Result<T, TreeError> {
        let mut node = self;
        loop {
            let (feature_index, majority_class) = match node {
                Self::Leaf { majority_class } => return Ok(majority_class.clone()),
                Self::Internal {
                    feature_index,
                    majority_class,
                    ..
                } => (*feature_index, majority_class),
            };

            let value = instance
                .get(feature_index)
                .ok_or(TreeError::InstanceTooShort {
                    feature_index,
                    found: instance.len(),
                })?;

            match node.branch(value) {
                Some(branch) => match branch.child() {
                    Some(child) => node = child,
                    None => return Ok(majority_class.clone()),
                },
                None => {
                    return match policy {
                        UnseenValuePolicy::MajorityClass => Ok(majority_class.clone()),
                        UnseenValuePolicy::Error => Err(TreeError::UnseenFeatureValue {
                            feature_index,
                            value: value.to_string(),
                        }),
                    }
                }
            }
        }
    }
}

/// Classifies `instance`, failing on values the tree never saw at a node.
pub fn classify<T: DiscreteValue>(tree: &TreeNode<T>, instance: &[T]) -> Result<T, TreeError> {
    tree.classify(instance, UnseenValuePolicy::Error)
}
