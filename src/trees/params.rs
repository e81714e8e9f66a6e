use crate::error::TreeError;
use std::fmt;
use std::str::FromStr;

/// Impurity measure used to score a split.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Criterion {
    /// Shannon entropy (ID3 information gain).
    #[default]
    Entropy,
    /// Gini impurity.
    Gini,
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Entropy => "entropy",
            Self::Gini => "gini",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Criterion {
    type Err = TreeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "entropy" => Ok(Self::Entropy),
            "gini" => Ok(Self::Gini),
            other => Err(TreeError::InvalidCriterion(other.to_string())),
        }
    }
}

/// Where the values a node branches on come from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DomainScope {
    /// Values observed in the examples reaching the node.
    #[default]
    Observed,
    /// Values observed in the whole training table. Branches for values
    /// absent from a node's subset are kept as empty markers.
    Global,
}

impl fmt::Display for DomainScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Observed => "observed",
            Self::Global => "global",
        };
        write!(f, "{name}")
    }
}

impl FromStr for DomainScope {
    type Err = TreeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "observed" => Ok(Self::Observed),
            "global" => Ok(Self::Global),
            other => Err(TreeError::InvalidDomainScope(other.to_string())),
        }
    }
}

/// What classification does with a value a node never saw during training.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UnseenValuePolicy {
    /// Fail with [`TreeError::UnseenFeatureValue`].
    #[default]
    Error,
    /// Answer with the majority class of the node.
    MajorityClass,
}

impl fmt::Display for UnseenValuePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Error => "error",
            Self::MajorityClass => "majority",
        };
        write!(f, "{name}")
    }
}

impl FromStr for UnseenValuePolicy {
    type Err = TreeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "error" => Ok(Self::Error),
            "majority" => Ok(Self::MajorityClass),
            other => Err(TreeError::InvalidUnseenValuePolicy(other.to_string())),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TreeParams {
    pub criterion: Criterion,
    pub domain_scope: DomainScope,
    pub unseen_value_policy: UnseenValuePolicy,
}

impl TreeParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_criterion(&mut self, criterion: &str) -> Result<(), TreeError> {
        self.criterion = criterion.parse()?;
        Ok(())
    }

    pub fn set_domain_scope(&mut self, domain_scope: &str) -> Result<(), TreeError> {
        self.domain_scope = domain_scope.parse()?;
        Ok(())
    }

    pub fn set_unseen_value_policy(&mut self, policy: &str) -> Result<(), TreeError> {
        self.unseen_value_policy = policy.parse()?;
        Ok(())
    }

    pub fn criterion(&self) -> Criterion {
        self.criterion
    }

    pub fn domain_scope(&self) -> DomainScope {
        self.domain_scope
    }

    pub fn unseen_value_policy(&self) -> UnseenValuePolicy {
        self.unseen_value_policy
    }
}
