/// Recursive tree induction
pub mod builder;
/// Decision tree classifier
pub mod classifier;
/// Split scoring and feature selection
pub mod criterion;
/// Tree nodes and classification
pub mod node;
/// Tree parameters
pub mod params;
/// Text rendering of trees
pub mod printer;

pub use builder::{build_tree, build_tree_with};
pub use node::{classify, Branch, TreeNode};
pub use printer::{print_tree, render_tree};
