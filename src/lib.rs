//! # Rusty-id3
//!
//! `rusty-id3` learns classification decision trees from tables of discrete
//! values with the ID3 algorithm: at every node the feature whose split leaves
//! the lowest expected entropy is chosen, and the examples are partitioned by
//! that feature's values until a subset is pure or no feature is left.
//!
//! ## Getting Started
//!
//! To use `rusty-id3`, add the following to your `Cargo.toml` file:
//!
//! ```toml
//! [dependencies]
//! rusty-id3 = "*"
//! ```
//!
//! ## Example Usage
//!
//! Every row holds the feature values followed by the class label:
//!
//! ```rust
//! use rusty_id3::data::dataset::Dataset;
//! use rusty_id3::trees::classifier::DecisionTreeClassifier;
//!
//! let dataset = Dataset::new(vec![
//!     vec!["Red", "Sports", "Yes"],
//!     vec!["Red", "SUV", "No"],
//!     vec!["Yellow", "Sports", "Yes"],
//!     vec!["Yellow", "SUV", "No"],
//! ])
//! .unwrap();
//!
//! let mut model = DecisionTreeClassifier::new();
//! model.fit(&dataset);
//!
//! let prediction = model.predict_single(&["Red", "Sports"]).unwrap();
//! assert_eq!(prediction, "Yes");
//!
//! let rules = model.render(&["Color", "Type", "Stolen"]).unwrap();
//! assert_eq!(rules, "  Type == Sports\n    Stolen: Yes\n  Type == SUV\n    Stolen: No\n");
//! ```

/// Example tables and value domains
pub mod data;
/// Error type shared by the crate
pub mod error;
/// Functions for evaluating model performance
pub mod metrics;
/// Decision trees
pub mod trees;

pub use error::TreeError;
