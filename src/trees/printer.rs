//! Text rendering of a tree as nested rules.
use super::node::TreeNode;
use crate::data::dataset::DiscreteValue;
use crate::error::TreeError;
use std::fmt::Write;

/// Renders `tree` as indented rules, one line per test or prediction.
///
/// `feature_names` holds one name per feature followed by the name used on
/// prediction lines. Branches appear in the order the tree stores them.
///
/// ```text
///   Type == Sports
///     Stolen: Yes
///   Type == SUV
///     Stolen: No
/// ```
pub fn render_tree<T, S>(tree: &TreeNode<T>, feature_names: &[S]) -> Result<String, TreeError>
where
    T: DiscreteValue,
    S: AsRef<str>,
{
    let label_name = feature_names
        .last()
        .ok_or(TreeError::MissingLabelName)?
        .as_ref();
    let mut out = String::new();
    render_node(tree, feature_names, label_name, 1, &mut out)?;
    Ok(out)
}

/// Prints [`render_tree`] output to standard output.
pub fn print_tree<T, S>(tree: &TreeNode<T>, feature_names: &[S]) -> Result<(), TreeError>
where
    T: DiscreteValue,
    S: AsRef<str>,
{
    print!("{}", render_tree(tree, feature_names)?);
    Ok(())
}

fn render_node<T, S>(
    node: &TreeNode<T>,
    feature_names: &[S],
    label_name: &str,
    depth: usize,
    out: &mut String,
) -> Result<(), TreeError>
where
    T: DiscreteValue,
    S: AsRef<str>,
{
    let indent = "  ".repeat(depth);
    match node {
        TreeNode::Leaf { majority_class } => {
            writeln!(out, "{indent}{label_name}: {majority_class}")?;
        }
        TreeNode::Internal {
            feature_index,
            majority_class,
            branches,
        } => {
            // the last name belongs to the label, never to a feature
            let feature_name = feature_names
                .get(*feature_index)
                .filter(|_| *feature_index + 1 < feature_names.len())
                .ok_or(TreeError::MissingFeatureName(*feature_index))?
                .as_ref();

            for branch in branches {
                writeln!(out, "{indent}{feature_name} == {}", branch.value)?;
                match branch.child() {
                    Some(child) => render_node(child, feature_names, label_name, depth + 1, out)?,
                    None => writeln!(out, "{indent}  {label_name}: {majority_class}")?,
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::dataset::Dataset;
    use crate::trees::builder::{build_tree, build_tree_with};
    use crate::trees::node::Branch;
    use crate::trees::params::TreeParams;

    const NAMES: [&str; 4] = ["Color", "Type", "Origin", "Stolen"];

    fn car_theft() -> Dataset<&'static str> {
        Dataset::new(vec![
            vec!["Red", "Sports", "Domestic", "Yes"],
            vec!["Red", "Sports", "Domestic", "No"],
            vec!["Red", "Sports", "Domestic", "Yes"],
            vec!["Yellow", "Sports", "Domestic", "No"],
            vec!["Yellow", "Sports", "Imported", "Yes"],
            vec!["Yellow", "SUV", "Imported", "No"],
            vec!["Yellow", "SUV", "Imported", "Yes"],
            vec!["Yellow", "SUV", "Domestic", "No"],
            vec!["Red", "SUV", "Imported", "No"],
            vec!["Red", "Sports", "Imported", "Yes"],
        ])
        .unwrap()
    }

    #[test]
    fn test_render_leaf() {
        let tree = TreeNode::leaf("Yes");
        assert_eq!(render_tree(&tree, &NAMES).unwrap(), "  Stolen: Yes\n");
    }

    #[test]
    fn test_render_car_theft() {
        let tree = build_tree(&car_theft()).unwrap();

        let expected = concat!(
            "  Type == Sports\n",
            "    Origin == Domestic\n",
            "      Color == Red\n",
            "        Stolen: Yes\n",
            "      Color == Yellow\n",
            "        Stolen: No\n",
            "    Origin == Imported\n",
            "      Stolen: Yes\n",
            "  Type == SUV\n",
            "    Color == Yellow\n",
            "      Origin == Imported\n",
            "        Stolen: No\n",
            "      Origin == Domestic\n",
            "        Stolen: No\n",
            "    Color == Red\n",
            "      Stolen: No\n",
        );
        assert_eq!(render_tree(&tree, &NAMES).unwrap(), expected);
    }

    #[test]
    fn test_render_empty_branch_uses_parent_majority() {
        let tree = TreeNode::Internal {
            feature_index: 0,
            majority_class: "No",
            branches: vec![
                Branch {
                    value: "Red",
                    child: Some(Box::new(TreeNode::leaf("Yes"))),
                },
                Branch {
                    value: "Blue",
                    child: None,
                },
            ],
        };

        let expected = concat!(
            "  Color == Red\n",
            "    Stolen: Yes\n",
            "  Color == Blue\n",
            "    Stolen: No\n",
        );
        assert_eq!(render_tree(&tree, &["Color", "Stolen"]).unwrap(), expected);
    }

    #[test]
    fn test_render_global_scope() {
        let dataset = Dataset::new(vec![
            vec!["SUV", "Red", "Yes"],
            vec!["SUV", "Yellow", "No"],
            vec!["SUV", "Yellow", "No"],
            vec!["Sports", "Blue", "Yes"],
            vec!["Sports", "Red", "Yes"],
            vec!["Sports", "Yellow", "Yes"],
            vec!["Sports", "Yellow", "Yes"],
        ])
        .unwrap();
        let mut params = TreeParams::new();
        params.set_domain_scope("global").unwrap();
        let tree = build_tree_with(&dataset, &params).unwrap();

        let names = vec!["Type".to_string(), "Color".to_string(), "Stolen".to_string()];
        let expected = concat!(
            "  Type == SUV\n",
            "    Color == Red\n",
            "      Stolen: Yes\n",
            "    Color == Yellow\n",
            "      Stolen: No\n",
            "    Color == Blue\n",
            "      Stolen: No\n",
            "  Type == Sports\n",
            "    Stolen: Yes\n",
        );
        assert_eq!(render_tree(&tree, &names).unwrap(), expected);
    }

    #[test]
    fn test_render_missing_names() {
        let tree = build_tree(&car_theft()).unwrap();

        let no_names: [&str; 0] = [];
        assert_eq!(
            render_tree(&tree, &no_names),
            Err(TreeError::MissingLabelName)
        );
        assert_eq!(
            render_tree(&TreeNode::leaf("Yes"), &no_names),
            Err(TreeError::MissingLabelName)
        );
        // "Origin" would be taken for the label, leaving feature 2 unnamed
        assert_eq!(
            render_tree(&tree, &["Color", "Type", "Origin"]),
            Err(TreeError::MissingFeatureName(2))
        );
    }

    #[test]
    fn test_render_lines_keep_leading_indent() {
        let tree = build_tree(&car_theft()).unwrap();
        let rendered = render_tree(&tree, &NAMES).unwrap();

        assert!(rendered.ends_with('\n'));
        for line in rendered.lines() {
            let indent = line.len() - line.trim_start().len();
            assert!(indent >= 2 && indent % 2 == 0, "bad indent in {line:?}");
        }
        assert_eq!(rendered.lines().next(), Some("  Type == Sports"));
    }

    #[test]
    fn test_print_tree() {
        let tree = build_tree(&car_theft()).unwrap();
        assert!(print_tree(&tree, &NAMES).is_ok());
    }
}
