use crate::errors::FilterError;
use crate::filter::kind::FilterKind;
use crate::filter::leaf::FilterLeaf;
use crate::filter::operator::LogicalOp;
use serde::{Deserialize, Serialize};

/// A predicate over the annotation store: a single leaf or a combination
/// of subtrees joined pairwise by logical operators.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum PredicateTree {
    Leaf(FilterLeaf),
    Combination(Combination),
}

/// An n-ary combination node. `joins` sits between consecutive children,
/// so a well-formed node holds exactly `children.len() - 1` joins.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Combination {
    children: Vec<PredicateTree>,
    joins: Vec<LogicalOp>,
}

impl PredicateTree {
    /// Combines subtrees into one predicate. A single child collapses to
    /// itself instead of producing a one-element combination node.
    pub fn combine(
        mut children: Vec<PredicateTree>,
        joins: Vec<LogicalOp>,
    ) -> Result<PredicateTree, FilterError> {
        if children.is_empty() {
            return Err(FilterError::InvalidCombination(
                "a combination needs at least one child".to_string(),
            ));
        }
        if joins.len() != children.len() - 1 {
            return Err(FilterError::InvalidCombination(format!(
                "{} children require {} join(s), got {}",
                children.len(),
                children.len() - 1,
                joins.len()
            )));
        }
        if children.len() == 1 {
            return Ok(children.remove(0));
        }
        Ok(PredicateTree::Combination(Combination { children, joins }))
    }

    /// All filter kinds referenced anywhere in the tree, depth first.
    pub fn kinds(&self) -> Vec<FilterKind> {
        let mut kinds = Vec::new();
        self.collect_kinds(&mut kinds);
        kinds
    }

    fn collect_kinds(&self, out: &mut Vec<FilterKind>) {
        match self {
            PredicateTree::Leaf(leaf) => out.push(leaf.kind()),
            PredicateTree::Combination(combination) => {
                for child in &combination.children {
                    child.collect_kinds(out);
                }
            }
        }
    }
}

impl Combination {
    pub fn children(&self) -> &[PredicateTree] {
        &self.children
    }

    pub fn joins(&self) -> &[LogicalOp] {
        &self.joins
    }
}

impl From<FilterLeaf> for PredicateTree {
    fn from(leaf: FilterLeaf) -> Self {
        PredicateTree::Leaf(leaf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::value::Value;

    fn leaf(kind: FilterKind, value: &str) -> PredicateTree {
        FilterLeaf::new(kind, vec![Value::from(value)])
            .unwrap()
            .into()
    }

    #[test]
    fn test_single_child_collapses() {
        let child = leaf(FilterKind::CompoundId, "comp_a");
        let combined = PredicateTree::combine(vec![child.clone()], vec![]).unwrap();
        assert_eq!(combined, child);
    }

    #[test]
    fn test_empty_combination_rejected() {
        let err = PredicateTree::combine(vec![], vec![]).unwrap_err();
        assert!(matches!(err, FilterError::InvalidCombination(_)));
    }

    #[test]
    fn test_join_arity_checked() {
        let children = vec![
            leaf(FilterKind::CompoundId, "a"),
            leaf(FilterKind::CompoundName, "b"),
        ];
        let err = PredicateTree::combine(children.clone(), vec![]).unwrap_err();
        assert!(matches!(err, FilterError::InvalidCombination(_)));

        let err =
            PredicateTree::combine(children.clone(), vec![LogicalOp::And, LogicalOp::Or])
                .unwrap_err();
        assert!(matches!(err, FilterError::InvalidCombination(_)));

        assert!(PredicateTree::combine(children, vec![LogicalOp::And]).is_ok());
    }

    #[test]
    fn test_kinds_depth_first() {
        let inner = PredicateTree::combine(
            vec![
                leaf(FilterKind::CompoundName, "b"),
                leaf(FilterKind::Formula, "C8H10N4O2"),
            ],
            vec![LogicalOp::Or],
        )
        .unwrap();
        let tree = PredicateTree::combine(
            vec![leaf(FilterKind::CompoundId, "a"), inner],
            vec![LogicalOp::And],
        )
        .unwrap();
        assert_eq!(
            tree.kinds(),
            vec![
                FilterKind::CompoundId,
                FilterKind::CompoundName,
                FilterKind::Formula
            ]
        );
    }
}
