use serde::{Deserialize, Serialize};
use std::fmt;

/// Comparison operators accepted by filter leaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompareOp {
    Eq,
    NotEq,
    Gt,
    GtEq,
    Lt,
    LtEq,
    StartsWith,
    EndsWith,
    Contains,
}

impl CompareOp {
    /// True for operators that match on substrings rather than whole values.
    pub fn is_pattern(&self) -> bool {
        matches!(
            self,
            CompareOp::StartsWith | CompareOp::EndsWith | CompareOp::Contains
        )
    }

    /// True for operators that can fold a multi-value leaf into a set membership test.
    pub fn supports_membership(&self) -> bool {
        matches!(self, CompareOp::Eq | CompareOp::NotEq)
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompareOp::Eq => write!(f, "=="),
            CompareOp::NotEq => write!(f, "!="),
            CompareOp::Gt => write!(f, ">"),
            CompareOp::GtEq => write!(f, ">="),
            CompareOp::Lt => write!(f, "<"),
            CompareOp::LtEq => write!(f, "<="),
            CompareOp::StartsWith => write!(f, "startsWith"),
            CompareOp::EndsWith => write!(f, "endsWith"),
            CompareOp::Contains => write!(f, "contains"),
        }
    }
}

/// Logical connectives joining the children of a combination node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogicalOp {
    And,
    Or,
}

impl fmt::Display for LogicalOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogicalOp::And => write!(f, "&"),
            LogicalOp::Or => write!(f, "|"),
        }
    }
}
