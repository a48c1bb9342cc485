use crate::core::value::ValueDomain;
use crate::filter::kind::FilterKind;
use crate::filter::operator::CompareOp;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum FilterError {
    #[error("invalid value for filter '{kind}': expected {expected} value(s), got {found}")]
    ValueType {
        kind: FilterKind,
        expected: ValueDomain,
        found: String,
    },

    #[error("operator '{operator}' is not valid for filter '{kind}': {reason}")]
    InvalidOperator {
        kind: FilterKind,
        operator: CompareOp,
        reason: String,
    },

    #[error("invalid combination: {0}")]
    InvalidCombination(String),
}
