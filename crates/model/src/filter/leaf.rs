use crate::core::value::{Value, ValueDomain};
use crate::errors::FilterError;
use crate::filter::kind::FilterKind;
use crate::filter::operator::CompareOp;
use serde::{Deserialize, Serialize};

/// A single filter condition: one kind, one operator, one or more values.
///
/// Leaves are only obtainable through [`FilterLeaf::new`] and
/// [`FilterLeaf::with_operator`], which reject empty value lists, values
/// outside the kind's domain and operator/value-count mismatches. Code
/// holding a leaf can therefore rely on those invariants.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FilterLeaf {
    kind: FilterKind,
    operator: CompareOp,
    values: Vec<Value>,
}

impl FilterLeaf {
    /// Builds a leaf using the kind's default operator.
    pub fn new(kind: FilterKind, values: Vec<Value>) -> Result<FilterLeaf, FilterError> {
        FilterLeaf::with_operator(kind, kind.default_operator(), values)
    }

    /// Builds a leaf with an explicit operator.
    pub fn with_operator(
        kind: FilterKind,
        operator: CompareOp,
        values: Vec<Value>,
    ) -> Result<FilterLeaf, FilterError> {
        if values.is_empty() {
            return Err(FilterError::ValueType {
                kind,
                expected: kind.domain(),
                found: "no values".to_string(),
            });
        }

        for value in &values {
            if value.domain() != kind.domain() {
                return Err(FilterError::ValueType {
                    kind,
                    expected: kind.domain(),
                    found: format!("{} value '{}'", value.domain(), value),
                });
            }
        }

        if operator.is_pattern() && kind.domain() == ValueDomain::Numeric {
            return Err(FilterError::InvalidOperator {
                kind,
                operator,
                reason: "pattern operators require a text filter".to_string(),
            });
        }

        if values.len() > 1 && !operator.supports_membership() {
            return Err(FilterError::InvalidOperator {
                kind,
                operator,
                reason: "only == and != accept multiple values".to_string(),
            });
        }

        Ok(FilterLeaf {
            kind,
            operator,
            values,
        })
    }

    pub fn kind(&self) -> FilterKind {
        self.kind
    }

    pub fn operator(&self) -> CompareOp {
        self.operator
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_operator_applied() {
        let leaf = FilterLeaf::new(FilterKind::CompoundId, vec![Value::from("comp_a")]).unwrap();
        assert_eq!(leaf.operator(), CompareOp::Eq);

        let leaf = FilterLeaf::new(FilterKind::MsmsMzMin, vec![Value::from(100.0)]).unwrap();
        assert_eq!(leaf.operator(), CompareOp::GtEq);
    }

    #[test]
    fn test_empty_values_rejected() {
        let err = FilterLeaf::new(FilterKind::CompoundId, vec![]).unwrap_err();
        assert!(matches!(err, FilterError::ValueType { .. }));
    }

    #[test]
    fn test_domain_mismatch_rejected() {
        let err = FilterLeaf::new(FilterKind::ExactMass, vec![Value::from("heavy")]).unwrap_err();
        assert!(matches!(
            err,
            FilterError::ValueType {
                kind: FilterKind::ExactMass,
                ..
            }
        ));

        let err =
            FilterLeaf::new(FilterKind::CompoundName, vec![Value::from(42i64)]).unwrap_err();
        assert!(matches!(err, FilterError::ValueType { .. }));
    }

    #[test]
    fn test_mixed_values_rejected() {
        let err = FilterLeaf::new(
            FilterKind::CompoundId,
            vec![Value::from("comp_a"), Value::from(7i64)],
        )
        .unwrap_err();
        assert!(matches!(err, FilterError::ValueType { .. }));
    }

    #[test]
    fn test_pattern_on_numeric_rejected() {
        let err = FilterLeaf::with_operator(
            FilterKind::ExactMass,
            CompareOp::Contains,
            vec![Value::from(180.042)],
        )
        .unwrap_err();
        assert!(matches!(err, FilterError::InvalidOperator { .. }));
    }

    #[test]
    fn test_multi_value_requires_membership_operator() {
        let err = FilterLeaf::with_operator(
            FilterKind::ExactMass,
            CompareOp::Gt,
            vec![Value::from(100.0), Value::from(200.0)],
        )
        .unwrap_err();
        assert!(matches!(err, FilterError::InvalidOperator { .. }));

        let ok = FilterLeaf::with_operator(
            FilterKind::CompoundId,
            CompareOp::NotEq,
            vec![Value::from("a"), Value::from("b")],
        );
        assert!(ok.is_ok());
    }
}
