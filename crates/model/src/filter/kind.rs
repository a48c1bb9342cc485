use crate::core::value::ValueDomain;
use crate::filter::operator::CompareOp;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of annotation filters the store understands.
///
/// Each kind carries its caller-facing field name, the value domain it
/// accepts, the database column it targets and the comparison operator
/// used when the caller does not pick one.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum FilterKind {
    CompoundId,
    CompoundName,
    Formula,
    ExactMass,
    Inchi,
    Inchikey,
    SpectrumId,
    MsmsMzMin,
    MsmsMzMax,
}

impl FilterKind {
    pub const ALL: [FilterKind; 9] = [
        FilterKind::CompoundId,
        FilterKind::CompoundName,
        FilterKind::Formula,
        FilterKind::ExactMass,
        FilterKind::Inchi,
        FilterKind::Inchikey,
        FilterKind::SpectrumId,
        FilterKind::MsmsMzMin,
        FilterKind::MsmsMzMax,
    ];

    /// Field name used in filter expressions and error messages.
    pub fn name(&self) -> &'static str {
        match self {
            FilterKind::CompoundId => "compound_id",
            FilterKind::CompoundName => "compound_name",
            FilterKind::Formula => "formula",
            FilterKind::ExactMass => "exact_mass",
            FilterKind::Inchi => "inchi",
            FilterKind::Inchikey => "inchikey",
            FilterKind::SpectrumId => "spectrum_id",
            FilterKind::MsmsMzMin => "msms_mz_min",
            FilterKind::MsmsMzMax => "msms_mz_max",
        }
    }

    /// The value domain a leaf of this kind accepts.
    pub fn domain(&self) -> ValueDomain {
        match self {
            FilterKind::ExactMass | FilterKind::MsmsMzMin | FilterKind::MsmsMzMax => {
                ValueDomain::Numeric
            }
            _ => ValueDomain::Text,
        }
    }

    /// Database column the kind translates to.
    pub fn column(&self) -> &'static str {
        match self {
            FilterKind::CompoundId => "compound_id",
            FilterKind::CompoundName => "compound_name",
            FilterKind::Formula => "formula",
            FilterKind::ExactMass => "mass",
            FilterKind::Inchi => "inchi",
            FilterKind::Inchikey => "inchikey",
            FilterKind::SpectrumId => "spectrum_id",
            FilterKind::MsmsMzMin | FilterKind::MsmsMzMax => "mz",
        }
    }

    /// Operator applied when the caller supplies values without one.
    pub fn default_operator(&self) -> CompareOp {
        match self {
            FilterKind::MsmsMzMin => CompareOp::GtEq,
            FilterKind::MsmsMzMax => CompareOp::LtEq,
            _ => CompareOp::Eq,
        }
    }

    /// True for kinds that only stores with MS/MS spectra support.
    pub fn msms_gated(&self) -> bool {
        matches!(
            self,
            FilterKind::SpectrumId | FilterKind::MsmsMzMin | FilterKind::MsmsMzMax
        )
    }

    /// Resolves a field name from an expression to its kind.
    pub fn from_name(name: &str) -> Option<FilterKind> {
        FilterKind::ALL.iter().find(|k| k.name() == name).copied()
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_roundtrip() {
        for kind in FilterKind::ALL {
            assert_eq!(FilterKind::from_name(kind.name()), Some(kind));
        }
        assert_eq!(FilterKind::from_name("retention_time"), None);
    }

    #[test]
    fn test_domains() {
        assert_eq!(FilterKind::CompoundName.domain(), ValueDomain::Text);
        assert_eq!(FilterKind::ExactMass.domain(), ValueDomain::Numeric);
        assert_eq!(FilterKind::MsmsMzMin.domain(), ValueDomain::Numeric);
    }

    #[test]
    fn test_columns() {
        assert_eq!(FilterKind::ExactMass.column(), "mass");
        assert_eq!(FilterKind::MsmsMzMin.column(), "mz");
        assert_eq!(FilterKind::MsmsMzMax.column(), "mz");
        assert_eq!(FilterKind::CompoundId.column(), "compound_id");
    }

    #[test]
    fn test_default_operators() {
        assert_eq!(FilterKind::MsmsMzMin.default_operator(), CompareOp::GtEq);
        assert_eq!(FilterKind::MsmsMzMax.default_operator(), CompareOp::LtEq);
        assert_eq!(FilterKind::Formula.default_operator(), CompareOp::Eq);
    }

    #[test]
    fn test_msms_gating() {
        assert!(FilterKind::SpectrumId.msms_gated());
        assert!(FilterKind::MsmsMzMin.msms_gated());
        assert!(!FilterKind::CompoundId.msms_gated());
    }
}
