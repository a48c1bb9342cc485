use crate::capabilities::CapabilitySet;
use crate::render::{Render, Renderer};
use model::{FilterKind, PredicateTree};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("filters not supported by this store: {}", join_kinds(.0))]
    UnsupportedFilters(Vec<FilterKind>),
}

fn join_kinds(kinds: &[FilterKind]) -> String {
    kinds
        .iter()
        .map(|kind| kind.name())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Proof that a predicate only references filters the store supports.
///
/// Obtainable only through [`validate`], which makes [`ValidatedTree::to_sql`]
/// infallible: every kind in the tree has a registered column.
#[derive(Debug)]
pub struct ValidatedTree<'a> {
    tree: &'a PredicateTree,
    capabilities: &'a CapabilitySet,
}

/// Checks a predicate against the store's capabilities.
///
/// Walks the whole tree and reports every unsupported kind at once, sorted
/// and deduplicated, so the caller can fix the complete query in one pass.
pub fn validate<'a>(
    tree: &'a PredicateTree,
    capabilities: &'a CapabilitySet,
) -> Result<ValidatedTree<'a>, ValidationError> {
    let mut unsupported: Vec<FilterKind> = tree
        .kinds()
        .into_iter()
        .filter(|kind| !capabilities.supports(*kind))
        .collect();

    if unsupported.is_empty() {
        return Ok(ValidatedTree { tree, capabilities });
    }

    unsupported.sort();
    unsupported.dedup();
    Err(ValidationError::UnsupportedFilters(unsupported))
}

impl ValidatedTree<'_> {
    /// Renders the predicate as a SQL condition fragment, without a
    /// leading `where`.
    pub fn to_sql(&self) -> String {
        let mut renderer = Renderer::new(self.capabilities);
        self.tree.render(&mut renderer);
        renderer.finish()
    }
}
