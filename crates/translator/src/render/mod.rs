//! The rendering trait and context for turning predicate trees into SQL
//! condition fragments.

use crate::capabilities::CapabilitySet;

pub mod expr;

/// A trait for any predicate node that can be rendered into SQL.
pub trait Render {
    fn render(&self, renderer: &mut Renderer);
}

/// Accumulates the SQL string during rendering and resolves columns
/// through the store's capability set.
pub struct Renderer<'a> {
    pub sql: String,
    pub capabilities: &'a CapabilitySet,
}

impl<'a> Renderer<'a> {
    pub fn new(capabilities: &'a CapabilitySet) -> Self {
        Self {
            sql: String::new(),
            capabilities,
        }
    }

    /// Consumes the renderer and returns the final fragment.
    pub fn finish(self) -> String {
        self.sql
    }
}

/// Single-quotes a text literal for direct interpolation, doubling any
/// interior quote. Kept as the one place to change when the output moves
/// to bound parameters.
pub fn quote_text_literal(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_text_literal() {
        assert_eq!(quote_text_literal("comp_a"), "'comp_a'");
        assert_eq!(quote_text_literal("it's"), "'it''s'");
        assert_eq!(quote_text_literal(""), "''");
    }
}
