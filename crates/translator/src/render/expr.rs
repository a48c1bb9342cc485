use crate::render::{Render, Renderer, quote_text_literal};
use model::{Combination, CompareOp, FilterLeaf, LogicalOp, PredicateTree, Value};

impl Render for PredicateTree {
    fn render(&self, r: &mut Renderer) {
        match self {
            PredicateTree::Leaf(leaf) => leaf.render(r),
            PredicateTree::Combination(combination) => combination.render(r),
        }
    }
}

impl Render for Combination {
    fn render(&self, r: &mut Renderer) {
        // Construction collapses single-child combinations, so a node
        // reaching here always joins at least two children.
        r.sql.push('(');
        for (i, child) in self.children().iter().enumerate() {
            if i > 0 {
                let join = match self.joins()[i - 1] {
                    LogicalOp::And => " and ",
                    LogicalOp::Or => " or ",
                };
                r.sql.push_str(join);
            }
            child.render(r);
        }
        r.sql.push(')');
    }
}

impl Render for FilterLeaf {
    fn render(&self, r: &mut Renderer) {
        let capabilities = r.capabilities;
        let column = capabilities
            .column(self.kind())
            .unwrap_or_else(|| self.kind().column());

        let values = self.values();
        if values.len() > 1 {
            let keyword = match self.operator() {
                CompareOp::Eq => "in",
                CompareOp::NotEq => "not in",
                // Leaf construction only admits == and != with multiple values.
                op => unreachable!("operator '{op}' cannot carry multiple values"),
            };
            let list = values
                .iter()
                .map(render_value)
                .collect::<Vec<_>>()
                .join(",");
            r.sql.push_str(column);
            r.sql.push(' ');
            r.sql.push_str(keyword);
            r.sql.push_str(" (");
            r.sql.push_str(&list);
            r.sql.push(')');
            return;
        }

        r.sql.push_str(column);
        r.sql.push(' ');
        r.sql.push_str(&comparison_fragment(self.operator(), &values[0]));
    }
}

/// Renders `op value` for a single-value leaf. Pattern operators become
/// `like` with `%` attached to the raw text; wildcard characters already
/// inside the value pass through untouched.
fn comparison_fragment(operator: CompareOp, value: &Value) -> String {
    match operator {
        CompareOp::Eq => format!("= {}", render_value(value)),
        CompareOp::NotEq => format!("!= {}", render_value(value)),
        CompareOp::Gt => format!("> {}", render_value(value)),
        CompareOp::GtEq => format!(">= {}", render_value(value)),
        CompareOp::Lt => format!("< {}", render_value(value)),
        CompareOp::LtEq => format!("<= {}", render_value(value)),
        CompareOp::StartsWith => format!("like {}", quote_text_literal(&format!("{value}%"))),
        CompareOp::EndsWith => format!("like {}", quote_text_literal(&format!("%{value}"))),
        CompareOp::Contains => format!("like {}", quote_text_literal(&format!("%{value}%"))),
    }
}

fn render_value(value: &Value) -> String {
    match value {
        Value::String(text) => quote_text_literal(text),
        Value::Int(_) | Value::Float(_) => value.to_string(),
    }
}
