use crate::expression::ast::Expression;

const INDENT: usize = 4;

impl Expression {
    /// Render the tree sideways, one node per line.
    /// - The right subtree is printed above its parent, the left one below
    /// - Each level of depth adds four spaces of indentation
    /// - Operation nodes show their operator symbol, leaves their value
    pub fn to_tree_string(&self) -> String {
        fn walk(expr: &Expression, depth: usize, out: &mut String) {
            let label = match expr.as_binary() {
                Some((op, _, r)) => {
                    walk(r, depth + 1, out);
                    op.symbol().to_string()
                }
                None => expr.to_string(),
            };

            out.push_str(&" ".repeat(depth * INDENT));
            out.push_str(&label);
            out.push('\n');

            if let Some((_, l, _)) = expr.as_binary() {
                walk(l, depth + 1, out);
            }
        }

        let mut out = String::new();
        walk(self, 0, &mut out);
        out
    }
}
