use crate::query::{
    ast::{
        common::Connective,
        expr::{BinaryOp, Expr, FunctionCall, Ident, Link},
    },
    renderer::{Render, Renderer},
};

impl Render for Expr {
    fn render(&self, r: &mut Renderer) {
        match self {
            Expr::Identifier(ident) => ident.render(r),
            Expr::Wildcard(qualifier) => {
                if let Some(qualifier) = qualifier {
                    r.sql.push_str(&r.dialect.quote_identifier(qualifier));
                    r.sql.push('.');
                }
                r.sql.push('*');
            }
            Expr::Value(val) => r.add_param(val.clone()),
            Expr::Param(binding) => r.add_param(binding.value.clone()),
            Expr::BinaryOp(op) => op.render(r),
            Expr::FunctionCall(func) => func.render(r),
            Expr::Like { expr, pattern } => {
                expr.render(r);
                r.sql.push_str(" LIKE ");
                pattern.render(r);
            }
            Expr::IsNull { expr, negated } => {
                expr.render(r);
                r.sql
                    .push_str(if *negated { " IS NOT NULL" } else { " IS NULL" });
            }
            Expr::Not(inner) => {
                r.sql.push_str("NOT (");
                inner.render(r);
                r.sql.push(')');
            }
            Expr::ArrayContains { array, element } => {
                let dialect = r.dialect;
                dialect.write_array_contains(r, array, element);
            }
            Expr::JsonContains { target, candidate } => {
                let dialect = r.dialect;
                dialect.write_json_contains(r, target, candidate);
            }
            Expr::Chain(links) => render_chain(links, r),
        }
    }
}

impl Render for Ident {
    fn render(&self, r: &mut Renderer) {
        if let Some(qualifier) = &self.qualifier {
            r.sql.push_str(&r.dialect.quote_identifier(qualifier));
            r.sql.push('.');
        }
        r.sql.push_str(&r.dialect.quote_identifier(&self.name));
    }
}

impl Render for BinaryOp {
    fn render(&self, r: &mut Renderer) {
        self.left.render(r);
        r.sql.push(' ');
        r.sql.push_str(self.op.as_sql());
        r.sql.push(' ');
        self.right.render(r);
    }
}

impl Render for FunctionCall {
    fn render(&self, r: &mut Renderer) {
        r.sql.push_str(&self.name);
        r.sql.push('(');
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                r.sql.push_str(", ");
            }
            arg.render(r);
        }
        r.sql.push(')');
    }
}

/// Renders links left to right. Vacuous links are dropped; when the
/// connective changes mid-chain, everything rendered so far is parenthesized
/// so that `a AND b OR c` reads as `(a AND b) OR c`.
fn render_chain(links: &[Link], r: &mut Renderer) {
    let start = r.sql.len();
    let mut previous: Option<Connective> = None;

    for (i, link) in links
        .iter()
        .filter(|link| !link.expr.is_vacuous())
        .enumerate()
    {
        if i > 0 {
            if previous.is_some_and(|prev| prev != link.connective) {
                r.sql.insert(start, '(');
                r.sql.push(')');
            }
            r.sql.push(' ');
            r.sql.push_str(link.connective.as_sql());
            r.sql.push(' ');
            previous = Some(link.connective);
        }

        if is_compound_chain(&link.expr) {
            r.sql.push('(');
            link.expr.render(r);
            r.sql.push(')');
        } else {
            link.expr.render(r);
        }
    }
}

fn is_compound_chain(expr: &Expr) -> bool {
    match expr {
        Expr::Chain(links) => links.iter().filter(|l| !l.expr.is_vacuous()).count() > 1,
        _ => false,
    }
}
