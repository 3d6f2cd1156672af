use crate::{
    operator::build_predicate,
    params::ParamKeys,
    resolve::{FieldResolution, FieldResolver},
};
use model::schema::{catalog::SchemaCatalog, entity::EntityDescriptor};
use planner::filter::{Connective, Predicate, PredicateSink};
use search_syntax::ast::{self, GroupNode, Node, TermNode};
use tracing::debug;

/// The two connectives in play while visiting a group: how the group itself
/// is attached to its parent, and how its children are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Scope {
    attach_as: Connective,
    combine_as: Connective,
}

impl Scope {
    fn root(group: &GroupNode) -> Self {
        Self {
            attach_as: Connective::And,
            combine_as: connective(group.connective),
        }
    }

    fn child(&self, group: &GroupNode) -> Self {
        Self {
            attach_as: self.combine_as,
            combine_as: connective(group.connective),
        }
    }
}

/// Walks a term tree and emits predicates and joins into a sink.
pub struct Compiler<'a> {
    catalog: &'a SchemaCatalog,
}

impl<'a> Compiler<'a> {
    pub fn new(catalog: &'a SchemaCatalog) -> Self {
        Self { catalog }
    }

    /// Compiles `tree` against `entity`, qualified by the sink's root alias.
    ///
    /// Terms that do not resolve are skipped; compilation itself never fails.
    /// When the sink already holds conditions, the whole tree is attached as
    /// one AND-ed group so it cannot rebind what is already there.
    pub fn compile(&self, tree: &GroupNode, entity: &EntityDescriptor, sink: &mut dyn PredicateSink) {
        let root_alias = sink.root_alias().to_string();
        let mut compilation = Compilation {
            resolver: FieldResolver::new(self.catalog, entity, &root_alias),
            keys: ParamKeys::starting_after(sink.parameter_count()),
        };

        let scope = Scope::root(tree);
        if sink.is_empty() {
            compilation.visit_group(tree, scope, sink);
        } else {
            sink.add_nested_scope(scope.attach_as, &mut |nested: &mut dyn PredicateSink| {
                compilation.visit_group(tree, scope, nested)
            });
        }
    }
}

struct Compilation<'a> {
    resolver: FieldResolver<'a>,
    keys: ParamKeys,
}

impl Compilation<'_> {
    fn visit_group(&mut self, group: &GroupNode, scope: Scope, sink: &mut dyn PredicateSink) {
        for child in &group.children {
            match child {
                Node::Term(term) => self.visit_term(term, scope.combine_as, sink),
                Node::Group(inner) => {
                    let inner_scope = scope.child(inner);
                    sink.add_nested_scope(
                        inner_scope.attach_as,
                        &mut |nested: &mut dyn PredicateSink| {
                            self.visit_group(inner, inner_scope, nested)
                        },
                    );
                }
            }
        }
    }

    fn visit_term(&mut self, term: &TermNode, connective: Connective, sink: &mut dyn PredicateSink) {
        match self.resolver.resolve(&term.field, sink) {
            FieldResolution::Resolved { alias, column } => {
                let expr = build_predicate(
                    term,
                    &alias,
                    &column.physical_name,
                    &column.type_category,
                    &mut self.keys,
                );
                sink.add_predicate(connective, Predicate::new(expr));
            }
            FieldResolution::UnknownField => {
                debug!("Skipping unknown field '{}' in `{}`", term.field, term);
            }
            FieldResolution::UnknownRelationField => {
                debug!(
                    "Skipping unresolved relation field '{}' in `{}`",
                    term.field, term
                );
            }
        }
    }
}

fn connective(connective: ast::Connective) -> Connective {
    match connective {
        ast::Connective::And => Connective::And,
        ast::Connective::Or => Connective::Or,
    }
}
