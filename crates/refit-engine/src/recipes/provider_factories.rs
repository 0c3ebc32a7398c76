//! Provider implementations become factory classes.
//!
//! A class implementing a provider contract, already declared as a bean via
//! a scope annotation, loses its class-level scope annotations in favor of
//! the factory marker; the annotations reappear on the zero-argument
//! accessor, after any override marker.

use refit_core::errors::{Diagnostic, DiagnosticKind};
use refit_core::model::CompilationUnit;
use tracing::trace;

use super::traits::{EditContext, Recipe, UnitEdit};
use crate::matcher::{self, ProviderShape};
use crate::rewrite;

pub struct ProviderFactoriesRecipe;

impl ProviderFactoriesRecipe {
    pub const ID: &'static str = "provider-factories";
}

impl Recipe for ProviderFactoriesRecipe {
    fn id(&self) -> &str {
        Self::ID
    }

    fn description(&self) -> &str {
        "Relocates scope annotations from provider implementation classes onto their accessor \
         method and marks the class as a factory"
    }

    fn edit(&self, unit: &CompilationUnit, ctx: &EditContext<'_>) -> UnitEdit {
        let mut edit = UnitEdit::unchanged();
        let mut current = unit.clone();
        let mut changed = false;

        for idx in 0..current.decls.len() {
            let decl = &current.decls[idx];
            let matched = match matcher::produced_type(decl, ctx.catalogs, ctx.oracle) {
                ProviderShape::Match(m) => m,
                ProviderShape::NoMatch => continue,
                ProviderShape::Unresolved { type_name } => {
                    edit.diagnostics.push(Diagnostic {
                        unit: unit.path.clone(),
                        decl: Some(decl.name.clone()),
                        recipe: Self::ID.to_string(),
                        kind: DiagnosticKind::UnresolvedType,
                        message: format!("cannot resolve supertypes of {type_name}"),
                    });
                    continue;
                }
                ProviderShape::Malformed { reason } => {
                    edit.diagnostics.push(Diagnostic {
                        unit: unit.path.clone(),
                        decl: Some(decl.name.clone()),
                        recipe: Self::ID.to_string(),
                        kind: DiagnosticKind::MalformedUnit,
                        message: reason,
                    });
                    continue;
                }
            };

            // Already transformed: the factory marker wins even when the
            // annotation-set check would otherwise re-fire.
            if matcher::is_marked_factory(decl, ctx.catalogs) {
                continue;
            }
            // The rule only fires on classes already declared as some kind
            // of bean.
            if !matcher::has_any_of(decl, &ctx.catalogs.scope_annotations) {
                continue;
            }

            trace!(decl = %decl.name, accessor = matched.accessor, "relocating scope annotations");

            let (rewritten, change) =
                rewrite::relocate_annotations(decl, matched.accessor, ctx.catalogs);
            current = current.replacing_decl(idx, rewritten);
            edit.changes.push(change);

            if let Some((with_import, change)) =
                rewrite::with_import(&current, &ctx.catalogs.factory_marker, ctx.oracle)
            {
                current = with_import;
                edit.changes.push(change);
            }
            changed = true;
        }

        if changed {
            edit.unit = Some(current);
        }
        edit
    }
}
