//! Introspection inference from program-wide usage evidence.
//!
//! Scan phase: collect every type referenced as a parameter or return type
//! of an entry-point method. Edit phase: every declaration the sealed index
//! marks referenced gains the introspection marker exactly once.

use refit_core::model::CompilationUnit;
use tracing::trace;

use super::traits::{EditContext, Recipe, ScanContext, UnitEdit};
use crate::index::UsageIndexBuilder;
use crate::matcher;
use crate::rewrite;

pub struct RequiresIntrospectionRecipe;

impl RequiresIntrospectionRecipe {
    pub const ID: &'static str = "requires-introspection";
}

impl Recipe for RequiresIntrospectionRecipe {
    fn id(&self) -> &str {
        Self::ID
    }

    fn description(&self) -> &str {
        "Adds the introspection marker to types referenced by entry-point method signatures"
    }

    fn scan(
        &self,
        unit: &CompilationUnit,
        ctx: &ScanContext<'_>,
        builder: &mut UsageIndexBuilder,
    ) {
        builder.scan_unit(unit, ctx.catalogs);
    }

    fn edit(&self, unit: &CompilationUnit, ctx: &EditContext<'_>) -> UnitEdit {
        let mut edit = UnitEdit::unchanged();
        let mut current = unit.clone();
        let mut changed = false;

        for idx in 0..current.decls.len() {
            let decl = &current.decls[idx];
            if !ctx.index.is_referenced(&decl.name) {
                continue;
            }
            if matcher::has_introspection_marker(decl, ctx.catalogs) {
                continue;
            }

            trace!(decl = %decl.name, "adding introspection marker");

            if let Some((rewritten, changes)) = rewrite::add_annotation_if_absent(
                &current,
                idx,
                &ctx.catalogs.introspection_marker,
                ctx.oracle,
            ) {
                current = rewritten;
                edit.changes.extend(changes);
                changed = true;
            }
        }

        if changed {
            edit.unit = Some(current);
        }
        edit
    }
}
