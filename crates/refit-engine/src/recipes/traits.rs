//! Recipe trait and phase contexts.
//!
//! A recipe contributes to the scan phase (read-only, before the barrier)
//! and the edit phase (against the sealed index, after it). Single-pass
//! recipes leave `scan` as the default no-op.

use refit_core::config::Catalogs;
use refit_core::errors::Diagnostic;
use refit_core::model::CompilationUnit;
use refit_core::traits::TypeOracle;

use crate::index::{UsageIndex, UsageIndexBuilder};
use crate::rewrite::Change;

/// Context for the scan phase. Read-only.
pub struct ScanContext<'a> {
    pub catalogs: &'a Catalogs,
    pub oracle: &'a dyn TypeOracle,
}

/// Context for the edit phase. The index is sealed: partial indices are
/// never consulted for mutation decisions.
pub struct EditContext<'a> {
    pub catalogs: &'a Catalogs,
    pub oracle: &'a dyn TypeOracle,
    pub index: &'a UsageIndex,
}

/// The result of editing one compilation unit.
#[derive(Debug, Default)]
pub struct UnitEdit {
    /// The rewritten unit, or `None` when nothing matched.
    pub unit: Option<CompilationUnit>,
    pub changes: Vec<Change>,
    pub diagnostics: Vec<Diagnostic>,
}

impl UnitEdit {
    /// An edit that leaves the unit untouched.
    pub fn unchanged() -> Self {
        Self::default()
    }
}

/// An annotation-level migration rule.
pub trait Recipe: Send + Sync {
    fn id(&self) -> &str;
    fn description(&self) -> &str;

    /// Contribute usage evidence during the scan phase. Default: nothing.
    fn scan(
        &self,
        _unit: &CompilationUnit,
        _ctx: &ScanContext<'_>,
        _builder: &mut UsageIndexBuilder,
    ) {
    }

    /// Rewrite one unit against the sealed index. `UnitEdit::unit` is
    /// `None` when the unit does not satisfy the recipe's precondition.
    fn edit(&self, unit: &CompilationUnit, ctx: &EditContext<'_>) -> UnitEdit;
}
