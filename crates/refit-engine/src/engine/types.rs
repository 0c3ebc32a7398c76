//! Run options, per-unit outcomes, and run statistics.

use refit_core::errors::Diagnostic;
use refit_core::model::CompilationUnit;
use serde::Serialize;

use crate::rewrite::Change;

/// Options for a single run.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Process units with rayon. Output is identical either way.
    pub parallel: bool,
    /// Compute outcomes but return the original units unmodified.
    pub dry_run: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            parallel: true,
            dry_run: false,
        }
    }
}

/// What happened to one compilation unit.
#[derive(Debug, Clone, Serialize)]
pub struct UnitOutcome {
    pub path: String,
    pub changed: bool,
    /// Ids of the recipes that fired on this unit.
    pub recipes: Vec<String>,
    pub changes: Vec<Change>,
}

/// Aggregate statistics for one run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunStats {
    pub units_processed: usize,
    pub units_changed: usize,
    /// Units passed through untouched because the run was cancelled.
    pub units_skipped: usize,
    /// Distinct type names the sealed usage index marks referenced.
    pub referenced_types: usize,
    pub duration_ms: u64,
}

/// The result of one run: the unit set (rewritten or original), per-unit
/// outcomes, and the non-fatal diagnostics collected along the way.
#[derive(Debug)]
pub struct RunResult {
    pub units: Vec<CompilationUnit>,
    pub outcomes: Vec<UnitOutcome>,
    pub diagnostics: Vec<Diagnostic>,
    pub stats: RunStats,
}

impl RunResult {
    /// True if no unit changed.
    pub fn is_clean(&self) -> bool {
        self.stats.units_changed == 0
    }
}
