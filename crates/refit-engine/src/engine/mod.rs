//! Recipe engine — two-phase run orchestration.
//!
//! Phase 1 scans every unit read-only and builds the usage index by
//! map/reduce union; sealing the index is the only synchronization barrier.
//! Phase 2 edits every unit independently against the sealed index. Both
//! phases parallelize across units; per-unit output depends only on the
//! unit's own content plus the sealed index, so parallel and sequential
//! runs agree.

pub mod types;

pub use types::{RunOptions, RunResult, RunStats, UnitOutcome};

use std::sync::Arc;
use std::time::Instant;

use rayon::prelude::*;
use refit_core::config::{Catalogs, RecipeConfig};
use refit_core::errors::{Diagnostic, RunError};
use refit_core::events::{
    DiagnosticEvent, EventDispatcher, RunCompleteEvent, RunEventHandler, RunStartedEvent,
    ScanCompleteEvent, UnitChangedEvent,
};
use refit_core::model::CompilationUnit;
use refit_core::traits::{Cancellable, CancellationToken, TypeOracle};
use tracing::{debug, info};

use crate::index::{UsageIndex, UsageIndexBuilder};
use crate::recipes::{EditContext, Recipe, RecipeRegistry, ScanContext};

/// One unit's journey through the edit phase.
struct EditedUnit {
    unit: CompilationUnit,
    outcome: UnitOutcome,
    diagnostics: Vec<Diagnostic>,
    skipped: bool,
}

pub struct RecipeEngine {
    catalogs: Catalogs,
    registry: RecipeRegistry,
    oracle: Arc<dyn TypeOracle>,
    dispatcher: EventDispatcher,
    cancel: CancellationToken,
}

impl RecipeEngine {
    /// Create an engine with the standard recipe registry.
    pub fn new(config: &RecipeConfig, oracle: Arc<dyn TypeOracle>) -> Result<Self, RunError> {
        Self::with_registry(config, oracle, RecipeRegistry::standard())
    }

    /// Create an engine with a custom registry.
    pub fn with_registry(
        config: &RecipeConfig,
        oracle: Arc<dyn TypeOracle>,
        registry: RecipeRegistry,
    ) -> Result<Self, RunError> {
        config.validate()?;
        Ok(Self {
            catalogs: config.compile(),
            registry,
            oracle,
            dispatcher: EventDispatcher::new(),
            cancel: CancellationToken::new(),
        })
    }

    /// Register a run event handler.
    pub fn register_handler(&mut self, handler: Arc<dyn RunEventHandler>) {
        self.dispatcher.register(handler);
    }

    /// A clone of the engine's cancellation token, for callers that want to
    /// abort a run in flight.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Run every registered recipe over the unit set.
    ///
    /// An empty unit set is the only fatal error; every per-declaration
    /// failure downgrades to "unchanged plus a diagnostic". Cancellation
    /// mid-run passes the remaining units through untouched — processed
    /// units keep their results, nothing rolls back.
    pub fn run(
        &self,
        units: Vec<CompilationUnit>,
        options: &RunOptions,
    ) -> Result<RunResult, RunError> {
        if units.is_empty() {
            return Err(RunError::EmptyProgram);
        }
        if self.cancel.is_cancelled() {
            return Err(RunError::Cancelled);
        }

        let start = Instant::now();
        self.dispatcher.emit_run_started(&RunStartedEvent {
            unit_count: units.len(),
            recipe_ids: self.registry.ids(),
        });

        // Phase 1: read-only scan, union-reduced into one index.
        debug!(units = units.len(), "scan phase started");
        let index = if options.parallel {
            self.scan_parallel(&units)
        } else {
            self.scan_sequential(&units)
        };
        debug!(referenced = index.len(), "scan phase complete, index sealed");
        self.dispatcher.emit_scan_complete(&ScanCompleteEvent {
            units_scanned: units.len(),
            referenced_types: index.len(),
        });

        // Phase 2: per-unit edits against the sealed index.
        let edited: Vec<EditedUnit> = if options.parallel {
            units
                .par_iter()
                .map(|unit| self.edit_unit(unit, &index))
                .collect()
        } else {
            units.iter().map(|unit| self.edit_unit(unit, &index)).collect()
        };

        let mut result_units = Vec::with_capacity(edited.len());
        let mut outcomes = Vec::with_capacity(edited.len());
        let mut diagnostics = Vec::new();
        let mut stats = RunStats {
            units_processed: edited.len(),
            referenced_types: index.len(),
            ..Default::default()
        };

        for (original, edited) in units.iter().zip(edited) {
            if edited.skipped {
                stats.units_skipped += 1;
            }
            if edited.outcome.changed {
                stats.units_changed += 1;
                self.dispatcher.emit_unit_changed(&UnitChangedEvent {
                    path: edited.outcome.path.clone(),
                    recipe_ids: edited.outcome.recipes.clone(),
                    change_count: edited.outcome.changes.len(),
                });
            }
            for diagnostic in &edited.diagnostics {
                self.dispatcher.emit_diagnostic(&DiagnosticEvent {
                    diagnostic: diagnostic.clone(),
                });
            }
            diagnostics.extend(edited.diagnostics);
            outcomes.push(edited.outcome);
            result_units.push(if options.dry_run {
                original.clone()
            } else {
                edited.unit
            });
        }

        stats.duration_ms = start.elapsed().as_millis() as u64;
        info!(
            units = stats.units_processed,
            changed = stats.units_changed,
            skipped = stats.units_skipped,
            dry_run = options.dry_run,
            duration_ms = stats.duration_ms,
            "run complete"
        );
        self.dispatcher.emit_run_complete(&RunCompleteEvent {
            units_processed: stats.units_processed,
            units_changed: stats.units_changed,
            duration_ms: stats.duration_ms,
        });

        Ok(RunResult {
            units: result_units,
            outcomes,
            diagnostics,
            stats,
        })
    }

    fn scan_context(&self) -> ScanContext<'_> {
        ScanContext {
            catalogs: &self.catalogs,
            oracle: self.oracle.as_ref(),
        }
    }

    fn scan_parallel(&self, units: &[CompilationUnit]) -> UsageIndex {
        units
            .par_iter()
            .map(|unit| {
                let ctx = self.scan_context();
                let mut builder = UsageIndexBuilder::new();
                for recipe in self.registry.recipes() {
                    recipe.scan(unit, &ctx, &mut builder);
                }
                builder
            })
            .reduce(UsageIndexBuilder::new, UsageIndexBuilder::merge)
            .seal()
    }

    fn scan_sequential(&self, units: &[CompilationUnit]) -> UsageIndex {
        let ctx = self.scan_context();
        let mut builder = UsageIndexBuilder::new();
        for unit in units {
            for recipe in self.registry.recipes() {
                recipe.scan(unit, &ctx, &mut builder);
            }
        }
        builder.seal()
    }

    /// Edit one unit by chaining every recipe over it. Recipes run in
    /// registration order; each sees the previous recipe's output.
    fn edit_unit(&self, unit: &CompilationUnit, index: &UsageIndex) -> EditedUnit {
        if self.cancel.is_cancelled() {
            return EditedUnit {
                unit: unit.clone(),
                outcome: UnitOutcome {
                    path: unit.path.clone(),
                    changed: false,
                    recipes: Vec::new(),
                    changes: Vec::new(),
                },
                diagnostics: Vec::new(),
                skipped: true,
            };
        }

        let ctx = EditContext {
            catalogs: &self.catalogs,
            oracle: self.oracle.as_ref(),
            index,
        };

        let mut current = unit.clone();
        let mut outcome = UnitOutcome {
            path: unit.path.clone(),
            changed: false,
            recipes: Vec::new(),
            changes: Vec::new(),
        };
        let mut diagnostics = Vec::new();

        for recipe in self.registry.recipes() {
            let edit = recipe.edit(&current, &ctx);
            diagnostics.extend(edit.diagnostics);
            if let Some(rewritten) = edit.unit {
                current = rewritten;
                outcome.changed = true;
                outcome.recipes.push(recipe.id().to_string());
                outcome.changes.extend(edit.changes);
            }
        }

        EditedUnit {
            unit: current,
            outcome,
            diagnostics,
            skipped: false,
        }
    }
}
