//! Event payload types for the run lifecycle.

use crate::errors::Diagnostic;

/// Payload for `on_run_started`.
#[derive(Debug, Clone)]
pub struct RunStartedEvent {
    pub unit_count: usize,
    pub recipe_ids: Vec<String>,
}

/// Payload for `on_scan_complete` — the usage index has been sealed.
#[derive(Debug, Clone)]
pub struct ScanCompleteEvent {
    pub units_scanned: usize,
    pub referenced_types: usize,
}

/// Payload for `on_unit_changed`.
#[derive(Debug, Clone)]
pub struct UnitChangedEvent {
    pub path: String,
    pub recipe_ids: Vec<String>,
    pub change_count: usize,
}

/// Payload for `on_diagnostic`.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    pub diagnostic: Diagnostic,
}

/// Payload for `on_run_complete`.
#[derive(Debug, Clone)]
pub struct RunCompleteEvent {
    pub units_processed: usize,
    pub units_changed: usize,
    pub duration_ms: u64,
}
