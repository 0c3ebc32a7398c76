//! Run event handler trait. Every method has a default no-op body so
//! embedders implement only the events they care about.

use super::types::*;

/// Observer for run lifecycle events.
pub trait RunEventHandler: Send + Sync {
    fn on_run_started(&self, _event: &RunStartedEvent) {}
    fn on_scan_complete(&self, _event: &ScanCompleteEvent) {}
    fn on_unit_changed(&self, _event: &UnitChangedEvent) {}
    fn on_diagnostic(&self, _event: &DiagnosticEvent) {}
    fn on_run_complete(&self, _event: &RunCompleteEvent) {}
}
