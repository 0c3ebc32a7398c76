//! Run lifecycle events: started, scan complete, unit changed, diagnostic,
//! run complete. Synchronous dispatch, panic-isolated handlers.

pub mod dispatcher;
pub mod handler;
pub mod types;

pub use dispatcher::EventDispatcher;
pub use handler::RunEventHandler;
pub use types::{
    DiagnosticEvent, RunCompleteEvent, RunStartedEvent, ScanCompleteEvent, UnitChangedEvent,
};
