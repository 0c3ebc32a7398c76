//! refit-core: foundation types for the Refit recipe engine.
//!
//! This crate provides the pieces shared by every recipe run:
//! - Model: immutable program model (units, declarations, members, types)
//! - Errors: one enum per subsystem, stable error codes, diagnostics
//! - Config: TOML annotation catalogs with compiled defaults
//! - Events: synchronous run lifecycle dispatch
//! - Traits: type-resolution oracle and cooperative cancellation
//! - Telemetry: tracing subscriber setup

pub mod config;
pub mod errors;
pub mod events;
pub mod model;
pub mod telemetry;
pub mod traits;

// Re-exports for convenience
pub use config::{Catalogs, RecipeConfig};
pub use errors::{ConfigError, Diagnostic, DiagnosticKind, RefitErrorCode, RunError};
pub use events::{EventDispatcher, RunEventHandler};
pub use model::{
    Annotation, AnnotationSeq, Body, CompilationUnit, Declaration, Field, Member, Method, Param,
    TypeRef,
};
pub use traits::{Cancellable, CancellationToken, MapOracle, TypeOracle};
