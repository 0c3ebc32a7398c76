//! Per-declaration diagnostics. A diagnostic records why a recipe left a
//! declaration untouched when the structural precondition partially held;
//! it never aborts the run.

use serde::{Deserialize, Serialize};

/// Classification of a per-declaration diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiagnosticKind {
    /// The type-resolution oracle could not answer; the declaration was
    /// skipped rather than rewritten on a guess.
    UnresolvedType,
    /// The declaration lacks the minimal shape a recipe needs
    /// (e.g. zero methods on a provider-shaped class).
    MalformedUnit,
}

impl DiagnosticKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::UnresolvedType => "unresolved_type",
            Self::MalformedUnit => "malformed_unit",
        }
    }
}

/// A single non-fatal finding attached to a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Path of the compilation unit.
    pub unit: String,
    /// Qualified name of the declaration, when one is implicated.
    pub decl: Option<String>,
    /// Id of the recipe that produced the diagnostic.
    pub recipe: String,
    pub kind: DiagnosticKind,
    pub message: String,
}
