//! Change descriptions — what a rewrite did, for diagnostics and dry-run
//! diffs. Not required for correctness.

use serde::{Deserialize, Serialize};

/// A single applied change within one compilation unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Change {
    /// Scope annotations moved from class level onto the accessor method.
    AnnotationsRelocated {
        decl: String,
        method: String,
        moved: Vec<String>,
    },
    /// A marker annotation inserted at class level.
    AnnotationAdded { decl: String, annotation: String },
    /// An import inserted into the unit.
    ImportAdded { import: String },
}

impl std::fmt::Display for Change {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AnnotationsRelocated { decl, method, moved } => {
                write!(f, "{decl}: moved [{}] onto {method}()", moved.join(", "))
            }
            Self::AnnotationAdded { decl, annotation } => {
                write!(f, "{decl}: added @{annotation}")
            }
            Self::ImportAdded { import } => write!(f, "added import {import}"),
        }
    }
}
