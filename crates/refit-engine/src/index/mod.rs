//! Usage index — which types cross an entry-point boundary.
//!
//! Built fresh once per run during the scan phase, sealed before any sweep
//! decision is made, never persisted. Accumulation is a set union, so the
//! scan phase parallelizes with a commutative, associative merge.

use refit_core::config::Catalogs;
use refit_core::model::{CompilationUnit, Member};
use rustc_hash::FxHashSet;

use crate::matcher;

/// Accumulates qualified names of types referenced by entry-point method
/// signatures. Recording the same name twice is a no-op.
#[derive(Debug, Default)]
pub struct UsageIndexBuilder {
    referenced: FxHashSet<String>,
}

impl UsageIndexBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a qualified name as referenced. Idempotent.
    pub fn record(&mut self, name: impl Into<String>) {
        self.referenced.insert(name.into());
    }

    /// Record every non-excluded parameter and return type of every
    /// entry-point method in the unit.
    pub fn scan_unit(&mut self, unit: &CompilationUnit, catalogs: &Catalogs) {
        for decl in &unit.decls {
            for member in &decl.members {
                let Member::Method(method) = member else {
                    continue;
                };
                if !matcher::is_entry_point(method, decl, catalogs) {
                    continue;
                }
                for param in &method.params {
                    if !matcher::is_excluded_type(&param.ty, catalogs) {
                        self.record(param.ty.name.clone());
                    }
                }
                if !matcher::is_excluded_type(&method.return_type, catalogs) {
                    self.record(method.return_type.name.clone());
                }
            }
        }
    }

    /// Union with another builder. Commutative and associative, so rayon
    /// can reduce per-unit builders in any order.
    pub fn merge(mut self, other: Self) -> Self {
        if self.referenced.len() < other.referenced.len() {
            return other.merge(self);
        }
        self.referenced.extend(other.referenced);
        self
    }

    /// Number of distinct referenced names recorded so far.
    pub fn len(&self) -> usize {
        self.referenced.len()
    }

    pub fn is_empty(&self) -> bool {
        self.referenced.is_empty()
    }

    /// Seal the index. The builder is consumed; the result is read-only for
    /// the remainder of the run.
    pub fn seal(self) -> UsageIndex {
        UsageIndex {
            referenced: self.referenced,
        }
    }
}

/// Sealed, read-only usage index.
#[derive(Debug)]
pub struct UsageIndex {
    referenced: FxHashSet<String>,
}

impl UsageIndex {
    /// True if at least one entry-point method references the named type.
    pub fn is_referenced(&self, name: &str) -> bool {
        self.referenced.contains(name)
    }

    /// Number of distinct referenced names.
    pub fn len(&self) -> usize {
        self.referenced.len()
    }

    pub fn is_empty(&self) -> bool {
        self.referenced.is_empty()
    }
}
