//! Match result types for the provider-shape predicate.

use refit_core::model::TypeRef;

/// Outcome of matching a declaration against the provider shape.
#[derive(Debug, Clone, PartialEq)]
pub enum ProviderShape {
    /// The declaration is a provider implementation.
    Match(ProviderMatch),
    /// The declaration does not satisfy the shape. Silent, expected,
    /// majority case.
    NoMatch,
    /// The oracle could not resolve a supertype; skipped conservatively.
    Unresolved { type_name: String },
    /// Provider contract implemented but the minimal shape is missing
    /// (no zero-argument accessor returning the produced type).
    Malformed { reason: String },
}

/// A successful provider-shape match.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderMatch {
    /// The single generic argument of the provider contract.
    pub produced: TypeRef,
    /// Member index of the zero-argument accessor returning `produced`.
    pub accessor: usize,
}
