//! Pattern matcher — pure predicates over a single declaration.

pub mod predicates;
pub mod types;

pub use predicates::{
    has_any_of, has_introspection_marker, is_entry_point, is_excluded_type, is_marked_factory,
    produced_type,
};
pub use types::{ProviderMatch, ProviderShape};
