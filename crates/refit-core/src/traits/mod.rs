//! Collaborator seams: type resolution and cooperative cancellation.

pub mod cancellation;
pub mod type_oracle;

pub use cancellation::{Cancellable, CancellationToken};
pub use type_oracle::{MapOracle, TypeOracle};
