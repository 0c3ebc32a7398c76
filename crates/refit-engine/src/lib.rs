//! refit-engine: the analyze-then-rewrite recipe engine.
//!
//! - Matcher: stateless structural predicates over single declarations
//! - Index: build-once, sealed usage index of entry-point boundary types
//! - Rewrite: pure structural-substitution primitives
//! - Recipes: the provider-factories and requires-introspection rules
//! - Engine: two-phase run orchestration (parallel scan, barrier, sweep)

pub mod engine;
pub mod index;
pub mod matcher;
pub mod recipes;
pub mod rewrite;

// Re-exports for convenience
pub use engine::{RecipeEngine, RunOptions, RunResult, RunStats, UnitOutcome};
pub use index::{UsageIndex, UsageIndexBuilder};
pub use matcher::{ProviderMatch, ProviderShape};
pub use recipes::{
    EditContext, ProviderFactoriesRecipe, Recipe, RecipeRegistry, RequiresIntrospectionRecipe,
    ScanContext, UnitEdit,
};
pub use rewrite::Change;
