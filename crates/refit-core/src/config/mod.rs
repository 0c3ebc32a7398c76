//! Configuration system for Refit.
//! TOML-based annotation catalogs with compiled defaults.

pub mod recipe_config;

pub use recipe_config::{Catalogs, RecipeConfig};
