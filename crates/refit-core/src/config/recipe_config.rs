//! Recipe configuration: the annotation catalogs the engine matches against.
//! Supplied as data, not derived; defaults cover the Micronaut migration.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Annotation catalogs for both recipes.
///
/// Every field has a compiled default; a TOML file only needs to name the
/// catalogs it overrides. Unknown keys are rejected by serde's default
/// behavior being lenient — forward-compatible.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RecipeConfig {
    /// Scope/lifecycle annotations relocated from class to accessor.
    pub scope_annotations: Vec<String>,
    /// Interfaces recognized as single-argument provider contracts.
    pub provider_interfaces: Vec<String>,
    /// Class-level marker signaling "this class is a factory".
    pub factory_marker: String,
    /// Class-level marker signaling "this type is introspectable".
    pub introspection_marker: String,
    /// Class-level annotations marking a declaration as a controller.
    pub controller_annotations: Vec<String>,
    /// Method-level annotations marking a method as a route handler.
    pub route_annotations: Vec<String>,
    /// Annotation that must stay first on an overriding method.
    pub override_marker: String,
    /// Types never considered introspection candidates.
    pub excluded_types: Vec<String>,
}

impl Default for RecipeConfig {
    fn default() -> Self {
        Self {
            scope_annotations: default_scope_annotations(),
            provider_interfaces: default_provider_interfaces(),
            factory_marker: "io.micronaut.context.annotation.Factory".to_string(),
            introspection_marker: "io.micronaut.core.annotation.Introspected".to_string(),
            controller_annotations: vec!["io.micronaut.http.annotation.Controller".to_string()],
            route_annotations: default_route_annotations(),
            override_marker: "java.lang.Override".to_string(),
            excluded_types: default_excluded_types(),
        }
    }
}

fn default_scope_annotations() -> Vec<String> {
    [
        "javax.inject.Singleton",
        "jakarta.inject.Singleton",
        "io.micronaut.context.annotation.Bean",
        "io.micronaut.context.annotation.Prototype",
        "io.micronaut.context.annotation.Context",
        "io.micronaut.context.annotation.Infrastructure",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_provider_interfaces() -> Vec<String> {
    ["javax.inject.Provider", "jakarta.inject.Provider"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_route_annotations() -> Vec<String> {
    ["Get", "Post", "Put", "Delete", "Patch", "Head", "Options", "Trace"]
        .iter()
        .map(|m| format!("io.micronaut.http.annotation.{m}"))
        .collect()
}

fn default_excluded_types() -> Vec<String> {
    [
        // Primitives and void
        "boolean", "byte", "char", "short", "int", "long", "float", "double", "void",
        // Boxed primitives
        "java.lang.Boolean",
        "java.lang.Byte",
        "java.lang.Character",
        "java.lang.Short",
        "java.lang.Integer",
        "java.lang.Long",
        "java.lang.Float",
        "java.lang.Double",
        "java.lang.Void",
        // Well-known built-ins
        "java.lang.String",
        "java.lang.Object",
        "java.lang.CharSequence",
        // Containers
        "java.util.List",
        "java.util.Set",
        "java.util.Map",
        "java.util.Collection",
        "java.util.Optional",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

impl RecipeConfig {
    /// Load a configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a TOML file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
                path: path.display().to_string(),
            })?;
        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Validate catalog consistency.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.factory_marker.is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "factory_marker".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if self.introspection_marker.is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "introspection_marker".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if self.scope_annotations.is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "scope_annotations".to_string(),
                message: "must name at least one scope annotation".to_string(),
            });
        }
        if self.provider_interfaces.is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "provider_interfaces".to_string(),
                message: "must name at least one provider interface".to_string(),
            });
        }
        // The factory marker signals "already transformed"; letting it double
        // as a scope annotation would re-fire rule 1 on its own output.
        if self.scope_annotations.contains(&self.factory_marker) {
            return Err(ConfigError::ValidationFailed {
                field: "scope_annotations".to_string(),
                message: "must not contain the factory marker".to_string(),
            });
        }
        Ok(())
    }

    /// Compile the catalogs into hash-set form for matching.
    pub fn compile(&self) -> Catalogs {
        Catalogs {
            scope_annotations: self.scope_annotations.iter().cloned().collect(),
            provider_interfaces: self.provider_interfaces.iter().cloned().collect(),
            factory_marker: self.factory_marker.clone(),
            introspection_marker: self.introspection_marker.clone(),
            controller_annotations: self.controller_annotations.iter().cloned().collect(),
            route_annotations: self.route_annotations.iter().cloned().collect(),
            override_marker: self.override_marker.clone(),
            excluded_types: self.excluded_types.iter().cloned().collect(),
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Compiled catalog sets, built once per engine and shared read-only by
/// every matcher call.
#[derive(Debug, Clone)]
pub struct Catalogs {
    pub scope_annotations: FxHashSet<String>,
    pub provider_interfaces: FxHashSet<String>,
    pub factory_marker: String,
    pub introspection_marker: String,
    pub controller_annotations: FxHashSet<String>,
    pub route_annotations: FxHashSet<String>,
    pub override_marker: String,
    pub excluded_types: FxHashSet<String>,
}
