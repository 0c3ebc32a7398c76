//! Type-resolution oracle — the seam to the symbol-resolution collaborator.

use rustc_hash::FxHashMap;

use crate::model::TypeRef;

/// Answers the two symbol questions the engine cannot answer itself.
///
/// `None` means "unresolved"; callers must treat an unresolved answer
/// conservatively (skip the declaration, never guess).
pub trait TypeOracle: Send + Sync {
    /// The interfaces/supertypes the named type denotes, with concrete
    /// generic arguments where the hierarchy fixes them.
    fn supertypes_of(&self, name: &str) -> Option<Vec<TypeRef>>;

    /// The defining package of the named annotation.
    fn package_of_annotation(&self, name: &str) -> Option<String>;
}

/// In-memory oracle backed by precomputed symbol tables. Useful for tests
/// and for embedders that resolve symbols up front.
#[derive(Debug, Default)]
pub struct MapOracle {
    supertypes: FxHashMap<String, Vec<TypeRef>>,
    packages: FxHashMap<String, String>,
}

impl MapOracle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the supertype list of a named type.
    pub fn with_supertypes(mut self, name: impl Into<String>, supertypes: Vec<TypeRef>) -> Self {
        self.supertypes.insert(name.into(), supertypes);
        self
    }

    /// Record the defining package of an annotation.
    pub fn with_annotation_package(
        mut self,
        name: impl Into<String>,
        package: impl Into<String>,
    ) -> Self {
        self.packages.insert(name.into(), package.into());
        self
    }
}

impl TypeOracle for MapOracle {
    fn supertypes_of(&self, name: &str) -> Option<Vec<TypeRef>> {
        self.supertypes.get(name).cloned()
    }

    fn package_of_annotation(&self, name: &str) -> Option<String> {
        self.packages.get(name).cloned().or_else(|| {
            // Qualified annotation names carry their own package.
            name.rsplit_once('.').map(|(package, _)| package.to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_oracle_supertypes() {
        let oracle = MapOracle::new().with_supertypes(
            "abc.AProvider",
            vec![TypeRef::generic(
                "javax.inject.Provider",
                vec![TypeRef::named("abc.A")],
            )],
        );

        let supers = oracle.supertypes_of("abc.AProvider").unwrap();
        assert_eq!(supers.len(), 1);
        assert_eq!(supers[0].name, "javax.inject.Provider");
        assert!(oracle.supertypes_of("abc.Unknown").is_none());
    }

    #[test]
    fn test_package_falls_back_to_qualified_name() {
        let oracle = MapOracle::new();
        assert_eq!(
            oracle
                .package_of_annotation("io.micronaut.core.annotation.Introspected")
                .as_deref(),
            Some("io.micronaut.core.annotation")
        );
        assert!(oracle.package_of_annotation("Unqualified").is_none());
    }
}
