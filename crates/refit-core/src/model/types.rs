//! Program model node types — language-independent, supplied by the parsing
//! collaborator. Units own their trees; rewrites replace nodes by structural
//! substitution, never by in-place mutation.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Annotation sequences are short in practice; four covers the common case
/// without a heap allocation.
pub type AnnotationSeq = SmallVec<[Annotation; 4]>;

/// A reference to a named type, possibly carrying generic arguments.
///
/// `Provider<A>` is represented as name `javax.inject.Provider`,
/// args `[A]`. Equality is structural on the qualified name and arguments.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeRef {
    /// Fully qualified name.
    pub name: String,
    /// Generic arguments, in source order.
    #[serde(default)]
    pub args: Vec<TypeRef>,
}

impl TypeRef {
    /// A plain type reference with no generic arguments.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
        }
    }

    /// A generic type reference.
    pub fn generic(name: impl Into<String>, args: Vec<TypeRef>) -> Self {
        Self {
            name: name.into(),
            args,
        }
    }

    /// The last segment of the qualified name.
    pub fn simple_name(&self) -> &str {
        self.name.rsplit('.').next().unwrap_or(&self.name)
    }
}

/// An annotation use site. Arguments are opaque text; recipes add, remove,
/// and relocate whole annotation values, never edit arguments.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Annotation {
    /// Fully qualified annotation name.
    pub name: String,
    /// Opaque argument list, in source order.
    #[serde(default)]
    pub args: Vec<String>,
}

impl Annotation {
    /// A marker annotation (no arguments).
    pub fn marker(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
        }
    }

    /// The last segment of the qualified name.
    pub fn simple_name(&self) -> &str {
        self.name.rsplit('.').next().unwrap_or(&self.name)
    }
}

/// A method parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Param {
    pub name: String,
    pub ty: TypeRef,
}

/// Opaque method body. Never inspected or altered by recipes; compared
/// structurally so identity-preservation is testable.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Body(pub String);

/// A method member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Method {
    pub name: String,
    pub params: Vec<Param>,
    pub return_type: TypeRef,
    #[serde(default)]
    pub annotations: AnnotationSeq,
    #[serde(default)]
    pub body: Body,
}

impl Method {
    /// True if this method takes no parameters.
    pub fn is_zero_arg(&self) -> bool {
        self.params.is_empty()
    }

    /// True if any annotation carries the given qualified name.
    pub fn has_annotation(&self, qualified: &str) -> bool {
        self.annotations.iter().any(|a| a.name == qualified)
    }
}

/// A field member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    pub ty: TypeRef,
    #[serde(default)]
    pub annotations: AnnotationSeq,
}

/// A class member: field or method. Ordered within the declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Member {
    Field(Field),
    Method(Method),
}

impl Member {
    /// Get the kind name of this member.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Field(_) => "field",
            Self::Method(_) => "method",
        }
    }

    /// The method payload, if this member is a method.
    pub fn as_method(&self) -> Option<&Method> {
        match self {
            Self::Method(m) => Some(m),
            Self::Field(_) => None,
        }
    }
}

/// A class-like top-level declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Declaration {
    /// Fully qualified name. Units are keyed by path, declarations by name.
    pub name: String,
    /// Implemented/extended type references, in source order.
    #[serde(default)]
    pub implements: Vec<TypeRef>,
    /// Class-level annotations, in source order.
    #[serde(default)]
    pub annotations: AnnotationSeq,
    /// Members, in source order.
    #[serde(default)]
    pub members: Vec<Member>,
}

impl Declaration {
    /// The last segment of the qualified name.
    pub fn simple_name(&self) -> &str {
        self.name.rsplit('.').next().unwrap_or(&self.name)
    }

    /// True if any class-level annotation carries the given qualified name.
    pub fn has_annotation(&self, qualified: &str) -> bool {
        self.annotations.iter().any(|a| a.name == qualified)
    }

    /// Iterate methods with their member indices.
    pub fn methods(&self) -> impl Iterator<Item = (usize, &Method)> {
        self.members
            .iter()
            .enumerate()
            .filter_map(|(i, m)| m.as_method().map(|method| (i, method)))
    }

    /// Number of method members.
    pub fn method_count(&self) -> usize {
        self.methods().count()
    }
}

/// One compilation unit: an ordered sequence of top-level declarations plus
/// its import list. Identified by a stable path, never by object identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompilationUnit {
    /// Stable path/name used as a map key.
    pub path: String,
    /// Deduplicated imports, order preserved. New imports insert in
    /// qualified-name sorted position relative to existing entries.
    #[serde(default)]
    pub imports: Vec<String>,
    /// Top-level declarations, in source order.
    #[serde(default)]
    pub decls: Vec<Declaration>,
}

impl CompilationUnit {
    /// An empty unit with the given path.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            imports: Vec::new(),
            decls: Vec::new(),
        }
    }

    /// True if the unit already imports the given qualified name, either
    /// directly or via a wildcard import of its package.
    pub fn has_import(&self, qualified: &str) -> bool {
        if self.imports.iter().any(|i| i == qualified) {
            return true;
        }
        match qualified.rsplit_once('.') {
            Some((package, _)) => {
                let wildcard = format!("{package}.*");
                self.imports.iter().any(|i| *i == wildcard)
            }
            None => false,
        }
    }

    /// Structural substitution: a new unit with the declaration at `idx`
    /// replaced. The input unit is left untouched.
    pub fn replacing_decl(&self, idx: usize, decl: Declaration) -> Self {
        let mut unit = self.clone();
        unit.decls[idx] = decl;
        unit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_names() {
        let ty = TypeRef::named("javax.inject.Provider");
        assert_eq!(ty.simple_name(), "Provider");

        let ann = Annotation::marker("Singleton");
        assert_eq!(ann.simple_name(), "Singleton");
    }

    #[test]
    fn test_generic_type_ref_equality() {
        let a = TypeRef::generic("javax.inject.Provider", vec![TypeRef::named("abc.A")]);
        let b = TypeRef::generic("javax.inject.Provider", vec![TypeRef::named("abc.A")]);
        let c = TypeRef::generic("javax.inject.Provider", vec![TypeRef::named("abc.B")]);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_has_import_wildcard() {
        let mut unit = CompilationUnit::new("a/b/C.java");
        unit.imports = vec!["io.micronaut.core.annotation.*".to_string()];
        assert!(unit.has_import("io.micronaut.core.annotation.Introspected"));
        assert!(!unit.has_import("io.micronaut.context.annotation.Factory"));
    }

    #[test]
    fn test_replacing_decl_leaves_input_untouched() {
        let mut unit = CompilationUnit::new("abc/A.java");
        unit.decls.push(Declaration {
            name: "abc.A".to_string(),
            implements: vec![],
            annotations: AnnotationSeq::new(),
            members: vec![],
        });

        let mut replacement = unit.decls[0].clone();
        replacement.annotations.push(Annotation::marker("abc.Marker"));

        let rewritten = unit.replacing_decl(0, replacement);
        assert!(unit.decls[0].annotations.is_empty());
        assert_eq!(rewritten.decls[0].annotations.len(), 1);
        assert_eq!(rewritten.path, unit.path);
    }

    #[test]
    fn test_methods_iterator_skips_fields() {
        let decl = Declaration {
            name: "abc.C".to_string(),
            implements: vec![],
            annotations: AnnotationSeq::new(),
            members: vec![
                Member::Field(Field {
                    name: "name".to_string(),
                    ty: TypeRef::named("java.lang.String"),
                    annotations: AnnotationSeq::new(),
                }),
                Member::Method(Method {
                    name: "getName".to_string(),
                    params: vec![],
                    return_type: TypeRef::named("java.lang.String"),
                    annotations: AnnotationSeq::new(),
                    body: Body::default(),
                }),
            ],
        };

        let methods: Vec<_> = decl.methods().collect();
        assert_eq!(methods.len(), 1);
        assert_eq!(methods[0].0, 1);
        assert_eq!(methods[0].1.name, "getName");
    }
}
