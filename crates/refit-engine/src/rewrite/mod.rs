//! Rewrite primitives — pure functions from tree to tree.
//!
//! Every operation returns a new value for the smallest enclosing node
//! changed; the input tree is never mutated. Callers substitute the result
//! back into the owning compilation unit.

pub mod changes;

pub use changes::Change;

use refit_core::config::Catalogs;
use refit_core::model::{Annotation, AnnotationSeq, CompilationUnit, Declaration, Member};
use refit_core::traits::TypeOracle;

/// Move every class-level annotation in the configured scope set onto the
/// accessor method, and mark the class with the factory marker.
///
/// All matching annotations move (there may be more than one), preserving
/// their relative order. On the method they land immediately after an
/// override marker when one is present; the override marker stays first.
/// The factory marker takes the slot of the first removed annotation.
/// Unrelated annotations, fields, other methods, and the method body are
/// untouched.
pub fn relocate_annotations(
    decl: &Declaration,
    accessor: usize,
    catalogs: &Catalogs,
) -> (Declaration, Change) {
    let mut retained = AnnotationSeq::new();
    let mut moved: Vec<Annotation> = Vec::new();
    let mut marker_slot = None;

    for ann in &decl.annotations {
        if catalogs.scope_annotations.contains(&ann.name) {
            if marker_slot.is_none() {
                marker_slot = Some(retained.len());
            }
            moved.push(ann.clone());
        } else {
            retained.push(ann.clone());
        }
    }

    let slot = marker_slot.unwrap_or(retained.len());
    retained.insert(slot, Annotation::marker(catalogs.factory_marker.clone()));

    let mut members = decl.members.clone();
    if let Member::Method(method) = &mut members[accessor] {
        let insert_at = method
            .annotations
            .iter()
            .position(|a| a.name == catalogs.override_marker)
            .map(|i| i + 1)
            .unwrap_or(0);
        for (offset, ann) in moved.iter().enumerate() {
            method.annotations.insert(insert_at + offset, ann.clone());
        }
    }

    let method_name = decl.members[accessor]
        .as_method()
        .map(|m| m.name.clone())
        .unwrap_or_default();

    let change = Change::AnnotationsRelocated {
        decl: decl.name.clone(),
        method: method_name,
        moved: moved.iter().map(|a| a.name.clone()).collect(),
    };

    let rewritten = Declaration {
        name: decl.name.clone(),
        implements: decl.implements.clone(),
        annotations: retained,
        members,
    };

    (rewritten, change)
}

/// Insert the marker as the first class-level annotation, unless it is
/// already present, and ensure the unit imports the marker's qualified name.
///
/// Returns `None` when the marker is already present (idempotence) —
/// the input is the output, with no spurious diff.
pub fn add_annotation_if_absent(
    unit: &CompilationUnit,
    decl_idx: usize,
    marker: &str,
    oracle: &dyn TypeOracle,
) -> Option<(CompilationUnit, Vec<Change>)> {
    let decl = &unit.decls[decl_idx];
    if decl.has_annotation(marker) {
        return None;
    }

    let mut rewritten_decl = decl.clone();
    rewritten_decl
        .annotations
        .insert(0, Annotation::marker(marker.to_string()));

    let mut changes = vec![Change::AnnotationAdded {
        decl: decl.name.clone(),
        annotation: marker.to_string(),
    }];

    let mut rewritten = unit.replacing_decl(decl_idx, rewritten_decl);
    if let Some((with_import, change)) = with_import(&rewritten, marker, oracle) {
        rewritten = with_import;
        changes.push(change);
    }

    Some((rewritten, changes))
}

/// Ensure the unit imports the given annotation's qualified name.
///
/// The import inserts in qualified-name sorted order relative to the
/// existing list, deduplicated. Returns `None` when the import (or a
/// wildcard covering its package) is already present, or when an
/// unqualified name cannot be resolved to a package.
pub fn with_import(
    unit: &CompilationUnit,
    annotation: &str,
    oracle: &dyn TypeOracle,
) -> Option<(CompilationUnit, Change)> {
    let qualified = if annotation.contains('.') {
        annotation.to_string()
    } else {
        let package = oracle.package_of_annotation(annotation)?;
        format!("{package}.{annotation}")
    };

    if unit.has_import(&qualified) {
        return None;
    }

    let mut rewritten = unit.clone();
    let position = rewritten
        .imports
        .iter()
        .position(|i| i.as_str() > qualified.as_str())
        .unwrap_or(rewritten.imports.len());
    rewritten.imports.insert(position, qualified.clone());

    Some((rewritten, Change::ImportAdded { import: qualified }))
}

#[cfg(test)]
mod tests {
    use refit_core::config::RecipeConfig;
    use refit_core::model::{AnnotationSeq, Body, Field, Method, Param, TypeRef};
    use refit_core::traits::MapOracle;

    use super::*;

    fn catalogs() -> Catalogs {
        RecipeConfig::default().compile()
    }

    fn provider_decl(class_annotations: &[&str], accessor_annotations: &[&str]) -> Declaration {
        let mut annotations = AnnotationSeq::new();
        for name in class_annotations {
            annotations.push(Annotation::marker(name.to_string()));
        }
        let mut method_annotations = AnnotationSeq::new();
        for name in accessor_annotations {
            method_annotations.push(Annotation::marker(name.to_string()));
        }
        Declaration {
            name: "abc.AProvider".to_string(),
            implements: vec![TypeRef::generic(
                "javax.inject.Provider",
                vec![TypeRef::named("abc.A")],
            )],
            annotations,
            members: vec![
                Member::Method(Method {
                    name: "get".to_string(),
                    params: vec![],
                    return_type: TypeRef::named("abc.A"),
                    annotations: method_annotations,
                    body: Body("return new AImpl();".to_string()),
                }),
                Member::Method(Method {
                    name: "doSomething".to_string(),
                    params: vec![Param {
                        name: "arg".to_string(),
                        ty: TypeRef::named("java.lang.String"),
                    }],
                    return_type: TypeRef::named("void"),
                    annotations: AnnotationSeq::new(),
                    body: Body::default(),
                }),
            ],
        }
    }

    #[test]
    fn test_relocate_moves_all_scope_annotations_in_order() {
        let decl = provider_decl(
            &[
                "io.micronaut.context.annotation.Bean",
                "javax.inject.Singleton",
            ],
            &["java.lang.Override"],
        );

        let (rewritten, change) = relocate_annotations(&decl, 0, &catalogs());

        // Class level: only the factory marker remains.
        let class_names: Vec<_> = rewritten.annotations.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(class_names, ["io.micronaut.context.annotation.Factory"]);

        // Accessor: override marker stays first, moved annotations follow in
        // their class-level order.
        let accessor = rewritten.members[0].as_method().unwrap();
        let method_names: Vec<_> = accessor.annotations.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(
            method_names,
            [
                "java.lang.Override",
                "io.micronaut.context.annotation.Bean",
                "javax.inject.Singleton",
            ]
        );

        match change {
            Change::AnnotationsRelocated { moved, method, .. } => {
                assert_eq!(moved.len(), 2);
                assert_eq!(method, "get");
            }
            other => panic!("unexpected change {other:?}"),
        }
    }

    #[test]
    fn test_relocate_without_override_marker_prepends() {
        let decl = provider_decl(&["io.micronaut.context.annotation.Prototype"], &[]);

        let (rewritten, _) = relocate_annotations(&decl, 0, &catalogs());

        let accessor = rewritten.members[0].as_method().unwrap();
        assert_eq!(
            accessor.annotations[0].name,
            "io.micronaut.context.annotation.Prototype"
        );
    }

    #[test]
    fn test_relocate_keeps_unrelated_annotations_and_members() {
        let mut decl = provider_decl(&["javax.inject.Singleton"], &["java.lang.Override"]);
        decl.annotations
            .insert(0, Annotation::marker("java.lang.Deprecated"));
        decl.members.push(Member::Field(Field {
            name: "cache".to_string(),
            ty: TypeRef::named("abc.A"),
            annotations: AnnotationSeq::new(),
        }));

        let (rewritten, _) = relocate_annotations(&decl, 0, &catalogs());

        // Unrelated class annotation retained; marker takes the removed slot.
        let class_names: Vec<_> = rewritten.annotations.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(
            class_names,
            ["java.lang.Deprecated", "io.micronaut.context.annotation.Factory"]
        );

        // Other members untouched.
        assert_eq!(rewritten.members[1], decl.members[1]);
        assert_eq!(rewritten.members[2], decl.members[2]);
        // Accessor body untouched.
        assert_eq!(
            rewritten.members[0].as_method().unwrap().body,
            decl.members[0].as_method().unwrap().body
        );
    }

    #[test]
    fn test_add_annotation_if_absent_inserts_marker_and_import() {
        let mut unit = CompilationUnit::new("a/b/C.java");
        unit.imports = vec![
            "io.micronaut.core.annotation.NonNull".to_string(),
            "java.util.List".to_string(),
        ];
        unit.decls.push(Declaration {
            name: "a.b.C".to_string(),
            implements: vec![],
            annotations: AnnotationSeq::new(),
            members: vec![],
        });

        let oracle = MapOracle::new();
        let (rewritten, changes) = add_annotation_if_absent(
            &unit,
            0,
            "io.micronaut.core.annotation.Introspected",
            &oracle,
        )
        .unwrap();

        assert_eq!(
            rewritten.decls[0].annotations[0].name,
            "io.micronaut.core.annotation.Introspected"
        );
        // Sorted insert: Introspected lands before NonNull.
        assert_eq!(
            rewritten.imports,
            [
                "io.micronaut.core.annotation.Introspected",
                "io.micronaut.core.annotation.NonNull",
                "java.util.List",
            ]
        );
        assert_eq!(changes.len(), 2);
    }

    #[test]
    fn test_add_annotation_if_absent_is_a_no_op_when_present() {
        let mut unit = CompilationUnit::new("a/b/D.java");
        let mut annotations = AnnotationSeq::new();
        annotations.push(Annotation::marker("io.micronaut.core.annotation.Introspected"));
        unit.decls.push(Declaration {
            name: "a.b.D".to_string(),
            implements: vec![],
            annotations,
            members: vec![],
        });

        let oracle = MapOracle::new();
        assert!(add_annotation_if_absent(
            &unit,
            0,
            "io.micronaut.core.annotation.Introspected",
            &oracle,
        )
        .is_none());
    }

    #[test]
    fn test_with_import_skips_wildcard_covered_packages() {
        let mut unit = CompilationUnit::new("a/b/C.java");
        unit.imports = vec!["io.micronaut.core.annotation.*".to_string()];

        let oracle = MapOracle::new();
        assert!(with_import(&unit, "io.micronaut.core.annotation.Introspected", &oracle).is_none());
    }

    #[test]
    fn test_with_import_resolves_unqualified_names_through_oracle() {
        let unit = CompilationUnit::new("a/b/C.java");
        let oracle =
            MapOracle::new().with_annotation_package("Introspected", "io.micronaut.core.annotation");

        let (rewritten, change) = with_import(&unit, "Introspected", &oracle).unwrap();
        assert_eq!(
            rewritten.imports,
            ["io.micronaut.core.annotation.Introspected"]
        );
        assert_eq!(
            change,
            Change::ImportAdded {
                import: "io.micronaut.core.annotation.Introspected".to_string()
            }
        );
    }
}
