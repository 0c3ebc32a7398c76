//! Shared fixtures: units mirroring the migration scenarios the recipes
//! were built for.
#![allow(dead_code)]

use std::sync::Arc;

use refit_core::config::RecipeConfig;
use refit_core::model::{
    Annotation, AnnotationSeq, Body, CompilationUnit, Declaration, Member, Method, Param, TypeRef,
};
use refit_core::traits::MapOracle;
use refit_engine::RecipeEngine;

pub fn annotations(names: &[&str]) -> AnnotationSeq {
    names
        .iter()
        .map(|n| Annotation::marker(n.to_string()))
        .collect()
}

pub fn method(name: &str, params: &[(&str, &str)], return_type: &str, anns: &[&str]) -> Member {
    Member::Method(Method {
        name: name.to_string(),
        params: params
            .iter()
            .map(|(name, ty)| Param {
                name: name.to_string(),
                ty: TypeRef::named(ty.to_string()),
            })
            .collect(),
        return_type: TypeRef::named(return_type),
        annotations: annotations(anns),
        body: Body::default(),
    })
}

pub fn unit(path: &str, imports: &[&str], decls: Vec<Declaration>) -> CompilationUnit {
    CompilationUnit {
        path: path.to_string(),
        imports: imports.iter().map(|i| i.to_string()).collect(),
        decls,
    }
}

/// `abc.AProvider implements Provider<abc.A>` with the given class-level
/// annotations and a `get()` accessor carrying `@Override`.
pub fn a_provider(provider_interface: &str, class_annotations: &[&str]) -> CompilationUnit {
    unit(
        "abc/AProvider.java",
        &[provider_interface],
        vec![Declaration {
            name: "abc.AProvider".to_string(),
            implements: vec![TypeRef::generic(
                provider_interface,
                vec![TypeRef::named("abc.A")],
            )],
            annotations: annotations(class_annotations),
            members: vec![
                method("get", &[], "abc.A", &["java.lang.Override"]),
                method(
                    "doSomething",
                    &[("arg", "java.lang.String")],
                    "void",
                    &["io.micronaut.core.annotation.NonNull"],
                ),
            ],
        }],
    )
}

/// A plain data class `a.b.<name>` with a `getName` accessor, optionally
/// already carrying the introspection marker.
pub fn pojo(name: &str, marked: bool) -> CompilationUnit {
    let class_annotations = if marked {
        annotations(&["io.micronaut.core.annotation.Introspected"])
    } else {
        AnnotationSeq::new()
    };
    let imports: &[&str] = if marked {
        &["io.micronaut.core.annotation.Introspected"]
    } else {
        &[]
    };
    unit(
        &format!("a/b/{name}.java"),
        imports,
        vec![Declaration {
            name: format!("a.b.{name}"),
            implements: vec![],
            annotations: class_annotations,
            members: vec![
                method("getName", &[], "java.lang.String", &[]),
                method("setName", &[("name", "java.lang.String")], "void", &[]),
            ],
        }],
    )
}

/// A controller whose `@Get` handlers take the named types as parameters.
pub fn controller_with_params(param_types: &[&str]) -> CompilationUnit {
    let mut members: Vec<Member> = param_types
        .iter()
        .enumerate()
        .map(|(i, ty)| {
            method(
                &format!("handler{i}"),
                &[("value", ty)],
                "java.lang.String",
                &["io.micronaut.http.annotation.Get"],
            )
        })
        .collect();
    members.push(method("doNothing", &[], "void", &[]));
    members.push(method("getSomething", &[], "int", &[]));

    unit(
        "a/b/AbController.java",
        &[
            "io.micronaut.http.annotation.Controller",
            "io.micronaut.http.annotation.Get",
        ],
        vec![Declaration {
            name: "a.b.AbController".to_string(),
            implements: vec![],
            annotations: annotations(&["io.micronaut.http.annotation.Controller"]),
            members,
        }],
    )
}

/// A controller whose single `@Get` handler returns the named type.
pub fn controller_with_return(return_type: &str) -> CompilationUnit {
    unit(
        "a/b/AbController.java",
        &[
            "io.micronaut.http.annotation.Controller",
            "io.micronaut.http.annotation.Get",
        ],
        vec![Declaration {
            name: "a.b.AbController".to_string(),
            implements: vec![],
            annotations: annotations(&["io.micronaut.http.annotation.Controller"]),
            members: vec![method(
                "getC",
                &[],
                return_type,
                &["io.micronaut.http.annotation.Get"],
            )],
        }],
    )
}

pub fn engine() -> RecipeEngine {
    RecipeEngine::new(&RecipeConfig::default(), Arc::new(MapOracle::new())).unwrap()
}
