//! Stateless structural predicates over a single declaration.
//!
//! Matching is total and side-effect-free: every predicate returns a value
//! for well-formed input and never partially matches.

use refit_core::config::Catalogs;
use refit_core::model::{Declaration, Method, TypeRef};
use refit_core::traits::TypeOracle;
use rustc_hash::FxHashSet;

use super::types::{ProviderMatch, ProviderShape};

/// Match a declaration against the provider shape: implements a configured
/// provider interface with exactly one generic argument, and has exactly one
/// zero-argument accessor returning that argument type.
///
/// Indirect implementations (the declaration implements an interface that
/// the oracle resolves to a provider contract) match as well; an oracle
/// miss on any candidate supertype downgrades to `Unresolved`.
pub fn produced_type(
    decl: &Declaration,
    catalogs: &Catalogs,
    oracle: &dyn TypeOracle,
) -> ProviderShape {
    let mut produced: Option<TypeRef> = None;
    let mut unresolved: Option<String> = None;

    for ty in &decl.implements {
        if catalogs.provider_interfaces.contains(&ty.name) {
            if ty.args.len() != 1 {
                return ProviderShape::NoMatch;
            }
            produced = Some(ty.args[0].clone());
            break;
        }
        match oracle.supertypes_of(&ty.name) {
            None => unresolved = Some(ty.name.clone()),
            Some(supers) => {
                if let Some(contract) = supers
                    .iter()
                    .find(|s| catalogs.provider_interfaces.contains(&s.name))
                {
                    if contract.args.len() != 1 {
                        return ProviderShape::NoMatch;
                    }
                    produced = Some(contract.args[0].clone());
                    break;
                }
            }
        }
    }

    let Some(produced) = produced else {
        return match unresolved {
            Some(type_name) => ProviderShape::Unresolved { type_name },
            None => ProviderShape::NoMatch,
        };
    };

    if decl.method_count() == 0 {
        return ProviderShape::Malformed {
            reason: "provider-shaped class has no methods".to_string(),
        };
    }

    let accessors: Vec<usize> = decl
        .methods()
        .filter(|(_, m)| m.is_zero_arg() && m.return_type.name == produced.name)
        .map(|(idx, _)| idx)
        .collect();

    match accessors.as_slice() {
        [accessor] => ProviderShape::Match(ProviderMatch {
            produced,
            accessor: *accessor,
        }),
        [] => ProviderShape::Malformed {
            reason: format!(
                "provider-shaped class has no zero-argument accessor returning {}",
                produced.name
            ),
        },
        _ => ProviderShape::NoMatch,
    }
}

/// True if any class-level annotation's qualified name is in the given set.
pub fn has_any_of(decl: &Declaration, names: &FxHashSet<String>) -> bool {
    decl.annotations.iter().any(|a| names.contains(&a.name))
}

/// True if the factory marker is present at class level — rule 1's
/// already-transformed short-circuit.
pub fn is_marked_factory(decl: &Declaration, catalogs: &Catalogs) -> bool {
    decl.has_annotation(&catalogs.factory_marker)
}

/// True if the introspection marker is present at class level.
pub fn has_introspection_marker(decl: &Declaration, catalogs: &Catalogs) -> bool {
    decl.has_annotation(&catalogs.introspection_marker)
}

/// True for primitive, boxed-primitive, and well-known built-in container
/// types — never introspection candidates regardless of usage. Generic
/// arguments are not unwrapped.
pub fn is_excluded_type(ty: &TypeRef, catalogs: &Catalogs) -> bool {
    catalogs.excluded_types.contains(&ty.name)
}

/// True if the method is an entry point: it carries a configured route
/// annotation itself, or its enclosing declaration carries a configured
/// controller marker.
pub fn is_entry_point(method: &Method, decl: &Declaration, catalogs: &Catalogs) -> bool {
    method
        .annotations
        .iter()
        .any(|a| catalogs.route_annotations.contains(&a.name))
        || decl
            .annotations
            .iter()
            .any(|a| catalogs.controller_annotations.contains(&a.name))
}
