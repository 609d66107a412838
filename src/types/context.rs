use std::collections::BTreeSet;

use im::HashMap as ImHashMap;

use super::solution::Solution;
use super::ty::{Monotype, Polytype};

/// Persistent mapping from names to type schemes.
///
/// Extending a context returns a new one and shares structure with the old;
/// sibling branches of the inference never see each other's bindings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Context {
    bindings: ImHashMap<String, Polytype>,
}

impl Context {
    pub fn empty() -> Self {
        Context {
            bindings: ImHashMap::new(),
        }
    }

    pub fn with_bindings(bindings: Vec<(String, Polytype)>) -> Self {
        Context {
            bindings: bindings.into_iter().collect(),
        }
    }

    /// Context holding the schemes of the built-in bindings.
    pub fn initial() -> Self {
        let number_op = Monotype::function(
            Monotype::Number,
            Monotype::function(Monotype::Number, Monotype::Number),
        );
        let a = || Monotype::var("a");
        let list_a = || Monotype::list(a());
        let forall_a = |ty| Polytype::polymorphic(vec!["a".to_string()], ty);

        Context::with_bindings(vec![
            ("add".to_string(), Polytype::monomorphic(number_op.clone())),
            ("subtract".to_string(), Polytype::monomorphic(number_op.clone())),
            ("multiply".to_string(), Polytype::monomorphic(number_op)),
            (
                "equals".to_string(),
                Polytype::monomorphic(Monotype::function(
                    Monotype::Number,
                    Monotype::function(Monotype::Number, Monotype::Boolean),
                )),
            ),
            ("nil".to_string(), forall_a(list_a())),
            (
                "cons".to_string(),
                forall_a(Monotype::function(
                    a(),
                    Monotype::function(list_a(), list_a()),
                )),
            ),
            (
                "isEmpty".to_string(),
                forall_a(Monotype::function(list_a(), Monotype::Boolean)),
            ),
            ("head".to_string(), forall_a(Monotype::function(list_a(), a()))),
            ("tail".to_string(), forall_a(Monotype::function(list_a(), list_a()))),
        ])
    }

    pub fn lookup(&self, name: &str) -> Option<&Polytype> {
        self.bindings.get(name)
    }

    pub fn extend(&self, name: impl Into<String>, scheme: Polytype) -> Context {
        Context {
            bindings: self.bindings.update(name.into(), scheme),
        }
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Unknowns still reachable from any binding once `solution` is applied.
    ///
    /// These must stay monomorphic when generalizing: another binding
    /// depends on them.
    pub fn free_unknowns(&self, solution: &Solution) -> BTreeSet<usize> {
        self.bindings
            .values()
            .flat_map(|scheme| solution.apply(&scheme.ty).free_unknowns())
            .collect()
    }
}
