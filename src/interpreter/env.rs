use im::HashMap as ImHashMap;

use crate::ast::{Closure, Expr, Primitive};

/// Persistent mapping from names to values.
///
/// Closures hold on to the environment they were created in; extending it
/// afterwards produces a new environment and never changes what an existing
/// closure sees.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    bindings: ImHashMap<String, Expr>,
}

impl Environment {
    pub fn empty() -> Self {
        Environment {
            bindings: ImHashMap::new(),
        }
    }

    pub fn with_bindings(bindings: Vec<(String, Expr)>) -> Self {
        Environment {
            bindings: bindings.into_iter().collect(),
        }
    }

    /// Environment holding the built-in values.
    ///
    /// `nil` is the empty list; every other built-in is a curried closure
    /// whose innermost body is a [`Primitive`] reading its operands from `x`
    /// and `y`.
    pub fn initial() -> Self {
        let mut bindings = vec![("nil".to_string(), Expr::list(vec![]))];
        for primitive in [
            Primitive::Add,
            Primitive::Subtract,
            Primitive::Multiply,
            Primitive::Equals,
            Primitive::Cons,
            Primitive::IsEmpty,
            Primitive::Head,
            Primitive::Tail,
        ] {
            bindings.push((primitive.name().to_string(), builtin(primitive)));
        }
        Environment::with_bindings(bindings)
    }

    pub fn lookup(&self, name: &str) -> Option<&Expr> {
        self.bindings.get(name)
    }

    pub fn extend(&self, name: impl Into<String>, value: Expr) -> Environment {
        Environment {
            bindings: self.bindings.update(name.into(), value),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

fn builtin(primitive: Primitive) -> Expr {
    let body = match primitive.arity() {
        1 => Expr::Primitive(primitive),
        _ => Expr::lambda("y", Expr::Primitive(primitive)),
    };
    Expr::closure(Closure::new("x", body, Environment::empty()))
}
