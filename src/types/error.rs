//! # Type Error Definitions
//!
//! Errors raised while inferring the type of a program:
//!
//! - A variable is used but not bound (`UnboundVariable`)
//! - Two types cannot be unified (`TypeMismatch`)
//! - A type would be infinite (`OccursCheck`)
//! - An evaluation-only node reached the checker (`InternalNode`)
//!
//! Inference stops at the first error; there is no recovery and no partial
//! result.
//!
//! ## Example Error Messages
//!
//! ```text
//! Type error: unbound variable: x
//! Type error: type mismatch: expected Number, found Boolean
//! Type error: cannot construct infinite type: u1 = u1 -> u2
//! ```

use thiserror::Error;

use super::ty::Monotype;
use super::unify::UnifyError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypeError {
    /// Reference to a name bound neither by the program nor by the built-ins.
    #[error("Type error: unbound variable: {name}")]
    UnboundVariable { name: String },

    /// Unification failure. Both types are resolved through the solution at
    /// the time of failure.
    #[error("Type error: type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: Monotype, found: Monotype },

    /// The unknown would have to contain itself.
    #[error("Type error: cannot construct infinite type: u{unknown} = {ty}")]
    OccursCheck { unknown: usize, ty: Monotype },

    /// Closures and primitives only exist at runtime.
    #[error("Type error: cannot infer the type of runtime value {node}")]
    InternalNode { node: String },
}

impl TypeError {
    pub fn unbound_variable(name: impl Into<String>) -> Self {
        TypeError::UnboundVariable { name: name.into() }
    }

    pub fn type_mismatch(expected: Monotype, found: Monotype) -> Self {
        TypeError::TypeMismatch { expected, found }
    }

    pub fn occurs_check(unknown: usize, ty: Monotype) -> Self {
        TypeError::OccursCheck { unknown, ty }
    }
}

impl From<UnifyError> for TypeError {
    fn from(err: UnifyError) -> Self {
        match err {
            UnifyError::Mismatch { expected, found } => TypeError::type_mismatch(expected, found),
            UnifyError::OccursCheck { unknown, ty } => TypeError::occurs_check(unknown, ty),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_unbound_variable_display() {
        let err = TypeError::unbound_variable("x");
        assert_eq!(err.to_string(), "Type error: unbound variable: x");
    }

    #[test]
    fn test_error_type_mismatch_display() {
        let err = TypeError::type_mismatch(Monotype::Number, Monotype::Boolean);
        let msg = err.to_string();
        assert!(msg.contains("type mismatch"));
        assert!(msg.contains("Number"));
        assert!(msg.contains("Boolean"));
    }

    #[test]
    fn test_error_occurs_check_display() {
        let ty = Monotype::function(Monotype::Unknown(0), Monotype::Number);
        let err = TypeError::occurs_check(0, ty);
        assert!(err.to_string().contains("infinite type: u0 = u0 -> Number"));
    }

    #[test]
    fn test_from_unify_error() {
        let err: TypeError = UnifyError::Mismatch {
            expected: Monotype::Number,
            found: Monotype::Boolean,
        }
        .into();
        assert_eq!(
            err,
            TypeError::type_mismatch(Monotype::Number, Monotype::Boolean)
        );

        let err: TypeError = UnifyError::OccursCheck {
            unknown: 3,
            ty: Monotype::list(Monotype::Unknown(3)),
        }
        .into();
        assert!(matches!(err, TypeError::OccursCheck { unknown: 3, .. }));
    }
}
