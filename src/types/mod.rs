//! # Type Inference
//!
//! Hindley-Milner inference with let-polymorphism over [`crate::ast::Expr`].
//!
//! - [`ty`] - monotypes, type schemes and their pretty printing
//! - [`solution`] - the map from solved unknowns to types
//! - [`unify`] - unification with occurs check
//! - [`context`] - persistent map from names to schemes, including the
//!   built-in schemes
//! - [`infer`] - the inference session: instantiation, generalization and
//!   the structural walk over expressions
//!
//! ```text
//! let identity = \x -> x in identity identity   : u3 -> u3
//! let x = 42 in true                            : Boolean
//! \f -> f f                                     : error, occurs check
//! ```

pub mod context;
pub mod error;
pub mod infer;
pub mod solution;
pub mod ty;
pub mod unify;

pub use context::Context;
pub use error::TypeError;
pub use infer::{Infer, infer_type};
pub use solution::Solution;
pub use ty::{Monotype, Polytype};
pub use unify::{UnifyError, unify};
