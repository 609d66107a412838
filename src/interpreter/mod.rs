//! # Interpreter
//!
//! Environment-based, call-by-value evaluation of [`crate::ast::Expr`].
//!
//! - Lambdas evaluate to closures that share the environment they were
//!   created in.
//! - Applying a closure extends its *captured* environment with the
//!   argument, which gives lexical scoping.
//! - `let rec` hands out a copy of the bound closure that knows its own
//!   name; applying it binds that name to the closure again.
//! - Built-ins are ordinary curried closures whose body is a primitive
//!   node.

mod env;
mod error;
mod eval;
mod primitives;

pub use env::Environment;
pub use error::EvalError;
pub use eval::{Interpreter, eval};
