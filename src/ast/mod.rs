//! # Expression Tree
//!
//! The single term representation consumed by both the type checker and the
//! interpreter. A front end (lexer and parser) is expected to hand over a
//! well-formed [`Expr`] built from literals, variables, lambdas,
//! applications, conditionals, lets and list literals.
//!
//! Two variants never come out of a parser:
//!
//! - [`Expr::Closure`] is created by the interpreter when a lambda is
//!   evaluated.
//! - [`Expr::Primitive`] is the body of the built-in closures seeded into the
//!   initial environment (`add`, `cons`, `head`, ...).
//!
//! Surface operators are plain applications of the curried built-ins:
//!
//! ```text
//! x + 1        =>  add x 1         =>  Application(Application(Var add, Var x), Number 1)
//! x == 0       =>  equals x 0
//! ```

pub mod expression;

pub use expression::{Closure, Expr, Primitive};
