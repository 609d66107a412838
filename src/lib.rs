//! # Weasel - A Small Functional Language
//!
//! Weasel is a lambda calculus with numbers, booleans, conditionals, `let`,
//! `let rec` and a built-in list type. This crate contains the two consumers
//! of its expression tree: a Hindley-Milner type checker and an
//! environment-based interpreter.
//!
//! ## Pipeline
//!
//! ```text
//! Expression tree (ast::Expr, produced by a front end)
//!     ├──> [Type Inference] → types::Monotype
//!     └──> [Interpreter]    → value (ast::Expr)
//! ```
//!
//! The two halves are independent. [`run`] chains them: it type checks the
//! program (unless disabled in the [`config::Config`]) and then evaluates it.
//!
//! ## Type System
//!
//! - Unification over a solution map with occurs check
//! - Let-polymorphism: non-recursive `let` bindings are generalized,
//!   lambda parameters and `let rec` bindings stay monomorphic
//! - Built-in schemes: `add`, `subtract`, `multiply : Number -> Number -> Number`,
//!   `equals : Number -> Number -> Boolean`, `nil : ∀ a. [a]`,
//!   `cons : ∀ a. a -> [a] -> [a]`, `isEmpty : ∀ a. [a] -> Boolean`,
//!   `head : ∀ a. [a] -> a`, `tail : ∀ a. [a] -> [a]`
//!
//! ## Interpreter
//!
//! - Call-by-value, closures capture their defining environment
//! - Environments are persistent maps; applying a closure extends the
//!   captured environment, never the caller's
//! - `if` evaluates exactly one branch
//!
//! ## Module Structure
//!
//! - [`ast`] - Expression tree and constructors
//! - [`types`] - Type inference (Hindley-Milner)
//! - [`interpreter`] - Evaluation
//! - [`config`] - TOML configuration
//! - [`logger`] - `tracing` subscriber setup
//! - [`samples`] - Example programs
//!
//! ## Example
//!
//! ```rust
//! use weasel::ast::Expr;
//! use weasel::interpreter::{Environment, eval};
//! use weasel::types::{Monotype, infer_type};
//!
//! // let rec fak = \x -> if x == 0 then 1 else x * fak (x - 1) in fak 5
//! let program = weasel::samples::factorial(5);
//!
//! assert_eq!(infer_type(&program), Ok(Monotype::Number));
//! assert_eq!(eval(&Environment::initial(), &program), Ok(Expr::number(120)));
//! ```

pub mod ast;
pub mod config;
pub mod interpreter;
pub mod logger;
pub mod samples;
pub mod types;

use thiserror::Error;
use tracing::debug;

use ast::Expr;
use config::Config;
use interpreter::{Environment, EvalError, Interpreter};
use types::{Context, Infer, Monotype, TypeError};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error(transparent)]
    Type(#[from] TypeError),
    #[error(transparent)]
    Eval(#[from] EvalError),
}

/// Result of running a program.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    /// Inferred type, absent when type checking is disabled.
    pub ty: Option<Monotype>,
    pub value: Expr,
}

/// Type check (if enabled) and evaluate a closed program against the
/// built-ins.
pub fn run(expr: &Expr, config: &Config) -> Result<Outcome, Error> {
    let ty = if config.typecheck {
        let ty = Infer::new().infer(&Context::initial(), expr)?;
        debug!("inferred {}", ty);
        Some(ty)
    } else {
        None
    };

    let mut interpreter = Interpreter::with_max_depth(config.eval.max_depth);
    let value = interpreter.eval(&Environment::initial(), expr)?;
    Ok(Outcome { ty, value })
}
