use std::rc::Rc;

use tracing::{debug, trace};

use super::env::Environment;
use super::error::EvalError;
use super::primitives;
use crate::ast::{Closure, Expr};

/// Call-by-value evaluator.
///
/// Evaluation recurses on the host stack. `max_depth` bounds the number of
/// nested closure applications so that runaway recursion surfaces as
/// [`EvalError::RecursionLimit`] instead of a stack overflow.
#[derive(Debug, Default)]
pub struct Interpreter {
    max_depth: Option<usize>,
    depth: usize,
}

impl Interpreter {
    pub fn new() -> Self {
        Interpreter {
            max_depth: None,
            depth: 0,
        }
    }

    pub fn with_max_depth(max_depth: Option<usize>) -> Self {
        Interpreter {
            max_depth,
            depth: 0,
        }
    }

    pub fn eval(&mut self, env: &Environment, expr: &Expr) -> Result<Expr, EvalError> {
        match expr {
            Expr::Number(_) | Expr::Boolean(_) | Expr::Closure(_) => Ok(expr.clone()),

            Expr::Var(name) => env
                .lookup(name)
                .cloned()
                .ok_or_else(|| EvalError::UnboundVariable(name.clone())),

            Expr::Primitive(primitive) => primitives::apply(*primitive, env),

            Expr::Lambda { binder, body } => Ok(Expr::closure(Closure::new(
                binder.clone(),
                (**body).clone(),
                env.clone(),
            ))),

            Expr::Application { func, argument } => {
                let closure = match self.eval(env, func)? {
                    Expr::Closure(closure) => closure,
                    other => return Err(EvalError::NotAFunction(other)),
                };
                let argument = self.eval(env, argument)?;
                self.apply(closure, argument)
            }

            Expr::If {
                condition,
                then_branch,
                else_branch,
            } => match self.eval(env, condition)? {
                Expr::Boolean(true) => self.eval(env, then_branch),
                Expr::Boolean(false) => self.eval(env, else_branch),
                other => Err(EvalError::NotABoolean(other)),
            },

            Expr::Let {
                recursive,
                binder,
                bound,
                body,
            } => {
                let value = match self.eval(env, bound)? {
                    Expr::Closure(closure) if *recursive => {
                        debug!("tying recursive closure {}", binder);
                        Expr::closure(closure.recursive(binder.clone()))
                    }
                    value => value,
                };
                self.eval(&env.extend(binder.clone(), value), body)
            }

            Expr::List(elements) => elements
                .iter()
                .map(|element| self.eval(env, element))
                .collect::<Result<Vec<_>, _>>()
                .map(Expr::List),
        }
    }

    /// Evaluate the closure's body in its captured environment, extended with
    /// the argument (and with the closure itself for recursive bindings).
    fn apply(&mut self, closure: Rc<Closure>, argument: Expr) -> Result<Expr, EvalError> {
        match self.max_depth {
            Some(limit) if self.depth >= limit => return Err(EvalError::RecursionLimit(limit)),
            _ => {}
        }
        trace!("apply \\{} to {}", closure.binder, argument);

        let mut env = closure.env.clone();
        if let Some(name) = &closure.self_name {
            env = env.extend(name.clone(), Expr::Closure(Rc::clone(&closure)));
        }
        let env = env.extend(closure.binder.clone(), argument);

        self.depth += 1;
        let result = self.eval(&env, &closure.body);
        self.depth -= 1;
        result
    }
}

/// Evaluate `expr` without a depth limit.
pub fn eval(env: &Environment, expr: &Expr) -> Result<Expr, EvalError> {
    Interpreter::new().eval(env, expr)
}
