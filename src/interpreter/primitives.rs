//! Built-in operations.
//!
//! A primitive node is the body of a built-in closure. By the time it is
//! evaluated the closure's parameters `x` (and `y` for binary operations)
//! are bound in the environment.

use super::env::Environment;
use super::error::EvalError;
use crate::ast::{Expr, Primitive};

pub fn apply(primitive: Primitive, env: &Environment) -> Result<Expr, EvalError> {
    let x = operand(env, "x")?;
    match primitive {
        Primitive::Add => arithmetic(primitive, x, operand(env, "y")?, i64::wrapping_add),
        Primitive::Subtract => arithmetic(primitive, x, operand(env, "y")?, i64::wrapping_sub),
        Primitive::Multiply => arithmetic(primitive, x, operand(env, "y")?, i64::wrapping_mul),
        Primitive::Equals => {
            let y = operand(env, "y")?;
            match (x, y) {
                (Expr::Number(a), Expr::Number(b)) => Ok(Expr::Boolean(a == b)),
                (Expr::Boolean(a), Expr::Boolean(b)) => Ok(Expr::Boolean(a == b)),
                _ => Err(invalid(primitive, x, y)),
            }
        }
        Primitive::Cons => {
            let y = operand(env, "y")?;
            let tail = as_list(y)?;
            let mut elements = Vec::with_capacity(tail.len() + 1);
            elements.push(x.clone());
            elements.extend(tail.iter().cloned());
            Ok(Expr::List(elements))
        }
        Primitive::IsEmpty => Ok(Expr::Boolean(as_list(x)?.is_empty())),
        Primitive::Head => match as_list(x)?.first() {
            Some(head) => Ok(head.clone()),
            None => Err(EvalError::EmptyListAccess(primitive)),
        },
        Primitive::Tail => match as_list(x)?.split_first() {
            Some((_, rest)) => Ok(Expr::List(rest.to_vec())),
            None => Err(EvalError::EmptyListAccess(primitive)),
        },
    }
}

fn operand<'a>(env: &'a Environment, name: &str) -> Result<&'a Expr, EvalError> {
    env.lookup(name)
        .ok_or_else(|| EvalError::UnboundVariable(name.to_string()))
}

fn arithmetic(
    primitive: Primitive,
    x: &Expr,
    y: &Expr,
    op: fn(i64, i64) -> i64,
) -> Result<Expr, EvalError> {
    match (x, y) {
        (Expr::Number(a), Expr::Number(b)) => Ok(Expr::Number(op(*a, *b))),
        _ => Err(invalid(primitive, x, y)),
    }
}

fn as_list(value: &Expr) -> Result<&[Expr], EvalError> {
    match value {
        Expr::List(elements) => Ok(elements),
        other => Err(EvalError::NotAList(other.clone())),
    }
}

fn invalid(op: Primitive, x: &Expr, y: &Expr) -> EvalError {
    EvalError::InvalidOperandShape {
        op,
        operands: vec![x.clone(), y.clone()],
    }
}
