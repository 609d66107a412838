use thiserror::Error;

use crate::ast::{Expr, Primitive};

/// Runtime failures. The first one aborts the whole evaluation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    #[error("Runtime error: {0} was undefined")]
    UnboundVariable(String),

    #[error("Runtime error: {0} is not a function")]
    NotAFunction(Expr),

    #[error("Runtime error: condition {0} is not a boolean")]
    NotABoolean(Expr),

    #[error("Runtime error: expected a list, found {0}")]
    NotAList(Expr),

    #[error("Runtime error: {} of an empty list", .0.name())]
    EmptyListAccess(Primitive),

    #[error("Runtime error: can't apply {} to {}", .op.name(), render_operands(.operands))]
    InvalidOperandShape { op: Primitive, operands: Vec<Expr> },

    #[error("Runtime error: recursion limit of {0} nested applications exceeded")]
    RecursionLimit(usize),
}

fn render_operands(operands: &[Expr]) -> String {
    operands
        .iter()
        .map(|operand| operand.to_string())
        .collect::<Vec<_>>()
        .join(" and ")
}
