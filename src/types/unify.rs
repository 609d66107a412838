use thiserror::Error;
use tracing::{debug, trace};

use super::solution::Solution;
use super::ty::Monotype;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnifyError {
    #[error("type mismatch: expected {expected}, found {found}")]
    Mismatch { expected: Monotype, found: Monotype },
    #[error("occurs check failed: cannot construct infinite type u{unknown} = {ty}")]
    OccursCheck { unknown: usize, ty: Monotype },
}

/// Unify two types, recording solved unknowns in `solution`.
///
/// Both sides are resolved through the solution first, so the algorithm only
/// ever binds unknowns that are still unsolved.
///
/// ```text
/// unify(Number, Number)            = ok
/// unify(u1, Number)                = ok, u1 := Number
/// unify(u1 -> u2, Number -> [u1])  = ok, u1 := Number, u2 := [Number]
/// unify([u1], [Boolean])           = ok, u1 := Boolean
/// unify(Number, Boolean)           = Mismatch
/// unify(u1, u1 -> Number)          = OccursCheck
/// ```
///
/// A failed unification may leave the bindings made before the failure in
/// the solution. Inference is all-or-nothing, so callers discard the session
/// on error.
pub fn unify(solution: &mut Solution, t1: &Monotype, t2: &Monotype) -> Result<(), UnifyError> {
    let t1 = solution.apply(t1);
    let t2 = solution.apply(t2);
    trace!("unify {} ~ {}", t1, t2);

    if t1 == t2 {
        return Ok(());
    }

    match (&t1, &t2) {
        (Monotype::Unknown(unknown), other) | (other, Monotype::Unknown(unknown)) => {
            solve_unknown(solution, *unknown, other)
        }
        (Monotype::Function(a1, r1), Monotype::Function(a2, r2)) => {
            unify(solution, a1, a2)?;
            unify(solution, r1, r2)
        }
        (Monotype::List(e1), Monotype::List(e2)) => unify(solution, e1, e2),
        _ => Err(UnifyError::Mismatch {
            expected: t1.clone(),
            found: t2.clone(),
        }),
    }
}

/// Record `unknown := ty` unless `ty` mentions `unknown` itself.
pub fn solve_unknown(
    solution: &mut Solution,
    unknown: usize,
    ty: &Monotype,
) -> Result<(), UnifyError> {
    if ty.free_unknowns().contains(&unknown) {
        return Err(UnifyError::OccursCheck {
            unknown,
            ty: ty.clone(),
        });
    }
    debug!("solved u{} |-> {}", unknown, ty);
    solution.insert(unknown, ty.clone());
    Ok(())
}
