use tracing::debug;

use super::context::Context;
use super::error::TypeError;
use super::solution::Solution;
use super::ty::{Monotype, Polytype};
use super::unify::unify;
use crate::ast::Expr;

/// One inference run: the solution built by unification and the supply of
/// fresh unknowns.
///
/// Both are scoped to a single top-level expression. Call [`Infer::reset`]
/// (or create a new session) before checking an unrelated program.
#[derive(Debug, Default)]
pub struct Infer {
    solution: Solution,
    supply: usize,
}

impl Infer {
    pub fn new() -> Self {
        Infer {
            solution: Solution::empty(),
            supply: 0,
        }
    }

    pub fn reset(&mut self) {
        self.solution.clear();
        self.supply = 0;
    }

    pub fn solution(&self) -> &Solution {
        &self.solution
    }

    fn fresh_unknown(&mut self) -> Monotype {
        self.supply += 1;
        Monotype::Unknown(self.supply)
    }

    fn unify(&mut self, t1: &Monotype, t2: &Monotype) -> Result<(), TypeError> {
        unify(&mut self.solution, t1, t2).map_err(TypeError::from)
    }

    /// Replace the bound variables of `scheme` by fresh unknowns, in order.
    pub fn instantiate(&mut self, scheme: &Polytype) -> Monotype {
        scheme.vars.iter().fold(scheme.ty.clone(), |ty, var| {
            let unknown = self.fresh_unknown();
            ty.substitute_var(var, &unknown)
        })
    }

    /// Quantify over the unknowns of `ty` that no binding in `ctx` mentions.
    pub fn generalize(&self, ctx: &Context, ty: &Monotype) -> Polytype {
        let ty = self.solution.apply(ty);
        let in_ctx = ctx.free_unknowns(&self.solution);

        let mut vars = Vec::new();
        let mut generalized = ty.clone();
        for unknown in ty.free_unknowns().difference(&in_ctx) {
            let name = format!("a{}", unknown);
            generalized = replace_unknown(&generalized, *unknown, &Monotype::var(name.clone()));
            vars.push(name);
        }

        Polytype::polymorphic(vars, generalized)
    }

    /// Infer the type of `expr` and resolve it through the final solution.
    pub fn infer(&mut self, ctx: &Context, expr: &Expr) -> Result<Monotype, TypeError> {
        let ty = self.infer_expr(ctx, expr)?;
        Ok(self.solution.apply(&ty))
    }

    /// Infer the type of `expr` without resolving it. Constraints found on
    /// the way are recorded in the session's solution.
    pub fn infer_expr(&mut self, ctx: &Context, expr: &Expr) -> Result<Monotype, TypeError> {
        match expr {
            Expr::Number(_) => Ok(Monotype::Number),

            Expr::Boolean(_) => Ok(Monotype::Boolean),

            Expr::Var(name) => match ctx.lookup(name) {
                Some(scheme) => Ok(self.instantiate(scheme)),
                None => Err(TypeError::unbound_variable(name.clone())),
            },

            Expr::Lambda { binder, body } => {
                let argument = self.fresh_unknown();
                let inner = ctx.extend(binder.clone(), Polytype::monomorphic(argument.clone()));
                let result = self.infer_expr(&inner, body)?;
                Ok(Monotype::function(argument, result))
            }

            Expr::Application { func, argument } => {
                let func_ty = self.infer_expr(ctx, func)?;
                let argument_ty = self.infer_expr(ctx, argument)?;
                let result = self.fresh_unknown();
                self.unify(&func_ty, &Monotype::function(argument_ty, result.clone()))?;
                Ok(result)
            }

            Expr::If {
                condition,
                then_branch,
                else_branch,
            } => {
                let condition_ty = self.infer_expr(ctx, condition)?;
                let then_ty = self.infer_expr(ctx, then_branch)?;
                let else_ty = self.infer_expr(ctx, else_branch)?;
                self.unify(&condition_ty, &Monotype::Boolean)?;
                self.unify(&then_ty, &else_ty)?;
                Ok(then_ty)
            }

            Expr::Let {
                recursive,
                binder,
                bound,
                body,
            } => {
                let body_ctx = if *recursive {
                    // The binding stays monomorphic inside its own definition
                    // and in the body: recursive lets are not generalized.
                    let binder_ty = self.fresh_unknown();
                    let inner =
                        ctx.extend(binder.clone(), Polytype::monomorphic(binder_ty.clone()));
                    let bound_ty = self.infer_expr(&inner, bound)?;
                    self.unify(&binder_ty, &bound_ty)?;
                    inner
                } else {
                    let bound_ty = self.infer_expr(ctx, bound)?;
                    let scheme = self.generalize(ctx, &bound_ty);
                    debug!("generalized {} : {}", binder, scheme);
                    ctx.extend(binder.clone(), scheme)
                };
                self.infer_expr(&body_ctx, body)
            }

            Expr::List(elements) => {
                let element = self.fresh_unknown();
                for item in elements {
                    let item_ty = self.infer_expr(ctx, item)?;
                    self.unify(&element, &item_ty)?;
                }
                Ok(Monotype::list(element))
            }

            Expr::Closure(_) | Expr::Primitive(_) => Err(TypeError::InternalNode {
                node: expr.to_string(),
            }),
        }
    }
}

/// Infer the type of a closed program against the built-in context, using a
/// fresh session.
pub fn infer_type(expr: &Expr) -> Result<Monotype, TypeError> {
    Infer::new().infer(&Context::initial(), expr)
}

fn replace_unknown(ty: &Monotype, unknown: usize, replacement: &Monotype) -> Monotype {
    match ty {
        Monotype::Unknown(id) if *id == unknown => replacement.clone(),
        Monotype::Number | Monotype::Boolean | Monotype::Var(_) | Monotype::Unknown(_) => {
            ty.clone()
        }
        Monotype::Function(argument, result) => Monotype::function(
            replace_unknown(argument, unknown, replacement),
            replace_unknown(result, unknown, replacement),
        ),
        Monotype::List(element) => Monotype::list(replace_unknown(element, unknown, replacement)),
    }
}
