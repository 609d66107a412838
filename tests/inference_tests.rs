use weasel::ast::Expr;
use weasel::samples;
use weasel::types::{Context, Infer, Monotype, Polytype, TypeError, infer_type};

fn number_to_number() -> Monotype {
    Monotype::function(Monotype::Number, Monotype::Number)
}

#[test]
fn infer_unused_let_binding() {
    assert_eq!(infer_type(&samples::constant()), Ok(Monotype::Boolean));
}

#[test]
fn infer_identity_applied_to_itself() {
    let ty = infer_type(&samples::identity()).unwrap();
    match ty {
        Monotype::Function(argument, result) => {
            assert!(matches!(*argument, Monotype::Unknown(_)));
            assert_eq!(argument, result);
        }
        other => panic!("expected a function type, got {}", other),
    }
}

#[test]
fn infer_let_polymorphism() {
    assert_eq!(infer_type(&samples::polymorphic()), Ok(Monotype::Number));
}

#[test]
fn infer_lambda_parameter_is_monomorphic() {
    // \f -> if f true then f 1 else 0
    let expr = Expr::lambda(
        "f",
        Expr::if_then_else(
            Expr::app(Expr::var("f"), Expr::boolean(true)),
            Expr::app(Expr::var("f"), Expr::number(1)),
            Expr::number(0),
        ),
    );
    assert!(matches!(
        infer_type(&expr),
        Err(TypeError::TypeMismatch { .. })
    ));
}

#[test]
fn infer_recursive_functions() {
    assert_eq!(infer_type(&samples::factorial(5)), Ok(Monotype::Number));
    assert_eq!(infer_type(&samples::fibonacci(10)), Ok(Monotype::Number));
    assert_eq!(infer_type(&samples::list_sum()), Ok(Monotype::Number));
}

#[test]
fn infer_list_built_ins() {
    assert_eq!(infer_type(&samples::list()), Ok(Monotype::Number));
}

#[test]
fn infer_list_literal() {
    let expr = Expr::list(vec![Expr::number(1), Expr::number(2)]);
    assert_eq!(infer_type(&expr), Ok(Monotype::list(Monotype::Number)));
}

#[test]
fn infer_heterogeneous_list_fails() {
    let expr = Expr::list(vec![Expr::number(1), Expr::boolean(true)]);
    assert_eq!(
        infer_type(&expr),
        Err(TypeError::type_mismatch(Monotype::Number, Monotype::Boolean))
    );
}

#[test]
fn infer_head_of_nil_leaves_unknown() {
    let ty = infer_type(&samples::head_nil()).unwrap();
    assert!(matches!(ty, Monotype::Unknown(_)));
}

#[test]
fn infer_mismatched_branches() {
    assert_eq!(
        infer_type(&samples::mixed_branches()),
        Err(TypeError::type_mismatch(Monotype::Boolean, Monotype::Number))
    );
}

#[test]
fn infer_bad_add() {
    assert_eq!(
        infer_type(&samples::bad_add()),
        Err(TypeError::type_mismatch(Monotype::Number, Monotype::Boolean))
    );
}

#[test]
fn infer_self_application_fails_occurs_check() {
    assert!(matches!(
        infer_type(&samples::z_factorial(3)),
        Err(TypeError::OccursCheck { .. })
    ));
}

#[test]
fn infer_unbound_variable() {
    let expr = Expr::app(Expr::var("missing"), Expr::number(1));
    assert_eq!(
        infer_type(&expr),
        Err(TypeError::unbound_variable("missing"))
    );
}

#[test]
fn infer_against_custom_context() {
    let ctx = Context::empty().extend("inc", Polytype::monomorphic(number_to_number()));
    let expr = Expr::app(Expr::var("inc"), Expr::number(1));

    let mut infer = Infer::new();
    assert_eq!(infer.infer(&ctx, &expr), Ok(Monotype::Number));
    assert!(!infer.solution().is_empty());

    // The built-ins are not part of a custom context.
    infer.reset();
    let with_builtin = Expr::binary("add", Expr::number(1), Expr::number(2));
    assert_eq!(
        infer.infer(&ctx, &with_builtin),
        Err(TypeError::unbound_variable("add"))
    );
}

#[test]
fn infer_partial_application() {
    let expr = Expr::app(Expr::var("add"), Expr::number(1));
    assert_eq!(infer_type(&expr), Ok(number_to_number()));
}

#[test]
fn infer_generalized_scheme_in_context() {
    let mut infer = Infer::new();
    let ctx = Context::initial();
    let ty = infer
        .infer(&ctx, &Expr::lambda("x", Expr::var("x")))
        .unwrap();
    let scheme = infer.generalize(&ctx, &ty);
    assert_eq!(scheme.vars.len(), 1);
    assert_eq!(scheme.pretty(), "∀ a1. a1 -> a1");
}

#[test]
fn infer_is_independent_of_earlier_sessions() {
    let first = infer_type(&samples::identity()).unwrap();
    let second = infer_type(&samples::identity()).unwrap();
    assert_eq!(first, second);
}
