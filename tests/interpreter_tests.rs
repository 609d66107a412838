use weasel::ast::{Expr, Primitive};
use weasel::interpreter::{Environment, EvalError, Interpreter, eval};
use weasel::samples;

fn run(expr: &Expr) -> Result<Expr, EvalError> {
    eval(&Environment::initial(), expr)
}

#[test]
fn eval_unused_let_binding() {
    assert_eq!(run(&samples::constant()), Ok(Expr::boolean(true)));
}

#[test]
fn eval_factorial() {
    assert_eq!(run(&samples::factorial(5)), Ok(Expr::number(120)));
    assert_eq!(run(&samples::factorial(0)), Ok(Expr::number(1)));
}

#[test]
fn eval_fibonacci() {
    assert_eq!(run(&samples::fibonacci(10)), Ok(Expr::number(89)));
}

#[test]
fn eval_list_built_ins() {
    assert_eq!(run(&samples::list()), Ok(Expr::number(30)));
}

#[test]
fn eval_list_sum() {
    assert_eq!(run(&samples::list_sum()), Ok(Expr::number(10)));
}

#[test]
fn eval_polymorphic_identity() {
    assert_eq!(run(&samples::polymorphic()), Ok(Expr::number(10)));
}

#[test]
fn eval_identity_applied_to_itself_is_a_closure() {
    match run(&samples::identity()) {
        Ok(Expr::Closure(closure)) => assert_eq!(closure.binder, "x"),
        other => panic!("expected a closure, got {:?}", other),
    }
}

#[test]
fn eval_untyped_fixed_point() {
    assert_eq!(run(&samples::z_factorial(5)), Ok(Expr::number(120)));
}

#[test]
fn eval_only_taken_branch() {
    // The else branch would fail with an unbound variable.
    let expr = Expr::if_then_else(
        Expr::boolean(true),
        Expr::number(1),
        Expr::var("undefined"),
    );
    assert_eq!(run(&expr), Ok(Expr::number(1)));
    assert_eq!(run(&samples::mixed_branches()), Ok(Expr::number(23)));
}

#[test]
fn eval_head_of_nil() {
    assert_eq!(
        run(&samples::head_nil()),
        Err(EvalError::EmptyListAccess(Primitive::Head))
    );
}

#[test]
fn eval_tail_of_nil() {
    let expr = Expr::app(Expr::var("tail"), Expr::var("nil"));
    assert_eq!(run(&expr), Err(EvalError::EmptyListAccess(Primitive::Tail)));
}

#[test]
fn eval_bad_add() {
    assert_eq!(
        run(&samples::bad_add()),
        Err(EvalError::InvalidOperandShape {
            op: Primitive::Add,
            operands: vec![Expr::boolean(true), Expr::number(1)],
        })
    );
}

#[test]
fn eval_applying_a_number() {
    let expr = Expr::app(Expr::number(3), Expr::number(4));
    assert_eq!(run(&expr), Err(EvalError::NotAFunction(Expr::number(3))));
}

#[test]
fn eval_non_boolean_condition() {
    let expr = Expr::if_then_else(Expr::number(0), Expr::number(1), Expr::number(2));
    assert_eq!(run(&expr), Err(EvalError::NotABoolean(Expr::number(0))));
}

#[test]
fn eval_unbound_variable() {
    assert_eq!(
        run(&Expr::var("nope")),
        Err(EvalError::UnboundVariable("nope".to_string()))
    );
}

#[test]
fn eval_closure_captures_definition_environment() {
    // let y = 1 in let f = \x -> add x y in let y = 100 in f 1
    let expr = Expr::let_in(
        "y",
        Expr::number(1),
        Expr::let_in(
            "f",
            Expr::lambda("x", Expr::binary("add", Expr::var("x"), Expr::var("y"))),
            Expr::let_in(
                "y",
                Expr::number(100),
                Expr::app(Expr::var("f"), Expr::number(1)),
            ),
        ),
    );
    assert_eq!(run(&expr), Ok(Expr::number(2)));
}

#[test]
fn eval_parameter_does_not_leak_into_caller() {
    // let f = \z -> z in let a = f 1 in z
    let expr = Expr::let_in(
        "f",
        Expr::lambda("z", Expr::var("z")),
        Expr::let_in(
            "a",
            Expr::app(Expr::var("f"), Expr::number(1)),
            Expr::var("z"),
        ),
    );
    assert_eq!(run(&expr), Err(EvalError::UnboundVariable("z".to_string())));
}

#[test]
fn eval_partial_application_of_built_in() {
    // let inc = add 1 in inc 41
    let expr = Expr::let_in(
        "inc",
        Expr::app(Expr::var("add"), Expr::number(1)),
        Expr::app(Expr::var("inc"), Expr::number(41)),
    );
    assert_eq!(run(&expr), Ok(Expr::number(42)));
}

#[test]
fn eval_user_binder_named_like_primitive_operand() {
    // \x -> \y -> subtract y x, applied to 1 and 10
    let expr = Expr::app2(
        Expr::lambda(
            "x",
            Expr::lambda("y", Expr::binary("subtract", Expr::var("y"), Expr::var("x"))),
        ),
        Expr::number(1),
        Expr::number(10),
    );
    assert_eq!(run(&expr), Ok(Expr::number(9)));
}

#[test]
fn eval_cons_builds_list() {
    let expr = Expr::binary(
        "cons",
        Expr::number(1),
        Expr::list(vec![Expr::number(2), Expr::number(3)]),
    );
    assert_eq!(
        run(&expr),
        Ok(Expr::list(vec![
            Expr::number(1),
            Expr::number(2),
            Expr::number(3)
        ]))
    );
}

#[test]
fn eval_list_elements_in_order() {
    let expr = Expr::list(vec![
        Expr::binary("add", Expr::number(1), Expr::number(1)),
        Expr::binary("multiply", Expr::number(2), Expr::number(3)),
    ]);
    assert_eq!(
        run(&expr),
        Ok(Expr::list(vec![Expr::number(2), Expr::number(6)]))
    );
}

#[test]
fn eval_recursion_limit() {
    let mut interpreter = Interpreter::with_max_depth(Some(50));
    assert_eq!(
        interpreter.eval(&Environment::initial(), &samples::factorial(100)),
        Err(EvalError::RecursionLimit(50))
    );

    // The depth unwinds after an error, so the same interpreter can be reused.
    assert_eq!(
        interpreter.eval(&Environment::initial(), &samples::factorial(5)),
        Ok(Expr::number(120))
    );
}
