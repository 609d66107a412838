use std::fs;

use weasel::ast::Expr;
use weasel::config::{Config, LogLevel};
use weasel::interpreter::EvalError;
use weasel::types::{Monotype, TypeError};
use weasel::{Error, run, samples};

/// Whether a value inhabits `ty`. Unknowns and rigid variables accept
/// anything.
fn value_has_type(value: &Expr, ty: &Monotype) -> bool {
    match (value, ty) {
        (_, Monotype::Unknown(_)) | (_, Monotype::Var(_)) => true,
        (Expr::Number(_), Monotype::Number) => true,
        (Expr::Boolean(_), Monotype::Boolean) => true,
        (Expr::Closure(_), Monotype::Function(_, _)) => true,
        (Expr::List(elements), Monotype::List(element)) => {
            elements.iter().all(|item| value_has_type(item, element))
        }
        _ => false,
    }
}

#[test]
fn well_typed_samples_evaluate_to_their_type() {
    let config = Config::default();
    let mut checked = 0;
    for sample in samples::all() {
        if let Ok(outcome) = run(&sample.expr, &config) {
            let ty = outcome.ty.expect("typecheck is on by default");
            assert!(
                value_has_type(&outcome.value, &ty),
                "{}: {} does not have type {}",
                sample.name,
                outcome.value,
                ty
            );
            checked += 1;
        }
    }
    assert!(checked >= 6);
}

#[test]
fn ill_typed_samples_fail_before_evaluation() {
    let config = Config::default();
    for name in ["mixed-branches", "bad-add", "z-factorial"] {
        let sample = samples::find(name).unwrap();
        assert!(
            matches!(run(&sample.expr, &config), Err(Error::Type(_))),
            "{} should not type check",
            name
        );
    }
}

#[test]
fn well_typed_program_can_still_fail_at_runtime() {
    let result = run(&samples::head_nil(), &Config::default());
    assert!(matches!(
        result,
        Err(Error::Eval(EvalError::EmptyListAccess(_)))
    ));
}

#[test]
fn disabling_typecheck_runs_ill_typed_programs() {
    let config = Config::from_toml_str("typecheck = false").unwrap();
    let outcome = run(&samples::mixed_branches(), &config).unwrap();
    assert_eq!(outcome.ty, None);
    assert_eq!(outcome.value, Expr::number(23));
}

#[test]
fn config_file_drives_run() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("weasel.toml");
    fs::write(
        &path,
        "typecheck = true\n\n[log]\nlevel = \"warn\"\n\n[eval]\nmax_depth = 4\n",
    )
    .unwrap();

    let config = Config::load(&path).unwrap();
    assert_eq!(config.log.level, LogLevel::Warn);
    assert_eq!(
        run(&samples::factorial(20), &config),
        Err(Error::Eval(EvalError::RecursionLimit(4)))
    );
}

#[test]
fn error_messages_carry_their_phase() {
    let type_error = run(&samples::bad_add(), &Config::default()).unwrap_err();
    assert_eq!(
        type_error,
        Error::Type(TypeError::type_mismatch(Monotype::Number, Monotype::Boolean))
    );
    assert_eq!(
        type_error.to_string(),
        "Type error: type mismatch: expected Number, found Boolean"
    );

    let runtime_error = run(&samples::head_nil(), &Config::default()).unwrap_err();
    assert_eq!(
        runtime_error.to_string(),
        "Runtime error: head of an empty list"
    );
}
