//! Example programs, built with the [`Expr`] constructors.
//!
//! The surface syntax in each description is what a parser for the language
//! reads; operators desugar to the curried built-ins (`+` is `add`, `==` is
//! `equals`, ...).

use crate::ast::Expr;

pub struct Sample {
    pub name: &'static str,
    pub source: &'static str,
    pub expr: Expr,
}

pub fn all() -> Vec<Sample> {
    vec![
        Sample {
            name: "constant",
            source: "let x = 42 in true",
            expr: constant(),
        },
        Sample {
            name: "factorial",
            source: "let rec fak = \\x -> if x == 0 then 1 else x * fak (x - 1) in fak 5",
            expr: factorial(5),
        },
        Sample {
            name: "fibonacci",
            source: "let rec fib = \\n -> if n == 0 then 1 else if n == 1 then 1 \
                     else fib (n - 1) + fib (n - 2) in fib 10",
            expr: fibonacci(10),
        },
        Sample {
            name: "identity",
            source: "let identity = \\x -> x in identity identity",
            expr: identity(),
        },
        Sample {
            name: "polymorphic",
            source: "let identity = \\x -> x in let a = identity 10 in \
                     let b = identity true in if b then a else 0",
            expr: polymorphic(),
        },
        Sample {
            name: "list",
            source: "let empty = nil in let listOne = cons (10 + 20) empty in head listOne",
            expr: list(),
        },
        Sample {
            name: "list-sum",
            source: "let rec sum = \\xs -> if isEmpty xs then 0 else head xs + sum (tail xs) \
                     in sum [1, 2, 3, 4]",
            expr: list_sum(),
        },
        Sample {
            name: "head-nil",
            source: "head nil",
            expr: head_nil(),
        },
        Sample {
            name: "z-factorial",
            source: "(\\f -> (\\x -> f \\v -> x x v) (\\x -> f \\v -> x x v)) \
                     (\\fac -> \\x -> if equals x 0 then 1 else multiply x (fac (subtract x 1))) 5",
            expr: z_factorial(5),
        },
        Sample {
            name: "mixed-branches",
            source: "if (\\x1 -> equals 20 x1) 25 then true else add 3 (multiply 4 5)",
            expr: mixed_branches(),
        },
        Sample {
            name: "bad-add",
            source: "(\\x -> x + 1) true",
            expr: bad_add(),
        },
    ]
}

pub fn find(name: &str) -> Option<Sample> {
    all().into_iter().find(|sample| sample.name == name)
}

pub fn constant() -> Expr {
    Expr::let_in("x", Expr::number(42), Expr::boolean(true))
}

pub fn factorial(n: i64) -> Expr {
    let x = || Expr::var("x");
    Expr::let_rec(
        "fak",
        Expr::lambda(
            "x",
            Expr::if_then_else(
                Expr::binary("equals", x(), Expr::number(0)),
                Expr::number(1),
                Expr::binary(
                    "multiply",
                    x(),
                    Expr::app(
                        Expr::var("fak"),
                        Expr::binary("subtract", x(), Expr::number(1)),
                    ),
                ),
            ),
        ),
        Expr::app(Expr::var("fak"), Expr::number(n)),
    )
}

pub fn fibonacci(n: i64) -> Expr {
    let n_var = || Expr::var("n");
    let fib_of = |k| {
        Expr::app(
            Expr::var("fib"),
            Expr::binary("subtract", n_var(), Expr::number(k)),
        )
    };
    Expr::let_rec(
        "fib",
        Expr::lambda(
            "n",
            Expr::if_then_else(
                Expr::binary("equals", n_var(), Expr::number(0)),
                Expr::number(1),
                Expr::if_then_else(
                    Expr::binary("equals", n_var(), Expr::number(1)),
                    Expr::number(1),
                    Expr::binary("add", fib_of(1), fib_of(2)),
                ),
            ),
        ),
        Expr::app(Expr::var("fib"), Expr::number(n)),
    )
}

pub fn identity() -> Expr {
    Expr::let_in(
        "identity",
        Expr::lambda("x", Expr::var("x")),
        Expr::app(Expr::var("identity"), Expr::var("identity")),
    )
}

pub fn polymorphic() -> Expr {
    Expr::let_in(
        "identity",
        Expr::lambda("x", Expr::var("x")),
        Expr::let_in(
            "a",
            Expr::app(Expr::var("identity"), Expr::number(10)),
            Expr::let_in(
                "b",
                Expr::app(Expr::var("identity"), Expr::boolean(true)),
                Expr::if_then_else(Expr::var("b"), Expr::var("a"), Expr::number(0)),
            ),
        ),
    )
}

pub fn list() -> Expr {
    Expr::let_in(
        "empty",
        Expr::var("nil"),
        Expr::let_in(
            "listOne",
            Expr::binary(
                "cons",
                Expr::binary("add", Expr::number(10), Expr::number(20)),
                Expr::var("empty"),
            ),
            Expr::app(Expr::var("head"), Expr::var("listOne")),
        ),
    )
}

pub fn list_sum() -> Expr {
    let xs = || Expr::var("xs");
    Expr::let_rec(
        "sum",
        Expr::lambda(
            "xs",
            Expr::if_then_else(
                Expr::app(Expr::var("isEmpty"), xs()),
                Expr::number(0),
                Expr::binary(
                    "add",
                    Expr::app(Expr::var("head"), xs()),
                    Expr::app(Expr::var("sum"), Expr::app(Expr::var("tail"), xs())),
                ),
            ),
        ),
        Expr::app(
            Expr::var("sum"),
            Expr::list((1..=4).map(Expr::number).collect()),
        ),
    )
}

pub fn head_nil() -> Expr {
    Expr::app(Expr::var("head"), Expr::var("nil"))
}

/// Factorial through the strict fixed-point combinator. Self-application
/// has no finite type, so only the interpreter accepts it.
pub fn z_factorial(n: i64) -> Expr {
    let inner = || {
        Expr::lambda(
            "x",
            Expr::app(
                Expr::var("f"),
                Expr::lambda(
                    "v",
                    Expr::app2(Expr::var("x"), Expr::var("x"), Expr::var("v")),
                ),
            ),
        )
    };
    let z = Expr::lambda("f", Expr::app(inner(), inner()));

    let x = || Expr::var("x");
    let fac = Expr::lambda(
        "fac",
        Expr::lambda(
            "x",
            Expr::if_then_else(
                Expr::binary("equals", x(), Expr::number(0)),
                Expr::number(1),
                Expr::binary(
                    "multiply",
                    x(),
                    Expr::app(
                        Expr::var("fac"),
                        Expr::binary("subtract", x(), Expr::number(1)),
                    ),
                ),
            ),
        ),
    );

    Expr::app2(z, fac, Expr::number(n))
}

pub fn mixed_branches() -> Expr {
    Expr::if_then_else(
        Expr::app(
            Expr::lambda(
                "x1",
                Expr::binary("equals", Expr::number(20), Expr::var("x1")),
            ),
            Expr::number(25),
        ),
        Expr::boolean(true),
        Expr::binary(
            "add",
            Expr::number(3),
            Expr::binary("multiply", Expr::number(4), Expr::number(5)),
        ),
    )
}

pub fn bad_add() -> Expr {
    Expr::app(
        Expr::lambda("x", Expr::binary("add", Expr::var("x"), Expr::number(1))),
        Expr::boolean(true),
    )
}
