use std::fmt;
use std::rc::Rc;

use crate::interpreter::Environment;

/// Expression tree shared by the type checker and the interpreter.
///
/// Values produced by evaluation are expressions too: literals, lists of
/// values and closures.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(i64),
    Boolean(bool),
    Var(String),
    Lambda {
        binder: String,
        body: Box<Expr>,
    },
    /// Only produced by evaluation, never by parsing.
    Closure(Rc<Closure>),
    Application {
        func: Box<Expr>,
        argument: Box<Expr>,
    },
    If {
        condition: Box<Expr>,
        then_branch: Box<Expr>,
        else_branch: Box<Expr>,
    },
    Let {
        recursive: bool,
        binder: String,
        bound: Box<Expr>,
        body: Box<Expr>,
    },
    List(Vec<Expr>),
    /// Body of a built-in closure. Reads its operands from `x` and `y`.
    Primitive(Primitive),
}

/// Built-in operations wrapped by the closures of the initial environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    Add,
    Subtract,
    Multiply,
    Equals,
    Cons,
    IsEmpty,
    Head,
    Tail,
}

impl Primitive {
    pub fn name(&self) -> &'static str {
        match self {
            Primitive::Add => "add",
            Primitive::Subtract => "subtract",
            Primitive::Multiply => "multiply",
            Primitive::Equals => "equals",
            Primitive::Cons => "cons",
            Primitive::IsEmpty => "isEmpty",
            Primitive::Head => "head",
            Primitive::Tail => "tail",
        }
    }

    /// Number of curried parameters the wrapping closure takes.
    pub fn arity(&self) -> usize {
        match self {
            Primitive::Add
            | Primitive::Subtract
            | Primitive::Multiply
            | Primitive::Equals
            | Primitive::Cons => 2,
            Primitive::IsEmpty | Primitive::Head | Primitive::Tail => 1,
        }
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{}", self.name())
    }
}

/// A lambda paired with the environment it was created in.
pub struct Closure {
    pub binder: String,
    pub body: Expr,
    pub env: Environment,
    /// Name under which a `let rec` bound this closure. Applying the closure
    /// binds that name to the closure itself.
    pub self_name: Option<String>,
}

impl Closure {
    pub fn new(binder: impl Into<String>, body: Expr, env: Environment) -> Self {
        Closure {
            binder: binder.into(),
            body,
            env,
            self_name: None,
        }
    }

    /// Copy of this closure that refers to itself as `name`.
    pub fn recursive(&self, name: impl Into<String>) -> Self {
        Closure {
            binder: self.binder.clone(),
            body: self.body.clone(),
            env: self.env.clone(),
            self_name: Some(name.into()),
        }
    }
}

// Closures compare by identity; comparing captured environments would walk
// every reachable binding.
impl PartialEq for Closure {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other)
    }
}

impl fmt::Debug for Closure {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Closure")
            .field("binder", &self.binder)
            .field("body", &self.body)
            .field("self_name", &self.self_name)
            .finish_non_exhaustive()
    }
}

impl Expr {
    pub fn number(value: i64) -> Self {
        Expr::Number(value)
    }

    pub fn boolean(value: bool) -> Self {
        Expr::Boolean(value)
    }

    pub fn var(name: impl Into<String>) -> Self {
        Expr::Var(name.into())
    }

    pub fn lambda(binder: impl Into<String>, body: Expr) -> Self {
        Expr::Lambda {
            binder: binder.into(),
            body: Box::new(body),
        }
    }

    pub fn app(func: Expr, argument: Expr) -> Self {
        Expr::Application {
            func: Box::new(func),
            argument: Box::new(argument),
        }
    }

    /// `func first second`
    pub fn app2(func: Expr, first: Expr, second: Expr) -> Self {
        Expr::app(Expr::app(func, first), second)
    }

    /// Application of a named curried built-in, e.g. `binary("add", x, y)`
    /// for what a parser reads as `x + y`.
    pub fn binary(op: &str, left: Expr, right: Expr) -> Self {
        Expr::app2(Expr::var(op), left, right)
    }

    pub fn if_then_else(condition: Expr, then_branch: Expr, else_branch: Expr) -> Self {
        Expr::If {
            condition: Box::new(condition),
            then_branch: Box::new(then_branch),
            else_branch: Box::new(else_branch),
        }
    }

    pub fn let_in(binder: impl Into<String>, bound: Expr, body: Expr) -> Self {
        Expr::Let {
            recursive: false,
            binder: binder.into(),
            bound: Box::new(bound),
            body: Box::new(body),
        }
    }

    pub fn let_rec(binder: impl Into<String>, bound: Expr, body: Expr) -> Self {
        Expr::Let {
            recursive: true,
            binder: binder.into(),
            bound: Box::new(bound),
            body: Box::new(body),
        }
    }

    pub fn list(elements: Vec<Expr>) -> Self {
        Expr::List(elements)
    }

    /// Wrap a closure into a value.
    pub fn closure(closure: Closure) -> Self {
        Expr::Closure(Rc::new(closure))
    }

    pub fn is_value(&self) -> bool {
        match self {
            Expr::Number(_) | Expr::Boolean(_) | Expr::Closure(_) => true,
            Expr::List(elements) => elements.iter().all(Expr::is_value),
            _ => false,
        }
    }

    fn fmt_atom(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expr::Lambda { .. }
            | Expr::Application { .. }
            | Expr::If { .. }
            | Expr::Let { .. } => write!(f, "({})", self),
            _ => write!(f, "{}", self),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expr::Number(n) => write!(f, "{}", n),
            Expr::Boolean(b) => write!(f, "{}", b),
            Expr::Var(name) => write!(f, "{}", name),
            Expr::Lambda { binder, body } => write!(f, "\\{} -> {}", binder, body),
            Expr::Closure(closure) => write!(f, "<closure \\{}>", closure.binder),
            Expr::Application { func, argument } => {
                match func.as_ref() {
                    Expr::Application { .. } => write!(f, "{}", func)?,
                    _ => func.fmt_atom(f)?,
                }
                write!(f, " ")?;
                argument.fmt_atom(f)
            }
            Expr::If {
                condition,
                then_branch,
                else_branch,
            } => write!(
                f,
                "if {} then {} else {}",
                condition, then_branch, else_branch
            ),
            Expr::Let {
                recursive,
                binder,
                bound,
                body,
            } => {
                let rec = if *recursive { "rec " } else { "" };
                write!(f, "let {}{} = {} in {}", rec, binder, bound, body)
            }
            Expr::List(elements) => {
                write!(f, "[")?;
                for (index, element) in elements.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", element)?;
                }
                write!(f, "]")
            }
            Expr::Primitive(primitive) => write!(f, "{}", primitive),
        }
    }
}
