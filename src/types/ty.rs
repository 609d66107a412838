use std::collections::BTreeSet;
use std::fmt;

/// A monomorphic type.
///
/// `Var` is a rigid variable bound by an enclosing [`Polytype`]; it never
/// survives instantiation. `Unknown` is an inference metavariable solved by
/// unification.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Monotype {
    Number,
    Boolean,
    Function(Box<Monotype>, Box<Monotype>),
    Var(String),
    Unknown(usize),
    List(Box<Monotype>),
}

impl Monotype {
    pub fn function(argument: Monotype, result: Monotype) -> Self {
        Monotype::Function(Box::new(argument), Box::new(result))
    }

    pub fn list(element: Monotype) -> Self {
        Monotype::List(Box::new(element))
    }

    pub fn var(name: impl Into<String>) -> Self {
        Monotype::Var(name.into())
    }

    pub fn free_unknowns(&self) -> BTreeSet<usize> {
        let mut unknowns = BTreeSet::new();
        self.collect_unknowns(&mut unknowns);
        unknowns
    }

    fn collect_unknowns(&self, unknowns: &mut BTreeSet<usize>) {
        match self {
            Monotype::Number | Monotype::Boolean | Monotype::Var(_) => {}
            Monotype::Unknown(id) => {
                unknowns.insert(*id);
            }
            Monotype::Function(argument, result) => {
                argument.collect_unknowns(unknowns);
                result.collect_unknowns(unknowns);
            }
            Monotype::List(element) => element.collect_unknowns(unknowns),
        }
    }

    /// Replace every occurrence of the rigid variable `name` by `replacement`.
    ///
    /// Rigid names live apart from program binders and are fresh per
    /// scheme, so no capture can happen.
    pub fn substitute_var(&self, name: &str, replacement: &Monotype) -> Monotype {
        match self {
            Monotype::Number | Monotype::Boolean | Monotype::Unknown(_) => self.clone(),
            Monotype::Var(v) if v == name => replacement.clone(),
            Monotype::Var(_) => self.clone(),
            Monotype::Function(argument, result) => Monotype::function(
                argument.substitute_var(name, replacement),
                result.substitute_var(name, replacement),
            ),
            Monotype::List(element) => Monotype::list(element.substitute_var(name, replacement)),
        }
    }

    pub fn pretty(&self) -> String {
        match self {
            Monotype::Number => "Number".to_string(),
            Monotype::Boolean => "Boolean".to_string(),
            Monotype::Var(name) => name.clone(),
            Monotype::Unknown(id) => format!("u{}", id),
            Monotype::Function(argument, result) => {
                let argument_str = if matches!(**argument, Monotype::Function(_, _)) {
                    format!("({})", argument.pretty())
                } else {
                    argument.pretty()
                };
                format!("{} -> {}", argument_str, result.pretty())
            }
            Monotype::List(element) => format!("[{}]", element.pretty()),
        }
    }
}

impl fmt::Display for Monotype {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.pretty())
    }
}

/// A type scheme: `∀ vars. ty`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Polytype {
    pub vars: Vec<String>,
    pub ty: Monotype,
}

impl Polytype {
    pub fn monomorphic(ty: Monotype) -> Self {
        Polytype {
            vars: Vec::new(),
            ty,
        }
    }

    pub fn polymorphic(vars: Vec<String>, ty: Monotype) -> Self {
        Polytype { vars, ty }
    }

    pub fn is_monomorphic(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn free_unknowns(&self) -> BTreeSet<usize> {
        self.ty.free_unknowns()
    }

    pub fn pretty(&self) -> String {
        if self.vars.is_empty() {
            self.ty.pretty()
        } else {
            format!("∀ {}. {}", self.vars.join(" "), self.ty.pretty())
        }
    }
}

impl fmt::Display for Polytype {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.pretty())
    }
}
