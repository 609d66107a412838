use std::collections::HashMap;

use super::ty::Monotype;

/// Solved unknowns, filled in by unification.
///
/// An unknown is solved at most once and stays solved until [`Solution::clear`]. The
/// occurs check keeps the graph of solutions acyclic, so following chains in
/// [`Solution::apply`] always terminates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Solution(HashMap<usize, Monotype>);

impl Solution {
    pub fn empty() -> Self {
        Solution(HashMap::new())
    }

    pub fn get(&self, unknown: usize) -> Option<&Monotype> {
        self.0.get(&unknown)
    }

    pub fn contains(&self, unknown: usize) -> bool {
        self.0.contains_key(&unknown)
    }

    pub fn insert(&mut self, unknown: usize, ty: Monotype) {
        self.0.insert(unknown, ty);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Solved unknowns in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Monotype)> {
        let mut entries: Vec<_> = self.0.iter().map(|(id, ty)| (*id, ty)).collect();
        entries.sort_by_key(|(id, _)| *id);
        entries.into_iter()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Resolve every solved unknown in `ty`, following chains of solutions.
    pub fn apply(&self, ty: &Monotype) -> Monotype {
        match ty {
            Monotype::Number | Monotype::Boolean | Monotype::Var(_) => ty.clone(),
            Monotype::Unknown(id) => match self.0.get(id) {
                Some(solved) => self.apply(solved),
                None => ty.clone(),
            },
            Monotype::Function(argument, result) => {
                Monotype::function(self.apply(argument), self.apply(result))
            }
            Monotype::List(element) => Monotype::list(self.apply(element)),
        }
    }
}
