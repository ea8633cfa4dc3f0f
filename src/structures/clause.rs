//! Clauses, aka. a collection of literals, interpreted as the disjunction of those literals.
//!
//! The canonical representation of a clause is as a vector of literals.
//! Literals are kept in the order given, and duplicate literals are kept.
//!
//! ```rust
//! # use dpll_sat::structures::clause::{CClause, Clause};
//! # use dpll_sat::structures::valuation::CValuation;
//! let clause: CClause = vec![23, -41, -3];
//!
//! assert_eq!(clause.size(), 3);
//! assert_eq!(clause.as_dimacs(true), "23 -41 -3 0");
//!
//! let mut valuation = CValuation::default();
//! valuation.insert(23, false);
//! assert!(!clause.satisfied_by(&valuation));
//!
//! valuation.insert(3, false);
//! assert!(clause.satisfied_by(&valuation));
//! ```
//!
//! - The empty clause is always false (never true).
//! - A clause with a single literal is a 'unit' clause, which forces the value of the atom of the literal.

use crate::structures::{
    atom::Atom,
    literal::{CLiteral, Literal},
    valuation::Valuation,
};

/// The clause trait.
pub trait Clause {
    /// A string of the literals of the clause, separated by a space.
    fn as_string(&self) -> String;

    /// A string of the clause in DIMACS form, with the terminating `0` as optional.
    fn as_dimacs(&self, zero: bool) -> String;

    /// An iterator over all literals in the clause, in order.
    fn literals(&self) -> impl Iterator<Item = CLiteral>;

    /// The number of literals in the clause, counting duplicates.
    fn size(&self) -> usize;

    /// An iterator over all atoms in the clause, in order.
    fn atoms(&self) -> impl Iterator<Item = Atom>;

    /// Whether some literal of the clause is true on the given valuation.
    ///
    /// Atoms without a value do not satisfy a clause.
    fn satisfied_by(&self, valuation: &(impl Valuation + ?Sized)) -> bool;

    /// The clause in its canonical form.
    fn canonical(self) -> CClause;
}

/// The implementation of a clause as a vector of literals.
pub type CClause = Vec<CLiteral>;

impl Clause for CClause {
    fn as_string(&self) -> String {
        self.literals()
            .map(|literal| literal.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn as_dimacs(&self, zero: bool) -> String {
        let mut dimacs_string = self.as_string();
        if zero {
            if !dimacs_string.is_empty() {
                dimacs_string.push(' ');
            }
            dimacs_string.push('0');
        }
        dimacs_string
    }

    fn literals(&self) -> impl Iterator<Item = CLiteral> {
        self.iter().copied()
    }

    fn size(&self) -> usize {
        self.len()
    }

    fn atoms(&self) -> impl Iterator<Item = Atom> {
        self.iter().map(|literal| literal.atom())
    }

    fn satisfied_by(&self, valuation: &(impl Valuation + ?Sized)) -> bool {
        self.literals()
            .any(|literal| valuation.value_of(literal.atom()) == Some(literal.polarity()))
    }

    fn canonical(self) -> CClause {
        self
    }
}

impl Clause for CLiteral {
    fn as_string(&self) -> String {
        self.to_string()
    }

    fn as_dimacs(&self, zero: bool) -> String {
        match zero {
            true => format!("{self} 0"),
            false => self.to_string(),
        }
    }

    fn literals(&self) -> impl Iterator<Item = CLiteral> {
        std::iter::once(*self)
    }

    fn size(&self) -> usize {
        1
    }

    fn atoms(&self) -> impl Iterator<Item = Atom> {
        std::iter::once(self.atom())
    }

    fn satisfied_by(&self, valuation: &(impl Valuation + ?Sized)) -> bool {
        valuation.value_of(self.atom()) == Some(self.polarity())
    }

    fn canonical(self) -> CClause {
        vec![self]
    }
}
