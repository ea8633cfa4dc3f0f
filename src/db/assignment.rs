//! The assignment database.
//!
//! Stores the current valuation, built incrementally as atoms are valued by propagation.
//! Values are only removed by undoing a [Valued](crate::db::trail::Change::Valued) change from the trail.

use crate::{
    misc::log::targets::{self},
    structures::{
        atom::Atom,
        literal::{CLiteral, Literal},
        valuation::{CValuation, Valuation},
    },
};

#[derive(Debug, Default)]
pub struct AssignmentDB {
    valuation: CValuation,
}

impl AssignmentDB {
    /// Values the atom of `literal` with the polarity of `literal`.
    pub fn set(&mut self, literal: CLiteral) {
        log::trace!(target: targets::VALUATION, "{} := {}", literal.atom(), literal.polarity());
        self.valuation.insert(literal.atom(), literal.polarity());
    }

    /// Removes any value of `atom`.
    pub fn clear(&mut self, atom: Atom) {
        log::trace!(target: targets::VALUATION, "{atom} cleared");
        self.valuation.remove(&atom);
    }

    pub fn value_of(&self, atom: Atom) -> Option<bool> {
        self.valuation.value_of(atom)
    }

    pub fn valuation(&self) -> &CValuation {
        &self.valuation
    }

    /// The valuation as a string of literals, separated by a space, in ascending atom order.
    pub fn valuation_string(&self) -> String {
        self.valuation
            .valued_atoms()
            .map(|(atom, value)| CLiteral::new(atom, value).to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn is_empty(&self) -> bool {
        self.valuation.is_empty()
    }
}
