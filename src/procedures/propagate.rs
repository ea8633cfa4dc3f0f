/*!
Propagation of literals through the formula.

# Overview

To propagate a literal *l* is to assume *l* is true, and to revise the formula accordingly:
- Each clause containing *l* is true, and so is removed.
- Each occurrence of -*l* is false, and so is removed from its clause.
- The atom of *l* is valued with the polarity of *l*.

Unit propagation repeats this for the literal of each unit clause, until no unit clause remains.

```rust,ignore
while let Some(literal) = self.clause_db.unit_literal() {
    if self.clause_db.has_unit(-literal) {
        return Err(Conflict);
    }
    self.propagate(literal)?;
}
```

# Conflicts

There are two ways in which a formula may be found to be unsatisfiable during propagation:
- Both *l* and -*l* are unit clauses.
- Some clause is empty, either from the formula as given, or as each literal of the clause has been removed.

The second case covers the first, after *l* is propagated.
Still, the first is checked ahead of propagation, as this avoids revising the formula.
*/

use crate::{
    context::GenericContext,
    db::trail::Change,
    misc::log::targets::{self},
    structures::literal::{CLiteral, Literal},
    types::err::{self},
};

/// Possible 'Ok' results from unit propagation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PropagationOk {
    /// No clause remains, so the formula is satisfied on the current valuation.
    Satisfied,

    /// Some clause remains, though no clause is unit.
    Exhausted,
}

impl<R: rand::Rng + rand::SeedableRng> GenericContext<R> {
    /// Propagates `literal` through the formula, and values the atom of `literal`.
    ///
    /// Returns a conflict if some clause was emptied.
    pub fn propagate(&mut self, literal: CLiteral) -> Result<(), err::PropagationError> {
        log::trace!(target: targets::PROPAGATION, "Propagating {literal}");
        self.counters.propagations += 1;

        let result = self.clause_db.propagate(literal, &mut self.trail);

        self.assignment_db.set(literal);
        self.trail.push(Change::Valued(literal.atom()));

        result
    }

    /// Propagates unit clauses until either no unit clause remains, or a conflict is found.
    pub fn propagate_units(&mut self) -> Result<PropagationOk, err::PropagationError> {
        if self.clause_db.is_empty() {
            return Ok(PropagationOk::Satisfied);
        }

        if self.clause_db.has_empty_clause() {
            log::trace!(target: targets::PROPAGATION, "Empty clause");
            return Err(err::PropagationError::Conflict);
        }

        while let Some(literal) = self.clause_db.unit_literal() {
            if self.clause_db.has_unit(literal.negate()) {
                log::trace!(target: targets::PROPAGATION, "Complementary units on {}", literal.atom());
                return Err(err::PropagationError::Conflict);
            }

            self.propagate(literal)?;
        }

        match self.clause_db.is_empty() {
            true => Ok(PropagationOk::Satisfied),
            false => Ok(PropagationOk::Exhausted),
        }
    }
}
