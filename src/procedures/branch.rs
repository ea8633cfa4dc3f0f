/*!
Methods for choosing the literal of a case split.

The formula is sorted by ascending clause size and a literal is chosen at random from the (first) shortest clause.

Choosing from a shortest clause makes it more likely that either case of the split leads to a unit clause, and so to further propagation or an early conflict.

Randomness affects only which valuation is found, and not whether the formula is found to be satisfiable.
*/

use crate::{
    context::GenericContext,
    misc::log::targets::{self},
    structures::{clause::Clause, literal::CLiteral},
};

impl<R: rand::Rng + rand::SeedableRng> GenericContext<R> {
    /// Sorts the formula and returns a literal chosen at random from the first clause.
    ///
    /// Returns None if the formula is empty, or the first clause is empty.
    pub fn choose_pivot(&mut self) -> Option<CLiteral> {
        self.clause_db.sort_by_size(&mut self.trail);

        let shortest = self.clause_db.clauses().first()?;
        if shortest.size() == 0 {
            return None;
        }

        let pivot = shortest[self.rng.random_range(0..shortest.size())];
        log::trace!(target: targets::BRANCH, "Pivot {pivot} from {}", shortest.as_string());

        Some(pivot)
    }
}
