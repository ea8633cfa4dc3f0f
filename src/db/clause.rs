/*!
The clause database.

The formula of a context, stored as an ordered sequence of [clauses](crate::structures::clause).

During a solve the formula is revised in place:
- [Propagation](ClauseDB::propagate) removes satisfied clauses and strips falsified literals.
- [Sorting](ClauseDB::sort_by_size) reorders clauses ahead of a case split.

Each revision is recorded to a [trail](crate::db::trail), and may be [undone](ClauseDB::undo).

# Example

```rust
# use dpll_sat::db::{clause::ClauseDB, trail::Trail};
let mut clause_db = ClauseDB::default();
clause_db.store(vec![1, 2]);
clause_db.store(vec![-1]);

assert_eq!(clause_db.unit_literal(), Some(-1));

let mut trail = Trail::default();
assert!(clause_db.propagate(-1, &mut trail).is_ok());
assert_eq!(clause_db.to_string(), "2\n");

while let Some(change) = trail.pop() {
    clause_db.undo(change);
}
assert_eq!(clause_db.to_string(), "1 2\n-1\n");
```
*/

use std::io::Write;

use crate::{
    db::trail::{Change, Trail},
    misc::log::targets::{self},
    structures::{
        atom::Atom,
        clause::{CClause, Clause},
        literal::{CLiteral, Literal},
    },
    types::err::{self},
};

#[derive(Clone, Debug, Default)]
pub struct ClauseDB {
    clauses: Vec<CClause>,
}

impl ClauseDB {
    /// Appends a clause to the database, as given.
    pub fn store(&mut self, clause: CClause) {
        log::trace!(target: targets::CLAUSE_DB, "Stored: {}", clause.as_string());
        self.clauses.push(clause);
    }

    /// The clauses of the database, in order.
    pub fn clauses(&self) -> &[CClause] {
        &self.clauses
    }

    pub fn count(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// The greatest atom in some clause of the database, or zero if the database contains no literal.
    pub fn max_atom(&self) -> Atom {
        self.clauses
            .iter()
            .flat_map(|clause| clause.atoms())
            .max()
            .unwrap_or(0)
    }

    /// The position of the first clause which contains exactly one literal, if one exists.
    pub fn unit_clause(&self) -> Option<usize> {
        self.clauses.iter().position(|clause| clause.size() == 1)
    }

    /// The literal of the first unit clause, if one exists.
    pub fn unit_literal(&self) -> Option<CLiteral> {
        self.unit_clause().map(|index| self.clauses[index][0])
    }

    /// Whether `literal` is a unit clause of the database.
    pub fn has_unit(&self, literal: CLiteral) -> bool {
        self.clauses
            .iter()
            .any(|clause| clause.as_slice() == [literal])
    }

    /// Whether the database contains the empty clause.
    pub fn has_empty_clause(&self) -> bool {
        self.clauses.iter().any(|clause| clause.is_empty())
    }

    /// The first clause of the database with the fewest literals, if the database is not empty.
    pub fn shortest(&self) -> Option<&CClause> {
        self.clauses.iter().min_by_key(|clause| clause.size())
    }

    /// Revises the database on the assumption `literal` is true:
    /// - Each clause containing `literal` is satisfied, and so removed.
    /// - Each occurrence of the negation of `literal` is false, and so removed from its clause.
    ///
    /// Each revision is recorded to `trail`.
    ///
    /// Returns a conflict if some clause was emptied.
    /// In this case, the database is still fully revised.
    pub fn propagate(
        &mut self,
        literal: CLiteral,
        trail: &mut Trail,
    ) -> Result<(), err::PropagationError> {
        let mut removed = Vec::default();
        let mut kept = Vec::with_capacity(self.clauses.len());

        for (index, clause) in std::mem::take(&mut self.clauses).into_iter().enumerate() {
            match clause.contains(&literal) {
                true => removed.push((index, clause)),
                false => kept.push(clause),
            }
        }
        self.clauses = kept;

        if !removed.is_empty() {
            log::trace!(target: targets::CLAUSE_DB, "{literal} satisfied {} clauses", removed.len());
            trail.push(Change::Removed(removed));
        }

        let negation = literal.negate();
        let mut stripped = Vec::default();
        let mut emptied = false;

        for (index, clause) in self.clauses.iter_mut().enumerate() {
            let positions = clause
                .iter()
                .enumerate()
                .filter(|(_, l)| **l == negation)
                .map(|(position, _)| position)
                .collect::<Vec<_>>();

            if !positions.is_empty() {
                clause.retain(|l| *l != negation);
                emptied |= clause.is_empty();
                stripped.push((index, positions));
            }
        }

        if !stripped.is_empty() {
            log::trace!(target: targets::CLAUSE_DB, "{negation} stripped from {} clauses", stripped.len());
            trail.push(Change::Stripped {
                literal: negation,
                from: stripped,
            });
        }

        match emptied {
            true => Err(err::PropagationError::Conflict),
            false => Ok(()),
        }
    }

    /// Sorts the clauses of the database by ascending size, keeping the relative order of clauses of equal size.
    ///
    /// The reordering is recorded to `trail`, unless the order is unchanged.
    pub fn sort_by_size(&mut self, trail: &mut Trail) {
        let mut order = (0..self.clauses.len()).collect::<Vec<_>>();
        order.sort_by_key(|index| self.clauses[*index].size());

        if order.iter().enumerate().all(|(position, index)| position == *index) {
            return;
        }

        let mut previous = std::mem::take(&mut self.clauses)
            .into_iter()
            .map(Some)
            .collect::<Vec<_>>();
        self.clauses = order
            .iter()
            .filter_map(|index| previous[*index].take())
            .collect();

        trail.push(Change::Reordered(order));
    }

    /// Undoes a change to the database.
    ///
    /// Changes must be undone in the reverse order of their recording.
    /// Changes to the valuation are ignored.
    pub fn undo(&mut self, change: Change) {
        match change {
            Change::Removed(removed) => {
                for (index, clause) in removed {
                    self.clauses.insert(index, clause);
                }
            }

            Change::Stripped { literal, from } => {
                for (index, positions) in from {
                    let clause = &mut self.clauses[index];
                    for position in positions {
                        clause.insert(position, literal);
                    }
                }
            }

            Change::Reordered(order) => {
                let mut restored = vec![CClause::default(); order.len()];
                for (clause, index) in std::mem::take(&mut self.clauses).into_iter().zip(order) {
                    restored[index] = clause;
                }
                self.clauses = restored;
            }

            Change::Valued(_) => {}
        }
    }

    /// Writes the database in DIMACS form, with a problem specification derived from the current clauses.
    ///
    /// Unlike the [Display] implementation, the output may be read back into a context.
    pub fn write_dimacs(&self, mut writer: impl Write) -> std::io::Result<()> {
        writeln!(writer, "p cnf {} {}", self.max_atom(), self.count())?;
        for clause in &self.clauses {
            writeln!(writer, "{}", clause.as_dimacs(true))?;
        }
        Ok(())
    }
}

/// One line per clause, with literals separated by a space.
///
/// There is no problem specification and no clause terminator, so this is not DIMACS.
impl std::fmt::Display for ClauseDB {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for clause in &self.clauses {
            writeln!(f, "{}", clause.as_string())?;
        }
        Ok(())
    }
}
