/*!
Tools for building a context.

# Basic methods

A formula may be added to a context:
- Clause by clause, with [add_clause](crate::context::GenericContext::add_clause).
- All at once, from a collection of clauses, with [from_clauses](crate::context::Context::from_clauses).
- From the DIMACS representation of a formula, with [read_dimacs](crate::context::GenericContext::read_dimacs) or [from_dimacs_path](crate::context::Context::from_dimacs_path).

Clauses are added as given.
In particular, duplicate literals are kept and tautologies are not skipped.

# Examples

```rust
# use dpll_sat::context::Context;
# use dpll_sat::config::Config;
# use dpll_sat::reports::Report;
let mut the_context = Context::from_clauses(Config::default(), vec![vec![1, -2], vec![-1, 2]]).unwrap();

assert_eq!(the_context.metadata().atoms, 2);
assert_eq!(the_context.metadata().clauses, 2);
assert_eq!(the_context.solve(), Report::Satisfiable);
```
*/

mod dimacs;
pub use dimacs::ParserInfo;

use crate::{
    config::Config,
    context::{Context, ContextState, FormulaMetadata, GenericContext},
    structures::{
        atom::ATOM_MAX,
        clause::Clause,
        literal::Literal,
    },
    types::err::{self},
};

impl<R: rand::Rng + rand::SeedableRng> GenericContext<R> {
    /// Adds a clause to the context, as given.
    ///
    /// If some solve has taken place, the formula is first restored to the formula as added.
    ///
    /// Metadata of the context is unchanged.
    ///
    /// ```rust
    /// # use dpll_sat::context::Context;
    /// # use dpll_sat::config::Config;
    /// # use dpll_sat::types::err::{BuildError, ErrorKind};
    /// let mut the_context = Context::from_config(Config::default());
    ///
    /// assert!(the_context.add_clause(vec![1, -2, 1]).is_ok());
    /// assert_eq!(the_context.add_clause(vec![3, 0]), Err(ErrorKind::Build(BuildError::ZeroLiteral)));
    /// assert_eq!(the_context.add_clause(vec![i32::MIN]), Err(ErrorKind::Build(BuildError::AtomLimit)));
    /// assert_eq!(the_context.clause_db.count(), 1);
    /// ```
    pub fn add_clause(&mut self, clause: impl Clause) -> Result<(), err::ErrorKind> {
        let clause = clause.canonical();
        if clause.contains(&0) {
            return Err(err::ErrorKind::from(err::BuildError::ZeroLiteral));
        }
        if clause.iter().any(|literal| literal.atom() > ATOM_MAX) {
            return Err(err::ErrorKind::from(err::BuildError::AtomLimit));
        }

        if self.state != ContextState::Input {
            self.reset();
        }

        self.clause_db.store(clause);
        Ok(())
    }
}

impl Context {
    /// Creates a context whose formula is the given collection of clauses.
    ///
    /// The atom count of the metadata is the size of the first clause, or zero if there are no clauses.
    /// This is not the count of atoms in the formula.
    pub fn from_clauses(config: Config, clauses: Vec<Vec<i32>>) -> Result<Self, err::ErrorKind> {
        let mut the_context = Self::from_config(config);

        let metadata = FormulaMetadata {
            atoms: clauses.first().map_or(0, |clause| clause.len()),
            clauses: clauses.len(),
        };

        for clause in clauses {
            the_context.add_clause(clause)?;
        }
        the_context.metadata = metadata;

        Ok(the_context)
    }
}
