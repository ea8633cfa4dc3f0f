use crate::{
    config::Config,
    db::{
        assignment::AssignmentDB,
        clause::ClauseDB,
        trail::{Change, Trail},
    },
    reports::Report,
    structures::{atom::Atom, valuation::CValuation},
};

use super::{ContextState, Counters, FormulaMetadata};

/// A generic context, parameterised to a source of randomness.
///
/// Requires a source of [rng](rand::Rng) which (also) implements [SeedableRng](rand::SeedableRng), so the source may be reseeded at the start of a solve.
///
/// # Example
///
/// ```rust
/// # use dpll_sat::context::GenericContext;
/// # use dpll_sat::generic::random::MinimalPCG32;
/// # use dpll_sat::config::Config;
/// # use rand::SeedableRng;
/// let mut config = Config::default();
/// config.reseed.value = false;
///
/// let context = GenericContext::from_config_and_rng(config, MinimalPCG32::seed_from_u64(11));
/// ```
pub struct GenericContext<R: rand::Rng + rand::SeedableRng> {
    /// The configuration of a context.
    pub config: Config,

    /// Counters related to a solve.
    pub counters: Counters,

    /// The clause database.
    /// See [db::clause](crate::db::clause) for details.
    pub clause_db: ClauseDB,

    /// The assignment database.
    /// See [db::assignment](crate::db::assignment) for details.
    pub assignment_db: AssignmentDB,

    /// Changes made to the databases since the formula was added.
    pub(crate) trail: Trail,

    /// Counts declared by the source of the formula.
    pub(crate) metadata: FormulaMetadata,

    /// The status of the context.
    pub state: ContextState,

    /// The source of rng.
    pub rng: R,
}

impl<R: rand::Rng + rand::SeedableRng> GenericContext<R> {
    /// Creates a context from some given configuration and source of rng.
    pub fn from_config_and_rng(config: Config, rng: R) -> Self {
        Self {
            config,
            counters: Counters::default(),
            clause_db: ClauseDB::default(),
            assignment_db: AssignmentDB::default(),
            trail: Trail::default(),
            metadata: FormulaMetadata::default(),
            state: ContextState::Input,
            rng,
        }
    }

    /// A report on the state of the context.
    pub fn report(&self) -> Report {
        Report::from(&self.state)
    }

    /// The counts of atoms and clauses declared by the source of the formula.
    pub fn metadata(&self) -> FormulaMetadata {
        self.metadata
    }

    /// The current valuation.
    ///
    /// After a satisfiable solve this is a model of the formula, though atoms whose value does not matter may be absent.
    pub fn assignment(&self) -> &CValuation {
        self.assignment_db.valuation()
    }

    /// The value of `atom` on the current valuation, if any.
    pub fn value_of(&self, atom: Atom) -> Option<bool> {
        self.assignment_db.value_of(atom)
    }

    /// The current valuation, as a string of literals.
    pub fn valuation_string(&self) -> String {
        self.assignment_db.valuation_string()
    }

    /// Undoes every change on the trail made after `checkpoint`.
    pub(crate) fn rewind(&mut self, checkpoint: usize) {
        while self.trail.len() > checkpoint {
            match self.trail.pop() {
                Some(Change::Valued(atom)) => self.assignment_db.clear(atom),
                Some(change) => self.clause_db.undo(change),
                None => break,
            }
        }
    }

    /// Restores the formula as added to the context and clears the valuation.
    pub fn reset(&mut self) {
        self.rewind(0);
        self.state = ContextState::Input;
    }
}
