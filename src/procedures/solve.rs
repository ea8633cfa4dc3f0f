//! Determines the satisfiability of the formula in a context.
//!
//! # Overview
//!
//! [solve](crate::procedures::solve) is the DPLL algorithm: unit propagation, and a case split when propagation is exhausted.
//!
//! - If propagation removes every clause, the formula is satisfiable (on the current valuation).
//! - If propagation finds a conflict, the current case fails, and the most recent case split with an unexplored case is revisited.
//!   If there is no such split, the formula is unsatisfiable.
//! - Otherwise, a literal *l* is [chosen](crate::procedures::branch) and the formula is split into the case where *l* is true and the case where -*l* is true.
//!   The first case is explored, and the second case is explored only if the first fails.
//!
//! Roughly, the loop is as diagrammed:
//!
//! ```none
//!                       +----------------+
//!   +-------------------| split on pivot |
//!   |                   +----------------+
//!   |                           ⌃
//!   |                           | if no unit clause remains
//!   |                           |
//!   ⌄   +------------------+    +------> satisfiable, if no clause remains
//! --+-->| propagate_units  |----+
//!   ⌃   +------------------+    |
//!   |                           | if a conflict is found
//!   |                           ⌄
//!   |               +------------------------+
//!   +---------------| negate the latest open |-----> unsatisfiable, if no open split remains
//!                   | pivot                  |
//!                   +------------------------+
//! ```
//!
//! # Backtracking
//!
//! Case splits are kept on an explicit stack, together with a checkpoint on the [trail](crate::db::trail) taken before the first case.
//! Returning to the second case rewinds the trail to the checkpoint, which restores both the formula and the valuation.
//! So, on a satisfiable formula, the valuation contains only values from the cases which led to the empty formula.
//!
//! # Example
//!
//! ```rust
//! # use dpll_sat::config::Config;
//! # use dpll_sat::context::Context;
//! # use dpll_sat::reports::Report;
//! # use dpll_sat::structures::clause::Clause;
//! let formula = vec![vec![1, 2], vec![-1, -2], vec![1, -2]];
//! let mut the_context = Context::from_clauses(Config::default(), formula.clone()).unwrap();
//!
//! assert_eq!(the_context.solve(), Report::Satisfiable);
//! assert!(formula.iter().all(|clause| clause.satisfied_by(the_context.assignment())));
//!
//! assert!(the_context.add_clause(vec![-1, 2]).is_ok());
//! assert_eq!(the_context.solve(), Report::Unsatisfiable);
//! ```

use crate::{
    context::{ContextState, GenericContext},
    misc::log::targets::{self},
    procedures::propagate::PropagationOk,
    reports::Report,
    structures::literal::{CLiteral, Literal},
};

/// A case split, with the trail checkpoint to return to before exploring the second case.
struct CaseSplit {
    pivot: CLiteral,
    checkpoint: usize,
    negated: bool,
}

impl<R: rand::Rng + rand::SeedableRng> GenericContext<R> {
    /// Determines the satisfiability of the formula.
    ///
    /// Each solve begins from the formula as added, with an empty valuation.
    /// If [reseed](crate::config::Config::reseed) is set, the source of rng is reseeded from the configured seed.
    pub fn solve(&mut self) -> Report {
        let total_time = std::time::Instant::now();

        self.reset();
        if self.config.reseed.value {
            self.rng = R::seed_from_u64(self.config.seed.value);
        }
        self.counters = Default::default();
        self.state = ContextState::Solving;

        let mut splits: Vec<CaseSplit> = Vec::default();

        'solve_loop: loop {
            let conflict = match self.propagate_units() {
                Ok(PropagationOk::Satisfied) => {
                    self.state = ContextState::Satisfiable;
                    break 'solve_loop;
                }

                Ok(PropagationOk::Exhausted) => match self.choose_pivot() {
                    Some(pivot) => {
                        self.counters.decisions += 1;
                        splits.push(CaseSplit {
                            pivot,
                            checkpoint: self.trail.checkpoint(),
                            negated: false,
                        });
                        self.propagate(pivot).is_err()
                    }

                    None => true,
                },

                Err(_) => true,
            };

            if !conflict {
                continue 'solve_loop;
            }

            self.counters.conflicts += 1;

            // Revisit the latest split with an unexplored case.
            'backtrack_loop: loop {
                let Some(split) = splits.pop() else {
                    self.state = ContextState::Unsatisfiable;
                    break 'solve_loop;
                };

                if split.negated {
                    continue 'backtrack_loop;
                }

                self.rewind(split.checkpoint);
                self.counters.backtracks += 1;

                let negation = split.pivot.negate();
                log::trace!(target: targets::BACKTRACK, "Backtrack to {negation} at {}", split.checkpoint);

                splits.push(CaseSplit {
                    pivot: negation,
                    checkpoint: split.checkpoint,
                    negated: true,
                });

                match self.propagate(negation) {
                    Ok(()) => continue 'solve_loop,
                    Err(_) => self.counters.conflicts += 1,
                }
            }
        }

        self.counters.time = total_time.elapsed();
        log::info!(
            "{} after {} decisions, {} conflicts, {} propagations in {:?}",
            self.state,
            self.counters.decisions,
            self.counters.conflicts,
            self.counters.propagations,
            self.counters.time
        );

        self.report()
    }
}
