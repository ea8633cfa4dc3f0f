//! A library for determining the satisfiability of boolean formulas written in conjunctive normal form.
//!
//! dpll_sat decides satisfiability through the DPLL algorithm: unit propagation to a fixpoint, and a case split on a literal of a shortest clause when propagation is exhausted.
//! If the formula is satisfiable, a (partial) valuation on which the formula is true is available after the solve.
//!
//! # Orientation
//!
//! The library is designed around the core structure of a [context].
//!
//! Contexts are built with a [configuration](crate::config).
//! Clauses may be added though the [DIMACS](crate::context::GenericContext::read_dimacs) representation of a formula or [programatically](crate::context::GenericContext::add_clause).
//!
//! Internally, a solve is viewed in terms of revisions to a pair of databases:
//! - A formula is stored in a [clause database](crate::db::clause).
//! - A valuation is stored in an [assignment database](crate::db::assignment).
//!
//! Every revision is logged to a [trail](crate::db::trail), so that a revision made while exploring one case of a split may be undone before exploring the other case.
//!
//! Useful starting points, then, may be:
//! - The high-level [solve procedure](crate::procedures::solve) to inspect the dynamics of a solve.
//! - The [database module](crate::db) to inspect the data considered during a solve.
//! - The [structures] to familiarise yourself with the abstract elements of a solve and their representation (formulas, clauses, etc.)
//!
//! # Examples
//!
//! + Solve a formula given as a collection of clauses.
//!
//! ```rust
//! # use dpll_sat::config::Config;
//! # use dpll_sat::context::Context;
//! # use dpll_sat::reports::Report;
//! let mut the_context = Context::from_clauses(Config::default(), vec![vec![1, 2], vec![-1]]).unwrap();
//!
//! assert_eq!(the_context.solve(), Report::Satisfiable);
//! assert_eq!(the_context.valuation_string(), "-1 2");
//! ```
//!
//! + Parse and solve a DIMACS formula.
//!
//! ```rust
//! # use dpll_sat::context::Context;
//! # use dpll_sat::config::Config;
//! # use dpll_sat::reports::Report;
//! let mut the_context = Context::from_config(Config::default());
//!
//! let dimacs = b"
//! p cnf 1 2
//!  1 0
//! -1 0
//! ";
//!
//! assert!(the_context.read_dimacs(dimacs.as_slice()).is_ok());
//! assert_eq!(the_context.solve(), Report::Unsatisfiable);
//! ```
//!
//! # Logs
//!
//! To help diagnose issues calls to [log!](log) are made, and a variety of targets are defined in order to help narrow output to relevant parts of the library.
//!
//! The targets are listed in [misc::log].
//!
//! For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/):
//! - Logs related to [the clause database](crate::db::clause) can be filtered with `RUST_LOG=clause_db …` or,
//! - Logs of case splits can be found with `RUST_LOG=branch=trace …`

pub mod builder;
pub mod procedures;

pub mod config;
pub mod context;
pub mod reports;
pub mod structures;
pub mod types;

pub mod generic;

pub mod db;

pub mod misc;
