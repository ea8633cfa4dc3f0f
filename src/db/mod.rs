//! Databases for holding information relevant to a solve.
//!
//! - [The clause database](crate::db::clause)
//!   + The current formula, as an ordered sequence of clauses.
//!     Before a solve this is the formula given to the context, and during a solve the formula is revised by propagation.
//! - [The assignment database](crate::db::assignment)
//!   + The current (partial) valuation of atoms.
//! - [The trail](crate::db::trail)
//!   + A log of every change made to the clause or assignment database during a solve, used to undo those changes when backtracking.

pub mod assignment;
pub mod clause;
pub mod trail;
