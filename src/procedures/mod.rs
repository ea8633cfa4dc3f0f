//! Procedures which make up a solve.
//!
//! - [propagate] applies a literal to the formula, and applies unit clauses until none remain.
//! - [branch] chooses the literal of a case split.
//! - [solve] coordinates the above, backtracking on conflict.

pub mod branch;
pub mod propagate;
pub mod solve;
