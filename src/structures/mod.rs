//! Key structures, such as literals and clauses.
//!
//! Literals and clauses are each made of a trait capturing the key features of the structure and a 'canonical' implementation of the trait.
//!
//! ## Formulas
//!
//! A formula is a sequence of [clauses](clause), interpreted as the conjunction of those clauses.
//! The formula of a [context](crate::context) is held in the [clause database](crate::db::clause).
//!
//! Order is not significant to the meaning of a formula, though it is visible to a solve.
//! For example, the first unit clause found is the first to be propagated.

pub mod atom;
pub mod clause;
pub mod literal;
pub mod valuation;
