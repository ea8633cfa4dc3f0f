/*!
The context --- to which formulas are added and within which solves take place, etc.

Strictly, a [GenericContext] and a [Context].

The generic context is generic over the source of randomness, which is used only to choose the literal of a case split.
[from_config](Context::from_config) is implemented for a context rather than a generic context to avoid requiring a source of randomness to be supplied alongside a config.

# Example
```rust
# use dpll_sat::context::Context;
# use dpll_sat::config::Config;
# use dpll_sat::reports::Report;
let mut the_context = Context::from_config(Config::default());

assert!(the_context.add_clause(vec![1, 2]).is_ok());
assert!(the_context.add_clause(-1).is_ok());

assert_eq!(the_context.solve(), Report::Satisfiable);

assert_eq!(the_context.value_of(1), Some(false));
assert_eq!(the_context.value_of(2), Some(true));
```
*/

mod counters;
pub use counters::Counters;
mod generic;
pub use generic::GenericContext;
mod specific;
pub use specific::Context;

/// The state of a context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContextState {
    /// The context allows input.
    Input,

    /// The consistency of the formula is unknown.
    Solving,

    /// The formula is known to be satisfiable, on the valuation of the context.
    Satisfiable,

    /// The formula is known to be unsatisfiable.
    Unsatisfiable,
}

impl std::fmt::Display for ContextState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Input => write!(f, "Input"),
            Self::Solving => write!(f, "Solving"),
            Self::Satisfiable => write!(f, "Satisfiable"),
            Self::Unsatisfiable => write!(f, "Unsatisfiable"),
        }
    }
}

/// Counts of atoms and clauses, as declared by the source of a formula.
///
/// The counts are not revised as the formula is revised.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FormulaMetadata {
    pub atoms: usize,
    pub clauses: usize,
}
