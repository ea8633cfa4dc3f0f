use std::time::Duration;

/// Counts for various things which count, roughly.
#[derive(Clone, Debug, Default)]
pub struct Counters {
    /// A count of all case splits made.
    pub decisions: usize,

    /// A count of every literal propagated, whether forced by a unit clause or chosen for a case split.
    pub propagations: usize,

    /// A count of every conflict seen during a solve.
    pub conflicts: usize,

    /// A count of every return to the second case of some case split.
    pub backtracks: usize,

    /// The time taken during a solve.
    pub time: Duration,
}
