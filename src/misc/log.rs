/*!
Miscellaneous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information for extending the library and/or fixing issues.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [propagation](crate::procedures::propagate)
    pub const PROPAGATION: &str = "propagation";

    /// Logs related to [branching](crate::procedures::branch)
    pub const BRANCH: &str = "branch";

    /// Logs related to backtracking during a [solve](crate::procedures::solve)
    pub const BACKTRACK: &str = "backtrack";

    /// Logs related to the [assignment database](crate::db::assignment)
    pub const VALUATION: &str = "valuation";

    /// Logs related to the [clause database](crate::db::clause)
    pub const CLAUSE_DB: &str = "clause_db";

    /// Logs related to reading a formula
    pub const PARSER: &str = "parser";
}
