//! Error types used in the library.
//!
//! - Parse and build errors are external, and are returned when reading or adding to a formula.
//! - Propagation errors are internal, and are used to control the flow of a solve, so have no [ErrorKind].
//!
//! Names of the error enums overlap with corresponding structs and procedures.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

/// The general error type, wrapping specific errors.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Build(BuildError),
    Parse(ParseError),
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Build(e) => write!(f, "Build error: {e:?}"),
            Self::Parse(e) => write!(f, "Parse error: {e}"),
        }
    }
}

impl std::error::Error for ErrorKind {}

/// Noted errors when adding a clause to a context.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BuildError {
    /// A clause contained `0`, which is not a literal.
    ZeroLiteral,

    /// A clause contained a literal whose atom exceeds [ATOM_MAX](crate::structures::atom::ATOM_MAX).
    AtomLimit,
}

impl From<BuildError> for ErrorKind {
    fn from(e: BuildError) -> Self {
        ErrorKind::Build(e)
    }
}

/// Errors during parsing.
///
/// Line numbers count from one.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// No file was found, or the file could not be opened.
    NoFile,

    /// Some issue reading from the source, at a specific line.
    Line(usize),

    /// Some issue with the problem specification in a DIMACS input.
    ProblemSpecification,

    /// A clause was read before any problem specification.
    ///
    /// That is, the first line which is not a comment begins with an integer.
    MissingProblem(usize),

    /// A token which is not an integer was read as a literal, at a specific line.
    Literal(usize),

    /// A literal whose atom exceeds the declared atom count, or the greatest atom supported, at a specific line.
    AtomOutOfRange(usize),

    /// The final clause of the input was not terminated by `0`.
    Unterminated,

    /// The number of clauses read differs from the number declared.
    ClauseCount { expected: usize, found: usize },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoFile => write!(f, "the source could not be opened"),
            Self::Line(line) => write!(f, "failed to read line {line}"),
            Self::ProblemSpecification => write!(f, "malformed problem specification"),
            Self::MissingProblem(line) => {
                write!(f, "clause at line {line} precedes the problem specification")
            }
            Self::Literal(line) => write!(f, "invalid literal at line {line}"),
            Self::AtomOutOfRange(line) => {
                write!(f, "literal at line {line} exceeds the declared atom count")
            }
            Self::Unterminated => write!(f, "the final clause is not terminated by 0"),
            Self::ClauseCount { expected, found } => {
                write!(f, "expected {expected} clauses, found {found}")
            }
        }
    }
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

/// Noted errors during propagation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PropagationError {
    /// A conflict was found.
    /// This is expected from time to time, and leads to a backtrack.
    Conflict,
}
