use crate::{
    config::Config,
    context::{Context, FormulaMetadata, GenericContext},
    db::clause::ClauseDB,
    misc::log::targets::{self},
    structures::{atom::ATOM_MAX, clause::CClause, literal::Literal},
    types::err::{self},
};

use std::{fs::File, io::BufRead, path::Path};

/// Information about a formula read from a DIMACS source.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParserInfo {
    /// The count of atoms declared in the problem specification.
    pub expected_atoms: usize,

    /// The count of clauses declared in the problem specification.
    pub expected_clauses: usize,

    /// The count of clauses read.
    pub added_clauses: usize,
}

/// Parses a count from the problem specification.
fn problem_count(token: Option<&str>) -> Result<usize, err::ParseError> {
    match token.map(|string| string.parse::<usize>()) {
        Some(Ok(count)) => Ok(count),
        _ => Err(err::ParseError::ProblemSpecification),
    }
}

impl<R: rand::Rng + rand::SeedableRng> GenericContext<R> {
    /// Reads a DIMACS formula into the context, replacing any formula present.
    ///
    /// The input is:
    /// - Optional comment lines, beginning with `c`.
    /// - A problem specification of two tags, conventionally `p cnf`, followed by a count of atoms and a count of clauses.
    ///   The tags are not validated, though the first must not be an integer.
    /// - Clauses, as literals separated by whitespace with `0` marking the end of a clause.
    ///   A clause may span multiple lines.
    ///   A line beginning with `%` marks the end of the formula.
    ///
    /// On error, the context is unchanged.
    ///
    /// ```rust
    /// # use dpll_sat::context::Context;
    /// # use dpll_sat::config::Config;
    /// # use dpll_sat::reports::Report;
    /// # use std::io::Write;
    /// let mut the_context = Context::from_config(Config::default());
    ///
    /// let mut dimacs = vec![];
    /// let _ = dimacs.write(b"
    /// c Every valuation of two atoms falsifies some clause.
    /// p cnf 2 4
    ///  1  2 0
    /// -1  2 0
    /// -1 -2 0
    ///  1 -2 0
    /// ");
    ///
    /// let info = the_context.read_dimacs(dimacs.as_slice()).unwrap();
    /// assert_eq!(info.added_clauses, 4);
    /// assert_eq!(the_context.solve(), Report::Unsatisfiable);
    /// ```
    pub fn read_dimacs(&mut self, mut reader: impl BufRead) -> Result<ParserInfo, err::ErrorKind> {
        let mut buffer = String::with_capacity(1024);
        let mut line_counter = 0;

        // first phase, read until the problem specification
        let (expected_atoms, expected_clauses) = loop {
            buffer.clear();
            match reader.read_line(&mut buffer) {
                Ok(0) => return Err(err::ErrorKind::from(err::ParseError::ProblemSpecification)),
                Ok(_) => line_counter += 1,
                Err(_) => return Err(err::ErrorKind::from(err::ParseError::Line(line_counter + 1))),
            }

            let mut tokens = buffer.split_whitespace();
            match tokens.next() {
                None => continue,
                Some(token) if token.starts_with('c') => continue,

                Some(token) if token.parse::<i32>().is_ok() => {
                    return Err(err::ErrorKind::from(err::ParseError::MissingProblem(
                        line_counter,
                    )))
                }

                Some(_) => {
                    // The second tag is skipped.
                    tokens.next();
                    let atoms = problem_count(tokens.next())?;
                    let clauses = problem_count(tokens.next())?;
                    if tokens.next().is_some() {
                        return Err(err::ErrorKind::from(err::ParseError::ProblemSpecification));
                    }
                    break (atoms, clauses);
                }
            }
        };

        log::info!(target: targets::PARSER, "Expected {expected_atoms} atoms and {expected_clauses} clauses");

        let mut clauses: Vec<CClause> = Vec::with_capacity(expected_clauses);
        let mut clause_buffer = CClause::default();

        // second phase, read until the formula ends
        'formula_loop: loop {
            buffer.clear();
            match reader.read_line(&mut buffer) {
                Ok(0) => break,
                Ok(_) => line_counter += 1,
                Err(_) => return Err(err::ErrorKind::from(err::ParseError::Line(line_counter + 1))),
            }

            match buffer.trim_start().chars().next() {
                Some('%') => break 'formula_loop,
                Some('c') => continue,
                _ => {}
            }

            for item in buffer.split_whitespace() {
                let literal = match item.parse::<i32>() {
                    Ok(int) => int,
                    Err(_) => {
                        return Err(err::ErrorKind::from(err::ParseError::Literal(line_counter)))
                    }
                };

                match literal {
                    0 => clauses.push(std::mem::take(&mut clause_buffer)),

                    _ if literal.atom() > ATOM_MAX || literal.atom() as usize > expected_atoms => {
                        return Err(err::ErrorKind::from(err::ParseError::AtomOutOfRange(
                            line_counter,
                        )))
                    }

                    _ => clause_buffer.push(literal),
                }
            }
        }

        if !clause_buffer.is_empty() {
            return Err(err::ErrorKind::from(err::ParseError::Unterminated));
        }

        if clauses.len() != expected_clauses {
            return Err(err::ErrorKind::from(err::ParseError::ClauseCount {
                expected: expected_clauses,
                found: clauses.len(),
            }));
        }

        let info = ParserInfo {
            expected_atoms,
            expected_clauses,
            added_clauses: clauses.len(),
        };

        self.reset();
        self.clause_db = ClauseDB::default();
        for clause in clauses {
            self.add_clause(clause)?;
        }
        self.metadata = FormulaMetadata {
            atoms: expected_atoms,
            clauses: expected_clauses,
        };

        log::info!(target: targets::PARSER, "Read {} clauses", info.added_clauses);

        Ok(info)
    }

    /// Reads the DIMACS file at `path` into the context, replacing any formula present.
    ///
    /// If the `xz` feature is enabled, a file with an `xz` extension is decompressed.
    pub fn read_dimacs_path(&mut self, path: impl AsRef<Path>) -> Result<ParserInfo, err::ErrorKind> {
        let path = path.as_ref();

        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) => {
                log::error!(target: targets::PARSER, "Failed to open {path:?}: {e}");
                return Err(err::ErrorKind::from(err::ParseError::NoFile));
            }
        };

        match path.extension() {
            #[cfg(feature = "xz")]
            Some(extension) if extension == "xz" => {
                self.read_dimacs(std::io::BufReader::new(xz2::read::XzDecoder::new(file)))
            }

            _ => self.read_dimacs(std::io::BufReader::new(file)),
        }
    }
}

impl Context {
    /// Creates a context whose formula is read from the DIMACS file at `path`.
    pub fn from_dimacs_path(config: Config, path: impl AsRef<Path>) -> Result<Self, err::ErrorKind> {
        let mut the_context = Self::from_config(config);
        the_context.read_dimacs_path(path)?;
        Ok(the_context)
    }
}
