//Satyr
//Copyright (C) 2024 The Satyr developers
//
//This program is free software: you can redistribute it and/or modify
//it under the terms of the GNU Affero General Public License as published by
//the Free Software Foundation, either version 3 of the License, or
//(at your option) any later version.
//
//This program is distributed in the hope that it will be useful,
//but WITHOUT ANY WARRANTY; without even the implied warranty of
//MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
//GNU Affero General Public License for more details.
//
//You should have received a copy of the GNU Affero General Public License
//along with this program.  If not, see <http://www.gnu.org/licenses/>.

//! Parser for the DIMACS CNF format. The usual relaxations are accepted:
//! comment lines anywhere, blank lines, clauses spanning several lines, and a
//! clause count in the problem line that does not match the actual number of
//! clauses. A literal mentioning a variable above the declared count, a
//! missing problem line or a clause without its 0 terminator are reported as
//! errors carrying the offending line number.
//!
//! Clauses are sets of literals: duplicated literals are merged and
//! tautological clauses (containing both a literal and its negation) are
//! dropped at parse time.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

use rustc_hash::FxHashSet;
use thiserror::Error;

use crate::core::literal::Literal;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("could not read the input file: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {line}: found a clause before the problem line")]
    MissingHeader { line: usize },
    #[error("line {line}: malformed problem line, expected `p cnf <variables> <clauses>`")]
    InvalidHeader { line: usize },
    #[error("line {line}: `{token}` is not a literal")]
    InvalidToken { line: usize, token: String },
    #[error("line {line}: literal {literal} is out of range for {variables} variables")]
    LiteralOutOfRange {
        line: usize,
        literal: isize,
        variables: usize,
    },
    #[error("line {line}: the last clause is not terminated by 0")]
    MissingTerminator { line: usize },
}

/// A parsed CNF formula: the declared number of variables and the clauses, in
/// the order of the input file, tautologies excluded.
pub struct Cnf {
    number_variables: usize,
    clauses: Vec<Vec<Literal>>,
}

impl Cnf {

    pub fn number_variables(&self) -> usize {
        self.number_variables
    }

    pub fn clauses(&self) -> &[Vec<Literal>] {
        &self.clauses
    }

    /// Returns true iff the given interpretation satisfies every clause
    pub fn is_satisfied_by(&self, interpretation: &[bool]) -> bool {
        debug_assert_eq!(self.number_variables, interpretation.len());
        self.clauses.iter().all(|clause| {
            clause
                .iter()
                .any(|literal| interpretation[literal.to_variable().0] == literal.is_positive())
        })
    }
}

/// Parses the file at the given path as a DIMACS CNF formula
pub fn cnf_from_dimacs(filepath: &PathBuf) -> Result<Cnf, ParseError> {
    let reader = BufReader::new(File::open(filepath)?);
    let mut number_variables: Option<usize> = None;
    let mut clauses: Vec<Vec<Literal>> = vec![];
    let mut current: FxHashSet<Literal> = FxHashSet::default();
    let mut tautology = false;
    let mut last_line = 0;
    for (line_index, line) in reader.lines().enumerate() {
        let line = line?;
        let number_line = line_index + 1;
        last_line = number_line;
        if line.starts_with('c') || line.trim().is_empty() {
            continue;
        }
        if line.starts_with('p') {
            number_variables = Some(parse_header(&line, number_line)?);
            continue;
        }
        let variables = match number_variables {
            None => return Err(ParseError::MissingHeader { line: number_line }),
            Some(v) => v,
        };
        for token in line.split_whitespace() {
            let value: isize = token.parse().map_err(|_| ParseError::InvalidToken {
                line: number_line,
                token: token.to_string(),
            })?;
            if value == 0 {
                if !tautology {
                    let mut clause: Vec<Literal> = current.iter().copied().collect();
                    clause.sort();
                    clauses.push(clause);
                }
                current.clear();
                tautology = false;
                continue;
            }
            if value.unsigned_abs() > variables {
                return Err(ParseError::LiteralOutOfRange {
                    line: number_line,
                    literal: value,
                    variables,
                });
            }
            let literal = Literal::from_dimacs(value);
            if current.contains(&literal.opposite()) {
                tautology = true;
            }
            current.insert(literal);
        }
    }
    if !current.is_empty() || tautology {
        return Err(ParseError::MissingTerminator { line: last_line });
    }
    match number_variables {
        None => Err(ParseError::InvalidHeader { line: last_line }),
        Some(number_variables) => Ok(Cnf {
            number_variables,
            clauses,
        }),
    }
}

/// Parses the problem line `p cnf <variables> <clauses>`
fn parse_header(line: &str, number_line: usize) -> Result<usize, ParseError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != 4 || tokens[0] != "p" || tokens[1] != "cnf" {
        return Err(ParseError::InvalidHeader { line: number_line });
    }
    let variables: usize = tokens[2]
        .parse()
        .map_err(|_| ParseError::InvalidHeader { line: number_line })?;
    // The clause count is validated but not trusted
    let _: usize = tokens[3]
        .parse()
        .map_err(|_| ParseError::InvalidHeader { line: number_line })?;
    Ok(variables)
}

#[cfg(test)]
mod test_parser {

    use std::io::Write;

    use tempfile::NamedTempFile;

    use crate::core::literal::Literal;
    use crate::parser::{cnf_from_dimacs, Cnf, ParseError};

    fn parse(content: &str) -> Result<Cnf, ParseError> {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        cnf_from_dimacs(&file.path().to_path_buf())
    }

    fn literals(clause: &[Literal]) -> Vec<isize> {
        clause.iter().map(|l| l.value()).collect()
    }

    #[test]
    fn parses_a_simple_formula() {
        let cnf = parse("c a comment\np cnf 3 2\n1 -2 0\n2 3 0\n").unwrap();
        assert_eq!(3, cnf.number_variables());
        assert_eq!(2, cnf.clauses().len());
        assert_eq!(vec![-2, 1], literals(&cnf.clauses()[0]));
        assert_eq!(vec![2, 3], literals(&cnf.clauses()[1]));
    }

    #[test]
    fn a_clause_can_span_several_lines() {
        let cnf = parse("p cnf 3 1\n1 2\n3 0\n").unwrap();
        assert_eq!(1, cnf.clauses().len());
        assert_eq!(vec![1, 2, 3], literals(&cnf.clauses()[0]));
    }

    #[test]
    fn duplicated_literals_are_merged() {
        let cnf = parse("p cnf 2 1\n1 2 1 0\n").unwrap();
        assert_eq!(vec![1, 2], literals(&cnf.clauses()[0]));
    }

    #[test]
    fn tautologies_are_dropped() {
        let cnf = parse("p cnf 2 2\n1 -1 2 0\n2 0\n").unwrap();
        assert_eq!(1, cnf.clauses().len());
        assert_eq!(vec![2], literals(&cnf.clauses()[0]));
    }

    #[test]
    fn non_cnf_format_token_is_an_error() {
        match parse("p dnf 2 1\n1 2 0\n") {
            Err(ParseError::InvalidHeader { line }) => assert_eq!(1, line),
            other => panic!("unexpected result: {:?}", other.err()),
        }
    }

    #[test]
    fn empty_formula_is_accepted() {
        let cnf = parse("p cnf 0 0\n").unwrap();
        assert_eq!(0, cnf.number_variables());
        assert!(cnf.clauses().is_empty());
    }

    #[test]
    fn clause_before_the_header_is_an_error() {
        match parse("1 2 0\np cnf 2 1\n") {
            Err(ParseError::MissingHeader { line }) => assert_eq!(1, line),
            other => panic!("unexpected result: {:?}", other.err()),
        }
    }

    #[test]
    fn literal_above_the_declared_count_is_an_error() {
        match parse("p cnf 2 1\n1 -3 0\n") {
            Err(ParseError::LiteralOutOfRange { line, literal, variables }) => {
                assert_eq!(2, line);
                assert_eq!(-3, literal);
                assert_eq!(2, variables);
            }
            other => panic!("unexpected result: {:?}", other.err()),
        }
    }

    #[test]
    fn unterminated_clause_is_an_error() {
        match parse("p cnf 2 1\n1 2\n") {
            Err(ParseError::MissingTerminator { line }) => assert_eq!(2, line),
            other => panic!("unexpected result: {:?}", other.err()),
        }
    }

    #[test]
    fn garbage_token_is_an_error() {
        match parse("p cnf 2 1\n1 two 0\n") {
            Err(ParseError::InvalidToken { line, token }) => {
                assert_eq!(2, line);
                assert_eq!("two", token);
            }
            other => panic!("unexpected result: {:?}", other.err()),
        }
    }

    #[test]
    fn satisfaction_check_follows_the_interpretation() {
        let cnf = parse("p cnf 2 2\n1 2 0\n-1 2 0\n").unwrap();
        assert!(cnf.is_satisfied_by(&[true, true]));
        assert!(cnf.is_satisfied_by(&[false, true]));
        assert!(!cnf.is_satisfied_by(&[true, false]));
    }
}
