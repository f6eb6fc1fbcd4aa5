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

use clap::ValueEnum;

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum Branching {
    /// Variable appearing in the most live clauses
    MostOften,
    /// Variable with the most balanced polarities
    MostEquilibrated,
    /// Maximum occurrences of minimal size
    Mom,
    /// One-sided Jeroslow-Wang
    Jwos,
    /// Two-sided Jeroslow-Wang
    Jwts,
    /// Dynamic largest combined sum
    Dlcs,
    /// Dynamic largest individual sum
    Dlis,
}

/// The outcome of a run of the solver. A satisfiable outcome carries a total
/// interpretation of the variables, indexed by variable.
pub struct Solution {
    interpretation: Option<Vec<bool>>,
}

impl Solution {

    pub fn satisfiable(interpretation: Vec<bool>) -> Self {
        Self {
            interpretation: Some(interpretation),
        }
    }

    pub fn unsatisfiable() -> Self {
        Self {
            interpretation: None,
        }
    }

    pub fn is_satisfiable(&self) -> bool {
        self.interpretation.is_some()
    }

    /// Returns the model found by the solver, if any
    pub fn interpretation(&self) -> Option<&[bool]> {
        self.interpretation.as_deref()
    }

    pub fn print(&self) {
        println!("{}", self);
    }
}

// Writes the solution in the competition output format: the result line,
// followed by a values line listing every variable with its polarity
impl std::fmt::Display for Solution {

    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.interpretation {
            None => write!(f, "s UNSATISFIABLE"),
            Some(values) => {
                write!(f, "s SATISFIABLE")?;
                write!(f, "\nv")?;
                for (index, value) in values.iter().copied().enumerate() {
                    let literal = (index + 1) as isize;
                    write!(f, " {}", if value { literal } else { -literal })?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod test_solution {

    use crate::common::Solution;

    #[test]
    fn unsatisfiable_renders_the_result_line_only() {
        assert_eq!("s UNSATISFIABLE", format!("{}", Solution::unsatisfiable()));
    }

    #[test]
    fn satisfiable_renders_the_values_line() {
        let solution = Solution::satisfiable(vec![true, false, true]);
        assert_eq!("s SATISFIABLE\nv 1 -2 3", format!("{}", solution));
    }

    #[test]
    fn empty_interpretation_has_a_bare_values_line() {
        let solution = Solution::satisfiable(vec![]);
        assert_eq!("s SATISFIABLE\nv", format!("{}", solution));
    }
}
