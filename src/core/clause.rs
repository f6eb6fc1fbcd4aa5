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

//! Representation of a clause in Satyr. A clause is an immutable set of
//! distinct literals, stored sorted so that each literal-set has a single
//! canonical representation. Clauses are never edited in place: shortening a
//! clause during the search produces a different clause value, interned in
//! the clause store of the problem.
//!
//! Every clause carries a multiplicity, the number of not-yet-undone edits
//! that currently require the clause to be part of the formula. Distinct
//! original clauses can shorten to an identical derived clause, so this is a
//! reference count rather than a boolean: the derived clause stays active
//! exactly as long as at least one producing edit remains un-undone. A clause
//! is part of the live formula iff its multiplicity is positive.

use super::literal::Literal;

#[derive(Debug)]
pub struct Clause {
    /// The distinct literals of the clause, sorted by their DIMACS encoding
    literals: Vec<Literal>,
    /// Number of not-yet-undone edits requiring this clause to remain active
    multiplicity: usize,
}

impl Clause {

    /// Creates an inactive clause from canonical (sorted, distinct) literals
    pub fn new(literals: Vec<Literal>) -> Self {
        debug_assert!(literals.windows(2).all(|w| w[0] < w[1]));
        Self {
            literals,
            multiplicity: 0,
        }
    }

    /// Returns the number of literals in the clause
    pub fn len(&self) -> usize {
        self.literals.len()
    }

    /// Returns true iff the clause has exactly one literal
    pub fn is_unit(&self) -> bool {
        self.literals.len() == 1
    }

    /// Returns the first literal of the clause
    pub fn first(&self) -> Literal {
        self.literals[0]
    }

    /// Returns the multiplicity of the clause
    pub fn multiplicity(&self) -> usize {
        self.multiplicity
    }

    /// Sets the multiplicity of the clause to the given value
    pub fn set_multiplicity(&mut self, multiplicity: usize) {
        self.multiplicity = multiplicity;
    }

    /// Increments the multiplicity of the clause, returning the new value
    pub fn increment_multiplicity(&mut self) -> usize {
        self.multiplicity += 1;
        self.multiplicity
    }

    /// Decrements the multiplicity of the clause, returning the new value
    pub fn decrement_multiplicity(&mut self) -> usize {
        debug_assert!(self.multiplicity > 0);
        self.multiplicity -= 1;
        self.multiplicity
    }

    /// Returns an iterator on the literals of the clause
    pub fn iter(&self) -> impl Iterator<Item = Literal> + '_ {
        self.literals.iter().copied()
    }
}

// Writes a clause as l1 l2 ... ln
impl std::fmt::Display for Clause {

    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.literals.iter().map(|l| format!("{}", l)).collect::<Vec<String>>().join(" "))
    }
}
