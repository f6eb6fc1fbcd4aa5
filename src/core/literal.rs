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

//! An implementation of a literal in Satyr. That is, a variable and a
//! polarity, represented by a nonzero signed integer as in the DIMACS
//! format. The literal `i` (`-i`) represents the variable of index `i - 1`
//! with a positive (negative) polarity.

use super::problem::VariableIndex;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct Literal(isize);

impl Literal {

    /// Creates a literal from its DIMACS encoding. The value must not be 0.
    pub fn from_dimacs(value: isize) -> Self {
        debug_assert!(value != 0);
        Literal(value)
    }

    /// Returns the literal representing the variable with the given polarity
    pub fn from_variable(variable: VariableIndex, polarity: bool) -> Self {
        if polarity {
            Literal(variable.0 as isize + 1)
        } else {
            Literal(-(variable.0 as isize + 1))
        }
    }

    /// Returns true iff the literal has a positive polarity
    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Returns the variable represented by the literal
    pub fn to_variable(&self) -> VariableIndex {
        VariableIndex(self.0.unsigned_abs() - 1)
    }

    /// Returns the opposite of the current literal. That is, a literal representing the same
    /// variable but with opposite polarity
    pub fn opposite(&self) -> Literal {
        Literal(-self.0)
    }

    /// Returns the DIMACS encoding of the literal
    pub fn value(&self) -> isize {
        self.0
    }
}

impl std::fmt::Display for Literal {

    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
