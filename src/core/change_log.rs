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

//! The change log records every destructive edit made to the clause database
//! along a search path, so that the exact prior state can be restored on
//! backtrack. There are two kinds of edits:
//!     - A removal retires a clause satisfied by an assigned literal. The
//!       record stores the clause and its prior multiplicity.
//!     - A modification shortens a clause whose literal was falsified. The
//!       record stores the derived clause, the original clause and the
//!       original's prior multiplicity.
//!
//! Each log is exclusively owned by the search frame that produced it: it is
//! fully consumed by `Problem::undo` when the frame fails, or dropped without
//! being replayed when the frame succeeds.

use super::problem::ClauseIndex;

#[derive(Debug, Default)]
pub struct ChangeLog {
    /// The clauses retired by `remove_clauses_with_literal`, with their prior multiplicity
    removals: Vec<(ClauseIndex, usize)>,
    /// The (derived, original, prior multiplicity) records of `remove_literal_from_clauses`,
    /// in chronological order
    modifications: Vec<(ClauseIndex, ClauseIndex, usize)>,
}

impl ChangeLog {

    /// Records the removal of a clause that had the given multiplicity
    pub fn push_removal(&mut self, clause: ClauseIndex, multiplicity: usize) {
        self.removals.push((clause, multiplicity));
    }

    /// Records the shortening of `original` (with the given multiplicity) into `derived`
    pub fn push_modification(&mut self, derived: ClauseIndex, original: ClauseIndex, multiplicity: usize) {
        self.modifications.push((derived, original, multiplicity));
    }

    /// Returns true iff the log records no edit
    pub fn is_empty(&self) -> bool {
        self.removals.is_empty() && self.modifications.is_empty()
    }

    /// Returns an iterator on the removal records, in any order
    pub fn removals(&self) -> impl Iterator<Item = (ClauseIndex, usize)> + '_ {
        self.removals.iter().copied()
    }

    /// Returns an iterator on the modification records in reverse chronological
    /// order, the only order in which they can be undone correctly
    pub fn modifications_rev(&self) -> impl Iterator<Item = (ClauseIndex, ClauseIndex, usize)> + '_ {
        self.modifications.iter().rev().copied()
    }

    /// Returns an iterator on the modification records in chronological order.
    /// Replaying modifications in this order is incorrect; it is exposed only
    /// to let the tests demonstrate that.
    #[cfg(test)]
    pub fn modifications(&self) -> impl Iterator<Item = (ClauseIndex, ClauseIndex, usize)> + '_ {
        self.modifications.iter().copied()
    }
}
