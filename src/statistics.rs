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

use std::fmt;
use std::time::Instant;

/// Implements a bunch of statistics that are collected during the search. The
/// const generic selects, at compile time, whether the counters are maintained
/// at all, so that a quiet solver pays nothing for them.
pub struct Statistics<const B: bool> {
    /// Number of branching decisions taken
    splits: usize,
    /// Number of conflicts found while editing the clause database
    conflicts: usize,
    /// Number of variables fixed by unit propagation
    propagations: usize,
    /// Number of variables fixed by pure-literal elimination
    eliminations: usize,
    /// Creation time of the solver
    start: Instant,
}

impl<const B: bool> Default for Statistics<B> {
    fn default() -> Self {
        Self {
            splits: 0,
            conflicts: 0,
            propagations: 0,
            eliminations: 0,
            start: Instant::now(),
        }
    }
}

impl<const B: bool> Statistics<B> {
    pub fn split(&mut self) {
        if B {
            self.splits += 1;
        }
    }

    pub fn conflict(&mut self) {
        if B {
            self.conflicts += 1;
        }
    }

    pub fn propagations(&mut self, number_fixed: usize) {
        if B {
            self.propagations += number_fixed;
        }
    }

    pub fn eliminations(&mut self, number_fixed: usize) {
        if B {
            self.eliminations += number_fixed;
        }
    }

    pub fn print(&self) {
        if B {
            println!("{}", self);
        }
    }
}

impl<const B: bool> fmt::Display for Statistics<B> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if B {
            writeln!(f,
                "c splits {} | conflicts {} | propagations {} | pure eliminations {} | time {:.3} s | peak memory {:.2} Mb",
                self.splits,
                self.conflicts,
                self.propagations,
                self.eliminations,
                self.start.elapsed().as_secs_f64(),
                crate::PEAK_ALLOC.peak_usage_as_mb())
        } else {
            write!(f, "")
        }
    }
}
