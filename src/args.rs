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

use clap::Parser;

use std::path::PathBuf;

use crate::Branching;

#[derive(Parser)]
#[clap(name="Satyr", version, author, about)]
pub struct Args {
    /// The input file, in DIMACS CNF format
    #[clap(short, long, value_parser)]
    input: PathBuf,
    /// Branching heuristic
    #[clap(short, long, value_enum, default_value_t=Branching::MostOften)]
    branching: Branching,
    /// Collect stats during the search
    #[clap(long, action)]
    statistics: bool,
}

impl Args {

    pub fn new(input: PathBuf, branching: Branching, statistics: bool) -> Self {
        Self {
            input,
            branching,
            statistics,
        }
    }

    pub fn input(&self) -> &PathBuf {
        &self.input
    }

    pub fn branching(&self) -> Branching {
        self.branching
    }

    pub fn statistics(&self) -> bool {
        self.statistics
    }
}
