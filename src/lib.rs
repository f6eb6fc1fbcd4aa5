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

// Re-export the modules
pub mod args;
pub mod branching;
pub mod common;
pub mod core;
pub mod parser;
mod propagator;
mod solver;
mod statistics;

use search_trail::StateManager;

use branching::*;
use core::problem::Problem;

pub use args::Args;
pub use common::*;
pub use parser::ParseError;
pub use solver::{DefaultSolver, QuietSolver, Solver};

use peak_alloc::PeakAlloc;
#[global_allocator]
pub static PEAK_ALLOC: PeakAlloc = PeakAlloc;

/// Parses the input file of the arguments and decides its satisfiability
pub fn solve(args: Args) -> Result<Solution, ParseError> {
    let cnf = parser::cnf_from_dimacs(args.input())?;
    let mut state = StateManager::default();
    let mut problem = Problem::new(cnf.number_variables(), &mut state);
    for clause in cnf.clauses() {
        problem.add_clause(clause);
    }
    let mut branching_heuristic: Box<dyn BranchingDecision> = match args.branching() {
        Branching::MostOften => Box::<MostOften>::default(),
        Branching::MostEquilibrated => Box::<MostEquilibrated>::default(),
        Branching::Mom => Box::<Mom>::default(),
        Branching::Jwos => Box::<JeroslowWangOneSided>::default(),
        Branching::Jwts => Box::<JeroslowWangTwoSided>::default(),
        Branching::Dlcs => Box::<Dlcs>::default(),
        Branching::Dlis => Box::<Dlis>::default(),
    };
    let solution = if args.statistics() {
        DefaultSolver::new(problem, state, branching_heuristic.as_mut()).solve()
    } else {
        QuietSolver::new(problem, state, branching_heuristic.as_mut()).solve()
    };
    Ok(solution)
}
