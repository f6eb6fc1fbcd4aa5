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

//! This module implements the DPLL search of Satyr. At every node the solver
//! first saturates the formula with unit propagation and pure-literal
//! elimination, then asks the branching heuristic for a literal and explores
//! the branch assigning it true before the branch assigning it false.
//!
//! Every node owns one change log and one trail frame. A branch that fails
//! replays its log on the clause database and restores the trail, so the
//! database is back to the exact state it had when the node was entered. A
//! branch that succeeds returns without undoing anything: the edits and
//! assignments along the successful path are precisely what makes the model.

use search_trail::{SaveAndRestore, StateManager};

use crate::branching::BranchingDecision;
use crate::common::Solution;
use crate::core::change_log::ChangeLog;
use crate::core::literal::Literal;
use crate::core::problem::{Problem, VariableIndex};
use crate::propagator::Propagator;
use crate::statistics::Statistics;

/// The solver for Satyr. It is responsible for the whole search.
pub struct Solver<'b, const S: bool> {
    /// The clause database
    problem: Problem,
    /// The state manager that holds the variable assignments
    state: StateManager,
    /// The branching heuristic
    branching: &'b mut dyn BranchingDecision,
    /// The propagator used at every node of the search
    propagator: Propagator,
    /// The statistics collected during the search
    statistics: Statistics<S>,
}

pub type DefaultSolver<'b> = Solver<'b, true>;
pub type QuietSolver<'b> = Solver<'b, false>;

impl<'b, const S: bool> Solver<'b, S> {

    pub fn new(
        problem: Problem,
        state: StateManager,
        branching: &'b mut dyn BranchingDecision,
    ) -> Self {
        Self {
            problem,
            state,
            branching,
            propagator: Propagator::new(),
            statistics: Statistics::default(),
        }
    }

    /// Decides the satisfiability of the problem. On a satisfiable problem
    /// the returned solution carries a total interpretation: the variables
    /// left unfixed by the search do not appear in any clause, so they take
    /// an arbitrary value.
    pub fn solve(&mut self) -> Solution {
        let solution = if self.problem.is_trivially_unsat() || !self.solve_node() {
            Solution::unsatisfiable()
        } else {
            let interpretation = (0..self.problem.number_variables())
                .map(VariableIndex)
                .map(|v| self.problem[v].value(&self.state).unwrap_or_else(rand::random))
                .collect();
            Solution::satisfiable(interpretation)
        };
        self.statistics.print();
        solution
    }

    /// Explores one node of the search tree: saturates the formula with the
    /// propagations, then splits on the literal chosen by the heuristic.
    /// Returns true iff the live formula is satisfiable; on false the clause
    /// database and the trail are restored to their state at entry.
    fn solve_node(&mut self) -> bool {
        let mut log = ChangeLog::default();
        self.state.save_state();
        match self
            .propagator
            .unit_propagation(&mut self.problem, &mut self.state, &mut log)
        {
            Err(_) => {
                self.statistics.conflict();
                self.problem.undo(log);
                self.state.restore_state();
                return false;
            }
            Ok(number_fixed) => self.statistics.propagations(number_fixed),
        }
        let number_eliminated = self
            .propagator
            .pure_literal_elimination(&mut self.problem, &mut self.state, &mut log);
        self.statistics.eliminations(number_eliminated);
        if self.problem.is_solved() {
            return true;
        }
        // An active clause only mentions unfixed variables, so an unsolved
        // formula always has a pending variable to branch on
        let decision = match self.branching.branch_on(&self.problem, &self.state) {
            Some(literal) => literal,
            None => panic!("no branching decision on an unsolved formula"),
        };
        self.statistics.split();
        if self.branch(decision) || self.branch(decision.opposite()) {
            return true;
        }
        self.problem.undo(log);
        self.state.restore_state();
        false
    }

    /// Explores the branch assigning the given literal true
    fn branch(&mut self, literal: Literal) -> bool {
        let mut log = ChangeLog::default();
        self.state.save_state();
        self.problem[literal.to_variable()].set_value(literal.is_positive(), &mut self.state);
        if self.problem.remove_literal_from_clauses(literal.opposite(), &mut log) {
            self.statistics.conflict();
        } else {
            self.problem.remove_clauses_with_literal(literal, &mut log);
            if self.solve_node() {
                return true;
            }
        }
        self.problem.undo(log);
        self.state.restore_state();
        false
    }
}

#[cfg(test)]
mod test_solver {

    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use search_trail::StateManager;

    use crate::branching::*;
    use crate::common::Solution;
    use crate::core::literal::Literal;
    use crate::core::problem::Problem;
    use crate::solver::QuietSolver;

    fn solve_with(
        number_variables: usize,
        clauses: &[Vec<isize>],
        branching: &mut dyn BranchingDecision,
    ) -> Solution {
        let mut state = StateManager::default();
        let mut problem = Problem::new(number_variables, &mut state);
        for clause in clauses {
            let literals: Vec<Literal> = clause.iter().map(|l| Literal::from_dimacs(*l)).collect();
            problem.add_clause(&literals);
        }
        let mut solver = QuietSolver::new(problem, state, branching);
        solver.solve()
    }

    fn solve(number_variables: usize, clauses: &[&[isize]]) -> Solution {
        let clauses: Vec<Vec<isize>> = clauses.iter().map(|c| c.to_vec()).collect();
        solve_with(number_variables, &clauses, &mut MostOften)
    }

    fn satisfies(clauses: &[Vec<isize>], interpretation: &[bool]) -> bool {
        clauses.iter().all(|clause| {
            clause
                .iter()
                .any(|l| interpretation[(l.unsigned_abs()) - 1] == (*l > 0))
        })
    }

    fn brute_force_satisfiable(number_variables: usize, clauses: &[Vec<isize>]) -> bool {
        (0..(1usize << number_variables)).any(|mask| {
            let interpretation: Vec<bool> =
                (0..number_variables).map(|v| mask & (1 << v) != 0).collect();
            satisfies(clauses, &interpretation)
        })
    }

    #[test]
    fn empty_formula_is_satisfiable() {
        let solution = solve(0, &[]);
        assert!(solution.is_satisfiable());
        assert!(solution.interpretation().unwrap().is_empty());
    }

    #[test]
    fn empty_clause_is_unsatisfiable() {
        assert!(!solve(2, &[&[1, 2], &[]]).is_satisfiable());
    }

    #[test]
    fn propagation_chain_reaches_a_contradiction() {
        assert!(!solve(2, &[&[1], &[-1, 2], &[-2]]).is_satisfiable());
    }

    #[test]
    fn shrinking_clauses_exposes_the_contradiction() {
        assert!(!solve(3, &[&[1, 2], &[-1, 2], &[-2]]).is_satisfiable());
    }

    #[test]
    fn true_branch_is_tried_first() {
        // Both polarities of variable 1 extend to a model; the tie-break
        // explores the true branch first and keeps it
        let solution = solve(2, &[&[1, 2], &[-1, -2]]);
        let interpretation = solution.interpretation().unwrap();
        assert!(interpretation[0]);
        assert!(!interpretation[1]);
    }

    #[test]
    fn unit_propagation_fixes_the_model_prefix() {
        let solution = solve(3, &[&[1], &[-1, 2]]);
        let interpretation = solution.interpretation().unwrap();
        assert_eq!(3, interpretation.len());
        assert!(interpretation[0]);
        assert!(interpretation[1]);
    }

    #[test]
    fn pure_literal_solves_without_branching() {
        let solution = solve(2, &[&[1, 2], &[1, -2]]);
        assert!(solution.is_satisfiable());
        assert!(solution.interpretation().unwrap()[0]);
    }

    #[test]
    fn model_satisfies_the_formula() {
        let clauses: Vec<Vec<isize>> =
            vec![vec![1, 2], vec![-1, 3], vec![-2, -3], vec![2, 3], vec![-3, 1]];
        let solution = solve_with(3, &clauses, &mut MostOften);
        assert!(solution.is_satisfiable());
        assert!(satisfies(&clauses, solution.interpretation().unwrap()));
    }

    #[test]
    fn pigeonhole_is_unsatisfiable() {
        // 3 pigeons in 2 holes; variable 2*(p-1)+h means pigeon p sits in hole h
        let clauses: &[&[isize]] = &[
            &[1, 2],
            &[3, 4],
            &[5, 6],
            &[-1, -3],
            &[-1, -5],
            &[-3, -5],
            &[-2, -4],
            &[-2, -6],
            &[-4, -6],
        ];
        assert!(!solve(6, clauses).is_satisfiable());
    }

    #[test]
    fn unconstrained_variables_still_get_a_value() {
        // Variable 3 appears in no clause
        let solution = solve(3, &[&[1], &[2]]);
        assert!(solution.is_satisfiable());
        assert_eq!(3, solution.interpretation().unwrap().len());
    }

    #[test]
    fn search_backtracks_through_bad_first_branches() {
        // The positive branch on variable 1 kills the last clause late; the
        // solver must recover the original clauses to find the model
        let clauses: Vec<Vec<isize>> = vec![
            vec![1, 2, 3],
            vec![1, -2, 3],
            vec![-1, 2],
            vec![-1, -2],
            vec![-1, -3],
            vec![1, 2, -3],
        ];
        let solution = solve_with(3, &clauses, &mut MostOften);
        assert!(solution.is_satisfiable());
        assert!(satisfies(&clauses, solution.interpretation().unwrap()));
    }

    #[test]
    fn agrees_with_brute_force_on_random_formulas() {
        let mut rng = StdRng::seed_from_u64(996633);
        let mut heuristics: Vec<Box<dyn BranchingDecision>> = vec![
            Box::<MostOften>::default(),
            Box::<MostEquilibrated>::default(),
            Box::<Mom>::default(),
            Box::<JeroslowWangOneSided>::default(),
            Box::<JeroslowWangTwoSided>::default(),
            Box::<Dlcs>::default(),
            Box::<Dlis>::default(),
        ];
        for round in 0..50usize {
            let number_variables = rng.gen_range(3..=8);
            let number_clauses = rng.gen_range(1..=(4 * number_variables));
            let clauses: Vec<Vec<isize>> = (0..number_clauses)
                .map(|_| {
                    (0..3)
                        .map(|_| {
                            let variable = rng.gen_range(1..=number_variables) as isize;
                            if rng.gen_bool(0.5) { variable } else { -variable }
                        })
                        .collect()
                })
                .collect();
            let expected = brute_force_satisfiable(number_variables, &clauses);
            let heuristic = &mut heuristics[round % 7];
            let solution = solve_with(number_variables, &clauses, heuristic.as_mut());
            assert_eq!(expected, solution.is_satisfiable());
            if let Some(interpretation) = solution.interpretation() {
                assert!(satisfies(&clauses, interpretation));
            }
        }
    }
}
