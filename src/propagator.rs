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

//! This module gives the implementation of the propagator used during the
//! search. It is called after every branching decision and works purely in
//! terms of the two reversible edits of the clause database.
//!
//! Unit propagation collects the literals of the unit clauses of the live
//! formula and, for each of them, assigns its variable, retires the clauses
//! the literal satisfies and strips its negation from the clauses containing
//! it. A wave of propagations can expose new unit clauses, so the live
//! formula is re-scanned once a wave drains, until a fixpoint is reached. If
//! stripping empties a clause the propagation stops immediately and reports
//! the conflict upward: the caller backtracks with the change log, the
//! propagator never repairs anything itself. The fixpoint does not depend on
//! the processing order as long as the first conflict aborts the run.
//!
//! Pure-literal elimination assigns every literal whose negation has no
//! bucket to its own polarity and retires the clauses it satisfies. Retiring
//! clauses can only make more literals pure, never creates a unit clause
//! conflict, so this pass cannot fail. It also rescans for newly exposed
//! pure literals once the current batch drains.

use search_trail::StateManager;

use crate::core::change_log::ChangeLog;
use crate::core::literal::Literal;
use crate::core::problem::Problem;

#[derive(Debug)]
pub struct Unsat;

/// On success, the number of variables the pass fixed
pub type PropagationResult = Result<usize, Unsat>;

#[derive(Default)]
pub struct Propagator {
    /// Literals of the unit clauses waiting to be propagated
    unit_literals: Vec<Literal>,
    /// Pure literals waiting to be eliminated
    pure_literals: Vec<Literal>,
}

impl Propagator {

    pub fn new() -> Self {
        Self {
            unit_literals: vec![],
            pure_literals: vec![],
        }
    }

    /// Runs boolean unit propagation until a fixpoint is reached or a clause
    /// becomes empty. Every edit is recorded in the given log; on conflict
    /// the log holds the edits made so far and the caller must undo them.
    pub fn unit_propagation(
        &mut self,
        problem: &mut Problem,
        state: &mut StateManager,
        log: &mut ChangeLog,
    ) -> PropagationResult {
        debug_assert!(self.unit_literals.is_empty());
        let mut number_fixed = 0;
        self.collect_unit_literals(problem);
        while let Some(literal) = self.unit_literals.pop() {
            problem.remove_clauses_with_literal(literal, log);
            if problem.has_bucket(literal.opposite())
                && problem.remove_literal_from_clauses(literal.opposite(), log)
            {
                self.unit_literals.clear();
                return PropagationResult::Err(Unsat);
            }
            problem[literal.to_variable()].set_value(literal.is_positive(), state);
            number_fixed += 1;
            // The wave can have exposed new unit clauses
            if self.unit_literals.is_empty() {
                self.collect_unit_literals(problem);
            }
        }
        PropagationResult::Ok(number_fixed)
    }

    /// Assigns every pure literal of the live formula consistently with its
    /// polarity and retires the clauses it satisfies. Never conflicts;
    /// returns the number of variables fixed.
    pub fn pure_literal_elimination(
        &mut self,
        problem: &mut Problem,
        state: &mut StateManager,
        log: &mut ChangeLog,
    ) -> usize {
        debug_assert!(self.pure_literals.is_empty());
        let mut number_fixed = 0;
        self.collect_pure_literals(problem, state);
        while let Some(literal) = self.pure_literals.pop() {
            problem[literal.to_variable()].set_value(literal.is_positive(), state);
            number_fixed += 1;
            // A clause can hold two pure literals: eliminating the first one
            // already retired the clauses of the second
            if problem.has_bucket(literal) {
                problem.remove_clauses_with_literal(literal, log);
            }
            if self.pure_literals.is_empty() {
                self.collect_pure_literals(problem, state);
            }
        }
        number_fixed
    }

    /// Pushes the literal of every unit clause of the live formula
    fn collect_unit_literals(&mut self, problem: &Problem) {
        for clause in problem.active_iter() {
            if problem[clause].is_unit() {
                self.unit_literals.push(problem[clause].first());
            }
        }
    }

    /// Pushes one pure literal per pending variable that has one
    fn collect_pure_literals(&mut self, problem: &Problem, state: &StateManager) {
        for variable in problem.pending_variables(state) {
            let positive = Literal::from_variable(variable, true);
            if problem.is_pure(positive) {
                self.pure_literals.push(positive);
            } else if problem.is_pure(positive.opposite()) {
                self.pure_literals.push(positive.opposite());
            }
        }
    }
}
