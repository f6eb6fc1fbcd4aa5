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

//! The branching heuristics of Satyr. A heuristic is a pure scoring function
//! over the pending variables and the literal index: it must not mutate the
//! clause database. Each heuristic returns the literal to try first; the
//! search controller then tries its opposite. Heuristics without a sign rule
//! return the positive literal, so that the true branch is explored first,
//! and signed heuristics break polarity ties towards the positive literal as
//! well. Ties between variables are broken by iteration order.
//!
//! With b(l) the number of active clauses containing the literal l, the
//! implemented scoring functions are:
//!     - most-often: b(v) + b(-v)
//!     - most-equilibrated: b(v)*b(-v)*1024 + b(v) + b(-v)
//!     - MOM (k = 10): b(v)*b(-v) + 2^10 * (b(v) + b(-v))
//!     - Jeroslow-Wang (one- and two-sided): sum of 2^-|c| over the clauses
//!       containing the variable
//!     - DLCS: b(v) + b(-v), branching on the most frequent polarity
//!     - DLIS: max(b(v), b(-v)), branching on the most frequent polarity

use search_trail::StateManager;

use crate::core::literal::Literal;
use crate::core::problem::Problem;

pub trait BranchingDecision {
    /// Returns the literal to branch on first, or None if no variable is pending
    fn branch_on(&mut self, problem: &Problem, state: &StateManager) -> Option<Literal>;
}

/// Number of active clauses mentioning the variable, with either polarity
fn occurrences(problem: &Problem, literal: Literal) -> usize {
    problem.bucket_size(literal) + problem.bucket_size(literal.opposite())
}

/// Jeroslow-Wang weight of a literal: short clauses weigh exponentially more
fn jeroslow_wang_weight(problem: &Problem, literal: Literal) -> f64 {
    problem
        .bucket_iter(literal)
        .map(|clause| 2.0_f64.powi(-(problem[clause].len() as i32)))
        .sum()
}

/// Selects the variable that appears in the most active clauses
#[derive(Default)]
pub struct MostOften;

impl BranchingDecision for MostOften {
    fn branch_on(&mut self, problem: &Problem, state: &StateManager) -> Option<Literal> {
        let mut selected: Option<Literal> = None;
        let mut best_score = 0;
        for variable in problem.pending_variables(state) {
            let positive = Literal::from_variable(variable, true);
            let score = occurrences(problem, positive);
            if selected.is_none() || score > best_score {
                selected = Some(positive);
                best_score = score;
            }
        }
        selected
    }
}

/// Selects the variable whose polarities are the most balanced, so that both
/// branches simplify the formula
#[derive(Default)]
pub struct MostEquilibrated;

impl BranchingDecision for MostEquilibrated {
    fn branch_on(&mut self, problem: &Problem, state: &StateManager) -> Option<Literal> {
        let mut selected: Option<Literal> = None;
        let mut best_score = 0;
        for variable in problem.pending_variables(state) {
            let positive = Literal::from_variable(variable, true);
            let positive_count = problem.bucket_size(positive);
            let negative_count = problem.bucket_size(positive.opposite());
            let score = positive_count * negative_count * 1024 + positive_count + negative_count;
            if selected.is_none() || score > best_score {
                selected = Some(positive);
                best_score = score;
            }
        }
        selected
    }
}

/// Maximum occurrences of minimal size, with k = 10
#[derive(Default)]
pub struct Mom;

impl BranchingDecision for Mom {
    fn branch_on(&mut self, problem: &Problem, state: &StateManager) -> Option<Literal> {
        let mut selected: Option<Literal> = None;
        let mut best_score = 0;
        for variable in problem.pending_variables(state) {
            let positive = Literal::from_variable(variable, true);
            let positive_count = problem.bucket_size(positive);
            let negative_count = problem.bucket_size(positive.opposite());
            let score = positive_count * negative_count + (1 << 10) * (positive_count + negative_count);
            if selected.is_none() || score > best_score {
                selected = Some(positive);
                best_score = score;
            }
        }
        selected
    }
}

/// One-sided Jeroslow-Wang: maximises the summed weight of both polarities
#[derive(Default)]
pub struct JeroslowWangOneSided;

impl BranchingDecision for JeroslowWangOneSided {
    fn branch_on(&mut self, problem: &Problem, state: &StateManager) -> Option<Literal> {
        let mut selected: Option<Literal> = None;
        let mut best_score = f64::MIN;
        for variable in problem.pending_variables(state) {
            let positive = Literal::from_variable(variable, true);
            let score = jeroslow_wang_weight(problem, positive)
                + jeroslow_wang_weight(problem, positive.opposite());
            if selected.is_none() || score > best_score {
                selected = Some(positive);
                best_score = score;
            }
        }
        selected
    }
}

/// Two-sided Jeroslow-Wang: same variable score, but branches first on the
/// polarity with the larger partial weight
#[derive(Default)]
pub struct JeroslowWangTwoSided;

impl BranchingDecision for JeroslowWangTwoSided {
    fn branch_on(&mut self, problem: &Problem, state: &StateManager) -> Option<Literal> {
        let mut selected: Option<Literal> = None;
        let mut best_score = f64::MIN;
        for variable in problem.pending_variables(state) {
            let positive = Literal::from_variable(variable, true);
            let positive_weight = jeroslow_wang_weight(problem, positive);
            let negative_weight = jeroslow_wang_weight(problem, positive.opposite());
            let score = positive_weight + negative_weight;
            if selected.is_none() || score > best_score {
                selected = Some(if positive_weight >= negative_weight {
                    positive
                } else {
                    positive.opposite()
                });
                best_score = score;
            }
        }
        selected
    }
}

/// Dynamic largest combined sum: most occurrences, most frequent polarity first
#[derive(Default)]
pub struct Dlcs;

impl BranchingDecision for Dlcs {
    fn branch_on(&mut self, problem: &Problem, state: &StateManager) -> Option<Literal> {
        let mut selected: Option<Literal> = None;
        let mut best_score = 0;
        for variable in problem.pending_variables(state) {
            let positive = Literal::from_variable(variable, true);
            let positive_count = problem.bucket_size(positive);
            let negative_count = problem.bucket_size(positive.opposite());
            let score = positive_count + negative_count;
            if selected.is_none() || score > best_score {
                selected = Some(if positive_count >= negative_count {
                    positive
                } else {
                    positive.opposite()
                });
                best_score = score;
            }
        }
        selected
    }
}

/// Dynamic largest individual sum: the single most frequent literal
#[derive(Default)]
pub struct Dlis;

impl BranchingDecision for Dlis {
    fn branch_on(&mut self, problem: &Problem, state: &StateManager) -> Option<Literal> {
        let mut selected: Option<Literal> = None;
        let mut best_score = 0;
        for variable in problem.pending_variables(state) {
            let positive = Literal::from_variable(variable, true);
            let positive_count = problem.bucket_size(positive);
            let negative_count = problem.bucket_size(positive.opposite());
            let score = positive_count.max(negative_count);
            if selected.is_none() || score > best_score {
                selected = Some(if positive_count >= negative_count {
                    positive
                } else {
                    positive.opposite()
                });
                best_score = score;
            }
        }
        selected
    }
}
