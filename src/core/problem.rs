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

//! The clause database of Satyr. It owns the variables, the clause store and
//! the literal index, and exposes the two destructive edits of the DPLL
//! search together with their exact undo.
//!
//! Clause contents are interned in an arena: each distinct literal-set gets a
//! stable `ClauseIndex`, and both the literal index buckets and the change
//! logs store handles rather than structural copies. The arena only grows
//! during the search; activity is tracked by the per-clause multiplicity and
//! mirrored in the `active` set.
//!
//! Two invariants are maintained by every edit and every undo:
//!     - A clause is in the active set iff its multiplicity is positive.
//!     - A clause is in `bucket[l]` iff `l` is one of its literals and the
//!       clause is active.
//! An edit that would produce an empty clause signals a conflict instead; no
//! empty clause is ever stored.

use rustc_hash::{FxHashMap, FxHashSet};
use search_trail::StateManager;

use super::change_log::ChangeLog;
use super::clause::Clause;
use super::literal::Literal;
use super::variable::Variable;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VariableIndex(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClauseIndex(pub usize);

#[derive(Debug, Default)]
pub struct Problem {
    /// The variables of the input problem
    variables: Vec<Variable>,
    /// Arena of every distinct clause content seen so far, active or not
    clauses: Vec<Clause>,
    /// Maps a canonical literal-set to its handle in the arena
    store: FxHashMap<Vec<Literal>, ClauseIndex>,
    /// The literal index: for each literal, the active clauses containing it
    buckets: FxHashMap<Literal, FxHashSet<ClauseIndex>>,
    /// The clauses with a positive multiplicity, i.e., the live formula
    active: FxHashSet<ClauseIndex>,
    /// True iff the input problem contains an empty clause
    trivially_unsat: bool,
}

impl Problem {

    /// Creates a problem over the given number of variables, without any clause
    pub fn new(number_variables: usize, state: &mut StateManager) -> Self {
        let variables = (0..number_variables).map(|i| Variable::new(i, state)).collect();
        Self {
            variables,
            clauses: vec![],
            store: FxHashMap::default(),
            buckets: FxHashMap::default(),
            active: FxHashSet::default(),
            trivially_unsat: false,
        }
    }

    /// Adds a clause of the input problem. Duplicate clauses collapse to a
    /// single database entry, like the set semantics of the input format.
    pub fn add_clause(&mut self, literals: &[Literal]) {
        let mut literals = literals.to_vec();
        literals.sort_unstable();
        literals.dedup();
        if literals.is_empty() {
            self.trivially_unsat = true;
            return;
        }
        let clause = self.intern(literals);
        if self.clauses[clause.0].multiplicity() > 0 {
            return;
        }
        self.clauses[clause.0].set_multiplicity(1);
        self.active.insert(clause);
        for l in self.clauses[clause.0].iter() {
            self.buckets.entry(l).or_default().insert(clause);
            self.variables[l.to_variable().0].set_referenced();
        }
    }

    /// Returns the handle of the given canonical literal-set, interning it at
    /// multiplicity 0 if it was never seen before
    fn intern(&mut self, literals: Vec<Literal>) -> ClauseIndex {
        if let Some(clause) = self.store.get(&literals) {
            return *clause;
        }
        let clause = ClauseIndex(self.clauses.len());
        self.store.insert(literals.clone(), clause);
        self.clauses.push(Clause::new(literals));
        clause
    }

    /// Returns the number of variables of the input problem
    pub fn number_variables(&self) -> usize {
        self.variables.len()
    }

    /// Returns true iff the input problem contains an empty clause
    pub fn is_trivially_unsat(&self) -> bool {
        self.trivially_unsat
    }

    /// Returns true iff no clause remains active, i.e., the current partial
    /// assignment satisfies every clause of the input problem
    pub fn is_solved(&self) -> bool {
        self.active.is_empty()
    }

    /// Returns an iterator on the active clauses
    pub fn active_iter(&self) -> impl Iterator<Item = ClauseIndex> + '_ {
        self.active.iter().copied()
    }

    /// Returns true iff the literal has a (necessarily non-empty) bucket
    pub fn has_bucket(&self, literal: Literal) -> bool {
        self.buckets.contains_key(&literal)
    }

    /// Returns the number of active clauses containing the literal
    pub fn bucket_size(&self, literal: Literal) -> usize {
        self.buckets.get(&literal).map_or(0, |b| b.len())
    }

    /// Returns an iterator on the active clauses containing the literal
    pub fn bucket_iter(&self, literal: Literal) -> impl Iterator<Item = ClauseIndex> + '_ {
        self.buckets.get(&literal).into_iter().flatten().copied()
    }

    /// Returns true iff the literal occurs in an active clause while its
    /// negation does not
    pub fn is_pure(&self, literal: Literal) -> bool {
        self.has_bucket(literal) && !self.has_bucket(literal.opposite())
    }

    /// Returns an iterator on the variables that are not yet fixed. Variables
    /// that no clause references are excluded: they never need a decision and
    /// take an arbitrary value in the final interpretation.
    pub fn pending_variables<'a>(&'a self, state: &'a StateManager) -> impl Iterator<Item = VariableIndex> + 'a {
        (0..self.variables.len())
            .map(VariableIndex)
            .filter(move |v| self.variables[v.0].is_referenced() && !self.variables[v.0].is_fixed(state))
    }

    /// Retires every clause containing the literal: the literal was assigned
    /// true, so these clauses are satisfied. Each retirement is recorded in
    /// the log and the literal's bucket is deleted.
    pub fn remove_clauses_with_literal(&mut self, literal: Literal, log: &mut ChangeLog) {
        let bucket = match self.buckets.remove(&literal) {
            None => return,
            Some(b) => b,
        };
        for clause in bucket {
            log.push_removal(clause, self.clauses[clause.0].multiplicity());
            self.clauses[clause.0].set_multiplicity(0);
            self.active.remove(&clause);
            for l in self.clauses[clause.0].iter() {
                if l == literal {
                    continue;
                }
                if let Some(lset) = self.buckets.get_mut(&l) {
                    lset.remove(&clause);
                    if lset.is_empty() {
                        self.buckets.remove(&l);
                    }
                }
            }
        }
    }

    /// Strips the literal from every clause containing it: the literal was
    /// falsified, so these clauses shrink. Each shortening is recorded in the
    /// log as a modification of the original into the derived clause.
    ///
    /// Returns true as soon as a clause shrinks to the empty clause. The
    /// clause database is then in a partially edited state: the caller must
    /// backtrack with whatever the log already holds. The clauses of the
    /// bucket that were not processed yet, the emptied one included, are left
    /// untouched in `bucket[literal]` so that undoing the log restores the
    /// exact pre-call state.
    pub fn remove_literal_from_clauses(&mut self, literal: Literal, log: &mut ChangeLog) -> bool {
        let members: Vec<ClauseIndex> = match self.buckets.remove(&literal) {
            None => return false,
            Some(b) => b.into_iter().collect(),
        };
        for (i, clause) in members.iter().copied().enumerate() {
            let derived: Vec<Literal> = self.clauses[clause.0].iter().filter(|l| *l != literal).collect();
            if derived.is_empty() {
                self.buckets.insert(literal, members[i..].iter().copied().collect());
                return true;
            }
            let multiplicity = self.clauses[clause.0].multiplicity();
            let new = self.intern(derived);
            log.push_modification(new, clause, multiplicity);
            self.clauses[clause.0].set_multiplicity(0);
            self.active.remove(&clause);
            if self.clauses[new.0].increment_multiplicity() == 1 {
                self.active.insert(new);
            }
            for l in self.clauses[new.0].iter() {
                let lset = self.buckets.entry(l).or_default();
                lset.remove(&clause);
                lset.insert(new);
            }
        }
        false
    }

    /// Replays the log to restore the clause database to the state it had
    /// before the edits were recorded. Removals are re-added first, then the
    /// modifications are unwound in reverse chronological order: sibling
    /// edits can have produced the same derived clause from different
    /// originals, and a forward unwind can drop a derived clause whose
    /// multiplicity is still owed to an earlier, not-yet-undone modification.
    pub fn undo(&mut self, log: ChangeLog) {
        for (clause, multiplicity) in log.removals() {
            self.clauses[clause.0].set_multiplicity(multiplicity);
            self.active.insert(clause);
            for l in self.clauses[clause.0].iter() {
                self.buckets.entry(l).or_default().insert(clause);
            }
        }
        for (derived, original, multiplicity) in log.modifications_rev() {
            self.undo_modification(derived, original, multiplicity);
        }
    }

    /// Unwinds a single modification record: releases one reference on the
    /// derived clause, dropping it from the formula when no producing edit
    /// remains, and reactivates the original clause.
    fn undo_modification(&mut self, derived: ClauseIndex, original: ClauseIndex, multiplicity: usize) {
        if self.clauses[derived.0].decrement_multiplicity() == 0 {
            self.active.remove(&derived);
            for l in self.clauses[derived.0].iter() {
                if let Some(lset) = self.buckets.get_mut(&l) {
                    lset.remove(&derived);
                    if lset.is_empty() {
                        self.buckets.remove(&l);
                    }
                }
            }
        }
        self.clauses[original.0].set_multiplicity(multiplicity);
        self.active.insert(original);
        for l in self.clauses[original.0].iter() {
            self.buckets.entry(l).or_default().insert(original);
        }
    }
}

impl std::ops::Index<VariableIndex> for Problem {
    type Output = Variable;

    fn index(&self, index: VariableIndex) -> &Self::Output {
        &self.variables[index.0]
    }
}

impl std::ops::Index<ClauseIndex> for Problem {
    type Output = Clause;

    fn index(&self, index: ClauseIndex) -> &Self::Output {
        &self.clauses[index.0]
    }
}
