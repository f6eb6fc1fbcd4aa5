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

//! An implementation of a variable in Satyr. The truth value of a variable is
//! a reversible option-boolean managed by the state manager: assignments made
//! along a search path are dropped when the trail is restored, so a variable
//! is pending exactly when its value is `None`.

use search_trail::{OptionBoolManager, ReversibleOptionBool, StateManager};

/// Data structure that actually holds the data of a variable of the input problem
#[derive(Debug)]
pub struct Variable {
    /// The id of the variable in the input problem
    id: usize,
    /// The truth value assigned to the variable, if any
    value: ReversibleOptionBool,
    /// True iff the variable appears in at least one clause of the input problem
    referenced: bool,
}

impl Variable {

    pub fn new(id: usize, state: &mut StateManager) -> Self {
        Self {
            id,
            value: state.manage_option_bool(None),
            referenced: false,
        }
    }

    /// Sets the variable to the given value. This operation is reverted when
    /// the trail is restored
    pub fn set_value(&self, value: bool, state: &mut StateManager) {
        debug_assert!(state.get_option_bool(self.value).is_none());
        state.set_option_bool(self.value, value);
    }

    /// Returns the value of the variable
    pub fn value(&self, state: &StateManager) -> Option<bool> {
        state.get_option_bool(self.value)
    }

    /// Returns true iff the variable is fixed
    pub fn is_fixed(&self, state: &StateManager) -> bool {
        state.get_option_bool(self.value).is_some()
    }

    /// Marks the variable as appearing in a clause of the input problem
    pub fn set_referenced(&mut self) {
        self.referenced = true;
    }

    /// Returns true iff the variable appears in a clause of the input problem
    pub fn is_referenced(&self) -> bool {
        self.referenced
    }
}

impl std::fmt::Display for Variable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "V{}", self.id + 1)
    }
}

#[cfg(test)]
mod test_variable {

    use search_trail::{SaveAndRestore, StateManager};
    use crate::core::variable::Variable;

    #[test]
    fn assignment_is_reverted_on_restore() {
        let mut state = StateManager::default();
        let v = Variable::new(0, &mut state);
        assert!(!v.is_fixed(&state));

        state.save_state();
        v.set_value(true, &mut state);
        assert_eq!(Some(true), v.value(&state));

        state.restore_state();
        assert_eq!(None, v.value(&state));
    }
}
