// Copyright 2025 the Armature Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction-time configuration errors.

use thiserror::Error;

/// Misconfiguration detected while constructing an engine or binding.
///
/// These are the only errors the engines surface. They are returned
/// synchronously from constructors so a misconfigured widget fails at mount,
/// not on first interaction. After construction, invalid operations (acting
/// while disabled, selecting an unregistered option, navigating an empty
/// container) degrade to silent no-ops instead of erroring.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A controlled value and an uncontrolled default were both supplied.
    ///
    /// An engine has exactly one owner; pick either the controlled value or
    /// the uncontrolled default.
    #[error("`{0}` accepts either a controlled value or an uncontrolled default, not both")]
    ConflictingOwnership(&'static str),
    /// The supplied selection's shape contradicts the declared selection mode
    /// (a set for a single-select, a scalar for a multi-select).
    #[error("`{0}` was given a value whose shape does not match its selection mode")]
    ModeMismatch(&'static str),
    /// A component was constructed outside the provider it requires.
    #[error("`{0}` requires an enclosing `{1}`")]
    MissingContext(&'static str, &'static str),
}

#[cfg(test)]
mod tests {
    extern crate alloc;

    use alloc::string::ToString;

    use super::*;

    #[test]
    fn messages_name_the_component() {
        let err = ConfigError::ConflictingOwnership("Disclosure");
        assert!(
            err.to_string().contains("`Disclosure`"),
            "message carries the component name: {err}"
        );
        let err = ConfigError::MissingContext("ListboxOption", "Listbox");
        assert_eq!(
            err.to_string(),
            "`ListboxOption` requires an enclosing `Listbox`"
        );
    }

    #[test]
    fn errors_are_cheap_values() {
        let err = ConfigError::ModeMismatch("Select");
        let copy = err;
        assert_eq!(err, copy, "errors are Copy + Eq for easy assertion");
    }
}
