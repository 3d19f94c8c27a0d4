// Copyright 2025 the Armature Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The checked/pressed sibling of the disclosure machine.

use armature_core::{ConfigError, OwnedValue, OwnershipMode};

/// Construction options for [`ToggleState`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ToggleOptions {
    /// Controlled: the host-owned checked value at construction.
    pub checked: Option<bool>,
    /// Uncontrolled: the engine-owned starting value.
    pub default_checked: Option<bool>,
    /// Start with requests gated.
    pub disabled: bool,
}

/// Checked/unchecked interaction state for checkbox, switch, and
/// toggle-button widgets.
///
/// Same machine as [`DisclosureState`](crate::DisclosureState) over a
/// different boolean: requests return the notification, `disabled` gates,
/// ownership is fixed at construction. Carries no id bundle; bindings that
/// wire labels and indicators mint [`UniqueId`](armature_core::UniqueId)s
/// themselves.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToggleState {
    checked: OwnedValue<bool>,
    disabled: bool,
}

impl ToggleState {
    /// Creates an engine from explicit options.
    ///
    /// # Errors
    ///
    /// [`ConfigError::ConflictingOwnership`] when both `checked` and
    /// `default_checked` are supplied.
    pub fn new(options: ToggleOptions) -> Result<Self, ConfigError> {
        let checked = match (options.checked, options.default_checked) {
            (Some(_), Some(_)) => return Err(ConfigError::ConflictingOwnership("Toggle")),
            (Some(value), None) => OwnedValue::controlled(value),
            (None, default) => OwnedValue::uncontrolled(default.unwrap_or(false)),
        };
        Ok(Self {
            checked,
            disabled: options.disabled,
        })
    }

    /// A controlled engine mirroring the host's current value.
    pub fn controlled(checked: bool) -> Self {
        Self {
            checked: OwnedValue::controlled(checked),
            disabled: false,
        }
    }

    /// An uncontrolled engine starting from `default_checked`.
    pub fn uncontrolled(default_checked: bool) -> Self {
        Self {
            checked: OwnedValue::uncontrolled(default_checked),
            disabled: false,
        }
    }

    /// The current checked value.
    pub fn is_checked(&self) -> bool {
        *self.checked.get()
    }

    /// Whether requests are currently gated.
    pub fn disabled(&self) -> bool {
        self.disabled
    }

    /// Gates or ungates requests.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    /// Who owns the checked value.
    pub fn ownership(&self) -> OwnershipMode {
        self.checked.mode()
    }

    /// Requests a transition to `next`; returns the notification or `None`
    /// when gated.
    pub fn set_checked(&mut self, next: bool) -> Option<bool> {
        if self.disabled {
            return None;
        }
        self.checked.write(next);
        Some(next)
    }

    /// Requests the inverse of the current value.
    pub fn toggle(&mut self) -> Option<bool> {
        let next = !self.is_checked();
        self.set_checked(next)
    }

    /// Adopts the host-owned value; ignored when uncontrolled.
    pub fn sync_checked(&mut self, value: bool) {
        self.checked.sync(value);
    }
}
