// Copyright 2025 the Armature Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The open/close state machine and its id bundle.

use armature_core::{ConfigError, OwnedValue, OwnershipMode, UniqueId};

/// Construction options for [`DisclosureState`].
///
/// Exactly one of [`is_open`](Self::is_open) (controlled) and
/// [`default_open`](Self::default_open) (uncontrolled) may be supplied.
/// Omitting both yields an uncontrolled engine starting closed.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct DisclosureOptions {
    /// Controlled: the host-owned open value at construction.
    pub is_open: Option<bool>,
    /// Uncontrolled: the engine-owned starting value.
    pub default_open: Option<bool>,
    /// Start with transitions gated.
    pub disabled: bool,
}

/// Stable identifiers for the elements of one disclosure unit.
///
/// Minted once per engine and fixed for its lifetime. Bindings render these
/// onto their elements so `aria-controls` (trigger → panel) and
/// `aria-labelledby` (panel → owner) relationships resolve.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DisclosureIds {
    /// The widget root that owns the unit.
    pub owner: UniqueId,
    /// The element that requests transitions.
    pub trigger: UniqueId,
    /// The element whose visibility is governed.
    pub panel: UniqueId,
}

impl DisclosureIds {
    /// Mints a fresh id bundle with three distinct ids.
    pub fn fresh() -> Self {
        Self {
            owner: UniqueId::fresh(),
            trigger: UniqueId::fresh(),
            panel: UniqueId::fresh(),
        }
    }
}

/// Open/closed interaction state for one disclosure unit.
///
/// Two states, transitions only through [`set_open`](Self::set_open) (and the
/// [`toggle`](Self::toggle) convenience over it). Transition requests while
/// [`disabled`](Self::disabled) are silently ignored. The machine never
/// touches focus or elements; it reports what happened and the binding acts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisclosureState {
    open: OwnedValue<bool>,
    disabled: bool,
    ids: DisclosureIds,
}

impl DisclosureState {
    /// Creates an engine from explicit options.
    ///
    /// # Errors
    ///
    /// [`ConfigError::ConflictingOwnership`] when both `is_open` and
    /// `default_open` are supplied.
    pub fn new(options: DisclosureOptions) -> Result<Self, ConfigError> {
        let open = match (options.is_open, options.default_open) {
            (Some(_), Some(_)) => return Err(ConfigError::ConflictingOwnership("Disclosure")),
            (Some(value), None) => OwnedValue::controlled(value),
            (None, default) => OwnedValue::uncontrolled(default.unwrap_or(false)),
        };
        Ok(Self {
            open,
            disabled: options.disabled,
            ids: DisclosureIds::fresh(),
        })
    }

    /// A controlled engine mirroring the host's current value.
    ///
    /// The typed constructors make the ownership conflict unrepresentable;
    /// [`new`](Self::new) exists for bindings assembling options from
    /// host-language props.
    pub fn controlled(is_open: bool) -> Self {
        Self {
            open: OwnedValue::controlled(is_open),
            disabled: false,
            ids: DisclosureIds::fresh(),
        }
    }

    /// An uncontrolled engine starting from `default_open`.
    pub fn uncontrolled(default_open: bool) -> Self {
        Self {
            open: OwnedValue::uncontrolled(default_open),
            disabled: false,
            ids: DisclosureIds::fresh(),
        }
    }

    /// The current open value.
    ///
    /// Controlled engines report the most recent [`sync_open`](Self::sync_open)
    /// snapshot; uncontrolled engines report their own state.
    pub fn is_open(&self) -> bool {
        *self.open.get()
    }

    /// Whether transition requests are currently gated.
    pub fn disabled(&self) -> bool {
        self.disabled
    }

    /// Gates or ungates transition requests.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    /// Who owns the open value.
    pub fn ownership(&self) -> OwnershipMode {
        self.open.mode()
    }

    /// The id bundle for this unit.
    pub fn ids(&self) -> DisclosureIds {
        self.ids
    }

    /// Requests a transition to `next`.
    ///
    /// Returns the notification the binding must announce: `Some(next)` when
    /// the request was accepted, `None` when gated by
    /// [`disabled`](Self::disabled). Uncontrolled engines apply the value
    /// before returning; controlled engines leave their mirror untouched and
    /// rely on the host to push the accepted value back via
    /// [`sync_open`](Self::sync_open). The notification reports the requested
    /// value even when it equals the current one.
    pub fn set_open(&mut self, next: bool) -> Option<bool> {
        if self.disabled {
            return None;
        }
        self.open.write(next);
        Some(next)
    }

    /// Requests the inverse of the current value.
    ///
    /// Every trigger binding does exactly this on activation.
    pub fn toggle(&mut self) -> Option<bool> {
        let next = !self.is_open();
        self.set_open(next)
    }

    /// Adopts the host-owned value.
    ///
    /// Controlled engines mirror `value` from here on; uncontrolled engines
    /// ignore the call. Not subject to the disabled gate: this is the owner
    /// speaking, not a user request.
    pub fn sync_open(&mut self, value: bool) {
        self.open.sync(value);
    }
}
