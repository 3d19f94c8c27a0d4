// Copyright 2025 the Armature Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Controlled/uncontrolled ownership of interaction state.

/// Who owns a piece of interaction state.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum OwnershipMode {
    /// The host owns the value. The engine mirrors what the host last
    /// supplied and forwards change requests without applying them.
    Controlled,
    /// The engine owns the value and mutates it in place.
    Uncontrolled,
}

/// A value with a declared owner, fixed at construction.
///
/// This is the single mechanism behind every controlled/uncontrolled engine:
/// the engine logic calls [`write`](Self::write) unconditionally when the user
/// requests a change, and the cell decides whether the request lands (the
/// engine owns the value) or is discarded in favor of the host's next
/// [`sync`](Self::sync) (the host owns it). Reads through
/// [`get`](Self::get) always reflect the current snapshot, never a queue.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OwnedValue<T> {
    value: T,
    mode: OwnershipMode,
}

impl<T> OwnedValue<T> {
    /// A host-owned value starting from the host's current `value`.
    pub fn controlled(value: T) -> Self {
        Self {
            value,
            mode: OwnershipMode::Controlled,
        }
    }

    /// An engine-owned value starting from `default`.
    pub fn uncontrolled(default: T) -> Self {
        Self {
            value: default,
            mode: OwnershipMode::Uncontrolled,
        }
    }

    /// The declared owner.
    pub fn mode(&self) -> OwnershipMode {
        self.mode
    }

    /// Whether the host owns this value.
    pub fn is_controlled(&self) -> bool {
        self.mode == OwnershipMode::Controlled
    }

    /// The current snapshot.
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Stores an internally requested value.
    ///
    /// No-op when controlled: the request is forwarded to the host by the
    /// caller, and the host's next [`sync`](Self::sync) is authoritative.
    pub fn write(&mut self, next: T) {
        if self.mode == OwnershipMode::Uncontrolled {
            self.value = next;
        }
    }

    /// Adopts the externally supplied value.
    ///
    /// No-op when uncontrolled: an engine-owned value has no external owner
    /// to adopt from.
    pub fn sync(&mut self, value: T) {
        if self.mode == OwnershipMode::Controlled {
            self.value = value;
        }
    }
}
