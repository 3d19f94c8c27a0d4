// Copyright 2025 the Armature Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The ordered option collection and its traversal.

use core::cmp::Ordering;

use smallvec::SmallVec;

/// Handle to one registered option.
///
/// Minted by [`OptionRegistry::register`] and logically invalidated by
/// [`OptionRegistry::deregister`]. Operations on a stale handle degrade to
/// `None`/no-op results and never disturb other entries.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct OptionId(u64);

/// Registration properties for one option.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct OptionProps {
    /// Enroll in a non-selectable, non-traversable state.
    pub disabled: bool,
    /// Explicit ordering key for hosts that mount out of document order.
    ///
    /// Ordered entries sort before unordered ones; ties and unordered
    /// entries fall back to registration sequence.
    pub order: Option<i32>,
}

#[derive(Clone, Debug)]
struct Entry<V, N> {
    id: OptionId,
    value: V,
    node: N,
    disabled: bool,
    order: Option<i32>,
    seq: u64,
}

impl<V, N> Entry<V, N> {
    fn compare(&self, other: &Self) -> Ordering {
        match (self.order, other.order) {
            (Some(a), Some(b)) => a.cmp(&b).then_with(|| self.seq.cmp(&other.seq)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => self.seq.cmp(&other.seq),
        }
    }
}

/// An ordered collection of enrolled options.
///
/// Entries hold a value, a non-owning host node handle, and a disabled flag.
/// The collection maintains document order and answers the traversal queries
/// keyboard handlers need: cyclic next/prev that skip disabled entries, and
/// first/last for Home/End.
///
/// Typical registries are small (a listbox's options, an accordion's
/// panels); storage is inline up to eight entries.
#[derive(Clone, Debug, Default)]
pub struct OptionRegistry<V, N> {
    entries: SmallVec<[Entry<V, N>; 8]>,
    next_seq: u64,
}

impl<V, N: Copy> OptionRegistry<V, N> {
    /// An empty registry.
    pub fn new() -> Self {
        Self {
            entries: SmallVec::new(),
            next_seq: 0,
        }
    }

    /// Number of enrolled options, disabled ones included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no options are enrolled.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Enrolls an option and returns its handle.
    ///
    /// The entry is placed in document order: after everything already
    /// enrolled unless [`OptionProps::order`] says otherwise.
    pub fn register(&mut self, value: V, node: N, props: OptionProps) -> OptionId {
        let seq = self.next_seq;
        self.next_seq += 1;
        let entry = Entry {
            id: OptionId(seq),
            value,
            node,
            disabled: props.disabled,
            order: props.order,
            seq,
        };
        let at = self
            .entries
            .iter()
            .position(|existing| entry.compare(existing) == Ordering::Less)
            .unwrap_or(self.entries.len());
        self.entries.insert(at, entry);
        OptionId(seq)
    }

    /// Withdraws an option. Returns whether the handle was present.
    pub fn deregister(&mut self, id: OptionId) -> bool {
        match self.entries.iter().position(|e| e.id == id) {
            Some(at) => {
                self.entries.remove(at);
                true
            }
            None => false,
        }
    }

    /// Whether the handle is currently enrolled.
    pub fn contains(&self, id: OptionId) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    /// The value an enrolled option identifies.
    pub fn value(&self, id: OptionId) -> Option<&V> {
        self.entries.iter().find(|e| e.id == id).map(|e| &e.value)
    }

    /// The host node an enrolled option lives on.
    pub fn node(&self, id: OptionId) -> Option<N> {
        self.entries.iter().find(|e| e.id == id).map(|e| e.node)
    }

    /// Whether an enrolled option is disabled. Stale handles report `false`.
    pub fn disabled(&self, id: OptionId) -> bool {
        self.entries
            .iter()
            .find(|e| e.id == id)
            .is_some_and(|e| e.disabled)
    }

    /// Updates an option's disabled flag. Returns whether the handle was
    /// present.
    pub fn set_disabled(&mut self, id: OptionId, disabled: bool) -> bool {
        match self.entries.iter_mut().find(|e| e.id == id) {
            Some(entry) => {
                entry.disabled = disabled;
                true
            }
            None => false,
        }
    }

    /// Handles in document order.
    pub fn ids(&self) -> impl Iterator<Item = OptionId> {
        self.entries.iter().map(|e| e.id)
    }

    /// Values in document order.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.iter().map(|e| &e.value)
    }

    /// The first non-disabled option, if any.
    pub fn first(&self) -> Option<OptionId> {
        self.entries.iter().find(|e| !e.disabled).map(|e| e.id)
    }

    /// The last non-disabled option, if any.
    pub fn last(&self) -> Option<OptionId> {
        self.entries.iter().rev().find(|e| !e.disabled).map(|e| e.id)
    }

    /// The next non-disabled option after `id`, wrapping cyclically.
    ///
    /// A full cycle without a candidate (every other entry disabled) yields
    /// the same handle unchanged; a stale handle yields `None`.
    pub fn next(&self, id: OptionId) -> Option<OptionId> {
        self.neighbor(id, Direction::Forward)
    }

    /// The previous non-disabled option before `id`, wrapping cyclically.
    ///
    /// Same edge behavior as [`next`](Self::next).
    pub fn prev(&self, id: OptionId) -> Option<OptionId> {
        self.neighbor(id, Direction::Backward)
    }

    fn neighbor(&self, id: OptionId, direction: Direction) -> Option<OptionId> {
        let from = self.entries.iter().position(|e| e.id == id)?;
        let len = self.entries.len();
        let mut at = from;
        loop {
            at = match direction {
                Direction::Forward => (at + 1) % len,
                Direction::Backward => (at + len - 1) % len,
            };
            if at == from {
                // Full cycle: nothing else is traversable, stay put.
                return Some(id);
            }
            if !self.entries[at].disabled {
                return Some(self.entries[at].id);
            }
        }
    }
}

#[derive(Copy, Clone)]
enum Direction {
    Forward,
    Backward,
}
