// Copyright 2025 the Armature Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The selection engine.

use core::hash::Hash;

use armature_core::{ConfigError, OwnedValue, OwnershipMode};
use hashbrown::HashSet;

use crate::registry::{OptionId, OptionProps, OptionRegistry};

/// How many values an engine holds at once. Fixed for the engine lifetime.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum SelectMode {
    /// Zero or one selected value.
    #[default]
    Single,
    /// Any number of selected values.
    Multiple,
}

/// The selected value(s) of a [`SelectState`].
///
/// The variant is the mode: engines never change shape after construction,
/// and a synced value of the wrong shape is ignored.
#[derive(Clone, Debug)]
pub enum Selection<V> {
    /// Zero or one value.
    Single(Option<V>),
    /// A set of values.
    Multiple(HashSet<V>),
}

impl<V: Eq + Hash> Selection<V> {
    /// The empty selection of the given shape.
    pub fn empty(mode: SelectMode) -> Self {
        match mode {
            SelectMode::Single => Self::Single(None),
            SelectMode::Multiple => Self::Multiple(HashSet::new()),
        }
    }

    /// The shape of this selection.
    pub fn mode(&self) -> SelectMode {
        match self {
            Self::Single(_) => SelectMode::Single,
            Self::Multiple(_) => SelectMode::Multiple,
        }
    }

    /// Whether `value` is selected.
    pub fn contains(&self, value: &V) -> bool {
        match self {
            Self::Single(current) => current.as_ref() == Some(value),
            Self::Multiple(set) => set.contains(value),
        }
    }

    /// Whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Single(current) => current.is_none(),
            Self::Multiple(set) => set.is_empty(),
        }
    }

    /// Number of selected values.
    pub fn len(&self) -> usize {
        match self {
            Self::Single(current) => usize::from(current.is_some()),
            Self::Multiple(set) => set.len(),
        }
    }

    /// Iterates the selected values in unspecified order.
    pub fn iter(&self) -> SelectionIter<'_, V> {
        match self {
            Self::Single(current) => SelectionIter(Inner::Single(current.iter())),
            Self::Multiple(set) => SelectionIter(Inner::Multiple(set.iter())),
        }
    }
}

impl<V: Eq + Hash> PartialEq for Selection<V> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Single(a), Self::Single(b)) => a == b,
            (Self::Multiple(a), Self::Multiple(b)) => a == b,
            _ => false,
        }
    }
}

impl<V: Eq + Hash> Eq for Selection<V> {}

/// Iterator over a [`Selection`]'s values.
#[derive(Debug)]
pub struct SelectionIter<'a, V>(Inner<'a, V>);

#[derive(Debug)]
enum Inner<'a, V> {
    Single(core::option::Iter<'a, V>),
    Multiple(hashbrown::hash_set::Iter<'a, V>),
}

impl<'a, V> Iterator for SelectionIter<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<&'a V> {
        match &mut self.0 {
            Inner::Single(iter) => iter.next(),
            Inner::Multiple(iter) => iter.next(),
        }
    }
}

/// Construction options for [`SelectState`].
///
/// Exactly one of [`value`](Self::value) (controlled) and
/// [`default_value`](Self::default_value) (uncontrolled) may be supplied,
/// and whichever is supplied must match [`mode`](Self::mode) in shape.
/// Omitting both yields an uncontrolled engine with an empty selection.
#[derive(Clone, Debug)]
pub struct SelectOptions<V> {
    /// The selection shape.
    pub mode: SelectMode,
    /// Controlled: the host-owned selection at construction.
    pub value: Option<Selection<V>>,
    /// Uncontrolled: the engine-owned starting selection.
    pub default_value: Option<Selection<V>>,
    /// Single mode only: re-selecting the selected option clears it.
    pub toggleable: bool,
    /// Start with requests gated.
    pub disabled: bool,
}

impl<V> Default for SelectOptions<V> {
    fn default() -> Self {
        Self {
            mode: SelectMode::Single,
            value: None,
            default_value: None,
            toggleable: false,
            disabled: false,
        }
    }
}

/// Selection interaction state over an enrolled option set.
///
/// Owns an [`OptionRegistry`] exclusively; bindings interact with options
/// only through the handles returned by [`register`](Self::register) and the
/// engine's own surface, never by reaching into registry storage.
///
/// Selection is by value equality. Deregistering an option leaves the
/// selection untouched; a value with no currently registered carrier simply
/// has no option reporting [`is_selected`](Self::is_selected) until an equal
/// value enrolls again.
#[derive(Clone, Debug)]
pub struct SelectState<V, N> {
    registry: OptionRegistry<V, N>,
    value: OwnedValue<Selection<V>>,
    toggleable: bool,
    disabled: bool,
    active: Option<OptionId>,
    disposed: bool,
}

impl<V: Clone + Eq + Hash, N: Copy> SelectState<V, N> {
    /// Creates an engine from explicit options.
    ///
    /// # Errors
    ///
    /// [`ConfigError::ConflictingOwnership`] when both `value` and
    /// `default_value` are supplied; [`ConfigError::ModeMismatch`] when the
    /// supplied selection's shape contradicts `mode`.
    pub fn new(options: SelectOptions<V>) -> Result<Self, ConfigError> {
        let value = match (options.value, options.default_value) {
            (Some(_), Some(_)) => return Err(ConfigError::ConflictingOwnership("Select")),
            (Some(value), None) => {
                if value.mode() != options.mode {
                    return Err(ConfigError::ModeMismatch("Select"));
                }
                OwnedValue::controlled(value)
            }
            (None, Some(default)) => {
                if default.mode() != options.mode {
                    return Err(ConfigError::ModeMismatch("Select"));
                }
                OwnedValue::uncontrolled(default)
            }
            (None, None) => OwnedValue::uncontrolled(Selection::empty(options.mode)),
        };
        Ok(Self {
            registry: OptionRegistry::new(),
            value,
            toggleable: options.toggleable,
            disabled: options.disabled,
            active: None,
            disposed: false,
        })
    }

    /// A controlled engine mirroring the host's selection; the mode is the
    /// shape of `value`.
    pub fn controlled(value: Selection<V>) -> Self {
        Self {
            registry: OptionRegistry::new(),
            value: OwnedValue::controlled(value),
            toggleable: false,
            disabled: false,
            active: None,
            disposed: false,
        }
    }

    /// An uncontrolled engine starting from `default`; the mode is the shape
    /// of `default`.
    pub fn uncontrolled(default: Selection<V>) -> Self {
        Self {
            registry: OptionRegistry::new(),
            value: OwnedValue::uncontrolled(default),
            toggleable: false,
            disabled: false,
            active: None,
            disposed: false,
        }
    }

    /// Sets the single-mode toggle-to-deselect flag. Builder-style companion
    /// to the typed constructors.
    pub fn with_toggleable(mut self, toggleable: bool) -> Self {
        self.toggleable = toggleable;
        self
    }

    /// The selection shape.
    pub fn mode(&self) -> SelectMode {
        self.value.get().mode()
    }

    /// Who owns the selection.
    pub fn ownership(&self) -> OwnershipMode {
        self.value.mode()
    }

    /// The current selection snapshot.
    pub fn value(&self) -> &Selection<V> {
        self.value.get()
    }

    /// Whether single-mode re-selection clears.
    pub fn toggleable(&self) -> bool {
        self.toggleable
    }

    /// Whether requests are currently gated engine-wide.
    pub fn disabled(&self) -> bool {
        self.disabled
    }

    /// Gates or ungates the whole engine.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    /// Whether the engine has been disposed.
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Closes enrollment. Late [`register`](Self::register) calls are
    /// rejected; everything already enrolled keeps working.
    pub fn dispose(&mut self) {
        self.disposed = true;
    }

    /// Enrolls an option. Returns `None` once the engine is disposed.
    pub fn register(&mut self, value: V, node: N, props: OptionProps) -> Option<OptionId> {
        if self.disposed {
            return None;
        }
        Some(self.registry.register(value, node, props))
    }

    /// Withdraws an option, leaving the selection untouched. Clears the
    /// active marker if it pointed at the withdrawn option.
    pub fn deregister(&mut self, id: OptionId) -> bool {
        let removed = self.registry.deregister(id);
        if removed && self.active == Some(id) {
            self.active = None;
        }
        removed
    }

    /// Whether the option is gated: the engine-wide flag or the option's
    /// own, whichever is set.
    pub fn option_disabled(&self, id: OptionId) -> bool {
        self.disabled || self.registry.disabled(id)
    }

    /// Updates one option's disabled flag.
    pub fn set_option_disabled(&mut self, id: OptionId, disabled: bool) -> bool {
        self.registry.set_disabled(id, disabled)
    }

    /// Requests selection of the option's value.
    ///
    /// Gated to `None` while the engine or the option is disabled, and for
    /// handles that are not currently enrolled. Otherwise computes the next
    /// selection (single: replace, or clear when toggleable and already
    /// selected; multiple: toggle membership), applies it when uncontrolled,
    /// and returns it as the notification.
    pub fn select(&mut self, id: OptionId) -> Option<Selection<V>> {
        if !self.registry.contains(id) || self.option_disabled(id) {
            return None;
        }
        let value = self.registry.value(id)?.clone();
        let next = match self.value.get() {
            Selection::Single(current) => {
                if self.toggleable && current.as_ref() == Some(&value) {
                    Selection::Single(None)
                } else {
                    Selection::Single(Some(value))
                }
            }
            Selection::Multiple(current) => {
                let mut set = current.clone();
                if !set.remove(&value) {
                    set.insert(value);
                }
                Selection::Multiple(set)
            }
        };
        self.value.write(next.clone());
        Some(next)
    }

    /// Whether the option's value is currently selected.
    pub fn is_selected(&self, id: OptionId) -> bool {
        match self.registry.value(id) {
            Some(value) => self.value.get().contains(value),
            None => false,
        }
    }

    /// Whether `value` is currently selected, registered carrier or not.
    pub fn is_selected_value(&self, value: &V) -> bool {
        self.value.get().contains(value)
    }

    /// Adopts the host-owned selection; ignored when uncontrolled or when
    /// the shape contradicts the engine mode.
    pub fn sync_value(&mut self, value: Selection<V>) {
        if value.mode() != self.mode() {
            return;
        }
        self.value.sync(value);
    }

    /// Marks an enrolled option as the active one. Never moves host focus.
    pub fn focus(&mut self, id: OptionId) {
        if self.registry.contains(id) {
            self.active = Some(id);
        }
    }

    /// Clears the active marker, but only if `id` still holds it.
    pub fn blur(&mut self, id: OptionId) {
        if self.active == Some(id) {
            self.active = None;
        }
    }

    /// The active option, if any.
    pub fn active(&self) -> Option<OptionId> {
        self.active
    }

    /// Whether `id` is the active option.
    pub fn is_active(&self, id: OptionId) -> bool {
        self.active == Some(id)
    }

    /// The host node an enrolled option lives on.
    pub fn node(&self, id: OptionId) -> Option<N> {
        self.registry.node(id)
    }

    /// Moves the active marker to the next traversable option and returns
    /// it. With no active option, starts at the first.
    ///
    /// Returns `None` (and leaves the marker alone) when nothing is
    /// traversable.
    pub fn focus_next(&mut self) -> Option<OptionId> {
        let target = match self.active {
            Some(current) => self.registry.next(current),
            None => self.registry.first(),
        }?;
        self.active = Some(target);
        Some(target)
    }

    /// Moves the active marker to the previous traversable option and
    /// returns it. With no active option, starts at the last.
    pub fn focus_prev(&mut self) -> Option<OptionId> {
        let target = match self.active {
            Some(current) => self.registry.prev(current),
            None => self.registry.last(),
        }?;
        self.active = Some(target);
        Some(target)
    }

    /// Moves the active marker to the first traversable option.
    pub fn focus_first(&mut self) -> Option<OptionId> {
        let target = self.registry.first()?;
        self.active = Some(target);
        Some(target)
    }

    /// Moves the active marker to the last traversable option.
    pub fn focus_last(&mut self) -> Option<OptionId> {
        let target = self.registry.last()?;
        self.active = Some(target);
        Some(target)
    }
}
