// Copyright 2025 the Armature Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Key event payloads handed to the trap and to widget keyboard handlers.

bitflags::bitflags! {
    /// Modifier keys held during a key event.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// Shift.
        const SHIFT = 0b0000_0001;
        /// Control.
        const CTRL = 0b0000_0010;
        /// Alt/Option.
        const ALT = 0b0000_0100;
        /// Meta/Command/Windows.
        const META = 0b0000_1000;
    }
}

/// The navigation-relevant keys.
///
/// This is deliberately not a full keyboard model: it names the keys the
/// widget patterns bind (sequential traversal, dismissal, option movement,
/// paging) and nothing else. Hosts translate their native events into these.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// Sequential traversal.
    Tab,
    /// Activation.
    Enter,
    /// Activation/toggle.
    Space,
    /// Dismissal.
    Escape,
    /// Option/line movement up.
    ArrowUp,
    /// Option/line movement down.
    ArrowDown,
    /// Option movement left.
    ArrowLeft,
    /// Option movement right.
    ArrowRight,
    /// Jump to the first candidate.
    Home,
    /// Jump to the last candidate.
    End,
    /// Page-wise movement up (feed patterns).
    PageUp,
    /// Page-wise movement down (feed patterns).
    PageDown,
}

/// One key event: the key plus the modifiers held with it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    /// The pressed key.
    pub key: Key,
    /// Modifiers held during the press.
    pub modifiers: Modifiers,
}

impl KeyEvent {
    /// An unmodified key press.
    pub fn new(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::empty(),
        }
    }

    /// A shifted key press (`Shift+Tab` and friends).
    pub fn shifted(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::SHIFT,
        }
    }

    /// A key press with explicit modifiers.
    pub fn with_modifiers(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    /// Whether Shift was held.
    pub fn shift(&self) -> bool {
        self.modifiers.contains(Modifiers::SHIFT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_set_expected_modifiers() {
        assert!(!KeyEvent::new(Key::Tab).shift());
        assert!(KeyEvent::shifted(Key::Tab).shift());
        let chord = KeyEvent::with_modifiers(Key::Home, Modifiers::CTRL | Modifiers::SHIFT);
        assert!(chord.shift());
        assert!(chord.modifiers.contains(Modifiers::CTRL));
    }
}
