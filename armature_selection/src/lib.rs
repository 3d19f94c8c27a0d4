// Copyright 2025 the Armature Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=armature_selection --heading-base-level=0

//! Armature Selection: headless selection state for option-bearing widgets.
//!
//! Listboxes, accordions, radio groups, and tab strips all share one shape:
//! a set of options enrolls with a parent engine, the engine tracks which
//! value(s) are chosen and which option currently has interaction focus, and
//! keyboard traversal walks the options in document order skipping disabled
//! ones. This crate carries that shape once, headlessly.
//!
//! Two layers:
//!
//! - [`OptionRegistry`]: the ordered collection. Options enroll and withdraw
//!   at mount/unmount; traversal ([`OptionRegistry::next`],
//!   [`OptionRegistry::prev`], [`OptionRegistry::first`],
//!   [`OptionRegistry::last`]) is cyclic and skips disabled entries.
//! - [`SelectState`]: the engine. Owns a registry plus the selected
//!   [`Selection`] (controlled or uncontrolled), the toggle-to-deselect
//!   flag, the disabled gate, and the active option.
//!
//! Selection is by *value equality*: an option identifies a value, and a
//! value stays selected even while no registered option currently carries it
//! (options unmount without unselecting). Mutators return the change
//! notification (`Some(next_selection)`) instead of invoking a callback, as
//! everywhere in Armature; `None` means the request was gated.
//!
//! The engine never moves real focus. [`SelectState::focus_next`] and
//! friends move the *active option* marker and hand back the option so the
//! binding can focus its node through `armature_focus`.
//!
//! ## Example
//!
//! ```
//! use armature_selection::{OptionProps, Selection, SelectState};
//!
//! // An uncontrolled single-select listbox over string values; nodes are
//! // whatever small ids the host names elements by.
//! let mut listbox: SelectState<&str, u32> =
//!     SelectState::uncontrolled(Selection::Single(None));
//!
//! let apple = listbox.register("apple", 1, OptionProps::default()).unwrap();
//! let pear = listbox.register("pear", 2, OptionProps::default()).unwrap();
//!
//! assert_eq!(
//!     listbox.select(apple),
//!     Some(Selection::Single(Some("apple")))
//! );
//! assert!(listbox.is_selected(apple));
//!
//! // Arrow-key handling: move the active option, then focus its node.
//! let active = listbox.focus_next().unwrap();
//! assert_eq!(listbox.node(active), Some(1));
//! assert_eq!(listbox.focus_next(), Some(pear));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

mod registry;
mod select;

pub use registry::{OptionId, OptionProps, OptionRegistry};
pub use select::{SelectMode, SelectOptions, SelectState, Selection, SelectionIter};
