// Copyright 2025 the Armature Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=armature_disclosure --heading-base-level=0

//! Armature Disclosure: headless open/close state for disclosure-style widgets.
//!
//! A disclosure unit is a trigger plus a panel whose visibility it governs:
//! dialogs, popovers, accordion panels, menus. This crate carries the
//! interaction state of one such unit with no rendering opinion. Bindings own
//! the elements; the engine owns (or mirrors) the boolean and tells the
//! binding what to announce.
//!
//! State ownership is decided once, at construction:
//!
//! - *Uncontrolled*: the engine owns the boolean and mutates it in place.
//! - *Controlled*: the host owns the boolean. The engine forwards change
//!   requests through its return value and mirrors whatever the host last
//!   pushed back in with [`DisclosureState::sync_open`].
//!
//! Mutators return the change notification instead of invoking a callback:
//! `Some(next)` is the value the binding must announce (and, when controlled,
//! deliver to the external owner), `None` means the request was gated and
//! nothing happened.
//!
//! The engine performs no focus or DOM work. Bindings compose `armature_focus`
//! for initial focus, trapping, and restoration around these transitions.
//!
//! ## API overview
//!
//! - [`DisclosureState`]: the open/closed machine;
//!   [`DisclosureState::set_open`] / [`DisclosureState::toggle`] /
//!   [`DisclosureState::sync_open`].
//! - [`DisclosureOptions`]: construction options; supplying both the
//!   controlled value and the uncontrolled default is a [`ConfigError`].
//! - [`DisclosureIds`]: per-instance stable ids for `aria-*` wiring.
//! - [`ToggleState`]: the checked/pressed sibling machine for checkbox,
//!   switch, and toggle-button widgets.
//!
//! ## Example
//!
//! ```
//! use armature_disclosure::DisclosureState;
//!
//! let mut dialog = DisclosureState::uncontrolled(false);
//! assert_eq!(dialog.toggle(), Some(true));
//! assert!(dialog.is_open());
//!
//! dialog.set_disabled(true);
//! assert_eq!(dialog.set_open(false), None); // gated, nothing to announce
//! assert!(dialog.is_open());
//! ```
//!
//! This crate is `no_std` and does not allocate.
//!
//! [`ConfigError`]: armature_core::ConfigError

#![no_std]

mod state;
mod toggle;

pub use state::{DisclosureIds, DisclosureOptions, DisclosureState};
pub use toggle::{ToggleOptions, ToggleState};
