// Copyright 2025 the Armature Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=armature_focus --heading-base-level=0

//! Armature Focus: sequential focus navigation, traps, and restore points.
//!
//! This crate models focus management as a combination of:
//! - A **host document abstraction** ([`FocusTree`]) that reports descendants in
//!   document order together with per-node [`FocusProps`], exposes the active
//!   node, and receives focus requests. Implement it once per UI toolkit.
//! - **Sequential navigation** ([`focus_first`], [`focus_next`], and friends)
//!   over the focusable descendants of a container, wrapping at the ends and
//!   skipping nodes that are hidden, disabled, or opted out of the tab
//!   sequence.
//! - A **focus trap** ([`FocusTrap`]) that keeps Tab cycling inside a modal
//!   container by redirecting boundary crossings and pulling stray focus back
//!   in, while letting every other key pass through untouched.
//! - A **restore point** ([`FocusRestore`]) that captures the active node
//!   before a takeover and hands focus back afterwards, skipping targets that
//!   have since left the document.
//!
//! Nothing here renders, measures, or listens for events. Hosts feed key
//! events in and apply the returned decisions; every query is answered live
//! against the current document, so there is no cache to invalidate.
//!
//! ## API overview
//!
//! - [`FocusTree`]: the host document, generic over a small copyable node
//!   handle [`FocusTree::Node`].
//! - [`FocusProps`] / [`NodeFlags`]: per-node focusability (visibility,
//!   disabled state, native interactivity, explicit tab stop).
//! - [`list_focusable`], [`focus_first`], [`focus_last`], [`focus_next`],
//!   [`focus_prev`]: sequential navigation in document order.
//! - [`FocusTrap`] / [`TrapOutcome`]: Tab containment for modal surfaces.
//! - [`FocusRestore`]: capture and later restore the focus position.
//! - [`KeyEvent`] / [`Key`] / [`Modifiers`]: the minimal key model the trap
//!   consumes.
//! - [`anchor`]: viewport-aware placement geometry for anchored panels,
//!   expressed in terms of [`kurbo::Rect`] like the rest of the Armature
//!   crates.
//!
//! ## Minimal example
//!
//! Three buttons in a row, a Tab step, and a trap redirecting at the
//! boundary:
//!
//! ```rust
//! use armature_focus::{
//!     FocusProps, FocusTrap, FocusTree, Key, KeyEvent, TrapOutcome, focus_first, focus_next,
//! };
//!
//! // Container 0 holds buttons 1, 2, 3.
//! struct Row {
//!     active: Option<u8>,
//! }
//!
//! impl FocusTree for Row {
//!     type Node = u8;
//!
//!     fn descendants(&self, container: u8) -> Vec<u8> {
//!         if container == 0 { vec![1, 2, 3] } else { Vec::new() }
//!     }
//!
//!     fn props(&self, _node: u8) -> FocusProps {
//!         FocusProps::interactive()
//!     }
//!
//!     fn active(&self) -> Option<u8> {
//!         self.active
//!     }
//!
//!     fn focus(&mut self, node: u8) {
//!         self.active = Some(node);
//!     }
//!
//!     fn is_attached(&self, node: u8) -> bool {
//!         node <= 3
//!     }
//! }
//!
//! let mut row = Row { active: None };
//!
//! // Focus the first button, then step forward.
//! assert_eq!(focus_first(&mut row, 0), Some(1));
//! assert_eq!(focus_next(&mut row, 0, 1), Some(2));
//!
//! // From the last button, a trapped Tab wraps back to the first.
//! let trap = FocusTrap::new(0);
//! row.focus(3);
//! assert_eq!(
//!     trap.on_key(&mut row, KeyEvent::new(Key::Tab)),
//!     TrapOutcome::Redirected(1),
//! );
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for dependencies such as `kurbo`.
//! - `libm`: enables `no_std` + `alloc` builds that rely on `libm` for
//!   floating-point math.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod anchor;

mod event;
mod navigate;
mod restore;
#[cfg(test)]
mod testhost;
mod trap;
mod tree;

pub use event::{Key, KeyEvent, Modifiers};
pub use navigate::{focus_first, focus_last, focus_next, focus_prev, list_focusable};
pub use restore::FocusRestore;
pub use trap::{FocusTrap, TrapOutcome};
pub use tree::{FocusProps, FocusTree, NodeFlags};
