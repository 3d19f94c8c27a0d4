// Copyright 2025 the Armature Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=armature_core --heading-base-level=0

//! Armature Core: shared foundations for headless widget engines.
//!
//! The engine crates (`armature_disclosure`, `armature_selection`) all face the
//! same two wiring questions: who owns a piece of interaction state, and how do
//! related elements find each other. This crate answers both once.
//!
//! - [`OwnedValue`] is the controlled/uncontrolled ownership cell. An
//!   *uncontrolled* value is owned by the engine and mutated in place; a
//!   *controlled* value is owned by the host, and the engine only forwards
//!   change requests while mirroring whatever the host last pushed in with
//!   [`OwnedValue::sync`].
//! - [`UniqueId`] mints process-unique, stable identifiers that bindings render
//!   into `aria-controls`/`aria-labelledby` style attributes.
//! - [`ConfigError`] is the construction-time error taxonomy shared by every
//!   engine: misconfiguration fails fast and synchronously; anything after
//!   construction degrades to a silent no-op instead.
//!
//! ## API overview
//!
//! - [`OwnedValue`]: a value with a declared owner; [`OwnedValue::write`]
//!   stores only when uncontrolled, [`OwnedValue::sync`] only when controlled.
//! - [`OwnershipMode`]: the `Controlled` / `Uncontrolled` tag.
//! - [`UniqueId`]: opaque stable identifier with a [`Display`](core::fmt::Display)
//!   rendering for attribute wiring.
//! - [`ConfigError`]: conflicting ownership, mode mismatch, missing context.
//!
//! ## Example
//!
//! ```
//! use armature_core::{OwnedValue, OwnershipMode};
//!
//! let mut open = OwnedValue::uncontrolled(false);
//! open.write(true);
//! assert!(*open.get());
//!
//! let mut open = OwnedValue::controlled(false);
//! open.write(true); // discarded; the host owns this value
//! assert!(!*open.get());
//! open.sync(true); // the host pushed a new value in
//! assert!(*open.get());
//! assert_eq!(open.mode(), OwnershipMode::Controlled);
//! ```
//!
//! This crate is `no_std` and does not allocate.

#![no_std]

mod error;
mod id;
mod owned;

pub use error::ConfigError;
pub use id::UniqueId;
pub use owned::{OwnedValue, OwnershipMode};
