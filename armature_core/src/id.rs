// Copyright 2025 the Armature Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Process-unique identifiers for wiring related elements together.

use core::fmt;
use core::num::NonZeroU64;
use core::sync::atomic::{AtomicU64, Ordering};

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// A process-unique, stable identifier.
///
/// Engines mint one id per role (owner, trigger, panel) at construction and
/// keep it for their whole lifetime. Bindings render ids through
/// [`Display`](core::fmt::Display) and place the resulting string on both ends
/// of an `aria-controls` / `aria-labelledby` style relationship.
///
/// Ids are never reused within a process.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UniqueId(NonZeroU64);

impl UniqueId {
    /// Mints a fresh identifier, distinct from every id minted before it.
    pub fn fresh() -> Self {
        let raw = NEXT_ID.fetch_add(1, Ordering::Relaxed);
        Self(NonZeroU64::new(raw).expect("id counter starts at one"))
    }
}

impl fmt::Display for UniqueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a-{}", self.0)
    }
}
