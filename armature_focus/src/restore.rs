// Copyright 2025 the Armature Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Focus save and restore around transient panels.

use crate::tree::FocusTree;

/// A one-shot capture of where focus was.
///
/// Bindings save the active node right before moving focus into a transient
/// panel and load it after the panel closes, so dismissal puts the user back
/// where they were. The capture holds a non-owning handle; if the saved node
/// left the document in the meantime, [`load`](Self::load) simply reports
/// that nothing was restored and the host's fallback applies.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FocusRestore<N> {
    saved: Option<N>,
}

impl<N> Default for FocusRestore<N> {
    fn default() -> Self {
        Self { saved: None }
    }
}

impl<N: Copy + Eq> FocusRestore<N> {
    /// An empty restore point.
    pub fn new() -> Self {
        Self::default()
    }

    /// Captures the currently active node, overwriting any previous capture.
    ///
    /// Capturing "nothing focused" is valid and makes the next
    /// [`load`](Self::load) a no-op.
    pub fn save<T: FocusTree<Node = N>>(&mut self, tree: &T) {
        self.saved = tree.active();
    }

    /// The captured node, if any.
    pub fn saved(&self) -> Option<N> {
        self.saved
    }

    /// Restores focus to the captured node and clears the capture.
    ///
    /// Returns the node focus moved to, or `None` when there was no capture
    /// or the captured node is no longer attached. Idempotent: a second call
    /// without an intervening [`save`](Self::save) is a no-op.
    pub fn load<T: FocusTree<Node = N>>(&mut self, tree: &mut T) -> Option<N> {
        let node = self.saved.take()?;
        if !tree.is_attached(node) {
            log::debug!("saved focus target left the document, restore skipped");
            return None;
        }
        tree.focus(node);
        log::debug!("restored focus to the saved target");
        Some(node)
    }
}
