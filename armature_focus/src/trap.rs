// Copyright 2025 the Armature Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tab-order containment for modal panels.

use crate::event::{Key, KeyEvent, Modifiers};
use crate::navigate::list_focusable;
use crate::tree::FocusTree;

/// What the trap decided about one key event.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TrapOutcome<N> {
    /// The trap consumed the event and moved focus to the contained node.
    /// The host must suppress its default traversal for this event.
    Redirected(N),
    /// Not a boundary condition. The host's default traversal proceeds
    /// untouched.
    Pass,
}

/// A focus trap scoped to one container.
///
/// The trap intercepts sequential traversal only at the two boundary
/// conditions: Tab on the last focusable descendant wraps to the first, and
/// Shift+Tab on the first wraps to the last. When focus sits outside the
/// container entirely (or nothing is focused), the next Tab pulls it back to
/// the respective end. Every other event, including Tab in the middle of
/// the sequence, is reported as [`TrapOutcome::Pass`] and left to the host.
///
/// The value's lifetime is the open panel's: create it on open (after
/// moving initial focus), drop it on close, and build a fresh one on reopen.
/// It holds no host resources, so dropping it cannot leak handlers.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FocusTrap<N> {
    container: N,
}

impl<N: Copy + Eq> FocusTrap<N> {
    /// A trap scoped to `container`.
    pub fn new(container: N) -> Self {
        Self { container }
    }

    /// The trapped container.
    pub fn container(&self) -> N {
        self.container
    }

    /// Decides one key event against the current tree.
    ///
    /// The focusable list is recomputed on every call; a container whose
    /// contents changed since the last event is handled correctly without
    /// any invalidation step. With no focusable descendants at all, every
    /// event passes through.
    pub fn on_key<T: FocusTree<Node = N>>(&self, tree: &mut T, event: KeyEvent) -> TrapOutcome<N> {
        if event.key != Key::Tab {
            return TrapOutcome::Pass;
        }
        let list = list_focusable(tree, self.container);
        let (Some(&first), Some(&last)) = (list.first(), list.last()) else {
            return TrapOutcome::Pass;
        };
        let backward = event.modifiers.contains(Modifiers::SHIFT);

        let inside = tree
            .active()
            .filter(|&node| tree.descendants(self.container).contains(&node));
        let target = match inside {
            Some(node) => {
                match list.iter().position(|&candidate| candidate == node) {
                    // Inside the container but not a candidate: native order
                    // proceeds from wherever the host put focus.
                    None => return TrapOutcome::Pass,
                    Some(0) if backward => last,
                    Some(at) if !backward && at == list.len() - 1 => first,
                    Some(_) => return TrapOutcome::Pass,
                }
            }
            // Focus escaped the container, or nothing is focused: pull it
            // back in at the boundary the traversal direction implies.
            None => {
                if backward {
                    last
                } else {
                    first
                }
            }
        };
        tree.focus(target);
        log::debug!(
            "focus trap redirected {} across the boundary of {} candidates",
            if backward { "Shift+Tab" } else { "Tab" },
            list.len()
        );
        TrapOutcome::Redirected(target)
    }
}
