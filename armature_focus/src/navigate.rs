// Copyright 2025 the Armature Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Document-order focusable enumeration and sequential movement.

use alloc::vec::Vec;

use crate::tree::FocusTree;

/// The focusable descendants of `container`, in document order.
///
/// A pure query: document-order descendants filtered by
/// [`FocusProps::focusable`](crate::FocusProps::focusable). Recomputed from
/// the live tree on every call, so mounts, unmounts, and property changes
/// between calls are always reflected.
pub fn list_focusable<T: FocusTree + ?Sized>(tree: &T, container: T::Node) -> Vec<T::Node> {
    tree.descendants(container)
        .into_iter()
        .filter(|&node| tree.props(node).focusable())
        .collect()
}

/// Moves focus to the first focusable descendant of `container`.
///
/// Used for initial focus when a panel opens, and for Home. Returns the
/// focused node, or `None` (no-op) when nothing is focusable.
pub fn focus_first<T: FocusTree + ?Sized>(tree: &mut T, container: T::Node) -> Option<T::Node> {
    let list = list_focusable(tree, container);
    let target = *list.first()?;
    tree.focus(target);
    log::debug!("focus moved to the first of {} candidates", list.len());
    Some(target)
}

/// Moves focus to the last focusable descendant of `container`. Used for
/// End.
pub fn focus_last<T: FocusTree + ?Sized>(tree: &mut T, container: T::Node) -> Option<T::Node> {
    let list = list_focusable(tree, container);
    let target = *list.last()?;
    tree.focus(target);
    log::debug!("focus moved to the last of {} candidates", list.len());
    Some(target)
}

/// Moves focus from `from` to the next focusable descendant of `container`,
/// wrapping past the end.
///
/// Returns the focused node, or `None` (no-op) when `from` is not among the
/// container's focusable descendants or nothing is focusable. Arrow-key
/// traversal in toolbars, accordions, and feeds is built on this.
pub fn focus_next<T: FocusTree + ?Sized>(
    tree: &mut T,
    container: T::Node,
    from: T::Node,
) -> Option<T::Node> {
    step(tree, container, from, Step::Forward)
}

/// Moves focus from `from` to the previous focusable descendant of
/// `container`, wrapping past the start.
pub fn focus_prev<T: FocusTree + ?Sized>(
    tree: &mut T,
    container: T::Node,
    from: T::Node,
) -> Option<T::Node> {
    step(tree, container, from, Step::Backward)
}

#[derive(Copy, Clone)]
enum Step {
    Forward,
    Backward,
}

fn step<T: FocusTree + ?Sized>(
    tree: &mut T,
    container: T::Node,
    from: T::Node,
    step: Step,
) -> Option<T::Node> {
    let list = list_focusable(tree, container);
    let at = list.iter().position(|&node| node == from)?;
    let to = match step {
        Step::Forward => (at + 1) % list.len(),
        Step::Backward => (at + list.len() - 1) % list.len(),
    };
    let target = list[to];
    tree.focus(target);
    log::debug!(
        "focus moved from candidate {} to {} of {}",
        at + 1,
        to + 1,
        list.len()
    );
    Some(target)
}
