// Copyright 2025 the Armature Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The host document abstraction and per-node focus properties.

use alloc::vec::Vec;

bitflags::bitflags! {
    /// Per-node display and interaction flags consulted by the navigator.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct NodeFlags: u8 {
        /// Node is rendered. Hidden nodes are never focusable.
        const VISIBLE = 0b0000_0001;
        /// Node refuses interaction. Disabled nodes are never focusable.
        const DISABLED = 0b0000_0010;
        /// Node is natively interactive (button-like) and joins the tab
        /// sequence without an explicit tab index.
        const INTERACTIVE = 0b0000_0100;
    }
}

impl Default for NodeFlags {
    fn default() -> Self {
        Self::VISIBLE
    }
}

/// Focus-relevant properties of one node, reported by the host.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct FocusProps {
    /// Display and interaction flags.
    pub flags: NodeFlags,
    /// Explicit tab stop. A non-negative value joins the tab sequence even
    /// for non-interactive nodes; a negative value always leaves it, even
    /// for interactive ones.
    pub tab_index: Option<i32>,
}

impl FocusProps {
    /// A visible, natively interactive node. The common case for buttons,
    /// links, and inputs.
    pub fn interactive() -> Self {
        Self {
            flags: NodeFlags::VISIBLE | NodeFlags::INTERACTIVE,
            tab_index: None,
        }
    }

    /// Sets the explicit tab stop.
    pub fn with_tab_index(mut self, tab_index: i32) -> Self {
        self.tab_index = Some(tab_index);
        self
    }

    /// Adds `flags` to the node.
    pub fn with_flags(mut self, flags: NodeFlags) -> Self {
        self.flags |= flags;
        self
    }

    /// Whether this node belongs to the sequential focus order.
    ///
    /// Visible, not disabled, and either carrying a non-negative explicit
    /// tab stop or natively interactive with no tab stop at all.
    pub fn focusable(&self) -> bool {
        if !self.flags.contains(NodeFlags::VISIBLE) || self.flags.contains(NodeFlags::DISABLED) {
            return false;
        }
        match self.tab_index {
            Some(tab_index) => tab_index >= 0,
            None => self.flags.contains(NodeFlags::INTERACTIVE),
        }
    }
}

/// A host document, as the navigator sees it.
///
/// The core types are generic over the node identifier [`Node`](Self::Node),
/// so hosts can use any small, copyable handle (a DOM element key, an arena
/// index, an application-specific id). Nodes are non-owning: holding one
/// never keeps the underlying element alive.
///
/// Every query is answered live against the current document. The navigator
/// never caches focusable lists, so nodes appearing, disappearing, or
/// changing properties between calls are picked up on the next call.
pub trait FocusTree {
    /// Host handle for one element.
    type Node: Copy + Eq;

    /// All descendants of `container` in document order (pre-order,
    /// `container` itself excluded). Detached containers yield an empty
    /// list.
    fn descendants(&self, container: Self::Node) -> Vec<Self::Node>;

    /// The focus properties of `node`.
    fn props(&self, node: Self::Node) -> FocusProps;

    /// The node that currently holds focus, if any.
    fn active(&self) -> Option<Self::Node>;

    /// Moves focus to `node`.
    ///
    /// Hosts are expected to ignore requests for detached nodes rather than
    /// leave focus dangling; after destructive updates they should fall back
    /// to their root rather than ending up with nothing active.
    fn focus(&mut self, node: Self::Node);

    /// Whether `node` is still part of the document.
    fn is_attached(&self, node: Self::Node) -> bool;
}
