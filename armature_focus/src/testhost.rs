// Copyright 2025 the Armature Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A minimal in-memory host document for unit tests.

use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use crate::tree::{FocusProps, FocusTree};

/// Flat-parented node list in insertion order, which doubles as document
/// order for these tests.
#[derive(Debug, Default)]
pub(crate) struct Host {
    nodes: Vec<(u32, Option<u32>)>,
    props: BTreeMap<u32, FocusProps>,
    active: Option<u32>,
}

impl Host {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn add(&mut self, id: u32, parent: Option<u32>, props: FocusProps) -> &mut Self {
        self.nodes.push((id, parent));
        self.props.insert(id, props);
        self
    }

    pub(crate) fn remove(&mut self, id: u32) {
        self.nodes.retain(|(node, _)| *node != id);
        self.props.remove(&id);
        if self.active == Some(id) {
            self.active = None;
        }
    }

    pub(crate) fn set_props(&mut self, id: u32, props: FocusProps) {
        self.props.insert(id, props);
    }

    pub(crate) fn set_active(&mut self, node: Option<u32>) {
        self.active = node;
    }

    fn parent_of(&self, id: u32) -> Option<u32> {
        self.nodes
            .iter()
            .find(|(node, _)| *node == id)
            .and_then(|(_, parent)| *parent)
    }

    fn is_inside(&self, mut id: u32, container: u32) -> bool {
        while let Some(parent) = self.parent_of(id) {
            if parent == container {
                return true;
            }
            id = parent;
        }
        false
    }
}

impl FocusTree for Host {
    type Node = u32;

    fn descendants(&self, container: u32) -> Vec<u32> {
        self.nodes
            .iter()
            .map(|(node, _)| *node)
            .filter(|&node| self.is_inside(node, container))
            .collect()
    }

    fn props(&self, node: u32) -> FocusProps {
        self.props.get(&node).copied().unwrap_or_default()
    }

    fn active(&self) -> Option<u32> {
        self.active
    }

    fn focus(&mut self, node: u32) {
        if self.is_attached(node) {
            self.active = Some(node);
        }
    }

    fn is_attached(&self, node: u32) -> bool {
        self.nodes.iter().any(|(id, _)| *id == node)
    }
}

/// A container (id 0) holding three interactive children 1, 2, 3, plus a
/// detached-from-the-container interactive node 9 at the top level.
pub(crate) fn three_buttons() -> Host {
    let mut host = Host::new();
    host.add(0, None, FocusProps::default())
        .add(1, Some(0), FocusProps::interactive())
        .add(2, Some(0), FocusProps::interactive())
        .add(3, Some(0), FocusProps::interactive())
        .add(9, None, FocusProps::interactive());
    host
}
