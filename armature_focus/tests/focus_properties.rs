// Copyright 2025 the Armature Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property-based tests for sequential navigation and the focus trap.

use armature_focus::{
    FocusProps, FocusTrap, FocusTree, Key, KeyEvent, NodeFlags, TrapOutcome, focus_next,
    focus_prev, list_focusable,
};
use proptest::prelude::*;

const CONTAINER: usize = 0;

/// One container whose children are `1..=props.len()`.
#[derive(Debug)]
struct Host {
    props: Vec<FocusProps>,
    active: Option<usize>,
}

impl FocusTree for Host {
    type Node = usize;

    fn descendants(&self, container: usize) -> Vec<usize> {
        if container == CONTAINER {
            (1..=self.props.len()).collect()
        } else {
            Vec::new()
        }
    }

    fn props(&self, node: usize) -> FocusProps {
        node.checked_sub(1)
            .and_then(|at| self.props.get(at))
            .copied()
            .unwrap_or_default()
    }

    fn active(&self) -> Option<usize> {
        self.active
    }

    fn focus(&mut self, node: usize) {
        if self.is_attached(node) {
            self.active = Some(node);
        }
    }

    fn is_attached(&self, node: usize) -> bool {
        node <= self.props.len()
    }
}

fn any_props() -> impl Strategy<Value = FocusProps> {
    (
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        proptest::option::of(-2i32..4),
    )
        .prop_map(|(visible, disabled, interactive, tab_index)| {
            let mut flags = NodeFlags::empty();
            flags.set(NodeFlags::VISIBLE, visible);
            flags.set(NodeFlags::DISABLED, disabled);
            flags.set(NodeFlags::INTERACTIVE, interactive);
            FocusProps { flags, tab_index }
        })
}

fn any_host() -> impl Strategy<Value = Host> {
    proptest::collection::vec(any_props(), 0..12).prop_map(|props| Host {
        props,
        active: None,
    })
}

proptest! {
    /// Every node the navigator lists is focusable, and the listing is the
    /// focusable subsequence of the container's descendants in document
    /// order.
    #[test]
    fn listing_is_the_focusable_subsequence(host in any_host()) {
        let list = list_focusable(&host, CONTAINER);
        for &node in &list {
            prop_assert!(host.props(node).focusable());
        }

        let expected: Vec<usize> = host
            .descendants(CONTAINER)
            .into_iter()
            .filter(|&node| host.props(node).focusable())
            .collect();
        prop_assert_eq!(list, expected);
    }

    /// Stepping forward then backward from any listed node returns to it.
    #[test]
    fn forward_then_backward_is_identity(mut host in any_host()) {
        let list = list_focusable(&host, CONTAINER);
        for &from in &list {
            let next = focus_next(&mut host, CONTAINER, from)
                .expect("listed nodes always have a successor");
            prop_assert!(list.contains(&next));
            let back = focus_prev(&mut host, CONTAINER, next)
                .expect("listed nodes always have a predecessor");
            prop_assert_eq!(back, from);
        }
    }

    /// A trapped Tab only ever redirects to a node in the container's
    /// focusable list, and keys other than Tab always pass through.
    #[test]
    fn trap_redirects_only_into_the_list(
        mut host in any_host(),
        start in proptest::option::of(1usize..12),
    ) {
        if let Some(start) = start {
            host.focus(start);
        }
        let trap = FocusTrap::new(CONTAINER);
        let list = list_focusable(&host, CONTAINER);

        for event in [KeyEvent::new(Key::Tab), KeyEvent::shifted(Key::Tab)] {
            match trap.on_key(&mut host, event) {
                TrapOutcome::Redirected(node) => prop_assert!(list.contains(&node)),
                TrapOutcome::Pass => {}
            }
        }
        prop_assert_eq!(
            trap.on_key(&mut host, KeyEvent::new(Key::Escape)),
            TrapOutcome::Pass
        );
    }
}
