// Copyright 2025 the Armature Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property-based tests for the boolean engines.
//!
//! The engines promise two things under arbitrary call sequences:
//!
//! 1. Uncontrolled state equals the last request accepted while enabled.
//! 2. Controlled state never diverges from the value the host last synced.

use armature_disclosure::{DisclosureState, ToggleState};
use proptest::prelude::*;

/// One call against a boolean engine.
#[derive(Copy, Clone, Debug)]
enum Op {
    Set(bool),
    Toggle,
    SetDisabled(bool),
    Sync(bool),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        any::<bool>().prop_map(Op::Set),
        Just(Op::Toggle),
        any::<bool>().prop_map(Op::SetDisabled),
        any::<bool>().prop_map(Op::Sync),
    ]
}

fn ops() -> impl Strategy<Value = Vec<Op>> {
    proptest::collection::vec(op(), 0..64)
}

proptest! {
    /// An uncontrolled engine is exactly a register of the last enabled
    /// request; gated requests and syncs leave no trace.
    #[test]
    fn uncontrolled_state_is_last_enabled_request(start in any::<bool>(), ops in ops()) {
        let mut state = DisclosureState::uncontrolled(start);
        let mut model = start;
        let mut disabled = false;
        for op in ops {
            match op {
                Op::Set(v) => {
                    let notified = state.set_open(v);
                    if disabled {
                        prop_assert_eq!(notified, None);
                    } else {
                        prop_assert_eq!(notified, Some(v));
                        model = v;
                    }
                }
                Op::Toggle => {
                    let requested = !model;
                    let notified = state.toggle();
                    if disabled {
                        prop_assert_eq!(notified, None);
                    } else {
                        prop_assert_eq!(notified, Some(requested));
                        model = requested;
                    }
                }
                Op::SetDisabled(v) => {
                    state.set_disabled(v);
                    disabled = v;
                }
                Op::Sync(v) => state.sync_open(v),
            }
            prop_assert_eq!(state.is_open(), model);
        }
    }

    /// A controlled engine mirrors syncs and nothing else: requests are
    /// forwarded, never applied.
    #[test]
    fn controlled_state_never_diverges_from_syncs(start in any::<bool>(), ops in ops()) {
        let mut state = DisclosureState::controlled(start);
        let mut external = start;
        for op in ops {
            match op {
                Op::Set(v) => {
                    let _ = state.set_open(v);
                }
                Op::Toggle => {
                    let _ = state.toggle();
                }
                Op::SetDisabled(v) => state.set_disabled(v),
                Op::Sync(v) => {
                    state.sync_open(v);
                    external = v;
                }
            }
            prop_assert_eq!(state.is_open(), external);
        }
    }

    /// The toggle engine is the disclosure engine over a different boolean:
    /// identical call sequences end in identical state.
    #[test]
    fn toggle_engine_matches_disclosure_engine(start in any::<bool>(), ops in ops()) {
        let mut disclosure = DisclosureState::uncontrolled(start);
        let mut toggle = ToggleState::uncontrolled(start);
        for op in ops {
            match op {
                Op::Set(v) => {
                    prop_assert_eq!(disclosure.set_open(v), toggle.set_checked(v));
                }
                Op::Toggle => {
                    prop_assert_eq!(disclosure.toggle(), toggle.toggle());
                }
                Op::SetDisabled(v) => {
                    disclosure.set_disabled(v);
                    toggle.set_disabled(v);
                }
                Op::Sync(v) => {
                    disclosure.sync_open(v);
                    toggle.sync_checked(v);
                }
            }
            prop_assert_eq!(disclosure.is_open(), toggle.is_checked());
        }
    }
}
