// Copyright 2025 the Armature Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A modal dialog driven entirely by the headless state machines.
//!
//! This example shows how to combine:
//! - `armature_disclosure` for the dialog's open state and wiring ids,
//! - `armature_focus` for trapping Tab inside the dialog and restoring
//!   focus to the trigger afterwards,
//! - `armature_focus::anchor` for placing the panel against its trigger.
//!
//! Run:
//! - `cargo run -p armature_demos --example dialog`

use armature_disclosure::DisclosureState;
use armature_focus::anchor::{Placement, place_within};
use armature_focus::{
    FocusProps, FocusRestore, FocusTrap, FocusTree, Key, KeyEvent, TrapOutcome, focus_first,
    focus_next,
};
use kurbo::{Rect, Size};

const ROOT: u32 = 0;
const TRIGGER: u32 = 1;
const DIALOG: u32 = 10;
const OK: u32 = 11;
const CANCEL: u32 = 12;

/// A page with a trigger button and a two-button dialog. The dialog's
/// subtree only exists in the document while it is open.
struct Page {
    dialog_open: bool,
    active: Option<u32>,
}

impl FocusTree for Page {
    type Node = u32;

    fn descendants(&self, container: u32) -> Vec<u32> {
        match container {
            ROOT if self.dialog_open => vec![TRIGGER, DIALOG, OK, CANCEL],
            ROOT => vec![TRIGGER],
            DIALOG if self.dialog_open => vec![OK, CANCEL],
            _ => Vec::new(),
        }
    }

    fn props(&self, node: u32) -> FocusProps {
        if node == DIALOG {
            FocusProps::default()
        } else {
            FocusProps::interactive()
        }
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
        match node {
            ROOT | TRIGGER => true,
            DIALOG | OK | CANCEL => self.dialog_open,
            _ => false,
        }
    }
}

fn main() {
    let mut page = Page {
        dialog_open: false,
        active: None,
    };
    let mut dialog = DisclosureState::uncontrolled(false);
    let trap = FocusTrap::new(DIALOG);
    let mut restore = FocusRestore::new();

    let ids = dialog.ids();
    println!("aria wiring: trigger {} controls panel {}", ids.trigger, ids.panel);

    page.focus(TRIGGER);
    println!("focus starts on the trigger: {:?}", page.active());

    // The user activates the trigger: remember where focus was, then open.
    restore.save(&page);
    if let Some(open) = dialog.toggle() {
        page.dialog_open = open;
        println!("dialog open: {open}");
    }

    // Place the panel under the trigger, kept inside the window.
    let trigger_rect = Rect::new(40.0, 420.0, 120.0, 444.0);
    let window = Rect::new(0.0, 0.0, 640.0, 480.0);
    let panel = place_within(
        trigger_rect,
        Size::new(240.0, 160.0),
        Placement::default(),
        window,
    );
    println!("panel placed at {panel:?} (flipped above the trigger)");

    // The dialog takes focus on open, then Tab cycles inside it.
    focus_first(&mut page, DIALOG);
    println!("focus moved into the dialog: {:?}", page.active());

    for _ in 0..3 {
        match trap.on_key(&mut page, KeyEvent::new(Key::Tab)) {
            TrapOutcome::Redirected(node) => println!("tab wrapped to {node}"),
            TrapOutcome::Pass => {
                // The trap left this one to the host's default traversal.
                let from = page.active().expect("something inside is focused");
                let to = focus_next(&mut page, DIALOG, from);
                println!("tab stepped from {from} to {to:?}");
            }
        }
    }

    // Escape is the host's concern: close the dialog and restore focus.
    assert_eq!(
        trap.on_key(&mut page, KeyEvent::new(Key::Escape)),
        TrapOutcome::Pass
    );
    if let Some(open) = dialog.toggle() {
        page.dialog_open = open;
        println!("dialog open: {open}");
    }
    println!("focus restored to {:?}", restore.load(&mut page));
}
