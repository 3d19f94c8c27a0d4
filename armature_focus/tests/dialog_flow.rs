// Copyright 2025 the Armature Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end dialog flow across crates: a trigger opens a disclosure-backed
//! dialog, a trap cycles Tab inside it, Escape closes it, and a restore
//! point hands focus back to the trigger.

use armature_disclosure::DisclosureState;
use armature_focus::{
    FocusProps, FocusRestore, FocusTrap, FocusTree, Key, KeyEvent, TrapOutcome, focus_first,
    focus_next,
};

const ROOT: u32 = 0;
const TRIGGER: u32 = 1;
const DIALOG: u32 = 10;
const OK: u32 = 11;
const CANCEL: u32 = 12;

/// A page holding a trigger button and a dialog with two buttons. The
/// dialog and its children are only part of the document while
/// `dialog_open` is true.
struct Page {
    dialog_open: bool,
    active: Option<u32>,
}

impl Page {
    fn new() -> Self {
        Self {
            dialog_open: false,
            active: None,
        }
    }
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
            // The dialog surface itself is not a tab stop.
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

#[test]
fn dialog_takeover_cycles_and_restores() {
    let mut page = Page::new();
    let mut dialog = DisclosureState::uncontrolled(false);
    let trap = FocusTrap::new(DIALOG);
    let mut restore = FocusRestore::new();

    // The user activates the trigger.
    page.focus(TRIGGER);
    restore.save(&page);
    assert_eq!(dialog.toggle(), Some(true));
    page.dialog_open = dialog.is_open();

    // The dialog takes focus on open.
    assert_eq!(focus_first(&mut page, DIALOG), Some(OK));

    // Tab in the middle of the cycle is left to the host's default
    // traversal.
    assert_eq!(
        trap.on_key(&mut page, KeyEvent::new(Key::Tab)),
        TrapOutcome::Pass
    );
    assert_eq!(focus_next(&mut page, DIALOG, OK), Some(CANCEL));

    // At the boundaries the trap redirects instead.
    assert_eq!(
        trap.on_key(&mut page, KeyEvent::new(Key::Tab)),
        TrapOutcome::Redirected(OK)
    );
    assert_eq!(
        trap.on_key(&mut page, KeyEvent::shifted(Key::Tab)),
        TrapOutcome::Redirected(CANCEL)
    );

    // Escape is not the trap's concern; the host closes the dialog.
    assert_eq!(
        trap.on_key(&mut page, KeyEvent::new(Key::Escape)),
        TrapOutcome::Pass
    );
    assert_eq!(dialog.toggle(), Some(false));
    page.dialog_open = dialog.is_open();

    // Focus returns to the trigger that started the takeover.
    assert_eq!(restore.load(&mut page), Some(TRIGGER));
    assert_eq!(page.active(), Some(TRIGGER));
}

#[test]
fn first_tab_pulls_focus_into_the_open_dialog() {
    let mut page = Page::new();
    let mut dialog = DisclosureState::uncontrolled(false);
    let trap = FocusTrap::new(DIALOG);

    page.focus(TRIGGER);
    dialog.toggle();
    page.dialog_open = dialog.is_open();

    // Focus is still on the trigger, outside the trap's container.
    assert_eq!(
        trap.on_key(&mut page, KeyEvent::new(Key::Tab)),
        TrapOutcome::Redirected(OK)
    );
    assert_eq!(
        trap.on_key(&mut page, KeyEvent::shifted(Key::Tab)),
        TrapOutcome::Redirected(CANCEL),
        "once inside, shift+tab at the first wraps to the last"
    );
}

#[test]
fn closed_dialog_has_nothing_to_focus() {
    let mut page = Page::new();
    assert_eq!(focus_first(&mut page, DIALOG), None);
    assert_eq!(page.active(), None);
}
