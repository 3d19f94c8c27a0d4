// Copyright 2025 the Armature Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A single-select listbox: registration, arrow-key traversal, selection.
//!
//! Options enroll with the engine as they mount, arrows walk the enabled
//! ones in document order, and selecting returns the next value for the
//! host to apply. There is no rendering here; `println!` stands in for it.
//!
//! Run:
//! - `cargo run -p armature_demos --example listbox`

use armature_selection::{OptionProps, SelectState, Selection};

fn main() {
    // Values are the option labels; nodes are host-side element keys.
    let mut list: SelectState<&str, u32> = SelectState::uncontrolled(Selection::Single(None));

    let fruits = ["Apple", "Banana", "Cherry", "Durian"];
    let mut ids = Vec::new();
    for (key, label) in fruits.iter().enumerate() {
        let props = OptionProps {
            // Banana is out of season.
            disabled: *label == "Banana",
            order: None,
        };
        let id = list
            .register(*label, u32::try_from(key).expect("small demo list"), props)
            .expect("the engine accepts registrations until disposal");
        ids.push(id);
    }

    // ArrowDown from nowhere lands on the first option, then walks the
    // enabled ones, skipping Banana and wrapping at the end.
    for _ in 0..4 {
        let here = list.focus_next().expect("the list has enabled options");
        println!("focus on node {:?}", list.node(here));
    }

    // Enter selects the active option; the engine reports the next value.
    let active = list.active().expect("traversal focused something");
    if let Some(next) = list.select(active) {
        println!("selection is now {next:?}");
    }
    println!("Apple selected? {}", list.is_selected_value(&"Apple"));

    // Selecting a disabled option is refused outright.
    assert_eq!(list.select(ids[1]), None);
    println!("selecting Banana was refused; value is still {:?}", list.value());
}
