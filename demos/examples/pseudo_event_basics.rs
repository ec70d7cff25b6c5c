// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture classification with `understory_pseudo_event`.
//!
//! This example shows:
//! - the gesture names the standard rule table yields for a few key presses,
//! - how layout direction swaps the horizontal `next`/`previous` aliases,
//! - the delayed double click window,
//! - appending an application rule with `RegistryBuilder`.
//!
//! Run:
//! - `cargo run -p understory_demos --example pseudo_event_basics`

use understory_pseudo_event::{
    Classifier, GestureRule, LayoutDirection, Modifiers, RawEvent, RawType, RawTypes,
    RegistryBuilder, key_codes,
};

const KEY_S: u16 = 83;

fn show(classifier: &Classifier<u32>, label: &str, event: &RawEvent<u32>) {
    println!("{label:<24} -> {:?}", classifier.classify(event));
}

fn main() {
    let mut classifier: Classifier<u32> = Classifier::standard();
    println!("{} standard rules", classifier.registry().len());

    show(
        &classifier,
        "ArrowDown",
        &RawEvent::key_down(1, key_codes::ARROW_DOWN, Modifiers::empty()),
    );
    show(
        &classifier,
        "Shift+ArrowDown",
        &RawEvent::key_down(1, key_codes::ARROW_DOWN, Modifiers::SHIFT),
    );
    show(
        &classifier,
        "Enter",
        &RawEvent::key_down(1, key_codes::ENTER, Modifiers::empty()),
    );
    show(
        &classifier,
        "Meta+Home",
        &RawEvent::key_down(1, key_codes::HOME, Modifiers::META),
    );
    show(
        &classifier,
        "Shift+Tab",
        &RawEvent::key_down(1, key_codes::TAB, Modifiers::SHIFT),
    );

    let right = RawEvent::key_down(1, key_codes::ARROW_RIGHT, Modifiers::empty());
    show(&classifier, "ArrowRight (ltr)", &right);
    classifier.set_layout_direction(LayoutDirection::Rtl);
    // Classification is memoized per event, so use a fresh one after the change.
    let right = RawEvent::key_down(1, key_codes::ARROW_RIGHT, Modifiers::empty());
    show(&classifier, "ArrowRight (rtl)", &right);
    classifier.set_layout_direction(LayoutDirection::Ltr);

    for at in [1_000, 1_200, 1_900, 4_000] {
        let click = RawEvent::new(RawType::Click, 7).with_time_stamp(at);
        show(&classifier, &format!("click @ {at}ms"), &click);
    }

    let mut builder = RegistryBuilder::standard();
    let ctrl_s = GestureRule::new("appsave", RawTypes::KEYDOWN, |e, _| {
        e.key_code == KEY_S && e.modifiers.resolved_ctrl()
    });
    if let Err(err) = builder.push(ctrl_s) {
        eprintln!("rule rejected: {err}");
        return;
    }
    let custom: Classifier<u32> = Classifier::new(builder.build());
    show(
        &custom,
        "Ctrl+S (custom)",
        &RawEvent::key_down(1, KEY_S, Modifiers::CTRL),
    );

    for name in ["touchstart", "pointerdown"] {
        match name.parse::<RawType>() {
            Ok(t) => println!("parsed {t}"),
            Err(err) => println!("{err}"),
        }
    }
}
