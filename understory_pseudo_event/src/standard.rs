// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The toolkit's standard gesture table.
//!
//! Order matters: callers receive matched names in this order. Plain variants require
//! no modifiers at all; `*modifiers` variants require at least one. A handful of rules
//! require one exact combination (Alt+Down for `sapshow`, Ctrl+Home for `saptop`, and so on).
//!
//! The horizontal aliases (`sapnext`, `sapprevious`, `sapincrease`, `sapdecrease`) swap
//! Left and Right under [`LayoutDirection::Rtl`]; the direction is read when the rule runs.

use crate::key_codes::*;
use crate::modifiers::{has_any_modifier, has_exact_modifiers};
use crate::raw::{Input, RawTypes};
use crate::rule::{ClickWindow, GestureRule, LayoutDirection};

const KEY: RawTypes = RawTypes::KEYDOWN;

fn forward_key(dir: LayoutDirection) -> u16 {
    if dir.is_rtl() { ARROW_LEFT } else { ARROW_RIGHT }
}

fn backward_key(dir: LayoutDirection) -> u16 {
    if dir.is_rtl() { ARROW_RIGHT } else { ARROW_LEFT }
}

fn is_select_key(e: &Input) -> bool {
    e.key_code == ENTER || e.key_code == SPACE
}

fn is_next(e: &Input, dir: LayoutDirection) -> bool {
    e.key_code == forward_key(dir) || e.key_code == ARROW_DOWN
}

fn is_previous(e: &Input, dir: LayoutDirection) -> bool {
    e.key_code == backward_key(dir) || e.key_code == ARROW_UP
}

fn is_increase(e: &Input, dir: LayoutDirection) -> bool {
    e.key_code == forward_key(dir) || e.key_code == ARROW_UP
}

fn is_decrease(e: &Input, dir: LayoutDirection) -> bool {
    e.key_code == backward_key(dir) || e.key_code == ARROW_DOWN
}

/// Standard rules in registration order.
pub const STANDARD_RULES: &[GestureRule] = &[
    GestureRule::new("sapdown", KEY, |e, _| e.key_code == ARROW_DOWN && !has_any_modifier(e)),
    GestureRule::new("sapdownmodifiers", KEY, |e, _| {
        e.key_code == ARROW_DOWN && has_any_modifier(e)
    }),
    GestureRule::new("sapshow", KEY, |e, _| {
        (e.key_code == F4 && !has_any_modifier(e))
            || (e.key_code == ARROW_DOWN && has_exact_modifiers(e, false, true, false))
    }),
    GestureRule::new("sapup", KEY, |e, _| e.key_code == ARROW_UP && !has_any_modifier(e)),
    GestureRule::new("sapupmodifiers", KEY, |e, _| e.key_code == ARROW_UP && has_any_modifier(e)),
    GestureRule::new("saphide", KEY, |e, _| {
        e.key_code == ARROW_UP && has_exact_modifiers(e, false, true, false)
    }),
    GestureRule::new("sapleft", KEY, |e, _| e.key_code == ARROW_LEFT && !has_any_modifier(e)),
    GestureRule::new("sapleftmodifiers", KEY, |e, _| {
        e.key_code == ARROW_LEFT && has_any_modifier(e)
    }),
    GestureRule::new("sapright", KEY, |e, _| e.key_code == ARROW_RIGHT && !has_any_modifier(e)),
    GestureRule::new("saprightmodifiers", KEY, |e, _| {
        e.key_code == ARROW_RIGHT && has_any_modifier(e)
    }),
    GestureRule::new("saphome", KEY, |e, _| e.key_code == HOME && !has_any_modifier(e)),
    GestureRule::new("saphomemodifiers", KEY, |e, _| e.key_code == HOME && has_any_modifier(e)),
    GestureRule::new("saptop", KEY, |e, _| {
        e.key_code == HOME && has_exact_modifiers(e, true, false, false)
    }),
    GestureRule::new("sapend", KEY, |e, _| e.key_code == END && !has_any_modifier(e)),
    GestureRule::new("sapendmodifiers", KEY, |e, _| e.key_code == END && has_any_modifier(e)),
    GestureRule::new("sapbottom", KEY, |e, _| {
        e.key_code == END && has_exact_modifiers(e, true, false, false)
    }),
    GestureRule::new("sappageup", KEY, |e, _| e.key_code == PAGE_UP && !has_any_modifier(e)),
    GestureRule::new("sappageupmodifiers", KEY, |e, _| {
        e.key_code == PAGE_UP && has_any_modifier(e)
    }),
    GestureRule::new("sappagedown", KEY, |e, _| e.key_code == PAGE_DOWN && !has_any_modifier(e)),
    GestureRule::new("sappagedownmodifiers", KEY, |e, _| {
        e.key_code == PAGE_DOWN && has_any_modifier(e)
    }),
    GestureRule::new("sapselect", KEY, |e, _| is_select_key(e) && !has_any_modifier(e)),
    GestureRule::new("sapselectmodifiers", KEY, |e, _| is_select_key(e) && has_any_modifier(e)),
    GestureRule::new("sapspace", KEY, |e, _| e.key_code == SPACE && !has_any_modifier(e)),
    GestureRule::new("sapspacemodifiers", KEY, |e, _| e.key_code == SPACE && has_any_modifier(e)),
    GestureRule::new("sapenter", KEY, |e, _| e.key_code == ENTER && !has_any_modifier(e)),
    GestureRule::new("sapentermodifiers", KEY, |e, _| e.key_code == ENTER && has_any_modifier(e)),
    GestureRule::new("sapbackspace", KEY, |e, _| e.key_code == BACKSPACE && !has_any_modifier(e)),
    GestureRule::new("sapbackspacemodifiers", KEY, |e, _| {
        e.key_code == BACKSPACE && has_any_modifier(e)
    }),
    GestureRule::new("sapdelete", KEY, |e, _| e.key_code == DELETE && !has_any_modifier(e)),
    GestureRule::new("sapdeletemodifiers", KEY, |e, _| e.key_code == DELETE && has_any_modifier(e)),
    GestureRule::new("sapexpand", KEY, |e, _| e.key_code == NUMPAD_PLUS && !has_any_modifier(e)),
    GestureRule::new("sapexpandmodifiers", KEY, |e, _| {
        e.key_code == NUMPAD_PLUS && has_any_modifier(e)
    }),
    GestureRule::new("sapcollapse", KEY, |e, _| e.key_code == NUMPAD_MINUS && !has_any_modifier(e)),
    GestureRule::new("sapcollapsemodifiers", KEY, |e, _| {
        e.key_code == NUMPAD_MINUS && has_any_modifier(e)
    }),
    GestureRule::new("sapescape", KEY, |e, _| e.key_code == ESCAPE && !has_any_modifier(e)),
    GestureRule::new("saptabnext", KEY, |e, _| e.key_code == TAB && !has_any_modifier(e)),
    GestureRule::new("saptabprevious", KEY, |e, _| {
        e.key_code == TAB && has_exact_modifiers(e, false, false, true)
    }),
    GestureRule::new("sapskipforward", KEY, |e, _| e.key_code == F6 && !has_any_modifier(e)),
    GestureRule::new("sapskipback", KEY, |e, _| {
        e.key_code == F6 && has_exact_modifiers(e, false, false, true)
    }),
    GestureRule::new("sapdecrease", KEY, |e, dir| is_decrease(e, dir) && !has_any_modifier(e)),
    GestureRule::new("sapdecreasemodifiers", KEY, |e, dir| {
        is_decrease(e, dir) && has_any_modifier(e)
    }),
    GestureRule::new("sapincrease", KEY, |e, dir| is_increase(e, dir) && !has_any_modifier(e)),
    GestureRule::new("sapincreasemodifiers", KEY, |e, dir| {
        is_increase(e, dir) && has_any_modifier(e)
    }),
    GestureRule::new("sapprevious", KEY, |e, dir| is_previous(e, dir) && !has_any_modifier(e)),
    GestureRule::new("sappreviousmodifiers", KEY, |e, dir| {
        is_previous(e, dir) && has_any_modifier(e)
    }),
    GestureRule::new("sapnext", KEY, |e, dir| is_next(e, dir) && !has_any_modifier(e)),
    GestureRule::new("sapnextmodifiers", KEY, |e, dir| is_next(e, dir) && has_any_modifier(e)),
    GestureRule::delayed_click("sapdelayeddoubleclick", ClickWindow::DELAYED_DOUBLE_CLICK),
];
