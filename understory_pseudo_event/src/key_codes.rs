// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Numeric key codes as reported in `keyCode` by browser keyboard events.

#![expect(missing_docs, reason = "the constant names are the documentation")]

pub const BACKSPACE: u16 = 8;
pub const TAB: u16 = 9;
pub const ENTER: u16 = 13;
pub const SHIFT: u16 = 16;
pub const CONTROL: u16 = 17;
pub const ALT: u16 = 18;
pub const BREAK: u16 = 19;
pub const CAPS_LOCK: u16 = 20;
pub const ESCAPE: u16 = 27;
pub const SPACE: u16 = 32;
pub const PAGE_UP: u16 = 33;
pub const PAGE_DOWN: u16 = 34;
pub const END: u16 = 35;
pub const HOME: u16 = 36;
pub const ARROW_LEFT: u16 = 37;
pub const ARROW_UP: u16 = 38;
pub const ARROW_RIGHT: u16 = 39;
pub const ARROW_DOWN: u16 = 40;
pub const PRINT: u16 = 44;
pub const INSERT: u16 = 45;
pub const DELETE: u16 = 46;
pub const DIGIT_0: u16 = 48;
pub const DIGIT_9: u16 = 57;
pub const A: u16 = 65;
pub const C: u16 = 67;
pub const V: u16 = 86;
pub const X: u16 = 88;
pub const Z: u16 = 90;
pub const WINDOWS: u16 = 91;
pub const CONTEXT_MENU: u16 = 93;
pub const NUMPAD_0: u16 = 96;
pub const NUMPAD_9: u16 = 105;
pub const NUMPAD_ASTERISK: u16 = 106;
pub const NUMPAD_PLUS: u16 = 107;
pub const NUMPAD_MINUS: u16 = 109;
pub const NUMPAD_COMMA: u16 = 110;
pub const NUMPAD_SLASH: u16 = 111;
pub const F1: u16 = 112;
pub const F2: u16 = 113;
pub const F3: u16 = 114;
pub const F4: u16 = 115;
pub const F5: u16 = 116;
pub const F6: u16 = 117;
pub const F7: u16 = 118;
pub const F8: u16 = 119;
pub const F9: u16 = 120;
pub const F10: u16 = 121;
pub const F11: u16 = 122;
pub const F12: u16 = 123;
pub const NUM_LOCK: u16 = 144;
pub const SCROLL_LOCK: u16 = 145;
