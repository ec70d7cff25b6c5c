// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Modifier keys and the two matching helpers every rule goes through.
//!
//! The platform "meta" key (Command on macOS) is treated as Ctrl. This happens here
//! and only here; rules never look at [`Modifiers::META`] themselves.

use crate::raw::Input;

bitflags::bitflags! {
    /// Modifier keys held during an input event.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// Shift.
        const SHIFT = 0b0001;
        /// Alt / Option.
        const ALT   = 0b0010;
        /// Control.
        const CTRL  = 0b0100;
        /// Meta / Command / Windows.
        const META  = 0b1000;
    }
}

impl Modifiers {
    /// Ctrl after folding Meta into it.
    pub const fn resolved_ctrl(self) -> bool {
        self.bits() & (Self::CTRL.bits() | Self::META.bits()) != 0
    }

    /// Whether Shift, Alt, or (resolved) Ctrl is held.
    pub const fn has_any(self) -> bool {
        self.bits() & (Self::SHIFT.bits() | Self::ALT.bits()) != 0 || self.resolved_ctrl()
    }

    /// Whether exactly the given combination of Ctrl, Alt and Shift is held.
    pub const fn is_exactly(self, ctrl: bool, alt: bool, shift: bool) -> bool {
        (self.bits() & Self::SHIFT.bits() != 0) == shift
            && (self.bits() & Self::ALT.bits() != 0) == alt
            && self.resolved_ctrl() == ctrl
    }
}

/// Whether any modifier is held for `input`.
#[inline]
pub fn has_any_modifier(input: &Input) -> bool {
    input.modifiers.has_any()
}

/// Whether exactly `ctrl`, `alt` and `shift` are held for `input`.
#[inline]
pub fn has_exact_modifiers(input: &Input, ctrl: bool, alt: bool, shift: bool) -> bool {
    input.modifiers.is_exactly(ctrl, alt, shift)
}
