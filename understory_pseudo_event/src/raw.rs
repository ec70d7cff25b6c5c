// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Raw input events: DOM event types, type sets, and the event record fed to the classifier.
//!
//! A [`RawEvent`] wraps what the host (a browser shim, a test, a native windowing layer)
//! knows about one native input event: its [`RawType`], the DOM node it targeted, the key
//! code, the held [`Modifiers`], and a millisecond time stamp.
//!
//! The gesture names a [`Classifier`](crate::Classifier) derives for an event are cached
//! on the event itself, so every consumer of one event sees the same list.

use alloc::string::String;
use core::cell::OnceCell;
use core::fmt;
use core::str::FromStr;

use smallvec::SmallVec;

use crate::modifiers::Modifiers;

/// Ordered gesture names matched by one event.
pub type PseudoTypes = SmallVec<[&'static str; 4]>;

macro_rules! raw_types {
    ($($(#[doc = $doc:literal])* $variant:ident => $name:literal, $flag:ident;)*) => {
        /// A raw DOM input event type.
        #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
        #[repr(u8)]
        pub enum RawType {
            $($(#[doc = $doc])* $variant,)*
        }

        impl RawType {
            /// Every raw type, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant,)*];

            /// The DOM name of this type, e.g. `"keydown"`.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)*
                }
            }
        }

        bitflags::bitflags! {
            /// A set of [`RawType`]s.
            ///
            /// Used for a rule's basic types, the registry's basic-types index, and the
            /// set of types a UI area binds listeners for.
            #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
            pub struct RawTypes: u32 {
                $($(#[doc = $doc])* const $flag = 1 << (RawType::$variant as u32);)*
            }
        }
    };
}

raw_types! {
    /// `click`
    Click => "click", CLICK;
    /// `dblclick`
    DblClick => "dblclick", DBLCLICK;
    /// `contextmenu`
    ContextMenu => "contextmenu", CONTEXTMENU;
    /// `focusin`
    FocusIn => "focusin", FOCUSIN;
    /// `focusout`
    FocusOut => "focusout", FOCUSOUT;
    /// `keydown`
    KeyDown => "keydown", KEYDOWN;
    /// `keypress`
    KeyPress => "keypress", KEYPRESS;
    /// `keyup`
    KeyUp => "keyup", KEYUP;
    /// `mousedown`
    MouseDown => "mousedown", MOUSEDOWN;
    /// `mousemove`
    MouseMove => "mousemove", MOUSEMOVE;
    /// `mouseout`
    MouseOut => "mouseout", MOUSEOUT;
    /// `mouseover`
    MouseOver => "mouseover", MOUSEOVER;
    /// `mouseup`
    MouseUp => "mouseup", MOUSEUP;
    /// `select`
    Select => "select", SELECT;
    /// `selectstart`
    SelectStart => "selectstart", SELECTSTART;
    /// `dragstart`
    DragStart => "dragstart", DRAGSTART;
    /// `dragenter`
    DragEnter => "dragenter", DRAGENTER;
    /// `dragover`
    DragOver => "dragover", DRAGOVER;
    /// `dragleave`
    DragLeave => "dragleave", DRAGLEAVE;
    /// `dragend`
    DragEnd => "dragend", DRAGEND;
    /// `drop`
    Drop => "drop", DROP;
    /// `paste`
    Paste => "paste", PASTE;
    /// `cut`
    Cut => "cut", CUT;
    /// `input`
    Input => "input", INPUT;
    /// `touchstart`
    TouchStart => "touchstart", TOUCHSTART;
    /// `touchend`
    TouchEnd => "touchend", TOUCHEND;
    /// `touchmove`
    TouchMove => "touchmove", TOUCHMOVE;
    /// `touchcancel`
    TouchCancel => "touchcancel", TOUCHCANCEL;
}

impl RawType {
    /// The single-member [`RawTypes`] set for this type.
    pub const fn flag(self) -> RawTypes {
        RawTypes::from_bits_retain(1 << (self as u32))
    }
}

impl fmt::Display for RawType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no known [`RawType`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown raw event type `{name}`")]
pub struct UnknownRawType {
    name: String,
}

impl UnknownRawType {
    /// The rejected type name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl FromStr for RawType {
    type Err = UnknownRawType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownRawType { name: s.into() })
    }
}

impl From<RawType> for RawTypes {
    fn from(t: RawType) -> Self {
        t.flag()
    }
}

impl RawTypes {
    /// The raw types a control tree reacts to: everything except `mousemove`.
    pub const CONTROL_EVENTS: Self =
        Self::from_bits_retain(Self::all().bits() & !Self::MOUSEMOVE.bits());

    /// Whether `t` is a member of this set.
    pub const fn has(self, t: RawType) -> bool {
        self.bits() & t.flag().bits() != 0
    }

    /// Iterate the members of this set in [`RawType::ALL`] order.
    pub fn raw_types(self) -> impl Iterator<Item = RawType> {
        RawType::ALL.iter().copied().filter(move |t| self.has(*t))
    }
}

/// The part of a raw event that rule predicates inspect.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Input {
    /// The raw DOM type of the event.
    pub raw_type: RawType,
    /// Key code for keyboard events, `0` otherwise.
    pub key_code: u16,
    /// Modifier keys held while the event fired.
    pub modifiers: Modifiers,
    /// Event time stamp in milliseconds.
    pub time_stamp: u64,
}

impl Input {
    /// Input of the given type with no key, no modifiers, at time zero.
    pub const fn new(raw_type: RawType) -> Self {
        Self {
            raw_type,
            key_code: 0,
            modifiers: Modifiers::empty(),
            time_stamp: 0,
        }
    }
}

/// A native input event as seen by the classifier and the dispatcher.
///
/// `N` is the host's DOM node handle.
///
/// ```
/// use understory_pseudo_event::{key_codes, Modifiers, RawEvent, RawType};
///
/// let ev = RawEvent::new(RawType::KeyDown, 7_u32)
///     .with_key_code(key_codes::ENTER)
///     .with_modifiers(Modifiers::SHIFT)
///     .with_time_stamp(1200);
/// assert_eq!(ev.raw_type(), RawType::KeyDown);
/// assert_eq!(*ev.target(), 7);
/// assert!(ev.cached_pseudo_types().is_none());
/// ```
#[derive(Clone, Debug)]
pub struct RawEvent<N> {
    input: Input,
    target: N,
    pseudo_types: OnceCell<PseudoTypes>,
}

impl<N> RawEvent<N> {
    /// Create an event of `raw_type` targeting `target`.
    pub fn new(raw_type: RawType, target: N) -> Self {
        Self::from_input(Input::new(raw_type), target)
    }

    /// Create an event from a prepared [`Input`].
    pub fn from_input(input: Input, target: N) -> Self {
        Self {
            input,
            target,
            pseudo_types: OnceCell::new(),
        }
    }

    /// A `keydown` for `key_code` with `modifiers` held.
    pub fn key_down(target: N, key_code: u16, modifiers: Modifiers) -> Self {
        Self::new(RawType::KeyDown, target)
            .with_key_code(key_code)
            .with_modifiers(modifiers)
    }

    /// Set the key code.
    pub fn with_key_code(mut self, key_code: u16) -> Self {
        self.input.key_code = key_code;
        self.pseudo_types = OnceCell::new();
        self
    }

    /// Set the held modifiers.
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.input.modifiers = modifiers;
        self.pseudo_types = OnceCell::new();
        self
    }

    /// Set the time stamp in milliseconds.
    pub fn with_time_stamp(mut self, time_stamp: u64) -> Self {
        self.input.time_stamp = time_stamp;
        self.pseudo_types = OnceCell::new();
        self
    }

    /// The predicate-facing part of the event.
    pub fn input(&self) -> &Input {
        &self.input
    }

    /// The raw DOM type.
    pub fn raw_type(&self) -> RawType {
        self.input.raw_type
    }

    /// The key code, `0` for non-keyboard events.
    pub fn key_code(&self) -> u16 {
        self.input.key_code
    }

    /// The held modifiers.
    pub fn modifiers(&self) -> Modifiers {
        self.input.modifiers
    }

    /// The time stamp in milliseconds.
    pub fn time_stamp(&self) -> u64 {
        self.input.time_stamp
    }

    /// The DOM node the event fired on.
    pub fn target(&self) -> &N {
        &self.target
    }

    /// Gesture names computed for this event, if it was already classified.
    pub fn cached_pseudo_types(&self) -> Option<&[&'static str]> {
        self.pseudo_types.get().map(|p| p.as_slice())
    }

    pub(crate) fn pseudo_types_or_init(
        &self,
        init: impl FnOnce() -> PseudoTypes,
    ) -> &[&'static str] {
        self.pseudo_types.get_or_init(init).as_slice()
    }
}
