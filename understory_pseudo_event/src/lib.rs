// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Pseudo Event: classify raw input events into semantic gestures.
//!
//! ## Overview
//!
//! Widgets rarely care that a `keydown` with key code 40 and no modifiers happened; they
//! care that the user asked to move "down" or to the "next" item. This crate turns a
//! [`RawEvent`] into the ordered list of gesture names ("pseudo events") it satisfies,
//! such as `sapdown`, `sapnext` or `sapselect`.
//!
//! It does not route events. Feed the names to a dispatcher (for example
//! `understory_responder`) which invokes `on<name>` handlers.
//!
//! ## Rules
//!
//! A [`GestureRule`] names a gesture, lists the [`RawTypes`] it can match, and carries a
//! [`Predicate`]. Rules live in a [`GestureRegistry`], built once with a
//! [`RegistryBuilder`] and frozen afterwards. [`STANDARD_RULES`](standard::STANDARD_RULES)
//! is the toolkit's full table: arrows, paging, home/end, select, delete, expand/collapse,
//! escape, tab, skip, the direction-aware `next`/`previous`/`increase`/`decrease` aliases,
//! and `sapdelayeddoubleclick`.
//!
//! ## Modifiers
//!
//! Rules go through [`has_any_modifier`](modifiers::has_any_modifier) and
//! [`has_exact_modifiers`](modifiers::has_exact_modifiers). Meta is folded into Ctrl there.
//!
//! ## Ordering
//!
//! Names are returned in registration order. Several names may match one event; a
//! dispatcher is expected to try all of them, not only the first.
//!
//! ## Example
//!
//! ```
//! use understory_pseudo_event::{key_codes, Classifier, Modifiers, RawEvent, RawType};
//!
//! let classifier: Classifier<u32> = Classifier::standard();
//!
//! let down = RawEvent::key_down(3, key_codes::ARROW_DOWN, Modifiers::empty());
//! assert_eq!(classifier.classify(&down), ["sapdown", "sapdecrease", "sapnext"]);
//!
//! let shift_down = RawEvent::key_down(3, key_codes::ARROW_DOWN, Modifiers::SHIFT);
//! assert!(classifier.has_gesture(&shift_down, "sapdownmodifiers"));
//! assert!(!classifier.has_gesture(&shift_down, "sapdown"));
//!
//! let moved = RawEvent::new(RawType::MouseMove, 3);
//! assert!(classifier.classify(&moved).is_empty());
//! ```
//!
//! ## Features
//!
//! - `std`: enables `std` support in `thiserror` and `tracing`.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod classifier;
pub mod key_codes;
pub mod modifiers;
pub mod raw;
pub mod registry;
pub mod rule;
pub mod standard;

pub use classifier::{Classifier, ClickTimes};
pub use modifiers::Modifiers;
pub use raw::{PseudoTypes, RawEvent, RawType, RawTypes, UnknownRawType};
pub use registry::{GestureRegistry, RegistryBuilder, RegistryError};
pub use rule::{ClickWindow, GestureRule, LayoutDirection, Predicate};
