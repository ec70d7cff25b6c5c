// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Responder: deterministic, `no_std` dispatch of input events to UI controls.
//!
//! ## Overview
//!
//! A UI area is a root DOM node whose descendants are rendered by controls. For each raw
//! input event fired under that root, this crate finds the innermost control enclosing the
//! target and delivers the event to it and then to each enclosing control, innermost first.
//! Every control sees the semantic gesture names from
//! [`understory_pseudo_event`] (`sapselect`, `sapnext`, ...) before the raw type itself.
//!
//! It does not own the DOM or the controls. A host implements
//! [`ControlTree`](crate::types::ControlTree): node to control lookup, parent links, and the
//! handler entry point.
//!
//! ## Layering
//!
//! - [`Core`](crate::ui_core::Core) is shared by every area: the classifier, the control
//!   event set, a global lock and the control-event hooks.
//! - [`UiArea`](crate::ui_area::UiArea) is the per-root entry point.
//!   [`UiArea::handle_event`](crate::ui_area::UiArea::handle_event) resolves the source
//!   control, runs hooks, honors locks, classifies and dispatches.
//! - [`dispatcher::run`] is the ancestor walk on its own, for hosts that resolve and
//!   classify themselves.
//!
//! ## Propagation
//!
//! Handlers receive a [`ControlEvent`](crate::types::ControlEvent) view per step. Stopping
//! propagation ends the walk once the current event type has been handled. Stopping
//! immediate propagation skips the remaining event types on the current control only.
//! Controls detached or deactivated mid-walk end it. The outcome comes back as a
//! [`DispatchReport`](crate::types::DispatchReport).
//!
//! ## Example
//!
//! ```
//! use understory_pseudo_event::{key_codes, Modifiers, RawEvent};
//! use understory_responder::types::{ControlEvent, ControlTree, Disposition};
//! use understory_responder::ui_area::UiArea;
//! use understory_responder::ui_core::Core;
//!
//! // Root 0 > list (node 1) > item (node 2).
//! #[derive(Default)]
//! struct Tree(Vec<(&'static str, &'static str)>);
//! impl ControlTree for Tree {
//!     type Node = u32;
//!     type Control = &'static str;
//!     fn owner_of(&self, n: &u32) -> Option<&'static str> {
//!         match n { 1 => Some("list"), 2 => Some("item"), _ => None }
//!     }
//!     fn parent_node(&self, n: &u32) -> Option<u32> {
//!         n.checked_sub(1)
//!     }
//!     fn dom_ref(&self, c: &&'static str) -> Option<u32> {
//!         match *c { "list" => Some(1), "item" => Some(2), _ => None }
//!     }
//!     fn handle(&mut self, c: &'static str, ev: &mut ControlEvent<'_, u32, &'static str>) {
//!         if c == "item" && ev.event_type() == "sapnext" {
//!             self.0.push((c, ev.event_type()));
//!             ev.stop_propagation();
//!         }
//!         if c == "list" {
//!             self.0.push((c, ev.event_type()));
//!         }
//!     }
//! }
//!
//! let mut core = Core::standard();
//! let area = UiArea::new(0);
//! let mut tree = Tree::default();
//!
//! let down = RawEvent::key_down(2, key_codes::ARROW_DOWN, Modifiers::empty());
//! let report = area.handle_event(&mut core, &mut tree, &down);
//! assert_eq!(report.disposition, Disposition::Dispatched);
//! assert_eq!(report.stopped_at, Some("item"));
//! assert_eq!(tree.0, [("item", "sapnext")]);
//! ```
//!
//! ## Features
//!
//! - `std`: forwards `std` to `understory_pseudo_event` and `tracing`.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod dispatcher;
pub mod types;
pub mod ui_area;
pub mod ui_core;

#[cfg(test)]
mod test_tree;

pub use understory_pseudo_event;
