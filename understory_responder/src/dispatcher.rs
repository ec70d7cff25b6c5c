// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dispatcher: walk a control and its ancestors, delivering every event type in order.
//!
//! ## Semantics
//!
//! For each visited control, [`run`] delivers the classified gesture names in classifier
//! order, then the raw type (so plain `onclick`-style handlers still fire). Then it moves
//! to the nearest enclosing control, skipping DOM nodes no control owns and never looking
//! at or above the area root.
//!
//! - [`stop_propagation`](crate::types::ControlEvent::stop_propagation) ends the walk after
//!   the current event type.
//! - [`stop_immediate_propagation`](crate::types::ControlEvent::stop_immediate_propagation)
//!   skips the remaining event types on the current control only. The flag is cleared when
//!   the walk reaches the next control.
//! - Every control is checked with [`ControlTree::is_active`] before it is visited, since a
//!   handler may have detached it while handling this very event. An inactive control
//!   ends the walk.
//! - Handler panics are not caught.
//!
//! ## Minimal example
//!
//! ```
//! use understory_pseudo_event::{RawEvent, RawType};
//! use understory_responder::dispatcher;
//! use understory_responder::types::{ControlEvent, ControlTree, DispatchContext};
//!
//! // Node 0 is the area root; control 'p' renders to node 1, control 'c' to node 2.
//! struct Tree(Vec<(char, &'static str)>);
//! impl ControlTree for Tree {
//!     type Node = u32;
//!     type Control = char;
//!     fn owner_of(&self, n: &u32) -> Option<char> {
//!         match n { 1 => Some('p'), 2 => Some('c'), _ => None }
//!     }
//!     fn parent_node(&self, n: &u32) -> Option<u32> {
//!         n.checked_sub(1)
//!     }
//!     fn dom_ref(&self, c: &char) -> Option<u32> {
//!         match c { 'p' => Some(1), 'c' => Some(2), _ => None }
//!     }
//!     fn handle(&mut self, c: char, ev: &mut ControlEvent<'_, u32, char>) {
//!         self.0.push((c, ev.event_type()));
//!     }
//! }
//!
//! let mut tree = Tree(Vec::new());
//! let raw = RawEvent::new(RawType::Click, 2);
//! let mut ctx = DispatchContext::new();
//! let stopped = dispatcher::run(&mut tree, 0, 'c', &raw, &[], &mut ctx);
//! assert!(stopped.is_none());
//! assert_eq!(tree.0, [('c', "click"), ('p', "click")]);
//! ```

use core::iter;

use understory_pseudo_event::RawEvent;

use crate::types::{ControlEvent, ControlTree, DispatchContext};

/// Deliver `gestures` and then the raw type to `src` and its enclosing controls.
///
/// ## Usage
///
/// - Inputs:
///   - `tree`: the control tree; handlers run through [`ControlTree::handle`].
///   - `root`: the area root node. The ancestor search stops there.
///   - `src`: the innermost control enclosing the event target.
///   - `raw`: the raw event, shared by every step.
///   - `gestures`: classified gesture names, in classifier order.
///   - `context`: propagation state; inspect it afterwards for marks and prevention.
/// - Return:
///   - `None` if the walk ran out of ancestors or reached an inactive control.
///   - `Some(control)` for the control whose handler stopped propagation.
pub fn run<T: ControlTree>(
    tree: &mut T,
    root: T::Node,
    src: T::Control,
    raw: &RawEvent<T::Node>,
    gestures: &[&'static str],
    context: &mut DispatchContext,
) -> Option<T::Control> {
    let raw_name = raw.raw_type().as_str();
    let mut next = Some(src);
    while let Some(control) = next {
        if !tree.is_active(&control) {
            tracing::trace!(control = ?control, "control detached during dispatch");
            break;
        }
        let Some(dom) = tree.dom_ref(&control) else {
            break;
        };
        context.begin_control();
        let steps = gestures.iter().map(|&g| (g, true));
        for (event_type, pseudo) in steps.chain(iter::once((raw_name, false))) {
            let mut event = ControlEvent {
                event_type,
                pseudo,
                raw,
                gestures,
                current_target: dom,
                src_control: src,
                context: &mut *context,
            };
            tracing::trace!(control = ?control, event_type, "deliver");
            tree.handle(control, &mut event);
            if context.is_immediate_propagation_stopped() {
                break;
            }
        }
        if context.is_propagation_stopped() {
            return Some(control);
        }
        next = tree
            .parent_node(&dom)
            .and_then(|parent| tree.nearest_control(parent, root));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_tree::{Reaction, TestTree, three_levels};
    use alloc::vec;
    use understory_pseudo_event::RawType;

    fn click_on(node: u32) -> RawEvent<u32> {
        RawEvent::new(RawType::Click, node)
    }

    #[test]
    fn bubbles_innermost_first() {
        let mut tree = three_levels()
            .on("child", "click")
            .on("parent", "click")
            .on("gp", "click");
        let mut ctx = DispatchContext::new();
        let stopped = run(&mut tree, 0, "child", &click_on(5), &[], &mut ctx);
        assert!(stopped.is_none());
        assert_eq!(
            tree.log,
            vec![
                ("child", "click", 4, "child"),
                ("parent", "click", 3, "child"),
                ("gp", "click", 1, "child"),
            ]
        );
    }

    #[test]
    fn gestures_precede_raw_type_on_each_control() {
        let mut tree = three_levels()
            .on("child", "keydown")
            .on("child", "sapnext")
            .on("child", "sapdown")
            .on("parent", "sapdown");
        let mut ctx = DispatchContext::new();
        let raw = RawEvent::new(RawType::KeyDown, 4);
        run(&mut tree, 0, "child", &raw, &["sapdown", "sapnext"], &mut ctx);
        assert_eq!(
            tree.calls(),
            vec![
                ("child", "sapdown"),
                ("child", "sapnext"),
                ("child", "keydown"),
                ("parent", "sapdown"),
            ]
        );
    }

    #[test]
    fn gesture_sharing_a_raw_name_is_still_pseudo() {
        let mut tree = three_levels().on("child", "click");
        let mut ctx = DispatchContext::new();
        run(&mut tree, 0, "child", &click_on(4), &["click"], &mut ctx);
        assert_eq!(tree.calls(), vec![("child", "click"), ("child", "click")]);
        assert_eq!(tree.pseudo, [true, false]);
    }

    #[test]
    fn stop_reports_the_stopping_control() {
        let mut tree = three_levels()
            .on("child", "click")
            .react("parent", "click", Reaction::StopPropagation)
            .on("gp", "click");
        let mut ctx = DispatchContext::new();
        let stopped = run(&mut tree, 0, "child", &click_on(4), &[], &mut ctx);
        assert_eq!(stopped, Some("parent"));
        assert!(ctx.is_propagation_stopped());
        assert_eq!(tree.calls(), vec![("child", "click"), ("parent", "click")]);
    }

    #[test]
    fn stop_propagation_still_finishes_the_current_control() {
        let mut tree = three_levels()
            .react("child", "sapselect", Reaction::StopPropagation)
            .on("child", "keydown")
            .on("parent", "keydown");
        let mut ctx = DispatchContext::new();
        let raw = RawEvent::new(RawType::KeyDown, 4);
        run(&mut tree, 0, "child", &raw, &["sapselect"], &mut ctx);
        assert_eq!(tree.calls(), vec![("child", "sapselect"), ("child", "keydown")]);
    }

    #[test]
    fn immediate_stop_is_scoped_to_one_control() {
        let mut tree = three_levels()
            .react("child", "sapselect", Reaction::StopImmediate)
            .on("child", "keydown")
            .on("parent", "sapselect")
            .on("parent", "keydown");
        let mut ctx = DispatchContext::new();
        let raw = RawEvent::new(RawType::KeyDown, 4);
        let stopped = run(&mut tree, 0, "child", &raw, &["sapselect"], &mut ctx);
        assert!(stopped.is_none());
        assert_eq!(
            tree.calls(),
            vec![
                ("child", "sapselect"),
                ("parent", "sapselect"),
                ("parent", "keydown"),
            ]
        );
    }

    #[test]
    fn walk_never_crosses_the_root() {
        // Control "outer" owns node 10, which sits above the area root 0.
        let mut tree = TestTree::new()
            .control("outer", 10, 99)
            .gap(0, 10)
            .control("inner", 1, 0)
            .on("inner", "click")
            .on("outer", "click");
        let mut ctx = DispatchContext::new();
        run(&mut tree, 0, "inner", &click_on(1), &[], &mut ctx);
        assert_eq!(tree.calls(), vec![("inner", "click")]);
    }

    #[test]
    fn detached_ancestor_is_not_visited() {
        let mut tree = three_levels()
            .on("child", "click")
            .react("parent", "click", Reaction::Detach("gp"))
            .on("gp", "click");
        let mut ctx = DispatchContext::new();
        run(&mut tree, 0, "child", &click_on(4), &[], &mut ctx);
        assert_eq!(tree.calls(), vec![("child", "click"), ("parent", "click")]);
    }

    #[test]
    fn inactive_ancestor_ends_the_walk() {
        let mut tree = three_levels()
            .react("child", "click", Reaction::Deactivate("parent"))
            .on("parent", "click")
            .on("gp", "click");
        let mut ctx = DispatchContext::new();
        let stopped = run(&mut tree, 0, "child", &click_on(4), &[], &mut ctx);
        assert!(stopped.is_none());
        assert_eq!(tree.calls(), vec![("child", "click")]);
    }

    #[test]
    fn self_detach_ends_the_walk_after_the_current_control() {
        let mut tree = three_levels()
            .react("child", "sapescape", Reaction::Detach("child"))
            .on("child", "keydown")
            .on("parent", "keydown");
        let mut ctx = DispatchContext::new();
        let raw = RawEvent::new(RawType::KeyDown, 4);
        run(&mut tree, 0, "child", &raw, &["sapescape"], &mut ctx);
        // The remaining type on the detached control still runs; its DOM node is gone,
        // so there is no ancestor to continue with.
        assert_eq!(tree.calls(), vec![("child", "sapescape"), ("child", "keydown")]);
    }
}
