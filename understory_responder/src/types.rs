// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for dispatch: the control tree seam, the per-step event view, and reports.
//!
//! ## Overview
//!
//! The dispatcher does not own controls or DOM nodes. A host implements [`ControlTree`]
//! to answer four questions (which control owns a node, what a node's parent is, which
//! node a control renders to, whether a control is still attached) and to run handlers.
//!
//! Handlers receive a [`ControlEvent`]: a fresh view per (control, event type) step that
//! borrows the shared [`RawEvent`] and the per-dispatch [`DispatchContext`].

use core::fmt::Debug;
use core::hash::Hash;

use smallvec::SmallVec;
use understory_pseudo_event::{Modifiers, RawEvent, RawType};

/// The control tree and DOM the dispatcher walks.
///
/// DOM nodes mirror the control tree, but may contain "gap" nodes that no control owns
/// (plain markup inside or between controls). The dispatcher skips those.
pub trait ControlTree {
    /// DOM node handle.
    type Node: Copy + Eq + Hash + Debug;
    /// Control handle.
    type Control: Copy + Eq + Debug;

    /// The control whose DOM reference is exactly `node`, if any.
    fn owner_of(&self, node: &Self::Node) -> Option<Self::Control>;

    /// The DOM parent of `node`, or `None` for a detached or document root node.
    fn parent_node(&self, node: &Self::Node) -> Option<Self::Node>;

    /// The DOM node `control` is rendered to, or `None` if it has none.
    fn dom_ref(&self, control: &Self::Control) -> Option<Self::Node>;

    /// Whether `control` is attached and rendered.
    fn is_active(&self, control: &Self::Control) -> bool {
        self.dom_ref(control).is_some()
    }

    /// Run `control`'s handler for `event.event_type()`, if it has one.
    ///
    /// Implementations typically `match` on the event type, e.g. `"sapselect"` or `"click"`.
    /// Handlers may stop propagation, mark the event, or detach controls.
    fn handle(
        &mut self,
        control: Self::Control,
        event: &mut ControlEvent<'_, Self::Node, Self::Control>,
    );

    /// The innermost control owning `node` or one of its ancestors, searching up to but
    /// excluding `root`.
    fn nearest_control(&self, node: Self::Node, root: Self::Node) -> Option<Self::Control> {
        let mut cur = node;
        // Caller ensures acyclic ancestry.
        loop {
            if cur == root {
                return None;
            }
            if let Some(control) = self.owner_of(&cur) {
                return Some(control);
            }
            cur = self.parent_node(&cur)?;
        }
    }
}

/// Propagation and marking state for one raw event.
///
/// Created per dispatch and discarded afterwards.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DispatchContext {
    propagation_stopped: bool,
    immediate_propagation_stopped: bool,
    default_prevented: bool,
    marks: SmallVec<[&'static str; 2]>,
}

impl DispatchContext {
    /// Fresh state: nothing stopped, prevented, or marked.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether no further ancestor will be visited.
    pub fn is_propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }

    /// Whether the remaining event types on the current control are skipped.
    pub fn is_immediate_propagation_stopped(&self) -> bool {
        self.immediate_propagation_stopped
    }

    /// Whether a handler asked to suppress the host's default action.
    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }

    /// Whether `key` was marked by a handler.
    pub fn is_marked(&self, key: &str) -> bool {
        self.marks.contains(&key)
    }

    /// All marks, in the order they were first set.
    pub fn marks(&self) -> &[&'static str] {
        &self.marks
    }

    pub(crate) fn begin_control(&mut self) {
        self.immediate_propagation_stopped = false;
    }
}

/// What a handler sees: one event type delivered to one control.
#[derive(Debug)]
pub struct ControlEvent<'a, N, C> {
    pub(crate) event_type: &'static str,
    pub(crate) pseudo: bool,
    pub(crate) raw: &'a RawEvent<N>,
    pub(crate) gestures: &'a [&'static str],
    pub(crate) current_target: N,
    pub(crate) src_control: C,
    pub(crate) context: &'a mut DispatchContext,
}

impl<'a, N: Copy, C: Copy> ControlEvent<'a, N, C> {
    /// The event type for this step: a gesture name such as `"sapselect"`, or the raw
    /// type such as `"keydown"`.
    pub fn event_type(&self) -> &'static str {
        self.event_type
    }

    /// Whether this step delivers a gesture rather than the raw type.
    pub fn is_pseudo(&self) -> bool {
        self.pseudo
    }

    /// All gesture names the raw event classified as, in dispatch order.
    pub fn gestures(&self) -> &'a [&'static str] {
        self.gestures
    }

    /// The underlying raw event.
    pub fn raw(&self) -> &'a RawEvent<N> {
        self.raw
    }

    /// The raw DOM type.
    pub fn raw_type(&self) -> RawType {
        self.raw.raw_type()
    }

    /// The key code of the raw event.
    pub fn key_code(&self) -> u16 {
        self.raw.key_code()
    }

    /// The modifiers of the raw event.
    pub fn modifiers(&self) -> Modifiers {
        self.raw.modifiers()
    }

    /// The DOM node the raw event fired on.
    pub fn target(&self) -> N {
        *self.raw.target()
    }

    /// The DOM node of the control currently handling the event.
    pub fn current_target(&self) -> N {
        self.current_target
    }

    /// The innermost control the event was resolved to.
    pub fn src_control(&self) -> C {
        self.src_control
    }

    /// Do not visit any further ancestor.
    pub fn stop_propagation(&mut self) {
        self.context.propagation_stopped = true;
    }

    /// Skip the remaining event types on the current control.
    ///
    /// Ancestors are still visited unless propagation is stopped too.
    pub fn stop_immediate_propagation(&mut self) {
        self.context.immediate_propagation_stopped = true;
    }

    /// Whether propagation has been stopped.
    pub fn is_propagation_stopped(&self) -> bool {
        self.context.propagation_stopped
    }

    /// Whether immediate propagation has been stopped on this control.
    pub fn is_immediate_propagation_stopped(&self) -> bool {
        self.context.immediate_propagation_stopped
    }

    /// Ask the host to skip its default action.
    pub fn prevent_default(&mut self) {
        self.context.default_prevented = true;
    }

    /// Whether the default action has been prevented.
    pub fn is_default_prevented(&self) -> bool {
        self.context.default_prevented
    }

    /// Mark the event with `key`, e.g. `"handledByControl"`.
    pub fn set_marked(&mut self, key: &'static str) {
        if !self.context.marks.contains(&key) {
            self.context.marks.push(key);
        }
    }

    /// Whether the event carries the mark `key`.
    pub fn is_marked(&self, key: &str) -> bool {
        self.context.is_marked(key)
    }
}

/// How a UI area disposed of a raw event.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Disposition {
    /// The raw type is not bound by the area.
    Ignored,
    /// No control encloses the target.
    NoControl,
    /// The area or its core is locked; only control-event hooks ran.
    Locked,
    /// Handlers were walked.
    Dispatched,
}

/// Outcome of [`UiArea::handle_event`](crate::ui_area::UiArea::handle_event).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DispatchReport<C> {
    /// What happened to the event.
    pub disposition: Disposition,
    /// The innermost control the target resolved to.
    pub src_control: Option<C>,
    /// The control whose handler stopped propagation, if any.
    pub stopped_at: Option<C>,
    /// Final propagation and marking state.
    pub context: DispatchContext,
}

impl<C> DispatchReport<C> {
    pub(crate) fn new(disposition: Disposition, src_control: Option<C>) -> Self {
        Self {
            disposition,
            src_control,
            stopped_at: None,
            context: DispatchContext::new(),
        }
    }

    /// Whether a handler prevented the default action.
    pub fn default_prevented(&self) -> bool {
        self.context.is_default_prevented()
    }

    /// Whether a handler stopped propagation.
    pub fn propagation_stopped(&self) -> bool {
        self.context.is_propagation_stopped()
    }
}
