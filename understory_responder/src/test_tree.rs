// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A scripted control tree for tests.

use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use crate::types::{ControlEvent, ControlTree};

pub(crate) type Name = &'static str;

#[derive(Copy, Clone, Debug)]
pub(crate) enum Reaction {
    StopPropagation,
    StopImmediate,
    StopBoth,
    PreventDefault,
    Mark(&'static str),
    Detach(Name),
    Deactivate(Name),
}

#[derive(Debug, Default)]
pub(crate) struct TestTree {
    parents: BTreeMap<u32, u32>,
    owners: BTreeMap<u32, Name>,
    refs: BTreeMap<Name, u32>,
    inactive: Vec<Name>,
    handlers: Vec<(Name, &'static str, Option<Reaction>)>,
    /// (control, event type, current target, src control)
    pub(crate) log: Vec<(Name, &'static str, u32, Name)>,
    /// `is_pseudo` for each logged call.
    pub(crate) pseudo: Vec<bool>,
}

impl TestTree {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// A plain DOM node with no owning control.
    pub(crate) fn gap(mut self, node: u32, parent: u32) -> Self {
        self.parents.insert(node, parent);
        self
    }

    /// A control rendered to `node`.
    pub(crate) fn control(mut self, name: Name, node: u32, parent: u32) -> Self {
        self.parents.insert(node, parent);
        self.owners.insert(node, name);
        self.refs.insert(name, node);
        self
    }

    /// Give `control` an `on<event_type>` handler that only records the call.
    pub(crate) fn on(mut self, control: Name, event_type: &'static str) -> Self {
        self.handlers.push((control, event_type, None));
        self
    }

    /// Give `control` an `on<event_type>` handler that records and then reacts.
    pub(crate) fn react(mut self, control: Name, event_type: &'static str, r: Reaction) -> Self {
        self.handlers.push((control, event_type, Some(r)));
        self
    }

    /// `(control, event type)` pairs in invocation order.
    pub(crate) fn calls(&self) -> Vec<(Name, &'static str)> {
        self.log.iter().map(|&(c, t, _, _)| (c, t)).collect()
    }

    fn detach(&mut self, name: Name) {
        if let Some(node) = self.refs.remove(name) {
            self.owners.remove(&node);
            self.parents.remove(&node);
        }
    }
}

impl ControlTree for TestTree {
    type Node = u32;
    type Control = Name;

    fn owner_of(&self, node: &u32) -> Option<Name> {
        self.owners.get(node).copied()
    }

    fn parent_node(&self, node: &u32) -> Option<u32> {
        self.parents.get(node).copied()
    }

    fn dom_ref(&self, control: &Name) -> Option<u32> {
        self.refs.get(control).copied()
    }

    fn is_active(&self, control: &Name) -> bool {
        self.refs.contains_key(control) && !self.inactive.contains(control)
    }

    fn handle(&mut self, control: Name, event: &mut ControlEvent<'_, u32, Name>) {
        let Some(&(_, _, reaction)) = self
            .handlers
            .iter()
            .find(|(c, t, _)| *c == control && *t == event.event_type())
        else {
            return;
        };
        self.log.push((
            control,
            event.event_type(),
            event.current_target(),
            event.src_control(),
        ));
        self.pseudo.push(event.is_pseudo());
        match reaction {
            None => {}
            Some(Reaction::StopPropagation) => event.stop_propagation(),
            Some(Reaction::StopImmediate) => event.stop_immediate_propagation(),
            Some(Reaction::StopBoth) => {
                event.stop_immediate_propagation();
                event.stop_propagation();
            }
            Some(Reaction::PreventDefault) => event.prevent_default(),
            Some(Reaction::Mark(key)) => event.set_marked(key),
            Some(Reaction::Detach(other)) => self.detach(other),
            Some(Reaction::Deactivate(other)) => self.inactive.push(other),
        }
    }
}

/// Root 0 holds: gp(1) > gap(2) > parent(3) > child(4) > gap(5), plus a bare gap 6 under the root.
pub(crate) fn three_levels() -> TestTree {
    TestTree::new()
        .control("gp", 1, 0)
        .gap(2, 1)
        .control("parent", 3, 2)
        .control("child", 4, 3)
        .gap(5, 4)
        .gap(6, 0)
}
