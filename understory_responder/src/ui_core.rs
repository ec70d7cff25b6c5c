// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The core shared by UI areas: classifier, control event set, lock, and hooks.
//!
//! ## Control-event hooks
//!
//! Hooks observe every control event a UI area accepts, before the lock check and before
//! any handler runs. They suit logging, telemetry, or closing popups on outside clicks
//! (attach them to a catch-all area's core).
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use understory_responder::ui_core::Core;
//!
//! let mut core: Core<u32, &str> = Core::standard();
//! let seen = Rc::new(Cell::new(0));
//! let counter = Rc::clone(&seen);
//! let id = core.attach_control_event(move |_raw, _control| counter.set(counter.get() + 1));
//! assert!(core.detach_control_event(id));
//! assert!(!core.detach_control_event(id));
//! ```

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;
use core::hash::Hash;

use understory_pseudo_event::{Classifier, LayoutDirection, RawEvent, RawTypes};

/// Observer for control events; receives the raw event and the resolved control.
pub type ControlEventHook<N, C> = Box<dyn FnMut(&RawEvent<N>, Option<C>)>;

/// Handle returned by [`Core::attach_control_event`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct HookId(u64);

/// State shared by every [`UiArea`](crate::ui_area::UiArea) of one application.
pub struct Core<N, C> {
    classifier: Classifier<N>,
    control_events: RawTypes,
    locked: bool,
    hooks: Vec<(HookId, ControlEventHook<N, C>)>,
    next_hook: u64,
}

impl<N, C> fmt::Debug for Core<N, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Core")
            .field("control_events", &self.control_events)
            .field("locked", &self.locked)
            .field("hooks", &self.hooks.len())
            .finish_non_exhaustive()
    }
}

impl<N: Copy + Eq + Hash, C: Copy> Core<N, C> {
    /// A core around `classifier`, with the standard control event set.
    pub fn new(classifier: Classifier<N>) -> Self {
        Self {
            classifier,
            control_events: RawTypes::CONTROL_EVENTS,
            locked: false,
            hooks: Vec::new(),
            next_hook: 0,
        }
    }

    /// A core with the standard gesture table.
    pub fn standard() -> Self {
        Self::new(Classifier::standard())
    }

    /// The classifier areas consult.
    pub fn classifier(&self) -> &Classifier<N> {
        &self.classifier
    }

    /// Set the layout direction used by direction-aware gestures.
    pub fn set_layout_direction(&mut self, direction: LayoutDirection) {
        self.classifier.set_layout_direction(direction);
    }

    /// Raw types controls react to.
    pub fn control_events(&self) -> RawTypes {
        self.control_events
    }

    /// Replace the control event set.
    ///
    /// Areas still bind the classifier's basic types on top of this set.
    pub fn set_control_events(&mut self, types: RawTypes) {
        self.control_events = types;
    }

    /// Suppress handler dispatch in every area. Hooks keep running.
    pub fn lock(&mut self) {
        self.locked = true;
    }

    /// Re-enable handler dispatch. Events dropped while locked are not replayed.
    pub fn unlock(&mut self) {
        self.locked = false;
    }

    /// Whether the core is locked.
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Register a control-event hook.
    pub fn attach_control_event(
        &mut self,
        hook: impl FnMut(&RawEvent<N>, Option<C>) + 'static,
    ) -> HookId {
        let id = HookId(self.next_hook);
        // Wraps after u64::MAX attaches.
        self.next_hook = self.next_hook.wrapping_add(1);
        self.hooks.push((id, Box::new(hook)));
        id
    }

    /// Remove a hook. Returns whether it was registered.
    pub fn detach_control_event(&mut self, id: HookId) -> bool {
        let before = self.hooks.len();
        self.hooks.retain(|(h, _)| *h != id);
        self.hooks.len() != before
    }

    pub(crate) fn fire_control_event(&mut self, raw: &RawEvent<N>, control: Option<C>) {
        for (_, hook) in &mut self.hooks {
            hook(raw, control);
        }
    }
}
