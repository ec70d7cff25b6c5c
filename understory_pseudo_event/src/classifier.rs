// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The classifier: raw event in, ordered gesture names out.
//!
//! ## Semantics
//!
//! - Events whose raw type is outside the registry's basic-types index yield no names
//!   without touching any rule.
//! - Otherwise every rule accepting the raw type is tested in registration order and
//!   each match is appended. Matches are not exclusive: a plain Down arrow yields
//!   `sapdown`, `sapdecrease` and `sapnext`.
//! - The result is cached on the [`RawEvent`]; asking again returns the cached list.
//!
//! ## Click timing
//!
//! [`Predicate::DelayedClick`] rules need the time of the previous click on the same DOM
//! node. The classifier keeps those times in a [`ClickTimes`] store and updates it once
//! per classified `click`, before any timing rule is tested. Entries are never evicted on
//! their own; hosts that destroy DOM nodes can call [`Classifier::forget_node`].
//!
//! The store sits behind a [`RefCell`], so a classifier is meant for the single UI thread
//! that delivers input events. It is not `Sync`.
//!
//! ```
//! use understory_pseudo_event::{key_codes, Classifier, LayoutDirection, Modifiers, RawEvent};
//!
//! let mut classifier: Classifier<u32> = Classifier::standard();
//! let ev = RawEvent::key_down(1, key_codes::ARROW_RIGHT, Modifiers::empty());
//! assert!(classifier.classify(&ev).contains(&"sapnext"));
//!
//! classifier.set_layout_direction(LayoutDirection::Rtl);
//! let ev = RawEvent::key_down(1, key_codes::ARROW_RIGHT, Modifiers::empty());
//! assert!(classifier.classify(&ev).contains(&"sapprevious"));
//! ```

use core::cell::RefCell;
use core::hash::Hash;

use hashbrown::HashMap;

use crate::raw::{PseudoTypes, RawEvent};
use crate::registry::GestureRegistry;
use crate::rule::{LayoutDirection, Predicate};

/// Last click time per DOM node, in milliseconds.
#[derive(Clone, Debug)]
pub struct ClickTimes<N> {
    last: HashMap<N, u64>,
}

impl<N: Eq + Hash> ClickTimes<N> {
    /// An empty store.
    pub fn new() -> Self {
        Self {
            last: HashMap::new(),
        }
    }

    /// Record a click on `node` and return the time since the previous one.
    ///
    /// # Arguments
    /// * `node` - DOM node that was clicked
    /// * `time_stamp` - Click time in milliseconds
    ///
    /// # Returns
    /// Milliseconds since the previous click on `node` (saturating at zero when the
    /// clock appears to run backwards), or `None` for the first click on it.
    pub fn record(&mut self, node: N, time_stamp: u64) -> Option<u64> {
        self.last
            .insert(node, time_stamp)
            .map(|previous| time_stamp.saturating_sub(previous))
    }

    /// Time of the last recorded click on `node`.
    pub fn last_click(&self, node: &N) -> Option<u64> {
        self.last.get(node).copied()
    }

    /// Drop the entry for `node`. Returns whether one existed.
    pub fn forget(&mut self, node: &N) -> bool {
        self.last.remove(node).is_some()
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.last.clear();
    }

    /// Number of nodes with a recorded click.
    pub fn len(&self) -> usize {
        self.last.len()
    }

    /// Whether no click has been recorded.
    pub fn is_empty(&self) -> bool {
        self.last.is_empty()
    }
}

impl<N: Eq + Hash> Default for ClickTimes<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Classifies [`RawEvent`]s against a frozen [`GestureRegistry`].
///
/// `N` is the DOM node handle used as the click timing key.
#[derive(Debug)]
pub struct Classifier<N> {
    registry: GestureRegistry,
    direction: LayoutDirection,
    clicks: RefCell<ClickTimes<N>>,
}

impl<N: Copy + Eq + Hash> Classifier<N> {
    /// A classifier over `registry`, left to right.
    pub fn new(registry: GestureRegistry) -> Self {
        Self {
            registry,
            direction: LayoutDirection::default(),
            clicks: RefCell::new(ClickTimes::new()),
        }
    }

    /// A classifier over the standard rule table.
    pub fn standard() -> Self {
        Self::new(GestureRegistry::standard())
    }

    /// The registry this classifier evaluates.
    pub fn registry(&self) -> &GestureRegistry {
        &self.registry
    }

    /// Raw types any rule can match.
    pub fn basic_types(&self) -> crate::raw::RawTypes {
        self.registry.basic_types()
    }

    /// The layout direction handed to rules.
    pub fn layout_direction(&self) -> LayoutDirection {
        self.direction
    }

    /// Change the layout direction. Takes effect for the next unclassified event.
    pub fn set_layout_direction(&mut self, direction: LayoutDirection) {
        self.direction = direction;
    }

    /// Ordered gesture names for `event`, computed once and cached on the event.
    pub fn classify<'e>(&self, event: &'e RawEvent<N>) -> &'e [&'static str] {
        event.pseudo_types_or_init(|| self.evaluate(event))
    }

    /// Whether `event` classifies as the gesture `name`.
    pub fn has_gesture(&self, event: &RawEvent<N>, name: &str) -> bool {
        self.classify(event).contains(&name)
    }

    /// Time of the last classified click on `node`.
    pub fn last_click(&self, node: &N) -> Option<u64> {
        self.clicks.borrow().last_click(node)
    }

    /// Forget the click history of `node`. Returns whether it had one.
    pub fn forget_node(&self, node: &N) -> bool {
        self.clicks.borrow_mut().forget(node)
    }

    /// Forget all click history.
    pub fn clear_click_times(&self) {
        self.clicks.borrow_mut().clear();
    }

    fn evaluate(&self, event: &RawEvent<N>) -> PseudoTypes {
        let input = event.input();
        let mut out = PseudoTypes::new();
        if !self.registry.basic_types().has(input.raw_type) {
            return out;
        }
        // Recorded once per event even if several timing rules exist.
        let mut click_elapsed: Option<Option<u64>> = None;
        for rule in self.registry.candidates(input.raw_type) {
            let matched = match rule.predicate {
                Predicate::Input(test) => test(input, self.direction),
                Predicate::DelayedClick(window) => click_elapsed
                    .get_or_insert_with(|| {
                        self.clicks
                            .borrow_mut()
                            .record(*event.target(), input.time_stamp)
                    })
                    .is_some_and(|elapsed| window.contains(elapsed)),
            };
            if matched {
                out.push(rule.name);
            }
        }
        tracing::trace!(
            raw_type = input.raw_type.as_str(),
            key_code = input.key_code,
            gestures = ?out,
            "classified raw event"
        );
        out
    }
}

impl<N: Copy + Eq + Hash> Default for Classifier<N> {
    fn default() -> Self {
        Self::standard()
    }
}
