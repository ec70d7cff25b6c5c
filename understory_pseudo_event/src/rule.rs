// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture rules: a name, the raw types it can match, and a predicate.

use crate::raw::{Input, RawType, RawTypes};

/// Horizontal layout direction, consulted by direction-aware rules on every evaluation.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum LayoutDirection {
    /// Left to right.
    #[default]
    Ltr,
    /// Right to left.
    Rtl,
}

impl LayoutDirection {
    /// Whether this is [`LayoutDirection::Rtl`].
    pub const fn is_rtl(self) -> bool {
        matches!(self, Self::Rtl)
    }
}

/// Inclusive window of milliseconds between two clicks on the same node.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ClickWindow {
    /// Shortest accepted delay.
    pub min_ms: u64,
    /// Longest accepted delay.
    pub max_ms: u64,
}

impl ClickWindow {
    /// 300 ms to 1300 ms: slower than a double click, faster than two separate clicks.
    pub const DELAYED_DOUBLE_CLICK: Self = Self {
        min_ms: 300,
        max_ms: 1300,
    };

    /// Whether `elapsed` falls inside the window.
    pub const fn contains(self, elapsed: u64) -> bool {
        elapsed >= self.min_ms && elapsed <= self.max_ms
    }
}

impl Default for ClickWindow {
    fn default() -> Self {
        Self::DELAYED_DOUBLE_CLICK
    }
}

/// How a rule decides whether an event matches.
#[derive(Copy, Clone, Debug)]
pub enum Predicate {
    /// Pure test over key code, modifiers and the current layout direction.
    Input(fn(&Input, LayoutDirection) -> bool),
    /// Matches when the previous click on the same target node lies inside the window.
    ///
    /// Evaluated against the classifier's click timestamp store, which it updates.
    DelayedClick(ClickWindow),
}

/// A named gesture rule.
///
/// Rules are only ever evaluated for events whose raw type is in `basic_types`.
///
/// ```
/// use understory_pseudo_event::{key_codes, GestureRule, RawType, RawTypes};
/// use understory_pseudo_event::modifiers::has_exact_modifiers;
///
/// let copy = GestureRule::new("sapcopy", RawTypes::KEYDOWN, |e, _| {
///     e.key_code == key_codes::C && has_exact_modifiers(e, true, false, false)
/// });
/// assert!(copy.accepts(RawType::KeyDown));
/// assert!(!copy.accepts(RawType::KeyUp));
/// ```
#[derive(Copy, Clone, Debug)]
pub struct GestureRule {
    /// Gesture name; handlers are looked up as `on` + name.
    pub name: &'static str,
    /// Raw types this rule can ever match.
    pub basic_types: RawTypes,
    /// Match test.
    pub predicate: Predicate,
}

impl GestureRule {
    /// A rule with a pure input predicate.
    pub const fn new(
        name: &'static str,
        basic_types: RawTypes,
        predicate: fn(&Input, LayoutDirection) -> bool,
    ) -> Self {
        Self {
            name,
            basic_types,
            predicate: Predicate::Input(predicate),
        }
    }

    /// A click-timing rule over `click` events.
    pub const fn delayed_click(name: &'static str, window: ClickWindow) -> Self {
        Self {
            name,
            basic_types: RawTypes::CLICK,
            predicate: Predicate::DelayedClick(window),
        }
    }

    /// Whether events of `raw_type` may be tested against this rule.
    pub const fn accepts(&self, raw_type: RawType) -> bool {
        self.basic_types.has(raw_type)
    }
}
