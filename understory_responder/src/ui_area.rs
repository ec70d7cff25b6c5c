// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! UI area: the single entry point for raw events under one root DOM node.
//!
//! ## Flow
//!
//! [`UiArea::handle_event`] processes one raw event synchronously:
//!
//! 1. Events whose raw type the area does not bind are ignored.
//! 2. The target resolves to the innermost enclosing control. Without one, the event is
//!    dropped, unless the area is the catch-all area, which carries on without a control.
//! 3. Control-event hooks on the [`Core`] run, locked or not.
//! 4. If the area or its core is locked, dispatch ends here.
//! 5. The event is classified and [`dispatcher::run`] walks the controls.
//!
//! The raw event is never mutated apart from its cached gesture list; every handler step
//! gets its own [`ControlEvent`](crate::types::ControlEvent) view.

use core::fmt::Debug;
use core::hash::Hash;

use understory_pseudo_event::{RawEvent, RawTypes};

use crate::dispatcher;
use crate::types::{ControlTree, DispatchContext, DispatchReport, Disposition};
use crate::ui_core::Core;

/// A root DOM node whose descendants' input events are dispatched to controls.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UiArea<N> {
    root: N,
    catch_all: bool,
    locked: bool,
}

impl<N: Copy + Eq + Hash + Debug> UiArea<N> {
    /// An area rooted at `root`.
    pub fn new(root: N) -> Self {
        Self {
            root,
            catch_all: false,
            locked: false,
        }
    }

    /// Make this the catch-all area, which also processes events that resolve to no control.
    pub fn with_catch_all(mut self, catch_all: bool) -> Self {
        self.catch_all = catch_all;
        self
    }

    /// The root DOM node.
    pub fn root(&self) -> N {
        self.root
    }

    /// Whether this is the catch-all area.
    pub fn is_catch_all(&self) -> bool {
        self.catch_all
    }

    /// Suppress handler dispatch in this area. Hooks keep running.
    pub fn lock(&mut self) {
        self.locked = true;
    }

    /// Re-enable handler dispatch in this area.
    pub fn unlock(&mut self) {
        self.locked = false;
    }

    /// Whether this area itself is locked. See also [`Core::is_locked`].
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Raw types a host must listen for on the root node: the control event set plus
    /// everything the classifier's rules need.
    pub fn bound_types<C: Copy>(&self, core: &Core<N, C>) -> RawTypes {
        core.control_events() | core.classifier().basic_types()
    }

    /// Dispatch one raw event fired on a node under this area's root.
    ///
    /// Handler panics propagate to the caller.
    pub fn handle_event<T>(
        &self,
        core: &mut Core<N, T::Control>,
        tree: &mut T,
        raw: &RawEvent<N>,
    ) -> DispatchReport<T::Control>
    where
        T: ControlTree<Node = N>,
    {
        if !self.bound_types(core).has(raw.raw_type()) {
            tracing::debug!(raw_type = raw.raw_type().as_str(), "raw type not bound");
            return DispatchReport::new(Disposition::Ignored, None);
        }

        let control = tree.nearest_control(*raw.target(), self.root);
        if control.is_none() && !self.catch_all {
            tracing::debug!(node = ?raw.target(), "no control for event target");
            return DispatchReport::new(Disposition::NoControl, None);
        }

        core.fire_control_event(raw, control);

        if self.locked || core.is_locked() {
            tracing::debug!(root = ?self.root, "area locked, dispatch skipped");
            return DispatchReport::new(Disposition::Locked, control);
        }

        let gestures = core.classifier().classify(raw);
        let Some(src) = control else {
            return DispatchReport::new(Disposition::NoControl, None);
        };

        let mut context = DispatchContext::new();
        let stopped_at = dispatcher::run(tree, self.root, src, raw, gestures, &mut context);
        DispatchReport {
            disposition: Disposition::Dispatched,
            src_control: Some(src),
            stopped_at,
            context,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_tree::{Name, Reaction, TestTree, three_levels};
    use alloc::rc::Rc;
    use alloc::vec;
    use alloc::vec::Vec;
    use core::cell::RefCell;
    use understory_pseudo_event::{LayoutDirection, Modifiers, RawType, key_codes};

    fn setup() -> (UiArea<u32>, Core<u32, Name>) {
        (UiArea::new(0), Core::standard())
    }

    fn hook_log(core: &mut Core<u32, Name>) -> Rc<RefCell<Vec<Option<Name>>>> {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        core.attach_control_event(move |_, c| sink.borrow_mut().push(c));
        seen
    }

    fn enter_on(node: u32) -> RawEvent<u32> {
        RawEvent::key_down(node, key_codes::ENTER, Modifiers::empty())
    }

    #[test]
    fn click_bubbles_through_three_levels() {
        let (area, mut core) = setup();
        let mut tree = three_levels()
            .on("gp", "click")
            .on("parent", "click")
            .on("child", "click");
        let report = area.handle_event(&mut core, &mut tree, &RawEvent::new(RawType::Click, 5));
        assert_eq!(report.disposition, Disposition::Dispatched);
        assert_eq!(report.src_control, Some("child"));
        assert_eq!(report.stopped_at, None);
        assert_eq!(
            tree.calls(),
            vec![("child", "click"), ("parent", "click"), ("gp", "click")]
        );
    }

    #[test]
    fn stop_propagation_at_child_hides_ancestors() {
        let (area, mut core) = setup();
        let mut tree = three_levels()
            .on("gp", "click")
            .on("parent", "click")
            .react("child", "click", Reaction::StopPropagation);
        let report = area.handle_event(&mut core, &mut tree, &RawEvent::new(RawType::Click, 4));
        assert!(report.propagation_stopped());
        assert_eq!(report.stopped_at, Some("child"));
        assert_eq!(tree.calls(), vec![("child", "click")]);
    }

    #[test]
    fn immediate_stop_skips_trailing_raw_handler_only() {
        let (area, mut core) = setup();
        let mut tree = three_levels()
            .react("child", "sapselect", Reaction::StopImmediate)
            .on("child", "keydown")
            .on("parent", "keydown");
        let report = area.handle_event(&mut core, &mut tree, &enter_on(4));
        assert!(!report.propagation_stopped());
        assert_eq!(
            tree.calls(),
            vec![("child", "sapselect"), ("parent", "keydown")]
        );
    }

    #[test]
    fn immediate_stop_with_propagation_stop_ends_everything() {
        let (area, mut core) = setup();
        let mut tree = three_levels()
            .react("child", "sapselect", Reaction::StopBoth)
            .on("child", "sapenter")
            .on("child", "keydown")
            .on("parent", "keydown");
        area.handle_event(&mut core, &mut tree, &enter_on(4));
        assert_eq!(tree.calls(), vec![("child", "sapselect")]);
    }

    #[test]
    fn gestures_follow_classifier_order() {
        let (area, mut core) = setup();
        let mut tree = three_levels()
            .on("child", "keydown")
            .on("child", "sapenter")
            .on("child", "sapselect");
        area.handle_event(&mut core, &mut tree, &enter_on(4));
        assert_eq!(
            tree.calls(),
            vec![
                ("child", "sapselect"),
                ("child", "sapenter"),
                ("child", "keydown"),
            ]
        );
    }

    #[test]
    fn locked_area_runs_hooks_but_no_handlers() {
        let (mut area, mut core) = setup();
        let seen = hook_log(&mut core);
        let mut tree = three_levels().on("child", "click").on("child", "sapselect");
        area.lock();
        let report = area.handle_event(&mut core, &mut tree, &RawEvent::new(RawType::Click, 4));
        assert_eq!(report.disposition, Disposition::Locked);
        assert_eq!(report.src_control, Some("child"));
        area.handle_event(&mut core, &mut tree, &enter_on(4));
        assert_eq!(*seen.borrow(), [Some("child"), Some("child")]);
        assert!(tree.calls().is_empty());

        area.unlock();
        area.handle_event(&mut core, &mut tree, &RawEvent::new(RawType::Click, 4));
        assert_eq!(tree.calls(), vec![("child", "click")]);
    }

    #[test]
    fn locked_core_locks_every_area() {
        let (area, mut core) = setup();
        let seen = hook_log(&mut core);
        let mut tree = three_levels().on("child", "click");
        core.lock();
        let report = area.handle_event(&mut core, &mut tree, &RawEvent::new(RawType::Click, 4));
        assert_eq!(report.disposition, Disposition::Locked);
        assert_eq!(seen.borrow().len(), 1);
        assert!(tree.calls().is_empty());
    }

    #[test]
    fn gap_target_outside_controls_is_dropped() {
        let (area, mut core) = setup();
        let seen = hook_log(&mut core);
        let mut tree = three_levels().on("gp", "click");
        let report = area.handle_event(&mut core, &mut tree, &RawEvent::new(RawType::Click, 6));
        assert_eq!(report.disposition, Disposition::NoControl);
        assert!(seen.borrow().is_empty());
        assert!(tree.calls().is_empty());
    }

    #[test]
    fn catch_all_area_reports_controlless_events_to_hooks() {
        let area = UiArea::new(0).with_catch_all(true);
        let mut core: Core<u32, Name> = Core::standard();
        let seen = hook_log(&mut core);
        let mut tree = three_levels();
        let report = area.handle_event(&mut core, &mut tree, &RawEvent::new(RawType::Click, 6));
        assert_eq!(report.disposition, Disposition::NoControl);
        assert_eq!(*seen.borrow(), [None]);
    }

    #[test]
    fn unbound_raw_type_is_ignored() {
        let (area, mut core) = setup();
        let seen = hook_log(&mut core);
        let mut tree = three_levels().on("child", "mousemove");
        let report =
            area.handle_event(&mut core, &mut tree, &RawEvent::new(RawType::MouseMove, 4));
        assert_eq!(report.disposition, Disposition::Ignored);
        assert!(seen.borrow().is_empty());
        assert!(tree.calls().is_empty());
    }

    #[test]
    fn classifier_types_stay_bound_when_control_events_shrink() {
        let (area, mut core) = setup();
        core.set_control_events(RawTypes::FOCUSIN);
        let bound = area.bound_types(&core);
        assert!(bound.contains(RawTypes::FOCUSIN | RawTypes::KEYDOWN | RawTypes::CLICK));
        assert!(!bound.contains(RawTypes::KEYUP));
    }

    #[test]
    fn current_target_tracks_each_control() {
        let (area, mut core) = setup();
        let mut tree = three_levels()
            .on("gp", "click")
            .on("parent", "click")
            .on("child", "click");
        area.handle_event(&mut core, &mut tree, &RawEvent::new(RawType::Click, 5));
        let targets: Vec<(Name, u32, Name)> =
            tree.log.iter().map(|&(c, _, t, s)| (c, t, s)).collect();
        assert_eq!(
            targets,
            vec![("child", 4, "child"), ("parent", 3, "child"), ("gp", 1, "child")]
        );
    }

    #[test]
    fn marks_and_default_prevention_are_reported() {
        let (area, mut core) = setup();
        let mut tree = three_levels()
            .react("child", "click", Reaction::Mark("handledByControl"))
            .react("parent", "click", Reaction::PreventDefault);
        let report = area.handle_event(&mut core, &mut tree, &RawEvent::new(RawType::Click, 4));
        assert!(report.default_prevented());
        assert!(report.context.is_marked("handledByControl"));
        assert!(!report.propagation_stopped());
    }

    #[test]
    fn layout_direction_changes_apply_to_the_next_event() {
        let (area, mut core) = setup();
        let mut tree = three_levels().on("child", "sapnext").on("child", "sapprevious");
        let right = || RawEvent::key_down(4, key_codes::ARROW_RIGHT, Modifiers::empty());
        area.handle_event(&mut core, &mut tree, &right());
        core.set_layout_direction(LayoutDirection::Rtl);
        area.handle_event(&mut core, &mut tree, &right());
        assert_eq!(
            tree.calls(),
            vec![("child", "sapnext"), ("child", "sapprevious")]
        );
    }

    #[test]
    fn delayed_double_click_reaches_handlers() {
        let (area, mut core) = setup();
        let mut tree = three_levels()
            .on("child", "sapdelayeddoubleclick")
            .on("child", "click");
        let click = |at| RawEvent::new(RawType::Click, 5).with_time_stamp(at);
        area.handle_event(&mut core, &mut tree, &click(1_000));
        area.handle_event(&mut core, &mut tree, &click(1_600));
        area.handle_event(&mut core, &mut tree, &click(1_700));
        assert_eq!(
            tree.calls(),
            vec![
                ("child", "click"),
                ("child", "sapdelayeddoubleclick"),
                ("child", "click"),
                ("child", "click"),
            ]
        );
    }

    #[test]
    fn locked_events_are_not_replayed() {
        let (mut area, mut core) = setup();
        let mut tree: TestTree = three_levels().on("child", "click");
        area.lock();
        area.handle_event(&mut core, &mut tree, &RawEvent::new(RawType::Click, 4));
        area.unlock();
        assert!(tree.calls().is_empty());
    }
}
