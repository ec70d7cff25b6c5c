// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dispatching raw events through a UI area with `understory_responder`.
//!
//! A list control renders into a container node; each item control renders into a row
//! node inside it, with an undecorated label node inside each row. Events fired on the
//! labels resolve to the item control and bubble up to the list.
//!
//! Run:
//! - `cargo run -p understory_demos --example ui_area_dispatch`

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use understory_pseudo_event::{Modifiers, RawEvent, RawType, key_codes};
use understory_responder::types::{ControlEvent, ControlTree, DispatchReport};
use understory_responder::ui_area::UiArea;
use understory_responder::ui_core::Core;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
enum Control {
    List,
    Item(u32),
}

#[derive(Default)]
struct Scene {
    parents: HashMap<u32, u32>,
    owners: HashMap<u32, Control>,
    refs: HashMap<Control, u32>,
    selected: Option<u32>,
}

impl Scene {
    fn add(&mut self, node: u32, parent: u32, control: Option<Control>) {
        self.parents.insert(node, parent);
        if let Some(c) = control {
            self.owners.insert(node, c);
            self.refs.insert(c, node);
        }
    }
}

impl ControlTree for Scene {
    type Node = u32;
    type Control = Control;

    fn owner_of(&self, node: &u32) -> Option<Control> {
        self.owners.get(node).copied()
    }

    fn parent_node(&self, node: &u32) -> Option<u32> {
        self.parents.get(node).copied()
    }

    fn dom_ref(&self, control: &Control) -> Option<u32> {
        self.refs.get(control).copied()
    }

    fn handle(&mut self, control: Control, event: &mut ControlEvent<'_, u32, Control>) {
        println!(
            "  {control:?}.on{} (current target {})",
            event.event_type(),
            event.current_target()
        );
        match (control, event.event_type()) {
            (Control::Item(i), "sapselect") => {
                self.selected = Some(i);
                event.set_marked("handledByControl");
                event.stop_immediate_propagation();
            }
            (Control::Item(_), "sapdelayeddoubleclick") => event.prevent_default(),
            (Control::List, "sapescape") => {
                self.selected = None;
                event.stop_propagation();
            }
            _ => {}
        }
    }
}

fn report(label: &str, r: &DispatchReport<Control>) {
    println!(
        "{label}: {:?} src={:?} stopped_at={:?} prevented={} marks={:?}\n",
        r.disposition,
        r.src_control,
        r.stopped_at,
        r.default_prevented(),
        r.context.marks()
    );
}

fn main() {
    // Root 0 > list container 1 > rows 10, 20 > labels 11, 21. Node 2 is a bare gap.
    let mut scene = Scene::default();
    scene.add(1, 0, Some(Control::List));
    scene.add(10, 1, Some(Control::Item(1)));
    scene.add(11, 10, None);
    scene.add(20, 1, Some(Control::Item(2)));
    scene.add(21, 20, None);
    scene.add(2, 0, None);

    let mut core: Core<u32, Control> = Core::standard();
    let hook_count = Rc::new(RefCell::new(0_u32));
    let counter = Rc::clone(&hook_count);
    let hook = core.attach_control_event(move |raw, control| {
        *counter.borrow_mut() += 1;
        let (raw_type, target) = (raw.raw_type(), raw.target());
        println!("[hook] {raw_type} on {target} -> {control:?}");
    });

    let mut area = UiArea::new(0);
    println!("bound raw types: {:?}\n", area.bound_types(&core));

    let enter = RawEvent::key_down(21, key_codes::ENTER, Modifiers::empty());
    let r = area.handle_event(&mut core, &mut scene, &enter);
    report("enter", &r);
    println!("selected item: {:?}\n", scene.selected);

    let escape = RawEvent::key_down(11, key_codes::ESCAPE, Modifiers::empty());
    let r = area.handle_event(&mut core, &mut scene, &escape);
    report("escape", &r);

    for at in [5_000, 5_500] {
        let click = RawEvent::new(RawType::Click, 11).with_time_stamp(at);
        let r = area.handle_event(&mut core, &mut scene, &click);
        report(&format!("click @ {at}"), &r);
    }

    let stray = RawEvent::new(RawType::Click, 2);
    let r = area.handle_event(&mut core, &mut scene, &stray);
    report("gap click", &r);

    let moved = RawEvent::new(RawType::MouseMove, 11);
    let r = area.handle_event(&mut core, &mut scene, &moved);
    report("mousemove", &r);

    area.lock();
    let locked = RawEvent::key_down(11, key_codes::ENTER, Modifiers::empty());
    let r = area.handle_event(&mut core, &mut scene, &locked);
    report("locked enter", &r);
    area.unlock();

    core.detach_control_event(hook);
    println!("hook ran {} times", hook_count.borrow());
}
