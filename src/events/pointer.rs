use crate::core::orbit::OrbitCamera;
use crate::dom;
use crate::input::{self, DragState};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

#[derive(Clone)]
pub struct OrbitWiring {
    pub canvas: web::HtmlCanvasElement,
    pub orbit: Rc<RefCell<OrbitCamera>>,
    pub drag: Rc<RefCell<DragState>>,
}

pub fn wire_orbit_handlers(w: OrbitWiring) {
    wire_pointerdown(&w);
    wire_pointermove(&w);
    wire_pointerup(&w);
    wire_wheel(&w);
}

fn wire_pointerdown(w: &OrbitWiring) {
    let w = w.clone();
    let canvas = w.canvas.clone();
    dom::add_listener(&canvas, "pointerdown", move |ev: web::PointerEvent| {
        let pos = input::pointer_canvas_px(&ev, &w.canvas);
        w.drag.borrow_mut().begin(ev.pointer_id(), pos);
        _ = w.canvas.set_pointer_capture(ev.pointer_id());
    });
}

fn wire_pointermove(w: &OrbitWiring) {
    let w = w.clone();
    let canvas = w.canvas.clone();
    dom::add_listener(&canvas, "pointermove", move |ev: web::PointerEvent| {
        let pos = input::pointer_canvas_px(&ev, &w.canvas);
        let moved = w.drag.borrow_mut().drag_to(ev.pointer_id(), pos);
        if let Some((dx, dy)) = moved {
            let h = w.canvas.height() as f32;
            w.orbit.borrow_mut().rotate_by_pixels(dx, dy, h);
        }
    });
}

fn wire_pointerup(w: &OrbitWiring) {
    for event in ["pointerup", "pointercancel"] {
        let w = w.clone();
        let canvas = w.canvas.clone();
        dom::add_listener(&canvas, event, move |ev: web::PointerEvent| {
            if w.drag.borrow_mut().end(ev.pointer_id()) {
                _ = w.canvas.release_pointer_capture(ev.pointer_id());
            }
        });
    }
}

fn wire_wheel(w: &OrbitWiring) {
    let w = w.clone();
    let canvas = w.canvas.clone();
    dom::add_listener(&canvas, "wheel", move |ev: web::WheelEvent| {
        ev.prevent_default();
        w.orbit.borrow_mut().zoom(ev.delta_y() as f32);
    });
}
