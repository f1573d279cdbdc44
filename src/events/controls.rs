use crate::core::playback::{parse_volume, PlaylistId};
use crate::core::state::AppState;
use crate::{dom, overlay, player};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct ControlWiring {
    pub document: web::Document,
    pub state: Rc<RefCell<AppState>>,
    pub playlist: PlaylistId,
}

pub fn wire_controls(w: ControlWiring) {
    wire_play_toggle(&w);
    wire_volume(&w);
    wire_pagehide(&w);
}

fn wire_play_toggle(w: &ControlWiring) {
    let w = w.clone();
    let document = w.document.clone();
    dom::add_click_listener(&document, "play-toggle", move || {
        let playing = {
            let mut st = w.state.borrow_mut();
            if st.is_torn_down() {
                return;
            }
            st.toggle_playback()
        };
        log::info!("[player] toggled, playing={}", playing);
        player::sync(&w.document, w.playlist, playing);
        overlay::set_play_button(&w.document, playing);
    });
}

fn wire_volume(w: &ControlWiring) {
    let w = w.clone();
    let Some(el) = w.document.get_element_by_id("volume") else {
        log::warn!("[ui] missing #volume");
        return;
    };
    dom::add_listener(&el, "input", move |ev: web::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<web::HtmlInputElement>().ok())
        else {
            return;
        };
        let Some(raw) = parse_volume(&input.value()) else {
            return;
        };
        let percent = w.state.borrow_mut().set_volume(raw);
        overlay::set_volume(&w.document, percent);
    });
}

fn wire_pagehide(w: &ControlWiring) {
    let w = w.clone();
    let Some(window) = web::window() else {
        return;
    };
    dom::add_listener(&window, "pagehide", move |_: web::Event| {
        w.state.borrow_mut().teardown();
        player::unmount(&w.document);
        log::info!("[app] torn down");
    });
}
