use crate::core::clock::ClockReading;
use crate::core::palette::{css_hex, BANDS};
use crate::core::playback::volume_track_css;
use crate::core::{REVEAL_FADE_MS, REVEAL_ROOTS};
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
fn hide_element(el: &web::Element) {
    _ = el.class_list().add_1("hidden");
    // fallback for environments without CSS class
    _ = el.set_attribute("style", "display:none");
}

#[inline]
pub fn hide_loading(document: &web::Document) {
    if let Some(el) = document.get_element_by_id("loading-screen") {
        hide_element(&el);
    }
}

/// Fade in the scene and the UI panels together.
pub fn reveal(document: &web::Document) {
    for id in REVEAL_ROOTS {
        if let Some(el) = document.get_element_by_id(id) {
            fade_in(el);
        }
    }
}

fn fade_in(el: web::Element) {
    _ = el.class_list().remove_1("hidden");
    let Ok(html) = el.dyn_into::<web::HtmlElement>() else {
        return;
    };
    let style = html.style();
    _ = style.set_property("display", "");
    _ = style.set_property("transition", &format!("opacity {}ms ease", REVEAL_FADE_MS));
    // next frame, so the transition starts from the hidden opacity
    let cb: js_sys::Function = wasm_bindgen::closure::Closure::once_into_js(move || {
        _ = html.style().set_property("opacity", "1");
    })
    .unchecked_into();
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(&cb);
    }
}

pub fn set_clock(document: &web::Document, reading: &ClockReading) {
    dom::set_text(document, "clock-time", &reading.time);
    dom::set_text(document, "clock-date", &reading.date);
}

pub fn set_play_button(document: &web::Document, playing: bool) {
    if let Some(el) = document.get_element_by_id("play-toggle") {
        el.set_text_content(Some(if playing { "⏸" } else { "▶" }));
        _ = el.set_attribute("aria-label", if playing { "Pause" } else { "Play" });
    }
}

/// Sync the slider thumb, its filled track and the percentage readout.
pub fn set_volume(document: &web::Document, percent: u8) {
    if let Ok(input) = dom::element_by_id::<web::HtmlInputElement>(document, "volume") {
        input.set_value(&percent.to_string());
        _ = input.style().set_property("background", &volume_track_css(percent));
    }
    dom::set_text(document, "volume-value", &format!("{}%", percent));
}

pub fn build_legend(document: &web::Document) {
    let Some(el) = document.get_element_by_id("legend-items") else {
        return;
    };
    let rows: String = BANDS
        .iter()
        .map(|b| {
            format!(
                "<div class='legend-row'><span class='swatch' style='background:{0};box-shadow:0 0 8px {0}'></span>{1}</div>",
                css_hex(b.color),
                b.legend
            )
        })
        .collect();
    el.set_inner_html(&rows);
}
