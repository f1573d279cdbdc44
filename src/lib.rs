#![cfg(target_arch = "wasm32")]
use crate::core::clock::ClockState;
use crate::core::globe::build_scene;
use crate::core::orbit::OrbitCamera;
use crate::core::session::Session;
use crate::core::state::AppState;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod input;
mod labels;
mod overlay;
mod player;
mod render;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("lofi-globe starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas: web::HtmlCanvasElement = dom::element_by_id(&document, "app-canvas")?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    wire_canvas_resize(&canvas);

    let session = Session::from_entropy();
    log::info!(
        "[session] {} weather points, {} stars, playlist {}",
        session.weather().len(),
        session.stars().len(),
        session.playlist().as_str()
    );

    // Timers run against a monotonic origin taken before anything is scheduled
    let origin = Instant::now();
    let state = Rc::new(RefCell::new(AppState::new(0.0)));
    let orbit = Rc::new(RefCell::new(OrbitCamera::default()));
    let drag = Rc::new(RefCell::new(input::DragState::default()));

    let clock = ClockState::new(chrono::Local::now().naive_local());
    overlay::set_clock(&document, &clock.reading());
    overlay::set_volume(&document, state.borrow().playback().volume_percent());
    overlay::set_play_button(&document, false);
    overlay::build_legend(&document);

    events::wire_controls(events::ControlWiring {
        document: document.clone(),
        state: state.clone(),
        playlist: session.playlist(),
    });
    events::wire_orbit_handlers(events::OrbitWiring {
        canvas: canvas.clone(),
        orbit: orbit.clone(),
        drag,
    });

    let globe = build_scene(session.weather());
    let labels = match labels::MarkerLabels::new(&document, session.weather(), &globe.markers) {
        Ok(l) => Some(l),
        Err(e) => {
            log::warn!("[labels] disabled: {:?}", e);
            None
        }
    };

    let gpu = frame::init_gpu(&canvas, session.stars()).await;

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        document,
        canvas,
        state,
        orbit,
        clock,
        playlist: session.playlist(),
        globe,
        labels,
        gpu,
        origin,
        last_instant: Instant::now(),
        changes: Vec::new(),
        draws: Vec::new(),
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
