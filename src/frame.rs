use crate::core::clock::ClockState;
use crate::core::globe::GlobeScene;
use crate::core::orbit::OrbitCamera;
use crate::core::playback::PlaylistId;
use crate::core::scene::DrawItem;
use crate::core::state::{AppState, Change};
use crate::labels::MarkerLabels;
use crate::render;
use crate::{overlay, player};
use glam::Vec3;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub document: web::Document,
    pub canvas: web::HtmlCanvasElement,
    pub state: Rc<RefCell<AppState>>,
    pub orbit: Rc<RefCell<OrbitCamera>>,
    pub clock: ClockState,
    pub playlist: PlaylistId,
    pub globe: GlobeScene,
    pub labels: Option<MarkerLabels>,
    pub gpu: Option<render::GpuState<'a>>,
    pub origin: Instant,
    pub last_instant: Instant,
    pub changes: Vec<Change>,
    pub draws: Vec<DrawItem>,
}

impl<'a> FrameContext<'a> {
    /// Run one frame. Returns `false` once the app has been torn down.
    pub fn frame(&mut self) -> bool {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;
        let now_ms = (now - self.origin).as_secs_f64() * 1000.0;

        self.changes.clear();
        {
            let mut st = self.state.borrow_mut();
            if st.is_torn_down() {
                return false;
            }
            st.advance(now_ms, &mut self.changes);
        }
        for change in self.changes.drain(..) {
            match change {
                Change::LoadingFinished => {
                    log::info!("[loading] finished after {:.0}ms", now_ms);
                    overlay::hide_loading(&self.document);
                    overlay::reveal(&self.document);
                }
                Change::PlaybackChanged { playing } => {
                    log::info!("[player] autoplay, playing={}", playing);
                    player::sync(&self.document, self.playlist, playing);
                    overlay::set_play_button(&self.document, playing);
                }
                Change::ClockTick => {
                    self.clock.sample(chrono::Local::now().naive_local());
                    log::debug!("[clock] {}", self.clock.reading().time);
                    overlay::set_clock(&self.document, &self.clock.reading());
                }
            }
        }

        let elapsed = now_ms / 1000.0;
        self.globe.graph.animate(elapsed);
        self.globe.graph.collect_draws(&mut self.draws);

        let (view_proj, eye, fovy) = {
            let mut orbit = self.orbit.borrow_mut();
            orbit.update();
            let aspect = self.canvas.width() as f32 / self.canvas.height().max(1) as f32;
            (orbit.view_proj(aspect), orbit.eye(), orbit.fovy_radians)
        };

        if let Some(labels) = &self.labels {
            let rect = self.canvas.get_bounding_client_rect();
            labels.update(
                &self.globe.graph,
                view_proj,
                eye,
                fovy,
                rect.width() as f32,
                rect.height() as f32,
            );
        }

        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            let star_model = self.globe.graph.world_matrix(self.globe.starfield);
            let input = render::FrameInput {
                view_proj,
                eye,
                draws: &self.draws,
                star_model,
            };
            if let Err(e) = g.render(dt_sec, &input) {
                log::error!("render error: {:?}", e);
            }
        }
        true
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    stars: &[Vec3],
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, stars).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !frame_ctx_tick.borrow_mut().frame() {
            log::info!("[frame] loop stopped");
            return;
        }
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
