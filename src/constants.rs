// Rendering and overlay tuning used by the web frontend.

// Screen overlays
pub const SCANLINE_OPACITY: f32 = 0.03;
pub const SCANLINE_PERIOD_PX: f32 = 4.0;
pub const VIGNETTE_START: f32 = 0.4; // fraction of the half-diagonal left untouched
pub const VIGNETTE_DARKEN: f32 = 0.6;

// Backdrop radial gradient (sRGB hex) and the stop of the middle colour
pub const BACKDROP_INNER: u32 = 0x0a0a2e;
pub const BACKDROP_MID: u32 = 0x050510;
pub const BACKDROP_OUTER: u32 = 0x000000;
pub const BACKDROP_MID_STOP: f32 = 0.7;

// Lights
pub const AMBIENT_INTENSITY: f32 = 0.2;
pub const KEY_LIGHT_POSITION: [f32; 3] = [10.0, 10.0, 10.0];
pub const KEY_LIGHT_COLOR: u32 = 0x00ffc8;
pub const KEY_LIGHT_INTENSITY: f32 = 1.0;
pub const FILL_LIGHT_POSITION: [f32; 3] = [-10.0, -10.0, -10.0];
pub const FILL_LIGHT_COLOR: u32 = 0xff00aa;
pub const FILL_LIGHT_INTENSITY: f32 = 0.5;

// Starfield points
pub const STAR_COLOR: u32 = 0xffffff;
pub const STAR_OPACITY: f32 = 0.8;

// Per-draw uniform slots reserved up front (globe assembly + markers + stars)
pub const MAX_DRAWS: usize = 64;

// Marker captions: CSS pixels per world unit at unit viewport height
pub const LABEL_DISTANCE_FACTOR: f32 = 10.0;
