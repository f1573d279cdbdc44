pub mod clock;
pub mod constants;
pub mod geo;
pub mod globe;
pub mod mesh;
pub mod orbit;
pub mod palette;
pub mod playback;
pub mod scene;
pub mod session;
pub mod starfield;
pub mod state;
pub mod timers;
pub mod weather;

pub use constants::*;

// Shaders bundled as string constants
pub static BACKDROP_WGSL: &str = include_str!("../../shaders/backdrop.wgsl");
pub static SCENE_WGSL: &str = include_str!("../../shaders/scene.wgsl");
pub static POST_WGSL: &str = include_str!("../../shaders/post.wgsl");
