// Session timing, value ranges and scene layout.
//
// These constants express the visible behaviour of the globe (delays, clamp
// limits, per-frame increments) and keep magic numbers out of the state
// machine and scene construction.

// One-shot delay from mount until the loading screen is dismissed (ms)
pub const LOADING_DELAY_MS: f64 = 2500.0;
// Delay between the loading screen dismissing and autoplay starting (ms)
pub const AUTOPLAY_DELAY_MS: f64 = 500.0;
// Clock re-sample period (ms)
pub const CLOCK_INTERVAL_MS: f64 = 1000.0;
// CSS fade used when the panels are revealed (ms)
pub const REVEAL_FADE_MS: f64 = 1000.0;
// Page roots faded in together once loading finishes (scene first, then panels)
pub const REVEAL_ROOTS: [&str; 2] = ["scene-root", "ui-root"];

// Playback
pub const DEFAULT_VOLUME_PERCENT: u8 = 50;
pub const VOLUME_MAX_PERCENT: u8 = 100;

// Simulated weather: uniform integer in [TEMP_MIN_C, TEMP_MIN_C + TEMP_SPAN_C)
pub const TEMP_MIN_C: i32 = -5;
pub const TEMP_SPAN_C: i32 = 40;

// Globe assembly (world units)
pub const GLOBE_RADIUS: f32 = 2.0;
pub const ATMOSPHERE_SCALE: f32 = 1.15;
pub const CLOUD_RADIUS: f32 = 2.03;
pub const GRID_RING_RADIUS: f32 = 2.01;
pub const GRID_RING_TUBE: f32 = 0.003;
pub const LAT_RING_COUNT: usize = 12;
pub const LNG_RING_COUNT: usize = 6;
pub const MARKER_ORBIT_RADIUS: f32 = 2.05;
pub const MARKER_RADIUS: f32 = 0.04;

// Per-frame rotation increments about Y (radians per rendered frame)
pub const GLOBE_SPIN_PER_FRAME: f32 = 0.001;
pub const ATMOSPHERE_SPIN_PER_FRAME: f32 = 0.001;
pub const CLOUD_SPIN_PER_FRAME: f32 = 0.0015;
pub const STAR_SPIN_PER_FRAME: f32 = 0.0001;

// Marker pulse: scale = BASE + sin(elapsed * RATE + latitude) * AMPLITUDE
pub const PULSE_BASE: f32 = 0.8;
pub const PULSE_AMPLITUDE: f32 = 0.2;
pub const PULSE_RATE: f32 = 2.0;

// Starfield
pub const STAR_COUNT: usize = 1000;
pub const STAR_FIELD_SIZE: f32 = 100.0;

// Camera and orbit controls
pub const CAMERA_FOV_DEG: f32 = 45.0;
pub const CAMERA_START_Z: f32 = 6.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 1000.0;
pub const ORBIT_MIN_DISTANCE: f32 = 4.0;
pub const ORBIT_MAX_DISTANCE: f32 = 10.0;
pub const ORBIT_ROTATE_SPEED: f32 = 0.5;
pub const ORBIT_ZOOM_STEP: f32 = 0.95; // distance multiplier per wheel notch
pub const ORBIT_DAMPING: f32 = 0.05; // fraction of pending rotation applied per frame
pub const ORBIT_POLAR_EPSILON: f32 = 1e-3;
