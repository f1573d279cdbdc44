use rand::Rng;

use super::constants::{DEFAULT_VOLUME_PERCENT, VOLUME_MAX_PERCENT};

/// Curated lo-fi playlists; one is picked per session.
pub const PLAYLISTS: [&str; 4] = [
    "PLOzDu-MXXLliO9fBNZOQTBDddoA3FzZUo", // lofi hip hop
    "PLofht4PTcKYnaH8w5olJCI-wUVxuoMHqM", // chill beats
    "PL6NdkXsPL07KN01gH2vucrHCEyyNmVEx4", // study beats
    "PLQkQfzsIUwRYSpXhbaBoLJwNXMHlNEgIO", // lofi chill
];

pub const EMBED_BASE_URL: &str = "https://www.youtube.com/embed/videoseries";

/// Opaque playlist token held for the whole session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PlaylistId(&'static str);

impl PlaylistId {
    pub fn choose<R: Rng + ?Sized>(rng: &mut R) -> Self {
        PlaylistId(PLAYLISTS[rng.gen_range(0..PLAYLISTS.len())])
    }

    #[inline]
    pub fn as_str(&self) -> &'static str {
        self.0
    }

    /// Source URL for the embedded player: autoplaying, looping.
    pub fn embed_url(&self) -> String {
        format!("{}?list={}&autoplay=1&loop=1", EMBED_BASE_URL, self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackMode {
    Stopped,
    Playing,
}

/// Toggle state plus the slider value. The volume is display-only: nothing
/// forwards it to the embedded player.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlaybackState {
    mode: PlaybackMode,
    volume_percent: u8,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self {
            mode: PlaybackMode::Stopped,
            volume_percent: DEFAULT_VOLUME_PERCENT,
        }
    }
}

impl PlaybackState {
    #[inline]
    pub fn mode(&self) -> PlaybackMode {
        self.mode
    }

    #[inline]
    pub fn is_playing(&self) -> bool {
        self.mode == PlaybackMode::Playing
    }

    #[inline]
    pub fn volume_percent(&self) -> u8 {
        self.volume_percent
    }

    pub fn toggle(&mut self) -> PlaybackMode {
        self.mode = match self.mode {
            PlaybackMode::Stopped => PlaybackMode::Playing,
            PlaybackMode::Playing => PlaybackMode::Stopped,
        };
        self.mode
    }

    /// Returns whether the mode changed.
    pub fn play(&mut self) -> bool {
        let changed = !self.is_playing();
        self.mode = PlaybackMode::Playing;
        changed
    }

    /// Clamp into 0..=100 and store.
    pub fn set_volume(&mut self, percent: i32) -> u8 {
        self.volume_percent = percent.clamp(0, VOLUME_MAX_PERCENT as i32) as u8;
        self.volume_percent
    }
}

/// Parse a range input's value. Non-numeric input is ignored.
pub fn parse_volume(raw: &str) -> Option<i32> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite()).map(|v| v.round() as i32)
}

/// Filled-track background for the volume slider.
pub fn volume_track_css(percent: u8) -> String {
    format!(
        "linear-gradient(to right, #00ffc8 {p}%, rgba(255,255,255,0.2) {p}%)",
        p = percent
    )
}
