use glam::Vec3;
use rand::Rng;

use super::constants::{STAR_COUNT, STAR_FIELD_SIZE};
use super::playback::PlaylistId;
use super::starfield::generate_stars;
use super::weather::{generate_weather, WeatherPoint};

/// Everything randomised once per session. Built in one step at startup and
/// only ever read afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    weather: Vec<WeatherPoint>,
    playlist: PlaylistId,
    stars: Vec<Vec3>,
}

impl Session {
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let weather = generate_weather(rng);
        let playlist = PlaylistId::choose(rng);
        let stars = generate_stars(rng, STAR_COUNT, STAR_FIELD_SIZE);
        Self {
            weather,
            playlist,
            stars,
        }
    }

    pub fn from_entropy() -> Self {
        Self::new(&mut rand::thread_rng())
    }

    pub fn weather(&self) -> &[WeatherPoint] {
        &self.weather
    }

    pub fn playlist(&self) -> PlaylistId {
        self.playlist
    }

    pub fn stars(&self) -> &[Vec3] {
        &self.stars
    }
}
