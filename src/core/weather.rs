use rand::Rng;

use super::constants::{TEMP_MIN_C, TEMP_SPAN_C};

/// Simulated sky condition shown next to a marker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Condition {
    Clear,
    Cloudy,
    Rain,
    Snow,
    Storm,
}

impl Condition {
    pub const ALL: [Condition; 5] = [
        Condition::Clear,
        Condition::Cloudy,
        Condition::Rain,
        Condition::Snow,
        Condition::Storm,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Condition::Clear => "clear",
            Condition::Cloudy => "cloudy",
            Condition::Rain => "rain",
            Condition::Snow => "snow",
            Condition::Storm => "storm",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Condition::Rain => "🌧",
            Condition::Snow => "❄️",
            Condition::Storm => "⛈",
            Condition::Cloudy => "☁️",
            Condition::Clear => "☀️",
        }
    }

    /// Uniform draw over the five conditions.
    pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct City {
    pub name: &'static str,
    pub lat: f32,
    pub lng: f32,
}

const fn city(name: &'static str, lat: f32, lng: f32) -> City {
    City { name, lat, lng }
}

/// Fixed catalogue of marker locations, in display order.
pub const CITIES: [City; 16] = [
    city("New York", 40.7128, -74.006),
    city("London", 51.5074, -0.1278),
    city("Tokyo", 35.6762, 139.6503),
    city("Sydney", -33.8688, 151.2093),
    city("Moscow", 55.7558, 37.6173),
    city("Mexico City", 19.4326, -99.1332),
    city("São Paulo", -23.5505, -46.6333),
    city("Delhi", 28.6139, 77.209),
    city("Shanghai", 31.2304, 121.4737),
    city("Singapore", 1.3521, 103.8198),
    city("Paris", 48.8566, 2.3522),
    city("Berlin", 52.52, 13.405),
    city("Buenos Aires", -34.6037, -58.3816),
    city("San Francisco", 37.7749, -122.4194),
    city("Dubai", 25.2048, 55.2708),
    city("Hong Kong", 22.3193, 114.1694),
];

/// One city's simulated reading. Positionally identified within the dataset.
#[derive(Clone, Debug, PartialEq)]
pub struct WeatherPoint {
    pub city: &'static str,
    pub lat: f32,
    pub lng: f32,
    pub temp_c: i32,
    pub condition: Condition,
}

impl WeatherPoint {
    /// Marker caption, e.g. `☀️ 21°C`.
    pub fn label(&self) -> String {
        format!("{} {}°C", self.condition.icon(), self.temp_c)
    }
}

#[inline]
pub fn sample_temperature<R: Rng + ?Sized>(rng: &mut R) -> i32 {
    rng.gen_range(0..TEMP_SPAN_C) + TEMP_MIN_C
}

/// Build the session's weather sample: one point per entry of [`CITIES`],
/// each with an independent temperature and condition.
pub fn generate_weather<R: Rng + ?Sized>(rng: &mut R) -> Vec<WeatherPoint> {
    CITIES
        .iter()
        .map(|c| {
            let temp_c = sample_temperature(rng);
            let condition = Condition::sample(rng);
            WeatherPoint {
                city: c.name,
                lat: c.lat,
                lng: c.lng,
                temp_c,
                condition,
            }
        })
        .collect()
}
