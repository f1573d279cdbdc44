use glam::Vec3;

/// Packed `0xRRGGBB` colour as written in the stylesheet.
pub type Hex = u32;

pub const CYAN: Hex = 0x00ffff;
pub const SKY_BLUE: Hex = 0x00aaff;
pub const MINT: Hex = 0x00ff88;
pub const AMBER: Hex = 0xffaa00;
pub const RED: Hex = 0xff4444;

/// Half-open temperature interval `(-inf, below)` mapped to one colour.
/// The last band has no upper bound.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Band {
    pub below: Option<i32>,
    pub color: Hex,
    pub legend: &'static str,
}

/// Ascending bands; a temperature takes the first band whose bound it is under.
pub const BANDS: [Band; 5] = [
    Band { below: Some(0), color: CYAN, legend: "<0°" },
    Band { below: Some(10), color: SKY_BLUE, legend: "<10°" },
    Band { below: Some(20), color: MINT, legend: "<20°" },
    Band { below: Some(30), color: AMBER, legend: "<30°" },
    Band { below: None, color: RED, legend: "30°+" },
];

pub fn band_for(temp_c: i32) -> &'static Band {
    BANDS
        .iter()
        .find(|b| b.below.map_or(true, |limit| temp_c < limit))
        .unwrap_or(&BANDS[BANDS.len() - 1])
}

#[inline]
pub fn color_for_temperature(temp_c: i32) -> Hex {
    band_for(temp_c).color
}

/// Unpack to 0..1 sRGB components.
#[inline]
pub fn hex_to_rgb(hex: Hex) -> Vec3 {
    Vec3::new(
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
    )
}

#[inline]
pub fn srgb_to_linear(c: Vec3) -> Vec3 {
    let f = |v: f32| {
        if v <= 0.04045 {
            v / 12.92
        } else {
            ((v + 0.055) / 1.055).powf(2.4)
        }
    };
    Vec3::new(f(c.x), f(c.y), f(c.z))
}

pub fn css_hex(hex: Hex) -> String {
    format!("#{:06x}", hex & 0xff_ffff)
}
