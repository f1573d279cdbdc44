use glam::Vec3;

/// Place a geographic coordinate on a sphere of `radius` centred at the origin.
///
/// The polar angle is measured from the north pole (+Y) and longitude is
/// offset by 180°, so the north pole maps to `(0, r, 0)` and `(0°, 0°)` maps to
/// `(-r, 0, 0)`.
#[inline]
pub fn lat_lng_to_vec3(lat_deg: f32, lng_deg: f32, radius: f32) -> Vec3 {
    let phi = (90.0 - lat_deg).to_radians();
    let theta = (lng_deg + 180.0).to_radians();
    let (sin_phi, cos_phi) = phi.sin_cos();
    let (sin_theta, cos_theta) = theta.sin_cos();
    Vec3::new(
        radius * sin_phi * cos_theta,
        radius * cos_phi,
        radius * sin_phi * sin_theta,
    )
}
