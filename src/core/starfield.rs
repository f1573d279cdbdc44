use glam::Vec3;
use rand::Rng;

/// Scatter `count` points uniformly inside an axis-aligned cube of side `size`
/// centred at the origin.
pub fn generate_stars<R: Rng + ?Sized>(rng: &mut R, count: usize, size: f32) -> Vec<Vec3> {
    let mut coord = || (rng.gen::<f32>() - 0.5) * size;
    (0..count)
        .map(|_| {
            let x = coord();
            let y = coord();
            let z = coord();
            Vec3::new(x, y, z)
        })
        .collect()
}
