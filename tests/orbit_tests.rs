// Host-side tests for the orbit camera and screen projection helpers.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod orbit {
        include!("../src/core/orbit.rs");
    }
}

use crate::core::constants::*;
use crate::core::orbit::*;
use glam::Vec3;

fn settle(cam: &mut OrbitCamera) {
    for _ in 0..2000 {
        cam.update();
    }
}

#[test]
fn starts_on_positive_z() {
    let cam = OrbitCamera::default();
    assert!((cam.eye() - Vec3::new(0.0, 0.0, 6.0)).length() < 1e-4);
    assert_eq!(cam.distance(), 6.0);
    assert!((cam.fovy_radians - 45f32.to_radians()).abs() < 1e-6);
}

#[test]
fn zoom_is_clamped() {
    let mut cam = OrbitCamera::default();
    for _ in 0..100 {
        cam.zoom(-120.0);
    }
    assert_eq!(cam.distance(), ORBIT_MIN_DISTANCE);
    for _ in 0..100 {
        cam.zoom(120.0);
    }
    assert_eq!(cam.distance(), ORBIT_MAX_DISTANCE);
    cam.zoom(0.0);
    assert_eq!(cam.distance(), ORBIT_MAX_DISTANCE);
}

#[test]
fn zoom_keeps_direction() {
    let mut cam = OrbitCamera::default();
    cam.zoom(1.0);
    let eye = cam.eye();
    assert!(eye.z > 6.0);
    assert!(eye.x.abs() < 1e-4 && eye.y.abs() < 1e-4);
}

#[test]
fn drag_rotates_with_damping() {
    let mut cam = OrbitCamera::default();
    // half the viewport height at rotate speed 0.5 is a quarter turn
    cam.rotate_by_pixels(-300.0, 0.0, 600.0);
    cam.update();
    let partial = cam.eye();
    assert!(partial.x > 0.0 && partial.x < 6.0);
    settle(&mut cam);
    let eye = cam.eye();
    assert!((eye - Vec3::new(6.0, 0.0, 0.0)).length() < 1e-2, "{:?}", eye);
    assert!((eye.length() - 6.0).abs() < 1e-4);
}

#[test]
fn polar_angle_never_flips() {
    let mut cam = OrbitCamera::default();
    cam.rotate_by_pixels(0.0, 10_000.0, 600.0);
    settle(&mut cam);
    let eye = cam.eye();
    assert!(eye.y > 5.9);
    assert!(eye.y < 6.0);
    let view = cam.view_matrix();
    assert!(view.is_finite());
}

#[test]
fn projection_of_origin_is_screen_centre() {
    let cam = OrbitCamera::default();
    let vp = cam.view_proj(16.0 / 9.0);
    let p = world_to_screen(vp, Vec3::ZERO, 1600.0, 900.0).unwrap();
    assert!((p[0] - 800.0).abs() < 1e-2);
    assert!((p[1] - 450.0).abs() < 1e-2);

    // up in the world is up on screen (smaller y)
    let up = world_to_screen(vp, Vec3::new(0.0, 1.0, 0.0), 1600.0, 900.0).unwrap();
    assert!(up[1] < 450.0);
}

#[test]
fn points_behind_camera_are_hidden() {
    let cam = OrbitCamera::default();
    let vp = cam.view_proj(1.0);
    assert!(world_to_screen(vp, Vec3::new(0.0, 0.0, 20.0), 100.0, 100.0).is_none());
}

#[test]
fn label_scale_shrinks_with_distance() {
    let fovy = 45f32.to_radians();
    let near = label_scale(fovy, 4.0, 10.0);
    let far = label_scale(fovy, 8.0, 10.0);
    assert!(near > far);
    assert!((near / far - 2.0).abs() < 1e-4);
}
