// Host-side tests for mesh generation, the scene graph and the globe assembly.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod geo {
        include!("../src/core/geo.rs");
    }
    pub mod globe {
        include!("../src/core/globe.rs");
    }
    pub mod mesh {
        include!("../src/core/mesh.rs");
    }
    pub mod palette {
        include!("../src/core/palette.rs");
    }
    pub mod scene {
        include!("../src/core/scene.rs");
    }
    pub mod weather {
        include!("../src/core/weather.rs");
    }
}

use crate::core::constants::*;
use crate::core::geo::lat_lng_to_vec3;
use crate::core::globe::*;
use crate::core::mesh::*;
use crate::core::palette::{color_for_temperature, hex_to_rgb};
use crate::core::scene::*;
use crate::core::weather::{generate_weather, Condition, WeatherPoint};
use glam::{Mat4, Vec3};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn point(lat: f32, lng: f32, temp_c: i32) -> WeatherPoint {
    WeatherPoint {
        city: "Test",
        lat,
        lng,
        temp_c,
        condition: Condition::Clear,
    }
}

#[test]
fn sphere_vertices_lie_on_radius() {
    let m = uv_sphere(2.0, 16, 12);
    assert_eq!(m.vertices.len(), 17 * 13);
    for v in &m.vertices {
        let p = Vec3::from(v.position);
        assert!((p.length() - 2.0).abs() < 1e-4);
        assert!((Vec3::from(v.normal).length() - 1.0).abs() < 1e-4);
    }
    // pole rows contribute one triangle per segment instead of two
    assert_eq!(m.triangle_count(), (16 * 12 * 2 - 2 * 16) as usize);
}

#[test]
fn sphere_winding_faces_outward() {
    let m = uv_sphere(1.0, 8, 6);
    for tri in m.indices.chunks(3) {
        let [a, b, c] = [tri[0], tri[1], tri[2]].map(|i| Vec3::from(m.vertices[i as usize].position));
        let n = (b - a).cross(c - a);
        let centre = (a + b + c) / 3.0;
        assert!(n.dot(centre) > 0.0);
    }
}

#[test]
fn indices_stay_in_bounds_for_every_kind() {
    for kind in MeshKind::ALL {
        let m = kind.build();
        assert!(!m.indices.is_empty());
        assert_eq!(m.indices.len() % 3, 0);
        let n = m.vertices.len() as u32;
        assert!(m.indices.iter().all(|&i| i < n), "{:?}", kind);
    }
}

#[test]
fn torus_lies_around_z_axis() {
    let m = torus(2.01, 0.003, 8, 100);
    assert_eq!(m.vertices.len(), 9 * 101);
    assert_eq!(m.triangle_count(), 8 * 100 * 2);
    for v in &m.vertices {
        let p = Vec3::from(v.position);
        let ring = (p.x * p.x + p.y * p.y).sqrt();
        assert!((ring - 2.01).abs() <= 0.0031);
        assert!(p.z.abs() <= 0.0031);
    }
}

#[test]
fn spin_accumulates_per_frame() {
    let mut t = Transform::IDENTITY;
    let spin = Animator::Spin { per_frame: 0.001 };
    for _ in 0..1000 {
        spin.apply(&mut t, 0.0);
    }
    assert!((t.rotation.y - 1.0).abs() < 1e-3);
    assert_eq!(t.rotation.x, 0.0);
}

#[test]
fn spin_keeps_advancing_from_large_angle() {
    for (start, per_frame) in [(2048.0_f32, 0.0001_f32), (32768.0, 0.001)] {
        let mut t = Transform::IDENTITY;
        t.rotation.y = start;
        let spin = Animator::Spin { per_frame };
        spin.apply(&mut t, 0.0);
        let from = t.rotation.y;
        for _ in 0..600 {
            spin.apply(&mut t, 0.0);
            assert!((0.0..std::f32::consts::TAU).contains(&t.rotation.y));
        }
        let advanced = (t.rotation.y - from).rem_euclid(std::f32::consts::TAU);
        let expected = 600.0 * per_frame;
        assert!(
            (advanced - expected).abs() < 1e-3,
            "advanced {} over 600 frames, expected {}",
            advanced,
            expected
        );
    }
}

#[test]
fn pulse_tracks_phase_after_days() {
    let pulse = Animator::Pulse {
        base: PULSE_BASE,
        amplitude: PULSE_AMPLITUDE,
        rate: PULSE_RATE,
        phase: 1.3,
    };
    let six_days = 6.0 * 86_400.0;
    let mut t = Transform::IDENTITY;
    for frame in 0..120 {
        let elapsed = six_days + frame as f64 / 60.0;
        pulse.apply(&mut t, elapsed);
        let expected = PULSE_BASE as f64
            + (elapsed * PULSE_RATE as f64 + 1.3).sin() * PULSE_AMPLITUDE as f64;
        assert!(
            (t.scale.x as f64 - expected).abs() < 1e-4,
            "frame {}: {} vs {}",
            frame,
            t.scale.x,
            expected
        );
    }
}

#[test]
fn pulse_stays_in_band() {
    let mut t = Transform::IDENTITY;
    let pulse = Animator::Pulse {
        base: PULSE_BASE,
        amplitude: PULSE_AMPLITUDE,
        rate: PULSE_RATE,
        phase: 40.7,
    };
    for i in 0..500 {
        pulse.apply(&mut t, i as f64 * 0.037);
        assert!(t.scale.x >= 0.6 - 1e-5 && t.scale.x <= 1.0 + 1e-5);
        assert_eq!(t.scale.x, t.scale.z);
    }
    pulse.apply(&mut t, 0.0);
    assert!((t.scale.x - (0.8 + 40.7_f32.sin() * 0.2)).abs() < 1e-5);
}

#[test]
fn world_matrix_composes_parent_first() {
    let mut g = SceneGraph::new();
    let root = g.add_root(Node::group("root").with_transform(Transform::scaled(2.0)));
    let child = g.add_child(
        root,
        Node::group("child").with_transform(Transform::at(Vec3::new(1.0, 0.0, 0.0))),
    );
    let p = g.world_matrix(child).transform_point3(Vec3::ZERO);
    assert!((p - Vec3::new(2.0, 0.0, 0.0)).length() < 1e-5);
    assert_eq!(g.node(child).parent(), Some(root));
    assert_eq!(g.node(root).children(), &[child]);
}

#[test]
fn parent_spin_carries_children() {
    let mut g = SceneGraph::new();
    let root = g.add_root(
        Node::group("root").with_animator(Animator::Spin {
            per_frame: std::f32::consts::FRAC_PI_2,
        }),
    );
    let child = g.add_child(
        root,
        Node::group("child").with_transform(Transform::at(Vec3::new(1.0, 0.0, 0.0))),
    );
    g.animate(0.0);
    let p = g.world_matrix(child).transform_point3(Vec3::ZERO);
    assert!((p - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-5);
}

#[test]
fn collect_draws_walks_depth_first() {
    let mut g = SceneGraph::new();
    let mat = Material::unlit(Vec3::ONE, 1.0);
    let a = g.add_root(Node::group("a"));
    let a1 = g.add_child(a, Node::mesh("a1", MeshKind::Marker, mat));
    let a2 = g.add_child(a, Node::group("a2"));
    let a2x = g.add_child(a2, Node::mesh("a2x", MeshKind::Cloud, mat));
    let a3 = g.add_child(a, Node::mesh("a3", MeshKind::Globe, mat));
    let b = g.add_root(Node::mesh("b", MeshKind::GridRing, mat));

    let mut out = vec![];
    g.collect_draws(&mut out);
    let order: Vec<NodeId> = out.iter().map(|d| d.node).collect();
    assert_eq!(order, vec![a1, a2x, a3, b]);

    // reuses the buffer
    g.collect_draws(&mut out);
    assert_eq!(out.len(), 4);
}

#[test]
fn globe_has_expected_parts() {
    let weather = generate_weather(&mut StdRng::seed_from_u64(3));
    let scene = build_scene(&weather);
    let g = &scene.graph;

    assert_eq!(g.roots().len(), 2);
    assert_eq!(g.node(scene.starfield).name, "stars");
    assert_eq!(scene.markers.len(), weather.len());

    let mut draws = vec![];
    g.collect_draws(&mut draws);
    // atmosphere, earth, 18 rings, 16 markers, clouds
    assert_eq!(draws.len(), 2 + LAT_RING_COUNT + LNG_RING_COUNT + 16 + 1);
    let names: Vec<&str> = draws.iter().map(|d| g.node(d.node).name).collect();
    assert_eq!(names[0], "atmosphere");
    assert_eq!(names[1], "earth");
    assert_eq!(names.iter().filter(|n| **n == "lat-ring").count(), 12);
    assert_eq!(names.iter().filter(|n| **n == "lng-ring").count(), 6);
    assert_eq!(*names.last().unwrap(), "clouds");

    let atmosphere = &draws[0].material;
    assert_eq!(atmosphere.side, Side::Back);
    assert!(atmosphere.is_transparent());
    let clouds = &draws.last().unwrap().material;
    assert!(!clouds.depth_write);
    assert!(!draws[1].material.is_transparent());
}

#[test]
fn markers_sit_on_orbit_with_band_colour() {
    let weather = vec![point(0.0, 0.0, -2), point(51.5, -0.12, 31)];
    let scene = build_scene(&weather);
    for (p, &id) in weather.iter().zip(&scene.markers) {
        let node = scene.graph.node(id);
        let expected = lat_lng_to_vec3(p.lat, p.lng, MARKER_ORBIT_RADIUS);
        assert!((node.transform.translation - expected).length() < 1e-5);
        let d = node.drawable.unwrap();
        assert_eq!(d.mesh, MeshKind::Marker);
        assert_eq!(d.material.color, hex_to_rgb(color_for_temperature(p.temp_c)));
        assert_eq!(d.material.opacity, MARKER_OPACITY);
        assert!(matches!(node.animator, Some(Animator::Pulse { phase, .. }) if phase == p.lat));
    }
}

#[test]
fn ring_rotations_step_by_thirty_degrees() {
    let step = std::f32::consts::PI / 6.0;
    assert_eq!(lat_ring_rotation(0), Vec3::new(std::f32::consts::FRAC_PI_2, 0.0, 0.0));
    assert!((lat_ring_rotation(3).z - 3.0 * step).abs() < 1e-6);
    assert_eq!(lng_ring_rotation(0), Vec3::ZERO);
    assert!((lng_ring_rotation(5).z - 5.0 * step).abs() < 1e-6);
}

#[test]
fn starfield_spins_slowly() {
    let mut scene = build_scene(&[]);
    let before = scene.graph.world_matrix(scene.starfield);
    assert_eq!(before, Mat4::IDENTITY);
    for _ in 0..10 {
        scene.graph.animate(0.0);
    }
    let rot = scene.graph.node(scene.starfield).transform.rotation.y;
    assert!((rot - 10.0 * STAR_SPIN_PER_FRAME).abs() < 1e-7);
}
