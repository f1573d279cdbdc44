use std::f32::consts::{FRAC_PI_2, PI};

use glam::Vec3;

use super::constants::*;
use super::geo::lat_lng_to_vec3;
use super::mesh::MeshKind;
use super::palette::{color_for_temperature, hex_to_rgb, Hex};
use super::scene::{Animator, Material, Node, NodeId, SceneGraph, Shading, Side, Transform};
use super::weather::WeatherPoint;

pub const EARTH_COLOR: Hex = 0x1a1a3e;
pub const EARTH_EMISSIVE: Hex = 0x0a0a1a;
pub const GLOW_COLOR: Hex = 0x00ffc8;
pub const CLOUD_COLOR: Hex = 0xffffff;

pub const ATMOSPHERE_OPACITY: f32 = 0.08;
pub const GRID_OPACITY: f32 = 0.2;
pub const CLOUD_OPACITY: f32 = 0.05;
pub const MARKER_OPACITY: f32 = 0.9;

/// The assembled scene plus handles the frame loop needs.
pub struct GlobeScene {
    pub graph: SceneGraph,
    /// Point cloud anchor; its world matrix rotates the starfield.
    pub starfield: NodeId,
    /// One node per weather point, same order as the dataset.
    pub markers: Vec<NodeId>,
}

fn earth_material() -> Material {
    Material {
        color: hex_to_rgb(EARTH_COLOR),
        opacity: 1.0,
        shading: Shading::Lit {
            metalness: 0.3,
            roughness: 0.7,
            emissive: hex_to_rgb(EARTH_EMISSIVE),
            emissive_intensity: 0.5,
        },
        side: Side::Front,
        depth_write: true,
    }
}

fn atmosphere_material() -> Material {
    Material {
        side: Side::Back,
        ..Material::unlit(hex_to_rgb(GLOW_COLOR), ATMOSPHERE_OPACITY)
    }
}

fn cloud_material() -> Material {
    Material {
        color: hex_to_rgb(CLOUD_COLOR),
        opacity: CLOUD_OPACITY,
        shading: Shading::Lit {
            metalness: 0.0,
            roughness: 1.0,
            emissive: Vec3::ZERO,
            emissive_intensity: 0.0,
        },
        side: Side::Front,
        depth_write: false,
    }
}

#[inline]
pub fn marker_material(temp_c: i32) -> Material {
    Material::unlit(hex_to_rgb(color_for_temperature(temp_c)), MARKER_OPACITY)
}

/// Rotation of the `i`-th latitude-family grid ring.
#[inline]
pub fn lat_ring_rotation(i: usize) -> Vec3 {
    Vec3::new(FRAC_PI_2, 0.0, i as f32 * PI / 6.0)
}

/// Rotation of the `i`-th longitude-family grid ring.
#[inline]
pub fn lng_ring_rotation(i: usize) -> Vec3 {
    Vec3::new(0.0, 0.0, i as f32 * PI / 6.0)
}

/// Compose starfield and globe assembly for one session's weather sample.
pub fn build_scene(weather: &[WeatherPoint]) -> GlobeScene {
    let mut graph = SceneGraph::new();

    let starfield = graph.add_root(Node::group("stars").with_animator(Animator::Spin {
        per_frame: STAR_SPIN_PER_FRAME,
    }));

    let globe = graph.add_root(Node::group("globe"));
    graph.add_child(
        globe,
        Node::mesh("atmosphere", MeshKind::Globe, atmosphere_material())
            .with_transform(Transform::scaled(ATMOSPHERE_SCALE))
            .with_animator(Animator::Spin {
                per_frame: ATMOSPHERE_SPIN_PER_FRAME,
            }),
    );
    graph.add_child(
        globe,
        Node::mesh("earth", MeshKind::Globe, earth_material()).with_animator(Animator::Spin {
            per_frame: GLOBE_SPIN_PER_FRAME,
        }),
    );

    let grid = graph.add_child(globe, Node::group("grid"));
    let ring = Material::unlit(hex_to_rgb(GLOW_COLOR), GRID_OPACITY);
    for i in 0..LAT_RING_COUNT {
        graph.add_child(
            grid,
            Node::mesh("lat-ring", MeshKind::GridRing, ring)
                .with_transform(Transform::rotated(lat_ring_rotation(i))),
        );
    }
    for i in 0..LNG_RING_COUNT {
        graph.add_child(
            grid,
            Node::mesh("lng-ring", MeshKind::GridRing, ring)
                .with_transform(Transform::rotated(lng_ring_rotation(i))),
        );
    }

    let markers_group = graph.add_child(globe, Node::group("markers"));
    let markers = weather
        .iter()
        .map(|p| {
            let pos = lat_lng_to_vec3(p.lat, p.lng, MARKER_ORBIT_RADIUS);
            graph.add_child(
                markers_group,
                Node::mesh("marker", MeshKind::Marker, marker_material(p.temp_c))
                    .with_transform(Transform::at(pos))
                    .with_animator(Animator::Pulse {
                        base: PULSE_BASE,
                        amplitude: PULSE_AMPLITUDE,
                        rate: PULSE_RATE,
                        phase: p.lat,
                    }),
            )
        })
        .collect();

    graph.add_child(
        globe,
        Node::mesh("clouds", MeshKind::Cloud, cloud_material()).with_animator(Animator::Spin {
            per_frame: CLOUD_SPIN_PER_FRAME,
        }),
    );

    GlobeScene {
        graph,
        starfield,
        markers,
    }
}
