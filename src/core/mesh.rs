use std::f32::consts::{PI, TAU};

use super::constants::{
    CLOUD_RADIUS, GLOBE_RADIUS, GRID_RING_RADIUS, GRID_RING_TUBE, MARKER_RADIUS,
};

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

/// Indexed triangle list with counter-clockwise front faces.
#[derive(Clone, Debug, Default)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Shared geometries used by the globe assembly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MeshKind {
    /// Earth body and atmosphere shell
    Globe,
    Cloud,
    Marker,
    GridRing,
}

impl MeshKind {
    pub const ALL: [MeshKind; 4] = [
        MeshKind::Globe,
        MeshKind::Cloud,
        MeshKind::Marker,
        MeshKind::GridRing,
    ];

    pub fn build(self) -> MeshData {
        match self {
            MeshKind::Globe => uv_sphere(GLOBE_RADIUS, 64, 64),
            MeshKind::Cloud => uv_sphere(CLOUD_RADIUS, 32, 32),
            MeshKind::Marker => uv_sphere(MARKER_RADIUS, 16, 16),
            MeshKind::GridRing => torus(GRID_RING_RADIUS, GRID_RING_TUBE, 8, 100),
        }
    }
}

/// Latitude/longitude sphere. Segment counts below 3 / 2 are raised to them.
pub fn uv_sphere(radius: f32, width_segments: u32, height_segments: u32) -> MeshData {
    let w = width_segments.max(3);
    let h = height_segments.max(2);
    let row = w + 1;
    let mut mesh = MeshData {
        vertices: Vec::with_capacity(((h + 1) * row) as usize),
        indices: Vec::with_capacity((w * h * 6) as usize),
    };
    for iy in 0..=h {
        let v = iy as f32 / h as f32;
        let (sin_v, cos_v) = (v * PI).sin_cos();
        for ix in 0..=w {
            let u = ix as f32 / w as f32;
            let (sin_u, cos_u) = (u * TAU).sin_cos();
            let n = [-cos_u * sin_v, cos_v, sin_u * sin_v];
            mesh.vertices.push(Vertex {
                position: [n[0] * radius, n[1] * radius, n[2] * radius],
                normal: n,
            });
        }
    }
    for iy in 0..h {
        for ix in 0..w {
            let a = iy * row + ix + 1;
            let b = iy * row + ix;
            let c = (iy + 1) * row + ix;
            let d = (iy + 1) * row + ix + 1;
            // the pole rows collapse to a point, so skip their degenerate half
            if iy != 0 {
                mesh.indices.extend_from_slice(&[a, b, d]);
            }
            if iy != h - 1 {
                mesh.indices.extend_from_slice(&[b, c, d]);
            }
        }
    }
    mesh
}

/// Ring in the XY plane around +Z, `radius` to the tube centre.
pub fn torus(radius: f32, tube: f32, radial_segments: u32, tubular_segments: u32) -> MeshData {
    let radial = radial_segments.max(3);
    let tubular = tubular_segments.max(3);
    let row = tubular + 1;
    let mut mesh = MeshData {
        vertices: Vec::with_capacity(((radial + 1) * row) as usize),
        indices: Vec::with_capacity((radial * tubular * 6) as usize),
    };
    for j in 0..=radial {
        let v = j as f32 / radial as f32 * TAU;
        let (sin_v, cos_v) = v.sin_cos();
        for i in 0..=tubular {
            let u = i as f32 / tubular as f32 * TAU;
            let (sin_u, cos_u) = u.sin_cos();
            let ring = radius + tube * cos_v;
            let position = [ring * cos_u, ring * sin_u, tube * sin_v];
            mesh.vertices.push(Vertex {
                position,
                normal: [cos_v * cos_u, cos_v * sin_u, sin_v],
            });
        }
    }
    for j in 1..=radial {
        for i in 1..=tubular {
            let a = row * j + i - 1;
            let b = row * (j - 1) + i - 1;
            let c = row * (j - 1) + i;
            let d = row * j + i;
            mesh.indices.extend_from_slice(&[a, b, d, b, c, d]);
        }
    }
    mesh
}
