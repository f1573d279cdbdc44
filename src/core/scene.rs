use glam::{EulerRot, Mat4, Quat, Vec3};
use smallvec::SmallVec;
use std::f32::consts::TAU;

use super::mesh::MeshKind;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

/// Local transform: translation, XYZ Euler rotation (radians) and scale,
/// composed as `T * R * S`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub translation: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        translation: Vec3::ZERO,
        rotation: Vec3::ZERO,
        scale: Vec3::ONE,
    };

    pub fn at(translation: Vec3) -> Self {
        Self {
            translation,
            ..Self::IDENTITY
        }
    }

    pub fn rotated(rotation: Vec3) -> Self {
        Self {
            rotation,
            ..Self::IDENTITY
        }
    }

    pub fn scaled(s: f32) -> Self {
        Self {
            scale: Vec3::splat(s),
            ..Self::IDENTITY
        }
    }

    pub fn matrix(&self) -> Mat4 {
        let r = Quat::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, self.rotation.z);
        Mat4::from_scale_rotation_translation(self.scale, r, self.translation)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shading {
    /// Ambient + point lights with a simple metal/rough response.
    Lit {
        metalness: f32,
        roughness: f32,
        emissive: Vec3,
        emissive_intensity: f32,
    },
    /// Flat colour, ignores lights.
    Unlit,
}

/// Which faces are rasterised.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Front,
    Back,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    /// sRGB 0..1
    pub color: Vec3,
    pub opacity: f32,
    pub shading: Shading,
    pub side: Side,
    pub depth_write: bool,
}

impl Material {
    pub fn unlit(color: Vec3, opacity: f32) -> Self {
        Self {
            color,
            opacity,
            shading: Shading::Unlit,
            side: Side::Front,
            depth_write: true,
        }
    }

    #[inline]
    pub fn is_transparent(&self) -> bool {
        self.opacity < 1.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Drawable {
    pub mesh: MeshKind,
    pub material: Material,
}

/// Per-frame behaviour owned by a single node. Only ever touches that node's
/// transform.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Animator {
    /// Add `per_frame` radians about Y every rendered frame, kept in `[0, 2π)`.
    Spin { per_frame: f32 },
    /// Uniform scale `base + sin(elapsed * rate + phase) * amplitude`.
    Pulse {
        base: f32,
        amplitude: f32,
        rate: f32,
        phase: f32,
    },
}

impl Animator {
    #[inline]
    pub fn apply(&self, transform: &mut Transform, elapsed_sec: f64) {
        match *self {
            Animator::Spin { per_frame } => {
                transform.rotation.y = (transform.rotation.y + per_frame).rem_euclid(TAU);
            }
            Animator::Pulse {
                base,
                amplitude,
                rate,
                phase,
            } => {
                // reduce in f64 before narrowing
                let cycle = (elapsed_sec * rate as f64).rem_euclid(std::f64::consts::TAU) as f32;
                let s = base + (cycle + phase).sin() * amplitude;
                transform.scale = Vec3::splat(s);
            }
        }
    }
}

#[derive(Clone, Debug)]
pub struct Node {
    pub name: &'static str,
    pub transform: Transform,
    pub drawable: Option<Drawable>,
    pub animator: Option<Animator>,
    children: SmallVec<[NodeId; 4]>,
    parent: Option<NodeId>,
}

impl Node {
    pub fn group(name: &'static str) -> Self {
        Self {
            name,
            transform: Transform::IDENTITY,
            drawable: None,
            animator: None,
            children: SmallVec::new(),
            parent: None,
        }
    }

    pub fn mesh(name: &'static str, mesh: MeshKind, material: Material) -> Self {
        Self {
            drawable: Some(Drawable { mesh, material }),
            ..Self::group(name)
        }
    }

    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    pub fn with_animator(mut self, animator: Animator) -> Self {
        self.animator = Some(animator);
        self
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }
}

/// A drawable node flattened for rendering.
#[derive(Clone, Copy, Debug)]
pub struct DrawItem {
    pub node: NodeId,
    pub mesh: MeshKind,
    pub material: Material,
    pub model: Mat4,
}

/// Arena of nodes with explicit parent/child links. Children keep insertion
/// order; world transforms are `parent_world * local`.
#[derive(Clone, Debug, Default)]
pub struct SceneGraph {
    nodes: Vec<Node>,
    roots: SmallVec<[NodeId; 4]>,
}

impl SceneGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn add_root(&mut self, mut node: Node) -> NodeId {
        let id = NodeId(self.nodes.len());
        node.parent = None;
        self.nodes.push(node);
        self.roots.push(id);
        id
    }

    /// Append `node` as the last child of `parent`.
    pub fn add_child(&mut self, parent: NodeId, mut node: Node) -> NodeId {
        let id = NodeId(self.nodes.len());
        node.parent = Some(parent);
        self.nodes.push(node);
        self.nodes[parent.0].children.push(id);
        id
    }

    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// Run every node's animator once. Nodes are independent, so the order
    /// (insertion order) carries no meaning.
    pub fn animate(&mut self, elapsed_sec: f64) {
        for node in &mut self.nodes {
            if let Some(anim) = node.animator {
                anim.apply(&mut node.transform, elapsed_sec);
            }
        }
    }

    pub fn world_matrix(&self, id: NodeId) -> Mat4 {
        let node = &self.nodes[id.0];
        let local = node.transform.matrix();
        match node.parent {
            Some(p) => self.world_matrix(p) * local,
            None => local,
        }
    }

    /// Depth-first walk from the roots in insertion order, emitting every
    /// drawable with its world matrix.
    pub fn collect_draws(&self, out: &mut Vec<DrawItem>) {
        out.clear();
        for &root in &self.roots {
            self.collect_from(root, Mat4::IDENTITY, out);
        }
    }

    fn collect_from(&self, id: NodeId, parent_world: Mat4, out: &mut Vec<DrawItem>) {
        let node = &self.nodes[id.0];
        let world = parent_world * node.transform.matrix();
        if let Some(d) = node.drawable {
            out.push(DrawItem {
                node: id,
                mesh: d.mesh,
                material: d.material,
                model: world,
            });
        }
        for &child in &node.children {
            self.collect_from(child, world, out);
        }
    }
}
