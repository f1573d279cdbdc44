use std::f32::consts::{PI, TAU};

use glam::{Mat4, Vec3};

use super::constants::{
    CAMERA_FOV_DEG, CAMERA_START_Z, CAMERA_ZFAR, CAMERA_ZNEAR, ORBIT_DAMPING,
    ORBIT_MAX_DISTANCE, ORBIT_MIN_DISTANCE, ORBIT_POLAR_EPSILON, ORBIT_ROTATE_SPEED,
    ORBIT_ZOOM_STEP,
};

/// Orbit camera around a fixed target: drag to rotate, wheel to zoom, no pan.
///
/// Angles follow the Y-up spherical convention: `phi` is the polar angle
/// from +Y, `theta` the azimuth from +Z towards +X. Drag input is queued and
/// eased in by [`OrbitCamera::update`] each frame.
#[derive(Clone, Debug, PartialEq)]
pub struct OrbitCamera {
    pub target: Vec3,
    pub fovy_radians: f32,
    radius: f32,
    theta: f32,
    phi: f32,
    pending_theta: f32,
    pending_phi: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::looking_from(Vec3::new(0.0, 0.0, CAMERA_START_Z), Vec3::ZERO)
    }
}

impl OrbitCamera {
    pub fn looking_from(eye: Vec3, target: Vec3) -> Self {
        let offset = eye - target;
        let radius = offset.length().clamp(ORBIT_MIN_DISTANCE, ORBIT_MAX_DISTANCE);
        let (theta, phi) = if offset.length_squared() > 0.0 {
            (
                offset.x.atan2(offset.z),
                (offset.y / offset.length()).clamp(-1.0, 1.0).acos(),
            )
        } else {
            (0.0, PI / 2.0)
        };
        Self {
            target,
            fovy_radians: CAMERA_FOV_DEG.to_radians(),
            radius,
            theta,
            phi: clamp_polar(phi),
            pending_theta: 0.0,
            pending_phi: 0.0,
        }
    }

    #[inline]
    pub fn distance(&self) -> f32 {
        self.radius
    }

    /// Queue a drag of `dx`, `dy` pixels on a viewport `viewport_height` tall.
    /// A drag across the full height turns the camera by one rotate-speed
    /// scaled revolution.
    pub fn rotate_by_pixels(&mut self, dx: f32, dy: f32, viewport_height: f32) {
        let h = viewport_height.max(1.0);
        self.pending_theta -= TAU * dx / h * ORBIT_ROTATE_SPEED;
        self.pending_phi -= TAU * dy / h * ORBIT_ROTATE_SPEED;
    }

    /// Wheel zoom: positive `delta_y` moves away. Distance stays in
    /// `[ORBIT_MIN_DISTANCE, ORBIT_MAX_DISTANCE]`.
    pub fn zoom(&mut self, delta_y: f32) {
        if delta_y > 0.0 {
            self.radius /= ORBIT_ZOOM_STEP;
        } else if delta_y < 0.0 {
            self.radius *= ORBIT_ZOOM_STEP;
        }
        self.radius = self.radius.clamp(ORBIT_MIN_DISTANCE, ORBIT_MAX_DISTANCE);
    }

    /// Ease a fraction of the queued rotation into the camera.
    pub fn update(&mut self) {
        self.theta += self.pending_theta * ORBIT_DAMPING;
        self.phi = clamp_polar(self.phi + self.pending_phi * ORBIT_DAMPING);
        self.pending_theta *= 1.0 - ORBIT_DAMPING;
        self.pending_phi *= 1.0 - ORBIT_DAMPING;
    }

    pub fn eye(&self) -> Vec3 {
        let (sin_phi, cos_phi) = self.phi.sin_cos();
        let (sin_theta, cos_theta) = self.theta.sin_cos();
        self.target
            + Vec3::new(
                self.radius * sin_phi * sin_theta,
                self.radius * cos_phi,
                self.radius * sin_phi * cos_theta,
            )
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye(), self.target, Vec3::Y)
    }

    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, aspect.max(1e-3), CAMERA_ZNEAR, CAMERA_ZFAR)
    }

    pub fn view_proj(&self, aspect: f32) -> Mat4 {
        self.projection_matrix(aspect) * self.view_matrix()
    }
}

#[inline]
fn clamp_polar(phi: f32) -> f32 {
    phi.clamp(ORBIT_POLAR_EPSILON, PI - ORBIT_POLAR_EPSILON)
}

/// Project a world point to CSS pixels. `None` when behind the camera.
pub fn world_to_screen(view_proj: Mat4, world: Vec3, width: f32, height: f32) -> Option<[f32; 2]> {
    let clip = view_proj * world.extend(1.0);
    if clip.w <= 0.0 {
        return None;
    }
    let ndc = clip.truncate() / clip.w;
    Some([(ndc.x * 0.5 + 0.5) * width, (0.5 - ndc.y * 0.5) * height])
}

/// CSS scale for a caption anchored `distance` away from the camera, so it
/// shrinks with distance the way the marker itself does.
#[inline]
pub fn label_scale(fovy_radians: f32, distance: f32, distance_factor: f32) -> f32 {
    let visible_height = 2.0 * (fovy_radians * 0.5).tan() * distance.max(1e-3);
    distance_factor / visible_height
}
