use glam::{Mat4, Vec3};

/// Default yaw in degrees; −90° faces down the −Z axis.
pub const DEFAULT_YAW: f32 = -90.0;
/// Default pitch in degrees (level with the horizon).
pub const DEFAULT_PITCH: f32 = 0.0;
/// Default movement speed in world units per second.
pub const DEFAULT_SPEED: f32 = 2.5;
/// Default mouse sensitivity in degrees per pixel.
pub const DEFAULT_SENSITIVITY: f32 = 0.1;
/// Default vertical field of view in degrees.
pub const DEFAULT_ZOOM: f32 = 45.0;

/// Pitch stays inside ±89° so `front` can never line up with the world up
/// axis and flip the basis.
const PITCH_LIMIT: f32 = 89.0;
/// Zoom (vertical FOV) bounds in degrees.
const ZOOM_MIN: f32 = 1.0;
const ZOOM_MAX: f32 = 45.0;

/// Movement direction for keyboard-driven translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    /// Along `front`.
    Forward,
    /// Against `front`.
    Backward,
    /// Against `right`.
    Left,
    /// Along `right`.
    Right,
}

/// First-person fly camera.
///
/// Orientation is stored as yaw/pitch in degrees; the `front`/`right`/`up`
/// basis is derived from them and recomputed after every angle mutation, so
/// the three vectors are always a right-handed orthonormal frame. The two
/// clamps (pitch, zoom) are invariant-preservation steps and cannot be
/// bypassed: the angles are private and only mutable through
/// [`process_mouse_movement`](Self::process_mouse_movement) and
/// [`process_mouse_scroll`](Self::process_mouse_scroll).
#[derive(Debug, Clone)]
pub struct Camera {
    /// World-space eye position.
    pub position: Vec3,
    /// Movement speed in world units per second.
    pub movement_speed: f32,
    /// Mouse look sensitivity in degrees per pixel.
    pub mouse_sensitivity: f32,
    world_up: Vec3,
    yaw: f32,
    pitch: f32,
    front: Vec3,
    right: Vec3,
    up: Vec3,
    zoom: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::new(0.0, 0.0, 1.0), Vec3::Y)
    }
}

impl Camera {
    /// Create a camera at `position` with the given world up axis and
    /// default angles (yaw −90°, pitch 0°).
    #[must_use]
    pub fn new(position: Vec3, world_up: Vec3) -> Self {
        let mut camera = Self {
            position,
            movement_speed: DEFAULT_SPEED,
            mouse_sensitivity: DEFAULT_SENSITIVITY,
            world_up: world_up.normalize(),
            yaw: DEFAULT_YAW,
            pitch: DEFAULT_PITCH,
            front: Vec3::NEG_Z,
            right: Vec3::X,
            up: Vec3::Y,
            zoom: DEFAULT_ZOOM,
        };
        camera.update_vectors();
        camera
    }

    /// View transform from world space into eye space. Pure query of the
    /// current state; cheap enough to call once per object per frame.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front, self.up)
    }

    /// Move along the basis by `movement_speed * dt`.
    ///
    /// `dt` is the caller-measured frame time in seconds; the camera does
    /// not measure time itself. Position is unbounded.
    pub fn process_keyboard(&mut self, direction: MoveDirection, dt: f32) {
        let velocity = self.movement_speed * dt;
        match direction {
            MoveDirection::Forward => self.position += self.front * velocity,
            MoveDirection::Backward => self.position -= self.front * velocity,
            MoveDirection::Left => self.position -= self.right * velocity,
            MoveDirection::Right => self.position += self.right * velocity,
        }
    }

    /// Apply a mouse-look delta in pixels.
    ///
    /// The caller has already inverted `y_offset` from screen space
    /// (positive = cursor moved up = pitch increases) and seeded the first
    /// sample. Pitch is clamped before the basis is recomputed.
    pub fn process_mouse_movement(&mut self, x_offset: f32, y_offset: f32) {
        self.yaw += x_offset * self.mouse_sensitivity;
        self.pitch += y_offset * self.mouse_sensitivity;
        self.pitch = self.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        self.update_vectors();
    }

    /// Apply a scroll-wheel delta: positive scroll narrows the field of
    /// view (zooms in). Zoom is clamped to [1°, 45°].
    pub fn process_mouse_scroll(&mut self, y_offset: f32) {
        self.zoom = (self.zoom - y_offset).clamp(ZOOM_MIN, ZOOM_MAX);
    }

    /// Forward basis vector.
    #[must_use]
    pub const fn front(&self) -> Vec3 {
        self.front
    }

    /// Right basis vector.
    #[must_use]
    pub const fn right(&self) -> Vec3 {
        self.right
    }

    /// Up basis vector.
    #[must_use]
    pub const fn up(&self) -> Vec3 {
        self.up
    }

    /// Yaw angle in degrees (unbounded; wraps via trigonometric
    /// periodicity).
    #[must_use]
    pub const fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Pitch angle in degrees, always inside [−89°, 89°].
    #[must_use]
    pub const fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Vertical field of view in degrees, always inside [1°, 45°]. Feeds
    /// the projection matrix, which the camera does not build itself.
    #[must_use]
    pub const fn zoom(&self) -> f32 {
        self.zoom
    }

    /// World up axis supplied at construction.
    #[must_use]
    pub const fn world_up(&self) -> Vec3 {
        self.world_up
    }

    /// Recompute `front`/`right`/`up` from yaw/pitch/world_up.
    ///
    /// Normalization runs on every recomputation rather than being assumed
    /// preserved, so the basis cannot shear over many small updates.
    fn update_vectors(&mut self) {
        let (yaw, pitch) = (self.yaw.to_radians(), self.pitch.to_radians());
        self.front = Vec3::new(
            yaw.cos() * pitch.cos(),
            pitch.sin(),
            yaw.sin() * pitch.cos(),
        )
        .normalize();
        self.right = self.front.cross(self.world_up).normalize();
        self.up = self.right.cross(self.front).normalize();
    }
}

/// GPU uniform holding the combined view-projection matrix and the camera
/// world position for specular lighting.
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    /// Combined projection × view matrix.
    pub view_proj: [[f32; 4]; 4],
    /// Camera world-space position.
    pub position: [f32; 3],
    /// Padding for GPU alignment.
    pub(crate) _pad: f32,
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraUniform {
    /// Identity view-projection at the origin.
    #[must_use]
    pub fn new() -> Self {
        Self {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            position: [0.0; 3],
            _pad: 0.0,
        }
    }

    /// Refresh from the camera's current state and the caller-built
    /// projection matrix.
    pub fn update_view_proj(&mut self, camera: &Camera, projection: Mat4) {
        self.view_proj = (projection * camera.view_matrix()).to_cols_array_2d();
        self.position = camera.position.to_array();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f32 = 1e-5;

    fn assert_orthonormal(camera: &Camera) {
        assert!((camera.front().length() - 1.0).abs() < TOL);
        assert!((camera.right().length() - 1.0).abs() < TOL);
        assert!((camera.up().length() - 1.0).abs() < TOL);
        assert!(camera.front().dot(camera.right()).abs() < TOL);
        assert!(camera.front().dot(camera.up()).abs() < TOL);
        assert!(camera.right().dot(camera.up()).abs() < TOL);
        // Handedness: right × front must reproduce up
        let cross = camera.right().cross(camera.front());
        assert!((cross - camera.up()).length() < 1e-4);
    }

    #[test]
    fn default_faces_negative_z() {
        let camera = Camera::default();
        assert!((camera.front() - Vec3::NEG_Z).length() < TOL);
        assert_orthonormal(&camera);
    }

    #[test]
    fn basis_stays_orthonormal_under_mouse_movement() {
        let mut camera = Camera::default();
        let offsets = [
            (12.5, -3.0),
            (-200.0, 50.0),
            (0.3, 0.3),
            (1000.0, -1000.0),
            (-0.01, 89.9),
            (45.0, 45.0),
        ];
        for (dx, dy) in offsets {
            camera.process_mouse_movement(dx, dy);
            assert_orthonormal(&camera);
        }
    }

    #[test]
    fn pitch_is_clamped() {
        let mut camera = Camera::default();
        for _ in 0..100 {
            camera.process_mouse_movement(0.0, 500.0);
            assert!(camera.pitch() <= 89.0);
        }
        for _ in 0..100 {
            camera.process_mouse_movement(0.0, -500.0);
            assert!(camera.pitch() >= -89.0);
        }
        assert_orthonormal(&camera);
    }

    #[test]
    fn zoom_is_clamped() {
        let mut camera = Camera::default();
        assert_eq!(camera.zoom(), 45.0);
        camera.process_mouse_scroll(50.0);
        assert_eq!(camera.zoom(), 1.0);
        camera.process_mouse_scroll(-100.0);
        assert_eq!(camera.zoom(), 45.0);
    }

    #[test]
    fn forward_backward_round_trips() {
        let mut camera = Camera::new(Vec3::new(3.0, -2.0, 7.5), Vec3::Y);
        camera.process_mouse_movement(123.0, -45.0);
        let start = camera.position;
        camera.process_keyboard(MoveDirection::Forward, 0.25);
        camera.process_keyboard(MoveDirection::Backward, 0.25);
        assert!((camera.position - start).length() < TOL);
    }

    #[test]
    fn strafe_moves_along_right() {
        let mut camera = Camera::default();
        camera.process_keyboard(MoveDirection::Right, 1.0);
        let expected = Vec3::new(DEFAULT_SPEED, 0.0, 1.0);
        assert!((camera.position - expected).length() < TOL);
    }

    #[test]
    fn movement_scales_with_dt() {
        let mut a = Camera::default();
        let mut b = Camera::default();
        a.process_keyboard(MoveDirection::Forward, 0.5);
        b.process_keyboard(MoveDirection::Forward, 0.25);
        b.process_keyboard(MoveDirection::Forward, 0.25);
        assert!((a.position - b.position).length() < TOL);
    }

    #[test]
    fn view_matrix_is_pure_look_at() {
        let camera = Camera::new(Vec3::new(0.0, 0.0, 1.0), Vec3::Y);
        let expected = Mat4::look_at_rh(
            camera.position,
            camera.position + camera.front(),
            camera.up(),
        );
        assert_eq!(camera.view_matrix(), expected);
        // Repeated queries with no mutation return the same matrix
        assert_eq!(camera.view_matrix(), camera.view_matrix());
    }

    #[test]
    fn uniform_tracks_camera_state() {
        let mut camera = Camera::default();
        camera.process_mouse_movement(30.0, 10.0);
        let projection =
            Mat4::perspective_rh(camera.zoom().to_radians(), 1.5, 0.1, 100.0);
        let mut uniform = CameraUniform::new();
        uniform.update_view_proj(&camera, projection);
        let expected = projection * camera.view_matrix();
        assert_eq!(uniform.view_proj, expected.to_cols_array_2d());
        assert_eq!(uniform.position, camera.position.to_array());
    }

    #[test]
    fn camera_uniform_is_16_byte_aligned() {
        assert_eq!(std::mem::size_of::<CameraUniform>() % 16, 0);
    }
}
