//! Walk Camera Module
//!
//! First-person gallery camera. Dragging with the left mouse button looks
//! around, WASD walks relative to where the camera faces, and the camera is
//! pinned to the floor height so looking down never lets you sink or fly.
//!
//! Conventions follow a left-handed view space:
//! - +X = right
//! - +Y = up
//! - +Z = forward when yaw and pitch are zero
//!
//! The camera only produces the *unconstrained* position for a frame. Room
//! containment is applied afterwards by the navigation resolver.

use glam::{EulerRot, Mat4, Quat, Vec3};

use crate::input::MovementKeys;

/// Pitch limit: ±45 degrees
pub const PITCH_LIMIT: f32 = std::f32::consts::FRAC_PI_4;
/// Base walking speed in m/s
pub const WALK_SPEED: f32 = 3.0;
/// Multiplier while the fast modifier is held
pub const FAST_MULTIPLIER: f32 = 5.0;
/// Multiplier while the slow modifier is held
pub const SLOW_MULTIPLIER: f32 = 0.1;
/// Drag-to-look sensitivity in radians per pixel
pub const DEFAULT_SENSITIVITY: f32 = 0.005;

/// Vertical field of view in radians
pub const FIELD_OF_VIEW: f32 = 0.25 * std::f32::consts::PI;
/// Near clip plane distance
pub const NEAR_PLANE: f32 = 0.1;
/// Far clip plane distance
pub const FAR_PLANE: f32 = 100.0;

/// First-person camera that walks on the gallery floor.
#[derive(Clone, Debug)]
pub struct WalkCamera {
    /// Camera position in world space
    pub position: Vec3,
    /// Rotation about X (radians), clamped to ±[`PITCH_LIMIT`]
    pub pitch: f32,
    /// Rotation about Y (radians), unrestricted
    pub yaw: f32,
    /// Drag sensitivity in radians per pixel
    pub sensitivity: f32,
    /// Height the camera is pinned to after every local move
    pub floor_height: f32,
    /// Base walking speed in m/s
    pub walk_speed: f32,
    /// Orientation restored on restart (pitch, yaw)
    initial_rotation: (f32, f32),
}

impl Default for WalkCamera {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            pitch: 0.0,
            yaw: 0.0,
            sensitivity: DEFAULT_SENSITIVITY,
            floor_height: 0.0,
            walk_speed: WALK_SPEED,
            initial_rotation: (0.0, 0.0),
        }
    }
}

impl WalkCamera {
    /// Create a camera at the origin facing +Z.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a camera standing at `position`.
    ///
    /// The floor height is taken from the position's Y.
    pub fn with_position(position: Vec3) -> Self {
        Self {
            position,
            floor_height: position.y,
            ..Default::default()
        }
    }

    /// Get the current camera position
    #[inline]
    pub fn get_position(&self) -> Vec3 {
        self.position
    }

    /// Set the camera position directly
    #[inline]
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Orientation as a quaternion (roll, then pitch, then yaw).
    #[inline]
    pub fn rotation(&self) -> Quat {
        Quat::from_euler(EulerRot::YXZ, self.yaw, self.pitch, 0.0)
    }

    /// Orientation the camera had when it was created or last marked.
    pub fn initial_rotation(&self) -> (f32, f32) {
        self.initial_rotation
    }

    /// Remember the current orientation as the one restored by [`WalkCamera::reset_rotation`].
    pub fn mark_initial_rotation(&mut self) {
        self.initial_rotation = (self.pitch, self.yaw);
    }

    /// Restore the remembered orientation.
    pub fn reset_rotation(&mut self) {
        (self.pitch, self.yaw) = self.initial_rotation;
    }

    /// Rotate by the given pitch and yaw deltas (radians).
    pub fn rotate_by(&mut self, pitch_delta: f32, yaw_delta: f32) {
        self.pitch = (self.pitch + pitch_delta).clamp(-PITCH_LIMIT, PITCH_LIMIT);
        self.yaw += yaw_delta;
    }

    /// Turn a mouse drag (pixels) into rotation.
    ///
    /// Vertical drag pitches, horizontal drag yaws.
    pub fn apply_mouse_drag(&mut self, dx: f32, dy: f32) {
        self.rotate_by(dy * self.sensitivity, dx * self.sensitivity);
    }

    /// Move along the camera's local axes, then pin to the floor.
    pub fn translate_local(&mut self, x: f32, y: f32, z: f32) {
        let dir = self.rotation() * Vec3::new(x, y, z);
        self.position += dir;
        self.position.y = self.floor_height;
    }

    /// Move by a world-space offset (no floor pinning).
    pub fn translate_world(&mut self, delta: Vec3) {
        self.position += delta;
    }

    /// Look direction (normalized).
    pub fn get_forward(&self) -> Vec3 {
        (self.rotation() * Vec3::Z).normalize()
    }

    /// Walk this frame from held keys.
    ///
    /// # Arguments
    /// * `keys` - Movement keys held this frame
    /// * `delta_time` - Frame time in seconds
    pub fn update(&mut self, keys: &MovementKeys, delta_time: f32) {
        let mut speed = delta_time * self.walk_speed;

        if keys.fast {
            speed *= FAST_MULTIPLIER;
        }
        if keys.slow {
            speed *= SLOW_MULTIPLIER;
        }

        if keys.forward {
            self.translate_local(0.0, 0.0, speed);
        }
        if keys.backward {
            self.translate_local(0.0, 0.0, -speed);
        }
        if keys.left {
            self.translate_local(-speed, 0.0, 0.0);
        }
        if keys.right {
            self.translate_local(speed, 0.0, 0.0);
        }
    }

    /// Left-handed view matrix for the current position and orientation.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_to_lh(self.position, self.get_forward(), Vec3::Y)
    }

    /// Left-handed perspective projection for the given aspect ratio.
    pub fn projection_matrix(&self, aspect_ratio: f32) -> Mat4 {
        Mat4::perspective_lh(FIELD_OF_VIEW, aspect_ratio, NEAR_PLANE, FAR_PLANE)
    }
}
