//! Camera Module
//!
//! First-person camera state and math for walking the gallery.
//! This module is window-system agnostic - it only deals with camera state and math.

pub mod walk_camera;

pub use walk_camera::{
    WalkCamera, DEFAULT_SENSITIVITY, FAST_MULTIPLIER, PITCH_LIMIT, SLOW_MULTIPLIER, WALK_SPEED,
};
