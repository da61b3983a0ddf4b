//! Physics type re-exports from glam
//!
//! The floor plane uses `Vec2` (x = world X, y = world Z); world positions
//! use `Vec3`.

pub use glam::{Vec2, Vec3};
