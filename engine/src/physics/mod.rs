//! Physics module for the gallery engine
//!
//! Floor-plane containment for a walking camera. Everything here works on
//! the horizontal X-Z plane; heights are carried through untouched.
//!
//! # Unit System
//!
//! **1 unit = 1 meter**, matching the authored gallery layout.
//!
//! # Submodules
//!
//! - [`types`] - Core mathematical types re-exported from glam
//! - [`bounds`] - Axis-aligned floor boxes and their edge queries
//! - [`regions`] - Ordered box collections (rooms, keep-out zones)
//! - [`navigation`] - Per-frame boundary resolution for the walker

pub mod bounds;
pub mod navigation;
pub mod regions;
pub mod types;

// Re-export commonly used types at the physics module level
pub use bounds::{AxisAlignedBox, floor_point};
pub use navigation::{BoundaryResolver, DEFAULT_SMOOTHING, NavigationError, NavigationState, Resolution};
pub use regions::{RegionSet, WalkableRegion};
pub use types::{Vec2, Vec3};
