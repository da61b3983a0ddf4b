//! Axis-Aligned Bounds
//!
//! Rectangular regions on the gallery floor. Boxes live in the horizontal
//! X-Z plane: the stored `Vec2` uses `x` for world X and `y` for world Z.
//! Queries take full `Vec3` world positions and ignore the height component.
//!
//! # Queries
//!
//! - [`AxisAlignedBox::contains`] - closed-interval point test
//! - [`AxisAlignedBox::edge_vector`] - per-axis clamp of an outside point back onto the box
//! - [`AxisAlignedBox::edge_vector_from_inside`] - shortest push that takes an inside point to an edge
//!
//! # Example
//!
//! ```
//! use gallery_engine::physics::AxisAlignedBox;
//! use glam::{Vec2, Vec3};
//!
//! let room = AxisAlignedBox::from_corners(Vec2::new(0.0, 0.0), Vec2::new(10.0, 4.0));
//! assert!(room.contains(Vec3::new(5.0, 0.0, 2.0)));
//!
//! let outside = Vec3::new(12.0, 0.0, 2.0);
//! let back_in = outside + room.edge_vector(outside);
//! assert_eq!(back_in, Vec3::new(10.0, 0.0, 2.0));
//! ```

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use super::regions::WalkableRegion;

/// A rectangle on the floor plane, stored as center + half-extent.
///
/// Half-extents are expected to be non-negative. A zero half-extent turns the
/// box into a segment (or a point) and is allowed; the constructors do not
/// validate, use [`AxisAlignedBox::is_well_formed`] when the input is untrusted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisAlignedBox {
    /// Center of the box (x = world X, y = world Z)
    center: Vec2,
    /// Distance from the center to each edge (x = world X, y = world Z)
    half_extent: Vec2,
}

impl AxisAlignedBox {
    /// Creates a box from its center and half-extent.
    pub fn new(center: Vec2, half_extent: Vec2) -> Self {
        Self {
            center,
            half_extent,
        }
    }

    /// Creates a box from two opposite corners.
    ///
    /// `top_left` must be the lesser corner on both axes and `bottom_right` the
    /// greater one. Swapped corners produce negative half-extents.
    ///
    /// # Arguments
    ///
    /// * `top_left` - Minimum corner (x = world X, y = world Z)
    /// * `bottom_right` - Maximum corner (x = world X, y = world Z)
    pub fn from_corners(top_left: Vec2, bottom_right: Vec2) -> Self {
        let half_extent = (bottom_right - top_left) * 0.5;
        Self {
            center: top_left + half_extent,
            half_extent,
        }
    }

    /// Creates a box from two opposite corners given as world positions.
    ///
    /// Only the X and Z components are read.
    pub fn from_corners_3d(top_left: Vec3, bottom_right: Vec3) -> Self {
        Self::from_corners(floor_point(top_left), floor_point(bottom_right))
    }

    /// Center of the box on the floor plane.
    #[inline]
    pub fn center(&self) -> Vec2 {
        self.center
    }

    /// Half-extent of the box on the floor plane.
    #[inline]
    pub fn half_extent(&self) -> Vec2 {
        self.half_extent
    }

    /// Minimum corner (smallest X and Z).
    #[inline]
    pub fn min(&self) -> Vec2 {
        self.center - self.half_extent
    }

    /// Maximum corner (largest X and Z).
    #[inline]
    pub fn max(&self) -> Vec2 {
        self.center + self.half_extent
    }

    /// Returns false when either half-extent is negative or not a number.
    pub fn is_well_formed(&self) -> bool {
        self.center.is_finite()
            && self.half_extent.is_finite()
            && self.half_extent.x >= 0.0
            && self.half_extent.y >= 0.0
    }

    /// Returns true if the point lies inside the box or on its boundary.
    pub fn contains(&self, point: Vec3) -> bool {
        let p = floor_point(point);
        let min = self.min();
        let max = self.max();

        p.x >= min.x && p.x <= max.x && p.y >= min.y && p.y <= max.y
    }

    /// Vector that moves an outside point onto the box.
    ///
    /// Each axis is clamped independently: an axis already within the box's
    /// span contributes zero. This is not the Euclidean closest point when the
    /// point is outside on both axes, it yields the corner instead of sliding.
    /// Points inside the box get the zero vector.
    ///
    /// # Returns
    ///
    /// Correction with `y = 0`; `point + correction` lies on or inside the box.
    pub fn edge_vector(&self, point: Vec3) -> Vec3 {
        let p = floor_point(point);
        let min = self.min();
        let max = self.max();

        let mut response = Vec3::ZERO;

        // West / east of the box
        if p.x < min.x {
            response.x = min.x - p.x;
        } else if p.x > max.x {
            response.x = max.x - p.x;
        }

        // North / south of the box
        if p.y < min.y {
            response.z = min.y - p.y;
        } else if p.y > max.y {
            response.z = max.y - p.y;
        }

        response
    }

    /// Shortest push that moves an inside point out to the box boundary.
    ///
    /// Per axis the nearer edge is chosen (the max edge wins an exact tie).
    /// Only the axis with the smaller escape distance is displaced; X wins a
    /// tie between axes. Points outside the box get the zero vector.
    ///
    /// # Returns
    ///
    /// Displacement with `y = 0` along exactly one of X or Z.
    pub fn edge_vector_from_inside(&self, point: Vec3) -> Vec3 {
        if !self.contains(point) {
            return Vec3::ZERO;
        }

        let p = floor_point(point);
        let min = self.min();
        let max = self.max();

        let dx = nearer_edge(min.x, max.x, p.x);
        let dz = nearer_edge(min.y, max.y, p.y);

        if dx.abs() <= dz.abs() {
            Vec3::new(dx, 0.0, 0.0)
        } else {
            Vec3::new(0.0, 0.0, dz)
        }
    }
}

impl WalkableRegion for AxisAlignedBox {
    fn contains_point(&self, point: Vec3) -> bool {
        self.contains(point)
    }
}

/// Projects a world position onto the floor plane (X, Z).
#[inline]
pub fn floor_point(point: Vec3) -> Vec2 {
    Vec2::new(point.x, point.z)
}

/// Signed displacement from `value` to whichever of `lo`/`hi` is closer.
fn nearer_edge(lo: f32, hi: f32, value: f32) -> f32 {
    let to_lo = lo - value;
    let to_hi = hi - value;
    if to_hi.abs() <= to_lo.abs() { to_hi } else { to_lo }
}
