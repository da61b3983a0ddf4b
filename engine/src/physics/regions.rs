//! Region Sets
//!
//! Ordered collections of floor boxes. The gallery uses two of them: the
//! walkable rooms (whose union is the navigable floor, doorway boxes overlap
//! the rooms they connect) and the exhibit keep-out boxes.
//!
//! Connectivity between rooms is purely geometric. There is no adjacency
//! graph; two rooms are connected when their boxes (or a doorway box between
//! them) overlap.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::bounds::AxisAlignedBox;

/// Something a walker can stand inside.
pub trait WalkableRegion {
    /// Returns true if the point (height ignored) lies inside the region.
    fn contains_point(&self, point: Vec3) -> bool;
}

/// An ordered list of boxes. Order is significant for "current room" tracking.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegionSet {
    boxes: Vec<AxisAlignedBox>,
}

impl RegionSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of boxes in the set.
    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    /// Returns true if the set holds no boxes.
    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    /// Appends a box at the end of the set.
    pub fn push(&mut self, bounds: AxisAlignedBox) {
        self.boxes.push(bounds);
    }

    /// Box at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&AxisAlignedBox> {
        self.boxes.get(index)
    }

    /// Iterates boxes in authoring order.
    pub fn iter(&self) -> std::slice::Iter<'_, AxisAlignedBox> {
        self.boxes.iter()
    }

    /// Returns true if any box contains the point.
    pub fn contains(&self, point: Vec3) -> bool {
        self.boxes.iter().any(|b| b.contains(point))
    }

    /// Index of the first box containing the point.
    pub fn first_containing(&self, point: Vec3) -> Option<usize> {
        self.boxes.iter().position(|b| b.contains(point))
    }

    /// Index of the last box containing the point.
    ///
    /// Doorway boxes are listed after the room they open from, so the last
    /// match is the most specific one.
    pub fn last_containing(&self, point: Vec3) -> Option<usize> {
        self.boxes.iter().rposition(|b| b.contains(point))
    }
}

impl WalkableRegion for RegionSet {
    fn contains_point(&self, point: Vec3) -> bool {
        self.contains(point)
    }
}

impl From<Vec<AxisAlignedBox>> for RegionSet {
    fn from(boxes: Vec<AxisAlignedBox>) -> Self {
        Self { boxes }
    }
}

impl FromIterator<AxisAlignedBox> for RegionSet {
    fn from_iter<I: IntoIterator<Item = AxisAlignedBox>>(iter: I) -> Self {
        Self {
            boxes: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a RegionSet {
    type Item = &'a AxisAlignedBox;
    type IntoIter = std::slice::Iter<'a, AxisAlignedBox>;

    fn into_iter(self) -> Self::IntoIter {
        self.boxes.iter()
    }
}
