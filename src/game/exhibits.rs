//! Exhibits
//!
//! The pieces on display and the ratings visitors gave them.

use glam::Vec3;

use crate::physics::floor_point;
use crate::world::GalleryLayout;

/// Highest rating an exhibit can receive
pub const MAX_STARS: u8 = 5;

/// One piece on display.
#[derive(Debug, Clone, PartialEq)]
pub struct Exhibit {
    /// Display name
    pub name: String,
    /// World position
    pub position: Vec3,
    /// Stars given by the visitor (1..=5), `None` until rated
    rating: Option<u8>,
}

impl Exhibit {
    /// Create an unrated exhibit.
    pub fn new(name: impl Into<String>, position: Vec3) -> Self {
        Self {
            name: name.into(),
            position,
            rating: None,
        }
    }

    /// Current rating, if any.
    pub fn rating(&self) -> Option<u8> {
        self.rating
    }

    /// Set the rating; values are clamped to 1..=5.
    pub fn set_rating(&mut self, stars: u8) {
        self.rating = Some(stars.clamp(1, MAX_STARS));
    }

    /// Forget the rating.
    pub fn clear_rating(&mut self) {
        self.rating = None;
    }

    /// Distance on the floor plane to `position` (height ignored).
    pub fn floor_distance(&self, position: Vec3) -> f32 {
        floor_point(self.position).distance(floor_point(position))
    }
}

/// All exhibits in the gallery, in layout order.
#[derive(Debug, Clone, Default)]
pub struct ExhibitCatalog {
    exhibits: Vec<Exhibit>,
}

impl ExhibitCatalog {
    /// Create a catalog from exhibits.
    pub fn new(exhibits: Vec<Exhibit>) -> Self {
        Self { exhibits }
    }

    /// Build the catalog described by a layout.
    pub fn from_layout(layout: &GalleryLayout) -> Self {
        Self::new(
            layout
                .exhibits
                .iter()
                .map(|spec| Exhibit::new(spec.name.clone(), spec.position))
                .collect(),
        )
    }

    /// Number of exhibits.
    pub fn len(&self) -> usize {
        self.exhibits.len()
    }

    /// Returns true if there are no exhibits.
    pub fn is_empty(&self) -> bool {
        self.exhibits.is_empty()
    }

    /// Exhibit at `index`.
    pub fn get(&self, index: usize) -> Option<&Exhibit> {
        self.exhibits.get(index)
    }

    /// Mutable exhibit at `index`.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Exhibit> {
        self.exhibits.get_mut(index)
    }

    /// Iterate exhibits in layout order.
    pub fn iter(&self) -> std::slice::Iter<'_, Exhibit> {
        self.exhibits.iter()
    }

    /// Exhibit within `radius` of `position` on the floor plane.
    ///
    /// When several are in range the last one in layout order is returned.
    pub fn nearest_within(&self, position: Vec3, radius: f32) -> Option<usize> {
        self.exhibits
            .iter()
            .rposition(|e| e.floor_distance(position) < radius)
    }

    /// Clear every rating.
    pub fn clear_ratings(&mut self) {
        self.exhibits.iter_mut().for_each(Exhibit::clear_rating);
    }

    /// Number of exhibits that have a rating.
    pub fn rated_count(&self) -> usize {
        self.exhibits.iter().filter(|e| e.rating.is_some()).count()
    }
}
