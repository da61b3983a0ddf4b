//! Gallery Layout
//!
//! Hand-authored floor plan of the gallery: the walkable room boxes, the
//! exhibit keep-out boxes, where the exhibits stand and where the visitor
//! spawns. Layouts are plain JSON so the floor plan can be edited without
//! touching code; [`GalleryLayout::default`] is the built-in gallery.
//!
//! Boxes can be written either way round:
//!
//! ```json
//! { "name": "West Doorway", "top_left": [-12.0, 1.0], "bottom_right": [-9.5, 4.0] }
//! { "name": "Pedestal", "center": [2.0, 2.0], "half_extent": [1.0, 1.0] }
//! ```
//!
//! Two-component vectors are floor coordinates `[x, z]`.

use std::path::Path;

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::physics::{AxisAlignedBox, NavigationError, NavigationState, RegionSet};

// ============================================================================
// ERROR TYPE
// ============================================================================

/// Errors that can occur while loading or validating a layout.
#[derive(Debug, Error)]
pub enum LayoutError {
    /// Standard I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// A box has negative or non-finite extents (usually swapped corners).
    #[error("box '{name}' is malformed (corners swapped or non-finite)")]
    MalformedBox {
        /// Name of the offending box
        name: String,
    },
    /// The spawn point is not inside any room.
    #[error(transparent)]
    Navigation(#[from] NavigationError),
}

// ============================================================================
// SPECS
// ============================================================================

/// How a box is written in a layout file.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BoxSpec {
    /// Lesser corner and greater corner, `[x, z]` each
    Corners { top_left: Vec2, bottom_right: Vec2 },
    /// Center and half-extent, `[x, z]` each
    CenterExtent { center: Vec2, half_extent: Vec2 },
}

impl BoxSpec {
    /// Canonical box for this spec.
    pub fn to_box(&self) -> AxisAlignedBox {
        match *self {
            BoxSpec::Corners {
                top_left,
                bottom_right,
            } => AxisAlignedBox::from_corners(top_left, bottom_right),
            BoxSpec::CenterExtent {
                center,
                half_extent,
            } => AxisAlignedBox::new(center, half_extent),
        }
    }
}

/// A named box (a room, a doorway or a keep-out zone).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaSpec {
    /// Display name, used in logs and errors
    pub name: String,
    /// Extent of the area
    #[serde(flatten)]
    pub bounds: BoxSpec,
}

impl AreaSpec {
    /// Area from two opposite corners, `(x, z)` each.
    pub fn corners(name: &str, top_left: (f32, f32), bottom_right: (f32, f32)) -> Self {
        Self {
            name: name.to_string(),
            bounds: BoxSpec::Corners {
                top_left: Vec2::new(top_left.0, top_left.1),
                bottom_right: Vec2::new(bottom_right.0, bottom_right.1),
            },
        }
    }
}

/// An exhibit placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExhibitSpec {
    /// Display name
    pub name: String,
    /// World position of the exhibit
    pub position: Vec3,
}

impl ExhibitSpec {
    fn new(name: &str, position: Vec3) -> Self {
        Self {
            name: name.to_string(),
            position,
        }
    }
}

// ============================================================================
// LAYOUT
// ============================================================================

/// Complete floor plan of the gallery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryLayout {
    /// Where the visitor starts (and returns to on restart)
    pub spawn: Vec3,
    /// Walkable areas; their union is the floor. Order matters for room tracking.
    pub rooms: Vec<AreaSpec>,
    /// Keep-out areas around exhibits
    #[serde(default)]
    pub exclusions: Vec<AreaSpec>,
    /// Exhibits visitors can rate
    #[serde(default)]
    pub exhibits: Vec<ExhibitSpec>,
}

impl Default for GalleryLayout {
    /// The built-in gallery: a long starting hall with doorways west and east,
    /// a west room, an east room and a southeast room behind a south door.
    fn default() -> Self {
        Self {
            spawn: Vec3::new(0.0, 0.0, -5.0),
            rooms: vec![
                // Starting hall
                AreaSpec::corners("Starting Hall", (-10.0, -18.3875), (2.5, 15.5)),
                AreaSpec::corners("West Doorway", (-12.0, 1.0), (-9.5, 4.0)),
                AreaSpec::corners("East Doorway", (2.0, 1.0), (5.0, 4.0)),
                // West room
                AreaSpec::corners("West Room", (-24.0, -4.0), (-12.0, 8.0)),
                // East room
                AreaSpec::corners("East Room", (5.0, -3.0), (17.0, 9.0)),
                AreaSpec::corners("South Door", (10.0, -6.0), (11.0, -2.0)),
                // Southeast room
                AreaSpec::corners("Southeast Room", (5.0, -17.0), (17.0, -6.0)),
            ],
            exclusions: Vec::new(),
            exhibits: vec![
                ExhibitSpec::new("Tiled Sphere", Vec3::new(-8.0, 0.9, 5.0)),
                ExhibitSpec::new("Lava Sphere", Vec3::new(1.0, 0.75, 5.0)),
                ExhibitSpec::new("Big Painting", Vec3::new(-4.0, 2.0, 16.0)),
                ExhibitSpec::new("Big Sculpture", Vec3::new(-4.0, -1.0, -15.0)),
                ExhibitSpec::new("Painting 1", Vec3::new(-10.5, 1.5, -6.0)),
                ExhibitSpec::new("Painting 2", Vec3::new(3.0, 1.5, -6.0)),
                ExhibitSpec::new("Painting 3", Vec3::new(10.5, 2.5, -18.0)),
                ExhibitSpec::new("Volcanic Torus", Vec3::new(-18.5, 1.0, 2.5)),
            ],
        }
    }
}

impl GalleryLayout {
    /// Parse a layout from JSON text and validate it.
    pub fn from_json_str(json: &str) -> Result<Self, LayoutError> {
        let layout: Self = serde_json::from_str(json)?;
        layout.validate()?;
        Ok(layout)
    }

    /// Read a layout file and validate it.
    pub fn load_json(path: &Path) -> Result<Self, LayoutError> {
        let text = std::fs::read_to_string(path)?;
        let layout = Self::from_json_str(&text)?;
        info!(
            path = %path.display(),
            rooms = layout.rooms.len(),
            exclusions = layout.exclusions.len(),
            exhibits = layout.exhibits.len(),
            "loaded gallery layout"
        );
        Ok(layout)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, LayoutError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check every box is well formed and the spawn point is inside a room.
    pub fn validate(&self) -> Result<(), LayoutError> {
        for area in self.rooms.iter().chain(&self.exclusions) {
            if !area.bounds.to_box().is_well_formed() {
                return Err(LayoutError::MalformedBox {
                    name: area.name.clone(),
                });
            }
        }

        let state = NavigationState::at_spawn(&self.room_set(), self.spawn)?;
        debug!(
            room = self.rooms.get(state.current_region()).map(|r| r.name.as_str()),
            "spawn room"
        );
        Ok(())
    }

    /// Walkable rooms in authoring order.
    pub fn room_set(&self) -> RegionSet {
        self.rooms.iter().map(|a| a.bounds.to_box()).collect()
    }

    /// Keep-out boxes in authoring order.
    pub fn exclusion_set(&self) -> RegionSet {
        self.exclusions.iter().map(|a| a.bounds.to_box()).collect()
    }

    /// Name of the room at `index`, if any.
    pub fn room_name(&self, index: usize) -> Option<&str> {
        self.rooms.get(index).map(|r| r.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout_is_valid() {
        let layout = GalleryLayout::default();
        assert!(layout.validate().is_ok());
        assert_eq!(layout.rooms.len(), 7);
        assert_eq!(layout.exhibits.len(), 8);
        assert!(layout.exclusions.is_empty());
    }

    #[test]
    fn test_default_doorways_overlap_hall() {
        let rooms = GalleryLayout::default().room_set();
        // Inside both the hall and the west doorway
        let threshold = Vec3::new(-9.75, 0.0, 2.5);
        assert_eq!(rooms.first_containing(threshold), Some(0));
        assert_eq!(rooms.last_containing(threshold), Some(1));
        // Through the doorway into the west room
        assert!(rooms.contains(Vec3::new(-12.0, 0.0, 2.5)));
        // Between the doorway jambs is a wall
        assert!(!rooms.contains(Vec3::new(-11.0, 0.0, 0.5)));
    }

    #[test]
    fn test_json_accepts_both_box_forms() {
        let json = r#"{
            "spawn": [0.0, 0.0, 0.0],
            "rooms": [
                { "name": "Hall", "top_left": [-5.0, -5.0], "bottom_right": [5.0, 5.0] }
            ],
            "exclusions": [
                { "name": "Pedestal", "center": [2.0, 2.0], "half_extent": [1.0, 1.0] }
            ]
        }"#;
        let layout = GalleryLayout::from_json_str(json).unwrap();
        assert_eq!(
            layout.room_set().get(0),
            Some(&AxisAlignedBox::new(Vec2::ZERO, Vec2::new(5.0, 5.0)))
        );
        assert_eq!(
            layout.exclusion_set().get(0),
            Some(&AxisAlignedBox::new(Vec2::new(2.0, 2.0), Vec2::new(1.0, 1.0)))
        );
        assert!(layout.exhibits.is_empty());
    }

    #[test]
    fn test_swapped_corners_rejected() {
        let json = r#"{
            "spawn": [0.0, 0.0, 0.0],
            "rooms": [
                { "name": "Backwards", "top_left": [5.0, 5.0], "bottom_right": [-5.0, -5.0] }
            ]
        }"#;
        match GalleryLayout::from_json_str(json) {
            Err(LayoutError::MalformedBox { name }) => assert_eq!(name, "Backwards"),
            other => panic!("expected MalformedBox, got {:?}", other),
        }
    }

    #[test]
    fn test_spawn_outside_rooms_rejected() {
        let mut layout = GalleryLayout::default();
        layout.spawn = Vec3::new(100.0, 0.0, 100.0);
        assert!(matches!(
            layout.validate(),
            Err(LayoutError::Navigation(NavigationError::SpawnOutsideRooms { .. }))
        ));
    }

    #[test]
    fn test_default_survives_json() {
        let layout = GalleryLayout::default();
        let json = layout.to_json_pretty().unwrap();
        let parsed = GalleryLayout::from_json_str(&json).unwrap();
        assert_eq!(parsed.room_set(), layout.room_set());
        assert_eq!(parsed.exhibits, layout.exhibits);
    }
}
