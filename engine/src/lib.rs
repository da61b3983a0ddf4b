//! Gallery Engine Library
//!
//! Walkthrough core for a first-person virtual art gallery. The floor plan
//! is a set of axis-aligned room boxes; every frame the walker's proposed
//! move is checked against them, pushed out of exhibit keep-out boxes and
//! snapped back onto the last room when it would leave the floor.
//!
//! # Modules
//!
//! - [`physics`] - Box containment, room sets and the per-frame boundary resolver
//! - [`camera`] - First-person walking camera
//! - [`input`] - Platform-agnostic keyboard and mouse state
//! - [`world`] - Gallery floor plan (rooms, keep-out boxes, exhibits)
//! - [`game`] - Exhibit ratings, configuration and the gallery session
//!
//! # Example
//!
//! ```
//! use gallery_engine::game::{GalleryConfig, GallerySession};
//! use gallery_engine::input::{FrameInput, KeyCode, KeyboardState};
//! use gallery_engine::world::GalleryLayout;
//!
//! let mut session = GallerySession::new(GalleryLayout::default(), GalleryConfig::default())?;
//!
//! let mut keys = KeyboardState::default();
//! keys.handle_key(KeyCode::W, true);
//! let input = FrameInput { keys, ..Default::default() };
//!
//! let report = session.update(&input, 1.0 / 60.0);
//! assert!(report.position.z > -5.0);
//! # Ok::<(), gallery_engine::game::SessionError>(())
//! ```

pub mod camera;
pub mod input;
pub mod physics;
pub mod world;

// Gallery-specific modules (located in src/game/ directory)
#[path = "../../src/game/mod.rs"]
pub mod game;

// Re-export commonly used types
pub use camera::WalkCamera;
pub use input::{FrameInput, InputState, KeyCode, KeyboardState, MouseButton, MouseState};
pub use physics::{AxisAlignedBox, BoundaryResolver, NavigationState, RegionSet};
pub use world::GalleryLayout;
