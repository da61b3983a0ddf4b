//! World Module
//!
//! World-space description of the gallery: the authored floor plan that
//! the physics and game layers are built from.

pub mod gallery_layout;

pub use gallery_layout::{AreaSpec, BoxSpec, ExhibitSpec, GalleryLayout, LayoutError};
