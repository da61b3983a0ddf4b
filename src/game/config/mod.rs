//! Config Module
//!
//! Centralized configuration for walking and rating parameters.

pub mod gallery_config;

pub use gallery_config::{ConfigError, GalleryConfig, RatingTrayConfig};
