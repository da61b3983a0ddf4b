//! Game Module
//!
//! Gallery-specific systems that build on top of the engine: tunables,
//! the exhibit catalog, the star rating tray and the per-frame session.

pub mod config;
pub mod exhibits;
pub mod rating;
pub mod session;

pub use config::{ConfigError, GalleryConfig, RatingTrayConfig};
pub use exhibits::{Exhibit, ExhibitCatalog, MAX_STARS};
pub use rating::RatingPanel;
pub use session::{FrameReport, GallerySession, SessionError};
