//! Rating Panel
//!
//! State behind the star tray overlay. Walking up to an exhibit shows its
//! current rating; pressing the rate key clears it and turns the tray into
//! a picker driven by the cursor; a click commits the hovered star count.
//!
//! The tray sits centered along the bottom of the window. Only the lower
//! part of the window is live, left of the tray reads as zero stars and the
//! far right end shows a full tray.

use tracing::info;

use super::config::RatingTrayConfig;
use super::exhibits::ExhibitCatalog;
use crate::input::{Position, Viewport};

/// Star tray overlay state.
#[derive(Debug, Clone, Default)]
pub struct RatingPanel {
    tray: RatingTrayConfig,
    /// An exhibit is within reach
    can_rate: bool,
    /// The tray is picking a new rating
    is_rating: bool,
    /// Exhibit the tray refers to
    current_exhibit: Option<usize>,
    /// Stars under the cursor while picking
    hover_stars: Option<u8>,
    /// Stars the tray image shows (0..=5)
    displayed_stars: u8,
}

impl RatingPanel {
    /// Create a panel with the given tray geometry.
    pub fn new(tray: RatingTrayConfig) -> Self {
        Self {
            tray,
            ..Default::default()
        }
    }

    /// An exhibit is within reach (tray and prompt are visible).
    pub fn can_rate(&self) -> bool {
        self.can_rate
    }

    /// The tray is picking a new rating.
    pub fn is_rating(&self) -> bool {
        self.is_rating
    }

    /// Exhibit the tray refers to.
    pub fn current_exhibit(&self) -> Option<usize> {
        self.current_exhibit
    }

    /// Stars under the cursor while picking.
    pub fn hover_stars(&self) -> Option<u8> {
        self.hover_stars
    }

    /// Stars the tray image currently shows.
    pub fn displayed_stars(&self) -> u8 {
        self.displayed_stars
    }

    /// Whether the "press E to rate" prompt should be drawn.
    pub fn shows_prompt(&self) -> bool {
        self.can_rate && !self.is_rating
    }

    /// Refresh which exhibit is within reach of `position`.
    ///
    /// Walking away from every exhibit cancels picking.
    pub fn update_proximity(&mut self, catalog: &ExhibitCatalog, position: glam::Vec3, radius: f32) {
        let nearby = catalog.nearest_within(position, radius);
        self.can_rate = nearby.is_some();

        match nearby {
            Some(index) => {
                self.current_exhibit = Some(index);
                if !self.is_rating {
                    self.displayed_stars = catalog
                        .get(index)
                        .and_then(|e| e.rating())
                        .unwrap_or(0);
                }
            }
            None => self.is_rating = false,
        }
    }

    /// Start picking a rating for the exhibit within reach.
    ///
    /// Clears the exhibit's stored rating. Returns false when nothing is in reach.
    pub fn begin_rating(&mut self, catalog: &mut ExhibitCatalog) -> bool {
        if !self.can_rate {
            return false;
        }
        let Some(exhibit) = self.current_exhibit.and_then(|i| catalog.get_mut(i)) else {
            return false;
        };

        exhibit.clear_rating();
        self.is_rating = true;
        true
    }

    /// Track the cursor over the tray while picking.
    pub fn hover(&mut self, catalog: &ExhibitCatalog, cursor: Option<Position>, viewport: Viewport) {
        if !self.is_rating {
            return;
        }
        self.hover_stars = None;

        // Already committed; keep showing it until picking restarts
        let rated = self
            .current_exhibit
            .and_then(|i| catalog.get(i))
            .and_then(|e| e.rating())
            .is_some();
        if rated {
            return;
        }

        let Some(cursor) = cursor else {
            return;
        };

        if cursor.y < viewport.height * self.tray.active_from_height {
            self.displayed_stars = 0;
            return;
        }

        let stars = self.tray.stars.max(1);
        let left = viewport.width / 2.0 - self.tray.width / 2.0;
        let right = viewport.width / 2.0 + self.tray.width / 2.0;
        let slot = (self.tray.width / stars as f32).floor().max(1.0);

        if cursor.x < left {
            self.displayed_stars = 0;
        } else if cursor.x >= right - self.tray.right_slack {
            self.displayed_stars = stars;
        } else {
            let picked = (((cursor.x - left) / slot) as u8 + 1).min(stars);
            self.hover_stars = Some(picked);
            self.displayed_stars = picked;
        }
    }

    /// Commit the hovered rating to the current exhibit.
    ///
    /// Returns the committed star count.
    pub fn click(&mut self, catalog: &mut ExhibitCatalog) -> Option<u8> {
        if !(self.can_rate && self.is_rating) {
            return None;
        }
        let stars = self.hover_stars?;
        let exhibit = catalog.get_mut(self.current_exhibit?)?;

        exhibit.set_rating(stars);
        self.displayed_stars = stars;
        self.hover_stars = None;
        info!(exhibit = %exhibit.name, stars, "exhibit rated");
        Some(stars)
    }

    /// Back to the idle state (restart).
    pub fn reset(&mut self) {
        *self = Self::new(self.tray.clone());
    }
}
