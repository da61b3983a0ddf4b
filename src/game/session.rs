//! Gallery Session
//!
//! Owns everything a visit needs and runs the per-frame update:
//! look, walk, keep the walker on the floor plan, then exhibit proximity,
//! rating and restart handling.

use glam::Vec3;
use thiserror::Error;
use tracing::{debug, info};

use super::config::GalleryConfig;
use super::exhibits::ExhibitCatalog;
use super::rating::RatingPanel;
use crate::camera::WalkCamera;
use crate::input::FrameInput;
use crate::physics::{BoundaryResolver, NavigationState, Resolution};
use crate::world::{GalleryLayout, LayoutError};

/// Errors raised while starting a session.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The layout failed validation.
    #[error("invalid gallery layout: {0}")]
    Layout(#[from] LayoutError),
}

/// What happened during one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameReport {
    /// Frame counter (starts at 1)
    pub frame: u64,
    /// Camera position after the frame
    pub position: Vec3,
    /// Boundary resolution details for the move
    pub resolution: Resolution,
    /// Room the walker is tracked in
    pub region: usize,
    /// An exhibit is within reach
    pub can_rate: bool,
    /// The star tray is picking
    pub is_rating: bool,
    /// Stars shown by the tray
    pub displayed_stars: u8,
    /// Rating committed this frame, if any
    pub rated: Option<u8>,
    /// The visit was restarted this frame
    pub restarted: bool,
    /// The visitor asked to leave
    pub quit_requested: bool,
}

/// A visit to the gallery.
pub struct GallerySession {
    layout: GalleryLayout,
    config: GalleryConfig,
    camera: WalkCamera,
    resolver: BoundaryResolver,
    navigation: NavigationState,
    /// Navigation state at the spawn point, restored on restart
    spawn_navigation: NavigationState,
    catalog: ExhibitCatalog,
    rating: RatingPanel,
    frame: u64,
}

impl GallerySession {
    /// Start a visit at the layout's spawn point.
    pub fn new(layout: GalleryLayout, config: GalleryConfig) -> Result<Self, SessionError> {
        layout.validate()?;

        let rooms = layout.room_set();
        let spawn_navigation =
            NavigationState::at_spawn(&rooms, layout.spawn).map_err(LayoutError::from)?;
        let resolver =
            BoundaryResolver::new(rooms, layout.exclusion_set()).with_smoothing(config.smoothing);

        let mut camera = WalkCamera::with_position(layout.spawn);
        camera.sensitivity = config.mouse_sensitivity;
        camera.walk_speed = config.walk_speed;
        camera.mark_initial_rotation();

        info!(
            spawn = ?layout.spawn,
            room = layout.room_name(spawn_navigation.current_region()),
            "gallery session started"
        );

        Ok(Self {
            catalog: ExhibitCatalog::from_layout(&layout),
            rating: RatingPanel::new(config.rating_tray.clone()),
            layout,
            config,
            camera,
            resolver,
            navigation: spawn_navigation,
            spawn_navigation,
            frame: 0,
        })
    }

    /// Run one frame.
    pub fn update(&mut self, input: &FrameInput, delta_time: f32) -> FrameReport {
        self.frame += 1;

        // Drag to look
        if input.left_button_down {
            self.camera
                .apply_mouse_drag(input.mouse_delta.x, input.mouse_delta.y);
        }

        // Walk, then keep the result on the floor plan
        let previous = self.camera.get_position();
        self.camera.update(&input.keys.movement, delta_time);
        let proposed = self.camera.get_position();

        let region_before = self.navigation.current_region();
        let resolution = self
            .resolver
            .resolve(&mut self.navigation, previous, proposed);
        self.camera.set_position(resolution.position);

        if self.navigation.current_region() != region_before {
            debug!(
                from = self.layout.room_name(region_before),
                to = self.layout.room_name(self.navigation.current_region()),
                "entered room"
            );
        }

        // Exhibits and the star tray
        self.rating.update_proximity(
            &self.catalog,
            self.camera.get_position(),
            self.config.exhibit_radius,
        );
        self.rating.hover(&self.catalog, input.cursor, input.viewport);
        if input.keys.actions.rate {
            self.rating.begin_rating(&mut self.catalog);
        }
        let rated = if input.left_click {
            self.rating.click(&mut self.catalog)
        } else {
            None
        };

        let restarted = input.keys.actions.restart;
        if restarted {
            self.restart();
        }

        FrameReport {
            frame: self.frame,
            position: self.camera.get_position(),
            resolution,
            region: self.navigation.current_region(),
            can_rate: self.rating.can_rate(),
            is_rating: self.rating.is_rating(),
            displayed_stars: self.rating.displayed_stars(),
            rated,
            restarted,
            quit_requested: input.keys.actions.quit,
        }
    }

    /// Clear ratings and walk the visitor back to the entrance.
    pub fn restart(&mut self) {
        self.catalog.clear_ratings();
        self.rating.reset();
        self.camera.set_position(self.layout.spawn);
        self.camera.reset_rotation();
        self.navigation = self.spawn_navigation;
        info!("gallery session restarted");
    }

    /// The walking camera.
    pub fn camera(&self) -> &WalkCamera {
        &self.camera
    }

    /// Room tracking state.
    pub fn navigation(&self) -> &NavigationState {
        &self.navigation
    }

    /// Exhibits and their ratings.
    pub fn catalog(&self) -> &ExhibitCatalog {
        &self.catalog
    }

    /// Star tray state.
    pub fn rating(&self) -> &RatingPanel {
        &self.rating
    }

    /// Floor plan in use.
    pub fn layout(&self) -> &GalleryLayout {
        &self.layout
    }

    /// Tunables in use.
    pub fn config(&self) -> &GalleryConfig {
        &self.config
    }

    /// Frames run so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{KeyboardState, MovementKeys};

    fn walking(movement: MovementKeys) -> FrameInput {
        FrameInput {
            keys: KeyboardState {
                movement,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_starts_at_spawn_in_hall() {
        let session =
            GallerySession::new(GalleryLayout::default(), GalleryConfig::default()).unwrap();
        assert_eq!(session.camera().get_position(), Vec3::new(0.0, 0.0, -5.0));
        assert_eq!(session.navigation().current_region(), 0);
    }

    #[test]
    fn test_idle_frame_does_not_move() {
        let mut session =
            GallerySession::new(GalleryLayout::default(), GalleryConfig::default()).unwrap();
        let report = session.update(&FrameInput::default(), 1.0 / 60.0);
        assert_eq!(report.frame, 1);
        assert_eq!(report.position, Vec3::new(0.0, 0.0, -5.0));
        assert!(!report.resolution.was_corrected());
    }

    #[test]
    fn test_walking_into_wall_stops_at_wall() {
        let mut session =
            GallerySession::new(GalleryLayout::default(), GalleryConfig::default()).unwrap();
        let input = walking(MovementKeys {
            right: true,
            fast: true,
            ..Default::default()
        });
        // The hall's east wall is at x = 2.5 away from the doorways
        for _ in 0..600 {
            session.update(&input, 1.0 / 60.0);
        }
        let pos = session.camera().get_position();
        assert!(pos.x <= 2.5 + 1e-4, "walked through the wall: {:?}", pos);
        assert!(pos.x > 2.4, "did not reach the wall: {:?}", pos);
        assert!((pos.z + 5.0).abs() < 1e-4);
    }

    #[test]
    fn test_invalid_layout_rejected() {
        let mut layout = GalleryLayout::default();
        layout.spawn = Vec3::new(500.0, 0.0, 0.0);
        assert!(matches!(
            GallerySession::new(layout, GalleryConfig::default()),
            Err(SessionError::Layout(_))
        ));
    }
}
