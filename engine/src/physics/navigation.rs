//! Boundary Resolution
//!
//! Keeps a walking camera inside the union of room boxes and outside the
//! exhibit keep-out boxes. Runs once per frame with the position from before
//! the move and the unconstrained position free movement produced.
//!
//! # Per-frame steps
//!
//! 1. Every keep-out box containing the proposed point pushes it to its
//!    nearest edge. Pushes accumulate in list order, single pass.
//! 2. Rooms are scanned once: a room containing the previous position becomes
//!    the current room, and the scan stops at the first room containing the
//!    proposed position.
//! 3. If no room contains the proposed point it is clamped onto the current
//!    room, axis by axis.
//! 4. The result is blended with the previous position to smooth wall sliding.
//!
//! Nothing here fails: an out-of-bounds move is always corrected silently.

use glam::Vec3;
use thiserror::Error;
use tracing::{debug, trace, warn};

use super::regions::RegionSet;

/// Default blend factor between the previous and the corrected position.
pub const DEFAULT_SMOOTHING: f32 = 0.5;

/// Errors raised while setting up navigation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NavigationError {
    /// No room box contains the spawn point.
    #[error("spawn point ({x}, {z}) is not inside any room")]
    SpawnOutsideRooms {
        /// Spawn X
        x: f32,
        /// Spawn Z
        z: f32,
    },
}

/// Frame-to-frame navigation memory: which room the walker was last seen in.
///
/// `Default` points at room 0; prefer [`NavigationState::at_spawn`] so the
/// first correction targets the room the walker actually starts in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavigationState {
    current_region: usize,
}

impl NavigationState {
    /// Finds the room holding `spawn` and starts tracking from it.
    ///
    /// When rooms overlap at the spawn point the last listed one is used, the
    /// same rule the per-frame scan follows. An empty room set is accepted
    /// since it disables containment altogether.
    pub fn at_spawn(rooms: &RegionSet, spawn: Vec3) -> Result<Self, NavigationError> {
        if rooms.is_empty() {
            return Ok(Self::default());
        }

        rooms
            .last_containing(spawn)
            .map(|current_region| Self { current_region })
            .ok_or(NavigationError::SpawnOutsideRooms {
                x: spawn.x,
                z: spawn.z,
            })
    }

    /// Re-runs the spawn scan, e.g. when the walker restarts.
    pub fn reset_to_spawn(&mut self, rooms: &RegionSet, spawn: Vec3) -> Result<(), NavigationError> {
        *self = Self::at_spawn(rooms, spawn)?;
        Ok(())
    }

    /// Index of the room the walker was last confirmed inside.
    #[inline]
    pub fn current_region(&self) -> usize {
        self.current_region
    }
}

/// Outcome of one resolution step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolution {
    /// Final position after smoothing; write this back to the camera.
    pub position: Vec3,
    /// Proposed position after keep-out and room corrections, before smoothing.
    pub corrected: Vec3,
    /// How many keep-out boxes pushed the point.
    pub exclusion_pushes: usize,
    /// Whether the point left every room and was clamped back.
    pub snapped: bool,
}

impl Resolution {
    /// Returns true if any correction was applied.
    pub fn was_corrected(&self) -> bool {
        self.snapped || self.exclusion_pushes > 0
    }
}

/// Constrains proposed moves to the rooms, away from the keep-out boxes.
#[derive(Debug, Clone, Default)]
pub struct BoundaryResolver {
    rooms: RegionSet,
    exclusions: RegionSet,
    smoothing: f32,
}

impl BoundaryResolver {
    /// Creates a resolver with the default smoothing factor.
    pub fn new(rooms: RegionSet, exclusions: RegionSet) -> Self {
        Self {
            rooms,
            exclusions,
            smoothing: DEFAULT_SMOOTHING,
        }
    }

    /// Sets the blend factor toward the corrected position (clamped to 0..=1).
    ///
    /// 1.0 disables smoothing, 0.0 freezes the walker in place. Non-finite
    /// values fall back to [`DEFAULT_SMOOTHING`].
    pub fn with_smoothing(mut self, smoothing: f32) -> Self {
        self.smoothing = if smoothing.is_finite() {
            smoothing.clamp(0.0, 1.0)
        } else {
            warn!(smoothing, "non-finite smoothing factor, using default");
            DEFAULT_SMOOTHING
        };
        self
    }

    /// Walkable rooms.
    pub fn rooms(&self) -> &RegionSet {
        &self.rooms
    }

    /// Keep-out boxes.
    pub fn exclusions(&self) -> &RegionSet {
        &self.exclusions
    }

    /// Current blend factor.
    pub fn smoothing(&self) -> f32 {
        self.smoothing
    }

    /// Corrects `proposed` and blends it with `previous`.
    ///
    /// Height is never corrected; the proposed height passes through.
    ///
    /// # Arguments
    ///
    /// * `state` - Room tracking carried between frames
    /// * `previous` - Position at the start of the frame
    /// * `proposed` - Position after unconstrained movement this frame
    pub fn resolve(&self, state: &mut NavigationState, previous: Vec3, proposed: Vec3) -> Resolution {
        let mut corrected = proposed;

        // Keep-out boxes: push out once per containing box, in list order
        let mut exclusion_pushes = 0;
        for (index, keep_out) in self.exclusions.iter().enumerate() {
            if keep_out.contains(corrected) {
                let push = keep_out.edge_vector_from_inside(corrected);
                corrected.x += push.x;
                corrected.z += push.z;
                exclusion_pushes += 1;
                debug!(index, ?push, "pushed out of exhibit bounds");
            }
        }

        // Rooms: track where we came from, stop once the move is known good
        let mut in_bounds = false;
        for (index, room) in self.rooms.iter().enumerate() {
            if room.contains(previous) {
                state.current_region = index;
            }
            if room.contains(corrected) {
                in_bounds = true;
                break;
            }
        }

        let mut snapped = false;
        if !in_bounds {
            if let Some(room) = self.rooms.get(state.current_region) {
                let edge = room.edge_vector(corrected);
                corrected.x += edge.x;
                corrected.z += edge.z;
                snapped = true;
                debug!(
                    region = state.current_region,
                    ?edge,
                    "move left every room, clamped back"
                );
            }
        }

        let position = Vec3::new(
            previous.x + (corrected.x - previous.x) * self.smoothing,
            proposed.y,
            previous.z + (corrected.z - previous.z) * self.smoothing,
        );

        trace!(?previous, ?proposed, ?position, "resolved move");

        Resolution {
            position,
            corrected,
            exclusion_pushes,
            snapped,
        }
    }
}
