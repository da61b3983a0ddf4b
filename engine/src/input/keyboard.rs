//! Keyboard Input Module
//!
//! Keyboard state for walking the gallery and the rating/restart actions.
//! Decoupled from any windowing system to use generic key codes.

/// Generic key codes, independent of windowing system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    // Movement keys
    W,
    A,
    S,
    D,
    ShiftLeft,
    ShiftRight,
    ControlLeft,
    ControlRight,

    // Gallery actions
    /// Start rating the exhibit in front of you
    E,
    /// Restart the walkthrough
    R,
    Escape,

    /// Catch-all for unhandled keys
    Unknown,
}

/// Tracks the current state of movement keys.
///
/// Held keys keep the walker moving every frame until released.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MovementKeys {
    /// W key - walk forward
    pub forward: bool,
    /// S key - walk backward
    pub backward: bool,
    /// A key - strafe left
    pub left: bool,
    /// D key - strafe right
    pub right: bool,
    /// Shift - walk faster
    pub fast: bool,
    /// Ctrl - walk slower (fine positioning in front of an exhibit)
    pub slow: bool,
}

impl MovementKeys {
    /// Create a new movement keys state with all keys released.
    pub fn new() -> Self {
        Self::default()
    }

    /// Update movement state based on key press/release.
    ///
    /// Returns `true` if the key was a movement key and was handled,
    /// `false` otherwise.
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) -> bool {
        match key {
            KeyCode::W => self.forward = pressed,
            KeyCode::S => self.backward = pressed,
            KeyCode::A => self.left = pressed,
            KeyCode::D => self.right = pressed,
            KeyCode::ShiftLeft | KeyCode::ShiftRight => self.fast = pressed,
            KeyCode::ControlLeft | KeyCode::ControlRight => self.slow = pressed,
            _ => return false,
        }
        true
    }

    /// Check if any direction key is currently pressed.
    pub fn any_pressed(&self) -> bool {
        self.forward || self.backward || self.left || self.right
    }

    /// Reset all movement keys to released state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Gallery action keys (held state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActionKeys {
    /// E - enter rating mode for the nearby exhibit
    pub rate: bool,
    /// R - clear ratings and go back to the entrance
    pub restart: bool,
    /// Escape - leave the gallery
    pub quit: bool,
}

impl ActionKeys {
    /// Returns `true` if the key was an action key and was handled.
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) -> bool {
        match key {
            KeyCode::E => self.rate = pressed,
            KeyCode::R => self.restart = pressed,
            KeyCode::Escape => self.quit = pressed,
            _ => return false,
        }
        true
    }
}

/// Complete keyboard state tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyboardState {
    /// Movement key states
    pub movement: MovementKeys,
    /// Gallery action key states
    pub actions: ActionKeys,
}

impl KeyboardState {
    /// Create a new keyboard state with all keys released.
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a key press or release event.
    ///
    /// Returns `true` if the key was handled.
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) -> bool {
        self.movement.handle_key(key, pressed) || self.actions.handle_key(key, pressed)
    }

    /// Reset all keyboard state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
