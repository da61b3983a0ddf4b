//! Mouse Input Module
//!
//! Cursor position and button tracking. Positions are raw window pixels with
//! the origin at the top-left, which is what the rating tray hit test expects.

/// Mouse button identifiers, independent of windowing system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
    /// Additional mouse buttons (button 4, 5, etc.)
    Other(u16),
}

/// State of all mouse buttons.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonState {
    pub left: bool,
    pub middle: bool,
    pub right: bool,
}

impl ButtonState {
    /// Update button state for a specific button.
    pub fn set(&mut self, button: MouseButton, pressed: bool) {
        match button {
            MouseButton::Left => self.left = pressed,
            MouseButton::Middle => self.middle = pressed,
            MouseButton::Right => self.right = pressed,
            MouseButton::Other(_) => {}
        }
    }

    /// Check if a specific button is pressed.
    pub fn is_pressed(&self, button: MouseButton) -> bool {
        match button {
            MouseButton::Left => self.left,
            MouseButton::Middle => self.middle,
            MouseButton::Right => self.right,
            MouseButton::Other(_) => false,
        }
    }
}

/// 2D position in window pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    /// Create a new position.
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<(f32, f32)> for Position {
    fn from(tuple: (f32, f32)) -> Self {
        Self {
            x: tuple.0,
            y: tuple.1,
        }
    }
}

/// Complete mouse state tracking.
///
/// Keeps the previous cursor position so drags can be turned into camera
/// rotation, and latches left clicks until [`MouseState::take_click`].
#[derive(Debug, Clone, Default)]
pub struct MouseState {
    /// Current cursor position in pixels.
    pub position: Option<Position>,
    /// Cursor position when the last frame was settled.
    pub last_position: Option<Position>,
    /// Current button states.
    pub buttons: ButtonState,
    /// Set on left press, cleared by `take_click`.
    click_pending: bool,
}

impl MouseState {
    /// Create a new mouse state with no position and all buttons released.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a cursor move.
    ///
    /// Moves accumulate until [`MouseState::settle`]; the first move ever
    /// seen only seeds the reference point.
    pub fn set_position(&mut self, x: f32, y: f32) {
        let position = Position::new(x, y);
        if self.last_position.is_none() {
            self.last_position = Some(position);
        }
        self.position = Some(position);
    }

    /// Record a button press or release.
    pub fn set_button(&mut self, button: MouseButton, pressed: bool) {
        if button == MouseButton::Left && pressed && !self.buttons.left {
            self.click_pending = true;
        }
        self.buttons.set(button, pressed);
    }

    /// Cursor movement since the last settle, in pixels.
    pub fn delta(&self) -> Position {
        match (self.position, self.last_position) {
            (Some(current), Some(last)) => Position::new(current.x - last.x, current.y - last.y),
            _ => Position::default(),
        }
    }

    /// Forget the previous position so the next delta is zero.
    pub fn settle(&mut self) {
        self.last_position = self.position;
    }

    /// Returns true once per left press.
    pub fn take_click(&mut self) -> bool {
        std::mem::take(&mut self.click_pending)
    }

    /// Returns true while the left button is held (drag-to-look).
    pub fn is_dragging(&self) -> bool {
        self.buttons.left
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delta_needs_two_samples() {
        let mut mouse = MouseState::new();
        assert_eq!(mouse.delta(), Position::default());

        mouse.set_position(100.0, 100.0);
        assert_eq!(mouse.delta(), Position::default());

        mouse.set_position(110.0, 95.0);
        assert_eq!(mouse.delta(), Position::new(10.0, -5.0));

        mouse.settle();
        assert_eq!(mouse.delta(), Position::default());
    }

    #[test]
    fn test_delta_accumulates_moves_between_settles() {
        let mut mouse = MouseState::new();
        mouse.set_position(100.0, 100.0);
        mouse.settle();

        mouse.set_position(102.0, 100.0);
        mouse.set_position(104.0, 99.0);
        assert_eq!(mouse.delta(), Position::new(4.0, -1.0));

        mouse.settle();
        mouse.set_position(101.0, 99.0);
        assert_eq!(mouse.delta(), Position::new(-3.0, 0.0));
    }

    #[test]
    fn test_click_latches_once() {
        let mut mouse = MouseState::new();
        mouse.set_button(MouseButton::Left, true);
        assert!(mouse.is_dragging());
        assert!(mouse.take_click());
        assert!(!mouse.take_click());

        // Holding the button does not produce more clicks
        mouse.set_button(MouseButton::Left, true);
        assert!(!mouse.take_click());

        mouse.set_button(MouseButton::Left, false);
        mouse.set_button(MouseButton::Right, true);
        assert!(!mouse.take_click());
        assert!(mouse.buttons.is_pressed(MouseButton::Right));
    }
}
