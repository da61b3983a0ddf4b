//! Input Module
//!
//! Platform-agnostic keyboard and mouse state for the gallery walker.
//! This module is decoupled from any specific windowing system so a host
//! (or a scripted driver) can feed events in directly.
//!
//! # Example
//!
//! ```
//! use gallery_engine::input::{InputState, KeyCode, MouseButton};
//!
//! let mut input = InputState::new();
//! input.keyboard.handle_key(KeyCode::W, true);
//! input.mouse.set_position(960.0, 900.0);
//! input.mouse.set_button(MouseButton::Left, true);
//!
//! let frame = input.snapshot();
//! assert!(frame.keys.movement.forward);
//! assert!(frame.left_click);
//! ```

pub mod keyboard;
pub mod mouse;

pub use keyboard::{ActionKeys, KeyCode, KeyboardState, MovementKeys};
pub use mouse::{ButtonState, MouseButton, MouseState, Position};

/// Window size in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    /// Create a viewport.
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Width over height, guarded against a zero-height window.
    pub fn aspect_ratio(&self) -> f32 {
        self.width / self.height.max(1.0)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1280.0, 720.0)
    }
}

/// Everything the per-frame update needs from the input devices.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameInput {
    /// Held keys this frame
    pub keys: KeyboardState,
    /// Cursor movement since the last frame (pixels)
    pub mouse_delta: Position,
    /// Cursor position (pixels, top-left origin), if known
    pub cursor: Option<Position>,
    /// Left button held (drag-to-look)
    pub left_button_down: bool,
    /// Left button went down since the last frame
    pub left_click: bool,
    /// Current window size
    pub viewport: Viewport,
}

/// Combined input state for both keyboard and mouse.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    pub keyboard: KeyboardState,
    pub mouse: MouseState,
    pub viewport: Viewport,
}

impl InputState {
    /// Create a new input state with all inputs in their default state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all input state to defaults, keeping the viewport.
    pub fn reset(&mut self) {
        self.keyboard.reset();
        self.mouse = MouseState::default();
    }

    /// Capture this frame's input and consume one-shot events.
    pub fn snapshot(&mut self) -> FrameInput {
        let frame = FrameInput {
            keys: self.keyboard,
            mouse_delta: self.mouse.delta(),
            cursor: self.mouse.position,
            left_button_down: self.mouse.is_dragging(),
            left_click: self.mouse.take_click(),
            viewport: self.viewport,
        };
        self.mouse.settle();
        frame
    }
}
