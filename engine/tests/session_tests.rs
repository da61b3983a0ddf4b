//! Session Tests - A Visit Through the Gallery
//!
//! Drives GallerySession through the input layer the way a host window
//! would: walking, looking around, rating an exhibit and restarting.

use gallery_engine::game::{GalleryConfig, GallerySession};
use gallery_engine::input::{InputState, KeyCode, MouseButton};
use gallery_engine::world::GalleryLayout;
use glam::Vec3;

const DT: f32 = 1.0 / 60.0;

fn new_session() -> GallerySession {
    GallerySession::new(GalleryLayout::default(), GalleryConfig::default()).unwrap()
}

/// Hold `key` for `frames` frames.
fn hold(session: &mut GallerySession, input: &mut InputState, key: KeyCode, frames: u32) {
    input.keyboard.handle_key(key, true);
    for _ in 0..frames {
        session.update(&input.snapshot(), DT);
    }
    input.keyboard.handle_key(key, false);
}

/// Walk from the spawn point up to the lava sphere at (1, 5).
fn walk_to_lava_sphere(session: &mut GallerySession, input: &mut InputState) {
    // 0.05 m proposed per frame, halved by smoothing
    hold(session, input, KeyCode::W, 400);
}

// ============================================================================
// Walking
// ============================================================================

#[test]
fn test_walk_forward_moves_north() {
    let mut session = new_session();
    let mut input = InputState::new();

    walk_to_lava_sphere(&mut session, &mut input);

    let pos = session.camera().get_position();
    assert!((pos.z - 5.0).abs() < 0.01, "pos = {:?}", pos);
    assert!(pos.x.abs() < 1e-4);
    assert_eq!(pos.y, 0.0);
}

#[test]
fn test_cannot_leave_the_hall_south() {
    let mut session = new_session();
    let mut input = InputState::new();

    input.keyboard.handle_key(KeyCode::ShiftLeft, true);
    hold(&mut session, &mut input, KeyCode::S, 600);

    let pos = session.camera().get_position();
    assert!(pos.z >= -18.3875 - 1e-4, "pos = {:?}", pos);
    assert!(pos.z < -18.0);
    assert_eq!(session.navigation().current_region(), 0);
}

#[test]
fn test_drag_turns_walking_direction() {
    let mut session = new_session();
    let mut input = InputState::new();

    // Drag left by a quarter turn at the default sensitivity
    input.mouse.set_position(640.0, 360.0);
    input.mouse.settle();
    input.mouse.set_button(MouseButton::Left, true);
    input.mouse.set_position(640.0 - std::f32::consts::FRAC_PI_2 / 0.005, 360.0);
    session.update(&input.snapshot(), DT);
    input.mouse.set_button(MouseButton::Left, false);

    assert!((session.camera().yaw + std::f32::consts::FRAC_PI_2).abs() < 1e-4);

    hold(&mut session, &mut input, KeyCode::W, 60);
    let pos = session.camera().get_position();
    assert!(pos.x < -1.0, "pos = {:?}", pos);
    assert!((pos.z + 5.0).abs() < 1e-3);
}

// ============================================================================
// Rating
// ============================================================================

#[test]
fn test_rate_an_exhibit() {
    let mut session = new_session();
    let mut input = InputState::new();

    walk_to_lava_sphere(&mut session, &mut input);
    let report = session.update(&input.snapshot(), DT);
    assert!(report.can_rate);
    assert!(!report.is_rating);
    assert_eq!(session.rating().current_exhibit(), Some(1));

    // E starts picking
    hold(&mut session, &mut input, KeyCode::E, 1);
    assert!(session.rating().is_rating());

    // Cursor over the fourth star, then click
    input.mouse.set_position(704.0, 684.0);
    let report = session.update(&input.snapshot(), DT);
    assert_eq!(report.displayed_stars, 4);

    input.mouse.set_button(MouseButton::Left, true);
    let report = session.update(&input.snapshot(), DT);
    input.mouse.set_button(MouseButton::Left, false);

    assert_eq!(report.rated, Some(4));
    assert_eq!(session.catalog().get(1).and_then(|e| e.rating()), Some(4));
    assert_eq!(session.catalog().rated_count(), 1);
}

#[test]
fn test_rate_key_far_from_exhibits_does_nothing() {
    let mut session = new_session();
    let mut input = InputState::new();

    hold(&mut session, &mut input, KeyCode::E, 1);
    assert!(!session.rating().can_rate());
    assert!(!session.rating().is_rating());
}

// ============================================================================
// Restart and Quit
// ============================================================================

#[test]
fn test_restart_returns_to_spawn_and_clears_ratings() {
    let mut session = new_session();
    let mut input = InputState::new();

    walk_to_lava_sphere(&mut session, &mut input);
    hold(&mut session, &mut input, KeyCode::E, 1);
    input.mouse.set_position(400.0, 700.0);
    input.mouse.set_button(MouseButton::Left, true);
    session.update(&input.snapshot(), DT);
    input.mouse.set_button(MouseButton::Left, false);
    assert_eq!(session.catalog().rated_count(), 1);

    input.keyboard.handle_key(KeyCode::R, true);
    let report = session.update(&input.snapshot(), DT);
    input.keyboard.handle_key(KeyCode::R, false);

    assert!(report.restarted);
    assert_eq!(report.position, Vec3::new(0.0, 0.0, -5.0));
    assert_eq!(session.catalog().rated_count(), 0);
    assert!(!session.rating().is_rating());
    assert_eq!(session.navigation().current_region(), 0);
}

#[test]
fn test_escape_requests_quit() {
    let mut session = new_session();
    let mut input = InputState::new();

    assert!(!session.update(&input.snapshot(), DT).quit_requested);
    input.keyboard.handle_key(KeyCode::Escape, true);
    assert!(session.update(&input.snapshot(), DT).quit_requested);
}
