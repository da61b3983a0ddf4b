//! Gallery Walkthrough
//!
//! Headless driver for the gallery session. Plays a scripted visit through
//! the input layer: walk up to an exhibit and rate it, turn west, walk
//! through the west doorway, restart, then leave.
//!
//! Run with: `cargo run --bin gallery_walkthrough -- --report-every 30`
//!
//! Set `RUST_LOG=debug` to see room changes and boundary corrections.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use gallery_engine::game::{FrameReport, GalleryConfig, GallerySession};
use gallery_engine::input::{InputState, KeyCode, MouseButton};
use gallery_engine::world::GalleryLayout;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Scripted walk through the virtual gallery")]
struct Args {
    /// Floor plan JSON (defaults to the built-in gallery)
    #[arg(long)]
    layout: Option<PathBuf>,
    /// Tunables JSON (missing fields keep their defaults)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Stop after this many frames even if the tour is not finished
    #[arg(long)]
    frames: Option<u64>,
    /// Frame time in seconds
    #[arg(long, default_value_t = 1.0 / 60.0)]
    dt: f32,
    /// Print the floor plan as JSON and exit
    #[arg(long)]
    dump_layout: bool,
    /// Log the walker's position every N frames (0 = only at step ends)
    #[arg(long, default_value_t = 60)]
    report_every: u64,
}

// ============================================================================
// TOUR SCRIPT
// ============================================================================

/// What the scripted visitor does during a step.
#[derive(Debug, Clone, Copy)]
enum Gesture {
    /// Hold a key for the whole step
    Hold(KeyCode),
    /// Press a key for one frame
    Tap(KeyCode),
    /// Drag horizontally by this many pixels, spread over the step
    Look { dx: f32 },
    /// Park the cursor over the star tray at this fraction of the window width
    PointAtTray { fraction: f32 },
    /// Click the left button once
    Click,
}

#[derive(Debug, Clone, Copy)]
struct TourStep {
    label: &'static str,
    gesture: Gesture,
    frames: u32,
}

const fn step(label: &'static str, gesture: Gesture, frames: u32) -> TourStep {
    TourStep {
        label,
        gesture,
        frames,
    }
}

/// Default visit, tuned for the built-in layout at 60 fps.
const TOUR: &[TourStep] = &[
    step("walk up to the lava sphere", Gesture::Hold(KeyCode::W), 400),
    step("start rating", Gesture::Tap(KeyCode::E), 1),
    step("hover the fourth star", Gesture::PointAtTray { fraction: 0.55 }, 2),
    step("commit the rating", Gesture::Click, 1),
    step("back off toward the doorway", Gesture::Hold(KeyCode::S), 100),
    // -pi/2 of yaw at the default sensitivity
    step("turn west", Gesture::Look { dx: -314.16 }, 20),
    step("walk into the west room", Gesture::Hold(KeyCode::W), 600),
    step("restart the visit", Gesture::Tap(KeyCode::R), 1),
    step("leave", Gesture::Tap(KeyCode::Escape), 1),
];

/// Apply the start of a step to the input devices.
fn begin(input: &mut InputState, gesture: Gesture) {
    let viewport = input.viewport;
    match gesture {
        Gesture::Hold(key) | Gesture::Tap(key) => {
            input.keyboard.handle_key(key, true);
        }
        Gesture::Look { .. } => {
            input
                .mouse
                .set_position(viewport.width / 2.0, viewport.height / 2.0);
            input.mouse.settle();
            input.mouse.set_button(MouseButton::Left, true);
            // Dragging is not a click on the tray
            input.mouse.take_click();
        }
        Gesture::PointAtTray { fraction } => {
            input
                .mouse
                .set_position(viewport.width * fraction, viewport.height * 0.95);
            input.mouse.settle();
        }
        Gesture::Click => input.mouse.set_button(MouseButton::Left, true),
    }
}

/// Feed per-frame motion for a step.
fn during(input: &mut InputState, step: &TourStep) {
    if let Gesture::Look { dx } = step.gesture {
        if let Some(cursor) = input.mouse.position {
            input
                .mouse
                .set_position(cursor.x + dx / step.frames.max(1) as f32, cursor.y);
        }
    }
}

/// Release whatever a step pressed.
fn end(input: &mut InputState, gesture: Gesture) {
    match gesture {
        Gesture::Hold(key) | Gesture::Tap(key) => {
            input.keyboard.handle_key(key, false);
        }
        Gesture::Look { .. } | Gesture::Click => input.mouse.set_button(MouseButton::Left, false),
        Gesture::PointAtTray { .. } => {}
    }
}

/// `RUST_LOG` directives when given and valid, `info` otherwise.
fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

fn log_report(session: &GallerySession, report: &FrameReport, label: &str) {
    info!(
        frame = report.frame,
        step = label,
        x = report.position.x,
        z = report.position.z,
        room = session.layout().room_name(report.region).unwrap_or("-"),
        can_rate = report.can_rate,
        stars = report.displayed_stars,
        "walker"
    );
}

// ============================================================================
// MAIN
// ============================================================================

fn main() -> Result<()> {
    let args = Args::parse();

    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(directives.as_deref()))
        .init();

    let layout = match &args.layout {
        Some(path) => GalleryLayout::load_json(path)
            .with_context(|| format!("loading layout {}", path.display()))?,
        None => GalleryLayout::default(),
    };

    if args.dump_layout {
        println!("{}", layout.to_json_pretty()?);
        return Ok(());
    }

    let config = match &args.config {
        Some(path) => GalleryConfig::load_json(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => GalleryConfig::default(),
    };

    let mut session = GallerySession::new(layout, config)?;
    let mut input = InputState::new();
    let max_frames = args.frames.unwrap_or(u64::MAX);

    'tour: for step in TOUR {
        info!(step = step.label, "tour step");
        begin(&mut input, step.gesture);

        let mut last = None;
        for frame_in_step in 0..step.frames {
            if session.frame() >= max_frames {
                info!(frames = session.frame(), "frame limit reached");
                break 'tour;
            }

            during(&mut input, step);
            let report = session.update(&input.snapshot(), args.dt);

            if let Some(stars) = report.rated {
                info!(stars, "rated exhibit");
            }
            if report.restarted {
                info!("visit restarted");
            }
            if args.report_every > 0 && report.frame % args.report_every == 0 {
                log_report(&session, &report, step.label);
            }
            if report.quit_requested {
                info!("visitor left the gallery");
                break 'tour;
            }

            if frame_in_step == 0 {
                if let Gesture::Tap(key) = step.gesture {
                    input.keyboard.handle_key(key, false);
                }
            }
            last = Some(report);
        }

        end(&mut input, step.gesture);
        if let Some(report) = last {
            log_report(&session, &report, step.label);
        }
    }

    for exhibit in session.catalog().iter() {
        info!(
            exhibit = %exhibit.name,
            rating = ?exhibit.rating(),
            "final rating"
        );
    }
    info!(
        frames = session.frame(),
        rated = session.catalog().rated_count(),
        "walkthrough finished"
    );

    Ok(())
}
