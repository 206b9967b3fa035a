//! Headless demo: replays a scripted gesture sequence against two annotations
//! and logs the resulting frames.
//!
//! Usage: `textmark-demo [settings.json]`. Set `RUST_LOG=textmark=trace` to
//! see every state transition.

use anyhow::{Context, Result};
use textmark::{
    BoxId, CanvasController, Feedback, FeedbackLog, Point, PointerEvent, Rect, Settings,
    default_settings_path,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let settings = load_settings()?;
    let log = FeedbackLog::new();
    let mut canvas = CanvasController::new(settings);
    canvas.add_observer(log.clone());
    canvas.set_canvas_bounds(Some(Rect::new(0.0, 0.0, 640.0, 480.0)));

    let first = canvas.add_annotation(Rect::new(100.0, 150.0, 0.0, 0.0), "S");
    let second = canvas.add_annotation(Rect::new(50.0, 20.0, 0.0, 0.0), "2");
    canvas.deactivate();
    report(&canvas, "initial");

    // Move the first box by (+20, +5)
    replay(
        &mut canvas,
        &[
            PointerEvent::Down(Point::new(110.0, 152.0)),
            PointerEvent::Drag(Point::new(110.0, 152.0)),
            PointerEvent::Drag(Point::new(130.0, 157.0)),
            PointerEvent::Up(Point::new(130.0, 157.0)),
        ],
    );
    report(&canvas, "after move");

    // Widen it from the left handle, then scale it from the corner
    let Some(frame) = canvas.get(first).map(|b| b.frame()) else {
        anyhow::bail!("annotation {first} disappeared");
    };
    let handle_size = canvas.settings().handle_size;
    let left = Point::new(frame.min_x() + 1.0, frame.min_y() + frame.size.height / 2.0);
    let corner = Point::new(frame.max_x() - 1.0, frame.max_y() - 1.0);
    replay(
        &mut canvas,
        &[
            PointerEvent::Move(left),
            PointerEvent::Down(left),
            PointerEvent::Drag(left),
            PointerEvent::Drag(left - Point::new(10.0, 0.0)),
            PointerEvent::Up(left - Point::new(10.0, 0.0)),
            PointerEvent::Down(corner),
            PointerEvent::Drag(corner),
            PointerEvent::Drag(corner + Point::new(handle_size * 4.0, handle_size)),
            PointerEvent::Up(corner + Point::new(handle_size * 4.0, handle_size)),
        ],
    );
    report(&canvas, "after resize and scale");

    // Select the other box, then click empty canvas
    select(&mut canvas, second);
    replay(&mut canvas, &[PointerEvent::Down(Point::new(600.0, 400.0))]);
    report(&canvas, "after clearing selection");

    let events = log.drain();
    let moves = events
        .iter()
        .filter(|e| matches!(e, Feedback::Moved(_)))
        .count();
    let edits = events
        .iter()
        .filter(|e| matches!(e, Feedback::Edited(_)))
        .count();
    info!(total = events.len(), moves, edits, "Feedback summary");
    Ok(())
}

fn load_settings() -> Result<Settings> {
    if let Some(path) = std::env::args().nth(1) {
        return Settings::load(&path).with_context(|| format!("Failed to load settings from {path}"));
    }
    match default_settings_path() {
        Some(path) if path.exists() => Settings::load(&path)
            .with_context(|| format!("Failed to load settings from {}", path.display())),
        _ => Ok(Settings::default()),
    }
}

fn replay(canvas: &mut CanvasController, events: &[PointerEvent]) {
    for event in events {
        canvas.handle(*event);
    }
}

fn select(canvas: &mut CanvasController, id: BoxId) {
    if canvas.activate(id) {
        info!(box_id = %id, "Selected annotation");
    }
}

fn report(canvas: &CanvasController, stage: &str) {
    for annotation in canvas.boxes() {
        info!(
            stage,
            box_id = %annotation.id(),
            text = annotation.text(),
            state = ?annotation.state(),
            frame = ?annotation.frame(),
            font_size = annotation.font_size(),
            end_of_canvas = annotation.end_of_canvas_reached(),
            "Annotation"
        );
    }
}
