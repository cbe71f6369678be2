//! Gesture recognizer demo binary.
//!
//! Composition root that assembles a [`GestureSession`] from environment
//! configuration, records a circle template from a synthetic stroke, then
//! replays a handful of strokes and prints every outcome as one JSON line.
//!
//! ```bash
//! RUST_LOG=debug cargo run -p gesture-client
//! GESTURE_MAX_MATCH_DISTANCE=0.1 cargo run -p gesture-client
//! ```
mod shapes;

use std::sync::Arc;

use anyhow::Result;
use gesture_core::{Point, ShapeTemplate, Stroke};
use runtime::{
    CastContext, Event, GestureSession, InventoryOracleImpl, OracleManager, PointerInput,
    RuntimeConfig, TaggedRegion, TargetOracleImpl, Topic,
};
use serde_json::json;
use tokio::sync::broadcast::error::RecvError;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = RuntimeConfig::from_env();
    let template_name = if config.recognizer.is_recording_mode {
        config.recognizer.new_template_name.clone()
    } else {
        "Circle".to_owned()
    };
    tracing::info!(
        resample_count = config.recognizer.resample_count,
        max_match_distance = config.recognizer.max_match_distance,
        "starting gesture demo"
    );

    let inventory = Arc::new(InventoryOracleImpl::with_items(["FireWand"]));
    let targets = Arc::new(TargetOracleImpl::with_regions(vec![TaggedRegion::new(
        "Enemy",
        Point::new(600.0, 100.0),
        Point::new(800.0, 300.0),
    )]));

    let mut session = GestureSession::builder()
        .config(config)
        .oracles(OracleManager::new(inventory.clone(), targets))
        .cast(
            template_name.clone(),
            Arc::new(|cast: &CastContext<'_>| {
                tracing::info!(template = cast.template, score = cast.score, "cast");
            }),
        )
        .build()?;

    let listener = spawn_listener(&session);

    add_gated_templates(&mut session)?;
    session.arm_recording(template_name)?;
    play(&mut session, "record", &shapes::circle(Point::new(200.0, 200.0), 80.0, 48))?;

    play(
        &mut session,
        "small wobbly circle",
        &shapes::wobbly_circle(Point::new(420.0, 360.0), 35.0, 40),
    )?;
    play(
        &mut session,
        "line",
        &shapes::line(Point::new(50.0, 500.0), Point::new(400.0, 520.0), 30),
    )?;
    play(&mut session, "triangle", &triangle(Point::new(300.0, 300.0), 120.0))?;

    inventory.remove_item("FireWand");
    play(
        &mut session,
        "triangle without wand",
        &triangle(Point::new(300.0, 300.0), 120.0),
    )?;

    play(&mut session, "bolt off target", &bolt(Point::new(100.0, 100.0), 60.0))?;
    play(&mut session, "bolt over enemy", &bolt(Point::new(680.0, 160.0), 60.0))?;
    play(
        &mut session,
        "tap",
        &[Point::new(10.0, 10.0), Point::new(12.0, 11.0), Point::new(13.0, 12.0)],
    )?;

    let processed = session.processed_strokes();
    drop(session);
    let published = listener.await?;
    tracing::info!(processed, published, "demo finished");
    Ok(())
}

/// Counts recognition events until the session's bus closes.
fn spawn_listener(session: &GestureSession) -> tokio::task::JoinHandle<usize> {
    let mut events = session.subscribe(Topic::Recognition);
    tokio::spawn(async move {
        let mut published = 0;
        loop {
            match events.recv().await {
                Ok(Event::Recognition(event)) => {
                    published += 1;
                    tracing::debug!(
                        stroke = event.stroke,
                        reason = %event.reason(),
                        "recognition event"
                    );
                }
                Ok(_) => {}
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "event listener lagged");
                }
                Err(RecvError::Closed) => break published,
            }
        }
    })
}

fn add_gated_templates(session: &mut GestureSession) -> Result<()> {
    let normalizer = *session.recognizer().normalizer();

    let fireball = normalizer.normalize(&Stroke::from_points(triangle(Point::ORIGIN, 1.0)))?;
    session.add_template(
        ShapeTemplate::new("Fireball", fireball)?.with_required_item("FireWand"),
    )?;

    let smite = normalizer.normalize(&Stroke::from_points(bolt(Point::ORIGIN, 1.0)))?;
    session.add_template(
        ShapeTemplate::new("Smite", smite)?.with_required_target_tag("Enemy"),
    )?;
    Ok(())
}

fn triangle(center: Point, size: f32) -> Vec<Point> {
    let corners = [
        center + Point::new(0.0, -size),
        center + Point::new(size, size),
        center + Point::new(-size, size),
        center + Point::new(0.0, -size),
    ];
    shapes::polyline(&corners, 12)
}

fn bolt(start: Point, size: f32) -> Vec<Point> {
    let corners = [
        start,
        start + Point::new(size, size * 0.5),
        start + Point::new(0.0, size),
        start + Point::new(size, size * 1.5),
    ];
    shapes::polyline(&corners, 10)
}

fn play(session: &mut GestureSession, label: &str, points: &[Point]) -> Result<()> {
    let Some((first, rest)) = points.split_first() else {
        return Ok(());
    };
    session.handle_input(PointerInput::Down(*first));
    for point in rest {
        session.handle_input(PointerInput::Move(*point));
    }
    let outcome = session.handle_input(PointerInput::Up);

    let line = json!({
        "stroke": label,
        "outcome": outcome,
    });
    println!("{}", serde_json::to_string(&line)?);
    Ok(())
}
