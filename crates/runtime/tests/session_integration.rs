use std::f32::consts::TAU;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use gesture_core::{
    Normalizer, Point, RecognitionReason, RecognizerConfig, ShapeTemplate, Stroke,
    StrokeOutcome, TemplateStore,
};
use runtime::{
    CastContext, Event, GestureSession, InventoryOracleImpl, OracleManager, PointerInput,
    RuntimeConfig, RuntimeError, TaggedRegion, TargetOracleImpl, Topic,
};
use tokio::sync::broadcast::error::TryRecvError;

fn circle(center: Point, radius: f32, segments: usize) -> Vec<Point> {
    (0..=segments)
        .map(|i| {
            let angle = TAU * i as f32 / segments as f32;
            center + Point::new(angle.cos(), angle.sin()) * radius
        })
        .collect()
}

fn circle_template(name: &str, resample_count: usize) -> ShapeTemplate {
    let stroke: Stroke = circle(Point::ORIGIN, 1.0, 64).into_iter().collect();
    let points = Normalizer::new(resample_count).normalize(&stroke).unwrap();
    ShapeTemplate::new(name, points).unwrap()
}

fn draw(session: &mut GestureSession, points: &[Point]) -> Option<StrokeOutcome> {
    let mut outcome = None;
    let inputs = points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            if i == 0 {
                PointerInput::Down(*p)
            } else {
                PointerInput::Move(*p)
            }
        })
        .chain(std::iter::once(PointerInput::Up));
    for input in inputs {
        outcome = session.handle_input(input);
    }
    outcome
}

fn recognition_reason(event: Event) -> RecognitionReason {
    match event {
        Event::Recognition(event) => event.reason(),
        other => panic!("expected recognition event, got {other:?}"),
    }
}

#[test]
fn recorded_template_is_recognized_and_cast() {
    let casts = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&casts);
    let mut session = GestureSession::builder()
        .cast(
            "Circle",
            Arc::new(move |cast: &CastContext<'_>| {
                sink.lock().unwrap().push((cast.template.to_owned(), cast.stroke.len()));
            }),
        )
        .build()
        .unwrap();
    let mut recordings = session.subscribe(Topic::Recording);
    let mut recognitions = session.subscribe(Topic::Recognition);

    session.arm_recording("Circle").unwrap();
    let recorded = draw(&mut session, &circle(Point::new(200.0, 200.0), 100.0, 48));
    assert!(matches!(recorded, Some(StrokeOutcome::Recorded(ref t)) if t.name == "Circle"));
    assert!(!session.recognizer().is_recording());
    match recordings.try_recv().unwrap() {
        Event::Recording(event) => {
            assert_eq!(event.stroke, 1);
            assert_eq!(event.template.index, 0);
        }
        other => panic!("unexpected event {other:?}"),
    }
    assert!(casts.lock().unwrap().is_empty());

    let stroke = circle(Point::new(640.0, 360.0), 45.0, 32);
    let outcome = draw(&mut session, &stroke);
    let result = outcome.as_ref().and_then(StrokeOutcome::recognition).unwrap();
    assert_eq!(result.accepted_name(), Some("Circle"));
    assert_eq!(
        recognition_reason(recognitions.try_recv().unwrap()),
        RecognitionReason::Accepted
    );
    assert_eq!(
        casts.lock().unwrap().as_slice(),
        &[("Circle".to_owned(), stroke.len())]
    );
    assert_eq!(session.processed_strokes(), 2);
}

#[test]
fn item_gate_follows_shared_inventory() {
    let inventory = Arc::new(InventoryOracleImpl::new());
    let oracles = OracleManager::default().with_inventory(inventory.clone());
    let casts = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&casts);
    let mut session = GestureSession::builder()
        .oracles(oracles)
        .templates(TemplateStore::from_iter([
            circle_template("Fireball", 64).with_required_item("FireWand"),
        ]))
        .cast(
            "Fireball",
            Arc::new(move |_: &CastContext<'_>| {
                counter.fetch_add(1, Ordering::SeqCst);
            }),
        )
        .build()
        .unwrap();
    let stroke = circle(Point::new(300.0, 300.0), 60.0, 36);

    let result = draw(&mut session, &stroke).and_then(|o| o.recognition().cloned()).unwrap();
    assert_eq!(result.reason, RecognitionReason::MissingRequiredItem);
    assert_eq!(casts.load(Ordering::SeqCst), 0);

    inventory.add_item("FireWand");
    let result = draw(&mut session, &stroke).and_then(|o| o.recognition().cloned()).unwrap();
    assert_eq!(result.reason, RecognitionReason::Accepted);
    assert_eq!(casts.load(Ordering::SeqCst), 1);
}

#[test]
fn target_gate_uses_tagged_regions() {
    let targets = Arc::new(TargetOracleImpl::with_regions(vec![TaggedRegion::new(
        "Enemy",
        Point::new(450.0, 450.0),
        Point::new(550.0, 550.0),
    )]));
    let oracles = OracleManager::new(Arc::new(InventoryOracleImpl::new()), targets.clone());
    let mut session = GestureSession::builder()
        .oracles(oracles)
        .templates(TemplateStore::from_iter([
            circle_template("Smite", 64).with_required_target_tag("Enemy"),
        ]))
        .build()
        .unwrap();
    let over_enemy = circle(Point::new(500.0, 500.0), 40.0, 30);

    let result = draw(&mut session, &over_enemy).and_then(|o| o.recognition().cloned()).unwrap();
    assert_eq!(result.reason, RecognitionReason::Accepted);

    // The enemy moved off screen.
    targets.set_regions(Vec::new());
    let result = draw(&mut session, &over_enemy).and_then(|o| o.recognition().cloned()).unwrap();
    assert_eq!(result.reason, RecognitionReason::TargetTagNotHit);
}

#[test]
fn short_strokes_publish_nothing() {
    let mut session = GestureSession::builder()
        .templates(TemplateStore::from_iter([circle_template("Circle", 64)]))
        .build()
        .unwrap();
    let mut recognitions = session.subscribe(Topic::Recognition);

    let tap = [
        Point::new(10.0, 10.0),
        Point::new(30.0, 10.0),
        Point::new(30.0, 30.0),
        Point::new(10.0, 30.0),
    ];
    assert_eq!(draw(&mut session, &tap), None);
    assert!(matches!(recognitions.try_recv(), Err(TryRecvError::Empty)));
    assert_eq!(session.processed_strokes(), 0);
}

#[test]
fn builder_validates_configuration() {
    let bad_config = RuntimeConfig {
        recognizer: RecognizerConfig::default().with_resample_count(1),
        ..RuntimeConfig::default()
    };
    assert!(matches!(
        GestureSession::builder().config(bad_config).build(),
        Err(RuntimeError::Config(_))
    ));

    let no_buffer = RuntimeConfig {
        event_buffer_size: 0,
        ..RuntimeConfig::default()
    };
    assert!(matches!(
        GestureSession::builder().config(no_buffer).build(),
        Err(RuntimeError::EventBufferTooSmall)
    ));

    let result = GestureSession::builder()
        .templates(TemplateStore::from_iter([circle_template("Circle", 32)]))
        .build();
    assert!(matches!(
        result,
        Err(RuntimeError::TemplateSizeMismatch {
            expected: 64,
            actual: 32,
            ..
        })
    ));
}

#[test]
fn templates_can_be_added_and_removed() {
    let mut session = GestureSession::builder().build().unwrap();
    assert_eq!(session.add_template(circle_template("Circle", 64)).unwrap(), 0);
    assert!(session.add_template(circle_template("Tiny", 16)).is_err());
    assert!(session.arm_recording("").is_err());

    let removed = session.remove_template("Circle").unwrap();
    assert_eq!(removed.name, "Circle");
    assert!(session.templates().is_empty());
    assert!(matches!(
        session.remove_template("Circle"),
        Err(RuntimeError::Template(_))
    ));
}

#[tokio::test]
async fn rejected_strokes_are_published_as_json_friendly_events() {
    let mut session = GestureSession::builder()
        .templates(TemplateStore::from_iter([circle_template("Circle", 64)]))
        .build()
        .unwrap();
    let mut recognitions = session.subscribe(Topic::Recognition);

    let line: Vec<Point> = (0..=20)
        .map(|i| Point::new(100.0 + i as f32 * 10.0, 300.0))
        .collect();
    draw(&mut session, &line);

    let event = recognitions.recv().await.unwrap();
    let json = serde_json::to_value(&event).unwrap();
    assert_eq!(
        json["Recognition"]["result"]["reason"],
        "NoTemplateWithinThreshold"
    );
    assert_eq!(json["Recognition"]["raw_points"], 21);
    assert_eq!(json["Recognition"]["result"]["template"]["name"], "Circle");
}

#[test]
fn unmatched_events_survive_a_json_round_trip() {
    let mut session = GestureSession::builder().build().unwrap();
    let mut recognitions = session.subscribe(Topic::Recognition);

    let stroke: Vec<Point> = (0..10)
        .map(|i| Point::new(i as f32 * 12.0, (i % 3) as f32 * 8.0))
        .collect();
    let result = draw(&mut session, &stroke)
        .and_then(|o| o.recognition().cloned())
        .unwrap();
    assert_eq!(result.template, None);
    assert_eq!(result.reason, RecognitionReason::NoTemplateWithinThreshold);

    let published = match recognitions.try_recv().unwrap() {
        Event::Recognition(event) => event,
        other => panic!("unexpected event {other:?}"),
    };
    let json = serde_json::to_string(&Event::Recognition(published.clone())).unwrap();
    match serde_json::from_str::<Event>(&json).unwrap() {
        Event::Recognition(decoded) => {
            assert_eq!(decoded, published);
            assert!(decoded.result.score.is_finite());
        }
        other => panic!("unexpected event {other:?}"),
    }
}
