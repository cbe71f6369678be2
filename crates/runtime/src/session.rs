//! Gesture session: the recognizer wired to oracles, events and handlers.
//!
//! A session is driven by pointer input from the host's input layer. Every
//! processed stroke is published on the [`EventBus`]; accepted strokes also
//! run the handlers bound to the matched template in the [`CastRegistry`].
use std::sync::Arc;

use tokio::sync::broadcast;

use gesture_core::{
    Point, RecognitionResult, Recognizer, ShapeTemplate, StrokeOutcome, TemplateStore,
};

use crate::config::RuntimeConfig;
use crate::error::{Result, RuntimeError};
use crate::events::{Event, EventBus, RecognitionEvent, RecordingEvent, Topic};
use crate::handlers::{CastContext, CastHandler, CastRegistry};
use crate::oracle::OracleManager;

/// One pointer event from the input layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerInput {
    Down(Point),
    Move(Point),
    Up,
}

pub struct GestureSession {
    recognizer: Recognizer,
    oracles: OracleManager,
    bus: EventBus,
    casts: CastRegistry,
    strokes: u64,
}

impl GestureSession {
    /// Create a new session builder
    pub fn builder() -> SessionBuilder {
        SessionBuilder::new()
    }

    /// Feeds one pointer event; returns the outcome when a stroke finishes.
    pub fn handle_input(&mut self, input: PointerInput) -> Option<StrokeOutcome> {
        match input {
            PointerInput::Down(point) => {
                self.pointer_down(point);
                None
            }
            PointerInput::Move(point) => {
                self.pointer_move(point);
                None
            }
            PointerInput::Up => self.pointer_up(),
        }
    }

    pub fn pointer_down(&mut self, point: Point) {
        self.recognizer.pointer_down(point);
    }

    pub fn pointer_move(&mut self, point: Point) -> bool {
        self.recognizer.pointer_move(point)
    }

    /// Finishes the stroke, publishes the outcome and runs cast handlers.
    pub fn pointer_up(&mut self) -> Option<StrokeOutcome> {
        let raw = self.recognizer.current_stroke()?.clone();
        let env = self.oracles.as_gesture_env();
        let outcome = self.recognizer.pointer_up(&env)?;

        self.strokes += 1;
        match &outcome {
            StrokeOutcome::Recognized(result) => {
                self.dispatch(result, raw.points());
                self.bus.publish(Event::Recognition(RecognitionEvent {
                    stroke: self.strokes,
                    raw_points: raw.len(),
                    result: result.clone(),
                }));
            }
            StrokeOutcome::Recorded(template) => {
                self.bus.publish(Event::Recording(RecordingEvent {
                    stroke: self.strokes,
                    template: template.clone(),
                }));
            }
        }
        Some(outcome)
    }

    fn dispatch(&self, result: &RecognitionResult, stroke: &[Point]) {
        if let Some(cast) = CastContext::from_result(result, stroke) {
            let handlers = self.casts.dispatch(&cast);
            tracing::debug!(template = cast.template, handlers, "dispatched cast");
        }
    }

    /// Adds an externally built template.
    ///
    /// # Errors
    ///
    /// Returns [`RuntimeError::TemplateSizeMismatch`] if the template was
    /// normalized with a different resample count.
    pub fn add_template(&mut self, template: ShapeTemplate) -> Result<usize> {
        ensure_template_size(&template, self.recognizer.config().resample_count)?;
        Ok(self.recognizer.templates_mut().push(template))
    }

    /// Removes the first template called `name`.
    pub fn remove_template(&mut self, name: &str) -> Result<ShapeTemplate> {
        Ok(self.recognizer.templates_mut().remove(name)?)
    }

    /// Records the next valid stroke as a template called `name`.
    pub fn arm_recording(&mut self, name: impl Into<String>) -> Result<()> {
        Ok(self.recognizer.arm_recording(name)?)
    }

    pub fn bind_cast(&mut self, template: impl Into<String>, handler: Arc<dyn CastHandler>) {
        self.casts.bind(template, handler);
    }

    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.bus.subscribe(topic)
    }

    pub fn bus(&self) -> &EventBus {
        &self.bus
    }

    pub fn oracles(&self) -> &OracleManager {
        &self.oracles
    }

    pub fn recognizer(&self) -> &Recognizer {
        &self.recognizer
    }

    pub fn templates(&self) -> &TemplateStore {
        self.recognizer.templates()
    }

    /// Strokes that produced an outcome so far.
    pub fn processed_strokes(&self) -> u64 {
        self.strokes
    }
}

fn ensure_template_size(template: &ShapeTemplate, expected: usize) -> Result<()> {
    let actual = template.points.len();
    if actual != 0 && actual != expected {
        return Err(RuntimeError::TemplateSizeMismatch {
            name: template.name.clone(),
            expected,
            actual,
        });
    }
    Ok(())
}

/// Builder for [`GestureSession`] with flexible configuration.
pub struct SessionBuilder {
    config: RuntimeConfig,
    oracles: OracleManager,
    templates: TemplateStore,
    casts: CastRegistry,
    bus: Option<EventBus>,
}

impl SessionBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            oracles: OracleManager::default(),
            templates: TemplateStore::new(),
            casts: CastRegistry::new(),
            bus: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the oracles gates are evaluated against
    pub fn oracles(mut self, oracles: OracleManager) -> Self {
        self.oracles = oracles;
        self
    }

    /// Provide an initial template library
    pub fn templates(mut self, templates: TemplateStore) -> Self {
        self.templates = templates;
        self
    }

    /// Bind a handler to run when `template` is accepted
    pub fn cast(mut self, template: impl Into<String>, handler: Arc<dyn CastHandler>) -> Self {
        self.casts.bind(template, handler);
        self
    }

    /// Share an existing event bus instead of creating one
    pub fn event_bus(mut self, bus: EventBus) -> Self {
        self.bus = Some(bus);
        self
    }

    /// Build the session
    ///
    /// # Errors
    ///
    /// Fails on invalid recognizer settings, a zero event buffer, or a
    /// template normalized with a different resample count.
    pub fn build(self) -> Result<GestureSession> {
        if self.config.event_buffer_size == 0 {
            return Err(RuntimeError::EventBufferTooSmall);
        }
        let resample_count = self.config.recognizer.resample_count;
        for template in &self.templates {
            ensure_template_size(template, resample_count)?;
        }

        let recognizer = Recognizer::with_templates(self.config.recognizer, self.templates)?;
        let bus = self
            .bus
            .unwrap_or_else(|| EventBus::with_capacity(self.config.event_buffer_size));

        tracing::debug!(
            templates = recognizer.templates().len(),
            oracles = ?self.oracles,
            recording = recognizer.is_recording(),
            "gesture session built"
        );

        Ok(GestureSession {
            recognizer,
            oracles: self.oracles,
            bus,
            casts: self.casts,
            strokes: 0,
        })
    }
}
