//! Per-stroke recognition controller.
//!
//! [`Recognizer`] drives the `Idle -> Drawing -> Idle` cycle:
//!
//! - `pointer_down` opens a stroke with its first point
//! - `pointer_move` appends points that moved far enough (anti-jitter)
//! - `pointer_up` closes the stroke, then records it as a template or matches
//!   it against the library and applies item/target gates
//!
//! All work for a stroke finishes inside `pointer_up`; nothing is deferred.
mod result;
mod state;

pub use result::{
    MatchedTemplate, RecognitionReason, RecognitionResult, RecordedTemplate, StrokeOutcome,
};
pub use state::{DrawState, Phase};

use crate::config::{ConfigError, RecognizerConfig};
use crate::env::{Env, InventoryOracle, TargetOracle};
use crate::error::GestureError;
use crate::geometry::Point;
use crate::matcher;
use crate::normalize::Normalizer;
use crate::stroke::{NormalizedStroke, Stroke};
use crate::template::{ShapeTemplate, TemplateStore};

/// Stroke accumulator, template library owner and matcher front-end.
#[derive(Clone, Debug)]
pub struct Recognizer {
    config: RecognizerConfig,
    normalizer: Normalizer,
    templates: TemplateStore,
    state: DrawState,
}

impl Recognizer {
    /// # Errors
    ///
    /// Returns the first constraint `config` violates.
    pub fn new(config: RecognizerConfig) -> Result<Self, ConfigError> {
        Self::with_templates(config, TemplateStore::new())
    }

    /// # Errors
    ///
    /// Returns the first constraint `config` violates.
    pub fn with_templates(
        config: RecognizerConfig,
        templates: TemplateStore,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            normalizer: Normalizer::new(config.resample_count),
            config,
            templates,
            state: DrawState::Idle,
        })
    }

    pub fn config(&self) -> &RecognizerConfig {
        &self.config
    }

    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    pub fn templates(&self) -> &TemplateStore {
        &self.templates
    }

    /// Mutable library access for loading or removing templates between strokes.
    pub fn templates_mut(&mut self) -> &mut TemplateStore {
        &mut self.templates
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// Points accumulated so far, while drawing.
    pub fn current_stroke(&self) -> Option<&Stroke> {
        match &self.state {
            DrawState::Drawing(stroke) => Some(stroke),
            DrawState::Idle => None,
        }
    }

    pub fn is_recording(&self) -> bool {
        self.config.is_recording_mode
    }

    /// Records the next valid stroke as a template called `name`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyTemplateName`] if `name` is empty.
    pub fn arm_recording(&mut self, name: impl Into<String>) -> Result<(), ConfigError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ConfigError::EmptyTemplateName);
        }
        self.config.new_template_name = name;
        self.config.is_recording_mode = true;
        Ok(())
    }

    /// Starts a new stroke. A stroke still open is dropped.
    ///
    /// A non-finite `point` opens an empty stroke; the first finite move
    /// becomes its first point.
    pub fn pointer_down(&mut self, point: Point) {
        if let DrawState::Drawing(previous) = &self.state {
            tracing::debug!(points = previous.len(), "restarting unfinished stroke");
        }
        let mut stroke = Stroke::new();
        if point.is_finite() {
            stroke.push(point);
        } else {
            tracing::debug!(?point, "ignoring non-finite pointer sample");
        }
        self.state = DrawState::Drawing(stroke);
    }

    /// Appends `point` if it lies farther than `min_point_distance` from the
    /// last kept point. Returns whether it was kept.
    pub fn pointer_move(&mut self, point: Point) -> bool {
        let DrawState::Drawing(stroke) = &mut self.state else {
            return false;
        };
        if !point.is_finite() {
            tracing::debug!(?point, "ignoring non-finite pointer sample");
            return false;
        }
        let far_enough = stroke
            .last()
            .is_none_or(|last| last.distance(point) > self.config.min_point_distance);
        if far_enough {
            stroke.push(point);
        }
        far_enough
    }

    /// Closes the current stroke and processes it.
    ///
    /// Returns `None` when no stroke was open or the stroke was discarded.
    pub fn pointer_up<I, T>(&mut self, env: &Env<'_, I, T>) -> Option<StrokeOutcome>
    where
        I: InventoryOracle + ?Sized,
        T: TargetOracle + ?Sized,
    {
        let stroke = self.state.finish()?;
        self.process_stroke(&stroke, env)
    }

    /// Records or recognizes a finished stroke.
    ///
    /// Strokes below [`RecognizerConfig::MIN_STROKE_POINTS`] and strokes the
    /// normalizer rejects are discarded without a result.
    pub fn process_stroke<I, T>(
        &mut self,
        stroke: &Stroke,
        env: &Env<'_, I, T>,
    ) -> Option<StrokeOutcome>
    where
        I: InventoryOracle + ?Sized,
        T: TargetOracle + ?Sized,
    {
        if stroke.len() < RecognizerConfig::MIN_STROKE_POINTS {
            tracing::debug!(points = stroke.len(), "stroke too short, ignoring");
            return None;
        }

        let normalized = match self.normalizer.normalize(stroke) {
            Ok(normalized) => normalized,
            Err(err) => {
                tracing::warn!(
                    code = err.error_code(),
                    severity = %err.severity(),
                    "discarding stroke: {err}"
                );
                return None;
            }
        };

        if self.config.is_recording_mode {
            return Some(StrokeOutcome::Recorded(self.record(normalized)));
        }
        Some(StrokeOutcome::Recognized(
            self.recognize(&normalized, stroke, env),
        ))
    }

    /// Matches a normalized stroke and applies the best template's gates.
    ///
    /// Gates only ever look at the best template; a failed gate rejects the
    /// stroke instead of falling back to the runner-up.
    pub fn recognize<I, T>(
        &self,
        normalized: &NormalizedStroke,
        raw: &Stroke,
        env: &Env<'_, I, T>,
    ) -> RecognitionResult
    where
        I: InventoryOracle + ?Sized,
        T: TargetOracle + ?Sized,
    {
        let Some(best) = matcher::best_match(normalized, &self.templates) else {
            tracing::debug!(templates = self.templates.len(), "no scorable templates");
            return RecognitionResult::unmatched();
        };
        let template = best.template;
        let matched = MatchedTemplate {
            index: best.index,
            name: template.name.clone(),
        };

        if !(best.score < self.config.max_match_distance) {
            tracing::debug!(
                nearest = %template.name,
                score = best.score,
                threshold = self.config.max_match_distance,
                "shape not recognized"
            );
            return RecognitionResult::rejected(
                Some(matched),
                best.score,
                RecognitionReason::NoTemplateWithinThreshold,
            );
        }

        if let Some(item) = &template.required_item_name
            && !holds_item(env, item)
        {
            tracing::info!(
                shape = %template.name,
                item = %item,
                "shape recognized but required item is missing"
            );
            return RecognitionResult::rejected(
                Some(matched),
                best.score,
                RecognitionReason::MissingRequiredItem,
            );
        }

        if let Some(tag) = &template.required_target_tag
            && !stroke_hits_tag(env, raw, tag)
        {
            tracing::info!(
                shape = %template.name,
                tag = %tag,
                "shape recognized but not drawn over target"
            );
            return RecognitionResult::rejected(
                Some(matched),
                best.score,
                RecognitionReason::TargetTagNotHit,
            );
        }

        tracing::info!(shape = %template.name, score = best.score, "shape accepted");
        RecognitionResult::accepted(matched, best.score)
    }

    fn record(&mut self, points: NormalizedStroke) -> RecordedTemplate {
        let name = self.config.new_template_name.clone();
        let index = self.templates.push(ShapeTemplate {
            name: name.clone(),
            points,
            required_target_tag: None,
            required_item_name: None,
        });
        self.config.is_recording_mode = false;
        tracing::info!(template = %name, index, "recorded template");
        RecordedTemplate { index, name }
    }
}

/// Item gate. A missing inventory oracle fails the gate.
fn holds_item<I, T>(env: &Env<'_, I, T>, item: &str) -> bool
where
    I: InventoryOracle + ?Sized,
    T: TargetOracle + ?Sized,
{
    match env.inventory() {
        Ok(inventory) => inventory.has_item(item),
        Err(err) => {
            tracing::warn!(code = err.error_code(), item, "cannot evaluate item gate: {err}");
            false
        }
    }
}

/// Target gate over the raw stroke. A missing target oracle fails the gate.
fn stroke_hits_tag<I, T>(env: &Env<'_, I, T>, raw: &Stroke, tag: &str) -> bool
where
    I: InventoryOracle + ?Sized,
    T: TargetOracle + ?Sized,
{
    match env.targets() {
        Ok(targets) => raw
            .strided_samples(RecognizerConfig::TARGET_SAMPLE_COUNT)
            .any(|point| targets.hits_tag(point, tag)),
        Err(err) => {
            tracing::warn!(code = err.error_code(), tag, "cannot evaluate target gate: {err}");
            false
        }
    }
}
