//! Game actions bound to template names.
//!
//! When a stroke is accepted, the session looks up the handler bound to the
//! matched template's name and invokes it. Rejections never reach handlers;
//! they only appear on the event bus.

mod registry;

pub use registry::CastRegistry;

use gesture_core::{Point, RecognitionResult};

/// Data passed to a handler for an accepted stroke.
#[derive(Debug, Clone, Copy)]
pub struct CastContext<'a> {
    pub template: &'a str,
    pub score: f32,
    /// Raw stroke in screen space, e.g. to aim the effect.
    pub stroke: &'a [Point],
}

impl<'a> CastContext<'a> {
    /// Returns `None` unless `result` was accepted.
    pub fn from_result(result: &'a RecognitionResult, stroke: &'a [Point]) -> Option<Self> {
        Some(Self {
            template: result.accepted_name()?,
            score: result.score,
            stroke,
        })
    }
}

/// Reacts to an accepted shape, e.g. by casting the bound spell.
pub trait CastHandler: Send + Sync {
    fn on_cast(&self, cast: &CastContext<'_>);
}

impl<F> CastHandler for F
where
    F: Fn(&CastContext<'_>) + Send + Sync,
{
    fn on_cast(&self, cast: &CastContext<'_>) {
        self(cast)
    }
}
