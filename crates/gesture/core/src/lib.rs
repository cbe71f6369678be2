//! Single-stroke gesture recognition.
//!
//! `gesture-core` turns a freehand pointer stroke into a normalized shape and
//! matches it against a library of named templates, in the spirit of the $1
//! Unistroke Recognizer (without rotation invariance). Templates may be gated
//! on inventory possession or on the stroke passing over a tagged target;
//! those checks go through the oracle traits in [`env`].
//!
//! All stroke processing flows through [`Recognizer`]; the pure stages it is
//! built from ([`normalize`], [`matcher`]) are public for offline tools.
pub mod config;
pub mod env;
pub mod error;
pub mod geometry;
pub mod matcher;
pub mod normalize;
pub mod recognizer;
pub mod stroke;
pub mod template;

pub use config::{ConfigError, RecognizerConfig};
pub use env::{Env, GestureEnv, InventoryOracle, OracleError, TargetOracle};
pub use error::{ErrorSeverity, GestureError};
pub use geometry::{BoundingBox, Point};
pub use matcher::{BestMatch, best_match};
pub use normalize::{NormalizeError, Normalizer};
pub use recognizer::{
    DrawState, MatchedTemplate, Phase, RecognitionReason, RecognitionResult, Recognizer,
    RecordedTemplate, StrokeOutcome,
};
pub use stroke::{NormalizedStroke, Stroke};
pub use template::{ShapeTemplate, TemplateError, TemplateStore};
