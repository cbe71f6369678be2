//! Event types for different topics.

use gesture_core::{RecognitionReason, RecognitionResult, RecordedTemplate};
use serde::{Deserialize, Serialize};

/// A finished stroke was matched against the template library.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecognitionEvent {
    /// Sequence number of the stroke within the session.
    pub stroke: u64,
    /// Raw points the stroke contained.
    pub raw_points: usize,
    pub result: RecognitionResult,
}

impl RecognitionEvent {
    pub fn reason(&self) -> RecognitionReason {
        self.result.reason
    }
}

/// A finished stroke was stored as a new template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordingEvent {
    pub stroke: u64,
    pub template: RecordedTemplate,
}
