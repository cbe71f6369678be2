//! Topic-based event bus for recognition outcomes.
//!
//! The session publishes one event per processed stroke; consumers subscribe
//! only to the topics they need (UI feedback, spell execution, telemetry).

mod bus;
mod types;

pub use bus::{Event, EventBus, Topic};
pub use types::{RecognitionEvent, RecordingEvent};
