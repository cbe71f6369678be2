//! Session configuration and environment loaders.
use std::env;

use gesture_core::RecognizerConfig;

/// Configuration required to assemble a [`crate::GestureSession`].
#[derive(Clone, Debug, PartialEq)]
pub struct RuntimeConfig {
    pub recognizer: RecognizerConfig,
    /// Capacity of each event bus topic channel.
    pub event_buffer_size: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            recognizer: RecognizerConfig::default(),
            event_buffer_size: 100,
        }
    }
}

impl RuntimeConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `GESTURE_RESAMPLE_COUNT` - Points per normalized stroke (default: 64)
    /// - `GESTURE_MIN_POINT_DISTANCE` - Pointer-move sampling threshold (default: 5)
    /// - `GESTURE_MAX_MATCH_DISTANCE` - Acceptance threshold (default: 0.3)
    /// - `GESTURE_RECORDING` - Record the first stroke as a template (default: false).
    ///   Accepts `1/true/yes/on` and `0/false/no/off`; an empty value means true.
    /// - `GESTURE_TEMPLATE_NAME` - Name for the recorded template (default: "New Shape")
    /// - `GESTURE_EVENT_CAPACITY` - Event bus capacity per topic (default: 100)
    ///
    /// Unparseable values fall back to the defaults; validation happens when
    /// the session is built.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        let recognizer = &mut config.recognizer;

        if let Some(count) = read_env::<usize>("GESTURE_RESAMPLE_COUNT") {
            recognizer.resample_count = count;
        }
        if let Some(distance) = read_env::<f32>("GESTURE_MIN_POINT_DISTANCE") {
            recognizer.min_point_distance = distance;
        }
        if let Some(distance) = read_env::<f32>("GESTURE_MAX_MATCH_DISTANCE") {
            recognizer.max_match_distance = distance;
        }

        if let Ok(value) = env::var("GESTURE_RECORDING") {
            match parse_flag(&value) {
                Some(enable) => recognizer.is_recording_mode = enable,
                None => tracing::warn!(%value, "ignoring unrecognized GESTURE_RECORDING value"),
            }
        }
        if let Ok(name) = env::var("GESTURE_TEMPLATE_NAME") {
            recognizer.new_template_name = name;
        }

        if let Some(capacity) = read_env::<usize>("GESTURE_EVENT_CAPACITY") {
            config.event_buffer_size = capacity.max(1);
        }

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

/// Parses a boolean switch; an empty value counts as set.
fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "" | "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
