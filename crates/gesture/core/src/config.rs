use crate::error::{ErrorSeverity, GestureError};

/// Recognizer tuning parameters and the recording-mode switch.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RecognizerConfig {
    /// Points per normalized stroke. Templates and candidates must agree.
    pub resample_count: usize,
    /// A pointer move is kept only if it lands strictly farther than this
    /// from the last kept point (screen units).
    pub min_point_distance: f32,
    /// A best match is accepted only if its score is strictly below this.
    pub max_match_distance: f32,
    /// When set, the next valid stroke becomes a template instead of being
    /// matched. Cleared after one recording.
    pub is_recording_mode: bool,
    /// Name given to the next recorded template.
    pub new_template_name: String,
}

impl RecognizerConfig {
    // ===== fixed pipeline limits =====
    /// Strokes with fewer raw points are discarded as accidental clicks.
    pub const MIN_STROKE_POINTS: usize = 5;
    /// Approximate number of raw points probed by the target gate.
    pub const TARGET_SAMPLE_COUNT: usize = 20;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_RESAMPLE_COUNT: usize = 64;
    pub const DEFAULT_MIN_POINT_DISTANCE: f32 = 5.0;
    pub const DEFAULT_MAX_MATCH_DISTANCE: f32 = 0.3;
    pub const DEFAULT_TEMPLATE_NAME: &'static str = "New Shape";

    pub fn new() -> Self {
        Self {
            resample_count: Self::DEFAULT_RESAMPLE_COUNT,
            min_point_distance: Self::DEFAULT_MIN_POINT_DISTANCE,
            max_match_distance: Self::DEFAULT_MAX_MATCH_DISTANCE,
            is_recording_mode: false,
            new_template_name: Self::DEFAULT_TEMPLATE_NAME.to_owned(),
        }
    }

    #[must_use]
    pub fn with_resample_count(mut self, resample_count: usize) -> Self {
        self.resample_count = resample_count;
        self
    }

    #[must_use]
    pub fn with_min_point_distance(mut self, min_point_distance: f32) -> Self {
        self.min_point_distance = min_point_distance;
        self
    }

    #[must_use]
    pub fn with_max_match_distance(mut self, max_match_distance: f32) -> Self {
        self.max_match_distance = max_match_distance;
        self
    }

    /// Arms recording mode for the next stroke under `name`.
    #[must_use]
    pub fn recording(mut self, name: impl Into<String>) -> Self {
        self.is_recording_mode = true;
        self.new_template_name = name.into();
        self
    }

    /// Checks the invariants the pipeline relies on.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.resample_count < 2 {
            return Err(ConfigError::ResampleCountTooSmall(self.resample_count));
        }
        if !(self.min_point_distance >= 0.0) || !self.min_point_distance.is_finite() {
            return Err(ConfigError::InvalidMinPointDistance(self.min_point_distance));
        }
        if !(self.max_match_distance > 0.0) {
            return Err(ConfigError::InvalidMaxMatchDistance(self.max_match_distance));
        }
        if self.is_recording_mode && self.new_template_name.is_empty() {
            return Err(ConfigError::EmptyTemplateName);
        }
        Ok(())
    }
}

impl Default for RecognizerConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Invalid recognizer configuration.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConfigError {
    #[error("resample count must be at least 2, got {0}")]
    ResampleCountTooSmall(usize),

    #[error("min point distance must be a finite non-negative number, got {0}")]
    InvalidMinPointDistance(f32),

    #[error("max match distance must be positive, got {0}")]
    InvalidMaxMatchDistance(f32),

    #[error("recording mode requires a non-empty template name")]
    EmptyTemplateName,
}

impl GestureError for ConfigError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::ResampleCountTooSmall(_) => "CONFIG_RESAMPLE_COUNT_TOO_SMALL",
            Self::InvalidMinPointDistance(_) => "CONFIG_INVALID_MIN_POINT_DISTANCE",
            Self::InvalidMaxMatchDistance(_) => "CONFIG_INVALID_MAX_MATCH_DISTANCE",
            Self::EmptyTemplateName => "CONFIG_EMPTY_TEMPLATE_NAME",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = RecognizerConfig::default();
        assert_eq!(config.resample_count, 64);
        assert_eq!(config.min_point_distance, 5.0);
        assert_eq!(config.max_match_distance, 0.3);
        assert!(!config.is_recording_mode);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_bad_values() {
        assert_eq!(
            RecognizerConfig::new().with_resample_count(1).validate(),
            Err(ConfigError::ResampleCountTooSmall(1))
        );
        assert!(matches!(
            RecognizerConfig::new()
                .with_min_point_distance(f32::NAN)
                .validate(),
            Err(ConfigError::InvalidMinPointDistance(_))
        ));
        assert_eq!(
            RecognizerConfig::new().with_max_match_distance(0.0).validate(),
            Err(ConfigError::InvalidMaxMatchDistance(0.0))
        );
        assert_eq!(
            RecognizerConfig::new().recording("").validate(),
            Err(ConfigError::EmptyTemplateName)
        );
    }
}
