//! Values the recognizer hands to its event sink.

/// Why a stroke was accepted or rejected.
///
/// Rejections are ordinary outcomes, not errors: players misdraw often.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum RecognitionReason {
    /// Shape matched within threshold and every gate passed.
    Accepted,
    /// Library empty, nothing scorable, or best score at/above threshold.
    NoTemplateWithinThreshold,
    /// Best match requires an item the performer does not hold.
    MissingRequiredItem,
    /// Best match requires a target the stroke did not pass over.
    TargetTagNotHit,
}

/// Identity of the best-scoring template.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchedTemplate {
    /// Index in the template store at recognition time.
    pub index: usize,
    pub name: String,
}

/// Outcome of matching one finished stroke.
///
/// `template` carries the best-scoring template whenever one was scored, so
/// sinks can explain gate failures; act on it only when `accepted` is true.
/// `score` is `f32::MAX` when no template could be scored.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RecognitionResult {
    pub template: Option<MatchedTemplate>,
    pub score: f32,
    pub accepted: bool,
    pub reason: RecognitionReason,
}

impl RecognitionResult {
    pub fn accepted(template: MatchedTemplate, score: f32) -> Self {
        Self {
            template: Some(template),
            score,
            accepted: true,
            reason: RecognitionReason::Accepted,
        }
    }

    pub fn rejected(
        template: Option<MatchedTemplate>,
        score: f32,
        reason: RecognitionReason,
    ) -> Self {
        debug_assert_ne!(reason, RecognitionReason::Accepted);
        Self {
            template,
            score,
            accepted: false,
            reason,
        }
    }

    pub fn unmatched() -> Self {
        Self::rejected(
            None,
            f32::MAX,
            RecognitionReason::NoTemplateWithinThreshold,
        )
    }

    /// Name of the accepted template, if any.
    pub fn accepted_name(&self) -> Option<&str> {
        if self.accepted {
            self.template.as_ref().map(|t| t.name.as_str())
        } else {
            None
        }
    }
}

/// Template appended by a recording stroke.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RecordedTemplate {
    pub index: usize,
    pub name: String,
}

/// What a finished stroke produced.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StrokeOutcome {
    Recognized(RecognitionResult),
    Recorded(RecordedTemplate),
}

impl StrokeOutcome {
    pub fn recognition(&self) -> Option<&RecognitionResult> {
        match self {
            Self::Recognized(result) => Some(result),
            Self::Recorded(_) => None,
        }
    }
}
