//! Best-template search over a normalized candidate.
//!
//! The matcher only ranks templates; whether the best score is good enough is
//! decided by the recognizer's acceptance threshold.
use crate::geometry;
use crate::stroke::NormalizedStroke;
use crate::template::ShapeTemplate;

/// Lowest-scoring template for a candidate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BestMatch<'a> {
    /// Position of the template in the iteration order it was scored in.
    pub index: usize,
    pub template: &'a ShapeTemplate,
    pub score: f32,
}

/// Mean pointwise distance between `candidate` and `template`.
///
/// Returns `None` for unrecorded templates, for point counts that differ
/// from the candidate's (templates normalized with another resample count)
/// and for templates holding non-finite coordinates.
pub fn score(candidate: &NormalizedStroke, template: &ShapeTemplate) -> Option<f32> {
    if template.is_empty() {
        return None;
    }
    geometry::mean_pointwise_distance(candidate.points(), template.points.points())
        .filter(|score| score.is_finite())
}

/// Scores every template and keeps the strictly smallest score.
///
/// Ties keep the earliest template. Returns `None` when nothing was scorable.
pub fn best_match<'a, I>(candidate: &NormalizedStroke, templates: I) -> Option<BestMatch<'a>>
where
    I: IntoIterator<Item = &'a ShapeTemplate>,
{
    let mut best: Option<BestMatch<'a>> = None;
    for (index, template) in templates.into_iter().enumerate() {
        let Some(score) = score(candidate, template) else {
            if !template.is_empty() {
                tracing::debug!(
                    template = %template.name,
                    expected = candidate.len(),
                    actual = template.points.len(),
                    "skipping unscorable template"
                );
            }
            continue;
        };
        if best.is_none_or(|b| score < b.score) {
            best = Some(BestMatch {
                index,
                template,
                score,
            });
        }
    }
    best
}
