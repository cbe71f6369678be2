//! Shape templates and the ordered library they live in.
use crate::error::{ErrorSeverity, GestureError};
use crate::stroke::NormalizedStroke;

/// Errors raised when editing the template library.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TemplateError {
    #[error("template name must not be empty")]
    EmptyName,

    #[error("template '{0}' not found")]
    NotFound(String),
}

impl GestureError for TemplateError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyName => "TEMPLATE_EMPTY_NAME",
            Self::NotFound(_) => "TEMPLATE_NOT_FOUND",
        }
    }
}

/// A named reference shape with optional casting gates.
///
/// # Gates
///
/// - `required_item_name`: the performer must hold this item
/// - `required_target_tag`: the raw stroke must pass over an object with this tag
///
/// `None` means "no gate". Template libraries that encode absence as an empty
/// string should go through [`ShapeTemplate::from_sentinel_gates`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShapeTemplate {
    pub name: String,
    pub points: NormalizedStroke,
    pub required_target_tag: Option<String>,
    pub required_item_name: Option<String>,
}

impl ShapeTemplate {
    /// Creates an ungated template.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::EmptyName`] if `name` is empty.
    pub fn new(name: impl Into<String>, points: NormalizedStroke) -> Result<Self, TemplateError> {
        let name = name.into();
        if name.is_empty() {
            return Err(TemplateError::EmptyName);
        }
        Ok(Self {
            name,
            points,
            required_target_tag: None,
            required_item_name: None,
        })
    }

    /// Builds a template whose gates use the empty string to mean "absent".
    pub fn from_sentinel_gates(
        name: impl Into<String>,
        points: NormalizedStroke,
        required_target_tag: &str,
        required_item_name: &str,
    ) -> Result<Self, TemplateError> {
        let template = Self::new(name, points)?;
        Ok(Self {
            required_target_tag: non_empty(required_target_tag),
            required_item_name: non_empty(required_item_name),
            ..template
        })
    }

    #[must_use]
    pub fn with_required_item(mut self, item: impl Into<String>) -> Self {
        self.required_item_name = Some(item.into());
        self
    }

    #[must_use]
    pub fn with_required_target_tag(mut self, tag: impl Into<String>) -> Self {
        self.required_target_tag = Some(tag.into());
        self
    }

    /// True until a stroke has been recorded into this template.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn is_gated(&self) -> bool {
        self.required_item_name.is_some() || self.required_target_tag.is_some()
    }
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_owned())
}

/// Ordered template library.
///
/// Insertion order only decides ties between equal scores. Names are not
/// required to be unique; lookups by name return the first match.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct TemplateStore {
    templates: Vec<ShapeTemplate>,
}

impl TemplateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a template and returns its index.
    pub fn push(&mut self, template: ShapeTemplate) -> usize {
        self.templates.push(template);
        self.templates.len() - 1
    }

    pub fn find(&self, name: &str) -> Option<&ShapeTemplate> {
        self.templates.iter().find(|t| t.name == name)
    }

    /// Removes the first template called `name`.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::NotFound`] if no template has that name.
    pub fn remove(&mut self, name: &str) -> Result<ShapeTemplate, TemplateError> {
        let index = self
            .templates
            .iter()
            .position(|t| t.name == name)
            .ok_or_else(|| TemplateError::NotFound(name.to_owned()))?;
        Ok(self.templates.remove(index))
    }

    pub fn iter(&self) -> impl Iterator<Item = &ShapeTemplate> {
        self.templates.iter()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl FromIterator<ShapeTemplate> for TemplateStore {
    fn from_iter<I: IntoIterator<Item = ShapeTemplate>>(iter: I) -> Self {
        Self {
            templates: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a TemplateStore {
    type Item = &'a ShapeTemplate;
    type IntoIter = core::slice::Iter<'a, ShapeTemplate>;

    fn into_iter(self) -> Self::IntoIter {
        self.templates.iter()
    }
}
