//! Data Model Definition
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::Language;

/// Half-open `[start, end)` range of character offsets into a text.
///
/// Serialized as a two-element array (`[start, end]`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(usize, usize)", into = "(usize, usize)")]
pub struct Span {
  /// Inclusive start offset
  pub start: usize,
  /// Exclusive end offset
  pub end: usize,
}

impl Span {
  /// Constructor for Span
  pub const fn new(start: usize, end: usize) -> Self {
    Self { start, end }
  }

  /// Number of characters covered by the span.
  pub fn len(&self) -> usize {
    self.end.saturating_sub(self.start)
  }

  /// Whether the span covers no characters.
  pub fn is_empty(&self) -> bool {
    self.end <= self.start
  }

  /// Returns the span moved right by `offset`.
  #[must_use]
  pub fn shifted(&self, offset: usize) -> Self {
    Self::new(self.start + offset, self.end + offset)
  }

  /// Whether `other` lies entirely inside this span.
  pub fn contains(&self, other: &Span) -> bool {
    self.start <= other.start && other.end <= self.end
  }
}

impl From<(usize, usize)> for Span {
  fn from((start, end): (usize, usize)) -> Self {
    Self::new(start, end)
  }
}

impl From<Span> for (usize, usize) {
  fn from(span: Span) -> Self {
    (span.start, span.end)
  }
}

/// Reading annotation over a sub-span of a segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
  /// Absolute character offsets in the request text
  #[serde(rename = "indices")]
  pub span: Span,

  /// Resolved reading.
  ///
  /// `None` marks a position that is annotatable but has no resolved reading.
  #[serde(
    rename = "annotation_text",
    default,
    skip_serializing_if = "Option::is_none"
  )]
  pub text: Option<String>,
}

impl Annotation {
  /// Annotation carrying a resolved reading
  pub fn reading(span: Span, text: impl Into<String>) -> Self {
    Self {
      span,
      text: Some(text.into()),
    }
  }

  /// Annotatable position without a reading
  pub fn marker(span: Span) -> Self {
    Self { span, text: None }
  }
}

/// Contiguous slice of the request text, optionally carrying annotations.
///
/// | `annotations`     | Meaning                                       |
/// |-------------------|-----------------------------------------------|
/// | `None`            | not annotatable (e.g. kana, latin)            |
/// | `Some(vec![])`    | annotatable, nothing resolved                 |
/// | `Some(non-empty)` | resolved sub-span annotations                 |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedSegment {
  /// Absolute character offsets in the request text
  #[serde(rename = "indices")]
  pub span: Span,

  /// Sub-span annotations, omitted from JSON when `None`
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub annotations: Option<Vec<Annotation>>,
}

impl AnnotatedSegment {
  /// Segment that cannot be annotated
  pub fn plain(span: Span) -> Self {
    Self {
      span,
      annotations: None,
    }
  }

  /// Segment carrying the given annotations (possibly empty)
  pub fn annotated(span: Span, annotations: Vec<Annotation>) -> Self {
    Self {
      span,
      annotations: Some(annotations),
    }
  }

  /// Whether this segment is annotatable at all
  pub fn is_annotatable(&self) -> bool {
    self.annotations.is_some()
  }
}

/// Phonetic system of a [`Pronunciation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhoneticSystem {
  /// Hiragana (katakana readings are folded to hiragana)
  Hiragana,
}

/// Normalized phonetic reading of a lexeme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pronunciation {
  /// Phonetic system of `value`
  pub system: PhoneticSystem,
  /// Reading text
  pub value: String,
}

impl Pronunciation {
  /// Hiragana reading
  pub fn hiragana(value: impl Into<String>) -> Self {
    Self {
      system: PhoneticSystem::Hiragana,
      value: value.into(),
    }
  }
}

/// Token produced by a segmentation provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lexeme {
  /// Surface form as it appears in the text
  pub surface: String,

  /// Dictionary form, set only when it differs from `surface`
  #[serde(default)]
  pub base_form: Option<String>,

  /// Known reading of the surface
  #[serde(default)]
  pub pronunciation: Option<Pronunciation>,
}

impl Lexeme {
  /// Lexeme with only a surface form
  pub fn new(surface: impl Into<String>) -> Self {
    Self {
      surface: surface.into(),
      base_form: None,
      pronunciation: None,
    }
  }

  /// Builder that sets the dictionary form
  #[must_use]
  pub fn with_base_form(mut self, base_form: impl Into<String>) -> Self {
    self.base_form = Some(base_form.into());
    self
  }

  /// Builder that sets a hiragana reading
  #[must_use]
  pub fn with_reading(mut self, reading: impl Into<String>) -> Self {
    self.pronunciation = Some(Pronunciation::hiragana(reading));
    self
  }

  /// Length of the surface in characters
  pub fn char_len(&self) -> usize {
    self.surface.chars().count()
  }
}

/// Annotation request received at the boundary.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotateRequest {
  /// Text to annotate
  pub base_text: String,
  /// Language of the text
  pub language: Language,
}

impl AnnotateRequest {
  /// Constructor for AnnotateRequest
  pub fn new(base_text: impl Into<String>, language: Language) -> Self {
    Self {
      base_text: base_text.into(),
      language,
    }
  }
}

// The text may be long or sensitive, so only the language is shown in logs and errors.
impl fmt::Display for AnnotateRequest {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "AnnotateRequest(language={})", self.language)
  }
}

impl fmt::Debug for AnnotateRequest {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("AnnotateRequest")
      .field("language", &self.language)
      .field("text_len", &self.base_text.chars().count())
      .finish()
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Test Module
// ─────────────────────────────────────────────────────────────────────────────
