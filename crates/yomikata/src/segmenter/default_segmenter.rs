//! Language-independent fallback segmenter.

use crate::models::{AnnotateRequest, Lexeme};
use crate::script::han_runs;

use super::SegmentationProvider;

/// Splits text into maximal Han and non-Han runs.
///
/// Produces lexemes without base form or reading, so downstream annotators can only
/// mark Han characters. Applies to every request.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultSegmenter;

impl DefaultSegmenter {
  /// Creates the segmenter
  pub fn new() -> Self {
    Self
  }
}

impl SegmentationProvider for DefaultSegmenter {
  fn can_segment(&self, _request: &AnnotateRequest) -> bool {
    true
  }

  fn segment(&self, text: &str) -> Vec<Lexeme> {
    let chars: Vec<char> = text.chars().collect();
    han_runs(text)
      .into_iter()
      .map(|run| Lexeme::new(chars[run.span.start..run.span.end].iter().collect::<String>()))
      .collect()
  }

  fn name(&self) -> &'static str {
    "DefaultSegmenter"
  }
}
