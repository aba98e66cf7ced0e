//! Universal fallback annotator.
//!
//! A lexeme containing Han characters gets one reading-less marker annotation per Han
//! character, never an empty list. Consumers can rely on `Some(markers)` to locate the
//! characters that still need a reading.

use crate::errors::AnnotatorError;
use crate::models::{AnnotateRequest, AnnotatedSegment, Annotation, Lexeme, Span};
use crate::script::is_han;

use super::AnnotationProvider;

/// Marks every Han character as annotatable without resolving readings.
///
/// Applies to every request, so it is normally registered with the lowest priority.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultAnnotator;

impl DefaultAnnotator {
  /// Creates the annotator
  pub fn new() -> Self {
    Self
  }
}

impl AnnotationProvider for DefaultAnnotator {
  fn can_annotate(&self, _request: &AnnotateRequest) -> bool {
    true
  }

  fn annotate(&self, lexemes: &[Lexeme]) -> Result<Vec<AnnotatedSegment>, AnnotatorError> {
    let mut segments = Vec::with_capacity(lexemes.len());
    let mut segment_start = 0;

    for lexeme in lexemes {
      let mut len = 0;
      let mut markers = Vec::new();
      for (i, c) in lexeme.surface.chars().enumerate() {
        if is_han(c) {
          let at = segment_start + i;
          markers.push(Annotation::marker(Span::new(at, at + 1)));
        }
        len = i + 1;
      }

      if len == 0 {
        continue;
      }

      let span = Span::new(segment_start, segment_start + len);
      segments.push(if markers.is_empty() {
        AnnotatedSegment::plain(span)
      } else {
        AnnotatedSegment::annotated(span, markers)
      });
      segment_start = span.end;
    }

    Ok(segments)
  }

  fn name(&self) -> &'static str {
    "DefaultAnnotator"
  }
}
