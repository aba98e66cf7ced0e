//! Response Model Definition

use serde::Serialize;
use yomikata::AnnotatedSegment;

/// Furigana Annotation Response
///
/// Serialized as a bare JSON array of segments:
/// `[{"indices": [0, 1], "annotations": [{"indices": [0, 1], "annotation_text": "わたし"}]}, ...]`
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct AnnotateResponse {
  /// Segments partitioning the request text
  pub segments: Vec<AnnotatedSegment>,
}

impl From<Vec<AnnotatedSegment>> for AnnotateResponse {
  fn from(segments: Vec<AnnotatedSegment>) -> Self {
    Self { segments }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;
  use yomikata::{Annotation, Span};

  #[test]
  fn serializes_as_bare_array() {
    let response = AnnotateResponse::from(vec![
      AnnotatedSegment::annotated(
        Span::new(0, 2),
        vec![
          Annotation::reading(Span::new(0, 1), "せん"),
          Annotation::reading(Span::new(1, 2), "せい"),
        ],
      ),
      AnnotatedSegment::plain(Span::new(2, 3)),
    ]);

    assert_eq!(
      serde_json::to_value(&response).unwrap(),
      json!([
        { "indices": [0, 2], "annotations": [
          { "indices": [0, 1], "annotation_text": "せん" },
          { "indices": [1, 2], "annotation_text": "せい" }
        ] },
        { "indices": [2, 3] }
      ])
    );
  }

  #[test]
  fn marker_annotation_has_no_text() {
    let response = AnnotateResponse::from(vec![AnnotatedSegment::annotated(
      Span::new(0, 1),
      vec![Annotation::marker(Span::new(0, 1))],
    )]);

    assert_eq!(
      serde_json::to_value(&response).unwrap(),
      json!([{ "indices": [0, 1], "annotations": [{ "indices": [0, 1] }] }])
    );
  }

  #[test]
  fn empty_response() {
    assert_eq!(serde_json::to_string(&AnnotateResponse::default()).unwrap(), "[]");
  }
}
