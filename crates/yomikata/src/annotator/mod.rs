//! annotator module
//!
//! Annotation strategies consulted by [`AnnotationService`](crate::service::AnnotationService)
//! through a [`PriorityRegistry`](crate::registry::PriorityRegistry).

pub mod default_annotator;
pub mod furigana_annotator;
pub mod similarity;

use crate::errors::AnnotatorError;
use crate::models::{AnnotateRequest, AnnotatedSegment, Lexeme};

/// 再エクスポート
pub use default_annotator::DefaultAnnotator;
pub use furigana_annotator::FuriganaAnnotator;
pub use similarity::similarity;

/// Strategy that turns a lexeme sequence into annotated segments.
///
/// The returned segments must partition the concatenated lexeme surfaces.
pub trait AnnotationProvider: Send + Sync {
  /// Whether this strategy applies to `request`
  fn can_annotate(&self, request: &AnnotateRequest) -> bool;

  /// Annotates `lexemes`, whose surfaces concatenate to the request text
  ///
  /// # Errors
  /// Returns `AnnotatorError` when the strategy cannot produce a valid result;
  /// the caller falls back to the next strategy.
  fn annotate(&self, lexemes: &[Lexeme]) -> Result<Vec<AnnotatedSegment>, AnnotatorError>;

  /// Name used in logs
  fn name(&self) -> &'static str;
}
