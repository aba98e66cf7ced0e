//! segmenter module
//!
//! Segmentation strategies consulted by [`SegmentationService`](crate::service::SegmentationService).

pub mod default_segmenter;
pub mod vibrato_segmenter;

use crate::models::{AnnotateRequest, Lexeme};

/// 再エクスポート
pub use default_segmenter::DefaultSegmenter;
pub use vibrato_segmenter::{FeatureLayout, VibratoSegmenter};

/// Strategy that splits raw text into lexemes.
///
/// The surfaces of a non-empty result must concatenate to the input text exactly.
/// An empty result means the provider was not productive for this text.
pub trait SegmentationProvider: Send + Sync {
  /// Whether this strategy applies to `request`
  fn can_segment(&self, request: &AnnotateRequest) -> bool;

  /// Splits `text` into lexemes, or returns an empty vector on failure
  fn segment(&self, text: &str) -> Vec<Lexeme>;

  /// Name used in logs
  fn name(&self) -> &'static str;
}
