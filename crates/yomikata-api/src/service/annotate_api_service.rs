//! Furigana Annotation Service

use yomikata::YomikataService;
use yomikata::config::{LoggingConfig, MorphologyConfig, PronunciationConfig, YomikataConfig};

use crate::config::{Config, MAX_TEXT_LENGTH};
use crate::errors::{ApiError, Result};
use crate::models::{AnnotateRequest, AnnotateResponse};

/// Common interface for the furigana annotation service
///
/// This trait allows swapping production implementation (`AnnotateApiServiceFull`) with
/// test stubs/mocks.
pub trait AnnotateApiService: Send + Sync {
  /// Annotates the request text
  ///
  /// # Errors
  /// - Input error (empty string, length exceeded, etc.)
  /// - No applicable segmenter / annotator
  /// - Internal error
  fn annotate(&self, request: AnnotateRequest) -> Result<AnnotateResponse>;
}

/// Builds the core library configuration from the API configuration
fn to_yomikata_config(config: &Config) -> YomikataConfig {
  YomikataConfig {
    morphology: MorphologyConfig {
      preset: config.preset.into(),
      cache_dir: None,
    },
    pronunciation: PronunciationConfig {
      path: config.furigana_dict.clone(),
    },
    logging: LoggingConfig {
      level: config.log_level,
    },
  }
}

/// Checks the text before it reaches the pipeline
fn validate_text(text: &str) -> Result<()> {
  let text_bytes = text.len();
  if text_bytes == 0 {
    return Err(ApiError::invalid_input("Text is empty"));
  }

  if text_bytes > MAX_TEXT_LENGTH {
    return Err(ApiError::text_too_long(text_bytes, MAX_TEXT_LENGTH));
  }

  Ok(())
}

/// Furigana Annotation Service
///
/// Segmentation: VibratoSegmenter(1) → DefaultSegmenter(0)
/// Annotation: FuriganaAnnotator(1) → DefaultAnnotator(0)
pub struct AnnotateApiServiceFull {
  inner: YomikataService,
}

impl AnnotateApiServiceFull {
  /// Initializes the service
  ///
  /// # Arguments
  /// * `config` - Configuration (dictionary preset and furigana dictionary path)
  ///
  /// # Errors
  /// Returns an error if either dictionary cannot be loaded
  pub fn new(config: &Config) -> Result<Self> {
    let inner = YomikataService::from_config(&to_yomikata_config(config))?;
    Ok(Self { inner })
  }

  /// Annotates the request text
  ///
  /// # Errors
  /// - If text is empty
  /// - If text exceeds maximum length
  /// - If no segmenter or annotator could handle the request
  pub fn annotate(&self, request: AnnotateRequest) -> Result<AnnotateResponse> {
    validate_text(&request.base_text)?;

    let segments = self.inner.annotate(&request)?;
    Ok(AnnotateResponse::from(segments))
  }
}

/// Production implementation of trait `AnnotateApiService`
impl AnnotateApiService for AnnotateApiServiceFull {
  fn annotate(&self, request: AnnotateRequest) -> Result<AnnotateResponse> {
    // Writing `self.annotate(...)` would recursively call the trait method
    AnnotateApiServiceFull::annotate(self, request)
  }
}
