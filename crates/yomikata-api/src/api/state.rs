//! API State Definition

use std::sync::Arc;

use crate::config::Config;
use crate::service::AnnotateApiService;

/// Application State
///
/// State shared across the entire server.
/// Contains configuration and service.
#[derive(Clone)]
pub struct AppState {
  /// Configuration
  pub config: Config,
  /// Furigana Annotation Service
  ///
  /// - Production: `Arc::new(AnnotateApiServiceFull::new(&config)?)`
  /// - Test: `Arc::new(StubAnnotateApiService)`
  pub service: Arc<dyn AnnotateApiService>,
}

impl AppState {
  /// Creates a new AppState
  #[must_use]
  pub fn new(config: Config, service: Arc<dyn AnnotateApiService>) -> Self {
    Self { config, service }
  }
}
