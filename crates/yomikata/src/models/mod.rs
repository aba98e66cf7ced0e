//! models module
pub mod model_definition;

/// Re-export data model types
pub use model_definition::{
  AnnotateRequest, AnnotatedSegment, Annotation, Lexeme, PhoneticSystem, Pronunciation, Span,
};
