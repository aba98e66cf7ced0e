//! pronunciation module
pub mod loader;
pub mod pronunciation_dictionary;

/// Re-export
pub use pronunciation_dictionary::{
  PronunciationDatum, PronunciationDictionary, PronunciationEntry,
};
