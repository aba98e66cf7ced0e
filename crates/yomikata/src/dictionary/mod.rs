//! dictionary module
pub mod morphology_dictionary;

/// Re-export
pub use morphology_dictionary::MorphologyDictionaryManager;
