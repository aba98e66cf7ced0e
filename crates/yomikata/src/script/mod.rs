//! script module
pub mod han;
pub mod kana;

/// Re-export
pub use han::{HanRun, contains_han, han_runs, is_han, segment_on_han};
pub use kana::katakana_to_hiragana;
