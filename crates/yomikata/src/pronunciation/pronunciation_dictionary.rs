//! Pronunciation dictionary types.

use std::collections::HashMap;

use crate::models::Span;

/// Reading of one sub-span of a dictionary headword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PronunciationDatum {
  /// Character offsets relative to the start of the headword
  pub span: Span,
  /// Reading of the characters in `span`; may be empty
  pub reading: String,
}

impl PronunciationDatum {
  /// Constructor for PronunciationDatum
  pub fn new(start: usize, end: usize, reading: impl Into<String>) -> Self {
    Self {
      span: Span::new(start, end),
      reading: reading.into(),
    }
  }
}

/// One candidate reading of a headword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PronunciationEntry {
  /// Dictionary key
  pub headword: String,
  /// Reading of the whole headword (hiragana)
  pub reading: String,
  /// Per-character readings, ordered by position
  pub per_char: Vec<PronunciationDatum>,
}

impl PronunciationEntry {
  /// Constructor for PronunciationEntry
  pub fn new(
    headword: impl Into<String>,
    reading: impl Into<String>,
    per_char: Vec<PronunciationDatum>,
  ) -> Self {
    Self {
      headword: headword.into(),
      reading: reading.into(),
      per_char,
    }
  }
}

/// Headword → candidate entries, in dictionary order.
///
/// Loaded once at startup and shared read-only (typically behind an `Arc`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PronunciationDictionary {
  entries: HashMap<String, Vec<PronunciationEntry>>,
}

impl PronunciationDictionary {
  /// Creates an empty dictionary
  pub fn new() -> Self {
    Self::default()
  }

  /// Appends `entry` to the candidates of its headword.
  pub fn insert(&mut self, entry: PronunciationEntry) {
    self.entries.entry(entry.headword.clone()).or_default().push(entry);
  }

  /// Candidates for `headword`, or `None` when the headword is unknown.
  ///
  /// Headwords whose candidate list is empty are reported as unknown.
  pub fn get(&self, headword: &str) -> Option<&[PronunciationEntry]> {
    self.entries.get(headword).map(Vec::as_slice).filter(|entries| !entries.is_empty())
  }

  /// Number of headwords
  pub fn len(&self) -> usize {
    self.entries.len()
  }

  /// Whether the dictionary has no headwords
  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }
}

impl FromIterator<PronunciationEntry> for PronunciationDictionary {
  fn from_iter<I: IntoIterator<Item = PronunciationEntry>>(iter: I) -> Self {
    let mut dictionary = Self::new();
    for entry in iter {
      dictionary.insert(entry);
    }
    dictionary
  }
}
