//! JmdictFurigana loader.
//!
//! Two file shapes are accepted, detected from the first JSON token:
//!
//! | Top level | Shape                                                                              |
//! |-----------|------------------------------------------------------------------------------------|
//! | `{`       | prepared map `{ headword: [{ pronunciation, per_char: [{ indices, pronunciation }] }] }` |
//! | `[`       | raw release `[{ text, reading, furigana: [{ ruby, rt? }] }]`                       |
//!
//! The raw release is converted on load the same way the prepared file is generated:
//! only furigana parts with a reading produce a datum, and entries without any datum are dropped.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;
use tracing::{debug, info};

use super::pronunciation_dictionary::{
  PronunciationDatum, PronunciationDictionary, PronunciationEntry,
};
use crate::errors::PronunciationError;

/// Entry of the prepared map format
#[derive(Debug, Deserialize)]
struct PreparedEntry {
  pronunciation: String,
  #[serde(default)]
  per_char: Vec<PreparedDatum>,
}

#[derive(Debug, Deserialize)]
struct PreparedDatum {
  indices: (usize, usize),
  #[serde(default)]
  pronunciation: String,
}

/// Entry of the raw JmdictFurigana release
#[derive(Debug, Deserialize)]
struct RawEntry {
  text: String,
  reading: String,
  #[serde(default)]
  furigana: Vec<RawFurigana>,
}

#[derive(Debug, Deserialize)]
struct RawFurigana {
  ruby: String,
  #[serde(default)]
  rt: Option<String>,
}

impl PronunciationDictionary {
  /// Loads a dictionary file in either supported format.
  ///
  /// # Errors
  /// - the file cannot be read
  /// - the content is not valid JSON of a supported shape
  pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, PronunciationError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| PronunciationError::Io {
      path: path.to_path_buf(),
      source: Arc::new(e),
    })?;

    let dictionary = Self::from_json_str(&content)?;
    info!(
      path = %path.display(),
      headwords = dictionary.len(),
      "Pronunciation dictionary loaded"
    );
    Ok(dictionary)
  }

  /// Parses dictionary JSON in either supported format. A leading UTF-8 BOM is ignored.
  ///
  /// # Errors
  /// Returns `PronunciationError` if the JSON is malformed or of an unknown shape.
  pub fn from_json_str(content: &str) -> Result<Self, PronunciationError> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);

    match content.trim_start().chars().next() {
      Some('{') => {
        let prepared: HashMap<String, Vec<PreparedEntry>> = serde_json::from_str(content)?;
        Ok(Self::from_prepared(prepared))
      }
      Some('[') => {
        let raw: Vec<RawEntry> = serde_json::from_str(content)?;
        Ok(Self::from_raw(raw))
      }
      Some(_) => Err(PronunciationError::UnrecognizedFormat { found: "scalar" }),
      None => Err(PronunciationError::UnrecognizedFormat { found: "empty" }),
    }
  }

  fn from_prepared(prepared: HashMap<String, Vec<PreparedEntry>>) -> Self {
    prepared
      .into_iter()
      .flat_map(|(headword, entries)| {
        entries.into_iter().map(move |entry| {
          let per_char = entry
            .per_char
            .into_iter()
            .map(|datum| PronunciationDatum::new(datum.indices.0, datum.indices.1, datum.pronunciation))
            .collect();
          PronunciationEntry::new(headword.clone(), entry.pronunciation, per_char)
        })
      })
      .collect()
  }

  fn from_raw(raw: Vec<RawEntry>) -> Self {
    let mut dictionary = Self::new();
    let mut dropped = 0usize;

    for entry in raw {
      let per_char = locate_furigana(&entry.text, &entry.furigana);
      if per_char.is_empty() {
        dropped += 1;
        continue;
      }
      dictionary.insert(PronunciationEntry::new(entry.text, entry.reading, per_char));
    }

    debug!(dropped, "Raw entries without furigana were dropped");
    dictionary
  }
}

/// Places each furigana part with a reading inside `text`.
///
/// Each ruby is searched from the end of the previously placed ruby; parts whose ruby
/// cannot be found are skipped.
fn locate_furigana(text: &str, furigana: &[RawFurigana]) -> Vec<PronunciationDatum> {
  let text: Vec<char> = text.chars().collect();
  let mut per_char = Vec::new();
  let mut ruby_end = 0;

  for part in furigana {
    let Some(rt) = part.rt.as_deref().filter(|rt| !rt.is_empty()) else {
      continue;
    };

    let ruby: Vec<char> = part.ruby.chars().collect();
    let Some(ruby_start) = find_chars(&text, &ruby, ruby_end) else {
      continue;
    };

    ruby_end = ruby_start + ruby.len();
    per_char.push(PronunciationDatum::new(ruby_start, ruby_end, rt));
  }

  per_char
}

/// Character-offset `str::find` starting at `from`.
fn find_chars(haystack: &[char], needle: &[char], from: usize) -> Option<usize> {
  if needle.is_empty() || from > haystack.len() {
    return None;
  }
  haystack[from..].windows(needle.len()).position(|window| window == needle).map(|i| i + from)
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::io::Write;
  use tempfile::NamedTempFile;

  const PREPARED: &str = r#"{
    "人間": [
      { "pronunciation": "にんげん",
        "per_char": [
          { "indices": [0, 1], "pronunciation": "にん" },
          { "indices": [1, 2], "pronunciation": "げん" }
        ] }
    ],
    "呼ぶ": [
      { "pronunciation": "よぶ", "per_char": [ { "indices": [0, 1], "pronunciation": "よ" } ] }
    ]
  }"#;

  const RAW: &str = r#"[
    { "text": "呼ぶ", "reading": "よぶ", "furigana": [ { "ruby": "呼", "rt": "よ" }, { "ruby": "ぶ" } ] },
    { "text": "お菓子", "reading": "おかし", "furigana": [ { "ruby": "お" }, { "ruby": "菓", "rt": "か" }, { "ruby": "子", "rt": "し" } ] },
    { "text": "ひらがな", "reading": "ひらがな", "furigana": [ { "ruby": "ひらがな" } ] },
    { "text": "人", "reading": "ひと", "furigana": [ { "ruby": "人", "rt": "ひと" } ] },
    { "text": "人", "reading": "にん", "furigana": [ { "ruby": "人", "rt": "にん" } ] }
  ]"#;

  #[test]
  fn loads_prepared_format() {
    let dictionary = PronunciationDictionary::from_json_str(PREPARED).expect("should parse");

    assert_eq!(dictionary.len(), 2);
    let entry = &dictionary.get("人間").unwrap()[0];
    assert_eq!(entry.headword, "人間");
    assert_eq!(entry.reading, "にんげん");
    assert_eq!(
      entry.per_char,
      vec![PronunciationDatum::new(0, 1, "にん"), PronunciationDatum::new(1, 2, "げん")]
    );
  }

  #[test]
  fn loads_raw_release_format() {
    let dictionary = PronunciationDictionary::from_json_str(RAW).expect("should parse");

    // "ひらがな" has no rt and is dropped
    assert!(dictionary.get("ひらがな").is_none());
    assert_eq!(dictionary.len(), 3);

    let okashi = &dictionary.get("お菓子").unwrap()[0];
    assert_eq!(
      okashi.per_char,
      vec![PronunciationDatum::new(1, 2, "か"), PronunciationDatum::new(2, 3, "し")]
    );

    let hito: Vec<&str> =
      dictionary.get("人").unwrap().iter().map(|e| e.reading.as_str()).collect();
    assert_eq!(hito, vec!["ひと", "にん"]);
  }

  #[test]
  fn ignores_leading_bom() {
    let content = format!("\u{feff}{PREPARED}");
    let dictionary = PronunciationDictionary::from_json_str(&content).expect("should parse");
    assert_eq!(dictionary.len(), 2);
  }

  #[test]
  fn rejects_scalar_and_empty_documents() {
    assert!(matches!(
      PronunciationDictionary::from_json_str("42"),
      Err(PronunciationError::UnrecognizedFormat { found: "scalar" })
    ));
    assert!(matches!(
      PronunciationDictionary::from_json_str("   "),
      Err(PronunciationError::UnrecognizedFormat { found: "empty" })
    ));
  }

  #[test]
  fn rejects_malformed_json() {
    assert!(matches!(
      PronunciationDictionary::from_json_str("{ \"人\": [ { } ] }"),
      Err(PronunciationError::Json(_))
    ));
  }

  #[test]
  fn from_path_reads_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(PREPARED.as_bytes()).unwrap();

    let dictionary = PronunciationDictionary::from_path(file.path()).expect("should load");
    assert!(dictionary.get("呼ぶ").is_some());
  }

  #[test]
  fn from_path_missing_file() {
    let result = PronunciationDictionary::from_path("/nonexistent/JmdictFurigana.json");
    assert!(matches!(result, Err(PronunciationError::Io { .. })));
  }

  #[test]
  fn locate_furigana_searches_after_previous_ruby() {
    // a repeated ruby is located after the previous one
    let furigana = vec![
      RawFurigana { ruby: "人".to_string(), rt: Some("ひと".to_string()) },
      RawFurigana { ruby: "人".to_string(), rt: Some("びと".to_string()) },
    ];
    let per_char = locate_furigana("人人", &furigana);
    assert_eq!(
      per_char,
      vec![PronunciationDatum::new(0, 1, "ひと"), PronunciationDatum::new(1, 2, "びと")]
    );
  }

  #[test]
  fn locate_furigana_skips_missing_ruby() {
    let furigana = vec![RawFurigana { ruby: "犬".to_string(), rt: Some("いぬ".to_string()) }];
    assert!(locate_furigana("猫", &furigana).is_empty());
  }
}
