//! Furigana annotator for Japanese.
//!
//! For each lexeme containing Han characters:
//! 1. look up the surface, then the base form, in the pronunciation dictionary
//! 2. pick the candidate whose reading is most similar to the lexeme's reading
//! 3. project the candidate's per-character readings onto absolute offsets
//!
//! Lexemes that cannot be matched, or whose selected entry carries a reading outside the
//! surface, fall back to [`segment_on_han`] on their own. Neighbouring lexemes keep their
//! readings and the output always partitions the text.

use std::sync::Arc;

use tracing::debug;

use super::AnnotationProvider;
use super::similarity::similarity;
use crate::config::Language;
use crate::errors::AnnotatorError;
use crate::models::{AnnotateRequest, AnnotatedSegment, Annotation, Lexeme, Span};
use crate::pronunciation::{PronunciationDictionary, PronunciationEntry};
use crate::script::{contains_han, segment_on_han};

/// Resolves readings of Japanese lexemes from a [`PronunciationDictionary`].
#[derive(Debug, Clone)]
pub struct FuriganaAnnotator {
  dictionary: Arc<PronunciationDictionary>,
}

impl FuriganaAnnotator {
  /// Creates the annotator over a shared dictionary
  pub fn new(dictionary: Arc<PronunciationDictionary>) -> Self {
    Self { dictionary }
  }

  /// Candidates for the surface, else for the base form.
  fn lookup(&self, lexeme: &Lexeme) -> Option<&[PronunciationEntry]> {
    self.dictionary.get(&lexeme.surface).or_else(|| {
      lexeme.base_form.as_deref().and_then(|base_form| self.dictionary.get(base_form))
    })
  }

  /// Annotations of one lexeme starting at `segment_start`, or `None` to fall back.
  fn resolve(
    &self,
    lexeme: &Lexeme,
    segment_start: usize,
    surface_len: usize,
  ) -> Option<Vec<Annotation>> {
    let Some(candidates) = self.lookup(lexeme) else {
      debug!(surface = %lexeme.surface, "No dictionary entry, falling back to Han runs");
      return None;
    };

    let reading = lexeme
      .pronunciation
      .as_ref()
      .map(|p| p.value.as_str())
      .filter(|value| !value.is_empty());

    let selected = match reading {
      Some(reading) => match best_candidate(reading, candidates) {
        Some(entry) => entry,
        None => {
          debug!(
            surface = %lexeme.surface,
            reading,
            "No candidate reading is similar enough, falling back to Han runs"
          );
          return None;
        }
      },
      None => &candidates[0],
    };

    let mut annotations = Vec::with_capacity(selected.per_char.len());
    for datum in selected.per_char.iter().filter(|datum| !datum.reading.is_empty()) {
      if datum.span.is_empty() || datum.span.end > surface_len {
        debug!(
          surface = %lexeme.surface,
          headword = %selected.headword,
          start = datum.span.start,
          end = datum.span.end,
          surface_len,
          "Dictionary reading lies outside the surface, falling back to Han runs"
        );
        return None;
      }
      annotations.push(Annotation::reading(
        datum.span.shifted(segment_start),
        datum.reading.clone(),
      ));
    }

    Some(annotations)
  }
}

/// Candidate whose reading is most similar to `reading`.
///
/// Ties go to the earliest candidate. Returns `None` when even the best candidate scores
/// below `1 / len(reading)`.
fn best_candidate<'a>(
  reading: &str,
  candidates: &'a [PronunciationEntry],
) -> Option<&'a PronunciationEntry> {
  let cutoff = 1.0 / reading.chars().count() as f64;

  let mut best: Option<(&PronunciationEntry, f64)> = None;
  for candidate in candidates {
    let score = similarity(reading, &candidate.reading);
    if best.is_none_or(|(_, best_score)| score > best_score) {
      best = Some((candidate, score));
    }
  }

  best.filter(|(_, score)| *score >= cutoff).map(|(entry, _)| entry)
}

impl AnnotationProvider for FuriganaAnnotator {
  fn can_annotate(&self, request: &AnnotateRequest) -> bool {
    request.language == Language::Japanese
  }

  fn annotate(&self, lexemes: &[Lexeme]) -> Result<Vec<AnnotatedSegment>, AnnotatorError> {
    let mut segments = Vec::with_capacity(lexemes.len());
    let mut segment_start = 0;

    for lexeme in lexemes {
      let surface_len = lexeme.char_len();
      if surface_len == 0 {
        continue;
      }
      let span = Span::new(segment_start, segment_start + surface_len);

      if !contains_han(&lexeme.surface) {
        segments.push(AnnotatedSegment::plain(span));
      } else {
        match self.resolve(lexeme, segment_start, surface_len) {
          Some(annotations) => segments.push(AnnotatedSegment::annotated(span, annotations)),
          None => segments.extend(segment_on_han(&lexeme.surface, segment_start)),
        }
      }

      segment_start = span.end;
    }

    Ok(segments)
  }

  fn name(&self) -> &'static str {
    "FuriganaAnnotator"
  }
}
