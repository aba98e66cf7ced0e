//! Han script classification and Han-run segmentation.
//!
//! Offsets are counted in characters (Unicode scalar values), not bytes.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::{AnnotatedSegment, Annotation, Span};

/// Single character of Script=Han, including the extension planes.
static HAN_CHAR: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"^\p{Han}$").expect("static Han pattern is valid"));

/// Returns true if `c` belongs to the Han (ideographic) script.
pub fn is_han(c: char) -> bool {
  let mut buf = [0u8; 4];
  HAN_CHAR.is_match(c.encode_utf8(&mut buf))
}

/// Returns true if any character of `text` belongs to the Han script.
pub fn contains_han(text: &str) -> bool {
  text.chars().any(is_han)
}

/// Maximal run of characters that are all Han or all non-Han.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HanRun {
  /// Character offsets of the run, relative to the start of the text
  pub span: Span,
  /// Whether the run consists of Han characters
  pub is_han: bool,
}

/// Splits `text` into alternating maximal Han / non-Han runs.
///
/// Empty text yields no runs.
pub fn han_runs(text: &str) -> Vec<HanRun> {
  let mut runs: Vec<HanRun> = Vec::new();

  for (i, c) in text.chars().enumerate() {
    let han = is_han(c);
    match runs.last_mut() {
      Some(run) if run.is_han == han => run.span.end = i + 1,
      _ => runs.push(HanRun {
        span: Span::new(i, i + 1),
        is_han: han,
      }),
    }
  }

  runs
}

/// Segments `text` on Han characters, shifting every span by `offset`.
///
/// - every Han character becomes its own segment carrying one marker annotation
/// - every maximal non-Han run becomes one segment with `annotations = None`
///
/// The result partitions `[offset, offset + len(text))`.
///
/// # Examples
/// ```
/// use yomikata::models::{AnnotatedSegment, Annotation, Span};
/// use yomikata::script::segment_on_han;
///
/// let segments = segment_on_han("漢字です", 0);
/// assert_eq!(segments[0], AnnotatedSegment::annotated(Span::new(0, 1), vec![Annotation::marker(Span::new(0, 1))]));
/// assert_eq!(segments[2], AnnotatedSegment::plain(Span::new(2, 4)));
/// ```
pub fn segment_on_han(text: &str, offset: usize) -> Vec<AnnotatedSegment> {
  let mut segments = Vec::new();

  for run in han_runs(text) {
    let span = run.span.shifted(offset);
    if run.is_han {
      segments.extend((span.start..span.end).map(|i| {
        let char_span = Span::new(i, i + 1);
        AnnotatedSegment::annotated(char_span, vec![Annotation::marker(char_span)])
      }));
    } else {
      segments.push(AnnotatedSegment::plain(span));
    }
  }

  segments
}
