//! crates/yomikata/tests/integration_test.rs
//!
//! End-to-end integration test.
//! Verifies the entire flow: Load pronunciation dictionary -> Segment -> Annotate ->
//! Serialize to the wire format.

use std::sync::Arc;

use serde_json::json;
use vibrato_rkyv::dictionary::PresetDictionaryKind;

use yomikata::annotator::{AnnotationProvider, DefaultAnnotator, FuriganaAnnotator};
use yomikata::config::Language;
use yomikata::dictionary::MorphologyDictionaryManager;
use yomikata::pronunciation::PronunciationDictionary;
use yomikata::registry::PriorityRegistry;
use yomikata::segmenter::{DefaultSegmenter, FeatureLayout, SegmentationProvider, VibratoSegmenter};
use yomikata::service::{AnnotationService, SegmentationService};
use yomikata::{AnnotateRequest, AnnotatedSegment, Annotation, Lexeme, Span, YomikataService};

const SENTENCE: &str = "私はその人を常に先生と呼んでいた";

/// Prepared-format dictionary covering the sample sentence.
const DICTIONARY_JSON: &str = r#"{
  "私":   [ { "pronunciation": "わたし", "per_char": [ { "indices": [0, 1], "pronunciation": "わたし" } ] } ],
  "人間": [ { "pronunciation": "にんげん", "per_char": [
              { "indices": [0, 1], "pronunciation": "にん" },
              { "indices": [1, 2], "pronunciation": "げん" } ] } ],
  "人":   [ { "pronunciation": "ひと", "per_char": [ { "indices": [0, 1], "pronunciation": "ひと" } ] } ],
  "常":   [ { "pronunciation": "つね", "per_char": [ { "indices": [0, 1], "pronunciation": "つね" } ] } ],
  "先生": [ { "pronunciation": "せんせい", "per_char": [
              { "indices": [0, 1], "pronunciation": "せん" },
              { "indices": [1, 2], "pronunciation": "せい" } ] } ],
  "呼ぶ": [ { "pronunciation": "よぶ", "per_char": [ { "indices": [0, 1], "pronunciation": "よ" } ] } ]
}"#;

/// Segmenter that returns a fixed tokenization of [`SENTENCE`].
struct FixedSegmenter;

impl SegmentationProvider for FixedSegmenter {
  fn can_segment(&self, request: &AnnotateRequest) -> bool {
    request.base_text == SENTENCE
  }

  fn segment(&self, _text: &str) -> Vec<Lexeme> {
    vec![
      Lexeme::new("私").with_reading("わたし"),
      Lexeme::new("は").with_reading("は"),
      Lexeme::new("その"),
      Lexeme::new("人").with_reading("ひと"),
      Lexeme::new("を"),
      Lexeme::new("常").with_reading("つね"),
      Lexeme::new("に"),
      Lexeme::new("先生").with_reading("せんせい"),
      Lexeme::new("と"),
      Lexeme::new("呼んで").with_base_form("呼ぶ").with_reading("よんで"),
      Lexeme::new("いた").with_base_form("いる"),
    ]
  }

  fn name(&self) -> &'static str {
    "FixedSegmenter"
  }
}

fn service() -> YomikataService {
  let dictionary = PronunciationDictionary::from_json_str(DICTIONARY_JSON).expect("dictionary");

  let segmenters = PriorityRegistry::new()
    .with(Box::new(FixedSegmenter) as Box<dyn SegmentationProvider>, 1)
    .with(Box::new(DefaultSegmenter::new()), 0);
  let annotators = PriorityRegistry::new()
    .with(
      Box::new(FuriganaAnnotator::new(Arc::new(dictionary))) as Box<dyn AnnotationProvider>,
      1,
    )
    .with(Box::new(DefaultAnnotator::new()), 0);

  YomikataService::new(
    SegmentationService::new(segmenters),
    AnnotationService::new(annotators),
  )
}

/// Segments must be contiguous, start at 0, cover the text, and keep
/// annotations inside their segment.
fn assert_partition(text: &str, segments: &[AnnotatedSegment]) {
  let mut cursor = 0;
  for segment in segments {
    assert_eq!(segment.span.start, cursor, "segments must be contiguous: {segments:?}");
    assert!(segment.span.end > segment.span.start, "segments must not be empty");
    for annotation in segment.annotations.iter().flatten() {
      assert!(segment.span.contains(&annotation.span), "annotation outside segment");
    }
    cursor = segment.span.end;
  }
  assert_eq!(cursor, text.chars().count());
}

#[test]
fn annotates_sample_sentence() {
  let segments = service()
    .annotate(&AnnotateRequest::new(SENTENCE, Language::Japanese))
    .expect("annotation should succeed");

  let reading = |s, e, r| Annotation::reading(Span::new(s, e), r);
  let expected = vec![
    AnnotatedSegment::annotated(Span::new(0, 1), vec![reading(0, 1, "わたし")]),
    AnnotatedSegment::plain(Span::new(1, 2)),
    AnnotatedSegment::plain(Span::new(2, 4)),
    AnnotatedSegment::annotated(Span::new(4, 5), vec![reading(4, 5, "ひと")]),
    AnnotatedSegment::plain(Span::new(5, 6)),
    AnnotatedSegment::annotated(Span::new(6, 7), vec![reading(6, 7, "つね")]),
    AnnotatedSegment::plain(Span::new(7, 8)),
    AnnotatedSegment::annotated(
      Span::new(8, 10),
      vec![reading(8, 9, "せん"), reading(9, 10, "せい")],
    ),
    AnnotatedSegment::plain(Span::new(10, 11)),
    AnnotatedSegment::annotated(Span::new(11, 14), vec![reading(11, 12, "よ")]),
    AnnotatedSegment::plain(Span::new(14, 16)),
  ];

  assert_eq!(segments, expected);
  assert_partition(SENTENCE, &segments);
}

#[test]
fn wire_format_omits_absent_fields() {
  let segments = service()
    .annotate(&AnnotateRequest::new(SENTENCE, Language::Japanese))
    .expect("annotation should succeed");

  let value = serde_json::to_value(&segments[..2]).expect("serialize");
  assert_eq!(
    value,
    json!([
      { "indices": [0, 1], "annotations": [ { "indices": [0, 1], "annotation_text": "わたし" } ] },
      { "indices": [1, 2] }
    ])
  );
}

#[test]
fn other_text_falls_back_to_han_runs() {
  let text = "今日は晴れ";
  let segments = service()
    .annotate(&AnnotateRequest::new(text, Language::Japanese))
    .expect("annotation should succeed");

  // DefaultSegmenter gives ["今日", "は", "晴", "れ"]; the furigana annotator has no entry
  // for them and marks each Han character
  assert_eq!(
    segments,
    vec![
      AnnotatedSegment::annotated(Span::new(0, 1), vec![Annotation::marker(Span::new(0, 1))]),
      AnnotatedSegment::annotated(Span::new(1, 2), vec![Annotation::marker(Span::new(1, 2))]),
      AnnotatedSegment::plain(Span::new(2, 3)),
      AnnotatedSegment::annotated(Span::new(3, 4), vec![Annotation::marker(Span::new(3, 4))]),
      AnnotatedSegment::plain(Span::new(4, 5)),
    ]
  );
  assert_partition(text, &segments);
}

#[test]
fn chinese_uses_default_annotator() {
  let text = "我爱北京天安门。";
  let segments = service()
    .annotate(&AnnotateRequest::new(text, Language::Chinese))
    .expect("annotation should succeed");

  assert_eq!(segments.len(), 2);
  assert_eq!(segments[0].span, Span::new(0, 7));
  assert_eq!(segments[0].annotations.as_ref().map(Vec::len), Some(7));
  assert_eq!(segments[1], AnnotatedSegment::plain(Span::new(7, 8)));
  assert_partition(text, &segments);
}

#[test]
fn partition_holds_for_mixed_texts() {
  let service = service();
  for text in ["ひらがなだけ", "漢字", "Rust言語とC言語", "a", "一二三四五六七八九十"] {
    for language in [Language::Japanese, Language::Chinese] {
      let segments = service
        .annotate(&AnnotateRequest::new(text, language))
        .expect("annotation should succeed");
      assert_partition(text, &segments);
    }
  }
}

/// Full pipeline with the vibrato segmenter.
/// Skip test if the IPADIC cache does not exist.
#[test]
fn vibrato_pipeline_partitions_text() {
  let Ok(manager) = MorphologyDictionaryManager::with_preset(PresetDictionaryKind::Ipadic) else {
    return;
  };
  if !manager.is_cached() {
    eprintln!("No dictionary cache -> Skip test");
    return;
  }
  let dict = manager.load().expect("dictionary");

  let dictionary = PronunciationDictionary::from_json_str(DICTIONARY_JSON).expect("dictionary");
  let service = YomikataService::new(
    SegmentationService::new(
      PriorityRegistry::new()
        .with(
          Box::new(VibratoSegmenter::from_shared_dictionary(dict, FeatureLayout::Ipadic))
            as Box<dyn SegmentationProvider>,
          1,
        )
        .with(Box::new(DefaultSegmenter::new()), 0),
    ),
    AnnotationService::new(
      PriorityRegistry::new()
        .with(
          Box::new(FuriganaAnnotator::new(Arc::new(dictionary))) as Box<dyn AnnotationProvider>,
          1,
        )
        .with(Box::new(DefaultAnnotator::new()), 0),
    ),
  );

  let segments = service
    .annotate(&AnnotateRequest::new(SENTENCE, Language::Japanese))
    .expect("annotation should succeed");

  assert_partition(SENTENCE, &segments);
  assert_eq!(
    segments[0].annotations,
    Some(vec![Annotation::reading(Span::new(0, 1), "わたし")])
  );
}
