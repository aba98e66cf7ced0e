//! Japanese segmenter using vibrato-rkyv

use std::sync::Arc;

use tracing::{debug, error};
use vibrato_rkyv::Dictionary;
use vibrato_rkyv::Tokenizer as VibratoImpl;

use super::SegmentationProvider;
use crate::config::{DictionaryPreset, Language};
use crate::models::{AnnotateRequest, Lexeme};
use crate::script::katakana_to_hiragana;

/// Column positions in the comma separated feature string.
///
/// | Layout   | Base form          | Reading (katakana)             |
/// |----------|--------------------|--------------------------------|
/// | `Ipadic` | 6 (原形)           | 7 (読み)                       |
/// | `Unidic` | 7 (lemma)          | 20 (kana), falling back to 9 (pron) |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeatureLayout {
  /// MeCab/IPAdic layout
  #[default]
  Ipadic,
  /// UniDic layout
  Unidic,
}

const IPADIC_IDX_BASE_FORM: usize = 6;
const IPADIC_IDX_READING: usize = 7;
const UNIDIC_IDX_LEMMA: usize = 7;
const UNIDIC_IDX_PRON: usize = 9;
const UNIDIC_IDX_KANA: usize = 20;

impl FeatureLayout {
  /// Base form column of `feature`, if present and meaningful.
  pub fn base_form<'a>(&self, feature: &'a str) -> Option<&'a str> {
    let idx = match self {
      FeatureLayout::Ipadic => IPADIC_IDX_BASE_FORM,
      FeatureLayout::Unidic => UNIDIC_IDX_LEMMA,
    };
    column(feature, idx)
  }

  /// Reading column of `feature` as written in the dictionary (katakana).
  pub fn reading<'a>(&self, feature: &'a str) -> Option<&'a str> {
    match self {
      FeatureLayout::Ipadic => column(feature, IPADIC_IDX_READING),
      FeatureLayout::Unidic => {
        column(feature, UNIDIC_IDX_KANA).or_else(|| column(feature, UNIDIC_IDX_PRON))
      }
    }
  }
}

impl From<DictionaryPreset> for FeatureLayout {
  fn from(preset: DictionaryPreset) -> Self {
    match preset {
      DictionaryPreset::Ipadic => FeatureLayout::Ipadic,
      DictionaryPreset::UnidicCwj | DictionaryPreset::UnidicCsj => FeatureLayout::Unidic,
    }
  }
}

/// `idx`-th comma separated field, `None` when missing, empty or `*`
fn column(feature: &str, idx: usize) -> Option<&str> {
  feature.split(',').nth(idx).filter(|s| !s.is_empty() && *s != "*")
}

/// Builds the lexeme of one token
fn lexeme_from_token(surface: &str, feature: &str, layout: FeatureLayout) -> Lexeme {
  let mut lexeme = Lexeme::new(surface);

  if let Some(base_form) = layout.base_form(feature).filter(|b| *b != surface) {
    lexeme = lexeme.with_base_form(base_form);
  }
  if let Some(reading) = layout.reading(feature) {
    lexeme = lexeme.with_reading(katakana_to_hiragana(reading));
  }

  lexeme
}

/// Morphological segmenter for Japanese.
///
/// - Only holds a shared dictionary reference
/// - A worker is created per call, so `segment` takes `&self`
#[derive(Clone)]
pub struct VibratoSegmenter {
  inner: VibratoImpl,
  layout: FeatureLayout,
}

impl VibratoSegmenter {
  /// Constructs a segmenter from a shared dictionary (`Arc<Dictionary>`).
  ///
  /// # Examples
  /// ```rust,no_run
  /// # use yomikata::dictionary::MorphologyDictionaryManager;
  /// # use yomikata::segmenter::{FeatureLayout, VibratoSegmenter};
  /// # use vibrato_rkyv::dictionary::PresetDictionaryKind;
  /// let manager = MorphologyDictionaryManager::with_preset(PresetDictionaryKind::Ipadic).unwrap();
  /// let dict = manager.load().unwrap();
  /// let segmenter = VibratoSegmenter::from_shared_dictionary(dict, FeatureLayout::Ipadic);
  /// ```
  pub fn from_shared_dictionary(dict: Arc<Dictionary>, layout: FeatureLayout) -> Self {
    Self {
      inner: VibratoImpl::from_shared_dictionary(dict),
      layout,
    }
  }

  /// Returns the feature layout in use
  pub fn layout(&self) -> FeatureLayout {
    self.layout
  }
}

impl SegmentationProvider for VibratoSegmenter {
  fn can_segment(&self, request: &AnnotateRequest) -> bool {
    request.language == Language::Japanese
  }

  fn segment(&self, text: &str) -> Vec<Lexeme> {
    let mut worker = self.inner.new_worker();
    worker.reset_sentence(text);
    worker.tokenize();

    debug!(num_tokens = worker.num_tokens(), "Start morphological analysis");

    let mut lexemes = Vec::with_capacity(worker.num_tokens());
    for token in worker.token_iter() {
      let surface = token.surface();
      let feature = token.feature();

      debug!(
        surface = %surface,
        ?feature,
        start = token.range_char().start,
        end = token.range_char().end,
        "Token"
      );

      lexemes.push(lexeme_from_token(surface, feature, self.layout));
    }

    let reconstructed: String = lexemes.iter().map(|l| l.surface.as_str()).collect();
    if reconstructed != text {
      error!(
        num_lexemes = lexemes.len(),
        "Token surfaces do not reconstruct the input text"
      );
      return Vec::new();
    }

    lexemes
  }

  fn name(&self) -> &'static str {
    "VibratoSegmenter"
  }
}
