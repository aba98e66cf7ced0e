// crates/yomikata/src/service.rs

//! YomikataService: yomikata クレートの統合ファサード。
//!
//! - 分かち書き (SegmentationService) - 優先度順に SegmentationProvider を試す
//! - 注釈付与 (AnnotationService) - 優先度順に AnnotationProvider を試す
//!
//! API サーバーなどの外部からは、この構造体だけを意識すればよい。

use std::sync::Arc;

use tracing::{debug, error, info};

use crate::annotator::{AnnotationProvider, DefaultAnnotator, FuriganaAnnotator};
use crate::config::YomikataConfig;
use crate::dictionary::MorphologyDictionaryManager;
use crate::errors::{ServiceError, YomikataResult};
use crate::models::{AnnotateRequest, AnnotatedSegment, Lexeme};
use crate::pronunciation::PronunciationDictionary;
use crate::registry::PriorityRegistry;
use crate::segmenter::{DefaultSegmenter, FeatureLayout, SegmentationProvider, VibratoSegmenter};

/// 分かち書きサービス
///
/// 登録順（優先度の降順、同順位は登録順）に適用可能なプロバイダーを試し、
/// 最初に空でない結果を返したものを採用する。
pub struct SegmentationService {
  registry: PriorityRegistry<Box<dyn SegmentationProvider>>,
}

impl SegmentationService {
  /// レジストリからサービスを構築する
  pub fn new(registry: PriorityRegistry<Box<dyn SegmentationProvider>>) -> Self {
    Self { registry }
  }

  /// `request.base_text` を分かち書きする。
  ///
  /// # エラー
  /// 適用可能かつ空でない結果を返したプロバイダーがなければ
  /// `ServiceError::SegmentationFailed`
  pub fn segment(&self, request: &AnnotateRequest) -> Result<Vec<Lexeme>, ServiceError> {
    for provider in self.registry.iter() {
      if !provider.can_segment(request) {
        continue;
      }

      // 判定は今回呼び出したプロバイダーの結果だけで行う
      let lexemes = provider.segment(&request.base_text);
      if !lexemes.is_empty() {
        debug!(provider = provider.name(), num_lexemes = lexemes.len(), "Segmentation succeeded");
        return Ok(lexemes);
      }

      error!(provider = provider.name(), %request, "Segmenter returned no lexemes");
    }

    Err(ServiceError::SegmentationFailed {
      request: request.to_string(),
    })
  }
}

/// 注釈サービス
///
/// 適用可能なプロバイダーを優先度順に試し、最初に `Ok` を返したものを採用する。
/// `AnnotatorError` はログに記録して次のプロバイダーへ進む。
pub struct AnnotationService {
  registry: PriorityRegistry<Box<dyn AnnotationProvider>>,
}

impl AnnotationService {
  /// レジストリからサービスを構築する
  pub fn new(registry: PriorityRegistry<Box<dyn AnnotationProvider>>) -> Self {
    Self { registry }
  }

  /// 分かち書き済みの `lexemes` に注釈を付ける。
  ///
  /// # エラー
  /// 適用可能かつ成功したプロバイダーがなければ `ServiceError::AnnotationFailed`
  pub fn annotate(
    &self,
    request: &AnnotateRequest,
    lexemes: &[Lexeme],
  ) -> Result<Vec<AnnotatedSegment>, ServiceError> {
    for provider in self.registry.iter() {
      if !provider.can_annotate(request) {
        continue;
      }

      match provider.annotate(lexemes) {
        Ok(segments) => {
          debug!(provider = provider.name(), num_segments = segments.len(), "Annotation succeeded");
          return Ok(segments);
        }
        Err(e) => {
          error!(provider = provider.name(), error = %e, "Annotator failed, trying next");
        }
      }
    }

    Err(ServiceError::AnnotationFailed {
      request: request.to_string(),
    })
  }
}

/// yomikata クレートの統合ファサード。
///
/// 分かち書き → 注釈付与 を一つの呼び出しで行う。構築後は不変なので
/// `Arc<YomikataService>` でスレッド間共有できる。
pub struct YomikataService {
  segmentation: SegmentationService,
  annotation: AnnotationService,
}

impl YomikataService {
  /// 任意のサービスから構築する（テストやカスタム構成向け）
  pub fn new(segmentation: SegmentationService, annotation: AnnotationService) -> Self {
    Self {
      segmentation,
      annotation,
    }
  }

  /// 初期化（設定検証 + 辞書ロード + レジストリ構築）
  ///
  /// # 処理フロー
  /// 1. 設定の妥当性を検証
  /// 2. 形態素解析辞書と読み辞書をロード
  /// 3. 分かち書き: VibratoSegmenter(1) → DefaultSegmenter(0)
  /// 4. 注釈: FuriganaAnnotator(1) → DefaultAnnotator(0)
  ///
  /// # エラー
  /// - 設定が不正
  /// - 形態素解析辞書のロード失敗
  /// - 読み辞書の読み込み失敗
  pub fn from_config(config: &YomikataConfig) -> YomikataResult<Self> {
    config.validate()?;

    let manager = MorphologyDictionaryManager::from_config(config)?;
    let dict = manager.load()?;
    let layout = FeatureLayout::from(config.morphology.preset);

    let pronunciation = Arc::new(PronunciationDictionary::from_path(config.pronunciation_path())?);

    let segmenters = PriorityRegistry::new()
      .with(
        Box::new(VibratoSegmenter::from_shared_dictionary(dict, layout))
          as Box<dyn SegmentationProvider>,
        1,
      )
      .with(Box::new(DefaultSegmenter::new()), 0);

    let annotators = PriorityRegistry::new()
      .with(
        Box::new(FuriganaAnnotator::new(pronunciation)) as Box<dyn AnnotationProvider>,
        1,
      )
      .with(Box::new(DefaultAnnotator::new()), 0);

    info!(
      preset = ?config.morphology.preset,
      log_level = config.log_level().as_directive(),
      segmenters = segmenters.len(),
      annotators = annotators.len(),
      "YomikataService initialized"
    );

    Ok(Self::new(
      SegmentationService::new(segmenters),
      AnnotationService::new(annotators),
    ))
  }

  /// 分かち書きサービスへの参照
  pub fn segmentation(&self) -> &SegmentationService {
    &self.segmentation
  }

  /// 注釈サービスへの参照
  pub fn annotation(&self) -> &AnnotationService {
    &self.annotation
  }

  /// リクエストのテキストを分かち書きし、注釈付きセグメント列を返す。
  ///
  /// # エラー
  /// `ServiceError::SegmentationFailed` / `ServiceError::AnnotationFailed`
  pub fn annotate(&self, request: &AnnotateRequest) -> YomikataResult<Vec<AnnotatedSegment>> {
    let lexemes = self.segmentation.segment(request)?;
    let segments = self.annotation.annotate(request, &lexemes)?;
    Ok(segments)
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Test Module
// ─────────────────────────────────────────────────────────────────────────────
