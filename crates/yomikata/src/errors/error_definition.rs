//! エラー定義

use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

/// 設定（YomikataConfig）関連のエラー
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum ConfigError {
  /// pronunciation.path が存在しない
  #[error("読み辞書ファイルが見つかりません: path={path:?}")]
  PronunciationDictionaryNotFound {
    /// 指定されたパス
    path: PathBuf,
  },

  /// pronunciation.path がファイルではない
  #[error("読み辞書のパスがファイルではありません: path={path:?}")]
  PronunciationDictionaryNotAFile {
    /// 指定されたパス
    path: PathBuf,
  },

  /// morphology.cache_dir が「存在するディレクトリ」でない（ファイルである等）
  #[error("morphology.cache_dir がディレクトリではありません: path={path:?}")]
  InvalidDictionaryCacheDir {
    /// 不正なパス
    path: PathBuf,
  },

  /// morphology.cache_dir の作成に失敗
  #[error("morphology.cache_dir の作成に失敗しました: path={path:?}, error={source}")]
  DictionaryCacheDirCreationFailed {
    /// 作成しようとしたパス
    path: PathBuf,
    /// 元となった IO エラー
    #[source]
    source: Arc<io::Error>,
  },
}

/// 形態素解析辞書（vibrato-rkyv）関連のエラー
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum DictionaryError {
  /// キャッシュディレクトリーが見つからない
  #[error("辞書キャッシュディレクトリーが見つかりません")]
  CacheDirNotFound,

  /// キャッシュディレクトリーの作成失敗
  #[error("辞書キャッシュディレクトリーの作成に失敗しました: {0}")]
  CacheDirCreationFailed(Arc<io::Error>),

  /// 指定された辞書が見つからない
  #[error("指定された辞書が見つかりません: {0}")]
  DictionaryNotFound(PathBuf),

  /// vibrato-rkyv による辞書のロード失敗
  #[error("vibrato-rkyv 辞書ロードエラー: {0}")]
  VibratoLoad(Arc<dyn std::error::Error + Send + Sync + 'static>),

  /// vibrato-rkyv のプリセット辞書のダウンロード失敗
  #[error("vibrato-rkyv プリセット辞書ダウンロード失敗: {0}")]
  PresetDictDownloadFailed(Arc<dyn std::error::Error + Send + Sync + 'static>),
}

/// 読み辞書（JmdictFurigana）の読み込みエラー
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum PronunciationError {
  /// ファイルの読み込みに失敗
  #[error("読み辞書の読み込みに失敗しました: path={path:?}, error={source}")]
  Io {
    /// 読み込もうとしたパス
    path: PathBuf,
    /// 元となった IO エラー
    #[source]
    source: Arc<io::Error>,
  },

  /// JSON のデシリアライズ失敗
  #[error("読み辞書の JSON が不正です: {0}")]
  Json(Arc<serde_json::Error>),

  /// トップレベルがオブジェクトでも配列でもない
  #[error("読み辞書の形式を判別できません: {found}")]
  UnrecognizedFormat {
    /// 実際に見つかった JSON の型
    found: &'static str,
  },
}

impl From<serde_json::Error> for PronunciationError {
  fn from(err: serde_json::Error) -> Self {
    PronunciationError::Json(Arc::new(err))
  }
}

/// 注釈プロバイダー内部のエラー
///
/// AnnotationService はこのエラーをログに記録し、次のプロバイダーへフォールバックする
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AnnotatorError {
  /// 辞書エントリの文字単位の読みが見出し語の範囲外を指している
  #[error(
    "読みの範囲が不正です: headword={headword}, span=({start}, {end}), surface_len={surface_len}"
  )]
  DatumOutOfRange {
    /// 辞書エントリの見出し語
    headword: String,
    /// 範囲の開始（見出し語先頭からの文字オフセット）
    start: usize,
    /// 範囲の終了（見出し語先頭からの文字オフセット）
    end: usize,
    /// 対象トークンの表層形の文字数
    surface_len: usize,
  },
}

/// オーケストレーションサービスのエラー
///
/// 適用可能かつ成功したプロバイダーが一つもなかった場合に返す。リクエストにとって致命的
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ServiceError {
  /// 適用可能かつ結果を返した分かち書きプロバイダーがなかった
  #[error("No suitable segmenter found for {request}.")]
  SegmentationFailed {
    /// 失敗したリクエストの表示名
    request: String,
  },

  /// 適用可能かつ成功した注釈プロバイダーがなかった
  #[error("No suitable annotator found for {request}.")]
  AnnotationFailed {
    /// 失敗したリクエストの表示名
    request: String,
  },
}

/// 統合エラー
/// 本クレートの外部に公開するエラー用 API はこのエラーを返すこと
/// `YomikataResult<T>` = `Result<T, YomikataError>` として使用する
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum YomikataError {
  /// 形態素解析辞書関連エラー
  #[error(transparent)]
  Dictionary(#[from] DictionaryError),

  /// 読み辞書関連エラー
  #[error(transparent)]
  Pronunciation(#[from] PronunciationError),

  /// 分かち書き・注釈の失敗
  #[error(transparent)]
  Service(#[from] ServiceError),

  /// 設定エラー
  #[error(transparent)]
  Config(#[from] ConfigError),
}

/// yomikata クレートの標準 Result 型エイリアス
pub type YomikataResult<T> = Result<T, YomikataError>;
