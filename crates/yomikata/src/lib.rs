//! yomikata 振り仮名付与ライブラリー
//!
//! 形態素解析の結果と JmdictFurigana 由来の読み辞書を突き合わせ、
//! 漢字部分に読み（振り仮名）を付与したスパン列を生成する

/// 設定モジュール - YomikataConfig, Language等の設定構造体を定義
pub mod config;

/// 辞書モジュール - 形態素解析用 vibrato-rkyv 辞書の管理・ロード機能を提供
pub mod dictionary;

/// エラーモジュール - YomikataError, YomikataResult等のエラー型を定義
pub mod errors;

/// データモデルモジュール - Lexeme, AnnotatedSegment等のデータ構造を定義
pub mod models;

/// 読み辞書モジュール - PronunciationDictionary とその読み込み処理
pub mod pronunciation;

/// レジストリモジュール - 優先度付きフォールバックの PriorityRegistry
pub mod registry;

/// 文字種モジュール - 漢字判定、漢字ラン分割、カタカナ→ひらがな変換
pub mod script;

/// 分かち書きモジュール - SegmentationProvider と各実装
pub mod segmenter;

/// 注釈モジュール - AnnotationProvider と各実装
pub mod annotator;

/// サービスモジュール - SegmentationService, AnnotationService, YomikataService
pub mod service;

pub use config::Language;
pub use errors::{YomikataError, YomikataResult};
pub use models::{AnnotateRequest, AnnotatedSegment, Annotation, Lexeme, Span};
pub use service::YomikataService;
