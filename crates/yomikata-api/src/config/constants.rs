//! API設定の定数定義

/// 入力テキストの最大長（バイト単位）
///
/// 振り仮名付与は文・段落単位の利用を想定し、100KB までとする。
/// Axum のリクエストボディ上限（2MB）より小さいため、超過時は `text_too_long` になる。
pub const MAX_TEXT_LENGTH: usize = 100_000;

/// デフォルトのバインドアドレス
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5530";

/// デフォルトの辞書プリセット名
///
/// 読みの列が安定している IPADIC を使用。
pub const DEFAULT_PRESET_DICT: &str = "ipadic";

/// デフォルトの読み辞書ファイル（JmdictFurigana）
pub const DEFAULT_FURIGANA_DICT: &str = "JmdictFurigana.json";

/// デフォルトのログレベル（`RUST_LOG` 未設定時に使用）
pub const DEFAULT_LOG_LEVEL: &str = "info";
