//! HTTPハンドラー定義

use std::time::Instant;

use axum::{Json, extract::State};
use tracing::{debug, error, info};

use crate::errors::ApiError;
use crate::models::{AnnotateRequest, AnnotateResponse};

use super::state::AppState;

/// POST /annotate エンドポイント
///
/// テキストを分かち書きし、漢字部分に振り仮名を付与する。
///
/// # Request Body
/// ```json
/// { "base_text": "注釈対象のテキスト", "language": "jpn" }
/// ```
///
/// # Response
/// - 200 OK: セグメントの配列
/// - 400 Bad Request: 入力エラー（空テキスト、テキスト長超過）
/// - 422 Unprocessable Entity: 適用可能な分かち書き・注釈処理がない
/// - 500 Internal Server Error: 内部エラー
pub async fn post_annotate(
  State(state): State<AppState>,
  Json(request): Json<AnnotateRequest>,
) -> Result<Json<AnnotateResponse>, ApiError> {
  debug!(
    text_len = request.base_text.len(),
    language = %request.language,
    "注釈リクエストを受信"
  );

  // 形態素解析と辞書照合は CPU バウンドなので非同期ランタイムから分離する
  let service = state.service.clone();
  let start = Instant::now();

  let response =
    tokio::task::spawn_blocking(move || service.annotate(request)).await.map_err(|e| {
      error!(error = %e, "spawn_blocking エラー");
      ApiError::internal("処理の実行に失敗しました")
    })??;

  info!(
    segment_count = response.segments.len(),
    elapsed_ms = start.elapsed().as_millis() as u64,
    "注釈付与完了"
  );

  Ok(Json(response))
}

/// ヘルスチェックエンドポイント
///
/// サーバーが稼働しているかを確認する。
pub async fn health_check() -> &'static str {
  "OK"
}
