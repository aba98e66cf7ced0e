//! ルーター定義

use axum::{
  Router,
  routing::{get, post},
};
use tower_http::trace::TraceLayer;

use super::handlers::{health_check, post_annotate};
use super::state::AppState;
use crate::errors::ApiError;

/// APIルーターを作成する
///
/// # Arguments
/// * `state` - アプリケーション状態
///
/// # Returns
/// 設定済みの Router
pub fn create_router(state: AppState) -> Router {
  Router::new()
    .route("/annotate", post(post_annotate))
    .route("/health", get(health_check))
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

/// サーバーを起動する
///
/// Ctrl+C を受けると処理中のリクエストを終えてから停止する。
///
/// # Errors
/// バインドまたはサーバーの実行に失敗した場合にエラーを返す
pub async fn run_server(state: AppState) -> crate::errors::Result<()> {
  let addr = state.config.bind_addr.clone();
  let listener = tokio::net::TcpListener::bind(&addr)
    .await
    .map_err(|e| ApiError::config(format!("バインドに失敗しました: {addr}: {e}")))?;

  tracing::info!(%addr, "サーバーを起動します");

  axum::serve(listener, create_router(state))
    .with_graceful_shutdown(shutdown_signal())
    .await
    .map_err(|e| ApiError::internal(format!("サーバーエラー: {e}")))?;

  tracing::info!("サーバーを停止しました");
  Ok(())
}

/// Ctrl+C を待つ
async fn shutdown_signal() {
  if let Err(e) = tokio::signal::ctrl_c().await {
    // シグナルを受け取れない場合は停止せず動き続ける
    tracing::error!(error = %e, "Ctrl+C の待ち受けに失敗しました");
    std::future::pending::<()>().await;
  }
  tracing::info!("シャットダウン要求を受信しました");
}
