//! yomikata-api サーバーエントリーポイント

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use yomikata_api::ApiError;
use yomikata_api::api::AppState;
use yomikata_api::api::run_server;
use yomikata_api::config::Config;
use yomikata_api::service::AnnotateApiServiceFull;

#[tokio::main]
async fn main() -> Result<(), ApiError> {
  // 設定の読み込み（ログレベルを含むため、ロギングより先に行う）
  let config = Config::from_env()?;

  // ロギングの初期化（RUST_LOG 未設定時は YOMIKATA_LOG_LEVEL）
  let filter = EnvFilter::try_from_default_env()
    .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_directive()));
  tracing_subscriber::registry().with(filter).with(tracing_subscriber::fmt::layer()).init();

  tracing::info!(
    preset = ?config.preset,
    log_level = config.log_level.as_directive(),
    furigana_dict = %config.furigana_dict.display(),
    "設定を読み込みました"
  );

  // サービスの初期化（辞書ロードを含む）
  let service = Arc::new(AnnotateApiServiceFull::new(&config)?);
  tracing::info!("振り仮名付与サービスを初期化しました");

  // アプリケーション状態の作成
  let state = AppState::new(config, service);

  // サーバー起動
  run_server(state).await
}
