//! yomikata-api crate
//!
//! Web server providing furigana annotation as an HTTP API.
//!
//! ## Endpoints
//! - `POST /annotate` - Furigana annotation
//! - `GET /health` - Health Check
//!
//! ## Usage Example
//! ```bash
//! curl -X POST http://127.0.0.1:5530/annotate \
//!   -H "Content-Type: application/json" \
//!   -d '{"base_text": "私はその人を常に先生と呼んでいた", "language": "jpn"}'
//! ```

pub mod api;
pub mod config;
pub mod errors;
pub mod models;
pub mod service;

pub use api::AppState;
pub use config::Config;
pub use errors::{ApiError, ApiErrorKind};
pub use models::{AnnotateRequest, AnnotateResponse};
pub use service::AnnotateApiServiceFull;
