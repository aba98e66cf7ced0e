//! モデルモジュール

mod request;
mod response;

pub use request::AnnotateRequest;
pub use response::AnnotateResponse;
