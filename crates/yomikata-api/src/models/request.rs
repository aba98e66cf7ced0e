//! リクエストモデル定義
//!
//! ワイヤー形式はコアクレートの `AnnotateRequest` と同一のため、そのまま受け付ける。

pub use yomikata::AnnotateRequest;

#[cfg(test)]
mod tests {
  use super::*;
  use yomikata::Language;

  #[test]
  fn deserialize_valid_request() {
    let json = r#"{"base_text": "先生", "language": "jpn"}"#;
    let req: AnnotateRequest = serde_json::from_str(json).unwrap();
    assert_eq!(req.base_text, "先生");
    assert_eq!(req.language, Language::Japanese);
  }

  #[test]
  fn deserialize_chinese_request() {
    let json = r#"{"base_text": "你好", "language": "zho"}"#;
    let req: AnnotateRequest = serde_json::from_str(json).unwrap();
    assert_eq!(req.language, Language::Chinese);
  }

  #[test]
  fn deserialize_empty_text() {
    let json = r#"{"base_text": "", "language": "jpn"}"#;
    let req: AnnotateRequest = serde_json::from_str(json).unwrap();
    assert_eq!(req.base_text, "");
  }

  #[test]
  fn reject_unknown_language() {
    let json = r#"{"base_text": "hello", "language": "eng"}"#;
    assert!(serde_json::from_str::<AnnotateRequest>(json).is_err());
  }

  #[test]
  fn reject_missing_language() {
    let json = r#"{"base_text": "先生"}"#;
    assert!(serde_json::from_str::<AnnotateRequest>(json).is_err());
  }
}
