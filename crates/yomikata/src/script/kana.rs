//! Kana folding.

/// Offset between a katakana code point and its hiragana counterpart.
const KATAKANA_TO_HIRAGANA: u32 = 'ア' as u32 - 'あ' as u32;

/// Folds katakana (ァ..=ヶ) onto hiragana (ぁ..=ゖ), leaving every other character unchanged.
///
/// The prolonged sound mark `ー` has no hiragana form and is kept as is.
pub fn katakana_to_hiragana(text: &str) -> String {
  text
    .chars()
    .map(|c| match c {
      'ァ'..='ヶ' => char::from_u32(c as u32 - KATAKANA_TO_HIRAGANA).unwrap_or(c),
      _ => c,
    })
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn katakana_to_hiragana_basic() {
    assert_eq!(katakana_to_hiragana("カタカナ"), "かたかな");
  }

  #[test]
  fn katakana_to_hiragana_hiragana_unchanged() {
    assert_eq!(katakana_to_hiragana("ひらがな"), "ひらがな");
  }

  #[test]
  fn katakana_to_hiragana_mixed() {
    assert_eq!(katakana_to_hiragana("カタカナとひらがな"), "かたかなとひらがな");
  }

  #[test]
  fn katakana_to_hiragana_range_edges() {
    assert_eq!(katakana_to_hiragana("ァヶ"), "ぁゖ");
    // outside the folded range
    assert_eq!(katakana_to_hiragana("ヷー漢A"), "ヷー漢A");
  }
}
