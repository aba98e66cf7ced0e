//! Config loading from environment variables

use std::path::PathBuf;
use std::str::FromStr;

use yomikata::config::{DictionaryPreset, LogLevel};

use super::constants::{
  DEFAULT_BIND_ADDR, DEFAULT_FURIGANA_DICT, DEFAULT_LOG_LEVEL, DEFAULT_PRESET_DICT,
};
use crate::errors::ApiError;

/// Dictionary Preset Type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
  /// IPAdic dictionary
  Ipadic,
  /// UniDic (Corpus of Contemporary Written Japanese)
  UnidicCwj,
  /// UniDic (Corpus of Spontaneous Japanese)
  UnidicCsj,
}

impl FromStr for Preset {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_lowercase().as_str() {
      "ipadic" => Ok(Self::Ipadic),
      "unidic-cwj" => Ok(Self::UnidicCwj),
      "unidic-csj" => Ok(Self::UnidicCsj),
      _ => Err(format!(
        "Unknown preset: {}. Valid values: ipadic, unidic-cwj, unidic-csj",
        s
      )),
    }
  }
}

impl From<Preset> for DictionaryPreset {
  fn from(preset: Preset) -> Self {
    match preset {
      Preset::Ipadic => DictionaryPreset::Ipadic,
      Preset::UnidicCwj => DictionaryPreset::UnidicCwj,
      Preset::UnidicCsj => DictionaryPreset::UnidicCsj,
    }
  }
}

/// API Server Configuration
#[derive(Debug, Clone)]
pub struct Config {
  /// Bind address (e.g. "127.0.0.1:5530")
  pub bind_addr: String,
  /// Morphological dictionary preset to use
  pub preset: Preset,
  /// Path of the JmdictFurigana JSON file
  pub furigana_dict: PathBuf,
  /// Log level used when `RUST_LOG` is not set
  pub log_level: LogLevel,
}

impl Config {
  /// Loads configuration from environment variables
  ///
  /// | Variable                 | Default               |
  /// |--------------------------|-----------------------|
  /// | `YOMIKATA_API_BIND_ADDR` | `127.0.0.1:5530`      |
  /// | `YOMIKATA_PRESET_DICT`   | `ipadic`              |
  /// | `YOMIKATA_FURIGANA_DICT` | `JmdictFurigana.json` |
  /// | `YOMIKATA_LOG_LEVEL`     | `info`                |
  ///
  /// # Errors
  /// Returns an error if environment variable values are invalid
  pub fn from_env() -> crate::errors::Result<Self> {
    let bind_addr =
      std::env::var("YOMIKATA_API_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

    let preset_dict_str =
      std::env::var("YOMIKATA_PRESET_DICT").unwrap_or_else(|_| DEFAULT_PRESET_DICT.to_string());

    let preset = Preset::from_str(&preset_dict_str).map_err(ApiError::config)?;

    let furigana_dict = std::env::var("YOMIKATA_FURIGANA_DICT")
      .map(PathBuf::from)
      .unwrap_or_else(|_| PathBuf::from(DEFAULT_FURIGANA_DICT));

    let log_level_str =
      std::env::var("YOMIKATA_LOG_LEVEL").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string());

    let log_level = LogLevel::from_str(&log_level_str).map_err(ApiError::config)?;

    Ok(Self {
      bind_addr,
      preset,
      furigana_dict,
      log_level,
    })
  }
}
