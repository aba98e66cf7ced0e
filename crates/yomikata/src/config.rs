// crates/yomikata/src/config.rs

use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use vibrato_rkyv::dictionary::PresetDictionaryKind;

use crate::errors::ConfigError;

/// Language of an annotation request.
///
/// Serialized as the ISO 639-3 code used on the wire (`"jpn"`, `"zho"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
  /// Japanese (Morphological analysis: vibrato-rkyv, readings: JmdictFurigana)
  #[serde(rename = "jpn")]
  Japanese,
  /// Chinese (Han-run segmentation only)
  #[serde(rename = "zho")]
  Chinese,
}

impl Language {
  /// Returns the ISO 639-3 language code.
  ///
  /// # Examples
  /// - `Language::Japanese` → `"jpn"`
  /// - `Language::Chinese` → `"zho"`
  pub fn code(&self) -> &'static str {
    match self {
      Language::Japanese => "jpn",
      Language::Chinese => "zho",
    }
  }
}

impl std::fmt::Display for Language {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.code())
  }
}

/// Top-level configuration for yomikata.
#[derive(Debug, Clone, Deserialize)]
pub struct YomikataConfig {
  /// [morphology] section
  pub morphology: MorphologyConfig,
  /// [pronunciation] section
  pub pronunciation: PronunciationConfig,
  /// [logging] section
  #[serde(default)]
  pub logging: LoggingConfig,
}

/// [morphology] section configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct MorphologyConfig {
  /// Preset dictionary type: "ipadic" | "unidic-cwj" | "unidic-csj"
  pub preset: DictionaryPreset,
  /// Dictionary cache directory.
  ///
  /// `None` lets `MorphologyDictionaryManager` pick the OS cache directory.
  #[serde(default)]
  pub cache_dir: Option<PathBuf>,
}

/// Preset dictionary type for the morphological analyzer.
///
/// `PresetDictionaryKind` from vibrato-rkyv does not implement `Deserialize`
/// and the orphan rule forbids adding it here, so configuration files use this
/// type and convert with `.into()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DictionaryPreset {
  /// IpaDic: The smallest
  Ipadic,
  /// Unidic for written language
  UnidicCwj,
  /// Unidic for spoken language
  UnidicCsj,
}

/// [pronunciation] section configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct PronunciationConfig {
  /// Path of the JmdictFurigana JSON file (prepared map or raw release array)
  pub path: PathBuf,
}

/// [logging] section configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggingConfig {
  /// Log level: "trace" | "debug" | "info" | "warn" | "error"
  #[serde(default)]
  pub level: LogLevel,
}

/// Log level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
  /// trace
  Trace,
  /// debug
  Debug,
  /// info
  #[default]
  Info,
  /// warn
  Warn,
  /// error
  Error,
}

impl LogLevel {
  /// Returns the directive string understood by `tracing_subscriber::EnvFilter`.
  pub fn as_directive(&self) -> &'static str {
    match self {
      LogLevel::Trace => "trace",
      LogLevel::Debug => "debug",
      LogLevel::Info => "info",
      LogLevel::Warn => "warn",
      LogLevel::Error => "error",
    }
  }
}

impl FromStr for LogLevel {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_lowercase().as_str() {
      "trace" => Ok(LogLevel::Trace),
      "debug" => Ok(LogLevel::Debug),
      "info" => Ok(LogLevel::Info),
      "warn" => Ok(LogLevel::Warn),
      "error" => Ok(LogLevel::Error),
      _ => Err(format!(
        "Unknown log level: {}. Valid values: trace, debug, info, warn, error",
        s
      )),
    }
  }
}

// ===== Accessor Methods =====

impl YomikataConfig {
  /// Returns the preset dictionary type to pass to `MorphologyDictionaryManager`.
  pub fn dictionary_preset(&self) -> PresetDictionaryKind {
    self.morphology.preset.into()
  }

  /// Returns the explicitly configured dictionary cache directory, if any.
  pub fn dictionary_cache_dir(&self) -> Option<&Path> {
    self.morphology.cache_dir.as_deref()
  }

  /// Returns the path of the pronunciation dictionary file.
  pub fn pronunciation_path(&self) -> &Path {
    &self.pronunciation.path
  }

  /// Returns the log level.
  pub fn log_level(&self) -> LogLevel {
    self.logging.level
  }

  /// Validates the configuration.
  ///
  /// # Validation Items
  /// - `pronunciation.path` exists and is a file
  /// - `morphology.cache_dir` exists or can be created
  ///
  /// # Errors
  /// Returns the corresponding `ConfigError` if validation fails.
  pub fn validate(&self) -> Result<(), ConfigError> {
    let path = &self.pronunciation.path;
    if !path.exists() {
      return Err(ConfigError::PronunciationDictionaryNotFound { path: path.clone() });
    }
    if !path.is_file() {
      return Err(ConfigError::PronunciationDictionaryNotAFile { path: path.clone() });
    }

    if let Some(cache_dir) = &self.morphology.cache_dir {
      if cache_dir.exists() {
        if !cache_dir.is_dir() {
          return Err(ConfigError::InvalidDictionaryCacheDir {
            path: cache_dir.clone(),
          });
        }
      } else if let Err(e) = std::fs::create_dir_all(cache_dir) {
        return Err(ConfigError::DictionaryCacheDirCreationFailed {
          path: cache_dir.clone(),
          source: Arc::new(e),
        });
      }
    }

    Ok(())
  }
}

impl From<DictionaryPreset> for PresetDictionaryKind {
  fn from(preset: DictionaryPreset) -> Self {
    match preset {
      DictionaryPreset::Ipadic => PresetDictionaryKind::Ipadic,
      DictionaryPreset::UnidicCwj => PresetDictionaryKind::UnidicCwj,
      DictionaryPreset::UnidicCsj => PresetDictionaryKind::UnidicCsj,
    }
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Test Module
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;
  use std::fs;
  use tempfile::TempDir;

  fn create_valid_config(temp_dir: &TempDir) -> YomikataConfig {
    let dict_path = temp_dir.path().join("JmdictFurigana.json");
    fs::write(&dict_path, "{}").expect("write dictionary");

    YomikataConfig {
      morphology: MorphologyConfig {
        preset: DictionaryPreset::Ipadic,
        cache_dir: Some(temp_dir.path().join("cache")),
      },
      pronunciation: PronunciationConfig { path: dict_path },
      logging: LoggingConfig::default(),
    }
  }

  #[test]
  fn language_code_returns_correct_value() {
    assert_eq!(Language::Japanese.code(), "jpn");
    assert_eq!(Language::Chinese.code(), "zho");
  }

  #[test]
  fn language_serde_uses_iso_codes() {
    let lang: Language = serde_json::from_str(r#""jpn""#).unwrap();
    assert_eq!(lang, Language::Japanese);
    assert_eq!(serde_json::to_string(&Language::Chinese).unwrap(), r#""zho""#);
    assert!(serde_json::from_str::<Language>(r#""ja""#).is_err());
  }

  #[test]
  fn validate_accepts_valid_config() {
    let temp_dir = TempDir::new().unwrap();
    let config = create_valid_config(&temp_dir);

    assert!(config.validate().is_ok());
    // missing cache_dir is created
    assert!(temp_dir.path().join("cache").is_dir());
  }

  #[test]
  fn validate_accepts_none_cache_dir() {
    let temp_dir = TempDir::new().unwrap();
    let mut config = create_valid_config(&temp_dir);
    config.morphology.cache_dir = None;

    assert!(config.validate().is_ok());
  }

  #[test]
  fn validate_rejects_missing_pronunciation_file() {
    let temp_dir = TempDir::new().unwrap();
    let mut config = create_valid_config(&temp_dir);
    config.pronunciation.path = temp_dir.path().join("missing.json");

    let result = config.validate();
    assert!(matches!(
      result,
      Err(ConfigError::PronunciationDictionaryNotFound { .. })
    ));
  }

  #[test]
  fn validate_rejects_pronunciation_path_is_directory() {
    let temp_dir = TempDir::new().unwrap();
    let mut config = create_valid_config(&temp_dir);
    config.pronunciation.path = temp_dir.path().to_path_buf();

    let result = config.validate();
    assert!(matches!(
      result,
      Err(ConfigError::PronunciationDictionaryNotAFile { .. })
    ));
  }

  #[test]
  fn validate_rejects_cache_dir_is_file() {
    let temp_dir = TempDir::new().unwrap();
    let file_path = temp_dir.path().join("not_a_dir");
    fs::write(&file_path, "x").unwrap();

    let mut config = create_valid_config(&temp_dir);
    config.morphology.cache_dir = Some(file_path);

    let result = config.validate();
    assert!(matches!(
      result,
      Err(ConfigError::InvalidDictionaryCacheDir { .. })
    ));
  }

  #[test]
  fn config_deserializes_with_default_logging() {
    let json = r#"{
      "morphology": { "preset": "unidic-cwj" },
      "pronunciation": { "path": "JmdictFurigana.json" }
    }"#;

    let config: YomikataConfig = serde_json::from_str(json).expect("should deserialize");

    assert_eq!(config.morphology.preset, DictionaryPreset::UnidicCwj);
    assert!(config.dictionary_cache_dir().is_none());
    assert_eq!(config.log_level(), LogLevel::Info);
    assert_eq!(config.pronunciation_path(), Path::new("JmdictFurigana.json"));
  }

  #[test]
  fn dictionary_preset_converts_to_preset_kind() {
    assert_eq!(
      PresetDictionaryKind::from(DictionaryPreset::Ipadic),
      PresetDictionaryKind::Ipadic
    );
    assert_eq!(
      PresetDictionaryKind::from(DictionaryPreset::UnidicCwj),
      PresetDictionaryKind::UnidicCwj
    );
    assert_eq!(
      PresetDictionaryKind::from(DictionaryPreset::UnidicCsj),
      PresetDictionaryKind::UnidicCsj
    );
  }

  #[test]
  fn log_level_directive() {
    assert_eq!(LogLevel::Warn.as_directive(), "warn");
    assert_eq!(LogLevel::default().as_directive(), "info");
  }

  #[test]
  fn log_level_from_str() {
    assert_eq!("debug".parse::<LogLevel>().unwrap(), LogLevel::Debug);
    assert_eq!(" WARN ".parse::<LogLevel>().unwrap(), LogLevel::Warn);

    let err = "verbose".parse::<LogLevel>().unwrap_err();
    assert!(err.contains("verbose"));
  }
}
