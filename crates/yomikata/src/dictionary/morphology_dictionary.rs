//! Morphological dictionary management.
//!
//! Loads the vibrato-rkyv system dictionary used by [`VibratoSegmenter`](crate::segmenter::VibratoSegmenter).
//! Preset dictionaries are downloaded on first use and served from the cache directory afterwards;
//! a local compiled dictionary file can be used instead.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

use tracing::info;
use vibrato_rkyv::Dictionary;
use vibrato_rkyv::dictionary::{LoadMode, PresetDictionaryKind};

use crate::config::YomikataConfig;
use crate::errors::DictionaryError;

/// Where the dictionary comes from
#[derive(Debug, Clone)]
enum DictionarySource {
  /// Preset downloaded into `<cache_dir>/<preset name>`
  Preset(PresetDictionaryKind),
  /// Compiled dictionary file on disk
  Local(PathBuf),
}

/// Loads and caches the morphological dictionary.
///
/// The dictionary is loaded at most once; later calls to [`load`](Self::load) return the
/// same `Arc<Dictionary>` (or the same error).
pub struct MorphologyDictionaryManager {
  cache_dir: PathBuf,
  source: DictionarySource,
  dictionary: OnceLock<Result<Arc<Dictionary>, DictionaryError>>,
}

impl MorphologyDictionaryManager {
  /// Manager for a preset dictionary cached under the OS cache directory.
  ///
  /// # Errors
  /// `DictionaryError::CacheDirNotFound` if the OS has no cache directory.
  pub fn with_preset(preset_kind: PresetDictionaryKind) -> Result<Self, DictionaryError> {
    Ok(Self::with_preset_in(preset_kind, default_cache_dir()?))
  }

  /// Manager for a preset dictionary cached under `cache_dir`.
  pub fn with_preset_in<P: Into<PathBuf>>(preset_kind: PresetDictionaryKind, cache_dir: P) -> Self {
    Self {
      cache_dir: cache_dir.into(),
      source: DictionarySource::Preset(preset_kind),
      dictionary: OnceLock::new(),
    }
  }

  /// Manager for a local compiled dictionary file.
  ///
  /// # Errors
  /// `DictionaryError::DictionaryNotFound` if `path` is not an existing file.
  pub fn from_local_path<P: AsRef<Path>>(path: P) -> Result<Self, DictionaryError> {
    let path = path.as_ref().to_path_buf();
    if !path.is_file() {
      return Err(DictionaryError::DictionaryNotFound(path));
    }

    let cache_dir = path.parent().map(Path::to_path_buf).unwrap_or_else(|| PathBuf::from("."));

    Ok(Self {
      cache_dir,
      source: DictionarySource::Local(path),
      dictionary: OnceLock::new(),
    })
  }

  /// Manager described by the `[morphology]` section of `config`.
  ///
  /// # Errors
  /// Same as [`with_preset`](Self::with_preset) when no cache directory is configured.
  pub fn from_config(config: &YomikataConfig) -> Result<Self, DictionaryError> {
    let kind = config.dictionary_preset();
    match config.dictionary_cache_dir() {
      Some(cache_dir) => Ok(Self::with_preset_in(kind, cache_dir)),
      None => Self::with_preset(kind),
    }
  }

  /// Returns the path of the cache directory
  pub fn cache_dir(&self) -> &Path {
    &self.cache_dir
  }

  /// Whether a preset dictionary has already been downloaded into the cache directory.
  ///
  /// Always true for local dictionaries.
  pub fn is_cached(&self) -> bool {
    match &self.source {
      DictionarySource::Preset(kind) => self.cache_dir.join(kind.name()).exists(),
      DictionarySource::Local(path) => path.is_file(),
    }
  }

  /// Loads the dictionary, downloading a preset on first use.
  ///
  /// # Errors
  /// Returns the (cached) `DictionaryError` of the first load attempt.
  pub fn load(&self) -> Result<Arc<Dictionary>, DictionaryError> {
    self.dictionary.get_or_init(|| self.load_inner().map(Arc::new)).clone()
  }

  fn load_inner(&self) -> Result<Dictionary, DictionaryError> {
    match &self.source {
      DictionarySource::Local(path) => {
        info!(path = %path.display(), "Loading local morphological dictionary");
        Dictionary::from_path(path, LoadMode::TrustCache)
          .map_err(|e| DictionaryError::VibratoLoad(Arc::new(e)))
      }
      DictionarySource::Preset(kind) => {
        std::fs::create_dir_all(&self.cache_dir)
          .map_err(|e| DictionaryError::CacheDirCreationFailed(Arc::new(e)))?;

        let dict_dir = self.cache_dir.join(kind.name());
        info!(preset = kind.name(), dir = %dict_dir.display(), "Loading preset morphological dictionary");
        Dictionary::from_preset_with_download(*kind, &dict_dir)
          .map_err(|e| DictionaryError::PresetDictDownloadFailed(Arc::new(e)))
      }
    }
  }
}

/// Returns the default cache directory path according to the OS
///
/// | OS      | Example Path                                  |
/// |---------|-----------------------------------------------|
/// | Linux   | `~/.cache/yomikata/dict`                      |
/// | macOS   | `~/Library/Caches/yomikata/dict`              |
/// | Windows | `C:\Users\{user}\AppData\Local\yomikata\dict` |
fn default_cache_dir() -> Result<PathBuf, DictionaryError> {
  let base = dirs::cache_dir().ok_or(DictionaryError::CacheDirNotFound)?;

  Ok(base.join("yomikata").join("dict"))
}

// vibrato_rkyv::Dictionary does not implement Debug
impl fmt::Debug for MorphologyDictionaryManager {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("MorphologyDictionaryManager")
      .field("cache_dir", &self.cache_dir)
      .field("source", &self.source)
      .field("dictionary_initialized", &self.dictionary.get().is_some())
      .finish()
  }
}
