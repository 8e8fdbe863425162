//! Age-aware download and local file cache for catalog JSON dumps.
//!
//! Catalog files are fetched from the CSGO-API mirror on first access and kept
//! on disk per language. A cached file older than `max_age` is re-downloaded
//! on the next access unless the cache is offline.

use crate::config;
use crate::error::{CatalogError, Result};
use reqwest::blocking::Client;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

/// Downloads and caches catalog JSON files.
pub struct CacheManager {
    /// Directory where cached files are stored.
    pub cache_dir: PathBuf,
    /// If true, never download (use cached files only).
    pub offline: bool,
    /// Catalog language code, e.g. `"en"`.
    pub language: String,
    timeout: Duration,
    max_age: Duration,
    client: Option<Client>,
}

impl CacheManager {
    /// Create a new cache manager.
    ///
    /// If `cache_dir` is `None`, uses the platform-appropriate default cache directory.
    /// Creates the cache directory if it does not exist.
    pub fn new(
        cache_dir: Option<PathBuf>,
        offline: bool,
        timeout: Duration,
        max_age: Duration,
        language: &str,
    ) -> Result<Self> {
        if language.is_empty() || !language.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
            return Err(CatalogError::InvalidArgument(format!(
                "Invalid catalog language: {:?}",
                language
            )));
        }
        let dir = cache_dir.unwrap_or_else(config::default_cache_dir);
        fs::create_dir_all(&dir)?;
        Ok(Self {
            cache_dir: dir,
            offline,
            language: language.to_string(),
            timeout,
            max_age,
            client: None,
        })
    }

    /// Lazy HTTP client, created on first use.
    fn client(&mut self) -> Result<Client> {
        if let Some(client) = &self.client {
            return Ok(client.clone());
        }
        let client = Client::builder()
            .timeout(self.timeout)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;
        self.client = Some(client.clone());
        Ok(client)
    }

    /// Local path a logical file name is cached under.
    pub fn local_path(&self, filename: &str) -> PathBuf {
        self.cache_dir.join(&self.language).join(filename)
    }

    /// Check whether a cached file is missing or older than `max_age`.
    ///
    /// A file whose modification time cannot be read counts as stale.
    pub fn is_stale(&self, path: &Path) -> bool {
        let modified = match fs::metadata(path).and_then(|m| m.modified()) {
            Ok(modified) => modified,
            Err(_) => return true,
        };
        match SystemTime::now().duration_since(modified) {
            Ok(age) => age > self.max_age,
            // Modified in the future (clock skew): treat as fresh.
            Err(_) => false,
        }
    }

    /// Download a single file from the API mirror.
    ///
    /// Downloads to a temp file first and renames on success, so an
    /// interrupted download never leaves a corrupt partial file behind.
    fn download_file(&mut self, filename: &str, dest: &Path) -> Result<()> {
        let url = format!("{}/{}/{}", config::API_BASE, self.language, filename);
        log::info!("Downloading {}", url);

        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }

        let tmp_dest = dest.with_extension("json.tmp");

        let client = self.client()?;
        let result = (|| -> Result<()> {
            let resp = client.get(&url).send()?.error_for_status()?;
            let bytes = resp.bytes()?;
            fs::write(&tmp_dest, &bytes)?;
            fs::rename(&tmp_dest, dest)?;
            Ok(())
        })();

        if result.is_err() {
            let _ = fs::remove_file(&tmp_dest);
        }

        result
    }

    /// Ensure a JSON file is cached locally, downloading if needed.
    ///
    /// # Arguments
    ///
    /// * `name` - Logical file name (e.g. `"crates"`, `"skins"`).
    ///
    /// # Returns
    ///
    /// Local filesystem path to the cached JSON file.
    pub fn ensure_json(&mut self, name: &str) -> Result<PathBuf> {
        let json_files = config::json_files();
        let filename = *json_files.get(name).ok_or_else(|| {
            CatalogError::NotFound(format!("Unknown catalog file: {}", name))
        })?;

        let local_path = self.local_path(filename);

        if self.is_stale(&local_path) {
            if self.offline {
                if local_path.exists() {
                    log::debug!("Offline: using stale {}", local_path.display());
                    return Ok(local_path);
                }
                return Err(CatalogError::NotFound(format!(
                    "Catalog file {} not cached and offline mode is enabled",
                    filename
                )));
            }
            if let Err(e) = self.download_file(filename, &local_path) {
                // A stale copy beats no data when the mirror is unreachable.
                if local_path.exists() {
                    log::warn!("Refreshing {} failed, serving stale copy: {}", filename, e);
                    return Ok(local_path);
                }
                return Err(e);
            }
        }

        Ok(local_path)
    }

    /// Load and parse a cached JSON file.
    ///
    /// If the cached file is corrupt (truncated download, disk error),
    /// it is deleted automatically so the next call re-downloads a fresh copy.
    pub fn load_json(&mut self, name: &str) -> Result<serde_json::Value> {
        let path = self.ensure_json(name)?;
        let contents = fs::read_to_string(&path)?;

        match serde_json::from_str(&contents) {
            Ok(value) => Ok(value),
            Err(e) => {
                log::warn!("Corrupt cache file {}: {} -- removing", path.display(), e);
                let _ = fs::remove_file(&path);
                Err(CatalogError::NotFound(format!(
                    "Cache file '{}' was corrupt and has been removed. \
                     Retry to re-download. Original error: {}",
                    path.file_name()
                        .and_then(|n| n.to_str())
                        .unwrap_or("unknown"),
                    e
                )))
            }
        }
    }

    /// Remove all cached files and recreate the cache directory.
    pub fn clear(&self) -> Result<()> {
        if self.cache_dir.exists() {
            fs::remove_dir_all(&self.cache_dir)?;
            fs::create_dir_all(&self.cache_dir)?;
        }
        Ok(())
    }
}
