//! File-backed storage slot for the custom exchange rate
//!
//! Provides a `RateStore` that keeps the rate as a decimal string inside a
//! small JSON document, together with the time it was saved.

use chrono::{DateTime, Utc};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Name of the storage slot holding the custom rate
pub const RATE_SLOT: &str = "custom_exchange_rate";

/// Contents of the rate slot as stored on disk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredRate {
    /// The rate as a decimal string, exactly as it will be parsed back
    pub rate: String,
    /// When the rate was saved
    pub saved_at: DateTime<Utc>,
}

/// Reads and writes the rate slot on disk
///
/// The slot lives in the platform config directory (`~/.config/tripview/` on
/// Linux) unless a directory is given explicitly.
#[derive(Debug, Clone)]
pub struct RateStore {
    /// Directory holding the slot file
    dir: PathBuf,
}

impl RateStore {
    /// Creates a RateStore in the platform config directory
    ///
    /// Returns `None` if the directory cannot be determined (e.g., no home directory).
    pub fn new() -> Option<Self> {
        let project_dirs = ProjectDirs::from("", "", "tripview")?;
        Some(Self {
            dir: project_dirs.config_dir().to_path_buf(),
        })
    }

    /// Creates a RateStore rooted at a custom directory
    pub fn with_dir(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Directory holding the slot file
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn slot_path(&self) -> PathBuf {
        self.dir.join(format!("{}.json", RATE_SLOT))
    }

    /// Persists `rate` into the slot, replacing any previous value
    ///
    /// The rate is written with Rust's shortest round-trip formatting so that
    /// reading it back yields the identical `f64`.
    pub fn save_rate(&self, rate: f64) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;

        let entry = StoredRate {
            rate: rate.to_string(),
            saved_at: Utc::now(),
        };

        let json = serde_json::to_string_pretty(&entry)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        fs::write(self.slot_path(), json)
    }

    /// Reads the slot
    ///
    /// Returns `None` if the slot doesn't exist or cannot be parsed. A slot
    /// holding just a bare decimal is accepted too, stamped with the file's
    /// modification time. The rate's range is not validated here.
    pub fn load(&self) -> Option<StoredRate> {
        let path = self.slot_path();
        let content = fs::read_to_string(&path).ok()?;
        if let Ok(entry) = serde_json::from_str(&content) {
            return Some(entry);
        }

        let bare = content.trim();
        bare.parse::<f64>().ok()?;
        let saved_at = fs::metadata(&path)
            .and_then(|meta| meta.modified())
            .map(DateTime::<Utc>::from)
            .unwrap_or_else(|_| Utc::now());

        Some(StoredRate {
            rate: bare.to_string(),
            saved_at,
        })
    }

    /// Removes the slot. Removing an absent slot is not an error.
    pub fn clear(&self) -> io::Result<()> {
        match fs::remove_file(self.slot_path()) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e),
        }
    }
}
