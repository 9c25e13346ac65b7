/// High-score persistence: one JSON integer in one file.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::StoreError;

#[derive(Clone, Debug)]
pub struct HighScoreStore {
    path: PathBuf,
}

impl HighScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        HighScoreStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<u32, StoreError> {
        let raw = fs::read_to_string(&self.path).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;
        serde_json::from_str(raw.trim()).map_err(|source| StoreError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    /// Missing or unreadable files start the session from zero.
    pub fn load_or_default(&self) -> u32 {
        match self.load() {
            Ok(score) => score,
            Err(e) if e.is_not_found() => {
                tracing::info!("no high-score file at {}, starting from 0", self.path.display());
                0
            }
            Err(e) => {
                tracing::warn!("{e}; starting from 0");
                0
            }
        }
    }

    /// Overwrite the file with `score`, creating the parent directory.
    pub fn save(&self, score: u32) -> Result<(), StoreError> {
        let io_err = |source: std::io::Error| StoreError::Io {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let body = serde_json::to_string(&score).map_err(|source| StoreError::Parse {
            path: self.path.clone(),
            source,
        })?;
        fs::write(&self.path, body).map_err(io_err)
    }
}
