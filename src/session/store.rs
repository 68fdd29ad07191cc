//! Persisted key-value store
//!
//! A flat TOML table on disk, holding values such as the bearer token under
//! the `token` key.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use super::SessionError;

/// Key under which the bearer token is stored
pub const TOKEN_KEY: &str = "token";

/// File-backed string map
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl SessionStore {
    /// Open the store at `path`; a missing file is an empty store
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, SessionError> {
        let path = path.into();

        let entries = match std::fs::read_to_string(&path) {
            Ok(content) => toml::from_str(&content).map_err(|e| SessionError::Parse {
                path: path.clone(),
                error: e.to_string(),
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                return Err(SessionError::Io {
                    path,
                    error: e.to_string(),
                })
            }
        };

        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Set `key` and write the store back to disk
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), SessionError> {
        self.entries.insert(key.to_string(), value.to_string());
        self.save()
    }

    /// Remove `key` and write the store back to disk
    pub fn remove(&mut self, key: &str) -> Result<Option<String>, SessionError> {
        let previous = self.entries.remove(key);
        self.save()?;
        Ok(previous)
    }

    fn save(&self) -> Result<(), SessionError> {
        let io_err = |e: std::io::Error| SessionError::Io {
            path: self.path.clone(),
            error: e.to_string(),
        };

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(io_err)?;
            }
        }

        let content = toml::to_string(&self.entries)
            .map_err(|e| SessionError::Serialize(e.to_string()))?;
        std::fs::write(&self.path, content).map_err(io_err)?;

        tracing::debug!("Session store written to {:?}", self.path);
        Ok(())
    }
}
