//! JSON file backend.
//!
//! The document lives at `<dir>/biomarker-storage.json`. Writes go to a
//! temp file that is synced and renamed over the target, so a crash never
//! leaves a half-written document behind.

use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use vitals_model::BiomarkerMapping;

use super::Persistence;
use crate::envelope::{CURRENT_SCHEMA_VERSION, STORAGE_NAME, StorageEnvelope, VersionProbe};
use crate::error::{PersistenceError, Result};

#[derive(Debug, Clone)]
pub struct JsonFileBackend {
    path: PathBuf,
}

impl JsonFileBackend {
    /// Backend storing under `dir`. The directory is created on first save.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(format!("{STORAGE_NAME}.json")),
        }
    }

    /// Backend storing at an explicit file path.
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Persistence for JsonFileBackend {
    fn load(&self) -> Result<Option<BiomarkerMapping>> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("No biomarker storage at {}", self.path.display());
                return Ok(None);
            }
            Err(e) => {
                return Err(PersistenceError::Io {
                    operation: "read",
                    path: self.path.clone(),
                    source: e,
                });
            }
        };
        let data = parse_document(&text, &self.path)?;
        tracing::info!("Loaded biomarker storage from {}", self.path.display());
        Ok(data)
    }

    fn save(&mut self, data: Option<&BiomarkerMapping>) -> Result<()> {
        let envelope = StorageEnvelope::new(data.cloned());
        let bytes = serde_json::to_vec_pretty(&envelope)
            .map_err(|e| PersistenceError::Serialization { source: e })?;
        write_atomic(&self.path, &bytes)?;
        tracing::info!("Saved biomarker storage to {}", self.path.display());
        Ok(())
    }
}

fn parse_document(text: &str, path: &Path) -> Result<Option<BiomarkerMapping>> {
    let probe: VersionProbe =
        serde_json::from_str(text).map_err(|e| PersistenceError::InvalidFormat {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

    if probe.version > CURRENT_SCHEMA_VERSION {
        return Err(PersistenceError::UnsupportedVersion {
            found: probe.version,
            max_supported: CURRENT_SCHEMA_VERSION,
            path: path.to_path_buf(),
        });
    }

    let envelope: StorageEnvelope =
        serde_json::from_str(text).map_err(|e| PersistenceError::Deserialization {
            path: path.to_path_buf(),
            source: e,
        })?;
    Ok(envelope.into_mapping())
}

fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let temp_path = path.with_extension("json.tmp");

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| PersistenceError::Io {
            operation: "create directory",
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    let mut file = File::create(&temp_path).map_err(|e| PersistenceError::Io {
        operation: "create",
        path: temp_path.clone(),
        source: e,
    })?;

    file.write_all(bytes).map_err(|e| PersistenceError::Io {
        operation: "write",
        path: temp_path.clone(),
        source: e,
    })?;

    file.sync_all().map_err(|e| PersistenceError::Io {
        operation: "sync",
        path: temp_path.clone(),
        source: e,
    })?;

    fs::rename(&temp_path, path).map_err(|e| PersistenceError::AtomicWriteFailed {
        temp_path: temp_path.clone(),
        target_path: path.to_path_buf(),
        source: e,
    })
}
