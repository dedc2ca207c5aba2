use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use super::{decode, CurrencyStorage, StorageError, CURRENCIES_KEY};
use crate::currency::CurrencyInfo;

/// Storage backed by a JSON document on disk.
///
/// The document is an object mapping storage keys to values; the collection
/// lives under [`CURRENCIES_KEY`]. Writes go to a sibling temp file that is
/// then renamed over the document, so readers never see a torn file.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole document. A missing file reads as `None`.
    fn read_document(&self) -> Result<Option<Map<String, Value>>, StorageError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(StorageError::Read {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        serde_json::from_str(&content)
            .map(Some)
            .map_err(|source| StorageError::Malformed {
                key: CURRENCIES_KEY.to_string(),
                source,
            })
    }

    fn write_document(&self, document: &Map<String, Value>) -> Result<(), StorageError> {
        let write_err = |source: std::io::Error| StorageError::Write {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(write_err)?;
        }

        let payload = serde_json::to_string_pretty(document).map_err(StorageError::Encode)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, payload).map_err(write_err)?;
        fs::rename(&tmp, &self.path).map_err(write_err)
    }
}

impl CurrencyStorage for JsonFileStorage {
    fn load(&self) -> Result<Option<Vec<CurrencyInfo>>, StorageError> {
        let Some(mut document) = self.read_document()? else {
            return Ok(None);
        };
        match document.remove(CURRENCIES_KEY) {
            Some(payload) => decode(payload),
            None => Ok(None),
        }
    }

    fn save(&self, records: &[CurrencyInfo]) -> Result<(), StorageError> {
        // Other keys survive; only a document that fails to parse is replaced.
        let mut document = match self.read_document() {
            Ok(Some(document)) => document,
            Ok(None) => Map::new(),
            Err(err @ StorageError::Malformed { .. }) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %err,
                    "Discarding malformed storage document"
                );
                Map::new()
            }
            Err(err) => return Err(err),
        };

        let payload = serde_json::to_value(records).map_err(StorageError::Encode)?;
        document.insert(CURRENCIES_KEY.to_string(), payload);
        self.write_document(&document)
    }

    fn clear_all(&self) -> Result<(), StorageError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StorageError::Write {
                path: self.path.clone(),
                source,
            }),
        }
    }
}
