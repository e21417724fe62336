use crate::errors::StorageError;
use crate::ledger::{LedgerStore, MemoryStore, WriteBatch};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::error;

pub type Document = BTreeMap<String, Value>;

pub async fn load_document(path: &Path) -> Document {
    match fs::read(path).await {
        Ok(bytes) => parse_document(&bytes),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Document::default(),
        Err(err) => {
            error!("failed to read data file: {err}");
            Document::default()
        }
    }
}

fn parse_document(bytes: &[u8]) -> Document {
    match serde_json::from_slice(bytes) {
        Ok(document) => document,
        Err(err) => {
            error!("failed to parse data file: {err}");
            Document::default()
        }
    }
}

fn read_document_sync(path: &Path) -> Option<Document> {
    match std::fs::read(path) {
        Ok(bytes) => Some(parse_document(&bytes)),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Some(Document::default()),
        Err(err) => {
            error!("failed to read data file: {err}");
            None
        }
    }
}

/// Writes to a sibling temp file and renames it over the target, so readers
/// never observe a half-written document.
fn persist_document(path: &Path, document: &Document) -> Result<(), StorageError> {
    let payload = serde_json::to_vec_pretty(document).map_err(|source| StorageError::Encode {
        key: path.display().to_string(),
        source,
    })?;
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);
    std::fs::write(&tmp, payload)?;
    std::fs::rename(&tmp, path)?;
    Ok(())
}

/// The whole key space lives in one JSON document on disk. Reads are served
/// from memory; every write rewrites the document before it is committed
/// to memory.
pub struct FileStore {
    path: PathBuf,
    cache: MemoryStore,
}

impl FileStore {
    pub fn new(path: PathBuf, document: Document) -> Self {
        Self {
            path,
            cache: MemoryStore::from_map(document),
        }
    }

    pub async fn open(path: PathBuf) -> Self {
        let document = load_document(&path).await;
        Self::new(path, document)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Adopts whatever another writer left on disk and returns the keys whose
    /// values changed. Last writer wins; nothing is merged.
    pub fn refresh(&mut self) -> Vec<String> {
        let Some(on_disk) = read_document_sync(&self.path) else {
            return Vec::new();
        };
        let current = self.cache.as_map();
        let mut changed: Vec<String> = on_disk
            .iter()
            .filter(|(key, value)| current.get(*key) != Some(*value))
            .map(|(key, _)| key.clone())
            .collect();
        changed.extend(
            current
                .keys()
                .filter(|key| !on_disk.contains_key(*key))
                .cloned(),
        );
        if !changed.is_empty() {
            self.cache = MemoryStore::from_map(on_disk);
        }
        changed
    }
}

impl LedgerStore for FileStore {
    fn read(&self, key: &str) -> Option<Value> {
        self.cache.read(key)
    }

    fn write(&mut self, batch: WriteBatch) -> Result<(), StorageError> {
        let mut next = self.cache.clone();
        next.apply(batch);
        if let Err(err) = persist_document(&self.path, next.as_map()) {
            error!("failed to persist {}: {err}", self.path.display());
            return Err(err);
        }
        self.cache = next;
        Ok(())
    }
}
