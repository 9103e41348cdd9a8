/*
    repository.rs - Snapshot persistence seam

    Stores serialize their entire state to a named blob on every
    mutation and read it back once at startup. The repository trait is
    that contract; stores never touch the filesystem directly, so tests
    run against the in-memory implementation without any I/O.

    Two independent keys exist: "auth" and "posts". There is no schema
    versioning or migration; a structurally incompatible blob surfaces
    as a decode error at load time.
*/

use crate::feed_store::store::errors::{StoreError, StoreResult};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::fs::{create_dir_all, File};
use std::io::{Read, Write};
use std::path::PathBuf;
use std::sync::{PoisonError, RwLock};

/// Blob key for the auth store snapshot
pub const AUTH_SNAPSHOT_KEY: &str = "auth";

/// Blob key for the post store snapshot
pub const POSTS_SNAPSHOT_KEY: &str = "posts";

/// Helper to convert poison errors into StoreError
fn handle_poison<T>(_err: PoisonError<T>) -> StoreError {
    StoreError::Storage("Lock poisoned: a thread panicked while holding the lock".to_string())
}

/// Load/save of named snapshot blobs
pub trait SnapshotRepository {
    /// Read a blob, `None` if the key has never been written
    fn load(&self, key: &str) -> StoreResult<Option<Vec<u8>>>;

    /// Overwrite a blob
    fn save(&self, key: &str, data: &[u8]) -> StoreResult<()>;
}

/// Serialize a snapshot and write it under `key`
pub fn save_snapshot<T: Serialize>(
    repo: &dyn SnapshotRepository,
    key: &str,
    snapshot: &T,
) -> StoreResult<()> {
    let data = serde_json::to_vec(snapshot)?;
    repo.save(key, &data)
}

/// Read and decode the snapshot under `key`, `None` if absent
pub fn load_snapshot<T: DeserializeOwned>(
    repo: &dyn SnapshotRepository,
    key: &str,
) -> StoreResult<Option<T>> {
    match repo.load(key)? {
        Some(data) => {
            let snapshot = serde_json::from_slice(&data)
                .map_err(|e| StoreError::CorruptedSnapshot(e.to_string()))?;
            Ok(Some(snapshot))
        }
        None => Ok(None),
    }
}

/// In-memory repository for tests and ephemeral runs
#[derive(Default)]
pub struct MemoryRepository {
    blobs: RwLock<HashMap<String, Vec<u8>>>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SnapshotRepository for MemoryRepository {
    fn load(&self, key: &str) -> StoreResult<Option<Vec<u8>>> {
        Ok(self.blobs.read().map_err(handle_poison)?.get(key).cloned())
    }

    fn save(&self, key: &str, data: &[u8]) -> StoreResult<()> {
        self.blobs
            .write()
            .map_err(handle_poison)?
            .insert(key.to_string(), data.to_vec());
        Ok(())
    }
}

/// File-backed repository: one `<key>.json` file per blob.
///
/// Writes go to a temp file first and are renamed into place, so a
/// crash mid-write never leaves a torn snapshot behind.
pub struct FileRepository {
    data_dir: PathBuf,
}

impl FileRepository {
    pub fn new(data_dir: PathBuf) -> StoreResult<Self> {
        create_dir_all(&data_dir)?;
        Ok(FileRepository { data_dir })
    }

    fn blob_path(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{}.json", key))
    }
}

impl SnapshotRepository for FileRepository {
    fn load(&self, key: &str) -> StoreResult<Option<Vec<u8>>> {
        let path = self.blob_path(key);
        if !path.exists() {
            return Ok(None);
        }

        let mut file = File::open(path)?;
        let mut data = Vec::new();
        file.read_to_end(&mut data)?;
        Ok(Some(data))
    }

    fn save(&self, key: &str, data: &[u8]) -> StoreResult<()> {
        let temp_path = self.data_dir.join(format!("{}.json.tmp", key));
        let mut file = File::create(&temp_path)?;
        file.write_all(data)?;
        file.sync_all()?;
        drop(file);

        std::fs::rename(temp_path, self.blob_path(key))?;
        Ok(())
    }
}
