//! # Persistence Boundary
//!
//! Snapshot storage for the tree and clipboard in a textual key-value store.
//!
//! ## Responsibility
//! - Define the [`KvStore`] contract a host store implements
//! - Encode and decode snapshots as JSON under the configured keys
//!
//! ## Stores
//!
//! | Store | Backing |
//! |-------|---------|
//! | [`MemoryStore`] | `HashMap`, lost on drop |
//! | [`FileStore`] | One `<key>.json` file per key in a directory |
//!
//! The engine never calls into a store itself. The host (or
//! [`Persisted`](crate::Persisted)) saves after each successful command.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};

use crate::{Clipboard, Tree, VfsConfig, VfsError};

/// A textual key-value store.
///
/// # Object Safety
///
/// This trait is object-safe and can be used as `dyn KvStore`.
pub trait KvStore {
    /// Read the value under `key`, or `None` if it was never written.
    fn get(&self, key: &str) -> Result<Option<String>, VfsError>;

    /// Write `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), VfsError>;

    /// Remove `key`. Removing a missing key is not an error.
    fn remove(&mut self, key: &str) -> Result<(), VfsError>;
}

impl<S: KvStore + ?Sized> KvStore for &mut S {
    fn get(&self, key: &str) -> Result<Option<String>, VfsError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), VfsError> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), VfsError> {
        (**self).remove(key)
    }
}

/// JSON helpers for any [`KvStore`].
pub trait StoreExt: KvStore {
    /// Read `key` and deserialize it as JSON.
    ///
    /// # Errors
    ///
    /// - [`VfsError::Deserialization`] if the stored text is not valid for `T`
    fn get_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, VfsError> {
        match self.get(key)? {
            Some(text) => serde_json::from_str(&text)
                .map(Some)
                .map_err(|e| VfsError::Deserialization(format!("{key}: {e}"))),
            None => Ok(None),
        }
    }

    /// Serialize `value` as JSON and write it under `key`.
    ///
    /// # Errors
    ///
    /// - [`VfsError::Serialization`] if `value` cannot be encoded
    fn set_json<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> Result<(), VfsError> {
        let text = serde_json::to_string(value)
            .map_err(|e| VfsError::Serialization(format!("{key}: {e}")))?;
        self.set(key, &text)
    }
}

impl<S: KvStore + ?Sized> StoreExt for S {}

/// Load the tree and clipboard snapshots.
///
/// Missing keys give an empty tree and an empty clipboard.
///
/// # Errors
///
/// - [`VfsError::Deserialization`] if a stored snapshot is malformed
/// - Any error the store reports
pub fn load_state<S: KvStore + ?Sized>(
    store: &S,
    config: &VfsConfig,
) -> Result<(Tree, Clipboard), VfsError> {
    let tree: Tree = store.get_json(&config.tree_key)?.unwrap_or_default();
    let clipboard: Clipboard = store.get_json(&config.clipboard_key)?.unwrap_or_default();
    tracing::debug!(
        nodes = tree.node_count(),
        clipboard = clipboard.is_armed(),
        "loaded snapshot"
    );
    Ok((tree, clipboard))
}

/// Write the tree and clipboard snapshots.
///
/// # Errors
///
/// - [`VfsError::Serialization`] if a snapshot cannot be encoded
/// - Any error the store reports
pub fn save_state<S: KvStore + ?Sized>(
    store: &mut S,
    config: &VfsConfig,
    tree: &Tree,
    clipboard: &Clipboard,
) -> Result<(), VfsError> {
    store.set_json(&config.tree_key, tree)?;
    store.set_json(&config.clipboard_key, clipboard)?;
    tracing::trace!(nodes = tree.node_count(), "saved snapshot");
    Ok(())
}

/// In-memory store, the equivalent of a browser's local storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, VfsError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), VfsError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), VfsError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Directory-backed store writing one `<key>.json` file per key.
///
/// Writes go to a temporary file first and are renamed into place, so a
/// crash mid-write never leaves a truncated snapshot.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// A store rooted at `dir`. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The backing directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn key_path(&self, key: &str) -> Result<PathBuf, VfsError> {
        if key.is_empty() || key.contains(['/', '\\']) || key.starts_with('.') {
            return Err(VfsError::Store(format!("invalid key: {key:?}")));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl KvStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, VfsError> {
        let path = self.key_path(key)?;
        match std::fs::read_to_string(&path) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(VfsError::Io {
                operation: "read",
                path,
                source,
            }),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), VfsError> {
        let path = self.key_path(key)?;
        std::fs::create_dir_all(&self.dir).map_err(|source| VfsError::Io {
            operation: "create_dir_all",
            path: self.dir.clone(),
            source,
        })?;
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, value).map_err(|source| VfsError::Io {
            operation: "write",
            path: tmp.clone(),
            source,
        })?;
        std::fs::rename(&tmp, &path).map_err(|source| VfsError::Io {
            operation: "rename",
            path,
            source,
        })
    }

    fn remove(&mut self, key: &str) -> Result<(), VfsError> {
        let path = self.key_path(key)?;
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(VfsError::Io {
                operation: "remove",
                path,
                source,
            }),
        }
    }
}
