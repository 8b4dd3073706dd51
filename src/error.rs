//! Error types for the tree engine and its persistence boundary.

use std::path::PathBuf;

use crate::NodePath;

/// Engine error type with contextual variants.
///
/// Every variant is a recoverable, caller-visible condition. A failed
/// operation leaves the tree and the clipboard exactly as they were.
///
/// # Examples
///
/// ```rust
/// use treevfs::{NodePath, VfsError};
///
/// let err = VfsError::NotFound {
///     path: NodePath::from(["docs"]),
///     name: "report.txt".into(),
/// };
/// assert_eq!(err.to_string(), "not found: report.txt in /docs");
/// ```
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum VfsError {
    // Resolution errors
    /// A path segment does not exist or names a file instead of a folder.
    #[error("path not found: {path}")]
    PathNotFound {
        /// The container path that failed to resolve.
        path: NodePath,
    },

    /// The folder exists but holds no entry with this name.
    #[error("not found: {name} in {path}")]
    NotFound {
        /// The folder that was searched.
        path: NodePath,
        /// The missing entry name.
        name: String,
    },

    /// Expected a file but the entry is a folder.
    #[error("not a file: {name} in {path}")]
    NotAFile {
        /// The folder holding the entry.
        path: NodePath,
        /// The entry name.
        name: String,
    },

    // Naming errors
    /// A sibling with the same name already exists.
    #[error("{operation}: name collision: {name} in {path}")]
    NameCollision {
        /// The folder where the collision happened.
        path: NodePath,
        /// The colliding name.
        name: String,
        /// The operation that failed.
        operation: &'static str,
    },

    /// The name cannot be used for an entry.
    #[error("invalid name {name:?}: {reason}")]
    InvalidName {
        /// The rejected name.
        name: String,
        /// Why it was rejected.
        reason: &'static str,
    },

    // Clipboard errors
    /// Paste was requested with nothing on the clipboard.
    #[error("clipboard is empty")]
    EmptyClipboard,

    /// A copied entry was pasted back into the folder it came from.
    #[error("paste: copy into its own folder: {name} in {path}")]
    SameLocationCopy {
        /// The source (and target) folder.
        path: NodePath,
        /// The copied entry name.
        name: String,
    },

    /// A cut folder was pasted into itself or one of its descendants.
    #[error("paste: cannot move {name} into itself: {path}")]
    PasteIntoSelf {
        /// The requested target folder.
        path: NodePath,
        /// The cut entry name.
        name: String,
    },

    // Persistence errors
    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Deserialization error.
    #[error("deserialization error: {0}")]
    Deserialization(String),

    /// Key-value store error.
    #[error("store error: {0}")]
    Store(String),

    /// I/O error with context.
    #[error("{operation} failed for {path}: {source}")]
    Io {
        /// The operation that failed.
        operation: &'static str,
        /// The file involved in the operation.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl VfsError {
    /// Returns `true` for errors raised by the tree engine itself,
    /// as opposed to the persistence boundary.
    pub fn is_engine_error(&self) -> bool {
        !matches!(
            self,
            VfsError::Serialization(_)
                | VfsError::Deserialization(_)
                | VfsError::Store(_)
                | VfsError::Io { .. }
        )
    }
}
