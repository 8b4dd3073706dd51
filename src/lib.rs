//! # treevfs
//!
//! An in-memory hierarchical virtual filesystem: folders and text files
//! addressed by path, with create, rename, delete, edit, copy, cut, paste and
//! an ancestry-preserving name search.
//!
//! The engine is a pure state-transition surface. It owns the tree and the
//! clipboard, never performs I/O, and leaves persistence to the host (or to
//! the [`PersistLayer`] wrapper).
//!
//! ---
//!
//! ## Quick Start
//!
//! ```rust
//! use treevfs::{NodeKind, NodePath, TreeRead, TreeTransfer, TreeWrite, VfsError, VirtualFs};
//!
//! let mut vfs = VirtualFs::new();
//! let root = NodePath::root();
//!
//! vfs.create(&root, "notes", NodeKind::File)?;
//! vfs.set_content(&root, "notes", "hello")?;
//!
//! // Copying into the folder it came from is rejected.
//! vfs.copy(&root, "notes")?;
//! assert!(matches!(vfs.paste(&root), Err(VfsError::SameLocationCopy { .. })));
//!
//! vfs.create(&root, "archive", NodeKind::Folder)?;
//! vfs.paste(&NodePath::from(["archive"]))?;
//!
//! assert_eq!(vfs.get(&NodePath::from(["archive"]), "notes")?.content(), Some("hello"));
//! assert_eq!(vfs.get(&root, "notes")?.content(), Some("hello"));
//! # Ok::<(), VfsError>(())
//! ```
//!
//! ---
//!
//! ## Core Types
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`VirtualFs`] | The engine: owns tree, clipboard and config |
//! | [`Node`] | A [`File`] or a [`Folder`] |
//! | [`Tree`] | The root folder |
//! | [`NodePath`] | Folder names from the root to a container folder |
//! | [`Clipboard`] | Single pending copy or cut |
//! | [`VfsError`] | Error type with context |
//! | [`VfsConfig`] | Default content and store keys |
//!
//! ## Traits
//!
//! ```text
//! TreeRead + TreeWrite + TreeTransfer = Vfs
//! ```
//!
//! [`VfsExt`] adds `search`, `exists`, `is_file` and `is_folder` to anything
//! implementing [`TreeRead`].
//!
//! ---
//!
//! ## Paths
//!
//! Operations on an entry take the path of its *parent* folder plus the entry
//! name. The empty path is the root folder. A path segment that is missing or
//! names a file is [`VfsError::PathNotFound`].
//!
//! ## Logging
//!
//! Commands emit `tracing` events (`debug` for mutations, `trace` for lookups
//! and searches). The crate never installs a subscriber.
//!
//! ---
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `serde` (default) | Serialization for all data types, [`KvStore`] persistence and [`PersistLayer`] |

// Private modules
mod clipboard;
mod config;
mod engine;
mod error;
mod ext;
mod filter;
mod layer;
mod path;
mod path_resolver;
mod traits;
mod types;

#[cfg(feature = "serde")]
mod persist;
#[cfg(feature = "serde")]
mod session;

// Public re-exports - errors
pub use error::VfsError;

// Public re-exports - data model
pub use clipboard::{Clipboard, ClipboardEntry, TransferMode};
pub use path::NodePath;
pub use types::{Children, Entry, File, Folder, Node, NodeKind, Tree};

// Public re-exports - configuration
pub use config::{VfsConfig, DEFAULT_CLIPBOARD_KEY, DEFAULT_FILE_CONTENT, DEFAULT_TREE_KEY};

// Public re-exports - engine
pub use engine::VirtualFs;
pub use traits::{PasteOutcome, TreeRead, TreeTransfer, TreeWrite, Vfs};

// Public re-exports - resolution and search
pub use filter::{filter_children, filter_tree};
pub use path_resolver::{resolve, resolve_mut};

// Public re-exports - infrastructure
pub use ext::VfsExt;
pub use layer::{Layer, LayerExt};

// Conditional re-exports
#[cfg(feature = "serde")]
pub use persist::{load_state, save_state, FileStore, KvStore, MemoryStore, StoreExt};
#[cfg(feature = "serde")]
pub use session::{PersistLayer, Persisted};
