//! # Extension Traits
//!
//! Convenience queries on top of [`TreeRead`].
//!
//! | Method | Description |
//! |--------|-------------|
//! | [`search`](VfsExt::search) | Pruned copy of the tree matching a query |
//! | [`exists`](VfsExt::exists) | Check if an entry exists |
//! | [`is_file`](VfsExt::is_file) | Check if an entry is a file |
//! | [`is_folder`](VfsExt::is_folder) | Check if an entry is a folder |

use crate::{filter_tree, NodePath, Tree, TreeRead};

/// Extension methods for anything that can read the tree.
///
/// Blanket-implemented, so the engine and every wrapper get them for free.
///
/// # Example
///
/// ```rust
/// use treevfs::{NodeKind, NodePath, TreeWrite, VfsExt, VirtualFs};
///
/// let mut vfs = VirtualFs::new();
/// vfs.create(&NodePath::root(), "docs", NodeKind::Folder).unwrap();
/// vfs.create(&NodePath::from(["docs"]), "report.txt", NodeKind::File).unwrap();
/// vfs.create(&NodePath::root(), "images", NodeKind::Folder).unwrap();
///
/// let found = vfs.search("report");
/// assert!(found.children().contains_key("docs"));
/// assert!(!found.children().contains_key("images"));
/// ```
pub trait VfsExt: TreeRead {
    /// Case-insensitive substring search over entry names.
    ///
    /// Folders on the way to a match are kept. An empty query returns the
    /// whole tree. Has no side effects.
    fn search(&self, query: &str) -> Tree {
        filter_tree(self.tree(), query)
    }

    /// Check if `name` exists in the folder at `path`.
    ///
    /// Returns `false` when `path` itself does not resolve.
    fn exists(&self, path: &NodePath, name: &str) -> bool {
        self.get(path, name).is_ok()
    }

    /// Check if `name` in the folder at `path` is a file.
    fn is_file(&self, path: &NodePath, name: &str) -> bool {
        self.get(path, name).is_ok_and(|node| node.is_file())
    }

    /// Check if `name` in the folder at `path` is a folder.
    fn is_folder(&self, path: &NodePath, name: &str) -> bool {
        self.get(path, name).is_ok_and(|node| node.is_folder())
    }
}

impl<R: TreeRead + ?Sized> VfsExt for R {}
