//! # Path Resolution
//!
//! Turns a [`NodePath`] into the children map of the folder it addresses.
//!
//! ## Rules
//! - Segments are walked strictly left to right, with no backtracking.
//! - Names are matched byte-for-byte; `"."` and `".."` have no special meaning.
//! - The empty path resolves to the root folder's children.
//! - A missing segment, or a segment naming a file, is
//!   [`VfsError::PathNotFound`].

use crate::{Children, Node, NodePath, Tree, VfsError};

/// Resolve `path` to the children of the folder it addresses.
///
/// # Errors
///
/// - [`VfsError::PathNotFound`] if any segment is missing or is a file
///
/// # Example
///
/// ```rust
/// use treevfs::{resolve, Node, NodePath, Tree};
///
/// let mut tree = Tree::new();
/// tree.root.children.insert("docs".into(), Node::folder());
///
/// assert!(resolve(&tree, &NodePath::from(["docs"])).unwrap().is_empty());
/// assert!(resolve(&tree, &NodePath::from(["nope"])).is_err());
/// ```
pub fn resolve<'t>(tree: &'t Tree, path: &NodePath) -> Result<&'t Children, VfsError> {
    let mut current = &tree.root.children;
    for segment in path {
        current = match current.get(segment) {
            Some(Node::Folder(folder)) => &folder.children,
            _ => return Err(not_found(path)),
        };
    }
    tracing::trace!(%path, entries = current.len(), "resolved path");
    Ok(current)
}

/// Mutable variant of [`resolve`].
///
/// # Errors
///
/// - [`VfsError::PathNotFound`] if any segment is missing or is a file
pub fn resolve_mut<'t>(tree: &'t mut Tree, path: &NodePath) -> Result<&'t mut Children, VfsError> {
    let mut current = &mut tree.root.children;
    for segment in path {
        current = match current.get_mut(segment) {
            Some(Node::Folder(folder)) => &mut folder.children,
            _ => return Err(not_found(path)),
        };
    }
    Ok(current)
}

fn not_found(path: &NodePath) -> VfsError {
    tracing::trace!(%path, "path did not resolve");
    VfsError::PathNotFound { path: path.clone() }
}

// ============================================================================
// Tests
// ============================================================================
