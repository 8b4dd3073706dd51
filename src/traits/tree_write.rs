//! Tree mutations.

use crate::{Node, NodeKind, NodePath, VfsError};

/// Create, rename, delete and edit entries.
///
/// Every method names the parent folder by `path` and the entry by `name`.
/// A failing call leaves the tree untouched.
pub trait TreeWrite {
    /// Create an empty folder or a file with the default content.
    ///
    /// # Errors
    ///
    /// - [`VfsError::InvalidName`] if `name` is empty
    /// - [`VfsError::PathNotFound`] if `path` does not resolve to a folder
    /// - [`VfsError::NameCollision`] if `name` already exists there
    fn create(&mut self, path: &NodePath, name: &str, kind: NodeKind) -> Result<(), VfsError>;

    /// Rename an entry, keeping its content or children.
    ///
    /// Renaming to the same name always succeeds and changes nothing. Neither
    /// `path` nor `old_name` is checked in that case, so none of the errors
    /// below are reported for it.
    ///
    /// # Errors
    ///
    /// - [`VfsError::InvalidName`] if `new_name` is empty
    /// - [`VfsError::PathNotFound`] if `path` does not resolve to a folder
    /// - [`VfsError::NotFound`] if `old_name` does not exist
    /// - [`VfsError::NameCollision`] if `new_name` already exists
    fn rename(&mut self, path: &NodePath, old_name: &str, new_name: &str) -> Result<(), VfsError>;

    /// Remove an entry and its whole subtree, returning the removed node.
    ///
    /// # Errors
    ///
    /// - [`VfsError::PathNotFound`] if `path` does not resolve to a folder
    /// - [`VfsError::NotFound`] if `name` does not exist
    fn delete(&mut self, path: &NodePath, name: &str) -> Result<Node, VfsError>;

    /// Overwrite a file's content.
    ///
    /// # Errors
    ///
    /// - [`VfsError::PathNotFound`] if `path` does not resolve to a folder
    /// - [`VfsError::NotFound`] if `name` does not exist
    /// - [`VfsError::NotAFile`] if `name` is a folder
    fn set_content(&mut self, path: &NodePath, name: &str, content: &str) -> Result<(), VfsError>;
}
