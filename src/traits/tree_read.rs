//! Read access to the tree.

use crate::{resolve, Clipboard, Entry, Node, NodePath, Tree, VfsError};

/// Read-only view of the tree and clipboard.
///
/// Implementors only provide [`tree`](Self::tree) and
/// [`clipboard`](Self::clipboard); lookups come for free.
pub trait TreeRead {
    /// The current tree.
    fn tree(&self) -> &Tree;

    /// The current clipboard slot.
    fn clipboard(&self) -> &Clipboard;

    /// Look up the entry `name` inside the folder at `path`.
    ///
    /// # Errors
    ///
    /// - [`VfsError::PathNotFound`] if `path` does not resolve to a folder
    /// - [`VfsError::NotFound`] if the folder has no entry `name`
    fn get(&self, path: &NodePath, name: &str) -> Result<&Node, VfsError> {
        resolve(self.tree(), path)?
            .get(name)
            .ok_or_else(|| VfsError::NotFound {
                path: path.clone(),
                name: name.to_string(),
            })
    }

    /// List the folder at `path`, sorted by name.
    ///
    /// # Errors
    ///
    /// - [`VfsError::PathNotFound`] if `path` does not resolve to a folder
    fn list(&self, path: &NodePath) -> Result<Vec<Entry>, VfsError> {
        Ok(resolve(self.tree(), path)?
            .iter()
            .map(|(name, node)| Entry::from_node(name, node))
            .collect())
    }
}
