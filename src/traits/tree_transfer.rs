//! Clipboard transfers.

use crate::{NodePath, TransferMode, VfsError};

/// What a successful paste did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasteOutcome {
    /// Name the entry was inserted under.
    pub name: String,
    /// Folder it was inserted into.
    pub target: NodePath,
    /// Mode of the consumed clipboard entry.
    pub mode: TransferMode,
    /// For a cut, whether the source entry was still there to remove.
    pub source_removed: bool,
}

/// Copy, cut and paste through the single clipboard slot.
pub trait TreeTransfer {
    /// Put a deep copy of the entry on the clipboard in copy mode.
    ///
    /// Replaces any earlier clipboard entry.
    ///
    /// # Errors
    ///
    /// - [`VfsError::PathNotFound`] if `path` does not resolve to a folder
    /// - [`VfsError::NotFound`] if `name` does not exist
    fn copy(&mut self, path: &NodePath, name: &str) -> Result<(), VfsError>;

    /// Put a deep copy of the entry on the clipboard in cut mode.
    ///
    /// The entry stays in place until a paste commits the move.
    ///
    /// # Errors
    ///
    /// - [`VfsError::PathNotFound`] if `path` does not resolve to a folder
    /// - [`VfsError::NotFound`] if `name` does not exist
    fn cut(&mut self, path: &NodePath, name: &str) -> Result<(), VfsError>;

    /// Insert the clipboard entry into the folder at `target`.
    ///
    /// A copy keeps the clipboard armed for further pastes. A cut removes the
    /// source entry (if it is still there) and empties the clipboard.
    ///
    /// # Errors
    ///
    /// - [`VfsError::EmptyClipboard`] if nothing was copied or cut
    /// - [`VfsError::PathNotFound`] if `target` does not resolve to a folder
    /// - [`VfsError::SameLocationCopy`] if a copy is pasted into its source folder
    /// - [`VfsError::PasteIntoSelf`] if a cut folder is pasted into its own subtree
    /// - [`VfsError::NameCollision`] if the target already holds the name
    fn paste(&mut self, target: &NodePath) -> Result<PasteOutcome, VfsError>;
}
