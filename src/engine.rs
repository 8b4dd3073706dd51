//! The in-memory engine.

use crate::{
    resolve, resolve_mut, Clipboard, ClipboardEntry, Node, NodeKind, NodePath, PasteOutcome,
    TransferMode, Tree, TreeRead, TreeTransfer, TreeWrite, VfsConfig, VfsError,
};

/// In-memory tree engine owning the tree, the clipboard and the config.
///
/// This is the only mutation surface for the tree. A host builds one at
/// startup (usually from a persisted snapshot), routes every command through
/// it and persists the result after each successful command.
///
/// # Example
///
/// ```rust
/// use treevfs::{NodeKind, NodePath, TreeRead, TreeTransfer, TreeWrite, VirtualFs};
///
/// let mut vfs = VirtualFs::new();
/// let root = NodePath::root();
///
/// vfs.create(&root, "notes", NodeKind::File).unwrap();
/// vfs.set_content(&root, "notes", "hello").unwrap();
/// vfs.create(&root, "archive", NodeKind::Folder).unwrap();
///
/// vfs.copy(&root, "notes").unwrap();
/// vfs.paste(&NodePath::from(["archive"])).unwrap();
///
/// let copy = vfs.get(&NodePath::from(["archive"]), "notes").unwrap();
/// assert_eq!(copy.content(), Some("hello"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct VirtualFs {
    tree: Tree,
    clipboard: Clipboard,
    config: VfsConfig,
}

impl VirtualFs {
    /// An empty tree with the default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty tree with a custom config.
    pub fn with_config(config: VfsConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Rebuild an engine from a persisted tree and clipboard.
    pub fn from_parts(tree: Tree, clipboard: Clipboard, config: VfsConfig) -> Self {
        Self {
            tree,
            clipboard,
            config,
        }
    }

    /// Split the engine back into its parts.
    pub fn into_parts(self) -> (Tree, Clipboard, VfsConfig) {
        (self.tree, self.clipboard, self.config)
    }

    /// The active config.
    pub fn config(&self) -> &VfsConfig {
        &self.config
    }

    fn capture(&mut self, path: &NodePath, name: &str, mode: TransferMode) -> Result<(), VfsError> {
        let snapshot = self.get(path, name)?.clone();
        self.clipboard.store(ClipboardEntry {
            source_path: path.clone(),
            item_name: name.to_string(),
            snapshot,
            mode,
        });
        tracing::debug!(%path, name, ?mode, "clipboard armed");
        Ok(())
    }
}

fn validate_name(name: &str) -> Result<(), VfsError> {
    if name.is_empty() {
        return Err(VfsError::InvalidName {
            name: name.to_string(),
            reason: "name is empty",
        });
    }
    Ok(())
}

fn not_found(path: &NodePath, name: &str) -> VfsError {
    VfsError::NotFound {
        path: path.clone(),
        name: name.to_string(),
    }
}

fn collision(path: &NodePath, name: &str, operation: &'static str) -> VfsError {
    VfsError::NameCollision {
        path: path.clone(),
        name: name.to_string(),
        operation,
    }
}

impl TreeRead for VirtualFs {
    fn tree(&self) -> &Tree {
        &self.tree
    }

    fn clipboard(&self) -> &Clipboard {
        &self.clipboard
    }
}

impl TreeWrite for VirtualFs {
    fn create(&mut self, path: &NodePath, name: &str, kind: NodeKind) -> Result<(), VfsError> {
        validate_name(name)?;
        let children = resolve_mut(&mut self.tree, path)?;
        if children.contains_key(name) {
            return Err(collision(path, name, "create"));
        }
        let node = match kind {
            NodeKind::File => Node::file(self.config.default_file_content.as_str()),
            NodeKind::Folder => Node::folder(),
        };
        children.insert(name.to_string(), node);
        tracing::debug!(%path, name, ?kind, "created entry");
        Ok(())
    }

    fn rename(&mut self, path: &NodePath, old_name: &str, new_name: &str) -> Result<(), VfsError> {
        if old_name == new_name {
            return Ok(());
        }
        validate_name(new_name)?;
        let children = resolve_mut(&mut self.tree, path)?;
        if !children.contains_key(old_name) {
            return Err(not_found(path, old_name));
        }
        if children.contains_key(new_name) {
            return Err(collision(path, new_name, "rename"));
        }
        if let Some(node) = children.remove(old_name) {
            children.insert(new_name.to_string(), node);
        }
        tracing::debug!(%path, old_name, new_name, "renamed entry");
        Ok(())
    }

    fn delete(&mut self, path: &NodePath, name: &str) -> Result<Node, VfsError> {
        let node = resolve_mut(&mut self.tree, path)?
            .remove(name)
            .ok_or_else(|| not_found(path, name))?;
        tracing::debug!(%path, name, kind = ?node.kind(), "deleted entry");
        Ok(node)
    }

    fn set_content(&mut self, path: &NodePath, name: &str, content: &str) -> Result<(), VfsError> {
        match resolve_mut(&mut self.tree, path)?.get_mut(name) {
            Some(Node::File(file)) => {
                file.content = content.to_string();
                tracing::debug!(%path, name, len = content.len(), "updated content");
                Ok(())
            }
            Some(Node::Folder(_)) => Err(VfsError::NotAFile {
                path: path.clone(),
                name: name.to_string(),
            }),
            None => Err(not_found(path, name)),
        }
    }
}

impl TreeTransfer for VirtualFs {
    fn copy(&mut self, path: &NodePath, name: &str) -> Result<(), VfsError> {
        self.capture(path, name, TransferMode::Copy)
    }

    fn cut(&mut self, path: &NodePath, name: &str) -> Result<(), VfsError> {
        self.capture(path, name, TransferMode::Cut)
    }

    fn paste(&mut self, target: &NodePath) -> Result<PasteOutcome, VfsError> {
        let entry = self.clipboard.entry().ok_or(VfsError::EmptyClipboard)?;
        let name = entry.item_name.as_str();
        // Checked before the insert: once pasted, a same-folder target would
        // make the new node look like the source.
        let source_present = entry.mode == TransferMode::Cut
            && resolve(&self.tree, &entry.source_path).is_ok_and(|c| c.contains_key(name));
        let children = resolve_mut(&mut self.tree, target)?;

        match entry.mode {
            TransferMode::Copy if *target == entry.source_path => {
                return Err(VfsError::SameLocationCopy {
                    path: target.clone(),
                    name: name.to_string(),
                });
            }
            TransferMode::Cut if target.starts_with(&entry.source_path.join(name)) => {
                return Err(VfsError::PasteIntoSelf {
                    path: target.clone(),
                    name: name.to_string(),
                });
            }
            _ => {}
        }
        if children.contains_key(name) {
            return Err(collision(target, name, "paste"));
        }
        children.insert(name.to_string(), entry.snapshot.clone());

        let mut outcome = PasteOutcome {
            name: name.to_string(),
            target: target.clone(),
            mode: entry.mode,
            source_removed: false,
        };

        if entry.mode == TransferMode::Cut {
            let source = entry.source_path.clone();
            if source_present {
                outcome.source_removed = resolve_mut(&mut self.tree, &source)
                    .is_ok_and(|children| children.remove(&outcome.name).is_some());
            }
            if !outcome.source_removed {
                tracing::warn!(%source, name = %outcome.name, "cut source vanished before paste");
            }
            self.clipboard.clear();
        }

        tracing::debug!(%target, name = %outcome.name, mode = ?outcome.mode, "pasted entry");
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::VfsExt;

    fn root() -> NodePath {
        NodePath::root()
    }

    fn at(segments: &[&str]) -> NodePath {
        NodePath::from(segments)
    }

    #[test]
    fn create_file_uses_default_content() {
        let mut vfs = VirtualFs::new();
        vfs.create(&root(), "notes", NodeKind::File).unwrap();
        assert_eq!(vfs.get(&root(), "notes").unwrap(), &Node::file("New content"));
    }

    #[test]
    fn create_uses_configured_content() {
        let mut vfs = VirtualFs::with_config(VfsConfig {
            default_file_content: String::new(),
            ..VfsConfig::default()
        });
        vfs.create(&root(), "blank", NodeKind::File).unwrap();
        assert_eq!(vfs.get(&root(), "blank").unwrap().content(), Some(""));
    }

    #[test]
    fn create_collision_leaves_tree_unchanged() {
        let mut vfs = VirtualFs::new();
        vfs.create(&root(), "x", NodeKind::File).unwrap();
        vfs.set_content(&root(), "x", "keep").unwrap();
        let before = vfs.tree().clone();

        let err = vfs.create(&root(), "x", NodeKind::Folder).unwrap_err();
        assert!(matches!(err, VfsError::NameCollision { operation: "create", .. }));
        assert_eq!(vfs.tree(), &before);
    }

    #[test]
    fn create_rejects_empty_name() {
        let mut vfs = VirtualFs::new();
        let err = vfs.create(&root(), "", NodeKind::File).unwrap_err();
        assert!(matches!(err, VfsError::InvalidName { .. }));
    }

    #[test]
    fn create_under_missing_path_fails() {
        let mut vfs = VirtualFs::new();
        let err = vfs.create(&at(&["nope"]), "x", NodeKind::File).unwrap_err();
        assert!(matches!(err, VfsError::PathNotFound { .. }));
    }

    #[test]
    fn rename_same_name_is_noop() {
        let mut vfs = VirtualFs::new();
        vfs.create(&root(), "a", NodeKind::File).unwrap();
        let before = vfs.tree().clone();
        vfs.rename(&root(), "a", "a").unwrap();
        assert_eq!(vfs.tree(), &before);
    }

    #[test]
    fn rename_keeps_folder_children() {
        let mut vfs = VirtualFs::new();
        vfs.create(&root(), "docs", NodeKind::Folder).unwrap();
        vfs.create(&at(&["docs"]), "a.txt", NodeKind::File).unwrap();

        vfs.rename(&root(), "docs", "papers").unwrap();
        assert!(!vfs.exists(&root(), "docs"));
        assert!(vfs.get(&at(&["papers"]), "a.txt").is_ok());
    }

    #[test]
    fn rename_to_existing_name_collides() {
        let mut vfs = VirtualFs::new();
        vfs.create(&root(), "a", NodeKind::File).unwrap();
        vfs.create(&root(), "b", NodeKind::File).unwrap();
        let err = vfs.rename(&root(), "a", "b").unwrap_err();
        assert!(matches!(err, VfsError::NameCollision { operation: "rename", .. }));
        assert!(vfs.exists(&root(), "a"));
    }

    #[test]
    fn rename_missing_entry_is_not_found() {
        let mut vfs = VirtualFs::new();
        let err = vfs.rename(&root(), "ghost", "b").unwrap_err();
        assert!(matches!(err, VfsError::NotFound { .. }));
    }

    #[test]
    fn delete_removes_subtree() {
        let mut vfs = VirtualFs::new();
        vfs.create(&root(), "docs", NodeKind::Folder).unwrap();
        vfs.create(&at(&["docs"]), "a.txt", NodeKind::File).unwrap();

        let removed = vfs.delete(&root(), "docs").unwrap();
        assert!(removed.is_folder());
        assert_eq!(vfs.tree().node_count(), 0);
    }

    #[test]
    fn delete_then_create_gives_fresh_node() {
        let mut vfs = VirtualFs::new();
        vfs.create(&root(), "n", NodeKind::File).unwrap();
        vfs.set_content(&root(), "n", "old").unwrap();
        vfs.delete(&root(), "n").unwrap();
        vfs.create(&root(), "n", NodeKind::File).unwrap();
        assert_eq!(vfs.get(&root(), "n").unwrap().content(), Some("New content"));
    }

    #[test]
    fn delete_missing_is_not_found() {
        let mut vfs = VirtualFs::new();
        assert!(matches!(
            vfs.delete(&root(), "x").unwrap_err(),
            VfsError::NotFound { .. }
        ));
    }

    #[test]
    fn set_content_on_folder_is_rejected() {
        let mut vfs = VirtualFs::new();
        vfs.create(&root(), "docs", NodeKind::Folder).unwrap();
        let err = vfs.set_content(&root(), "docs", "oops").unwrap_err();
        assert!(matches!(err, VfsError::NotAFile { .. }));
        assert!(vfs.is_folder(&root(), "docs"));
    }

    #[test]
    fn copy_snapshot_ignores_later_edits() {
        let mut vfs = VirtualFs::new();
        vfs.create(&root(), "n", NodeKind::File).unwrap();
        vfs.create(&root(), "dst", NodeKind::Folder).unwrap();
        vfs.copy(&root(), "n").unwrap();
        vfs.set_content(&root(), "n", "edited").unwrap();

        vfs.paste(&at(&["dst"])).unwrap();
        assert_eq!(
            vfs.get(&at(&["dst"]), "n").unwrap().content(),
            Some("New content")
        );
    }

    #[test]
    fn copy_missing_entry_leaves_clipboard() {
        let mut vfs = VirtualFs::new();
        vfs.create(&root(), "n", NodeKind::File).unwrap();
        vfs.copy(&root(), "n").unwrap();
        let before = vfs.clipboard().clone();

        assert!(vfs.copy(&root(), "ghost").is_err());
        assert_eq!(vfs.clipboard(), &before);
    }

    #[test]
    fn paste_with_empty_clipboard() {
        let mut vfs = VirtualFs::new();
        assert!(matches!(
            vfs.paste(&root()).unwrap_err(),
            VfsError::EmptyClipboard
        ));
    }

    #[test]
    fn paste_into_missing_folder_keeps_clipboard() {
        let mut vfs = VirtualFs::new();
        vfs.create(&root(), "n", NodeKind::File).unwrap();
        vfs.cut(&root(), "n").unwrap();

        let err = vfs.paste(&at(&["nope"])).unwrap_err();
        assert!(matches!(err, VfsError::PathNotFound { .. }));
        assert!(vfs.clipboard().is_armed());
        assert!(vfs.exists(&root(), "n"));
    }

    #[test]
    fn copy_paste_twice_keeps_clipboard_armed() {
        let mut vfs = VirtualFs::new();
        vfs.create(&root(), "n", NodeKind::File).unwrap();
        vfs.create(&root(), "a", NodeKind::Folder).unwrap();
        vfs.create(&root(), "b", NodeKind::Folder).unwrap();
        vfs.copy(&root(), "n").unwrap();

        vfs.paste(&at(&["a"])).unwrap();
        assert!(vfs.clipboard().is_armed());
        let outcome = vfs.paste(&at(&["b"])).unwrap();
        assert_eq!(outcome.mode, TransferMode::Copy);
        assert!(vfs.clipboard().is_armed());
        assert!(vfs.exists(&root(), "n"));
    }

    #[test]
    fn cut_paste_moves_entry_and_clears_clipboard() {
        let mut vfs = VirtualFs::new();
        vfs.create(&root(), "n", NodeKind::File).unwrap();
        vfs.set_content(&root(), "n", "body").unwrap();
        vfs.create(&root(), "dst", NodeKind::Folder).unwrap();

        vfs.cut(&root(), "n").unwrap();
        let outcome = vfs.paste(&at(&["dst"])).unwrap();
        assert!(outcome.source_removed);
        assert!(!vfs.exists(&root(), "n"));
        assert_eq!(vfs.get(&at(&["dst"]), "n").unwrap().content(), Some("body"));
        assert!(!vfs.clipboard().is_armed());
        assert!(matches!(
            vfs.paste(&root()).unwrap_err(),
            VfsError::EmptyClipboard
        ));
    }

    #[test]
    fn cut_paste_tolerates_vanished_source() {
        let mut vfs = VirtualFs::new();
        vfs.create(&root(), "n", NodeKind::File).unwrap();
        vfs.create(&root(), "dst", NodeKind::Folder).unwrap();
        vfs.cut(&root(), "n").unwrap();
        vfs.delete(&root(), "n").unwrap();

        let outcome = vfs.paste(&at(&["dst"])).unwrap();
        assert!(!outcome.source_removed);
        assert!(vfs.exists(&at(&["dst"]), "n"));
        assert!(!vfs.clipboard().is_armed());
    }

    #[test]
    fn cut_folder_into_own_subtree_is_rejected() {
        let mut vfs = VirtualFs::new();
        vfs.create(&root(), "a", NodeKind::Folder).unwrap();
        vfs.create(&at(&["a"]), "b", NodeKind::Folder).unwrap();
        vfs.cut(&root(), "a").unwrap();
        let before = vfs.tree().clone();

        for target in [at(&["a"]), at(&["a", "b"])] {
            let err = vfs.paste(&target).unwrap_err();
            assert!(matches!(err, VfsError::PasteIntoSelf { .. }));
        }
        assert_eq!(vfs.tree(), &before);
        assert!(vfs.clipboard().is_armed());
    }

    #[test]
    fn copy_folder_into_own_subtree_is_allowed() {
        let mut vfs = VirtualFs::new();
        vfs.create(&root(), "a", NodeKind::Folder).unwrap();
        vfs.copy(&root(), "a").unwrap();
        vfs.paste(&at(&["a"])).unwrap();
        assert!(vfs.get(&at(&["a"]), "a").unwrap().is_folder());
    }

    #[test]
    fn paste_collision_keeps_state() {
        let mut vfs = VirtualFs::new();
        vfs.create(&root(), "n", NodeKind::File).unwrap();
        vfs.create(&root(), "dst", NodeKind::Folder).unwrap();
        vfs.create(&at(&["dst"]), "n", NodeKind::Folder).unwrap();
        vfs.cut(&root(), "n").unwrap();
        let before = vfs.clone();

        let err = vfs.paste(&at(&["dst"])).unwrap_err();
        assert!(matches!(err, VfsError::NameCollision { operation: "paste", .. }));
        assert_eq!(vfs.tree(), before.tree());
        assert_eq!(vfs.clipboard(), before.clipboard());
    }

    #[test]
    fn cut_paste_into_same_folder_collides() {
        let mut vfs = VirtualFs::new();
        vfs.create(&root(), "n", NodeKind::File).unwrap();
        vfs.cut(&root(), "n").unwrap();
        let err = vfs.paste(&root()).unwrap_err();
        assert!(matches!(err, VfsError::NameCollision { .. }));
    }

    #[test]
    fn cut_paste_into_same_folder_after_delete_restores_entry() {
        let mut vfs = VirtualFs::new();
        vfs.create(&root(), "n", NodeKind::File).unwrap();
        vfs.set_content(&root(), "n", "body").unwrap();
        vfs.cut(&root(), "n").unwrap();
        vfs.delete(&root(), "n").unwrap();

        let outcome = vfs.paste(&root()).unwrap();
        assert!(!outcome.source_removed);
        assert_eq!(vfs.get(&root(), "n").unwrap().content(), Some("body"));
        assert!(!vfs.clipboard().is_armed());
    }

    #[test]
    fn cut_paste_into_same_folder_after_rename_keeps_both() {
        let mut vfs = VirtualFs::new();
        vfs.create(&root(), "n", NodeKind::File).unwrap();
        vfs.cut(&root(), "n").unwrap();
        vfs.rename(&root(), "n", "m").unwrap();

        let outcome = vfs.paste(&root()).unwrap();
        assert!(!outcome.source_removed);
        assert!(vfs.exists(&root(), "n"));
        assert!(vfs.exists(&root(), "m"));
    }

    #[test]
    fn rename_to_same_name_skips_path_check() {
        let mut vfs = VirtualFs::new();
        vfs.rename(&at(&["nope"]), "x", "x").unwrap();
        assert_eq!(vfs.tree(), &Tree::new());
    }

    #[test]
    fn parts_round_trip() {
        let mut vfs = VirtualFs::new();
        vfs.create(&root(), "n", NodeKind::File).unwrap();
        vfs.copy(&root(), "n").unwrap();

        let (tree, clipboard, config) = vfs.into_parts();
        let rebuilt = VirtualFs::from_parts(tree, clipboard, config);
        assert!(rebuilt.exists(&root(), "n"));
        assert!(rebuilt.clipboard().is_armed());
    }
}
