//! Engines that persist themselves after every successful command.

use crate::{
    load_state, save_state, Clipboard, KvStore, Layer, Node, NodeKind, NodePath, PasteOutcome,
    Tree, TreeRead, TreeTransfer, TreeWrite, VfsConfig, VfsError, VirtualFs,
};

/// Layer that saves the tree and clipboard to a [`KvStore`] after each
/// successful command.
///
/// # Example
///
/// ```rust
/// use treevfs::{
///     KvStore, LayerExt, MemoryStore, NodeKind, NodePath, PersistLayer, TreeWrite, VfsConfig,
///     VirtualFs,
/// };
///
/// let mut vfs = VirtualFs::new().layer(PersistLayer::new(MemoryStore::new(), VfsConfig::default()));
/// vfs.create(&NodePath::root(), "notes", NodeKind::File).unwrap();
///
/// let saved = vfs.store().get("fileSystem").unwrap().unwrap();
/// assert!(saved.contains("notes"));
/// ```
#[derive(Debug, Clone)]
pub struct PersistLayer<S> {
    store: S,
    config: VfsConfig,
}

impl<S: KvStore> PersistLayer<S> {
    /// Persist into `store` using the keys from `config`.
    pub fn new(store: S, config: VfsConfig) -> Self {
        Self { store, config }
    }
}

impl<V, S: KvStore> Layer<V> for PersistLayer<S> {
    type Wrapped = Persisted<V, S>;

    fn layer(self, inner: V) -> Self::Wrapped {
        Persisted {
            inner,
            store: self.store,
            config: self.config,
        }
    }
}

/// An engine wrapped with write-through persistence.
///
/// Failed commands change nothing, so they save nothing. A command whose save
/// fails is rolled back, so the engine never runs ahead of the store. Read-only
/// calls never touch the store.
#[derive(Debug)]
pub struct Persisted<V, S> {
    inner: V,
    store: S,
    config: VfsConfig,
}

impl<S: KvStore> Persisted<VirtualFs, S> {
    /// Restore an engine from `store`, starting empty where nothing was saved.
    ///
    /// # Errors
    ///
    /// - [`VfsError::Deserialization`] if a stored snapshot is malformed
    /// - Any error the store reports
    pub fn open(store: S, config: VfsConfig) -> Result<Self, VfsError> {
        let (tree, clipboard) = load_state(&store, &config)?;
        let inner = VirtualFs::from_parts(tree, clipboard, config.clone());
        Ok(Self {
            inner,
            store,
            config,
        })
    }
}

impl<V: TreeRead, S: KvStore> Persisted<V, S> {
    /// Save the current state now.
    ///
    /// # Errors
    ///
    /// - [`VfsError::Serialization`] if a snapshot cannot be encoded
    /// - Any error the store reports
    pub fn sync(&mut self) -> Result<(), VfsError> {
        save_state(
            &mut self.store,
            &self.config,
            self.inner.tree(),
            self.inner.clipboard(),
        )
    }

    /// The wrapped engine.
    pub fn inner(&self) -> &V {
        &self.inner
    }

    /// The backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Unwrap into the engine and the store.
    pub fn into_parts(self) -> (V, S) {
        (self.inner, self.store)
    }
}

impl<V: TreeRead, S> TreeRead for Persisted<V, S> {
    fn tree(&self) -> &Tree {
        self.inner.tree()
    }

    fn clipboard(&self) -> &Clipboard {
        self.inner.clipboard()
    }
}

impl<V: TreeRead + Clone, S: KvStore> Persisted<V, S> {
    /// Run `command` on the engine and save the result, restoring the previous
    /// state if the save fails.
    fn commit<T>(
        &mut self,
        command: impl FnOnce(&mut V) -> Result<T, VfsError>,
    ) -> Result<T, VfsError> {
        let previous = self.inner.clone();
        let value = command(&mut self.inner)?;
        if let Err(err) = self.sync() {
            self.inner = previous;
            // A partial save may have reached the store; put the old state back.
            if let Err(resync) = self.sync() {
                tracing::warn!(error = %resync, "store left out of step after failed save");
            }
            return Err(err);
        }
        Ok(value)
    }
}

impl<V: TreeRead + TreeWrite + Clone, S: KvStore> TreeWrite for Persisted<V, S> {
    fn create(&mut self, path: &NodePath, name: &str, kind: NodeKind) -> Result<(), VfsError> {
        self.commit(|vfs| vfs.create(path, name, kind))
    }

    fn rename(&mut self, path: &NodePath, old_name: &str, new_name: &str) -> Result<(), VfsError> {
        self.commit(|vfs| vfs.rename(path, old_name, new_name))
    }

    fn delete(&mut self, path: &NodePath, name: &str) -> Result<Node, VfsError> {
        self.commit(|vfs| vfs.delete(path, name))
    }

    fn set_content(&mut self, path: &NodePath, name: &str, content: &str) -> Result<(), VfsError> {
        self.commit(|vfs| vfs.set_content(path, name, content))
    }
}

impl<V: TreeRead + TreeTransfer + Clone, S: KvStore> TreeTransfer for Persisted<V, S> {
    fn copy(&mut self, path: &NodePath, name: &str) -> Result<(), VfsError> {
        self.commit(|vfs| vfs.copy(path, name))
    }

    fn cut(&mut self, path: &NodePath, name: &str) -> Result<(), VfsError> {
        self.commit(|vfs| vfs.cut(path, name))
    }

    fn paste(&mut self, target: &NodePath) -> Result<PasteOutcome, VfsError> {
        self.commit(|vfs| vfs.paste(target))
    }
}
