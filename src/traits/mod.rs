//! # Engine Traits
//!
//! The command surface shared by the engine and anything that wraps it.
//!
//! ## Trait Layout
//!
//! ```text
//! TreeRead + TreeWrite + TreeTransfer = Vfs
//! ```
//!
//! | Trait | Operations |
//! |-------|------------|
//! | [`TreeRead`] | `tree`, `clipboard`, `get`, `list` |
//! | [`TreeWrite`] | `create`, `rename`, `delete`, `set_content` |
//! | [`TreeTransfer`] | `copy`, `cut`, `paste` |
//! | [`Vfs`] | all of the above |
//!
//! [`Vfs`] has a blanket implementation, so wrappers such as
//! [`Persisted`](crate::Persisted) only implement the component traits.
//!
//! ## Mutability
//!
//! Mutating methods take `&mut self`. The engine has no internal locking; a
//! multi-threaded host puts the whole value behind one `Mutex`.

mod tree_read;
mod tree_transfer;
mod tree_write;

pub use tree_read::TreeRead;
pub use tree_transfer::{PasteOutcome, TreeTransfer};
pub use tree_write::TreeWrite;

/// Full command surface: read, write and clipboard transfer.
///
/// Blanket-implemented for every type implementing the component traits.
///
/// ```rust
/// use treevfs::{NodeKind, NodePath, TreeRead, Vfs, VirtualFs};
///
/// fn seed<V: Vfs>(vfs: &mut V) -> Result<(), treevfs::VfsError> {
///     vfs.create(&NodePath::root(), "docs", NodeKind::Folder)?;
///     vfs.create(&NodePath::from(["docs"]), "todo", NodeKind::File)
/// }
///
/// let mut vfs = VirtualFs::new();
/// seed(&mut vfs).unwrap();
/// assert_eq!(vfs.list(&NodePath::from(["docs"])).unwrap().len(), 1);
/// ```
pub trait Vfs: TreeRead + TreeWrite + TreeTransfer {}

impl<T: TreeRead + TreeWrite + TreeTransfer + ?Sized> Vfs for T {}
