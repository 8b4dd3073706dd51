//! Core types for the node tree.

use std::collections::BTreeMap;

/// Children of a folder, keyed by entry name.
///
/// Keys are unique by construction. Ordering is not meaningful; a sorted map
/// just keeps listings and snapshots deterministic.
pub type Children = BTreeMap<String, Node>;

/// Kind of a tree entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum NodeKind {
    /// Leaf holding text content.
    File,
    /// Interior node holding children.
    Folder,
}

/// A file leaf.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct File {
    /// Text content.
    pub content: String,
}

impl File {
    /// Create a file with the given content.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

/// A folder and its children.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Folder {
    /// Child entries by name.
    pub children: Children,
}

impl Folder {
    /// Create an empty folder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a folder from existing children.
    pub fn with_children(children: Children) -> Self {
        Self { children }
    }
}

/// A node in the tree: either a [`File`] or a [`Folder`].
///
/// The variant is the discriminant, so content can only ever be set on a file
/// and children only ever live in a folder.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "lowercase"))]
pub enum Node {
    /// File leaf.
    File(File),
    /// Folder with children.
    Folder(Folder),
}

impl Node {
    /// A file node with the given content.
    pub fn file(content: impl Into<String>) -> Self {
        Node::File(File::new(content))
    }

    /// An empty folder node.
    pub fn folder() -> Self {
        Node::Folder(Folder::new())
    }

    /// Kind of this node.
    #[inline]
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::File(_) => NodeKind::File,
            Node::Folder(_) => NodeKind::Folder,
        }
    }

    /// Returns `true` if this is a file.
    #[inline]
    pub fn is_file(&self) -> bool {
        matches!(self, Node::File(_))
    }

    /// Returns `true` if this is a folder.
    #[inline]
    pub fn is_folder(&self) -> bool {
        matches!(self, Node::Folder(_))
    }

    /// File content, or `None` for a folder.
    pub fn content(&self) -> Option<&str> {
        match self {
            Node::File(file) => Some(&file.content),
            Node::Folder(_) => None,
        }
    }

    /// Folder children, or `None` for a file.
    pub fn children(&self) -> Option<&Children> {
        match self {
            Node::File(_) => None,
            Node::Folder(folder) => Some(&folder.children),
        }
    }
}

/// The whole tree: a single root folder.
///
/// The root has no name, so it can never be renamed, deleted, copied or cut.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tree {
    /// The root folder.
    pub root: Folder,
}

impl Tree {
    /// An empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// A tree whose root holds `children`.
    pub fn from_children(children: Children) -> Self {
        Self {
            root: Folder::with_children(children),
        }
    }

    /// The root folder's children.
    #[inline]
    pub fn children(&self) -> &Children {
        &self.root.children
    }

    /// Total number of nodes below the root.
    pub fn node_count(&self) -> usize {
        fn count(children: &Children) -> usize {
            children
                .values()
                .map(|node| 1 + node.children().map_or(0, count))
                .sum()
        }
        count(&self.root.children)
    }
}

/// A single entry in a folder listing, as handed to a presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entry {
    /// Entry name (not a full path).
    pub name: String,
    /// Kind of the entry.
    pub kind: NodeKind,
    /// File content; `None` for folders.
    pub content: Option<String>,
}

impl Entry {
    /// Build the listing entry for `node` stored under `name`.
    pub fn from_node(name: &str, node: &Node) -> Self {
        Self {
            name: name.to_string(),
            kind: node.kind(),
            content: node.content().map(str::to_string),
        }
    }

    /// Returns `true` if this entry is a folder.
    #[inline]
    pub fn is_folder(&self) -> bool {
        self.kind == NodeKind::Folder
    }
}
