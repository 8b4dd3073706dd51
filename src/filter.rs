//! Name search that keeps the folders leading to a match.

use crate::{Children, Folder, Node, Tree};

/// Prune `children` down to entries whose name contains `query`.
///
/// Matching is a case-insensitive substring test. Folders are filtered
/// recursively first and kept when their own name matches or when anything
/// below them survived; in the first case only the matching part of their
/// subtree is kept too. An empty query keeps everything.
///
/// The result is a new map; `children` is never touched.
///
/// # Example
///
/// ```rust
/// use treevfs::{filter_children, Children, Folder, Node};
///
/// let mut docs = Children::new();
/// docs.insert("report.txt".into(), Node::file("q3"));
///
/// let mut root = Children::new();
/// root.insert("docs".into(), Node::Folder(Folder::with_children(docs)));
/// root.insert("images".into(), Node::folder());
///
/// let found = filter_children(&root, "REPORT");
/// assert!(found.contains_key("docs"));
/// assert!(!found.contains_key("images"));
/// ```
pub fn filter_children(children: &Children, query: &str) -> Children {
    if query.is_empty() {
        return children.clone();
    }
    let needle = query.to_lowercase();
    prune(children, &needle)
}

/// Filter a whole tree. See [`filter_children`].
pub fn filter_tree(tree: &Tree, query: &str) -> Tree {
    let pruned = filter_children(&tree.root.children, query);
    tracing::trace!(query, kept = pruned.len(), "filtered tree");
    Tree::from_children(pruned)
}

fn prune(children: &Children, needle: &str) -> Children {
    let mut kept = Children::new();
    for (name, node) in children {
        let matches = name.to_lowercase().contains(needle);
        match node {
            Node::File(_) => {
                if matches {
                    kept.insert(name.clone(), node.clone());
                }
            }
            Node::Folder(folder) => {
                let inner = prune(&folder.children, needle);
                if matches || !inner.is_empty() {
                    kept.insert(name.clone(), Node::Folder(Folder::with_children(inner)));
                }
            }
        }
    }
    kept
}
