//! Container paths.

use std::fmt;

/// An ordered sequence of folder names starting at the root.
///
/// The empty path addresses the root folder's children. Names are compared
/// byte-for-byte; there are no relative segments, so `".."` is just a name.
///
/// # Example
///
/// ```rust
/// use treevfs::NodePath;
///
/// let path = NodePath::from(["docs", "2024"]);
/// assert_eq!(path.to_string(), "/docs/2024");
/// assert_eq!(NodePath::root().to_string(), "/");
/// assert!(path.starts_with(&NodePath::from(["docs"])));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct NodePath(Vec<String>);

impl NodePath {
    /// The empty path, addressing the root folder.
    #[inline]
    pub const fn root() -> Self {
        Self(Vec::new())
    }

    /// Returns `true` if this is the root path.
    #[inline]
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// The path segments in order.
    #[inline]
    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// Number of segments.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there are no segments (same as [`is_root`](Self::is_root)).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// A new path with `name` appended.
    pub fn join(&self, name: impl Into<String>) -> Self {
        let mut segments = self.0.clone();
        segments.push(name.into());
        Self(segments)
    }

    /// Returns `true` if `prefix` is this path or one of its ancestors.
    pub fn starts_with(&self, prefix: &NodePath) -> bool {
        self.0.starts_with(&prefix.0)
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("/");
        }
        for segment in &self.0 {
            write!(f, "/{segment}")?;
        }
        Ok(())
    }
}

impl From<Vec<String>> for NodePath {
    fn from(segments: Vec<String>) -> Self {
        Self(segments)
    }
}

impl From<&[&str]> for NodePath {
    fn from(segments: &[&str]) -> Self {
        segments.iter().copied().collect()
    }
}

impl<const N: usize> From<[&str; N]> for NodePath {
    fn from(segments: [&str; N]) -> Self {
        segments.into_iter().collect()
    }
}

impl<S: Into<String>> FromIterator<S> for NodePath {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl<'a> IntoIterator for &'a NodePath {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_is_empty() {
        let root = NodePath::root();
        assert!(root.is_root());
        assert_eq!(root.len(), 0);
        assert_eq!(root, NodePath::default());
    }

    #[test]
    fn join_appends_segment() {
        let path = NodePath::root().join("a").join("b");
        assert_eq!(path, NodePath::from(["a", "b"]));
        assert_eq!(path.segments(), ["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn starts_with_checks_whole_segments() {
        let path = NodePath::from(["docs", "reports"]);
        assert!(path.starts_with(&NodePath::root()));
        assert!(path.starts_with(&NodePath::from(["docs"])));
        assert!(path.starts_with(&path));
        assert!(!path.starts_with(&NodePath::from(["doc"])));
        assert!(!NodePath::from(["docs"]).starts_with(&path));
    }

    #[test]
    fn dot_segments_are_plain_names() {
        let path = NodePath::from(["..", "."]);
        assert_eq!(path.len(), 2);
        assert_eq!(path.to_string(), "/../.");
    }

    #[test]
    fn from_slice_and_vec_agree() {
        let slice: &[&str] = &["x", "y"];
        assert_eq!(
            NodePath::from(slice),
            NodePath::from(vec!["x".to_string(), "y".to_string()])
        );
    }
}
