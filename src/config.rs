//! Engine configuration.

/// Content given to every newly created file.
pub const DEFAULT_FILE_CONTENT: &str = "New content";

/// Store key holding the serialized tree.
pub const DEFAULT_TREE_KEY: &str = "fileSystem";

/// Store key holding the serialized clipboard.
pub const DEFAULT_CLIPBOARD_KEY: &str = "clipboard";

/// Settings for a [`VirtualFs`](crate::VirtualFs) and its persistence.
///
/// Every field has a default, so a host config file only needs to name the
/// values it changes.
///
/// # Example
///
/// ```rust
/// use treevfs::VfsConfig;
///
/// let config = VfsConfig::default();
/// assert_eq!(config.default_file_content, "New content");
/// assert_eq!(config.tree_key, "fileSystem");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct VfsConfig {
    /// Content of a freshly created file.
    pub default_file_content: String,
    /// Store key for the tree snapshot.
    pub tree_key: String,
    /// Store key for the clipboard snapshot.
    pub clipboard_key: String,
}

impl Default for VfsConfig {
    fn default() -> Self {
        Self {
            default_file_content: DEFAULT_FILE_CONTENT.to_string(),
            tree_key: DEFAULT_TREE_KEY.to_string(),
            clipboard_key: DEFAULT_CLIPBOARD_KEY.to_string(),
        }
    }
}

#[cfg(feature = "serde")]
impl VfsConfig {
    /// Parse a (possibly partial) JSON config document.
    ///
    /// # Errors
    ///
    /// - [`VfsError::Deserialization`](crate::VfsError::Deserialization) if the JSON is malformed
    ///
    /// ```rust
    /// use treevfs::VfsConfig;
    ///
    /// let config = VfsConfig::from_json(r#"{"tree_key": "vfs"}"#).unwrap();
    /// assert_eq!(config.tree_key, "vfs");
    /// assert_eq!(config.clipboard_key, "clipboard");
    /// ```
    pub fn from_json(json: &str) -> Result<Self, crate::VfsError> {
        serde_json::from_str(json).map_err(|e| crate::VfsError::Deserialization(e.to_string()))
    }
}
