//! The single-slot clipboard used by copy, cut and paste.

use crate::{Node, NodePath};

/// How a clipboard entry was captured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TransferMode {
    /// Paste inserts a copy and keeps the entry armed.
    Copy,
    /// Paste moves the entry and clears the clipboard.
    Cut,
}

/// A captured entry waiting to be pasted.
///
/// `snapshot` is a deep copy taken at capture time for both modes, so later
/// edits to the source never leak into a pending paste.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ClipboardEntry {
    /// Folder the entry was captured from.
    pub source_path: NodePath,
    /// Name of the captured entry in that folder.
    pub item_name: String,
    /// Value of the entry at capture time.
    pub snapshot: Node,
    /// Copy or cut.
    pub mode: TransferMode,
}

/// Clipboard slot. Holds at most one entry.
///
/// ```text
/// Empty --copy/cut--> Armed --paste (cut)--> Empty
///                     Armed --paste (copy)--> Armed
/// ```
///
/// A failed paste leaves the slot unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Clipboard(Option<ClipboardEntry>);

impl Clipboard {
    /// An empty clipboard.
    #[inline]
    pub const fn empty() -> Self {
        Self(None)
    }

    /// Returns `true` if an entry is waiting to be pasted.
    #[inline]
    pub fn is_armed(&self) -> bool {
        self.0.is_some()
    }

    /// The pending entry, if any.
    #[inline]
    pub fn entry(&self) -> Option<&ClipboardEntry> {
        self.0.as_ref()
    }

    /// Replace whatever is on the clipboard.
    pub fn store(&mut self, entry: ClipboardEntry) {
        self.0 = Some(entry);
    }

    /// Empty the clipboard, returning the previous entry.
    pub fn take(&mut self) -> Option<ClipboardEntry> {
        self.0.take()
    }

    /// Empty the clipboard.
    pub fn clear(&mut self) {
        self.0 = None;
    }
}

impl From<ClipboardEntry> for Clipboard {
    fn from(entry: ClipboardEntry) -> Self {
        Self(Some(entry))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(mode: TransferMode) -> ClipboardEntry {
        ClipboardEntry {
            source_path: NodePath::root(),
            item_name: "notes".into(),
            snapshot: Node::file("hello"),
            mode,
        }
    }

    #[test]
    fn starts_empty() {
        let clipboard = Clipboard::default();
        assert!(!clipboard.is_armed());
        assert!(clipboard.entry().is_none());
        assert_eq!(clipboard, Clipboard::empty());
    }

    #[test]
    fn store_overwrites_previous_entry() {
        let mut clipboard = Clipboard::from(entry(TransferMode::Copy));
        clipboard.store(entry(TransferMode::Cut));
        assert_eq!(clipboard.entry().map(|e| e.mode), Some(TransferMode::Cut));
    }

    #[test]
    fn take_empties_slot() {
        let mut clipboard = Clipboard::from(entry(TransferMode::Cut));
        assert!(clipboard.take().is_some());
        assert!(!clipboard.is_armed());
        assert!(clipboard.take().is_none());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn wire_format_uses_camel_case_and_null() {
        let json = serde_json::to_value(Clipboard::from(entry(TransferMode::Copy))).unwrap();
        assert_eq!(json["sourcePath"], serde_json::json!([]));
        assert_eq!(json["itemName"], "notes");
        assert_eq!(json["mode"], "copy");

        let empty = serde_json::to_string(&Clipboard::empty()).unwrap();
        assert_eq!(empty, "null");
        let parsed: Clipboard = serde_json::from_str("null").unwrap();
        assert!(!parsed.is_armed());
    }
}
