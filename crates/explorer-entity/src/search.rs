//! Search result pairing.

use serde::{Deserialize, Serialize};

use crate::file::File;
use crate::folder::Folder;

/// Folder and file hits for one query, returned side by side.
///
/// The two sequences are independent: a file hit does not imply its
/// folder matched, and vice versa.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResults {
    /// Folders whose name matched.
    pub folders: Vec<Folder>,
    /// Files whose name matched.
    pub files: Vec<File>,
}

impl SearchResults {
    /// A result with no hits.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Total number of hits across both sequences.
    pub fn total(&self) -> usize {
        self.folders.len() + self.files.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_serializes_both_sequences() {
        let value = serde_json::to_value(SearchResults::empty()).expect("serialize");
        assert_eq!(value, serde_json::json!({ "folders": [], "files": [] }));
    }
}
