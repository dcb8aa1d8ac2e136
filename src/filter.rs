use crate::errors::{Error, Result};
use serde::{Deserialize, Serialize};

/// Filter entry selecting hidden files only.
pub const HIDDEN_ONLY: &str = ".";
/// Filter entry selecting every non-hidden file.
pub const ALL_FILES: &str = "*";
/// Filter entry selecting every file, hidden included.
pub const ALL_WITH_HIDDEN: &str = ".*";

/// Accepted input extensions, in caller order. Order matters: the first
/// entry decides which working set the rename pipeline collects. Entries are
/// matched case-sensitively and without a leading dot (`"txt"`, not
/// `".txt"`), except for the sentinel values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtensionFilter {
    entries: Vec<String>,
}

impl ExtensionFilter {
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entries: entries.into_iter().map(Into::into).collect(),
        }
    }

    /// Filter matching every non-hidden file.
    pub fn all() -> Self {
        Self::new([ALL_FILES])
    }

    /// Filter matching every file, hidden included.
    pub fn all_with_hidden() -> Self {
        Self::new([ALL_WITH_HIDDEN])
    }

    /// Filter matching hidden files only.
    pub fn hidden_only() -> Self {
        Self::new([HIDDEN_ONLY])
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn first(&self) -> Option<&str> {
        self.entries.first().map(String::as_str)
    }

    pub fn contains(&self, entry: &str) -> bool {
        self.entries.iter().any(|e| e == entry)
    }

    /// Whether a file extension matches one of the entries. Files without an
    /// extension match only an explicit empty entry.
    pub fn contains_extension(&self, extension: Option<&str>) -> bool {
        let extension = extension.unwrap_or("");
        self.entries.iter().any(|e| e == extension)
    }

    /// Whether the filter is exactly one of the sentinel entries, which makes
    /// every file in the working set eligible for renaming.
    pub fn is_single_sentinel(&self) -> bool {
        self.entries.len() == 1 && is_sentinel(&self.entries[0])
    }

    /// Whether the filter contains an "all files" sentinel.
    pub fn matches_all(&self) -> bool {
        self.contains(ALL_FILES) || self.contains(ALL_WITH_HIDDEN)
    }

    /// Listing-time normalization. An empty filter becomes `["*"]`; the
    /// two-entry `{"*", "."}` combination merges into `[".*"]`; any other
    /// multi-entry filter containing an "all files" sentinel is rejected as
    /// conflicting, naming the first entry.
    pub fn normalized(&self) -> Result<Self> {
        if self.entries.is_empty() {
            return Ok(Self::all());
        }

        if self.entries.len() > 1 {
            if self.entries.len() == 2 && self.contains(ALL_FILES) && self.contains(HIDDEN_ONLY) {
                return Ok(Self::all_with_hidden());
            }
            if self.contains(ALL_FILES) || self.contains(ALL_WITH_HIDDEN) {
                return Err(Error::ConflictingFilter {
                    entry: self.entries[0].clone(),
                });
            }
        }

        Ok(self.clone())
    }
}

/// Whether `entry` is one of the special filter values rather than a plain
/// extension name.
pub fn is_sentinel(entry: &str) -> bool {
    matches!(entry, HIDDEN_ONLY | ALL_FILES | ALL_WITH_HIDDEN)
}
