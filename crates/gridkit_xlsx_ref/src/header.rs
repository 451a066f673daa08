//! Header cells bound to columns, matched by a normalized key.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::column::ColumnId;

/// Normalize header text for matching: uppercase, with spaces, tabs, `-`,
/// `_`, NBSP and NUL removed. Blank input (any whitespace) gives `""`.
pub fn derive_header_key(text: &str) -> String {
    if text.trim().is_empty() {
        return String::new();
    }
    text.chars()
        .filter(|chr| !matches!(chr, ' ' | '\t' | '-' | '_' | '\u{00A0}' | '\0'))
        .flat_map(char::to_uppercase)
        .collect()
}

/// A header label and the column it sits in.
///
/// Equality, hashing and ordering use the column only.
#[derive(Debug, Clone)]
pub struct HeaderId {
    name: String,
    key: String,
    column: ColumnId,
}

impl HeaderId {
    pub fn new(name: impl Into<String>, column: ColumnId) -> Self {
        let name = name.into();
        let key = derive_header_key(&name);
        Self { name, key, column }
    }

    /// Unnamed header in the empty column.
    pub fn empty() -> Self {
        Self::new(String::new(), ColumnId::empty())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Matching key, see [`derive_header_key`].
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn column(&self) -> &ColumnId {
        &self.column
    }

    pub fn is_empty(&self) -> bool {
        self.column.is_empty() && self.key.is_empty()
    }

    /// `Order No`, `order_no` and `ORDER-NO` all match each other.
    pub fn matches(&self, text: &str) -> bool {
        !self.key.is_empty() && self.key == derive_header_key(text)
    }
}

/// First header whose key matches `name`; `None` when absent or when `name`
/// is blank.
pub fn find_header<'a>(headers: &'a [HeaderId], name: &str) -> Option<&'a HeaderId> {
    let key = derive_header_key(name);
    if key.is_empty() {
        return None;
    }
    headers.iter().find(|header| header.key == key)
}

impl Default for HeaderId {
    fn default() -> Self {
        Self::empty()
    }
}

impl PartialEq for HeaderId {
    fn eq(&self, other: &Self) -> bool {
        self.column == other.column
    }
}

impl Eq for HeaderId {}

impl Hash for HeaderId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.column.hash(state);
    }
}

impl PartialOrd for HeaderId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeaderId {
    fn cmp(&self, other: &Self) -> Ordering {
        self.column.cmp(&other.column)
    }
}

impl fmt::Display for HeaderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.column)
    }
}
