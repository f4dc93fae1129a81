pub mod artist;
pub mod show;
pub mod venue;

/// Result of an insert guarded by a soft uniqueness check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertOutcome<T> {
    Inserted(T),
    /// A row with the same identity already exists; nothing was written.
    Duplicate,
}

/// Case-insensitive substring filter on names.
///
/// Both the term and each name are folded with Unicode lowercasing, so
/// `"CAFÉ"` finds "Café du Nord" and `%`/`_` are ordinary characters.
pub(crate) struct NameFilter {
    folded: String,
}

impl NameFilter {
    pub(crate) fn new(term: &str) -> Self {
        Self {
            folded: term.to_lowercase(),
        }
    }

    pub(crate) fn matches(&self, name: &str) -> bool {
        self.folded.is_empty() || name.to_lowercase().contains(&self.folded)
    }

    /// Keeps the `(id, name)` rows whose name contains the term, in order.
    pub(crate) fn retain(&self, rows: Vec<(i32, String)>) -> Vec<(i32, String)> {
        rows.into_iter()
            .filter(|(_, name)| self.matches(name))
            .collect()
    }
}
