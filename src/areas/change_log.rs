use crate::artifacts::history::file_history::FileHistory;
use indexmap::IndexMap;

/// Registry of change histories, one per path
#[derive(Debug, Default, Clone)]
pub struct ChangeLog {
    histories: IndexMap<String, FileHistory>,
}

impl ChangeLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a snapshot, creating the path's history on first use
    pub fn record(&mut self, path: &str, contents: impl Into<String>, origin: Option<String>) {
        let history = self
            .histories
            .entry(path.to_string())
            .or_insert_with(|| FileHistory::new(path));

        history.append(contents, origin);

        tracing::debug!(path, revisions = history.len(), "recorded change");
    }

    pub fn get(&self, path: &str) -> Option<&FileHistory> {
        self.histories.get(path)
    }

    pub fn len(&self) -> usize {
        self.histories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.histories.is_empty()
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.histories.keys().map(String::as_str)
    }
}
