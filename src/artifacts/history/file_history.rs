//! Append-only change history of a single path
//!
//! Snapshots are stored in the order they were recorded. Any snapshot can be
//! addressed from the front (`0` is the oldest) or from the back (`-1` is the
//! newest), and any two snapshots can be diffed line by line.

use crate::artifacts::diff::line_diff::LineDiff;
use crate::artifacts::history::snapshot::{Snapshot, SnapshotInfo};
use chrono::Utc;

/// Maps a possibly negative index onto `[0, len)`
pub fn resolve_index(index: isize, len: usize) -> Option<usize> {
    let resolved = if index >= 0 {
        index as usize
    } else {
        len.checked_sub(index.unsigned_abs())?
    };

    (resolved < len).then_some(resolved)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileHistory {
    path: String,
    entries: Vec<Snapshot>,
}

impl FileHistory {
    pub fn new(path: impl Into<String>) -> Self {
        FileHistory {
            path: path.into(),
            entries: Vec::new(),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Snapshot> {
        self.entries.iter()
    }

    /// Records a new snapshot stamped with the current time.
    ///
    /// Timestamps never go backwards within a history, even if the wall clock does.
    pub fn append(&mut self, contents: impl Into<String>, origin: Option<String>) {
        let now = Utc::now();
        let timestamp = match self.entries.last() {
            Some(last) if last.timestamp() > now => last.timestamp(),
            _ => now,
        };

        self.entries
            .push(Snapshot::new(contents.into(), origin, timestamp));
    }

    pub fn list(&self) -> Vec<SnapshotInfo> {
        self.entries
            .iter()
            .enumerate()
            .map(|(index, snapshot)| SnapshotInfo {
                index,
                origin: snapshot.origin().map(str::to_string),
                timestamp: snapshot.timestamp(),
            })
            .collect()
    }

    pub fn at(&self, index: isize) -> Option<&Snapshot> {
        resolve_index(index, self.entries.len()).map(|index| &self.entries[index])
    }

    pub fn latest(&self) -> Option<&Snapshot> {
        self.entries.last()
    }

    pub fn diff(&self, prev_index: isize, next_index: isize) -> anyhow::Result<LineDiff> {
        let prev = self.snapshot_or_err(prev_index)?;
        let next = self.snapshot_or_err(next_index)?;

        Ok(LineDiff::between(prev.contents(), next.contents()))
    }

    fn snapshot_or_err(&self, index: isize) -> anyhow::Result<&Snapshot> {
        match self.at(index) {
            Some(snapshot) => Ok(snapshot),
            None => anyhow::bail!(
                "snapshot index {} is out of range for history of {} with {} entries",
                index,
                self.path,
                self.entries.len()
            ),
        }
    }
}
