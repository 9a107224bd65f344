use chrono::{DateTime, Utc};
use derive_new::new;

/// Full contents of a file at one point in its history
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Snapshot {
    contents: String,
    origin: Option<String>,
    timestamp: DateTime<Utc>,
}

impl Snapshot {
    pub fn contents(&self) -> &str {
        &self.contents
    }

    /// Label of whoever staged this change, if any
    pub fn origin(&self) -> Option<&str> {
        self.origin.as_deref()
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn line_count(&self) -> usize {
        self.contents.split('\n').count()
    }
}

/// Lightweight listing entry for a snapshot; contents are left out
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotInfo {
    pub index: usize,
    pub origin: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl std::fmt::Display for SnapshotInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:>4}  {:<16}  {}",
            self.index,
            self.origin.as_deref().unwrap_or("-"),
            self.timestamp.to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
        )
    }
}
