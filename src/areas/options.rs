use derive_new::new;
use std::path::PathBuf;

/// Settings fixed when a buffer is created
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct BufferOptions {
    /// Base directory buffered paths are flushed into
    pub out_dir: PathBuf,
    /// Resolve targets without touching the disk
    pub dry: bool,
    /// Keep a snapshot history for every written path
    pub log_changes: bool,
    /// Default origin for writes made through the root handle
    #[new(default)]
    pub origin: Option<String>,
}

impl Default for BufferOptions {
    fn default() -> Self {
        BufferOptions::new(PathBuf::from("."), false, false)
    }
}

impl BufferOptions {
    pub fn with_out_dir(mut self, out_dir: impl Into<PathBuf>) -> Self {
        self.out_dir = out_dir.into();
        self
    }

    pub fn with_dry(mut self, dry: bool) -> Self {
        self.dry = dry;
        self
    }

    pub fn with_log_changes(mut self, log_changes: bool) -> Self {
        self.log_changes = log_changes;
        self
    }

    pub fn with_origin(mut self, origin: Option<String>) -> Self {
        self.origin = origin;
        self
    }
}
