//! Notifications published by a buffer
//!
//! Observers subscribe through [`crate::areas::buffer::Buffer::subscribe`].
//! Nothing in the buffer depends on anyone listening.

use std::path::PathBuf;

/// Outcome of writing one buffered file during a flush
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlushResult {
    /// Absolute target path
    pub path: PathBuf,
    /// 1-based position within the flush
    pub index: usize,
    /// Number of files in the flush
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BufferEvent {
    FileStaged {
        path: String,
        origin: Option<String>,
        contents: String,
    },
    WriteStarted {
        total: usize,
    },
    FileWritten(FlushResult),
    FileFailed {
        path: PathBuf,
        error: String,
    },
    WriteDone {
        written: usize,
        failed: usize,
    },
}
