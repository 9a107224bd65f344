//! In-memory staging area for file writes
//!
//! A [`Buffer`] maps relative paths to the content that should end up on disk.
//! Handles created through [`Buffer::with_origin`] are views over the same
//! storage that only differ in the origin label attached to their writes.
//!
//! ## Lifecycle
//!
//! 1. Writes replace the current content of a path and, when change logging is
//!    enabled, append a snapshot to that path's history.
//! 2. [`Buffer::flush`] snapshots the current entries and writes them one by one
//!    as the returned iterator is driven.

use crate::areas::change_log::ChangeLog;
use crate::areas::flush::Flush;
use crate::areas::options::BufferOptions;
use crate::areas::workspace::Workspace;
use crate::artifacts::events::{BufferEvent, FlushResult};
use crate::artifacts::history::file_history::FileHistory;
use indexmap::IndexMap;
use parking_lot::RwLock;
use std::path::PathBuf;
use std::sync::{Arc, OnceLock};
use tokio::sync::broadcast;

const EVENT_CAPACITY: usize = 1024;

static SHARED_BUFFER: OnceLock<Buffer> = OnceLock::new();

#[derive(Debug, Default)]
struct BufferState {
    files: IndexMap<String, String>,
    change_log: ChangeLog,
}

#[derive(Debug)]
struct Shared {
    options: BufferOptions,
    state: RwLock<BufferState>,
    events: broadcast::Sender<BufferEvent>,
}

/// Handle to a write buffer.
///
/// Cloning a handle or deriving one with [`Buffer::with_origin`] never copies
/// the buffered files; every handle reads and writes the same storage.
#[derive(Debug, Clone)]
pub struct Buffer {
    shared: Arc<Shared>,
    origin: Option<String>,
}

impl Buffer {
    pub fn new(options: BufferOptions) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        let origin = options.origin.clone();

        Buffer {
            shared: Arc::new(Shared {
                options,
                state: RwLock::new(BufferState::default()),
                events,
            }),
            origin,
        }
    }

    /// Process-wide buffer with default options, created on first use
    pub fn shared() -> Buffer {
        SHARED_BUFFER
            .get_or_init(|| Buffer::new(BufferOptions::default()))
            .clone()
    }

    /// View over the same storage that labels its writes with `origin`
    pub fn with_origin(&self, origin: impl Into<String>) -> Buffer {
        Buffer {
            shared: self.shared.clone(),
            origin: Some(origin.into()),
        }
    }

    pub fn origin(&self) -> Option<&str> {
        self.origin.as_deref()
    }

    /// Only affects writes made after the call
    pub fn set_default_origin(&mut self, origin: Option<String>) {
        self.origin = origin;
    }

    pub fn options(&self) -> &BufferOptions {
        &self.shared.options
    }

    pub fn shares_storage_with(&self, other: &Buffer) -> bool {
        Arc::ptr_eq(&self.shared, &other.shared)
    }

    pub fn subscribe(&self) -> broadcast::Receiver<BufferEvent> {
        self.shared.events.subscribe()
    }

    pub fn write(&self, path: impl Into<String>, contents: impl Into<String>) {
        self.write_with_origin(path, contents, None)
    }

    pub fn write_with_origin(
        &self,
        path: impl Into<String>,
        contents: impl Into<String>,
        origin: Option<&str>,
    ) {
        let path = path.into();
        let contents = contents.into();
        let origin = origin.map(str::to_string).or_else(|| self.origin.clone());

        {
            let mut state = self.shared.state.write();
            state.files.insert(path.clone(), contents.clone());

            if self.shared.options.log_changes {
                state
                    .change_log
                    .record(&path, contents.as_str(), origin.clone());
            }
        }

        tracing::debug!(path = %path, origin = ?origin, bytes = contents.len(), "staged file");

        self.emit(BufferEvent::FileStaged {
            path,
            origin,
            contents,
        });
    }

    pub fn get(&self, path: &str) -> Option<(String, String)> {
        self.shared
            .state
            .read()
            .files
            .get_key_value(path)
            .map(|(path, contents)| (path.clone(), contents.clone()))
    }

    /// First entry, in insertion order, for which `predicate(path, contents)` holds
    pub fn find<P>(&self, predicate: P) -> Option<(String, String)>
    where
        P: Fn(&str, &str) -> bool,
    {
        self.entries()
            .into_iter()
            .find(|(path, contents)| predicate(path, contents))
    }

    pub fn contains(&self, path: &str) -> bool {
        self.shared.state.read().files.contains_key(path)
    }

    pub fn size(&self) -> usize {
        self.shared.state.read().files.len()
    }

    pub fn paths(&self) -> Vec<String> {
        self.shared.state.read().files.keys().cloned().collect()
    }

    pub fn entries(&self) -> Vec<(String, String)> {
        self.shared
            .state
            .read()
            .files
            .iter()
            .map(|(path, contents)| (path.clone(), contents.clone()))
            .collect()
    }

    /// History of `path`, or `None` when change logging is disabled
    pub fn get_changes(&self, path: &str) -> Option<FileHistory> {
        if !self.shared.options.log_changes {
            return None;
        }

        self.shared.state.read().change_log.get(path).cloned()
    }

    /// Lazily writes the current entries into the configured output directory.
    ///
    /// Entries are captured now; later writes to the buffer are not seen by the
    /// returned iterator.
    pub fn flush(&self) -> Flush {
        self.flush_into(self.shared.options.out_dir.clone())
    }

    /// Same as [`Buffer::flush`] with a different output directory for this call
    /// only. Dry mode still follows the buffer's options.
    pub fn flush_into(&self, out_dir: impl Into<PathBuf>) -> Flush {
        Flush::new(
            self.entries(),
            Workspace::new(out_dir.into().into_boxed_path()),
            self.shared.options.dry,
            self.shared.events.clone(),
        )
    }

    /// Drives a whole flush, stopping at the first failed write
    pub fn flush_all(&self) -> anyhow::Result<Vec<FlushResult>> {
        self.flush().collect()
    }

    fn emit(&self, event: BufferEvent) {
        // no subscribers is not an error
        let _ = self.shared.events.send(event);
    }
}
