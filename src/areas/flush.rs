use crate::areas::workspace::Workspace;
use crate::artifacts::events::{BufferEvent, FlushResult};
use anyhow::Context;
use std::path::Path;
use tokio::sync::broadcast;

/// Iterator that writes one buffered file per step.
///
/// Works on the entries captured when it was created. A failed write is yielded
/// as an error and iteration carries on with the next entry.
pub struct Flush {
    entries: std::vec::IntoIter<(String, String)>,
    workspace: Workspace,
    dry: bool,
    events: broadcast::Sender<BufferEvent>,
    total: usize,
    position: usize,
    written: usize,
    failed: usize,
    started: bool,
    finished: bool,
}

impl Flush {
    pub(crate) fn new(
        entries: Vec<(String, String)>,
        workspace: Workspace,
        dry: bool,
        events: broadcast::Sender<BufferEvent>,
    ) -> Self {
        Flush {
            total: entries.len(),
            entries: entries.into_iter(),
            workspace,
            dry,
            events,
            position: 0,
            written: 0,
            failed: 0,
            started: false,
            finished: false,
        }
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_dry(&self) -> bool {
        self.dry
    }

    fn write_entry(&self, path: &str, contents: &str) -> anyhow::Result<FlushResult> {
        let relative = Path::new(path);

        let target = if self.dry {
            self.workspace.resolve(relative)?
        } else {
            self.workspace
                .write_file(relative, contents.as_bytes())
                .with_context(|| format!("Failed to flush {}", path))?
        };

        Ok(FlushResult {
            path: target,
            index: self.position,
            total: self.total,
        })
    }

    fn emit(&self, event: BufferEvent) {
        let _ = self.events.send(event);
    }
}

impl Iterator for Flush {
    type Item = anyhow::Result<FlushResult>;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.started {
            self.started = true;
            tracing::info!(total = self.total, dry = self.dry, out_dir = ?self.workspace.path(), "flush started");
            self.emit(BufferEvent::WriteStarted { total: self.total });
        }

        let Some((path, contents)) = self.entries.next() else {
            if !self.finished {
                self.finished = true;
                tracing::info!(written = self.written, failed = self.failed, "flush done");
                self.emit(BufferEvent::WriteDone {
                    written: self.written,
                    failed: self.failed,
                });
            }
            return None;
        };

        self.position += 1;
        let result = self.write_entry(&path, &contents);

        match &result {
            Ok(flushed) => {
                self.written += 1;
                tracing::info!(path = ?flushed.path, index = flushed.index, total = flushed.total, "wrote file");
                self.emit(BufferEvent::FileWritten(flushed.clone()));
            }
            Err(err) => {
                self.failed += 1;
                tracing::warn!(path = %path, error = %err, "failed to write file");
                self.emit(BufferEvent::FileFailed {
                    path: self
                        .workspace
                        .resolve(Path::new(&path))
                        .unwrap_or_else(|_| self.workspace.path().join(&path)),
                    error: format!("{:#}", err),
                });
            }
        }

        Some(result)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}
