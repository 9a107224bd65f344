use crate::areas::buffer::Buffer;
use crate::areas::workspace::Workspace;
use std::cell::{RefCell, RefMut};
use std::path::Path;

/// Composition root for the CLI commands: one buffer, the directory sources are
/// read from, and the sink all command output goes to
pub struct Session {
    buffer: Buffer,
    workspace: Workspace,
    writer: RefCell<Box<dyn std::io::Write>>,
}

impl Session {
    pub fn new(buffer: Buffer, source_dir: &Path, writer: Box<dyn std::io::Write>) -> Self {
        Session {
            buffer,
            workspace: Workspace::new(source_dir.into()),
            writer: RefCell::new(writer),
        }
    }

    pub fn buffer(&self) -> &Buffer {
        &self.buffer
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }
}
