//! Command implementations behind the `scribe` binary
//!
//! - `stage`: buffer source files and flush them into an output directory
//! - `diff`: show the change between two revisions of a file
//! - `history`: list the recorded revisions of a file

pub mod diff;
pub mod history;
pub mod stage;

use std::path::{Component, Path};

/// Buffer key for a source path, always with forward slashes
pub(crate) fn buffer_key(source: &Path) -> anyhow::Result<String> {
    let mut parts = Vec::new();

    for component in source.components() {
        match component {
            Component::Normal(part) => parts.push(part.to_string_lossy().into_owned()),
            Component::CurDir => {}
            _ => anyhow::bail!("Source path must stay inside the current directory: {:?}", source),
        }
    }

    if parts.is_empty() {
        anyhow::bail!("Source path does not name a file: {:?}", source);
    }

    Ok(parts.join("/"))
}
