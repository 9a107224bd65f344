use crate::areas::session::Session;
use crate::commands::buffer_key;
use anyhow::Context;
use colored::Colorize;
use std::io::Write;
use std::path::PathBuf;

impl Session {
    /// Records each source as the next revision of one path and lists the history
    pub fn history(&self, revisions: &[PathBuf], path: Option<&str>) -> anyhow::Result<()> {
        let Some(first) = revisions.first() else {
            anyhow::bail!("At least one revision is required");
        };

        let key = match path {
            Some(path) => path.to_string(),
            None => buffer_key(first)?,
        };

        for source in revisions {
            let contents = self.workspace().read_file(source)?;
            self.buffer()
                .with_origin(source.display().to_string())
                .write(key.as_str(), contents);
        }

        let history = self
            .buffer()
            .get_changes(&key)
            .with_context(|| format!("No change history kept for {}", key))?;

        let mut writer = self.writer();
        writeln!(
            writer,
            "{}",
            format!("{} ({} revisions)", history.path(), history.len()).bold()
        )?;
        for info in history.list() {
            writeln!(writer, "{}", info)?;
        }

        Ok(())
    }
}
