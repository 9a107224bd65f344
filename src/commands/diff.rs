use crate::areas::session::Session;
use crate::commands::buffer_key;
use anyhow::Context;
use colored::Colorize;
use std::io::Write;
use std::path::Path;

impl Session {
    /// Records `old` and then `new` as consecutive revisions of one path and
    /// prints the line diff between them
    pub fn diff(&self, old: &Path, new: &Path, path: Option<&str>, plain: bool) -> anyhow::Result<()> {
        let key = match path {
            Some(path) => path.to_string(),
            None => buffer_key(new)?,
        };

        for source in [old, new] {
            let contents = self.workspace().read_file(source)?;
            self.buffer()
                .with_origin(source.display().to_string())
                .write(key.as_str(), contents);
        }

        let history = self
            .buffer()
            .get_changes(&key)
            .with_context(|| format!("No change history kept for {}", key))?;
        let diff = history.diff(-2, -1)?;

        let mut writer = self.writer();
        writeln!(writer, "{}", format!("--- {}", old.display()).bold())?;
        writeln!(writer, "{}", format!("+++ {}", new.display()).bold())?;

        if plain {
            for line in diff.flat() {
                writeln!(writer, "{}", line)?;
            }
        } else {
            diff.print(&mut **writer)?;
        }

        Ok(())
    }
}
