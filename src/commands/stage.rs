use crate::areas::session::Session;
use crate::commands::buffer_key;
use colored::Colorize;
use std::io::Write;
use std::path::PathBuf;

impl Session {
    /// Buffers every source file and flushes the buffer into the output directory
    pub fn stage(&self, sources: &[PathBuf]) -> anyhow::Result<()> {
        for source in sources {
            let key = buffer_key(source)?;
            let contents = self.workspace().read_file(source)?;

            self.buffer().write(key, contents);
        }

        let mut flush = self.buffer().flush();
        let (total, dry) = (flush.total(), flush.is_dry());
        let mut failed = 0;

        for result in flush.by_ref() {
            match result {
                Ok(flushed) => writeln!(
                    self.writer(),
                    "{} {}",
                    format!("[{}/{}]", flushed.index, flushed.total).cyan(),
                    flushed.path.display()
                )?,
                Err(err) => {
                    failed += 1;
                    writeln!(self.writer(), "{} {:#}", "error:".red().bold(), err)?;
                }
            }
        }

        let out_dir = self.buffer().options().out_dir.display().to_string();
        if dry {
            writeln!(
                self.writer(),
                "Resolved {} files in {} {}",
                total,
                out_dir,
                "(dry run)".yellow()
            )?;
        } else {
            writeln!(
                self.writer(),
                "Wrote {} files to {}",
                total - failed,
                out_dir
            )?;
        }

        if failed > 0 {
            anyhow::bail!("{} of {} files failed to write", failed, total);
        }

        Ok(())
    }
}
