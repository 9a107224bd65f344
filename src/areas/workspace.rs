use anyhow::Context;
use std::io::Write;
use std::path::{Component, Path, PathBuf};

/// Directory that buffered files are read from or flushed into
#[derive(Debug, Clone)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Absolute, lexically normalized location of `file_path` inside the workspace
    pub fn resolve(&self, file_path: &Path) -> anyhow::Result<PathBuf> {
        let joined = self.path.join(file_path);

        let absolute = if joined.is_absolute() {
            joined
        } else {
            std::env::current_dir()
                .context("Failed to read current directory")?
                .join(joined)
        };

        Ok(normalize(&absolute))
    }

    pub fn read_file(&self, file_path: &Path) -> anyhow::Result<String> {
        let file_path = self.path.join(file_path);

        let content = std::fs::read_to_string(&file_path)
            .with_context(|| format!("Failed to read file: {:?}", file_path))?;

        Ok(content)
    }

    /// Writes `data` to `file_path`, creating missing parent directories first
    pub fn write_file(&self, file_path: &Path, data: &[u8]) -> anyhow::Result<PathBuf> {
        let path = self.resolve(file_path)?;

        if let Some(parent) = path.parent() {
            self.make_directory(parent)?;
        }

        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&path)
            .with_context(|| format!("Failed to open file: {:?}", file_path))?;

        file.write_all(data)
            .with_context(|| format!("Failed to write to file: {:?}", file_path))?;

        Ok(path)
    }

    fn make_directory(&self, dir_path: &Path) -> anyhow::Result<()> {
        if dir_path.is_dir() {
            return Ok(());
        }

        std::fs::create_dir_all(dir_path)
            .with_context(|| format!("Failed to create directory: {:?}", dir_path))?;

        Ok(())
    }
}

// `..` past the root stays at the root
fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }

    normalized
}
