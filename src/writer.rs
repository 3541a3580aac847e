//! Filesystem side of generation.
//!
//! The customization engine only produces paths and contents; a [`FileSystemWriter`]
//! decides what happens to them. [`LocalWriter`] writes below an output root,
//! [`DryRunWriter`] only records what would have been written.

use crate::error::Result;
use log::debug;
use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

/// Destination of generated directories and files. Paths are relative to the project root.
pub trait FileSystemWriter {
    fn create_directory(&self, path: &str) -> Result<()>;

    fn write_file(&self, path: &str, content: &[u8]) -> Result<()>;

    /// Marks a written file as executable. Does nothing on platforms without permission bits.
    fn set_executable(&self, path: &str) -> Result<()>;
}

/// Writes below a root directory, creating parent directories as needed.
#[derive(Debug, Clone)]
pub struct LocalWriter {
    root: PathBuf,
}

impl LocalWriter {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn target(&self, path: &str) -> PathBuf {
        self.root.join(path)
    }
}

impl FileSystemWriter for LocalWriter {
    fn create_directory(&self, path: &str) -> Result<()> {
        let target = self.target(path);
        debug!("Creating directory {}", target.display());
        fs::create_dir_all(target)?;
        Ok(())
    }

    fn write_file(&self, path: &str, content: &[u8]) -> Result<()> {
        let target = self.target(path);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        debug!("Writing {}", target.display());
        fs::write(target, content)?;
        Ok(())
    }

    #[cfg(unix)]
    fn set_executable(&self, path: &str) -> Result<()> {
        use std::os::unix::fs::PermissionsExt;

        let target = self.target(path);
        let mut permissions = fs::metadata(&target)?.permissions();
        permissions.set_mode(permissions.mode() | 0o111);
        fs::set_permissions(target, permissions)?;
        Ok(())
    }

    #[cfg(not(unix))]
    fn set_executable(&self, _path: &str) -> Result<()> {
        Ok(())
    }
}

/// One operation recorded by [`DryRunWriter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOperation {
    CreateDirectory(String),
    WriteFile { path: String, bytes: usize },
    SetExecutable(String),
}

impl std::fmt::Display for WriteOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WriteOperation::CreateDirectory(path) => write!(f, "create directory '{path}'"),
            WriteOperation::WriteFile { path, bytes } => {
                write!(f, "write file '{path}' ({bytes} bytes)")
            }
            WriteOperation::SetExecutable(path) => write!(f, "mark '{path}' executable"),
        }
    }
}

/// Records operations without touching the disk.
#[derive(Debug, Default)]
pub struct DryRunWriter {
    operations: RefCell<Vec<WriteOperation>>,
}

impl DryRunWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn operations(&self) -> Vec<WriteOperation> {
        self.operations.borrow().clone()
    }

    fn record(&self, operation: WriteOperation) {
        debug!("Dry run: {operation}");
        self.operations.borrow_mut().push(operation);
    }
}

impl FileSystemWriter for DryRunWriter {
    fn create_directory(&self, path: &str) -> Result<()> {
        self.record(WriteOperation::CreateDirectory(path.to_string()));
        Ok(())
    }

    fn write_file(&self, path: &str, content: &[u8]) -> Result<()> {
        self.record(WriteOperation::WriteFile { path: path.to_string(), bytes: content.len() });
        Ok(())
    }

    fn set_executable(&self, path: &str) -> Result<()> {
        self.record(WriteOperation::SetExecutable(path.to_string()));
        Ok(())
    }
}
