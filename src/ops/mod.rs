mod list;
mod manual;
mod read;
mod replace;
mod write;

use std::fs;
use std::path::Path;

use vault_writer_core::path::is_missing;
use vault_writer_core::{Error, Result, VaultRoot};

pub use list::{ListDirEntry, ListDirResponse};
pub use manual::EnsureManualDirsResponse;
pub use read::ReadFileResponse;
pub use replace::ReplaceTextResponse;
pub use write::WriteFileResponse;

pub const DEFAULT_LIST_DIR: &str = ".";
pub const DEFAULT_MAX_REPLACEMENTS: i64 = 1;

/// The operation set, bound to one vault root for its whole lifetime.
#[derive(Debug, Clone)]
pub struct VaultWriter {
    root: VaultRoot,
}

impl VaultWriter {
    pub fn new(root: VaultRoot) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &VaultRoot {
        &self.root
    }
}

impl VaultWriter {
    pub fn read_file(&self, relative_path: &str) -> Result<ReadFileResponse> {
        read::read_file(self, relative_path)
    }

    /// Overwrites `relative_path` with `content`. Only `.md` targets are accepted.
    pub fn write_file(
        &self,
        relative_path: &str,
        content: &str,
        create_dirs: bool,
    ) -> Result<WriteFileResponse> {
        write::write_file(self, relative_path, content, create_dirs)
    }

    pub fn list_dir(&self, relative_dir: &str) -> Result<ListDirResponse> {
        list::list_dir(self, relative_dir)
    }

    /// Replaces the first `max_replacements` literal occurrences of `find`.
    pub fn replace_text(
        &self,
        relative_path: &str,
        find: &str,
        replace: &str,
        max_replacements: i64,
    ) -> Result<ReplaceTextResponse> {
        replace::replace_text(self, relative_path, find, replace, max_replacements)
    }

    pub fn ensure_manual_dirs(&self, manual: &str) -> Result<EnsureManualDirsResponse> {
        manual::ensure_manual_dirs(self, manual)
    }
}

fn metadata_if_exists(path: &Path) -> Result<Option<fs::Metadata>> {
    match fs::metadata(path) {
        Ok(meta) => Ok(Some(meta)),
        Err(err) if is_missing(&err) => Ok(None),
        Err(err) => Err(Error::io("Failed to inspect path", err)),
    }
}

fn display_path(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
