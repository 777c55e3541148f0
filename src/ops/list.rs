use serde::{Deserialize, Serialize};

use vault_writer_core::{Error, Result};

use super::{VaultWriter, display_path, metadata_if_exists};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListDirEntry {
    pub name: String,
    pub is_dir: bool,
    /// Size in bytes for files; always 0 for directories.
    pub size: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListDirResponse {
    pub path: String,
    pub relative_path: String,
    /// Immediate children in filesystem order.
    pub entries: Vec<ListDirEntry>,
}

pub(super) fn list_dir(vault: &VaultWriter, relative_dir: &str) -> Result<ListDirResponse> {
    let dir_path = vault.root.resolve(relative_dir, false)?;

    let Some(meta) = metadata_if_exists(&dir_path)? else {
        return Err(Error::NotFound(format!(
            "Directory not found: {relative_dir}"
        )));
    };
    if !meta.is_dir() {
        return Err(Error::InvalidType(format!("Not a directory: {relative_dir}")));
    }

    let list_err = |err: std::io::Error| Error::io("Failed to list directory", err);
    let mut entries = Vec::new();
    for entry in std::fs::read_dir(&dir_path).map_err(list_err)? {
        let entry = entry.map_err(list_err)?;
        let meta = std::fs::metadata(entry.path()).map_err(list_err)?;
        let is_dir = meta.is_dir();
        entries.push(ListDirEntry {
            name: entry.file_name().to_string_lossy().into_owned(),
            is_dir,
            size: if is_dir { 0 } else { meta.len() },
        });
    }

    Ok(ListDirResponse {
        path: display_path(&dir_path),
        relative_path: relative_dir.to_string(),
        entries,
    })
}
