use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use vault_writer_core::{Error, Result};

use super::{VaultWriter, display_path, metadata_if_exists};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadFileResponse {
    pub path: String,
    pub relative_path: String,
    pub content: String,
}

pub(super) fn read_file(vault: &VaultWriter, relative_path: &str) -> Result<ReadFileResponse> {
    let (file_path, content) = load_text(vault, relative_path)?;
    Ok(ReadFileResponse {
        path: display_path(&file_path),
        relative_path: relative_path.to_string(),
        content,
    })
}

/// Resolves `relative_path` and reads it as UTF-8. Shared with `replace_text`.
pub(super) fn load_text(vault: &VaultWriter, relative_path: &str) -> Result<(PathBuf, String)> {
    let file_path = vault.root.resolve(relative_path, false)?;

    let Some(meta) = metadata_if_exists(&file_path)? else {
        return Err(Error::NotFound(format!("File not found: {relative_path}")));
    };
    if !meta.is_file() {
        return Err(Error::InvalidType(format!("Not a file: {relative_path}")));
    }

    let content = std::fs::read_to_string(&file_path)
        .map_err(|err| Error::io("Failed to read file", err))?;
    Ok((file_path, content))
}
