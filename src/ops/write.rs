use serde::{Deserialize, Serialize};

use vault_writer_core::path::ensure_markdown_extension;
use vault_writer_core::{Error, Result};

use super::{VaultWriter, display_path, metadata_if_exists};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WriteFileResponse {
    pub path: String,
    pub relative_path: String,
    pub message: String,
}

pub(super) fn write_file(
    vault: &VaultWriter,
    relative_path: &str,
    content: &str,
    create_dirs: bool,
) -> Result<WriteFileResponse> {
    ensure_markdown_extension(relative_path)?;

    let file_path = vault.root.resolve(relative_path, create_dirs)?;
    if metadata_if_exists(&file_path)?.is_some_and(|meta| meta.is_dir()) {
        return Err(Error::InvalidType(format!(
            "Target is a directory: {relative_path}"
        )));
    }

    std::fs::write(&file_path, content).map_err(|err| Error::io("Failed to write file", err))?;
    tracing::debug!(
        path = %file_path.display(),
        bytes = content.len(),
        "vault file written"
    );

    Ok(WriteFileResponse {
        path: display_path(&file_path),
        relative_path: relative_path.to_string(),
        message: "File written (overwrite enabled).".to_string(),
    })
}
