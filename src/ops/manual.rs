use serde::{Deserialize, Serialize};

use vault_writer_core::path::validate_manual_name;
use vault_writer_core::{Error, Result};

use super::{VaultWriter, display_path};

const MANUAL_SUBDIRS: [&str; 3] = ["drafts", "diagrams", "tasks"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnsureManualDirsResponse {
    pub manual: String,
    /// `<manual>`, then `drafts`, `diagrams` and `tasks` beneath it.
    pub paths: Vec<String>,
    pub message: String,
}

pub(super) fn ensure_manual_dirs(
    vault: &VaultWriter,
    manual: &str,
) -> Result<EnsureManualDirsResponse> {
    let manual = validate_manual_name(manual)?;

    let targets = std::iter::once(manual.to_string())
        .chain(MANUAL_SUBDIRS.iter().map(|sub| format!("{manual}/{sub}")));

    let mut paths = Vec::with_capacity(MANUAL_SUBDIRS.len() + 1);
    for relative in targets {
        let target = vault.root.resolve(&relative, false)?;
        std::fs::create_dir_all(&target).map_err(|err| {
            Error::io(
                format!("Failed to create directory {}", target.display()),
                err,
            )
        })?;
        paths.push(display_path(&target));
    }
    tracing::debug!(manual, "manual directories ensured");

    Ok(EnsureManualDirsResponse {
        manual: manual.to_string(),
        paths,
        message: "Manual directories ensured.".to_string(),
    })
}
