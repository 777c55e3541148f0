use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// On-disk configuration for the vault.
///
/// Unknown keys are ignored: the same file is commonly shared with other tools.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VaultConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vault_path: Option<PathBuf>,
}
