use serde::{Deserialize, Serialize};

use vault_writer_core::path::ensure_markdown_extension;
use vault_writer_core::{Error, Result};

use super::{VaultWriter, display_path, read::load_text};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplaceTextResponse {
    pub path: String,
    pub relative_path: String,
    pub replacements: usize,
    pub message: String,
}

pub(super) fn replace_text(
    vault: &VaultWriter,
    relative_path: &str,
    find: &str,
    replace: &str,
    max_replacements: i64,
) -> Result<ReplaceTextResponse> {
    ensure_markdown_extension(relative_path)?;
    if find.is_empty() {
        return Err(Error::InvalidFind);
    }
    if max_replacements < 1 {
        return Err(Error::InvalidMax(max_replacements));
    }
    let limit = usize::try_from(max_replacements).unwrap_or(usize::MAX);

    let (file_path, content) = load_text(vault, relative_path)?;
    let (updated, replacements) = replace_bounded(&content, find, replace, limit);
    if replacements == 0 {
        return Err(Error::NoMatches(relative_path.to_string()));
    }

    std::fs::write(&file_path, updated).map_err(|err| Error::io("Failed to write file", err))?;
    tracing::debug!(
        path = %file_path.display(),
        replacements,
        "vault file text replaced"
    );

    Ok(ReplaceTextResponse {
        path: display_path(&file_path),
        relative_path: relative_path.to_string(),
        replacements,
        message: format!("Replaced {replacements} occurrence(s)."),
    })
}

/// Replaces at most `limit` non-overlapping occurrences of `find`, scanning left to right.
fn replace_bounded(haystack: &str, find: &str, replace: &str, limit: usize) -> (String, usize) {
    let mut out = String::with_capacity(haystack.len());
    let mut last = 0;
    let mut count = 0;
    for (idx, matched) in haystack.match_indices(find).take(limit) {
        out.push_str(&haystack[last..idx]);
        out.push_str(replace);
        last = idx + matched.len();
        count += 1;
    }
    out.push_str(&haystack[last..]);
    (out, count)
}
