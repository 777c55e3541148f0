use std::collections::VecDeque;
use std::ffi::OsString;
use std::io;
use std::path::{Component, MAIN_SEPARATOR_STR, Path, PathBuf};

use crate::{Error, Result};

/// Matches the kernel's `MAXSYMLINKS`.
const MAX_SYMLINK_HOPS: usize = 40;

/// The single directory every operation is confined to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VaultRoot {
    path: PathBuf,
}

impl VaultRoot {
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if path.as_os_str().is_empty() {
            return Err(Error::InvalidVault("vault path is empty".to_string()));
        }
        if !path.is_absolute() {
            return Err(Error::InvalidVault(format!(
                "vault path must be absolute: {}",
                path.display()
            )));
        }
        Ok(Self { path })
    }

    /// Resolves `relative_path` against the vault and rejects anything that lands outside it.
    ///
    /// Both the candidate and the root are canonicalized (symlinks included) before the
    /// containment check, which compares whole path components. With `create_parent_dirs`
    /// the missing ancestors of the candidate are created after the check passes.
    pub fn resolve(&self, relative_path: &str, create_parent_dirs: bool) -> Result<PathBuf> {
        let candidate = canonicalize_lenient(&self.path.join(relative_path))
            .map_err(|err| Error::InvalidPath(err.to_string()))?;
        let root = canonicalize_lenient(&self.path)
            .map_err(|err| Error::InvalidVault(err.to_string()))?;

        if !candidate.starts_with(&root) {
            tracing::warn!(
                relative_path,
                resolved = %candidate.display(),
                "rejected path outside the vault root"
            );
            return Err(Error::PathTraversal);
        }

        if create_parent_dirs
            && let Some(parent) = candidate.parent()
        {
            std::fs::create_dir_all(parent)
                .map_err(|err| Error::io("Failed to create parent directories", err))?;
        }

        Ok(candidate)
    }
}

enum Step {
    Prefix(OsString),
    RootDir,
    Parent,
    Name(OsString),
}

fn steps(path: &Path) -> Vec<Step> {
    path.components()
        .filter_map(|component| match component {
            Component::Prefix(prefix) => Some(Step::Prefix(prefix.as_os_str().to_owned())),
            Component::RootDir => Some(Step::RootDir),
            Component::CurDir => None,
            Component::ParentDir => Some(Step::Parent),
            Component::Normal(name) => Some(Step::Name(name.to_owned())),
        })
        .collect()
}

/// True for lookups that failed because a component does not exist (or is not a directory).
pub fn is_missing(err: &io::Error) -> bool {
    matches!(
        err.kind(),
        io::ErrorKind::NotFound | io::ErrorKind::NotADirectory
    )
}

/// Canonicalizes an absolute path without requiring it to exist.
///
/// Existing components are resolved through symlinks; components that do not exist yet are
/// appended as-is, with `..` applied lexically to whatever has been resolved so far. A
/// component whose metadata cannot be read is kept as a plain name; the filesystem call that
/// later touches it reports the failure. Only symlink loops fail here.
pub fn canonicalize_lenient(path: &Path) -> io::Result<PathBuf> {
    if !path.is_absolute() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("path must be absolute: {}", path.display()),
        ));
    }

    let mut pending: VecDeque<Step> = steps(path).into();
    let mut resolved = PathBuf::new();
    let mut hops = 0usize;

    while let Some(step) = pending.pop_front() {
        match step {
            Step::Prefix(prefix) => resolved = PathBuf::from(prefix),
            Step::RootDir => resolved.push(MAIN_SEPARATOR_STR),
            Step::Parent => {
                resolved.pop();
            }
            Step::Name(name) => {
                resolved.push(&name);
                match std::fs::symlink_metadata(&resolved) {
                    Ok(meta) if meta.file_type().is_symlink() => {
                        hops += 1;
                        if hops > MAX_SYMLINK_HOPS {
                            return Err(io::Error::other(format!(
                                "too many levels of symbolic links: {}",
                                resolved.display()
                            )));
                        }
                        let target = std::fs::read_link(&resolved)?;
                        resolved.pop();
                        for step in steps(&target).into_iter().rev() {
                            pending.push_front(step);
                        }
                    }
                    Ok(_) | Err(_) => {}
                }
            }
        }
    }

    Ok(resolved)
}

/// Write-type operations only accept Markdown files.
pub fn ensure_markdown_extension(relative_path: &str) -> Result<()> {
    let is_markdown = Path::new(relative_path)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("md"));
    if is_markdown {
        Ok(())
    } else {
        Err(Error::InvalidExtension(relative_path.to_string()))
    }
}

/// A manual name must be exactly one plain path segment.
pub fn validate_manual_name(name: &str) -> Result<&str> {
    if name.is_empty() || name.contains(['/', '\\']) {
        return Err(Error::InvalidManual);
    }
    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(name),
        _ => Err(Error::InvalidManual),
    }
}
