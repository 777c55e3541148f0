#![forbid(unsafe_code)]

//! `vault-writer` provides text file operations confined to a single vault directory.
//!
//! - `ops`: read/write/list/replace/scaffold operations over a [`VaultRoot`]
//! - [`OperationResult`]: the `{ success, ... }` shape every operation reports to callers

pub mod ops;
mod result;

pub use ops::{
    EnsureManualDirsResponse, ListDirEntry, ListDirResponse, ReadFileResponse,
    ReplaceTextResponse, VaultWriter, WriteFileResponse,
};
pub use result::OperationResult;
pub use vault_writer_core::{Error, ErrorCode, Result, VaultRoot};
