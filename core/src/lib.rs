#![forbid(unsafe_code)]

//! Shared building blocks for `vault-writer`: the vault root, the path resolver that keeps
//! every access inside it, and the closed set of error codes operations report.

pub mod config;
mod error;
pub mod path;

pub use error::{Error, ErrorCode, Result};
pub use path::VaultRoot;
