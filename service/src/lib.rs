//! HTTP service exposing `vault-writer` operations over JSON.
//!
//! - `config_io`: locating the vault directory from flags, config files and environment
//! - `server`: the axum router

pub mod config_io;
pub mod server;
