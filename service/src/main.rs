use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

use vault_writer_service::config_io::{VaultSources, resolve_vault_path_from_env};

#[derive(Debug, Parser)]
#[command(name = "vault-writer-service")]
struct Args {
    /// Bind address, e.g. 127.0.0.1:8080
    #[arg(long, default_value = "127.0.0.1:8080")]
    listen: SocketAddr,

    /// Vault directory; overrides the config file and environment.
    #[arg(long)]
    vault: Option<PathBuf>,

    /// Config file (.yaml, .toml or .json) providing `vault_path`.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Anchor for relative vault paths and the default `config.yaml` (defaults to the
    /// current directory).
    #[arg(long)]
    project_root: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let project_root = match args.project_root {
        Some(path) => path,
        None => std::env::current_dir()?,
    };
    let vault_path = resolve_vault_path_from_env(&VaultSources {
        vault_override: args.vault,
        config_path: args.config,
        project_root,
    })?;

    if !vault_path.is_dir() {
        tracing::warn!(
            vault = %vault_path.display(),
            "vault directory does not exist yet; it will be created by the first write"
        );
    }
    let root = vault_writer::VaultRoot::new(&vault_path)?;
    let app = vault_writer_service::server::build_app(root);

    let listener = tokio::net::TcpListener::bind(args.listen).await?;
    tracing::info!(
        listen = %args.listen,
        vault = %vault_path.display(),
        "vault-writer service listening"
    );
    axum::serve(listener, app).await?;
    Ok(())
}
