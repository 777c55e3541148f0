use vault_writer::{Error, VaultWriter};

/// Runs one operation on the blocking pool; the operations use `std::fs` directly.
pub(super) async fn run_vault<T>(
    state: super::AppState,
    op: impl FnOnce(&VaultWriter) -> vault_writer::Result<T> + Send + 'static,
) -> vault_writer::Result<T>
where
    T: Send + 'static,
{
    tokio::task::spawn_blocking(move || op(&state.inner.vault))
        .await
        .unwrap_or_else(|err| {
            Err(Error::io(
                "Operation did not complete",
                std::io::Error::other(err.to_string()),
            ))
        })
}
