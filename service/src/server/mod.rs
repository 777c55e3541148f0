//! HTTP adapter: one `POST /v1/<tool>` route per vault operation.

mod handlers;
mod layers;
mod runner;

use std::sync::Arc;

use axum::Json;
use axum::Router;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::middleware;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use serde::Serialize;

use vault_writer::{ErrorCode, OperationResult, VaultRoot, VaultWriter};

#[derive(Clone)]
struct AppState {
    inner: Arc<AppInner>,
}

struct AppInner {
    vault: VaultWriter,
}

/// Failure body for requests rejected before any operation runs.
#[derive(Debug, Serialize)]
struct RejectionBody {
    success: bool,
    message: String,
    error_code: &'static str,
}

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::PathTraversal => StatusCode::FORBIDDEN,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::NoMatches => StatusCode::CONFLICT,
        ErrorCode::IoError | ErrorCode::InvalidVault => StatusCode::INTERNAL_SERVER_ERROR,
        ErrorCode::InvalidPath
        | ErrorCode::InvalidType
        | ErrorCode::InvalidExtension
        | ErrorCode::InvalidFind
        | ErrorCode::InvalidMax
        | ErrorCode::InvalidManual => StatusCode::BAD_REQUEST,
    }
}

fn respond<T: Serialize>(op: &'static str, result: vault_writer::Result<T>) -> Response {
    let result = OperationResult::from(result);
    let status = match &result {
        OperationResult::Success(_) => StatusCode::OK,
        OperationResult::Failure(err) => {
            let code = err.code();
            let status = status_for(code);
            if status.is_server_error() {
                tracing::error!(op, %code, err = %err, "vault-writer operation failed");
            } else {
                tracing::info!(op, %code, err = %err, "vault-writer operation rejected");
            }
            status
        }
    };
    (status, Json(result)).into_response()
}

fn reject(rejection: JsonRejection) -> Response {
    let (status, error_code) = match &rejection {
        JsonRejection::MissingJsonContentType(_) => {
            (StatusCode::UNSUPPORTED_MEDIA_TYPE, "unsupported_media_type")
        }
        _ => (StatusCode::BAD_REQUEST, "invalid_json"),
    };
    (
        status,
        Json(RejectionBody {
            success: false,
            message: rejection.body_text(),
            error_code,
        }),
    )
        .into_response()
}

pub fn build_app(root: VaultRoot) -> Router {
    let state = AppState {
        inner: Arc::new(AppInner {
            vault: VaultWriter::new(root),
        }),
    };

    Router::new()
        .route("/v1/read_file", post(handlers::read_file))
        .route("/v1/write_file", post(handlers::write_file))
        .route("/v1/list_dir", post(handlers::list_dir))
        .route("/v1/replace_text", post(handlers::replace_text))
        .route("/v1/ensure_manual_dirs", post(handlers::ensure_manual_dirs))
        .layer(middleware::from_fn(layers::request_id_middleware))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn containment_and_io_failures_map_to_distinct_statuses() {
        assert_eq!(status_for(ErrorCode::PathTraversal), StatusCode::FORBIDDEN);
        assert_eq!(status_for(ErrorCode::NotFound), StatusCode::NOT_FOUND);
        assert_eq!(
            status_for(ErrorCode::IoError),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            status_for(ErrorCode::InvalidExtension),
            StatusCode::BAD_REQUEST
        );
    }
}
