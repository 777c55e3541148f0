use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::response::Response;
use serde::Deserialize;

use vault_writer::ops::{DEFAULT_LIST_DIR, DEFAULT_MAX_REPLACEMENTS};

use super::runner::run_vault;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(super) struct ReadFileRequest {
    relative_path: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(super) struct WriteFileRequest {
    relative_path: String,
    content: String,
    #[serde(default = "default_create_dirs")]
    create_dirs: bool,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(super) struct ListDirRequest {
    #[serde(default = "default_relative_dir")]
    relative_dir: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(super) struct ReplaceTextRequest {
    relative_path: String,
    find: String,
    replace: String,
    #[serde(default = "default_max_replacements")]
    max_replacements: i64,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(super) struct EnsureManualDirsRequest {
    manual: String,
}

fn default_create_dirs() -> bool {
    true
}

fn default_relative_dir() -> String {
    DEFAULT_LIST_DIR.to_string()
}

fn default_max_replacements() -> i64 {
    DEFAULT_MAX_REPLACEMENTS
}

pub(super) async fn read_file(
    State(state): State<super::AppState>,
    payload: Result<Json<ReadFileRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return super::reject(rejection),
    };
    let result = run_vault(state, move |vault| vault.read_file(&req.relative_path)).await;
    super::respond("read_file", result)
}

pub(super) async fn write_file(
    State(state): State<super::AppState>,
    payload: Result<Json<WriteFileRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return super::reject(rejection),
    };
    let result = run_vault(state, move |vault| {
        vault.write_file(&req.relative_path, &req.content, req.create_dirs)
    })
    .await;
    super::respond("write_file", result)
}

pub(super) async fn list_dir(
    State(state): State<super::AppState>,
    payload: Result<Json<ListDirRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return super::reject(rejection),
    };
    let result = run_vault(state, move |vault| vault.list_dir(&req.relative_dir)).await;
    super::respond("list_dir", result)
}

pub(super) async fn replace_text(
    State(state): State<super::AppState>,
    payload: Result<Json<ReplaceTextRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return super::reject(rejection),
    };
    let result = run_vault(state, move |vault| {
        vault.replace_text(
            &req.relative_path,
            &req.find,
            &req.replace,
            req.max_replacements,
        )
    })
    .await;
    super::respond("replace_text", result)
}

pub(super) async fn ensure_manual_dirs(
    State(state): State<super::AppState>,
    payload: Result<Json<EnsureManualDirsRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return super::reject(rejection),
    };
    let result = run_vault(state, move |vault| vault.ensure_manual_dirs(&req.manual)).await;
    super::respond("ensure_manual_dirs", result)
}
