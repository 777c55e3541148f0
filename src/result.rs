use serde::{Serialize, Serializer};

use vault_writer_core::{Error, ErrorCode, Result};

/// Outcome of one operation as reported to the caller.
///
/// Serializes as `{ "success": true, ...payload }` or
/// `{ "success": false, "message": ..., "error_code": ... }`.
#[derive(Debug)]
pub enum OperationResult<T> {
    Success(T),
    Failure(Error),
}

impl<T> OperationResult<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, OperationResult::Success(_))
    }

    pub fn error_code(&self) -> Option<ErrorCode> {
        match self {
            OperationResult::Success(_) => None,
            OperationResult::Failure(err) => Some(err.code()),
        }
    }
}

impl<T> From<Result<T>> for OperationResult<T> {
    fn from(result: Result<T>) -> Self {
        match result {
            Ok(payload) => OperationResult::Success(payload),
            Err(err) => OperationResult::Failure(err),
        }
    }
}

#[derive(Serialize)]
struct SuccessBody<'a, T> {
    success: bool,
    #[serde(flatten)]
    payload: &'a T,
}

#[derive(Serialize)]
struct FailureBody {
    success: bool,
    message: String,
    error_code: ErrorCode,
}

impl<T: Serialize> Serialize for OperationResult<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            OperationResult::Success(payload) => SuccessBody {
                success: true,
                payload,
            }
            .serialize(serializer),
            OperationResult::Failure(err) => FailureBody {
                success: false,
                message: err.to_string(),
                error_code: err.code(),
            }
            .serialize(serializer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::WriteFileResponse;

    #[test]
    fn success_flattens_payload_next_to_flag() {
        let result = OperationResult::<WriteFileResponse>::from(Ok(WriteFileResponse {
            path: "/vault/a.md".to_string(),
            relative_path: "a.md".to_string(),
            message: "File written (overwrite enabled).".to_string(),
        }));

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "success": true,
                "path": "/vault/a.md",
                "relative_path": "a.md",
                "message": "File written (overwrite enabled).",
            })
        );
    }

    #[test]
    fn failure_carries_message_and_code_only() {
        let result = OperationResult::<WriteFileResponse>::from(Err(Error::PathTraversal));
        assert!(!result.is_success());
        assert_eq!(result.error_code(), Some(ErrorCode::PathTraversal));

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "success": false,
                "message": "Path escapes the vault root.",
                "error_code": "path_traversal",
            })
        );
    }
}
