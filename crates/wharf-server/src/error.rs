use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use wharf_core::CoreError;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("workspace not found")]
    NotFound,

    #[error("server is read-only")]
    ReadOnly,

    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("core error: {0}")]
    Core(#[from] CoreError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type ServerResult<T> = Result<T, ServerError>;

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound | Self::Core(CoreError::WorkspaceNotFound(_)) => {
                StatusCode::NOT_FOUND.into_response()
            }
            Self::ReadOnly => StatusCode::FORBIDDEN.into_response(),
            Self::BadRequest(reason) => (StatusCode::BAD_REQUEST, reason).into_response(),
            // One request's failure: log the detail, leak nothing.
            err => {
                tracing::error!(%err, "request failed");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping() {
        assert_eq!(ServerError::NotFound.into_response().status(), 404);
        assert_eq!(ServerError::ReadOnly.into_response().status(), 403);
        assert_eq!(
            ServerError::BadRequest("nope".into()).into_response().status(),
            400
        );
        assert_eq!(
            ServerError::Internal("boom".into()).into_response().status(),
            500
        );
    }

    #[test]
    fn core_not_found_maps_to_404() {
        let err = ServerError::Core(CoreError::WorkspaceNotFound("+x.y".into()));
        assert_eq!(err.into_response().status(), 404);
    }

    #[test]
    fn store_errors_map_to_500() {
        let err = ServerError::Core(CoreError::Store(wharf_store::StoreError::Backend(
            "db down".into(),
        )));
        assert_eq!(err.into_response().status(), 500);
    }
}
