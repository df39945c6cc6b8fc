use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

use reactfact_state::StateError;
use reactfact_types::api::ErrorBody;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    State(#[from] StateError),

    #[error("not found")]
    NotFound,

    #[error(transparent)]
    Json(#[from] JsonRejection),

    #[error(transparent)]
    Path(#[from] PathRejection),

    #[error(transparent)]
    Query(#[from] QueryRejection),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::State(e) => match e {
                StateError::NotSignedIn => StatusCode::UNAUTHORIZED,
                StateError::EmptyUsername
                | StateError::EmptyUserId
                | StateError::EmptyReaction
                | StateError::EmptyComment => StatusCode::BAD_REQUEST,
                StateError::FactNotFound(_)
                | StateError::ReactionNotFound(_)
                | StateError::CommentNotFound(_) => StatusCode::NOT_FOUND,
                StateError::LockPoisoned | StateError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Json(rejection) => rejection.status(),
            Self::Path(rejection) => rejection.status(),
            Self::Query(rejection) => rejection.status(),
        }
    }

    fn message(&self) -> String {
        match self {
            Self::Json(rejection) => rejection.body_text(),
            Self::Path(rejection) => rejection.body_text(),
            Self::Query(rejection) => rejection.body_text(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.message();
        if status.is_server_error() {
            error!("Request failed: {}", message);
        }
        (status, Json(ErrorBody { error: message })).into_response()
    }
}
