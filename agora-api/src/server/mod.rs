use agora_store::{ForumStore, StoreError};
use axum::{
    Router,
    extract::{
        FromRef, Request,
        rejection::{BytesRejection, PathRejection},
    },
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::get,
};
use json::Json;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error};

mod json;
mod routes;

pub type ServerRouter = Router<ServerState>;

#[derive(Clone, Debug, FromRef)]
pub struct ServerState {
    pub store: Arc<ForumStore>,
}

pub fn routes() -> ServerRouter {
    routes::routes()
        .route("/", get(hello_world))
        .fallback(fallback)
}

/// The complete application around `store`, ready to be served.
pub fn app(store: Arc<ForumStore>) -> Router {
    routes().with_state(ServerState { store })
}

async fn hello_world() -> &'static str {
    "Hello world!"
}

pub async fn fallback(request: Request) -> ServerError {
    ServerError::UnknownRoute(request.into_parts().0.uri)
}

pub type Result<T, E = ServerError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Unknown route requested: {0}")]
    UnknownRoute(Uri),
    #[error("Path rejected: {0}")]
    PathRejection(#[from] PathRejection),
    #[error("Request body could not be read: {0}")]
    BodyRejection(#[from] BytesRejection),
    #[error("Request body is not a valid JSON payload: {0}")]
    JsonBody(serde_json::Error),
    #[error("JSON response could not be serialized: {0}")]
    JsonResponse(#[from] serde_json::Error),
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ServerError {
    pub fn status(&self) -> StatusCode {
        match self {
            ServerError::UnknownRoute(_)
            | ServerError::PathRejection(_)
            | ServerError::Store(_) => StatusCode::NOT_FOUND,
            ServerError::BodyRejection(_) | ServerError::JsonBody(_) => StatusCode::BAD_REQUEST,
            ServerError::JsonResponse(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The message clients see in the `error` field.
    pub fn message(&self) -> &'static str {
        match self {
            ServerError::UnknownRoute(_) | ServerError::PathRejection(_) => "Not found",
            ServerError::BodyRejection(_) | ServerError::JsonBody(_) => "Bad request",
            ServerError::JsonResponse(_) => "Internal server error",
            ServerError::Store(StoreError::PostNotFound(_)) => "Post not found",
            ServerError::Store(StoreError::CommentNotFound { .. }) => "Comment not found",
        }
    }
}

#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            error!(error = %self, %status, "Replying with error");
        } else {
            debug!(error = %self, %status, "Replying with error");
        }

        let error_response = ErrorResponse {
            error: self.message().to_owned(),
        };
        (status, Json(error_response)).into_response()
    }
}
