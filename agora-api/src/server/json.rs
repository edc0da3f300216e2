use crate::server::ServerError;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    response::{IntoResponse, Response},
};
use axum_extra::TypedHeader;
use headers::ContentType;
use serde::{Serialize, de::DeserializeOwned};

/// JSON body extractor and responder.
///
/// The body is parsed as JSON whatever `Content-Type` the client sent. A body
/// that does not deserialize into `T` is a [`ServerError::JsonBody`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Json<T>(pub T);

impl<T, S> FromRequest<S> for Json<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request(request: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(request, state).await?;
        let value = serde_json::from_slice(&body).map_err(ServerError::JsonBody)?;

        Ok(Self(value))
    }
}

impl<T: Serialize> IntoResponse for Json<T> {
    fn into_response(self) -> Response {
        let json = match serde_json::to_vec(&self.0) {
            Ok(json) => json,
            Err(err) => return ServerError::JsonResponse(err).into_response(),
        };

        (TypedHeader(ContentType::json()), json).into_response()
    }
}
