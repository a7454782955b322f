use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// JSON request body that rejects with [`ApiError::Decode`].
///
/// Unlike `axum::Json` the `Content-Type` header is not checked, and every
/// decode failure maps to 400 carrying the decoder's message.
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| ApiError::Decode(e.body_text()))?;

        match serde_json::from_slice(&bytes) {
            Ok(value) => Ok(JsonBody(value)),
            Err(e) => {
                tracing::debug!("Rejected request body: {}", e);
                Err(ApiError::Decode(e.to_string()))
            }
        }
    }
}

/// `:id` path segment, percent-decoded.
///
/// A segment that does not decode to UTF-8 cannot match any stored id, so it
/// rejects with [`ApiError::NotFound`] instead of axum's plain-text 400.
pub struct AlbumId(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for AlbumId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<String>::from_request_parts(parts, state).await {
            Ok(Path(id)) => Ok(AlbumId(id)),
            Err(e) => {
                tracing::debug!("Rejected album id {}: {}", parts.uri.path(), e.body_text());
                Err(ApiError::NotFound)
            }
        }
    }
}
