use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::error::ApiError;
use crate::extract::{AlbumId, JsonBody};
use crate::models::{Album, ApiResponse, ResponseData};
use crate::AppState;

pub fn routes() -> axum::Router<AppState> {
    axum::Router::new()
        .route("/albums", axum::routing::get(list_albums).post(create_album))
        .route(
            "/albums/:id",
            axum::routing::get(get_album)
                .put(update_album)
                .delete(delete_album),
        )
}

/// GET /albums
async fn list_albums(State(state): State<AppState>) -> impl IntoResponse {
    let albums = state.album_repo.list().await;
    Json(ApiResponse::ok(albums.into()))
}

/// GET /albums/:id
async fn get_album(
    State(state): State<AppState>,
    AlbumId(id): AlbumId,
) -> Result<impl IntoResponse, ApiError> {
    match state.album_repo.get(&id).await {
        Some(album) => Ok(Json(ApiResponse::ok(album.into()))),
        None => {
            tracing::debug!("Album {} not found", id);
            Err(ApiError::NotFound)
        }
    }
}

/// POST /albums
/// Append the body as a new album, as-is
async fn create_album(
    State(state): State<AppState>,
    JsonBody(album): JsonBody<Album>,
) -> impl IntoResponse {
    let album = state.album_repo.create(album).await;
    (StatusCode::CREATED, Json(ApiResponse::ok(album.into())))
}

/// PUT /albums/:id
/// Replace the whole record, including its id
async fn update_album(
    State(state): State<AppState>,
    AlbumId(id): AlbumId,
    JsonBody(album): JsonBody<Album>,
) -> Result<impl IntoResponse, ApiError> {
    match state.album_repo.update(&id, album).await {
        Some(album) => Ok(Json(ApiResponse::ok(album.into()))),
        None => {
            tracing::debug!("Album {} not found for update", id);
            Err(ApiError::NotFound)
        }
    }
}

/// DELETE /albums/:id
async fn delete_album(
    State(state): State<AppState>,
    AlbumId(id): AlbumId,
) -> Result<impl IntoResponse, ApiError> {
    if state.album_repo.delete(&id).await {
        Ok(Json(ApiResponse::ok(ResponseData::Empty)))
    } else {
        tracing::debug!("Album {} not found for delete", id);
        Err(ApiError::NotFound)
    }
}
