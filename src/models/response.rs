use serde::Serialize;

use super::Album;

/// Payload carried in the `data` field of every response
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ResponseData {
    Album(Album),
    Albums(Vec<Album>),
    /// Serialized as `null`
    Empty,
}

/// Envelope wrapped around every response body
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse {
    pub success: bool,
    pub data: ResponseData,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ApiResponse {
    pub fn ok(data: ResponseData) -> Self {
        Self {
            success: true,
            data,
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: ResponseData::Empty,
            error: Some(error.into()),
        }
    }
}

impl From<Album> for ResponseData {
    fn from(album: Album) -> Self {
        ResponseData::Album(album)
    }
}

impl From<Vec<Album>> for ResponseData {
    fn from(albums: Vec<Album>) -> Self {
        ResponseData::Albums(albums)
    }
}
