use serde::{Deserialize, Deserializer, Serialize};

/// A record album. `id` is expected to be unique but nothing enforces it.
///
/// Every field is optional on the wire: a missing key or an explicit `null`
/// decodes to the zero value (`""` or `0.0`). Wrong types are still rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Album {
    #[serde(deserialize_with = "null_as_zero")]
    pub id: String,
    #[serde(deserialize_with = "null_as_zero")]
    pub title: String,
    #[serde(deserialize_with = "null_as_zero")]
    pub artist: String,
    #[serde(deserialize_with = "null_as_zero")]
    pub price: f64,
}

fn null_as_zero<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Album {
    pub fn new(id: &str, title: &str, artist: &str, price: f64) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            artist: artist.to_string(),
            price,
        }
    }
}

/// Records the collection starts with on every boot
pub fn seed_albums() -> Vec<Album> {
    vec![
        Album::new("1", "Blue Train", "John Coltrane", 56.99),
        Album::new("2", "Jeru", "Gerry Mulligan", 17.99),
        Album::new(
            "3",
            "Sarah Vaughan and Clifford Brown",
            "Sarah Vaughan",
            39.99,
        ),
    ]
}
