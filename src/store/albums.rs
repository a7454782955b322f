use crate::models::{seed_albums, Album};
use tokio::sync::RwLock;
use tracing::info;

/// In-memory album collection. Insertion order is preserved and lookups
/// scan linearly for the first matching id.
pub struct AlbumRepository {
    albums: RwLock<Vec<Album>>,
}

impl AlbumRepository {
    pub fn new(albums: Vec<Album>) -> Self {
        Self {
            albums: RwLock::new(albums),
        }
    }

    /// Repository holding the boot-time seed records
    pub fn seeded() -> Self {
        Self::new(seed_albums())
    }

    /// All albums in insertion order
    pub async fn list(&self) -> Vec<Album> {
        self.albums.read().await.clone()
    }

    /// First album whose id matches exactly
    pub async fn get(&self, id: &str) -> Option<Album> {
        self.albums
            .read()
            .await
            .iter()
            .find(|a| a.id == id)
            .cloned()
    }

    /// Append an album verbatim. Duplicate ids are allowed.
    pub async fn create(&self, album: Album) -> Album {
        let mut albums = self.albums.write().await;
        albums.push(album.clone());
        info!("Created album {} ({} total)", album.id, albums.len());
        album
    }

    /// Replace the first album matching `id` with `album`, keeping its position.
    /// The replacement's own id wins, so this can rename a record.
    pub async fn update(&self, id: &str, album: Album) -> Option<Album> {
        let mut albums = self.albums.write().await;
        let slot = albums.iter_mut().find(|a| a.id == id)?;
        *slot = album.clone();

        if album.id != id {
            info!("Updated album {} (renamed to {})", id, album.id);
        } else {
            info!("Updated album {}", id);
        }
        Some(album)
    }

    /// Remove the first album matching `id`. Returns false when none matched.
    pub async fn delete(&self, id: &str) -> bool {
        let mut albums = self.albums.write().await;
        match albums.iter().position(|a| a.id == id) {
            Some(index) => {
                albums.remove(index);
                info!("Deleted album {} ({} remaining)", id, albums.len());
                true
            }
            None => false,
        }
    }

    pub async fn count(&self) -> usize {
        self.albums.read().await.len()
    }
}

impl Default for AlbumRepository {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(albums: &[Album]) -> Vec<&str> {
        albums.iter().map(|a| a.id.as_str()).collect()
    }

    #[tokio::test]
    async fn test_seeded_list() {
        let repo = AlbumRepository::seeded();
        let albums = repo.list().await;
        assert_eq!(ids(&albums), vec!["1", "2", "3"]);
        assert_eq!(albums[0].title, "Blue Train");
    }

    #[tokio::test]
    async fn test_get_is_case_sensitive() {
        let repo = AlbumRepository::new(vec![Album::new("abc", "T", "A", 1.0)]);
        assert!(repo.get("abc").await.is_some());
        assert!(repo.get("ABC").await.is_none());
    }

    #[tokio::test]
    async fn test_create_appends_duplicates() {
        let repo = AlbumRepository::seeded();

        let created = repo.create(Album::new("1", "Dup", "Someone", -5.0)).await;
        assert_eq!(created.title, "Dup");
        assert_eq!(repo.count().await, 4);

        let albums = repo.list().await;
        assert_eq!(ids(&albums), vec!["1", "2", "3", "1"]);
        // Lookups still hit the first record
        assert_eq!(repo.get("1").await.unwrap().title, "Blue Train");
    }

    #[tokio::test]
    async fn test_update_replaces_in_place() {
        let repo = AlbumRepository::seeded();

        let updated = repo
            .update("2", Album::new("2", "Jeru (Remaster)", "Gerry Mulligan", 19.99))
            .await
            .unwrap();
        assert_eq!(updated.price, 19.99);

        let albums = repo.list().await;
        assert_eq!(ids(&albums), vec!["1", "2", "3"]);
        assert_eq!(albums[1].title, "Jeru (Remaster)");
    }

    #[tokio::test]
    async fn test_update_renames() {
        let repo = AlbumRepository::seeded();

        repo.update("2", Album::new("20", "Jeru", "Gerry Mulligan", 17.99))
            .await
            .unwrap();

        assert!(repo.get("2").await.is_none());
        assert_eq!(ids(&repo.list().await), vec!["1", "20", "3"]);
    }

    #[tokio::test]
    async fn test_update_missing() {
        let repo = AlbumRepository::seeded();
        let result = repo.update("99", Album::new("99", "T", "A", 1.0)).await;
        assert!(result.is_none());
        assert_eq!(repo.count().await, 3);
    }

    #[tokio::test]
    async fn test_delete_first_match_only() {
        let repo = AlbumRepository::new(vec![
            Album::new("1", "First", "A", 1.0),
            Album::new("2", "Second", "B", 2.0),
            Album::new("1", "Third", "C", 3.0),
        ]);

        assert!(repo.delete("1").await);

        let albums = repo.list().await;
        assert_eq!(ids(&albums), vec!["2", "1"]);
        assert_eq!(albums[1].title, "Third");
    }

    #[tokio::test]
    async fn test_delete_missing() {
        let repo = AlbumRepository::seeded();
        assert!(!repo.delete("4").await);
        assert_eq!(repo.count().await, 3);
    }

    #[tokio::test]
    async fn test_concurrent_creates() {
        let repo = std::sync::Arc::new(AlbumRepository::default());

        let handles: Vec<_> = (0..50)
            .map(|i| {
                let repo = repo.clone();
                tokio::spawn(async move {
                    repo.create(Album::new(&i.to_string(), "T", "A", 1.0)).await;
                })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(repo.count().await, 50);
    }
}
