use sea_orm::DatabaseConnection;

use crate::server::{
    data::artist::ArtistRepository,
    error::AppError,
    model::artist::{Artist, CreateArtistParams, UpdateArtistParams},
};

pub struct ArtistService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ArtistService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets an artist by ID, employed or not
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Artist>, AppError> {
        let repo = ArtistRepository::new(self.db);

        let artist = repo.get_by_id(id).await?;

        Ok(artist.map(Artist::from_entity))
    }

    /// Gets every artist that is currently employed
    pub async fn get_employed(&self) -> Result<Vec<Artist>, AppError> {
        let repo = ArtistRepository::new(self.db);

        let artists = repo.get_employed().await?;

        Ok(artists.into_iter().map(Artist::from_entity).collect())
    }

    /// Creates a new artist and returns the persisted row
    pub async fn create(&self, params: CreateArtistParams) -> Result<Artist, AppError> {
        let repo = ArtistRepository::new(self.db);

        let created = repo.create(params).await?;

        let artist = self.refetch(created.id, "creation").await?;

        tracing::info!("Created artist {} ({})", artist.id, artist.name);

        Ok(artist)
    }

    /// Replaces every field of an artist and returns the persisted row
    pub async fn update(&self, params: UpdateArtistParams) -> Result<Artist, AppError> {
        let repo = ArtistRepository::new(self.db);
        let id = params.id;

        repo.update(params).await?;

        let artist = self.refetch(id, "update").await?;

        tracing::info!("Updated artist {}", artist.id);

        Ok(artist)
    }

    /// Marks an artist as no longer employed
    ///
    /// The row is kept; the artist only drops out of the employed listing. Returns the
    /// updated row so callers can observe the flag change.
    pub async fn retire(&self, id: i32) -> Result<Artist, AppError> {
        let repo = ArtistRepository::new(self.db);

        repo.set_employment(id, false).await?;

        let artist = self.refetch(id, "retirement").await?;

        tracing::info!("Artist {} is no longer employed", artist.id);

        Ok(artist)
    }

    async fn refetch(&self, id: i32, operation: &str) -> Result<Artist, AppError> {
        self.get_by_id(id).await?.ok_or_else(|| {
            AppError::NotFound(format!("Artist {} not found after {}", id, operation))
        })
    }
}
