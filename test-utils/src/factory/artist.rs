//! Artist factory for creating test artist entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test artists with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::artist::ArtistFactory;
///
/// let artist = ArtistFactory::new(&db)
///     .name("Steve Ditko")
///     .employed(false)
///     .build()
///     .await?;
/// ```
pub struct ArtistFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    date_of_birth: String,
    biography: String,
    is_currently_employed: bool,
}

impl<'a> ArtistFactory<'a> {
    /// Creates a new ArtistFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Artist {id}"` where id is auto-incremented
    /// - date_of_birth: `"1970-01-01"`
    /// - biography: `"Biography of artist {id}"`
    /// - is_currently_employed: `true`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Artist {}", id),
            date_of_birth: "1970-01-01".to_string(),
            biography: format!("Biography of artist {}", id),
            is_currently_employed: true,
        }
    }

    /// Sets the artist name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the date of birth.
    pub fn date_of_birth(mut self, date_of_birth: impl Into<String>) -> Self {
        self.date_of_birth = date_of_birth.into();
        self
    }

    /// Sets the biography.
    pub fn biography(mut self, biography: impl Into<String>) -> Self {
        self.biography = biography.into();
        self
    }

    /// Sets whether the artist is currently employed.
    pub fn employed(mut self, is_currently_employed: bool) -> Self {
        self.is_currently_employed = is_currently_employed;
        self
    }

    /// Builds and inserts the artist entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::artist::Model)` - Created artist entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::artist::Model, DbErr> {
        entity::artist::ActiveModel {
            name: ActiveValue::Set(self.name),
            date_of_birth: ActiveValue::Set(self.date_of_birth),
            biography: ActiveValue::Set(self.biography),
            is_currently_employed: ActiveValue::Set(self.is_currently_employed),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an employed artist with default values.
///
/// Shorthand for `ArtistFactory::new(db).build().await`.
pub async fn create_artist(db: &DatabaseConnection) -> Result<entity::artist::Model, DbErr> {
    ArtistFactory::new(db).build().await
}
