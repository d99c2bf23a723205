//! Issue factory for creating test issue entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test issues with customizable fields.
///
/// The referenced artist and series must already exist.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::issue::IssueFactory;
///
/// let issue = IssueFactory::new(&db, artist.id, series.id)
///     .issue_number(42)
///     .build()
///     .await?;
/// ```
pub struct IssueFactory<'a> {
    db: &'a DatabaseConnection,
    artist_id: i32,
    series_id: i32,
    name: String,
    issue_number: i64,
    publication_date: String,
}

impl<'a> IssueFactory<'a> {
    /// Creates a new IssueFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Issue {id}"` where id is auto-incremented
    /// - issue_number: the same auto-incremented id
    /// - publication_date: `"2000-01-01"`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `artist_id` - ID of the artist who drew the issue
    /// - `series_id` - ID of the series the issue belongs to
    pub fn new(db: &'a DatabaseConnection, artist_id: i32, series_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            artist_id,
            series_id,
            name: format!("Issue {}", id),
            issue_number: id as i64,
            publication_date: "2000-01-01".to_string(),
        }
    }

    /// Sets the issue name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the issue number.
    pub fn issue_number(mut self, issue_number: i64) -> Self {
        self.issue_number = issue_number;
        self
    }

    /// Sets the publication date.
    pub fn publication_date(mut self, publication_date: impl Into<String>) -> Self {
        self.publication_date = publication_date.into();
        self
    }

    /// Builds and inserts the issue entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::issue::Model)` - Created issue entity
    /// - `Err(DbErr)` - Database error during insert, including foreign key violations
    pub async fn build(self) -> Result<entity::issue::Model, DbErr> {
        entity::issue::ActiveModel {
            name: ActiveValue::Set(self.name),
            issue_number: ActiveValue::Set(self.issue_number),
            publication_date: ActiveValue::Set(self.publication_date),
            artist_id: ActiveValue::Set(self.artist_id),
            series_id: ActiveValue::Set(self.series_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an issue with default values for the given artist and series.
pub async fn create_issue(
    db: &DatabaseConnection,
    artist_id: i32,
    series_id: i32,
) -> Result<entity::issue::Model, DbErr> {
    IssueFactory::new(db, artist_id, series_id).build().await
}
