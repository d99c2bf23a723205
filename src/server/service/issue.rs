use sea_orm::DatabaseConnection;

use crate::server::{
    data::{artist::ArtistRepository, issue::IssueRepository},
    error::AppError,
    model::issue::{CreateIssueParams, Issue, UpdateIssueParams},
};

pub struct IssueService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> IssueService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets an issue by ID
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Issue>, AppError> {
        let repo = IssueRepository::new(self.db);

        let issue = repo.get_by_id(id).await?;

        Ok(issue.map(Issue::from_entity))
    }

    /// Gets all issues of a series
    pub async fn get_by_series_id(&self, series_id: i32) -> Result<Vec<Issue>, AppError> {
        let repo = IssueRepository::new(self.db);

        let issues = repo.get_by_series_id(series_id).await?;

        Ok(issues.into_iter().map(Issue::from_entity).collect())
    }

    /// Creates an issue in the series carried by the params
    ///
    /// # Returns
    /// - `Ok(Issue)` - The persisted issue
    /// - `Err(AppError::BadRequest)` - The artist referenced by the payload does not exist;
    ///   nothing was written
    pub async fn create(&self, params: CreateIssueParams) -> Result<Issue, AppError> {
        self.require_artist(params.fields.artist_id).await?;

        let repo = IssueRepository::new(self.db);

        let created = repo.create(params).await?;

        let issue = self.refetch(created.id, "creation").await?;

        tracing::info!(
            "Created issue {} in series {} by artist {}",
            issue.id,
            issue.series_id,
            issue.artist_id
        );

        Ok(issue)
    }

    /// Replaces every field of an issue, rebinding it to the series carried by the params
    ///
    /// # Returns
    /// - `Ok(Issue)` - The persisted issue
    /// - `Err(AppError::BadRequest)` - The artist referenced by the payload does not exist;
    ///   nothing was written
    pub async fn update(&self, params: UpdateIssueParams) -> Result<Issue, AppError> {
        self.require_artist(params.fields.artist_id).await?;

        let repo = IssueRepository::new(self.db);
        let id = params.id;

        repo.update(params).await?;

        let issue = self.refetch(id, "update").await?;

        tracing::info!("Updated issue {}", issue.id);

        Ok(issue)
    }

    /// Deletes an issue
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = IssueRepository::new(self.db);

        repo.delete(id).await?;

        tracing::info!("Deleted issue {}", id);

        Ok(())
    }

    /// An unknown artist is a client error on the payload, not a missing resource.
    async fn require_artist(&self, artist_id: i32) -> Result<(), AppError> {
        let artist_repo = ArtistRepository::new(self.db);

        if !artist_repo.exists(artist_id).await? {
            return Err(AppError::BadRequest(format!(
                "Artist {} does not exist",
                artist_id
            )));
        }

        Ok(())
    }

    async fn refetch(&self, id: i32, operation: &str) -> Result<Issue, AppError> {
        self.get_by_id(id).await?.ok_or_else(|| {
            AppError::NotFound(format!("Issue {} not found after {}", id, operation))
        })
    }
}
