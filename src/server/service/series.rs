use sea_orm::DatabaseConnection;

use crate::server::{
    data::{issue::IssueRepository, series::SeriesRepository},
    error::AppError,
    model::series::{CreateSeriesParams, Series, UpdateSeriesParams},
};

pub struct SeriesService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SeriesService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a series by ID
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Series>, AppError> {
        let repo = SeriesRepository::new(self.db);

        let series = repo.get_by_id(id).await?;

        Ok(series.map(Series::from_entity))
    }

    /// Gets all series
    pub async fn get_all(&self) -> Result<Vec<Series>, AppError> {
        let repo = SeriesRepository::new(self.db);

        let series = repo.get_all().await?;

        Ok(series.into_iter().map(Series::from_entity).collect())
    }

    /// Creates a new series and returns the persisted row
    pub async fn create(&self, params: CreateSeriesParams) -> Result<Series, AppError> {
        let repo = SeriesRepository::new(self.db);

        let created = repo.create(params).await?;

        let series = self.refetch(created.id, "creation").await?;

        tracing::info!("Created series {} ({})", series.id, series.name);

        Ok(series)
    }

    /// Replaces the name and description of a series and returns the persisted row
    pub async fn update(&self, params: UpdateSeriesParams) -> Result<Series, AppError> {
        let repo = SeriesRepository::new(self.db);
        let id = params.id;

        repo.update(params).await?;

        let series = self.refetch(id, "update").await?;

        tracing::info!("Updated series {}", series.id);

        Ok(series)
    }

    /// Deletes a series that has no issues
    ///
    /// # Returns
    /// - `Ok(())` - Series deleted
    /// - `Err(AppError::BadRequest)` - One or more issues still reference the series, nothing
    ///   was deleted
    /// - `Err(AppError::NotFound)` - The series no longer exists
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = SeriesRepository::new(self.db);

        if repo.delete_if_unreferenced(id).await? > 0 {
            tracing::info!("Deleted series {}", id);
            return Ok(());
        }

        let issue_count = IssueRepository::new(self.db).count_by_series_id(id).await?;

        if issue_count > 0 {
            tracing::debug!(
                "Refused to delete series {} referenced by {} issue(s)",
                id,
                issue_count
            );
            return Err(AppError::BadRequest(format!(
                "Series {} still has {} issue(s)",
                id, issue_count
            )));
        }

        Err(AppError::NotFound("Series not found".to_string()))
    }

    async fn refetch(&self, id: i32, operation: &str) -> Result<Series, AppError> {
        self.get_by_id(id).await?.ok_or_else(|| {
            AppError::NotFound(format!("Series {} not found after {}", id, operation))
        })
    }
}
