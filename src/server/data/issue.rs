use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::issue::{CreateIssueParams, IssueFields, UpdateIssueParams};

pub struct IssueRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> IssueRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new issue row and returns it with its generated id
    pub async fn create(&self, params: CreateIssueParams) -> Result<entity::issue::Model, DbErr> {
        Self::active_model(params.fields).insert(self.db).await
    }

    /// Gets an issue by ID
    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::issue::Model>, DbErr> {
        entity::prelude::Issue::find_by_id(id).one(self.db).await
    }

    /// Gets all issues of a series in insertion order
    pub async fn get_by_series_id(
        &self,
        series_id: i32,
    ) -> Result<Vec<entity::issue::Model>, DbErr> {
        entity::prelude::Issue::find()
            .filter(entity::issue::Column::SeriesId.eq(series_id))
            .order_by_asc(entity::issue::Column::Id)
            .all(self.db)
            .await
    }

    /// Counts the issues referencing a series
    pub async fn count_by_series_id(&self, series_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Issue::find()
            .filter(entity::issue::Column::SeriesId.eq(series_id))
            .count(self.db)
            .await
    }

    /// Overwrites every column of the issue row, including its series and artist
    ///
    /// Returns the number of rows affected, 0 when the ID does not exist.
    pub async fn update(&self, params: UpdateIssueParams) -> Result<u64, DbErr> {
        let result = entity::prelude::Issue::update_many()
            .set(Self::active_model(params.fields))
            .filter(entity::issue::Column::Id.eq(params.id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes an issue by ID
    ///
    /// Returns the number of rows deleted.
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Issue::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    fn active_model(fields: IssueFields) -> entity::issue::ActiveModel {
        entity::issue::ActiveModel {
            name: ActiveValue::Set(fields.name),
            issue_number: ActiveValue::Set(fields.issue_number),
            publication_date: ActiveValue::Set(fields.publication_date),
            artist_id: ActiveValue::Set(fields.artist_id),
            series_id: ActiveValue::Set(fields.series_id),
            ..Default::default()
        }
    }
}
