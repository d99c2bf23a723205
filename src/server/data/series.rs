use sea_orm::{
    sea_query::Query, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::series::{CreateSeriesParams, SeriesFields, UpdateSeriesParams};

pub struct SeriesRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SeriesRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new series row and returns it with its generated id
    pub async fn create(&self, params: CreateSeriesParams) -> Result<entity::series::Model, DbErr> {
        Self::active_model(params.fields).insert(self.db).await
    }

    /// Gets a series by ID
    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::series::Model>, DbErr> {
        entity::prelude::Series::find_by_id(id).one(self.db).await
    }

    /// Gets all series in insertion order
    pub async fn get_all(&self) -> Result<Vec<entity::series::Model>, DbErr> {
        entity::prelude::Series::find()
            .order_by_asc(entity::series::Column::Id)
            .all(self.db)
            .await
    }

    /// Overwrites every column of the series row
    ///
    /// Returns the number of rows affected, 0 when the ID does not exist.
    pub async fn update(&self, params: UpdateSeriesParams) -> Result<u64, DbErr> {
        let result = entity::prelude::Series::update_many()
            .set(Self::active_model(params.fields))
            .filter(entity::series::Column::Id.eq(params.id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes the series only if no issue references it
    ///
    /// The issue check and the delete run as one statement:
    ///
    /// ```sql
    /// DELETE FROM series
    /// WHERE id = ? AND id NOT IN (SELECT series_id FROM issue WHERE series_id = ?)
    /// ```
    ///
    /// Returns the number of rows deleted, 0 when the series still has issues or does not
    /// exist.
    pub async fn delete_if_unreferenced(&self, id: i32) -> Result<u64, DbErr> {
        let referencing_issues = Query::select()
            .column(entity::issue::Column::SeriesId)
            .from(entity::issue::Entity)
            .and_where(entity::issue::Column::SeriesId.eq(id))
            .to_owned();

        let result = entity::prelude::Series::delete_many()
            .filter(entity::series::Column::Id.eq(id))
            .filter(entity::series::Column::Id.not_in_subquery(referencing_issues))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    fn active_model(fields: SeriesFields) -> entity::series::ActiveModel {
        entity::series::ActiveModel {
            name: ActiveValue::Set(fields.name),
            description: ActiveValue::Set(fields.description),
            ..Default::default()
        }
    }
}
