use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::artist::{ArtistFields, CreateArtistParams, UpdateArtistParams};

pub struct ArtistRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ArtistRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new artist row and returns it with its generated id
    pub async fn create(&self, params: CreateArtistParams) -> Result<entity::artist::Model, DbErr> {
        Self::active_model(params.fields).insert(self.db).await
    }

    /// Gets an artist by ID regardless of employment status
    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::artist::Model>, DbErr> {
        entity::prelude::Artist::find_by_id(id).one(self.db).await
    }

    /// Returns whether an artist row with the given ID exists
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Artist::find_by_id(id)
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets all currently employed artists in insertion order
    pub async fn get_employed(&self) -> Result<Vec<entity::artist::Model>, DbErr> {
        entity::prelude::Artist::find()
            .filter(entity::artist::Column::IsCurrentlyEmployed.eq(true))
            .order_by_asc(entity::artist::Column::Id)
            .all(self.db)
            .await
    }

    /// Overwrites every column of the artist row
    ///
    /// Returns the number of rows affected, 0 when the ID does not exist.
    pub async fn update(&self, params: UpdateArtistParams) -> Result<u64, DbErr> {
        let result = entity::prelude::Artist::update_many()
            .set(Self::active_model(params.fields))
            .filter(entity::artist::Column::Id.eq(params.id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Sets only the employment flag of an artist
    ///
    /// Returns the number of rows affected, 0 when the ID does not exist.
    pub async fn set_employment(&self, id: i32, is_currently_employed: bool) -> Result<u64, DbErr> {
        let result = entity::prelude::Artist::update_many()
            .col_expr(
                entity::artist::Column::IsCurrentlyEmployed,
                Expr::value(is_currently_employed),
            )
            .filter(entity::artist::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    fn active_model(fields: ArtistFields) -> entity::artist::ActiveModel {
        entity::artist::ActiveModel {
            name: ActiveValue::Set(fields.name),
            date_of_birth: ActiveValue::Set(fields.date_of_birth),
            biography: ActiveValue::Set(fields.biography),
            is_currently_employed: ActiveValue::Set(fields.is_currently_employed),
            ..Default::default()
        }
    }
}
