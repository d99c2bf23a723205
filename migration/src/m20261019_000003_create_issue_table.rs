use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20261019_000001_create_artist_table::Artist, m20261019_000002_create_series_table::Series,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Issue::Table)
                    .if_not_exists()
                    .col(pk_auto(Issue::Id))
                    .col(string(Issue::Name))
                    .col(big_integer(Issue::IssueNumber))
                    .col(string(Issue::PublicationDate))
                    .col(integer(Issue::ArtistId))
                    .col(integer(Issue::SeriesId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_issue_artist_id")
                            .from(Issue::Table, Issue::ArtistId)
                            .to(Artist::Table, Artist::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_issue_series_id")
                            .from(Issue::Table, Issue::SeriesId)
                            .to(Series::Table, Series::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_issue_series_id")
                    .table(Issue::Table)
                    .col(Issue::SeriesId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Issue::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Issue {
    Table,
    Id,
    Name,
    IssueNumber,
    PublicationDate,
    ArtistId,
    SeriesId,
}
