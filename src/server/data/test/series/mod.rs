use crate::server::{
    data::series::SeriesRepository,
    model::series::{CreateSeriesParams, SeriesFields, UpdateSeriesParams},
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete_if_unreferenced;
mod get_all;
mod update;

fn fields(name: &str) -> SeriesFields {
    SeriesFields {
        name: name.to_string(),
        description: format!("Description of {}", name),
    }
}
