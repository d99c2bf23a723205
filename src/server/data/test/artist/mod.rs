use crate::server::{
    data::artist::ArtistRepository,
    model::artist::{ArtistFields, CreateArtistParams, UpdateArtistParams},
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod exists;
mod get_employed;
mod set_employment;
mod update;

fn fields(name: &str, is_currently_employed: bool) -> ArtistFields {
    ArtistFields {
        name: name.to_string(),
        date_of_birth: "1917-08-28".to_string(),
        biography: format!("Biography of {}", name),
        is_currently_employed,
    }
}
