//! Artist domain models and parameters.

use crate::{
    model::artist::{ArtistDto, ArtistInputDto},
    server::{
        error::AppError,
        validation::{artist_is_valid, employment_or_default},
    },
};

const INVALID_ARTIST: &str = "Artist requires name, dateOfBirth and biography";

/// Artist as stored, including soft-deleted (no longer employed) artists.
#[derive(Debug, Clone, PartialEq)]
pub struct Artist {
    pub id: i32,
    pub name: String,
    pub date_of_birth: String,
    pub biography: String,
    pub is_currently_employed: bool,
}

impl Artist {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::artist::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            date_of_birth: entity.date_of_birth,
            biography: entity.biography,
            is_currently_employed: entity.is_currently_employed,
        }
    }

    /// Converts domain model to DTO for API responses.
    pub fn into_dto(self) -> ArtistDto {
        ArtistDto {
            id: self.id,
            name: self.name,
            date_of_birth: self.date_of_birth,
            biography: self.biography,
            is_currently_employed: self.is_currently_employed,
        }
    }
}

/// Validated artist fields shared by create and update.
#[derive(Debug, Clone)]
pub struct ArtistFields {
    pub name: String,
    pub date_of_birth: String,
    pub biography: String,
    pub is_currently_employed: bool,
}

impl ArtistFields {
    /// Validates a request payload and applies the employment default.
    ///
    /// # Returns
    /// - `Ok(ArtistFields)` - All required fields present
    /// - `Err(AppError::BadRequest)` - A required field is missing or empty
    pub fn from_dto(dto: ArtistInputDto) -> Result<Self, AppError> {
        if !artist_is_valid(&dto) {
            return Err(AppError::BadRequest(INVALID_ARTIST.to_string()));
        }

        Ok(Self {
            name: dto.name.unwrap_or_default(),
            date_of_birth: dto.date_of_birth.unwrap_or_default(),
            biography: dto.biography.unwrap_or_default(),
            is_currently_employed: employment_or_default(dto.is_currently_employed),
        })
    }
}

/// Parameters for inserting a new artist.
#[derive(Debug, Clone)]
pub struct CreateArtistParams {
    pub fields: ArtistFields,
}

impl CreateArtistParams {
    pub fn from_dto(dto: ArtistInputDto) -> Result<Self, AppError> {
        Ok(Self {
            fields: ArtistFields::from_dto(dto)?,
        })
    }
}

/// Parameters for a full-row artist update.
#[derive(Debug, Clone)]
pub struct UpdateArtistParams {
    /// Id taken from the request path.
    pub id: i32,
    pub fields: ArtistFields,
}

impl UpdateArtistParams {
    pub fn from_dto(id: i32, dto: ArtistInputDto) -> Result<Self, AppError> {
        Ok(Self {
            id,
            fields: ArtistFields::from_dto(dto)?,
        })
    }
}
