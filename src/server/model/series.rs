//! Series domain models and parameters.

use crate::{
    model::series::{SeriesDto, SeriesInputDto},
    server::{error::AppError, validation::series_is_valid},
};

const INVALID_SERIES: &str = "Series requires name and description";

#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub id: i32,
    pub name: String,
    pub description: String,
}

impl Series {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::series::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
        }
    }

    /// Converts domain model to DTO for API responses.
    pub fn into_dto(self) -> SeriesDto {
        SeriesDto {
            id: self.id,
            name: self.name,
            description: self.description,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SeriesFields {
    pub name: String,
    pub description: String,
}

impl SeriesFields {
    /// Validates a request payload.
    ///
    /// # Returns
    /// - `Ok(SeriesFields)` - Name and description present
    /// - `Err(AppError::BadRequest)` - Either field missing or empty
    pub fn from_dto(dto: SeriesInputDto) -> Result<Self, AppError> {
        if !series_is_valid(&dto) {
            return Err(AppError::BadRequest(INVALID_SERIES.to_string()));
        }

        Ok(Self {
            name: dto.name.unwrap_or_default(),
            description: dto.description.unwrap_or_default(),
        })
    }
}

#[derive(Debug, Clone)]
pub struct CreateSeriesParams {
    pub fields: SeriesFields,
}

impl CreateSeriesParams {
    pub fn from_dto(dto: SeriesInputDto) -> Result<Self, AppError> {
        Ok(Self {
            fields: SeriesFields::from_dto(dto)?,
        })
    }
}

#[derive(Debug, Clone)]
pub struct UpdateSeriesParams {
    /// Id taken from the request path.
    pub id: i32,
    pub fields: SeriesFields,
}

impl UpdateSeriesParams {
    pub fn from_dto(id: i32, dto: SeriesInputDto) -> Result<Self, AppError> {
        Ok(Self {
            id,
            fields: SeriesFields::from_dto(dto)?,
        })
    }
}
