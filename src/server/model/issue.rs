//! Issue domain models and parameters.
//!
//! Issues always belong to the series named in the request path. The parameter types take
//! the series id as a separate argument so it can never come from the request body.

use crate::{
    model::issue::{IssueDto, IssueInputDto},
    server::{error::AppError, validation::issue_is_valid},
};

const INVALID_ISSUE: &str = "Issue requires name, issueNumber, publicationDate and artistId";

#[derive(Debug, Clone, PartialEq)]
pub struct Issue {
    pub id: i32,
    pub name: String,
    pub issue_number: i64,
    pub publication_date: String,
    pub artist_id: i32,
    pub series_id: i32,
}

impl Issue {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::issue::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            issue_number: entity.issue_number,
            publication_date: entity.publication_date,
            artist_id: entity.artist_id,
            series_id: entity.series_id,
        }
    }

    /// Converts domain model to DTO for API responses.
    pub fn into_dto(self) -> IssueDto {
        IssueDto {
            id: self.id,
            name: self.name,
            issue_number: self.issue_number,
            publication_date: self.publication_date,
            artist_id: self.artist_id,
            series_id: self.series_id,
        }
    }
}

/// Validated issue fields plus the series id bound from the path.
#[derive(Debug, Clone)]
pub struct IssueFields {
    pub name: String,
    pub issue_number: i64,
    pub publication_date: String,
    pub artist_id: i32,
    pub series_id: i32,
}

impl IssueFields {
    /// Validates a request payload and binds it to the series from the path.
    ///
    /// # Arguments
    /// - `series_id` - Id of the series resolved from the request path
    /// - `dto` - Issue payload from the request body
    ///
    /// # Returns
    /// - `Ok(IssueFields)` - All required fields present
    /// - `Err(AppError::BadRequest)` - A required field is missing, empty or zero
    pub fn from_dto(series_id: i32, dto: IssueInputDto) -> Result<Self, AppError> {
        if !issue_is_valid(&dto) {
            return Err(AppError::BadRequest(INVALID_ISSUE.to_string()));
        }

        Ok(Self {
            name: dto.name.unwrap_or_default(),
            issue_number: dto.issue_number.unwrap_or_default(),
            publication_date: dto.publication_date.unwrap_or_default(),
            artist_id: dto.artist_id.unwrap_or_default(),
            series_id,
        })
    }
}

#[derive(Debug, Clone)]
pub struct CreateIssueParams {
    pub fields: IssueFields,
}

impl CreateIssueParams {
    pub fn from_dto(series_id: i32, dto: IssueInputDto) -> Result<Self, AppError> {
        Ok(Self {
            fields: IssueFields::from_dto(series_id, dto)?,
        })
    }
}

#[derive(Debug, Clone)]
pub struct UpdateIssueParams {
    /// Id of the issue taken from the request path.
    pub id: i32,
    pub fields: IssueFields,
}

impl UpdateIssueParams {
    pub fn from_dto(id: i32, series_id: i32, dto: IssueInputDto) -> Result<Self, AppError> {
        Ok(Self {
            id,
            fields: IssueFields::from_dto(series_id, dto)?,
        })
    }
}
