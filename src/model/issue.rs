use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Persisted issue row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct IssueDto {
    pub id: i32,
    pub name: String,
    pub issue_number: i64,
    pub publication_date: String,
    pub artist_id: i32,
    pub series_id: i32,
}

/// Issue fields accepted on create and update.
///
/// There is no series field: the series always comes from the request path and any
/// `seriesId` in the body is ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct IssueInputDto {
    pub name: Option<String>,
    #[serde(alias = "issue_number")]
    pub issue_number: Option<i64>,
    #[serde(alias = "publication_date")]
    pub publication_date: Option<String>,
    #[serde(alias = "artist_id")]
    pub artist_id: Option<i32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct IssueRequestDto {
    #[serde(default)]
    pub issue: IssueInputDto,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct IssueResponseDto {
    pub issue: IssueDto,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct IssueListDto {
    pub issues: Vec<IssueDto>,
}
