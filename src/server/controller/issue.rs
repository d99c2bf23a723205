use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        issue::{IssueListDto, IssueRequestDto, IssueResponseDto},
    },
    server::{
        error::AppError,
        middleware::{
            body::JsonBody,
            resolve::{IssueContext, SeriesContext},
        },
        model::issue::{CreateIssueParams, Issue, UpdateIssueParams},
        service::issue::IssueService,
        state::AppState,
    },
};

/// Tag for grouping issue endpoints in OpenAPI documentation
pub static ISSUE_TAG: &str = "issue";

/// List the issues of a series.
///
/// # Returns
/// - `200 OK` - Issues belonging to the series
/// - `404 Not Found` - No series with this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/series/{series_id}/issues",
    tag = ISSUE_TAG,
    params(
        ("series_id" = i32, Path, description = "Series ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved issues", body = IssueListDto),
        (status = 404, description = "Series not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_issues(
    State(state): State<AppState>,
    SeriesContext(series): SeriesContext,
) -> Result<impl IntoResponse, AppError> {
    let service = IssueService::new(&state.db);

    let issues = service.get_by_series_id(series.id).await?;

    Ok((
        StatusCode::OK,
        Json(IssueListDto {
            issues: issues.into_iter().map(Issue::into_dto).collect(),
        }),
    ))
}

/// Get an issue by ID.
///
/// The issue must belong to the series in the path.
///
/// # Returns
/// - `200 OK` - Issue details
/// - `404 Not Found` - No series or no issue with these IDs, or the issue is in another series
#[utoipa::path(
    get,
    path = "/api/series/{series_id}/issues/{issue_id}",
    tag = ISSUE_TAG,
    params(
        ("series_id" = i32, Path, description = "Series ID"),
        ("issue_id" = i32, Path, description = "Issue ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved issue", body = IssueResponseDto),
        (status = 404, description = "Series or issue not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_issue(context: IssueContext) -> Result<impl IntoResponse, AppError> {
    if context.issue.series_id != context.series.id {
        return Err(AppError::NotFound("Issue not found".to_string()));
    }

    Ok((
        StatusCode::OK,
        Json(IssueResponseDto {
            issue: context.issue.into_dto(),
        }),
    ))
}

/// Create an issue in a series.
///
/// The issue is always stored under the series from the path; a series id in the body is
/// ignored. The referenced artist must exist.
///
/// # Returns
/// - `201 Created` - The persisted issue
/// - `400 Bad Request` - A required field is missing or the artist does not exist
/// - `404 Not Found` - No series with this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/series/{series_id}/issues",
    tag = ISSUE_TAG,
    params(
        ("series_id" = i32, Path, description = "Series ID")
    ),
    request_body = IssueRequestDto,
    responses(
        (status = 201, description = "Successfully created issue", body = IssueResponseDto),
        (status = 400, description = "Missing required issue fields or unknown artist", body = ErrorDto),
        (status = 404, description = "Series not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_issue(
    State(state): State<AppState>,
    SeriesContext(series): SeriesContext,
    JsonBody(payload): JsonBody<IssueRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateIssueParams::from_dto(series.id, payload.issue)?;

    let service = IssueService::new(&state.db);

    let issue = service.create(params).await?;

    Ok((
        StatusCode::CREATED,
        Json(IssueResponseDto {
            issue: issue.into_dto(),
        }),
    ))
}

/// Replace an issue.
///
/// Every field is overwritten and the issue is bound to the series from the path.
///
/// # Returns
/// - `200 OK` - The persisted issue
/// - `400 Bad Request` - A required field is missing or the artist does not exist
/// - `404 Not Found` - No series or no issue with these IDs
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/series/{series_id}/issues/{issue_id}",
    tag = ISSUE_TAG,
    params(
        ("series_id" = i32, Path, description = "Series ID"),
        ("issue_id" = i32, Path, description = "Issue ID")
    ),
    request_body = IssueRequestDto,
    responses(
        (status = 200, description = "Successfully updated issue", body = IssueResponseDto),
        (status = 400, description = "Missing required issue fields or unknown artist", body = ErrorDto),
        (status = 404, description = "Series or issue not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_issue(
    State(state): State<AppState>,
    context: IssueContext,
    JsonBody(payload): JsonBody<IssueRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = UpdateIssueParams::from_dto(context.issue.id, context.series.id, payload.issue)?;

    let service = IssueService::new(&state.db);

    let issue = service.update(params).await?;

    Ok((
        StatusCode::OK,
        Json(IssueResponseDto {
            issue: issue.into_dto(),
        }),
    ))
}

/// Delete an issue.
///
/// # Returns
/// - `204 No Content` - Issue deleted
/// - `404 Not Found` - No series or no issue with these IDs
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/series/{series_id}/issues/{issue_id}",
    tag = ISSUE_TAG,
    params(
        ("series_id" = i32, Path, description = "Series ID"),
        ("issue_id" = i32, Path, description = "Issue ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted issue"),
        (status = 404, description = "Series or issue not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_issue(
    State(state): State<AppState>,
    context: IssueContext,
) -> Result<impl IntoResponse, AppError> {
    let service = IssueService::new(&state.db);

    service.delete(context.issue.id).await?;

    Ok(StatusCode::NO_CONTENT)
}
