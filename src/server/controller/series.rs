use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        series::{SeriesListDto, SeriesRequestDto, SeriesResponseDto},
    },
    server::{
        error::AppError,
        middleware::{body::JsonBody, resolve::SeriesContext},
        model::series::{CreateSeriesParams, Series, UpdateSeriesParams},
        service::series::SeriesService,
        state::AppState,
    },
};

/// Tag for grouping series endpoints in OpenAPI documentation
pub static SERIES_TAG: &str = "series";

/// List all series.
///
/// # Returns
/// - `200 OK` - Every series in insertion order
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/series",
    tag = SERIES_TAG,
    responses(
        (status = 200, description = "Successfully retrieved series", body = SeriesListDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_series(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = SeriesService::new(&state.db);

    let series = service.get_all().await?;

    Ok((
        StatusCode::OK,
        Json(SeriesListDto {
            series: series.into_iter().map(Series::into_dto).collect(),
        }),
    ))
}

/// Get a series by ID.
///
/// # Returns
/// - `200 OK` - Series details
/// - `404 Not Found` - No series with this ID
#[utoipa::path(
    get,
    path = "/api/series/{series_id}",
    tag = SERIES_TAG,
    params(
        ("series_id" = i32, Path, description = "Series ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved series", body = SeriesResponseDto),
        (status = 404, description = "Series not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_series(SeriesContext(series): SeriesContext) -> Result<impl IntoResponse, AppError> {
    Ok((
        StatusCode::OK,
        Json(SeriesResponseDto {
            series: series.into_dto(),
        }),
    ))
}

/// Create a new series.
///
/// # Returns
/// - `201 Created` - The persisted series
/// - `400 Bad Request` - Name or description missing
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/series",
    tag = SERIES_TAG,
    request_body = SeriesRequestDto,
    responses(
        (status = 201, description = "Successfully created series", body = SeriesResponseDto),
        (status = 400, description = "Missing required series fields", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_series(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<SeriesRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateSeriesParams::from_dto(payload.series)?;

    let service = SeriesService::new(&state.db);

    let series = service.create(params).await?;

    Ok((
        StatusCode::CREATED,
        Json(SeriesResponseDto {
            series: series.into_dto(),
        }),
    ))
}

/// Replace a series.
///
/// # Returns
/// - `200 OK` - The persisted series
/// - `400 Bad Request` - Name or description missing
/// - `404 Not Found` - No series with this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/series/{series_id}",
    tag = SERIES_TAG,
    params(
        ("series_id" = i32, Path, description = "Series ID")
    ),
    request_body = SeriesRequestDto,
    responses(
        (status = 200, description = "Successfully updated series", body = SeriesResponseDto),
        (status = 400, description = "Missing required series fields", body = ErrorDto),
        (status = 404, description = "Series not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_series(
    State(state): State<AppState>,
    SeriesContext(series): SeriesContext,
    JsonBody(payload): JsonBody<SeriesRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = UpdateSeriesParams::from_dto(series.id, payload.series)?;

    let service = SeriesService::new(&state.db);

    let series = service.update(params).await?;

    Ok((
        StatusCode::OK,
        Json(SeriesResponseDto {
            series: series.into_dto(),
        }),
    ))
}

/// Delete a series.
///
/// Refused while any issue belongs to the series.
///
/// # Returns
/// - `204 No Content` - Series deleted
/// - `400 Bad Request` - The series still has issues
/// - `404 Not Found` - No series with this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/series/{series_id}",
    tag = SERIES_TAG,
    params(
        ("series_id" = i32, Path, description = "Series ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted series"),
        (status = 400, description = "Series still has issues", body = ErrorDto),
        (status = 404, description = "Series not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_series(
    State(state): State<AppState>,
    SeriesContext(series): SeriesContext,
) -> Result<impl IntoResponse, AppError> {
    let service = SeriesService::new(&state.db);

    service.delete(series.id).await?;

    Ok(StatusCode::NO_CONTENT)
}
