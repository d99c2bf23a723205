use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        artist::{ArtistListDto, ArtistRequestDto, ArtistResponseDto},
    },
    server::{
        error::AppError,
        middleware::{body::JsonBody, resolve::ArtistContext},
        model::artist::{Artist, CreateArtistParams, UpdateArtistParams},
        service::artist::ArtistService,
        state::AppState,
    },
};

/// Tag for grouping artist endpoints in OpenAPI documentation
pub static ARTIST_TAG: &str = "artist";

/// List currently employed artists.
///
/// Artists that have been deleted stay in the store but are left out of this listing.
///
/// # Returns
/// - `200 OK` - Employed artists in insertion order
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/artists",
    tag = ARTIST_TAG,
    responses(
        (status = 200, description = "Successfully retrieved employed artists", body = ArtistListDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_artists(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = ArtistService::new(&state.db);

    let artists = service.get_employed().await?;

    Ok((
        StatusCode::OK,
        Json(ArtistListDto {
            artists: artists.into_iter().map(Artist::into_dto).collect(),
        }),
    ))
}

/// Get an artist by ID.
///
/// Returns the artist resolved from the path, including artists that are no longer
/// employed.
///
/// # Returns
/// - `200 OK` - Artist details
/// - `404 Not Found` - No artist with this ID
#[utoipa::path(
    get,
    path = "/api/artists/{artist_id}",
    tag = ARTIST_TAG,
    params(
        ("artist_id" = i32, Path, description = "Artist ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved artist", body = ArtistResponseDto),
        (status = 404, description = "Artist not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_artist(ArtistContext(artist): ArtistContext) -> Result<impl IntoResponse, AppError> {
    Ok((
        StatusCode::OK,
        Json(ArtistResponseDto {
            artist: artist.into_dto(),
        }),
    ))
}

/// Create a new artist.
///
/// Requires name, dateOfBirth and biography. When isCurrentlyEmployed is omitted the artist
/// is created as employed.
///
/// # Returns
/// - `201 Created` - The persisted artist
/// - `400 Bad Request` - A required field is missing
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/artists",
    tag = ARTIST_TAG,
    request_body = ArtistRequestDto,
    responses(
        (status = 201, description = "Successfully created artist", body = ArtistResponseDto),
        (status = 400, description = "Missing required artist fields", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_artist(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<ArtistRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateArtistParams::from_dto(payload.artist)?;

    let service = ArtistService::new(&state.db);

    let artist = service.create(params).await?;

    Ok((
        StatusCode::CREATED,
        Json(ArtistResponseDto {
            artist: artist.into_dto(),
        }),
    ))
}

/// Replace an artist.
///
/// Every field is overwritten; the same required-field and employment default rules as
/// creation apply.
///
/// # Returns
/// - `200 OK` - The persisted artist
/// - `400 Bad Request` - A required field is missing
/// - `404 Not Found` - No artist with this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/artists/{artist_id}",
    tag = ARTIST_TAG,
    params(
        ("artist_id" = i32, Path, description = "Artist ID")
    ),
    request_body = ArtistRequestDto,
    responses(
        (status = 200, description = "Successfully updated artist", body = ArtistResponseDto),
        (status = 400, description = "Missing required artist fields", body = ErrorDto),
        (status = 404, description = "Artist not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_artist(
    State(state): State<AppState>,
    ArtistContext(artist): ArtistContext,
    JsonBody(payload): JsonBody<ArtistRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = UpdateArtistParams::from_dto(artist.id, payload.artist)?;

    let service = ArtistService::new(&state.db);

    let artist = service.update(params).await?;

    Ok((
        StatusCode::OK,
        Json(ArtistResponseDto {
            artist: artist.into_dto(),
        }),
    ))
}

/// Delete an artist.
///
/// Soft delete: the artist is marked as no longer employed and the updated row is returned.
///
/// # Returns
/// - `200 OK` - The artist with isCurrentlyEmployed set to false
/// - `404 Not Found` - No artist with this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/artists/{artist_id}",
    tag = ARTIST_TAG,
    params(
        ("artist_id" = i32, Path, description = "Artist ID")
    ),
    responses(
        (status = 200, description = "Artist marked as not employed", body = ArtistResponseDto),
        (status = 404, description = "Artist not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_artist(
    State(state): State<AppState>,
    ArtistContext(artist): ArtistContext,
) -> Result<impl IntoResponse, AppError> {
    let service = ArtistService::new(&state.db);

    let artist = service.retire(artist.id).await?;

    Ok((
        StatusCode::OK,
        Json(ArtistResponseDto {
            artist: artist.into_dto(),
        }),
    ))
}
