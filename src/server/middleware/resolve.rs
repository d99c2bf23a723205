//! Path parameter resolution.
//!
//! Each extractor reads an id from the request path, loads the matching row and hands it to
//! the handler as a typed context value. When the row does not exist the request is answered
//! with 404 and the handler never runs, so handlers can rely on the entity being present.
//!
//! Nested issue routes resolve the parent series first, so an unknown series answers 404
//! even if the issue id exists.
//!
//! An id segment that is not an integer cannot match any row and is treated like an unknown
//! id.

use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use serde::Deserialize;

use crate::server::{
    error::AppError,
    model::{artist::Artist, issue::Issue, series::Series},
    service::{artist::ArtistService, issue::IssueService, series::SeriesService},
    state::AppState,
};

#[derive(Deserialize)]
struct ArtistPath {
    artist_id: i32,
}

#[derive(Deserialize)]
struct SeriesPath {
    series_id: i32,
}

#[derive(Deserialize)]
struct IssuePath {
    series_id: i32,
    issue_id: i32,
}

/// Artist loaded from the `{artist_id}` path segment.
pub struct ArtistContext(pub Artist);

/// Series loaded from the `{series_id}` path segment.
pub struct SeriesContext(pub Series);

/// Issue loaded from `{issue_id}` together with its parent series from `{series_id}`.
pub struct IssueContext {
    pub series: Series,
    pub issue: Issue,
}

impl FromRequestParts<AppState> for ArtistContext {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Path(ArtistPath { artist_id }) =
            Path::<ArtistPath>::from_request_parts(parts, state)
                .await
                .map_err(|_| artist_not_found())?;

        let artist = ArtistService::new(&state.db)
            .get_by_id(artist_id)
            .await?
            .ok_or_else(artist_not_found)?;

        Ok(Self(artist))
    }
}

impl FromRequestParts<AppState> for SeriesContext {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Path(SeriesPath { series_id }) =
            Path::<SeriesPath>::from_request_parts(parts, state)
                .await
                .map_err(|_| series_not_found())?;

        let series = load_series(state, series_id).await?;

        Ok(Self(series))
    }
}

impl FromRequestParts<AppState> for IssueContext {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Path(IssuePath {
            series_id,
            issue_id,
        }) = Path::<IssuePath>::from_request_parts(parts, state)
            .await
            .map_err(|_| issue_not_found())?;

        let series = load_series(state, series_id).await?;

        let issue = IssueService::new(&state.db)
            .get_by_id(issue_id)
            .await?
            .ok_or_else(issue_not_found)?;

        Ok(Self { series, issue })
    }
}

async fn load_series(state: &AppState, series_id: i32) -> Result<Series, AppError> {
    SeriesService::new(&state.db)
        .get_by_id(series_id)
        .await?
        .ok_or_else(series_not_found)
}

fn artist_not_found() -> AppError {
    AppError::NotFound("Artist not found".to_string())
}

fn series_not_found() -> AppError {
    AppError::NotFound("Series not found".to_string())
}

fn issue_not_found() -> AppError {
    AppError::NotFound("Issue not found".to_string())
}
