use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{artist, issue, series},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Xpress Comics API", description = "Catalogue of artists, series and issues"),
    tags(
        (name = "artist", description = "Artists and their employment status"),
        (name = "series", description = "Comic series"),
        (name = "issue", description = "Issues nested under a series")
    )
)]
struct ApiDoc;

/// Builds the API routes and mounts the Swagger UI at `/api/docs`.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(artist::get_artists, artist::create_artist))
        .routes(routes!(
            artist::get_artist,
            artist::update_artist,
            artist::delete_artist
        ))
        .routes(routes!(series::get_all_series, series::create_series))
        .routes(routes!(
            series::get_series,
            series::update_series,
            series::delete_series
        ))
        .routes(routes!(issue::get_issues, issue::create_issue))
        .routes(routes!(
            issue::get_issue,
            issue::update_issue,
            issue::delete_issue
        ))
        .split_for_parts();

    router.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}

/// Complete application with state, permissive CORS and per-request tracing applied.
pub fn app(state: AppState) -> Router {
    router()
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
