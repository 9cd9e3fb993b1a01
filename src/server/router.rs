use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{health, query, webhook},
    state::AppState,
};

/// OpenAPI document served under `/api/docs`.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "matchboard",
        description = "Discord bot tracking CS match history for linked Steam accounts"
    ),
    tags(
        (name = "webhook", description = "Demo service callbacks"),
        (name = "query", description = "Match, account and guild lookups"),
        (name = "health", description = "Liveness probe")
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(health::health))
        .routes(routes!(webhook::demo_ready))
        .routes(routes!(webhook::demo_parsed))
        .routes(routes!(query::get_match))
        .routes(routes!(query::get_user))
        .routes(routes!(query::get_guild))
        .split_for_parts();

    router.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
