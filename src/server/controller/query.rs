use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, game::GameDto, guild::GuildDto, user::UserDto},
    server::{
        error::AppError,
        service::{game::GameService, guild::GuildService, user::UserService},
        state::AppState,
    },
};

/// Tag for grouping lookup endpoints in OpenAPI documentation
pub static QUERY_TAG: &str = "query";

/// Get a match by share code.
///
/// # Returns
/// - `200 OK` - Match with its state, demo location and participants
/// - `404 Not Found` - Unknown share code
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/match/{share_code}",
    tag = QUERY_TAG,
    params(
        ("share_code" = String, Path, description = "Match share code")
    ),
    responses(
        (status = 200, description = "Match found", body = GameDto),
        (status = 404, description = "Match not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_match(
    State(state): State<AppState>,
    Path(share_code): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let detail = GameService::new(&state.db).get_detail(&share_code).await?;

    Ok((StatusCode::OK, Json(detail.into_dto())))
}

/// Get a linked Steam account.
///
/// The auth code is never returned.
///
/// # Returns
/// - `200 OK` - Account with its last share code and match count
/// - `404 Not Found` - Steam ID not registered
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/user/{steam_id}",
    tag = QUERY_TAG,
    params(
        ("steam_id" = String, Path, description = "SteamID64")
    ),
    responses(
        (status = 200, description = "Account found", body = UserDto),
        (status = 404, description = "Account not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(steam_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let summary = UserService::new(&state.db).get_summary(&steam_id).await?;

    Ok((StatusCode::OK, Json(summary.into_dto())))
}

/// Get a guild.
///
/// # Returns
/// - `200 OK` - Guild with its channel, member count and match count
/// - `404 Not Found` - Guild unknown
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/guild/{guild_id}",
    tag = QUERY_TAG,
    params(
        ("guild_id" = String, Path, description = "Discord guild ID")
    ),
    responses(
        (status = 200, description = "Guild found", body = GuildDto),
        (status = 404, description = "Guild not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_guild(
    State(state): State<AppState>,
    Path(guild_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let summary = GuildService::new(&state.db).get_summary(&guild_id).await?;

    Ok((StatusCode::OK, Json(summary.into_dto())))
}
