use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        webhook::{DemoParsedDto, DemoReadyDto, WebhookAckDto},
    },
    server::{
        error::{validation::ValidationError, AppError},
        model::event::{DemoParsedEvent, DemoReadyEvent},
        state::AppState,
    },
};

/// Tag for grouping webhook endpoints in OpenAPI documentation
pub static WEBHOOK_TAG: &str = "webhook";

/// Demo service callback for a downloaded demo.
///
/// Stores the demo location on the match and requests parsing. A failed parse request
/// is logged and does not fail the callback once the match is stored.
///
/// # Arguments
/// - `state` - Application state containing the match pipeline
/// - `payload` - Callback body, rejected with 400 if it is not valid JSON
///
/// # Returns
/// - `200 OK` - Callback processed
/// - `400 Bad Request` - Malformed body, missing field or reported failure
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/webhooks/demoReady",
    tag = WEBHOOK_TAG,
    request_body = DemoReadyDto,
    responses(
        (status = 200, description = "Demo ready processed", body = WebhookAckDto),
        (status = 400, description = "Invalid payload", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn demo_ready(
    State(state): State<AppState>,
    payload: Result<Json<DemoReadyDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) =
        payload.map_err(|rejection| ValidationError::InvalidPayload(rejection.body_text()))?;
    let event = DemoReadyEvent::try_from(payload)?;

    tracing::info!("Demo ready for {}", event.share_code);

    state.pipeline.handle_demo_ready(event).await?;

    Ok((
        StatusCode::OK,
        Json(WebhookAckDto {
            status: "success".to_string(),
            message: "Demo ready processed successfully".to_string(),
        }),
    ))
}

/// Demo service callback for a parsed demo.
///
/// Marks the match as parsed and notifies every guild with a participating member.
/// Repeated callbacks for a parsed match are acknowledged without notifying again.
///
/// # Arguments
/// - `state` - Application state containing the match pipeline
/// - `payload` - Callback body, rejected with 400 if it is not valid JSON
///
/// # Returns
/// - `200 OK` - Callback processed
/// - `400 Bad Request` - Malformed body, missing field or reported failure
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/webhooks/demoParsed",
    tag = WEBHOOK_TAG,
    request_body = DemoParsedDto,
    responses(
        (status = 200, description = "Demo parsing processed", body = WebhookAckDto),
        (status = 400, description = "Invalid payload", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn demo_parsed(
    State(state): State<AppState>,
    payload: Result<Json<DemoParsedDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) =
        payload.map_err(|rejection| ValidationError::InvalidPayload(rejection.body_text()))?;
    let event = DemoParsedEvent::try_from(payload)?;

    tracing::info!("Demo parsed for {}", event.share_code);

    state.pipeline.handle_demo_parsed(event).await?;

    Ok((
        StatusCode::OK,
        Json(WebhookAckDto {
            status: "success".to_string(),
            message: "Demo parsing completed successfully".to_string(),
        }),
    ))
}
