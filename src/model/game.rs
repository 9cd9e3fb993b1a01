use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Match record as returned by `GET /api/v1/match/{share_code}`.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct GameDto {
    pub id: i32,
    pub share_code: String,
    pub demo_name: String,
    /// `requested`, `ready` or `parsed`
    pub status: String,
    pub steam_ids: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
