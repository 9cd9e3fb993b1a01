//! Payloads posted by the demo service and the acknowledgement returned to it.
//!
//! Every field defaults so that a structurally valid but incomplete payload reaches
//! validation and is rejected with a descriptive message instead of a decode error.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct DemoReadyDto {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub data: DemoReadyDataDto,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct DemoReadyDataDto {
    #[serde(default)]
    pub share_code: String,
    #[serde(default)]
    pub demo_path: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct DemoParsedDto {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub data: DemoParsedDataDto,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct DemoParsedDataDto {
    #[serde(default)]
    pub share_code: String,
    #[serde(default)]
    pub demo_path: String,
    /// Parser output, passed through untouched.
    #[serde(default)]
    #[schema(value_type = Object)]
    pub stats: Option<serde_json::Value>,
    /// Participants reported by the parser, if it lists them.
    #[serde(default)]
    pub steam_ids: Vec<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct WebhookAckDto {
    pub status: String,
    pub message: String,
}
