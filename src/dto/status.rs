use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct SetStatusRequest {
    #[serde(default)]
    pub status: Option<String>,
}

/// `status` is `"none"` when the key was never written, and `null` when it
/// was written without a value.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: Option<String>,
}
