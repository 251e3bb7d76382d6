use serde::Serialize;
use utoipa::ToSchema;

/// Body of every HTTP 500 (and malformed-request) response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
}

/// Plain acknowledgement used by deletes and the status upsert.
#[derive(Debug, Serialize, ToSchema)]
pub struct Ack {
    pub success: bool,
}

impl Ack {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

/// Outcome of a category or product create.
///
/// A store failure during the insert is reported in-band with HTTP 200
/// rather than as a 500.
#[derive(Debug, Serialize, ToSchema)]
#[serde(untagged)]
pub enum CreateResponse {
    Created {
        success: bool,
        id: i64,
        image: Option<String>,
    },
    Rejected {
        success: bool,
        error: String,
    },
}

impl CreateResponse {
    pub fn created(id: i64, image: Option<String>) -> Self {
        CreateResponse::Created {
            success: true,
            id,
            image,
        }
    }

    pub fn rejected(error: impl Into<String>) -> Self {
        CreateResponse::Rejected {
            success: false,
            error: error.into(),
        }
    }
}
