use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Wire body for every response this service produces, success or failure.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
