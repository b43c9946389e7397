use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::shared::types::MessageResponse;

/// Client-facing message for persistence faults and missing attachments.
pub const INTERNAL_SERVER_ERROR_MESSAGE: &str = "Internal server error";
/// Client-facing message for upload-stage faults (multipart parsing, disk write).
pub const UPLOAD_ERROR_MESSAGE: &str = "Multer error occurred";
/// Client-facing message for anything that escaped classification.
pub const UNKNOWN_ERROR_MESSAGE: &str = "An unknown error occurred";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The submission carried no `fileUpload` part
    #[error("File not uploaded")]
    MissingAttachment,

    /// Attachment could not be written to the upload directory
    #[error("Upload storage error: {0}")]
    Storage(#[source] std::io::Error),

    #[error("Multipart error: {0}")]
    Multipart(#[from] MultipartError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // All faults are logged server-side; the client only ever sees a
        // generic message (validation detail excepted).
        let (status, message) = match self {
            AppError::Database(ref e) => {
                tracing::error!("Database error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_SERVER_ERROR_MESSAGE.to_string(),
                )
            }
            AppError::MissingAttachment => {
                tracing::error!("Registration rejected: file not uploaded");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_SERVER_ERROR_MESSAGE.to_string(),
                )
            }
            AppError::Storage(ref e) => {
                tracing::error!("Upload storage error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    UPLOAD_ERROR_MESSAGE.to_string(),
                )
            }
            AppError::Multipart(ref e) => {
                tracing::error!("Multipart error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    UPLOAD_ERROR_MESSAGE.to_string(),
                )
            }
            AppError::Validation(ref msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Internal(ref msg) => {
                tracing::error!("Unknown error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    UNKNOWN_ERROR_MESSAGE.to_string(),
                )
            }
        };

        let body = Json(MessageResponse::new(message));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
