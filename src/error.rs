use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::messages;

/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Save failed: {0}")]
    SaveFailed(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("External API error: {0}")]
    ExternalApi(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// Classifies the failure of a mutating statement
    ///
    /// A uniqueness violation becomes a `Conflict` carrying `duplicate_msg`;
    /// anything else becomes a generic `SaveFailed`. The underlying cause is
    /// logged here and never reaches the client.
    pub fn from_write(err: sqlx::Error, duplicate_msg: &str) -> Self {
        let is_duplicate = matches!(
            &err,
            sqlx::Error::Database(db_err) if db_err.is_unique_violation()
        );

        if is_duplicate {
            tracing::warn!(error = %err, "Uniqueness constraint violated");
            AppError::Conflict(duplicate_msg.to_string())
        } else {
            tracing::warn!(error = %err, "Write to the database failed");
            AppError::SaveFailed(messages::SAVE_FAILED.to_string())
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::SaveFailed(_) | AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::ExternalApi(_) | AppError::HttpClient(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, status = %status, "Request failed");
        }

        // Transport and database causes stay in the log only
        let message = match self {
            AppError::NotFound(msg)
            | AppError::Conflict(msg)
            | AppError::SaveFailed(msg)
            | AppError::InvalidInput(msg)
            | AppError::ExternalApi(msg) => msg,
            AppError::HttpClient(_) => messages::EXTERNAL_SERVICE_FAILED.to_string(),
            AppError::Database(_) | AppError::Internal(_) => {
                messages::INTERNAL_FAILURE.to_string()
            }
        };

        let body = Json(json!({
            "message": message
        }));

        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
