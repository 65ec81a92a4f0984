use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use taskboard_shared::api::ValidationError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Extractor rejection that keeps the framework's status.
    #[error("{1}")]
    Rejected(StatusCode, String),
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::Validation(err.to_string())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(_)
            | JsonRejection::JsonSyntaxError(_)
            | JsonRejection::MissingJsonContentType(_) => {
                AppError::Validation(rejection.body_text())
            }
            _ => AppError::Rejected(rejection.status(), rejection.body_text()),
        }
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        match rejection {
            // Ids that fail to parse cannot name a stored row; a wrong
            // parameter count is a routing bug and stays a 500
            PathRejection::FailedToDeserializePathParams(_)
                if rejection.status() == StatusCode::BAD_REQUEST =>
            {
                tracing::debug!("Rejected path: {}", rejection.body_text());
                AppError::NotFound("Resource")
            }
            _ => AppError::Rejected(rejection.status(), rejection.body_text()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, self.to_string()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Database error".to_string())
            }
            AppError::Rejected(status, msg) => {
                if status.is_server_error() {
                    tracing::error!("Extractor rejection: {}", msg);
                }
                (*status, msg.clone())
            }
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
