use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::services::ai_client::AiClientError;

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Missing prompt in request body.")]
    MissingPrompt,

    #[error("A generation is already in progress")]
    Busy,

    #[error("{0}")]
    Configuration(String),

    #[error("{body}")]
    Upstream { status: u16, body: String },

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

/// Wire shape of every failure response: `{"error": "..."}`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::MissingPrompt => StatusCode::BAD_REQUEST,
            AppError::Busy => StatusCode::CONFLICT,
            AppError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            AppError::StorageError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
        })
    }
}

impl From<AiClientError> for AppError {
    fn from(err: AiClientError) -> Self {
        match err {
            AiClientError::MissingCredential => AppError::Configuration(err.to_string()),
            AiClientError::Api { status, message } => AppError::Upstream {
                status,
                body: message,
            },
            AiClientError::Http(e) => AppError::InternalError(e.to_string()),
            AiClientError::Parse(message) => AppError::InternalError(message),
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::ValidationError(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::InternalError(format!("JSON serialization error: {}", err))
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::StorageError(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(
            AppError::NotFound("test".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::ValidationError("test".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AppError::Busy.status_code(), StatusCode::CONFLICT);
        assert_eq!(
            AppError::Configuration("no key".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_upstream_status_passes_through() {
        let err = AppError::Upstream {
            status: 429,
            body: "slow down".into(),
        };
        assert_eq!(err.status_code(), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(err.to_string(), "slow down");
    }

    #[test]
    fn test_upstream_invalid_status_maps_to_bad_gateway() {
        let err = AppError::Upstream {
            status: 42,
            body: "odd".into(),
        };
        assert_eq!(err.status_code(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_ai_client_errors_map_to_proxy_statuses() {
        let err: AppError = AiClientError::MissingCredential.into();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "DEEPSEEK_API_KEY not set on server.");

        let err: AppError = AiClientError::Api {
            status: 401,
            message: "bad key".into(),
        }
        .into();
        assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(err.to_string(), "bad key");

        let err: AppError = AiClientError::Parse("not json".into()).into();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(AppError::MissingPrompt.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_error_messages() {
        let err = AppError::NotFound("module".into());
        assert_eq!(err.to_string(), "Not found: module");
    }

    #[actix_web::test]
    async fn test_error_response_body_shape() {
        let resp = AppError::ValidationError("bad".into()).error_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body = actix_web::body::to_bytes(resp.into_body()).await.unwrap();
        let parsed: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(parsed.error, "Validation error: bad");
    }
}
