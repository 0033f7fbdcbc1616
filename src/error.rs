use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::message::ChatResponse;
use crate::services::generation::GenerationError;
use crate::services::language::DetectionError;

/// Failures that can surface from the chat handler.
///
/// Every variant renders as HTTP 500 with a `{"response": "An error
/// occurred: ..."}` body, so the client always receives a JSON object with
/// a `response` string regardless of outcome.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    Parse(String),

    #[error(transparent)]
    Detection(#[from] DetectionError),

    #[error(transparent)]
    Generation(#[from] GenerationError),
}

impl AppError {
    fn kind(&self) -> &'static str {
        match self {
            AppError::Parse(_) => "parse",
            AppError::Detection(_) => "detection",
            AppError::Generation(_) => "generation",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(kind = self.kind(), error = %self, "request failed");

        let body = ChatResponse {
            response: format!("An error occurred: {self}"),
        };
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn error_to_json(err: AppError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        (status, json)
    }

    #[tokio::test]
    async fn parse_error_returns_500_with_response_field() {
        let (status, json) = error_to_json(AppError::Parse("missing field".into())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["response"], "An error occurred: missing field");
    }

    #[tokio::test]
    async fn detection_error_keeps_response_contract() {
        let (status, json) = error_to_json(DetectionError::Unclassifiable.into()).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(
            json["response"]
                .as_str()
                .unwrap()
                .starts_with("An error occurred: ")
        );
    }

    #[tokio::test]
    async fn generation_error_keeps_response_contract() {
        let err = GenerationError::RequestFailed("connection refused".into());
        let (status, json) = error_to_json(err.into()).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(
            json["response"]
                .as_str()
                .unwrap()
                .contains("connection refused")
        );
    }
}
