// Maps handler failures onto HTTP responses.
//
// Responsibilities
// - Expected outcomes (not found, conflict, validation) become 4xx with a
//   readable message and are not logged as errors.
// - Persistence failures become a generic 500. The full error is logged with
//   an incident id, and only that id is returned to the caller.

use axum::Json;
use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use tracing::error;
use uuid::Uuid;

use crate::modules::camps::core::errors::CampsError;

#[derive(Debug)]
pub enum ApiError {
    Camps(CampsError),
    UnprocessableBody(String),
    InvalidQuery(String),
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemBody {
    pub error: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub incident_id: Option<Uuid>,
}

impl From<CampsError> for ApiError {
    fn from(error: CampsError) -> Self {
        ApiError::Camps(error)
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::InvalidQuery(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::InvalidQuery(rejection.body_text())
    }
}

fn problem(status: StatusCode, error: &'static str, message: String) -> Response {
    (
        status,
        Json(ProblemBody {
            error,
            message: Some(message),
            incident_id: None,
        }),
    )
        .into_response()
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Camps(CampsError::NotFound(message)) => {
                problem(StatusCode::NOT_FOUND, "NotFound", message)
            }
            ApiError::Camps(CampsError::Conflict(message)) => {
                problem(StatusCode::CONFLICT, "Conflict", message)
            }
            ApiError::Camps(CampsError::Validation(failure)) => {
                problem(StatusCode::BAD_REQUEST, "ValidationFailure", failure.to_string())
            }
            ApiError::Camps(CampsError::Persistence(failure)) => {
                let incident_id = Uuid::now_v7();
                error!(%incident_id, error = %failure, "persistence failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ProblemBody {
                        error: "Database failed",
                        message: None,
                        incident_id: Some(incident_id),
                    }),
                )
                    .into_response()
            }
            ApiError::UnprocessableBody(message) => {
                problem(StatusCode::UNPROCESSABLE_ENTITY, "UnprocessableBody", message)
            }
            ApiError::InvalidQuery(message) => {
                problem(StatusCode::BAD_REQUEST, "InvalidQuery", message)
            }
        }
    }
}
