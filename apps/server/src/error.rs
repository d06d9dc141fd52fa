use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use cambio_core::errors::Error as CoreError;
use cambio_core::rates::RatesError;
use serde::Serialize;
use thiserror::Error;

#[allow(dead_code)]
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Core(#[from] CoreError),
    #[error("{0}")]
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    code: u16,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, msg) = match &self {
            ApiError::Core(e) => match e {
                // User asked for a base we do not list, or one we cannot
                // price right now: both are a 404 with a readable detail.
                CoreError::Rates(RatesError::UnknownBase(_))
                | CoreError::Rates(RatesError::BaseUnavailable(_)) => {
                    (StatusCode::NOT_FOUND, e.to_string())
                }
                CoreError::Directory(_) => (StatusCode::SERVICE_UNAVAILABLE, e.to_string()),
                _ => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
            },
            ApiError::Internal(reason) => (StatusCode::INTERNAL_SERVER_ERROR, reason.clone()),
        };
        let body = Json(ErrorBody {
            code: status.as_u16(),
            message: msg,
        });
        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
