use actix_web::error::BlockingError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use diesel::r2d2::PoolError;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

pub mod parse;

pub use parse::parse_error;

pub const GENERIC_SERVER_ERROR: &str = "something went wrong";

/// Every failure a request can end with. The variant fixes the status code and
/// the short error code, the payload is the message shown to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    InternalServerError(String),
}

/// Wire shape of an error response.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct ErrorBody {
    #[schema(example = "no record found")]
    pub message: String,
    #[schema(example = 404)]
    pub status: u16,
    /// One of `bad_request`, `not_found`, `server-error`.
    #[schema(example = "not_found")]
    pub error: String,
}

impl ApiError {
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::BadRequest(_) => "bad_request",
            ApiError::NotFound(_) => "not_found",
            ApiError::InternalServerError(_) => "server-error",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ApiError::BadRequest(message)
            | ApiError::NotFound(message)
            | ApiError::InternalServerError(message) => message,
        }
    }

    pub fn body(&self) -> ErrorBody {
        ErrorBody {
            message: self.message().to_string(),
            status: self.status_code().as_u16(),
            error: self.code().to_string(),
        }
    }

    pub fn server_error() -> Self {
        ApiError::InternalServerError(GENERIC_SERVER_ERROR.to_string())
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(self.body())
    }
}

impl From<PoolError> for ApiError {
    fn from(err: PoolError) -> Self {
        tracing::error!(error = %err, "could not check out a database connection");
        ApiError::server_error()
    }
}

impl From<BlockingError> for ApiError {
    fn from(err: BlockingError) -> Self {
        tracing::error!(error = %err, "blocking database task was cancelled");
        ApiError::server_error()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[test]
    fn variants_map_to_status_and_code() {
        let cases = [
            (ApiError::BadRequest("x".into()), 400, "bad_request"),
            (ApiError::NotFound("x".into()), 404, "not_found"),
            (ApiError::InternalServerError("x".into()), 500, "server-error"),
        ];
        for (err, status, code) in cases {
            assert_eq!(err.status_code().as_u16(), status);
            assert_eq!(err.code(), code);
            assert_eq!(err.message(), "x");
        }
    }

    #[test]
    fn display_is_the_message() {
        let err = ApiError::NotFound("no record found".to_string());
        assert_eq!(err.to_string(), "no record found");
    }

    #[actix_web::test]
    async fn error_response_renders_json_body() {
        let err = ApiError::BadRequest("invalid json body".to_string());
        let resp = err.error_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let bytes = to_bytes(resp.into_body()).await.unwrap();
        let body: ErrorBody = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            body,
            ErrorBody {
                message: "invalid json body".to_string(),
                status: 400,
                error: "bad_request".to_string(),
            }
        );
    }
}
