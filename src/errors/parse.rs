//! Classification of persistence failures into [`ApiError`].
//!
//! Diesel's typed variants are matched first. Anything else falls back to the
//! text of the error, so drivers that only surface a message still classify.

use diesel::result::{DatabaseErrorKind, Error as DieselError};

use super::ApiError;

pub const NO_RECORD_FOUND: &str = "no record found";
pub const DUPLICATE_RECORD: &str = "duplicate record, value already exists";

const NO_ROWS_TEXT: &str = "no rows in result set";
const UNIQUE_VIOLATION_TEXT: &str = "violates unique constraint";

pub fn parse_error(err: &DieselError) -> ApiError {
    match err {
        DieselError::NotFound => ApiError::NotFound(NO_RECORD_FOUND.to_string()),
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            ApiError::BadRequest(DUPLICATE_RECORD.to_string())
        }
        other => parse_message(&other.to_string()),
    }
}

fn parse_message(message: &str) -> ApiError {
    if message.contains(NO_ROWS_TEXT) {
        ApiError::NotFound(NO_RECORD_FOUND.to_string())
    } else if message.contains(UNIQUE_VIOLATION_TEXT) {
        ApiError::BadRequest(DUPLICATE_RECORD.to_string())
    } else {
        tracing::error!(error = %message, "unclassified persistence error");
        ApiError::server_error()
    }
}

impl From<DieselError> for ApiError {
    fn from(err: DieselError) -> Self {
        parse_error(&err)
    }
}
