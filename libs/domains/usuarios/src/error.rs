use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UserError {
    #[error("username '{0}' already exists")]
    DuplicateUsername(String),

    #[error("username must not be blank")]
    InvalidUsername,

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("usuario '{0}' not found")]
    NotFound(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type UserResult<T> = Result<T, UserError>;

impl From<sea_orm::DbErr> for UserError {
    fn from(err: sea_orm::DbErr) -> Self {
        UserError::Internal(format!("Database error: {}", err))
    }
}

impl From<UserError> for AppError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::DuplicateUsername(_) => AppError::Conflict(err.to_string()),
            UserError::InvalidUsername => AppError::BadRequest(err.to_string()),
            UserError::Validation(msg) => AppError::BadRequest(msg),
            UserError::NotFound(_) => AppError::NotFound(err.to_string()),
            UserError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_status_codes() {
        let cases = [
            (UserError::DuplicateUsername("ana".into()), StatusCode::CONFLICT),
            (UserError::InvalidUsername, StatusCode::BAD_REQUEST),
            (UserError::Validation("bad".into()), StatusCode::BAD_REQUEST),
            (UserError::NotFound("ana".into()), StatusCode::NOT_FOUND),
            (UserError::Internal("boom".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (err, status) in cases {
            assert_eq!(err.into_response().status(), status);
        }
    }

    #[test]
    fn test_db_errors_become_internal() {
        let err: UserError = sea_orm::DbErr::Custom("connection reset".into()).into();
        assert!(matches!(err, UserError::Internal(msg) if msg.contains("connection reset")));
    }
}
