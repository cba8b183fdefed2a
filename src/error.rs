use axum::{
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::json;

pub type Result<T> = std::result::Result<T, Error>;

/// Code used for failures that have no business-specific code.
pub const GENERIC_ERROR_CODE: &str = "GEN-001";

/// Postgres `string_data_right_truncation`, raised when a value exceeds its
/// column length.
const STRING_TOO_LONG: &str = "22001";

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    /// ATHR-001 unknown token, ATHR-002 signed out, ATHR-003 ownership/role.
    #[error("{code}: {message}")]
    AuthorizationFailed { code: &'static str, message: String },

    /// ATH-001 unknown username, ATH-002 wrong password.
    #[error("{code}: {message}")]
    AuthenticationFailed { code: &'static str, message: String },

    #[error("{code}: {message}")]
    SignUpRestricted { code: &'static str, message: String },

    #[error("{code}: {message}")]
    SignOutRestricted { code: &'static str, message: String },

    #[error("{code}: {message}")]
    InvalidQuestion { code: &'static str, message: String },

    #[error("{code}: {message}")]
    AnswerNotFound { code: &'static str, message: String },

    #[error("{code}: {message}")]
    UserNotFound { code: &'static str, message: String },

    /// A field-level constraint rejected by the store, e.g. blank content.
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Database error: {0}")]
    Database(sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    pub fn not_signed_in() -> Self {
        Error::AuthorizationFailed {
            code: "ATHR-001",
            message: "User has not signed in".to_string(),
        }
    }

    pub fn signed_out(message: impl Into<String>) -> Self {
        Error::AuthorizationFailed {
            code: "ATHR-002",
            message: message.into(),
        }
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Error::AuthorizationFailed {
            code: "ATHR-003",
            message: message.into(),
        }
    }

    pub fn question_not_found(message: impl Into<String>) -> Self {
        Error::InvalidQuestion {
            code: "QUES-001",
            message: message.into(),
        }
    }

    pub fn answer_not_found() -> Self {
        Error::AnswerNotFound {
            code: "ANS-001",
            message: "Entered answer uuid does not exist".to_string(),
        }
    }

    pub fn user_not_found(message: impl Into<String>) -> Self {
        Error::UserNotFound {
            code: "USR-001",
            message: message.into(),
        }
    }

    pub fn username_taken() -> Self {
        Error::SignUpRestricted {
            code: "SGR-001",
            message: "Try any other Username, this Username has already been taken".to_string(),
        }
    }

    pub fn email_taken() -> Self {
        Error::SignUpRestricted {
            code: "SGR-002",
            message: "This user has already been registered, try with any other emailId"
                .to_string(),
        }
    }

    /// Stable code reported to API callers.
    pub fn code(&self) -> &'static str {
        match self {
            Error::AuthorizationFailed { code, .. }
            | Error::AuthenticationFailed { code, .. }
            | Error::SignUpRestricted { code, .. }
            | Error::SignOutRestricted { code, .. }
            | Error::InvalidQuestion { code, .. }
            | Error::AnswerNotFound { code, .. }
            | Error::UserNotFound { code, .. } => code,
            _ => GENERIC_ERROR_CODE,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        let code = self.code();
        let (status, message) = match self {
            Error::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Error::AuthorizationFailed { message, .. } => (StatusCode::FORBIDDEN, message),
            Error::AuthenticationFailed { message, .. }
            | Error::SignOutRestricted { message, .. } => (StatusCode::UNAUTHORIZED, message),
            Error::SignUpRestricted { message, .. } => (StatusCode::CONFLICT, message),
            Error::InvalidQuestion { message, .. }
            | Error::AnswerNotFound { message, .. }
            | Error::UserNotFound { message, .. } => (StatusCode::NOT_FOUND, message),
            Error::ConstraintViolation(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            Error::Validation(err) => (StatusCode::UNPROCESSABLE_ENTITY, err.to_string()),
            Error::Database(err) => {
                tracing::error!(error = %err, "database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An unexpected error occurred".to_string(),
                )
            }
            Error::Config(msg) | Error::Internal(msg) => {
                tracing::error!(error = %msg, "internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An unexpected error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({ "code": code, "message": message }));
        (status, body).into_response()
    }
}

impl From<sqlx::Error> for Error {
    fn from(err: sqlx::Error) -> Self {
        let mapped = match &err {
            sqlx::Error::Database(db) => match db.kind() {
                sqlx::error::ErrorKind::CheckViolation
                | sqlx::error::ErrorKind::NotNullViolation => {
                    Some(Error::ConstraintViolation(db.message().to_string()))
                }
                sqlx::error::ErrorKind::UniqueViolation => match db.constraint() {
                    Some("users_username_key") => Some(Error::username_taken()),
                    Some("users_email_key") => Some(Error::email_taken()),
                    _ => None,
                },
                _ if db.code().as_deref() == Some(STRING_TOO_LONG) => {
                    Some(Error::ConstraintViolation(db.message().to_string()))
                }
                _ => None,
            },
            _ => None,
        };
        mapped.unwrap_or(Error::Database(err))
    }
}
