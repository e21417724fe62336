use axum::http::StatusCode;

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::UNAUTHORIZED,
            message: message.into(),
        }
    }

    pub fn internal(err: impl std::error::Error) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: err.to_string(),
        }
    }
}

/// Rejected user input. Never reaches the store.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("missing required field: {0}")]
    Missing(&'static str),
    #[error("field {field} must be a number, got {value:?}")]
    NotNumeric { field: &'static str, value: String },
    #[error("field {0} must be greater than zero")]
    NotPositive(&'static str),
    #[error("field {0} must not be negative")]
    Negative(&'static str),
    #[error("field {0} must be a whole number")]
    NotWhole(&'static str),
    #[error("expected {expected} answers, got {got}")]
    AnswerCount { expected: usize, got: usize },
}

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("failed to write data file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode ledger {key}: {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum RewardError {
    #[error("unknown reward: {0}")]
    UnknownReward(String),
    #[error("you need {needed} more points to redeem this reward")]
    InsufficientPoints { needed: u64 },
    #[error(transparent)]
    Storage(#[from] StorageError),
}

#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Sign-in and profile failures.
#[derive(Debug, thiserror::Error)]
pub enum AccountError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        Self::bad_request(err.to_string())
    }
}

impl From<StorageError> for AppError {
    fn from(err: StorageError) -> Self {
        Self::internal(err)
    }
}

impl From<LogError> for AppError {
    fn from(err: LogError) -> Self {
        match err {
            LogError::Validation(err) => err.into(),
            LogError::Storage(err) => err.into(),
        }
    }
}

impl From<AccountError> for AppError {
    fn from(err: AccountError) -> Self {
        match err {
            AccountError::Validation(err) => err.into(),
            AccountError::Storage(err) => err.into(),
        }
    }
}

impl From<RewardError> for AppError {
    fn from(err: RewardError) -> Self {
        let status = match err {
            RewardError::UnknownReward(_) => StatusCode::NOT_FOUND,
            RewardError::InsufficientPoints { .. } => StatusCode::CONFLICT,
            RewardError::Storage(err) => return err.into(),
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}
