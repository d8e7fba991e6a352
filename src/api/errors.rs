use serde::{Deserialize, Serialize};

use crate::engine::{EngineError, ErrorKind};

use super::dto::{status, ErrorBody};

/// Ошибки внешнего API (то, что отдаём клиенту).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Игра или игрок не найдены → 404.
    #[error("{0}")]
    NotFound(String),

    /// Неправильные входные данные (битый JSON, игрок не из этой игры) → 400.
    #[error("{0}")]
    BadRequest(String),
}

impl ApiError {
    pub fn status(&self) -> u16 {
        match self {
            ApiError::NotFound(_) => status::NOT_FOUND,
            ApiError::BadRequest(_) => status::BAD_REQUEST,
        }
    }

    pub fn body(&self) -> ErrorBody {
        ErrorBody {
            error: self.to_string(),
        }
    }
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        match err.kind() {
            ErrorKind::NotFound => ApiError::NotFound(err.to_string()),
            ErrorKind::InvalidArgument => ApiError::BadRequest(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::BadRequest(format!("malformed request: {err}"))
    }
}
