use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: String,
    pub message: String,
}

impl fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", serde_json::to_string(&self).unwrap())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ErrorMessage {
    WrongAccessCode,
    AdminRequired,
    PropertyNotFound,
    DeveloperNotFound,
    TaskNotFound,
    TestNotFound,
    DeveloperIdTaken,
}

impl ToString for ErrorMessage {
    fn to_string(&self) -> String {
        self.to_str().to_owned()
    }
}

impl ErrorMessage {
    fn to_str(&self) -> String {
        match self {
            ErrorMessage::WrongAccessCode => "Unauthorized".to_string(),
            ErrorMessage::AdminRequired => {
                "Admin access required. Verify the access code to continue".to_string()
            }
            ErrorMessage::PropertyNotFound => "Property not found".to_string(),
            ErrorMessage::DeveloperNotFound => "Developer not found".to_string(),
            ErrorMessage::TaskNotFound => "Task not found".to_string(),
            ErrorMessage::TestNotFound => "Test not found".to_string(),
            ErrorMessage::DeveloperIdTaken => {
                "A developer with this id already exists".to_string()
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct HttpError {
    pub message: String,
    pub status: StatusCode,
}

impl HttpError {
    pub fn new(message: impl Into<String>, status: StatusCode) -> Self {
        HttpError {
            message: message.into(),
            status,
        }
    }

    pub fn server_error(message: impl Into<String>) -> Self {
        HttpError {
            message: message.into(),
            status: StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        HttpError {
            message: message.into(),
            status: StatusCode::BAD_REQUEST,
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        HttpError {
            message: message.into(),
            status: StatusCode::UNAUTHORIZED,
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        HttpError {
            message: message.into(),
            status: StatusCode::NOT_FOUND,
        }
    }

    pub fn into_http_response(self) -> Response {
        let json_response = Json(ErrorResponse {
            status: "fail".to_string(),
            message: self.message.clone(),
        });

        (self.status, json_response).into_response()
    }
}

impl fmt::Display for HttpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "HttpError: message: {}, status: {}",
            self.message, self.status
        )
    }
}

impl std::error::Error for HttpError {}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        self.into_http_response()
    }
}

#[derive(Error, Debug)]
pub enum UploadError {
    #[error("file exceeds the upload limit of {0} bytes")]
    FileTooLarge(usize),

    #[error("text field exceeds {0} bytes")]
    TextFieldTooLarge(usize),

    #[error("malformed multipart body: {0}")]
    Malformed(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<UploadError> for HttpError {
    fn from(error: UploadError) -> Self {
        match error {
            UploadError::FileTooLarge(_) | UploadError::TextFieldTooLarge(_) => {
                HttpError::new(error.to_string(), StatusCode::PAYLOAD_TOO_LARGE)
            }
            UploadError::Malformed(_) => HttpError::bad_request(error.to_string()),
            UploadError::Io(_) => HttpError::server_error(error.to_string()),
        }
    }
}
