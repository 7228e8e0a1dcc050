use actix_web::{
    error::ResponseError,
    http::{header::ContentType, StatusCode},
    HttpResponse,
};
use thiserror::Error;

use crate::api::InventoryApiError;

#[derive(Debug, Error)]
pub enum InventoryServerError {
    #[error("Could not initialize server. {0}")]
    InitializeError(String),
    #[error("Item not found")]
    ItemNotFound,
    /// The detail string stays out of the rendered message; clients only ever see the generic
    /// body while the cause goes to the logs.
    #[error("Internal server error")]
    BackendError(String),
    #[error("An I/O error happened in the server. {0}")]
    IOError(#[from] std::io::Error),
    #[error("UnspecifiedError. {0}")]
    Unspecified(String),
}

impl ResponseError for InventoryServerError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::ItemNotFound => StatusCode::NOT_FOUND,
            Self::BackendError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::InitializeError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::IOError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Unspecified(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .insert_header(ContentType::json())
            .body(serde_json::json!({ "error": self.to_string() }).to_string())
    }
}

impl From<InventoryApiError> for InventoryServerError {
    fn from(e: InventoryApiError) -> Self {
        match e {
            InventoryApiError::ItemNotFound => Self::ItemNotFound,
            InventoryApiError::StoreError(detail) => Self::BackendError(detail),
        }
    }
}
