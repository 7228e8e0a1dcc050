use actix_web::{
    error::ResponseError,
    http::{header::ContentType, StatusCode},
    HttpResponse,
};
use order_flow::OrderFlowError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Could not initialize server. {0}")]
    InitializeError(String),
    #[error("Missing userId or itemId")]
    MissingOrderFields,
    #[error("Payload deserialization error")]
    CouldNotDeserializePayload,
    #[error("User service unavailable: {0}")]
    UserServiceUnavailable(String),
    #[error("Inventory service unavailable: {0}")]
    InventoryServiceUnavailable(String),
    #[error("An I/O error happened in the server. {0}")]
    IOError(#[from] std::io::Error),
    #[error("UnspecifiedError. {0}")]
    Unspecified(String),
}

impl ResponseError for ServerError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingOrderFields => StatusCode::BAD_REQUEST,
            Self::CouldNotDeserializePayload => StatusCode::BAD_REQUEST,
            Self::UserServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::InventoryServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
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

// The upstream detail string is extracted here so that the service name prefix appears exactly
// once in the rendered error.
impl From<OrderFlowError> for ServerError {
    fn from(e: OrderFlowError) -> Self {
        match e {
            OrderFlowError::MissingFields => Self::MissingOrderFields,
            OrderFlowError::UserServiceUnavailable(e) => Self::UserServiceUnavailable(e.to_string()),
            OrderFlowError::InventoryServiceUnavailable(e) => Self::InventoryServiceUnavailable(e.to_string()),
        }
    }
}
