use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Serialize)]
pub struct FieldError {
    pub field: String,
    pub title: String,
    pub description: String,
}

#[derive(Error, Debug, Serialize)]
pub enum TiffinError {
    #[error("User already exists!")]
    EmailAlreadyRegistered(String),
    #[error("Please enter a valid email")]
    InvalidEmail(String),
    #[error("User doesn't exist")]
    UserNotFound(String),
    #[error("Food item {0} not found")]
    FoodNotFound(String),
    #[error("Order {0} not found")]
    OrderNotFound(String),
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Not authorized: {0}")]
    Unauthorized(String),
    #[error("Admin access required")]
    AdminRequired,
    #[error("Invalid order status: {0}")]
    InvalidOrderStatus(String),
    #[error("Invalid input for field `{0}`: {1:?}")]
    InvalidInput(String, FieldError),
    #[error("Internal server error: {0}")]
    InternalServerError(String),
    #[error("Storage error: {0}")]
    StorageError(String),
    #[error("Media error: {0}")]
    MediaError(String),
    #[error("Payment error: {0}")]
    PaymentError(String),
}
