use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use utoipa::ToSchema;

use crate::core::errors::TiffinError;
use crate::core::models::{
    food::FoodItem,
    order::{Order, OrderItem},
};

// Request structs for JSON payloads
#[derive(Deserialize, ToSchema)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Deserialize, ToSchema)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CartItemRequest {
    pub item_id: String,
}

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RemoveFoodRequest {
    pub id: String,
}

/// Documentation-only schema for the multipart food upload.
#[derive(ToSchema)]
pub struct AddFoodForm {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    #[schema(value_type = String, format = Binary)]
    pub image: String,
}

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrderRequest {
    pub items: Vec<OrderItem>,
    pub total_price: f64,
}

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VerifyOrderRequest {
    pub order_id: String,
    pub payment_success: bool,
}

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrderStatusRequest {
    pub order_id: String,
    pub status: String,
}

// Response envelopes
#[derive(Serialize, ToSchema)]
pub struct StatusResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Serialize, ToSchema)]
pub struct AuthResponse {
    pub success: bool,
    pub message: String,
    pub token: String,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub success: bool,
    pub cart_data: HashMap<String, u32>,
}

#[derive(Serialize, ToSchema)]
pub struct FoodListResponse {
    pub success: bool,
    pub data: Vec<FoodItem>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrderResponse {
    pub success: bool,
    pub order_id: String,
    pub session_url: String,
}

#[derive(Serialize, ToSchema)]
pub struct OrderListResponse {
    pub success: bool,
    pub data: Vec<Order>,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
}

// Newtype wrapper for TiffinError to implement IntoResponse
pub struct ApiError(pub TiffinError);

impl From<TiffinError> for ApiError {
    fn from(err: TiffinError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self.0 {
            TiffinError::EmailAlreadyRegistered(_) => (StatusCode::BAD_REQUEST, "User already exists!".to_string()),
            TiffinError::InvalidEmail(_) => (StatusCode::BAD_REQUEST, "Please enter a valid email".to_string()),
            TiffinError::InvalidInput(_, field_error) => (StatusCode::BAD_REQUEST, field_error.description),
            TiffinError::InvalidOrderStatus(status) => {
                (StatusCode::BAD_REQUEST, format!("Invalid order status: {}", status))
            }
            TiffinError::UserNotFound(_) => (StatusCode::NOT_FOUND, "User doesn't exist".to_string()),
            TiffinError::FoodNotFound(id) => (StatusCode::NOT_FOUND, format!("Food item {} not found", id)),
            TiffinError::OrderNotFound(id) => (StatusCode::NOT_FOUND, format!("Order {} not found", id)),
            TiffinError::InvalidCredentials => (StatusCode::UNAUTHORIZED, "Invalid credentials".to_string()),
            TiffinError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            TiffinError::AdminRequired => (StatusCode::FORBIDDEN, "Admin access required".to_string()),
            TiffinError::InternalServerError(msg)
            | TiffinError::StorageError(msg)
            | TiffinError::MediaError(msg)
            | TiffinError::PaymentError(msg) => {
                tracing::error!(error = %msg, "Request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
            }
        };
        (status, Json(ErrorResponse { success: false, message })).into_response()
    }
}
