use crate::{
    api::models::*,
    auth::jwt::Claims,
    core::{
        errors::{FieldError, TiffinError},
        models::user::UserRole,
        services::TiffinService,
    },
    infrastructure::{
        media::local::LocalMediaStore, payments::stub::StubPaymentGateway, storage::in_memory::InMemoryStorage,
    },
};
use axum::{
    Extension, Json, Router,
    extract::{Multipart, Request, State},
    http::StatusCode,
    middleware::{self, Next},
    response::IntoResponse,
};
use http::header;

use std::sync::Arc;

pub type AppService = TiffinService<InMemoryStorage, LocalMediaStore, StubPaymentGateway>;

/// Middleware to validate the Bearer JWT and attach its claims.
async fn auth_middleware(
    State(service): State<Arc<AppService>>,
    mut req: Request<axum::body::Body>,
    next: Next,
) -> Result<impl IntoResponse, ApiError> {
    let auth_header = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| TiffinError::Unauthorized("Missing Authorization header".to_string()))?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| TiffinError::Unauthorized("Invalid Authorization header".to_string()))?;

    let claims = service.validate_token(token)?;
    req.extensions_mut().insert(claims);
    Ok(next.run(req).await)
}

/// Runs after `auth_middleware`; rejects valid tokens without the admin role.
async fn admin_middleware(req: Request<axum::body::Body>, next: Next) -> Result<impl IntoResponse, ApiError> {
    let claims = req
        .extensions()
        .get::<Claims>()
        .ok_or_else(|| TiffinError::Unauthorized("Missing Authorization header".to_string()))?;
    if claims.role != UserRole::Admin {
        return Err(TiffinError::AdminRequired.into());
    }
    Ok(next.run(req).await)
}

// Define API routes
pub fn api_routes(service: Arc<AppService>) -> Router {
    let admin_routes = Router::new()
        .route("/food/add", axum::routing::post(add_food))
        .route("/food/remove", axum::routing::post(remove_food))
        .route("/order/list", axum::routing::get(list_orders))
        .route("/order/update", axum::routing::post(update_order_status))
        .route_layer(middleware::from_fn(admin_middleware));

    let protected_routes = Router::new()
        .route("/cart/add", axum::routing::post(add_to_cart))
        .route("/cart/remove", axum::routing::post(remove_from_cart))
        .route("/cart/get", axum::routing::post(get_cart))
        .route("/order/place", axum::routing::post(place_order))
        .route("/order/userorders", axum::routing::post(user_orders))
        .merge(admin_routes)
        .route_layer(middleware::from_fn_with_state(service.clone(), auth_middleware));

    Router::new()
        .route("/user/register", axum::routing::post(register))
        .route("/user/login", axum::routing::post(login))
        .route("/food/list", axum::routing::get(list_food))
        .route("/order/verify", axum::routing::post(verify_order))
        .merge(protected_routes)
        .with_state(service)
}

#[utoipa::path(
    post,
    path = "/api/user/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User registered successfully", body = AuthResponse),
        (status = 400, description = "Validation failure or duplicate email", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn register(
    State(service): State<Arc<AppService>>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), ApiError> {
    let (_user, token) = service.register_user(&req.name, &req.email, &req.password).await?;
    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            success: true,
            message: "User registered successfully".to_string(),
            token,
        }),
    ))
}

#[utoipa::path(
    post,
    path = "/api/user/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = AuthResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse),
        (status = 404, description = "Unknown email", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn login(
    State(service): State<Arc<AppService>>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let token = service.login(&req.email, &req.password).await?;
    Ok(Json(AuthResponse {
        success: true,
        message: "Login successful".to_string(),
        token,
    }))
}

#[utoipa::path(
    post,
    path = "/api/cart/add",
    request_body = CartItemRequest,
    responses(
        (status = 200, description = "Item added to cart", body = StatusResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("Bearer" = []))
)]
pub async fn add_to_cart(
    State(service): State<Arc<AppService>>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<CartItemRequest>,
) -> Result<Json<StatusResponse>, ApiError> {
    service.add_to_cart(&claims.sub, &req.item_id).await?;
    Ok(Json(StatusResponse {
        success: true,
        message: "Added To Cart".to_string(),
    }))
}

#[utoipa::path(
    post,
    path = "/api/cart/remove",
    request_body = CartItemRequest,
    responses(
        (status = 200, description = "Item removed from cart", body = StatusResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("Bearer" = []))
)]
pub async fn remove_from_cart(
    State(service): State<Arc<AppService>>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<CartItemRequest>,
) -> Result<Json<StatusResponse>, ApiError> {
    service.remove_from_cart(&claims.sub, &req.item_id).await?;
    Ok(Json(StatusResponse {
        success: true,
        message: "Removed From Cart".to_string(),
    }))
}

#[utoipa::path(
    post,
    path = "/api/cart/get",
    responses(
        (status = 200, description = "Current cart contents", body = CartResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("Bearer" = []))
)]
pub async fn get_cart(
    State(service): State<Arc<AppService>>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<CartResponse>, ApiError> {
    let cart_data = service.get_cart(&claims.sub).await?;
    Ok(Json(CartResponse {
        success: true,
        cart_data,
    }))
}

#[utoipa::path(
    post,
    path = "/api/food/add",
    request_body(content = AddFoodForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Food item added", body = StatusResponse),
        (status = 400, description = "Missing or malformed field", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Admin role required", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("Bearer" = []))
)]
pub async fn add_food(
    State(service): State<Arc<AppService>>,
    mut multipart: Multipart,
) -> Result<Json<StatusResponse>, ApiError> {
    let mut name = None;
    let mut description = None;
    let mut price = None;
    let mut category = None;
    let mut image: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| malformed_field("multipart", &e.to_string()))?
    {
        match field.name() {
            Some("name") => name = Some(read_text(field, "name").await?),
            Some("description") => description = Some(read_text(field, "description").await?),
            Some("category") => category = Some(read_text(field, "category").await?),
            Some("price") => {
                let raw = read_text(field, "price").await?;
                price = Some(
                    raw.parse::<f64>()
                        .map_err(|_| malformed_field("price", "price must be a number"))?,
                );
            }
            Some("image") => {
                let file_name = field.file_name().unwrap_or("upload").to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| malformed_field("image", &e.to_string()))?;
                image = Some((file_name, bytes.to_vec()));
            }
            _ => {}
        }
    }

    let name = name.ok_or_else(|| missing_field("name"))?;
    let description = description.ok_or_else(|| missing_field("description"))?;
    let price = price.ok_or_else(|| missing_field("price"))?;
    let category = category.ok_or_else(|| missing_field("category"))?;
    let (file_name, bytes) = image.ok_or_else(|| missing_field("image"))?;

    service
        .add_food(&name, &description, price, &category, &file_name, &bytes)
        .await?;
    Ok(Json(StatusResponse {
        success: true,
        message: "Food Added".to_string(),
    }))
}

#[utoipa::path(
    get,
    path = "/api/food/list",
    responses(
        (status = 200, description = "All food items in insertion order", body = FoodListResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn list_food(State(service): State<Arc<AppService>>) -> Result<Json<FoodListResponse>, ApiError> {
    let data = service.list_food().await?;
    Ok(Json(FoodListResponse { success: true, data }))
}

#[utoipa::path(
    post,
    path = "/api/food/remove",
    request_body = RemoveFoodRequest,
    responses(
        (status = 200, description = "Food item removed", body = StatusResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Admin role required", body = ErrorResponse),
        (status = 404, description = "Food item not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("Bearer" = []))
)]
pub async fn remove_food(
    State(service): State<Arc<AppService>>,
    Json(req): Json<RemoveFoodRequest>,
) -> Result<Json<StatusResponse>, ApiError> {
    service.remove_food(&req.id).await?;
    Ok(Json(StatusResponse {
        success: true,
        message: "Food Removed".to_string(),
    }))
}

#[utoipa::path(
    post,
    path = "/api/order/place",
    request_body = PlaceOrderRequest,
    responses(
        (status = 200, description = "Order placed, checkout session created", body = PlaceOrderResponse),
        (status = 400, description = "Empty items or invalid total", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "User or food item not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("Bearer" = []))
)]
pub async fn place_order(
    State(service): State<Arc<AppService>>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<PlaceOrderRequest>,
) -> Result<Json<PlaceOrderResponse>, ApiError> {
    let (order, session_url) = service.place_order(&claims.sub, req.items, req.total_price).await?;
    Ok(Json(PlaceOrderResponse {
        success: true,
        order_id: order.id,
        session_url,
    }))
}

#[utoipa::path(
    post,
    path = "/api/order/verify",
    request_body = VerifyOrderRequest,
    responses(
        (status = 200, description = "Payment outcome recorded", body = StatusResponse),
        (status = 404, description = "Order not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn verify_order(
    State(service): State<Arc<AppService>>,
    Json(req): Json<VerifyOrderRequest>,
) -> Result<Json<StatusResponse>, ApiError> {
    service.verify_order(&req.order_id, req.payment_success).await?;
    // The envelope mirrors the payment outcome; a declined payment is not an error.
    Ok(Json(StatusResponse {
        success: req.payment_success,
        message: if req.payment_success { "Paid" } else { "Not Paid" }.to_string(),
    }))
}

#[utoipa::path(
    post,
    path = "/api/order/userorders",
    responses(
        (status = 200, description = "Orders owned by the token's user", body = OrderListResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("Bearer" = []))
)]
pub async fn user_orders(
    State(service): State<Arc<AppService>>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<OrderListResponse>, ApiError> {
    let data = service.user_orders(&claims.sub).await?;
    Ok(Json(OrderListResponse { success: true, data }))
}

#[utoipa::path(
    get,
    path = "/api/order/list",
    responses(
        (status = 200, description = "All orders", body = OrderListResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Admin role required", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("Bearer" = []))
)]
pub async fn list_orders(State(service): State<Arc<AppService>>) -> Result<Json<OrderListResponse>, ApiError> {
    let data = service.list_orders().await?;
    Ok(Json(OrderListResponse { success: true, data }))
}

#[utoipa::path(
    post,
    path = "/api/order/update",
    request_body = UpdateOrderStatusRequest,
    responses(
        (status = 200, description = "Order status updated", body = StatusResponse),
        (status = 400, description = "Unknown status value", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Admin role required", body = ErrorResponse),
        (status = 404, description = "Order not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("Bearer" = []))
)]
pub async fn update_order_status(
    State(service): State<Arc<AppService>>,
    Json(req): Json<UpdateOrderStatusRequest>,
) -> Result<Json<StatusResponse>, ApiError> {
    service.update_order_status(&req.order_id, &req.status).await?;
    Ok(Json(StatusResponse {
        success: true,
        message: "Status Updated".to_string(),
    }))
}

async fn read_text(field: axum::extract::multipart::Field<'_>, name: &str) -> Result<String, ApiError> {
    field.text().await.map_err(|e| malformed_field(name, &e.to_string()))
}

fn missing_field(field: &str) -> ApiError {
    ApiError(TiffinError::InvalidInput(
        field.to_string(),
        FieldError {
            field: field.to_string(),
            title: format!("Missing {}", field),
            description: format!("{} is required", field),
        },
    ))
}

fn malformed_field(field: &str, detail: &str) -> ApiError {
    ApiError(TiffinError::InvalidInput(
        field.to_string(),
        FieldError {
            field: field.to_string(),
            title: format!("Invalid {}", field),
            description: detail.to_string(),
        },
    ))
}
