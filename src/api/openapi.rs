use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::{
    api::models::{
        AddFoodForm, AuthResponse, CartItemRequest, CartResponse, ErrorResponse, FoodListResponse, LoginRequest,
        OrderListResponse, PlaceOrderRequest, PlaceOrderResponse, RegisterRequest, RemoveFoodRequest, StatusResponse,
        UpdateOrderStatusRequest, VerifyOrderRequest,
    },
    core::models::{
        food::FoodItem,
        order::{Order, OrderItem, OrderStatus},
        user::UserRole,
    },
};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "Bearer",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        super::handlers::register,
        super::handlers::login,
        super::handlers::add_to_cart,
        super::handlers::remove_from_cart,
        super::handlers::get_cart,
        super::handlers::add_food,
        super::handlers::list_food,
        super::handlers::remove_food,
        super::handlers::place_order,
        super::handlers::verify_order,
        super::handlers::user_orders,
        super::handlers::list_orders,
        super::handlers::update_order_status
    ),
    components(schemas(
        AddFoodForm,
        RegisterRequest,
        LoginRequest,
        CartItemRequest,
        RemoveFoodRequest,
        PlaceOrderRequest,
        VerifyOrderRequest,
        UpdateOrderStatusRequest,
        AuthResponse,
        StatusResponse,
        CartResponse,
        FoodListResponse,
        PlaceOrderResponse,
        OrderListResponse,
        ErrorResponse,
        FoodItem,
        Order,
        OrderItem,
        OrderStatus,
        UserRole
    )),
    modifiers(&SecurityAddon),
    info(
        title = "Tiffin API",
        description = "Food delivery backend: users, carts, catalog and orders",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;
