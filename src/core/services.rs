use crate::auth::jwt::{Claims, JwtService};
use crate::core::errors::{FieldError, TiffinError};
use crate::core::models::{
    food::FoodItem,
    order::{Order, OrderItem, OrderStatus},
    user::{User, UserRole},
};
use crate::infrastructure::media::MediaStore;
use crate::infrastructure::payments::PaymentGateway;
use crate::infrastructure::storage::Storage;
use chrono::{Duration, Utc};
use std::collections::HashMap;
use std::str::FromStr;
use tracing::{info, warn};
use uuid::Uuid;

pub struct TiffinService<S: Storage, M: MediaStore, P: PaymentGateway> {
    storage: S,
    media: M,
    payments: P,
    jwt_service: JwtService,
    admin_email: String,
}

impl<S: Storage, M: MediaStore, P: PaymentGateway> TiffinService<S, M, P> {
    pub fn new(storage: S, media: M, payments: P, jwt_secret: String, admin_email: String) -> Self {
        TiffinService {
            storage,
            media,
            payments,
            jwt_service: JwtService::new(jwt_secret, Duration::hours(1)),
            admin_email,
        }
    }

    pub fn validate_token(&self, token: &str) -> Result<Claims, TiffinError> {
        self.jwt_service.validate_token(token)
    }

    fn validate_string_input(&self, field: &str, value: &str, max_length: usize) -> Result<(), TiffinError> {
        if value.trim().is_empty() {
            return Err(TiffinError::InvalidInput(
                field.to_string(),
                FieldError {
                    field: field.to_string(),
                    title: format!("Invalid {}", field),
                    description: format!("{} cannot be empty", field),
                },
            ));
        }
        if value.len() > max_length {
            return Err(TiffinError::InvalidInput(
                field.to_string(),
                FieldError {
                    field: field.to_string(),
                    title: format!("{} Too Long", field),
                    description: format!("{} cannot exceed {} characters", field, max_length),
                },
            ));
        }
        Ok(())
    }

    fn validate_amount_input(&self, field: &str, amount: f64) -> Result<(), TiffinError> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(TiffinError::InvalidInput(
                field.to_string(),
                FieldError {
                    field: field.to_string(),
                    title: "Invalid Amount".to_string(),
                    description: "Amount must be a positive number".to_string(),
                },
            ));
        }
        Ok(())
    }

    async fn require_user(&self, user_id: &str) -> Result<User, TiffinError> {
        self.storage
            .get_user(user_id)
            .await?
            .ok_or_else(|| TiffinError::UserNotFound(user_id.to_string()))
    }

    // ---- users ----

    pub async fn register_user(&self, name: &str, email: &str, password: &str) -> Result<(User, String), TiffinError> {
        self.validate_string_input("name", name, 100)?;
        if email.is_empty() || !email.contains('@') || !email.contains('.') || email.len() < 5 {
            return Err(TiffinError::InvalidEmail(email.to_string()));
        }
        if password.len() < 8 {
            return Err(TiffinError::InvalidInput(
                "password".to_string(),
                FieldError {
                    field: "password".to_string(),
                    title: "Invalid password".to_string(),
                    description: "Password must be at least 8 characters long".to_string(),
                },
            ));
        }

        if self.storage.get_user_by_email(email).await?.is_some() {
            return Err(TiffinError::EmailAlreadyRegistered(email.to_string()));
        }

        let hashed = bcrypt::hash(password, bcrypt::DEFAULT_COST)
            .map_err(|e| TiffinError::InternalServerError(format!("Password hashing error: {}", e)))?;

        let role = if email == self.admin_email {
            UserRole::Admin
        } else {
            UserRole::User
        };

        let user = User {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            email: email.to_string(),
            password: hashed,
            role,
            cart_data: HashMap::new(),
        };
        self.storage.save_user(user.clone()).await?;

        let token = self.jwt_service.generate_token(&user.id, user.role.clone())?;
        info!(user_id = %user.id, role = %user.role, "User registered");
        Ok((user, token))
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<String, TiffinError> {
        let user = self
            .storage
            .get_user_by_email(email)
            .await?
            .ok_or_else(|| TiffinError::UserNotFound(email.to_string()))?;

        if bcrypt::verify(password, &user.password)
            .map_err(|e| TiffinError::InternalServerError(format!("Password verification error: {}", e)))?
        {
            info!(user_id = %user.id, "Login successful");
            self.jwt_service.generate_token(&user.id, user.role.clone())
        } else {
            warn!(user_id = %user.id, "Login rejected, password mismatch");
            Err(TiffinError::InvalidCredentials)
        }
    }

    // ---- cart ----

    pub async fn add_to_cart(&self, user_id: &str, item_id: &str) -> Result<(), TiffinError> {
        let mut user = self.require_user(user_id).await?;
        *user.cart_data.entry(item_id.to_string()).or_insert(0) += 1;
        self.storage.save_user(user).await
    }

    pub async fn remove_from_cart(&self, user_id: &str, item_id: &str) -> Result<(), TiffinError> {
        let mut user = self.require_user(user_id).await?;
        match user.cart_data.get(item_id).copied() {
            Some(quantity) if quantity > 1 => {
                user.cart_data.insert(item_id.to_string(), quantity - 1);
            }
            Some(_) => {
                user.cart_data.remove(item_id);
            }
            // Removing an item that isn't in the cart is a silent success.
            None => return Ok(()),
        }
        self.storage.save_user(user).await
    }

    pub async fn get_cart(&self, user_id: &str) -> Result<HashMap<String, u32>, TiffinError> {
        let user = self.require_user(user_id).await?;
        Ok(user.cart_data)
    }

    // ---- food catalog ----

    pub async fn add_food(
        &self,
        name: &str,
        description: &str,
        price: f64,
        category: &str,
        file_name: &str,
        image: &[u8],
    ) -> Result<FoodItem, TiffinError> {
        self.validate_string_input("name", name, 100)?;
        self.validate_string_input("description", description, 1000)?;
        self.validate_string_input("category", category, 100)?;
        self.validate_amount_input("price", price)?;

        let stored_name = stored_image_name(file_name);
        self.media.save(&stored_name, image).await?;

        let food = FoodItem {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            description: description.to_string(),
            price,
            category: category.to_string(),
            image: stored_name,
            created_at: Utc::now(),
        };
        self.storage.save_food(food.clone()).await?;
        info!(food_id = %food.id, name = %food.name, "Food item added");
        Ok(food)
    }

    pub async fn list_food(&self) -> Result<Vec<FoodItem>, TiffinError> {
        let mut foods = self.storage.list_food().await?;
        foods.sort_by_key(|f| f.created_at);
        Ok(foods)
    }

    pub async fn remove_food(&self, food_id: &str) -> Result<(), TiffinError> {
        let food = self
            .storage
            .delete_food(food_id)
            .await?
            .ok_or_else(|| TiffinError::FoodNotFound(food_id.to_string()))?;

        // Best effort only. The record is already gone.
        if let Err(e) = self.media.delete(&food.image).await {
            warn!(food_id = %food.id, image = %food.image, error = %e, "Failed to delete image asset");
        }
        info!(food_id = %food.id, "Food item removed");
        Ok(())
    }

    // ---- orders ----

    pub async fn place_order(
        &self,
        user_id: &str,
        items: Vec<OrderItem>,
        total_price: f64,
    ) -> Result<(Order, String), TiffinError> {
        let mut user = self.require_user(user_id).await?;

        if items.is_empty() {
            return Err(TiffinError::InvalidInput(
                "items".to_string(),
                FieldError {
                    field: "items".to_string(),
                    title: "Invalid items".to_string(),
                    description: "An order must contain at least one item".to_string(),
                },
            ));
        }
        if items.iter().any(|item| item.quantity == 0) {
            return Err(TiffinError::InvalidInput(
                "items".to_string(),
                FieldError {
                    field: "items".to_string(),
                    title: "Invalid items".to_string(),
                    description: "Item quantities must be at least 1".to_string(),
                },
            ));
        }
        self.validate_amount_input("totalPrice", total_price)?;

        let lookups = items
            .iter()
            .map(|item| {
                let food_id = item.food_id.clone();
                async move {
                    self.storage
                        .get_food(&food_id)
                        .await?
                        .ok_or(TiffinError::FoodNotFound(food_id))
                }
            })
            .collect::<Vec<_>>();
        futures::future::try_join_all(lookups).await?;

        let order = Order {
            id: Uuid::new_v4().to_string(),
            user_id: user.id.clone(),
            items,
            total_price,
            status: OrderStatus::FoodProcessing,
            payment: false,
            date: Utc::now(),
        };
        self.storage.save_order(order.clone()).await?;

        user.cart_data.clear();
        self.storage.save_user(user).await?;

        let session_url = self.payments.create_checkout_session(&order).await?;
        info!(order_id = %order.id, user_id = %order.user_id, total = order.total_price, "Order placed");
        Ok((order, session_url))
    }

    pub async fn verify_order(&self, order_id: &str, payment_success: bool) -> Result<(), TiffinError> {
        let mut order = self
            .storage
            .get_order(order_id)
            .await?
            .ok_or_else(|| TiffinError::OrderNotFound(order_id.to_string()))?;

        if payment_success {
            order.payment = true;
            self.storage.save_order(order).await?;
            info!(order_id = %order_id, "Order payment verified");
        } else {
            self.storage.delete_order(order_id).await?;
            warn!(order_id = %order_id, "Payment failed, order deleted");
        }
        Ok(())
    }

    pub async fn user_orders(&self, user_id: &str) -> Result<Vec<Order>, TiffinError> {
        let mut orders = self.storage.get_user_orders(user_id).await?;
        orders.sort_by_key(|o| o.date);
        Ok(orders)
    }

    pub async fn list_orders(&self) -> Result<Vec<Order>, TiffinError> {
        let mut orders = self.storage.list_orders().await?;
        orders.sort_by_key(|o| o.date);
        Ok(orders)
    }

    pub async fn update_order_status(&self, order_id: &str, status: &str) -> Result<(), TiffinError> {
        let status = OrderStatus::from_str(status)?;
        let mut order = self
            .storage
            .get_order(order_id)
            .await?
            .ok_or_else(|| TiffinError::OrderNotFound(order_id.to_string()))?;
        order.status = status;
        self.storage.save_order(order.clone()).await?;
        info!(order_id = %order_id, status = %order.status, "Order status updated");
        Ok(())
    }
}

/// Collision-resistant stored name: unix-millis prefix plus the client's file
/// name with any path components stripped.
fn stored_image_name(original: &str) -> String {
    let base = original
        .rsplit(['/', '\\'])
        .next()
        .filter(|s| !s.is_empty())
        .unwrap_or("upload");
    format!("{}-{}", Utc::now().timestamp_millis(), base)
}
