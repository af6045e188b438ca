use crate::core::errors::TiffinError;
use crate::core::models::{food::FoodItem, order::Order, user::User};
use async_trait::async_trait;

#[async_trait]
pub trait Storage: Send + Sync {
    async fn save_user(&self, user: User) -> Result<(), TiffinError>;
    async fn get_user(&self, user_id: &str) -> Result<Option<User>, TiffinError>;
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, TiffinError>;
    async fn save_food(&self, food: FoodItem) -> Result<(), TiffinError>;
    async fn get_food(&self, food_id: &str) -> Result<Option<FoodItem>, TiffinError>;
    async fn list_food(&self) -> Result<Vec<FoodItem>, TiffinError>;
    async fn delete_food(&self, food_id: &str) -> Result<Option<FoodItem>, TiffinError>;
    async fn save_order(&self, order: Order) -> Result<(), TiffinError>;
    async fn get_order(&self, order_id: &str) -> Result<Option<Order>, TiffinError>;
    async fn delete_order(&self, order_id: &str) -> Result<(), TiffinError>;
    async fn get_user_orders(&self, user_id: &str) -> Result<Vec<Order>, TiffinError>;
    async fn list_orders(&self) -> Result<Vec<Order>, TiffinError>;
}

pub mod in_memory;
