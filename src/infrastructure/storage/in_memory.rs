use crate::core::errors::TiffinError;
use crate::core::models::{food::FoodItem, order::Order, user::User};
use crate::infrastructure::storage::Storage;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Document-store stand-in. Each collection is guarded by its own lock, so
/// atomicity is per single-document write, nothing broader.
#[derive(Clone)]
pub struct InMemoryStorage {
    users: Arc<RwLock<HashMap<String, User>>>,
    users_by_email: Arc<RwLock<HashMap<String, String>>>,
    foods: Arc<RwLock<HashMap<String, FoodItem>>>,
    orders: Arc<RwLock<HashMap<String, Order>>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        InMemoryStorage {
            users: Arc::new(RwLock::new(HashMap::new())),
            users_by_email: Arc::new(RwLock::new(HashMap::new())),
            foods: Arc::new(RwLock::new(HashMap::new())),
            orders: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for InMemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Storage for InMemoryStorage {
    async fn save_user(&self, user: User) -> Result<(), TiffinError> {
        let mut users_by_email = self.users_by_email.write().await;
        users_by_email.insert(user.email.clone(), user.id.clone());
        let mut users = self.users.write().await;
        users.insert(user.id.clone(), user);
        Ok(())
    }

    async fn get_user(&self, user_id: &str) -> Result<Option<User>, TiffinError> {
        let users = self.users.read().await;
        Ok(users.get(user_id).cloned())
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, TiffinError> {
        let users_by_email = self.users_by_email.read().await;
        let users = self.users.read().await;
        Ok(users_by_email.get(email).and_then(|id| users.get(id).cloned()))
    }

    async fn save_food(&self, food: FoodItem) -> Result<(), TiffinError> {
        let mut foods = self.foods.write().await;
        foods.insert(food.id.clone(), food);
        Ok(())
    }

    async fn get_food(&self, food_id: &str) -> Result<Option<FoodItem>, TiffinError> {
        let foods = self.foods.read().await;
        Ok(foods.get(food_id).cloned())
    }

    async fn list_food(&self) -> Result<Vec<FoodItem>, TiffinError> {
        let foods = self.foods.read().await;
        Ok(foods.values().cloned().collect())
    }

    async fn delete_food(&self, food_id: &str) -> Result<Option<FoodItem>, TiffinError> {
        let mut foods = self.foods.write().await;
        Ok(foods.remove(food_id))
    }

    async fn save_order(&self, order: Order) -> Result<(), TiffinError> {
        let mut orders = self.orders.write().await;
        orders.insert(order.id.clone(), order);
        Ok(())
    }

    async fn get_order(&self, order_id: &str) -> Result<Option<Order>, TiffinError> {
        let orders = self.orders.read().await;
        Ok(orders.get(order_id).cloned())
    }

    async fn delete_order(&self, order_id: &str) -> Result<(), TiffinError> {
        let mut orders = self.orders.write().await;
        orders.remove(order_id);
        Ok(())
    }

    async fn get_user_orders(&self, user_id: &str) -> Result<Vec<Order>, TiffinError> {
        let orders = self.orders.read().await;
        Ok(orders.values().filter(|o| o.user_id == user_id).cloned().collect())
    }

    async fn list_orders(&self) -> Result<Vec<Order>, TiffinError> {
        let orders = self.orders.read().await;
        Ok(orders.values().cloned().collect())
    }
}
