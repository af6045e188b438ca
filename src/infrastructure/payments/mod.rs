use crate::core::errors::TiffinError;
use crate::core::models::order::Order;
use async_trait::async_trait;

/// External capability boundary. A real integration would talk to a payment
/// provider; the shipped implementation is a deterministic stub.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn create_checkout_session(&self, order: &Order) -> Result<String, TiffinError>;
}

pub mod stub;
