use crate::core::errors::TiffinError;
use crate::core::models::order::Order;
use crate::infrastructure::payments::PaymentGateway;
use async_trait::async_trait;

#[derive(Clone)]
pub struct StubPaymentGateway {
    base_url: String,
}

impl StubPaymentGateway {
    pub fn new(base_url: String) -> Self {
        StubPaymentGateway { base_url }
    }
}

#[async_trait]
impl PaymentGateway for StubPaymentGateway {
    async fn create_checkout_session(&self, order: &Order) -> Result<String, TiffinError> {
        Ok(format!("{}/pay/{}", self.base_url.trim_end_matches('/'), order.id))
    }
}
