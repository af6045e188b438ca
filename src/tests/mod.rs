mod cart_tests;
mod food_tests;
mod user_tests;

use crate::core::services::TiffinService;
use crate::infrastructure::media::in_memory::InMemoryMediaStore;
use crate::infrastructure::payments::stub::StubPaymentGateway;
use crate::infrastructure::storage::in_memory::InMemoryStorage;

pub const TEST_SECRET: &str = "test-secret";
pub const ADMIN_EMAIL: &str = "admin@tiffin.test";

pub type TestService = TiffinService<InMemoryStorage, InMemoryMediaStore, StubPaymentGateway>;

pub fn create_test_service() -> TestService {
    create_test_service_with_media().0
}

/// Returns the media store alongside the service so tests can observe assets.
pub fn create_test_service_with_media() -> (TestService, InMemoryMediaStore) {
    let storage = InMemoryStorage::new();
    let media = InMemoryMediaStore::new();
    let payments = StubPaymentGateway::new("https://checkout.example.com".to_string());
    let service = TiffinService::new(
        storage,
        media.clone(),
        payments,
        TEST_SECRET.to_string(),
        ADMIN_EMAIL.to_string(),
    );
    (service, media)
}
