use crate::auth::jwt::JwtService;
use crate::core::errors::TiffinError;
use crate::core::models::user::UserRole;
use crate::tests::{ADMIN_EMAIL, TEST_SECRET, create_test_service};
use chrono::{Duration, Utc};

#[tokio::test]
async fn test_register_user() {
    let service = create_test_service();
    let (user, token) = service
        .register_user("Alice", "alice@example.com", "longpass1")
        .await
        .unwrap();

    assert_eq!(user.email, "alice@example.com");
    assert_eq!(user.role, UserRole::User);
    assert!(user.cart_data.is_empty());
    assert_ne!(user.password, "longpass1");

    let claims = service.validate_token(&token).unwrap();
    assert_eq!(claims.sub, user.id);
    assert_eq!(claims.role, UserRole::User);
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let service = create_test_service();
    service
        .register_user("Alice", "alice@example.com", "longpass1")
        .await
        .unwrap();

    let result = service.register_user("Alice Again", "alice@example.com", "longpass2").await;
    assert!(matches!(result, Err(TiffinError::EmailAlreadyRegistered(_))));
}

#[tokio::test]
async fn test_register_short_password_persists_nothing() {
    let service = create_test_service();
    let result = service.register_user("Bob", "bob@example.com", "short").await;
    assert!(matches!(result, Err(TiffinError::InvalidInput(ref field, _)) if field == "password"));

    // A valid retry must not hit the duplicate check.
    service.register_user("Bob", "bob@example.com", "longpass1").await.unwrap();
}

#[tokio::test]
async fn test_register_invalid_email() {
    let service = create_test_service();
    let result = service.register_user("Bob", "invalid", "longpass1").await;
    assert!(matches!(result, Err(TiffinError::InvalidEmail(_))));
}

#[tokio::test]
async fn test_login_roundtrip() {
    let service = create_test_service();
    let (user, _) = service
        .register_user("Alice", "alice@example.com", "longpass1")
        .await
        .unwrap();

    let token = service.login("alice@example.com", "longpass1").await.unwrap();
    let claims = service.validate_token(&token).unwrap();
    assert_eq!(claims.sub, user.id);
}

#[tokio::test]
async fn test_login_wrong_password() {
    let service = create_test_service();
    service
        .register_user("Alice", "alice@example.com", "longpass1")
        .await
        .unwrap();

    let result = service.login("alice@example.com", "wrongpass1").await;
    assert!(matches!(result, Err(TiffinError::InvalidCredentials)));
}

#[tokio::test]
async fn test_login_unknown_email() {
    let service = create_test_service();
    let result = service.login("nobody@example.com", "longpass1").await;
    assert!(matches!(result, Err(TiffinError::UserNotFound(_))));
}

#[tokio::test]
async fn test_admin_email_gets_admin_role() {
    let service = create_test_service();
    let (user, token) = service.register_user("Admin", ADMIN_EMAIL, "longpass1").await.unwrap();
    assert_eq!(user.role, UserRole::Admin);

    let claims = service.validate_token(&token).unwrap();
    assert_eq!(claims.role, UserRole::Admin);
}

#[test]
fn test_token_expiry_matches_ttl() {
    let jwt = JwtService::new(TEST_SECRET.to_string(), Duration::minutes(90));
    let token = jwt.generate_token("user-1", UserRole::User).unwrap();
    let claims = jwt.validate_token(&token).unwrap();

    assert_eq!(claims.sub, "user-1");
    assert_eq!(claims.role, UserRole::User);
    let expected = (Utc::now() + Duration::minutes(90)).timestamp() as usize;
    assert!(claims.exp.abs_diff(expected) <= 5);
}

#[tokio::test]
async fn test_session_token_expires_in_one_hour() {
    let service = create_test_service();
    let (_, token) = service
        .register_user("Alice", "alice@example.com", "longpass1")
        .await
        .unwrap();

    let claims = service.validate_token(&token).unwrap();
    let expected = (Utc::now() + Duration::hours(1)).timestamp() as usize;
    assert!(claims.exp.abs_diff(expected) <= 5);
}

#[tokio::test]
async fn test_validate_token_garbage() {
    let service = create_test_service();
    let result = service.validate_token("not-a-jwt");
    assert!(matches!(result, Err(TiffinError::Unauthorized(_))));
}
