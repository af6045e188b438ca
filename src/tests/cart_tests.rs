use crate::core::errors::TiffinError;
use crate::tests::create_test_service;

#[tokio::test]
async fn test_add_to_cart_and_get() {
    let service = create_test_service();
    let (user, _) = service
        .register_user("Alice", "alice@example.com", "longpass1")
        .await
        .unwrap();

    service.add_to_cart(&user.id, "food-1").await.unwrap();
    let cart = service.get_cart(&user.id).await.unwrap();
    assert_eq!(cart.get("food-1"), Some(&1));

    service.add_to_cart(&user.id, "food-1").await.unwrap();
    let cart = service.get_cart(&user.id).await.unwrap();
    assert_eq!(cart.get("food-1"), Some(&2));
}

#[tokio::test]
async fn test_remove_from_cart_decrements() {
    let service = create_test_service();
    let (user, _) = service
        .register_user("Alice", "alice@example.com", "longpass1")
        .await
        .unwrap();

    service.add_to_cart(&user.id, "food-1").await.unwrap();
    service.add_to_cart(&user.id, "food-1").await.unwrap();
    service.remove_from_cart(&user.id, "food-1").await.unwrap();

    let cart = service.get_cart(&user.id).await.unwrap();
    assert_eq!(cart.get("food-1"), Some(&1));
}

#[tokio::test]
async fn test_remove_last_unit_deletes_key() {
    let service = create_test_service();
    let (user, _) = service
        .register_user("Alice", "alice@example.com", "longpass1")
        .await
        .unwrap();

    service.add_to_cart(&user.id, "food-1").await.unwrap();
    service.remove_from_cart(&user.id, "food-1").await.unwrap();

    let cart = service.get_cart(&user.id).await.unwrap();
    assert!(!cart.contains_key("food-1"));
}

#[tokio::test]
async fn test_remove_absent_item_is_noop() {
    let service = create_test_service();
    let (user, _) = service
        .register_user("Alice", "alice@example.com", "longpass1")
        .await
        .unwrap();

    service.remove_from_cart(&user.id, "never-added").await.unwrap();
    let cart = service.get_cart(&user.id).await.unwrap();
    assert!(cart.is_empty());
}

#[tokio::test]
async fn test_cart_unknown_user() {
    let service = create_test_service();
    assert!(matches!(
        service.add_to_cart("missing", "food-1").await,
        Err(TiffinError::UserNotFound(_))
    ));
    assert!(matches!(
        service.remove_from_cart("missing", "food-1").await,
        Err(TiffinError::UserNotFound(_))
    ));
    assert!(matches!(
        service.get_cart("missing").await,
        Err(TiffinError::UserNotFound(_))
    ));
}
