use crate::core::errors::TiffinError;
use crate::tests::{create_test_service, create_test_service_with_media};

const IMAGE: &[u8] = &[0x89, 0x50, 0x4e, 0x47];

#[tokio::test]
async fn test_add_food_stores_image() {
    let (service, media) = create_test_service_with_media();
    let food = service
        .add_food("Pizza", "Wood-fired margherita", 9.5, "Italian", "pizza.png", IMAGE)
        .await
        .unwrap();

    assert!(food.image.ends_with("-pizza.png"));
    assert!(media.contains(&food.image).await);
}

#[tokio::test]
async fn test_add_food_strips_client_path() {
    let service = create_test_service();
    let food = service
        .add_food("Pizza", "Margherita", 9.5, "Italian", "../../etc/pizza.png", IMAGE)
        .await
        .unwrap();
    assert!(food.image.ends_with("-pizza.png"));
    assert!(!food.image.contains('/'));
}

#[tokio::test]
async fn test_add_food_validation() {
    let service = create_test_service();

    let result = service.add_food("", "desc", 9.5, "Italian", "a.png", IMAGE).await;
    assert!(matches!(result, Err(TiffinError::InvalidInput(ref field, _)) if field == "name"));

    let result = service.add_food("Pizza", "desc", -1.0, "Italian", "a.png", IMAGE).await;
    assert!(matches!(result, Err(TiffinError::InvalidInput(ref field, _)) if field == "price"));

    let result = service.add_food("Pizza", "desc", f64::NAN, "Italian", "a.png", IMAGE).await;
    assert!(matches!(result, Err(TiffinError::InvalidInput(ref field, _)) if field == "price"));
}

#[tokio::test]
async fn test_list_food_insertion_order() {
    let service = create_test_service();
    let first = service
        .add_food("Pizza", "Margherita", 9.5, "Italian", "a.png", IMAGE)
        .await
        .unwrap();
    let second = service
        .add_food("Ramen", "Tonkotsu", 11.0, "Japanese", "b.png", IMAGE)
        .await
        .unwrap();

    let listed = service.list_food().await.unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].id, first.id);
    assert_eq!(listed[1].id, second.id);
}

#[tokio::test]
async fn test_remove_food_deletes_record_and_image() {
    let (service, media) = create_test_service_with_media();
    let food = service
        .add_food("Pizza", "Margherita", 9.5, "Italian", "a.png", IMAGE)
        .await
        .unwrap();

    service.remove_food(&food.id).await.unwrap();
    assert!(service.list_food().await.unwrap().is_empty());
    assert!(!media.contains(&food.image).await);
}

#[tokio::test]
async fn test_remove_food_unknown_id_leaves_catalog() {
    let service = create_test_service();
    service
        .add_food("Pizza", "Margherita", 9.5, "Italian", "a.png", IMAGE)
        .await
        .unwrap();

    let result = service.remove_food("missing").await;
    assert!(matches!(result, Err(TiffinError::FoodNotFound(_))));
    assert_eq!(service.list_food().await.unwrap().len(), 1);
}
